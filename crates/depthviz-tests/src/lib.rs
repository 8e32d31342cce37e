//! Integration tests for the depthviz crates.
//!
//! These tests exercise the full pipeline across crate boundaries:
//! synthetic frames in, RGB8 frames out, with sensor calibration
//! observed through a counting mock.
