//! Filesystem utilities for licsync.
//!
//! Generated outputs (the license template and the license file) are written
//! with whole-file atomic replacement so a failed run never leaves a partially
//! written file behind.

pub mod atomic;

pub use atomic::atomic_write_file;
