//! Filesystem module.
//!
//! Provides:
//! - Filename shortening and sanitization

pub mod naming;

pub use naming::{clean_filename, shorten_filename, DEFAULT_MAX_STEM_LENGTH};
