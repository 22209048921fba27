//! Configuration module for inference YAML documents.
//!
//! This module handles:
//! - Decoding and encoding with the tuple tag extension
//! - Patching windowing parameters into existing configs

pub mod patch;
pub mod yaml;

pub use patch::conf_edit;
pub use yaml::{as_tuple, tuple, TUPLE_TAG};
