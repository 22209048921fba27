//! Inference configuration patching.

use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::config::yaml;
use crate::error::{Error, Result};

/// Patch windowing parameters into an inference configuration file.
///
/// `chunk_size` and `overlap` are written unconditionally and a batch size
/// of exactly 1 is promoted to 2. When the document has no top-level
/// `use_amp` key, `training.use_amp` is forced on; the check is against
/// the top level even though the flag lives under `training`, matching the
/// historical behavior of these configs.
pub fn conf_edit(config_path: &Path, chunk_size: u64, overlap: u64) -> Result<()> {
    let mut document = yaml::load_document(config_path)?;
    let root = document.as_mapping_mut().ok_or_else(|| {
        Error::Config(format!("{} is not a YAML mapping", config_path.display()))
    })?;

    if !root.contains_key("use_amp") {
        section_mut(root, "training")?.insert(Value::from("use_amp"), Value::from(true));
    }

    section_mut(root, "audio")?.insert(Value::from("chunk_size"), Value::from(chunk_size));

    let inference = section_mut(root, "inference")?;
    inference.insert(Value::from("num_overlap"), Value::from(overlap));
    let batch_is_one = match inference.get("batch_size") {
        Some(Value::Number(n)) => n.as_u64() == Some(1),
        Some(_) => false,
        None => {
            return Err(Error::MissingConfig(format!(
                "inference.batch_size in {}",
                config_path.display()
            )));
        }
    };
    if batch_is_one {
        inference.insert(Value::from("batch_size"), Value::from(2u64));
    }

    tracing::info!(
        "Using custom overlap and chunk_size: overlap={}, chunk_size={}",
        overlap,
        chunk_size
    );
    yaml::write_document(config_path, &document)
}

fn section_mut<'a>(root: &'a mut Mapping, key: &str) -> Result<&'a mut Mapping> {
    root.get_mut(key)
        .and_then(Value::as_mapping_mut)
        .ok_or_else(|| Error::MissingConfig(format!("'{}' section", key)))
}
