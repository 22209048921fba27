//! YAML document codec for inference configurations.
//!
//! Wraps `serde_yaml` with the two extensions the separation configs rely
//! on: sequences tagged `!!python/tuple` are exposed as fixed-arity
//! groups, and documents are written back in block style with sequence
//! items indented beneath their key, keys kept in original order.

use std::fs;
use std::path::Path;

use serde_yaml::value::{Tag, TaggedValue};
use serde_yaml::{Mapping, Sequence, Value};

use crate::error::Result;

/// Canonical tag carried by tuple-valued sequences.
pub const TUPLE_TAG: &str = "tag:yaml.org,2002:python/tuple";

/// Load a YAML document from disk.
pub fn load_document(path: &Path) -> Result<Value> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&contents)?)
}

/// Write a YAML document back to disk through the indenting emitter.
pub fn write_document(path: &Path, document: &Value) -> Result<()> {
    fs::write(path, to_string(document))?;
    Ok(())
}

/// Build a tuple-tagged sequence value.
pub fn tuple(values: Vec<Value>) -> Value {
    Value::Tagged(Box::new(TaggedValue {
        tag: Tag::new(TUPLE_TAG),
        value: Value::Sequence(values),
    }))
}

/// View a value as a tuple-tagged sequence, if it is one.
pub fn as_tuple(value: &Value) -> Option<&Sequence> {
    match value {
        Value::Tagged(tagged) if is_tuple_tag(&tagged.tag) => match &tagged.value {
            Value::Sequence(items) => Some(items),
            _ => None,
        },
        _ => None,
    }
}

fn is_tuple_tag(tag: &Tag) -> bool {
    *tag == TUPLE_TAG || *tag == "python/tuple"
}

/// Render a document in block style.
///
/// Mapping keys keep their insertion order, sequences are indented one
/// level beneath their parent key, and flow style is never produced for
/// non-empty collections.
pub fn to_string(document: &Value) -> String {
    let mut out = String::new();
    match document {
        Value::Mapping(map) => emit_mapping(&mut out, map, 0),
        Value::Sequence(items) => emit_sequence(&mut out, items, 0),
        other => {
            out.push_str(&scalar_to_string(other));
            out.push('\n');
        }
    }
    out
}

fn emit_mapping(out: &mut String, map: &Mapping, indent: usize) {
    let pad = " ".repeat(indent);
    for (key, value) in map {
        let key_str = scalar_to_string(key);
        match value {
            Value::Mapping(child) if !child.is_empty() => {
                out.push_str(&format!("{}{}:\n", pad, key_str));
                emit_mapping(out, child, indent + 2);
            }
            Value::Mapping(_) => {
                out.push_str(&format!("{}{}: {{}}\n", pad, key_str));
            }
            Value::Sequence(items) if !items.is_empty() => {
                out.push_str(&format!("{}{}:\n", pad, key_str));
                emit_sequence(out, items, indent + 2);
            }
            Value::Sequence(_) => {
                out.push_str(&format!("{}{}: []\n", pad, key_str));
            }
            Value::Tagged(tagged) => {
                emit_tagged_entry(out, &key_str, tagged, indent);
            }
            scalar => {
                out.push_str(&format!("{}{}: {}\n", pad, key_str, scalar_to_string(scalar)));
            }
        }
    }
}

fn emit_tagged_entry(out: &mut String, key: &str, tagged: &TaggedValue, indent: usize) {
    let pad = " ".repeat(indent);
    let tag = render_tag(&tagged.tag);
    match &tagged.value {
        Value::Sequence(items) if !items.is_empty() => {
            out.push_str(&format!("{}{}: {}\n", pad, key, tag));
            emit_sequence(out, items, indent + 2);
        }
        Value::Sequence(_) => {
            out.push_str(&format!("{}{}: {} []\n", pad, key, tag));
        }
        Value::Mapping(child) if !child.is_empty() => {
            out.push_str(&format!("{}{}: {}\n", pad, key, tag));
            emit_mapping(out, child, indent + 2);
        }
        Value::Mapping(_) => {
            out.push_str(&format!("{}{}: {} {{}}\n", pad, key, tag));
        }
        scalar => {
            out.push_str(&format!("{}{}: {} {}\n", pad, key, tag, scalar_to_string(scalar)));
        }
    }
}

fn emit_sequence(out: &mut String, items: &Sequence, indent: usize) {
    let pad = " ".repeat(indent);
    for item in items {
        match item {
            Value::Mapping(child) if !child.is_empty() => {
                // First key rides on the dash line, the rest align under it.
                let mut block = String::new();
                emit_mapping(&mut block, child, indent + 2);
                out.push_str(&pad);
                out.push_str("- ");
                out.push_str(&block[indent + 2..]);
            }
            Value::Mapping(_) => {
                out.push_str(&format!("{}- {{}}\n", pad));
            }
            Value::Sequence(child) if !child.is_empty() => {
                out.push_str(&format!("{}-\n", pad));
                emit_sequence(out, child, indent + 2);
            }
            Value::Sequence(_) => {
                out.push_str(&format!("{}- []\n", pad));
            }
            Value::Tagged(tagged) => match &tagged.value {
                Value::Sequence(child) if !child.is_empty() => {
                    out.push_str(&format!("{}- {}\n", pad, render_tag(&tagged.tag)));
                    emit_sequence(out, child, indent + 2);
                }
                scalar => {
                    out.push_str(&format!(
                        "{}- {} {}\n",
                        pad,
                        render_tag(&tagged.tag),
                        scalar_to_string(scalar)
                    ));
                }
            },
            scalar => {
                out.push_str(&format!("{}- {}\n", pad, scalar_to_string(scalar)));
            }
        }
    }
}

fn render_tag(tag: &Tag) -> String {
    if is_tuple_tag(tag) {
        "!!python/tuple".to_string()
    } else {
        let raw = tag.to_string();
        if raw.starts_with('!') {
            raw
        } else {
            format!("!{}", raw)
        }
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quote_scalar(s),
        // Composite keys do not occur in these documents.
        _ => String::new(),
    }
}

/// Quote a string scalar when emitting it plain would change its type or
/// break the document structure.
fn quote_scalar(s: &str) -> String {
    if s.is_empty() {
        return "''".to_string();
    }

    let looks_numeric = s.parse::<i64>().is_ok() || s.parse::<f64>().is_ok();
    let looks_keyword = matches!(
        s.to_ascii_lowercase().as_str(),
        "true" | "false" | "null" | "~" | "yes" | "no" | "on" | "off"
    );
    let unsafe_start = s.starts_with(|c: char| "-?:,[]{}#&*!|>'\"%@` ".contains(c));
    let unsafe_body = s.contains(": ")
        || s.ends_with(':')
        || s.contains(" #")
        || s.contains('\n')
        || s.ends_with(' ');

    if looks_numeric || looks_keyword || unsafe_start || unsafe_body {
        format!("'{}'", s.replace('\'', "''"))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_emit_indents_sequences_under_keys() {
        let doc: Value = serde_yaml::from_str(
            "audio:\n  chunk_size: 100\ninstruments:\n- vocals\n- drums\n",
        )
        .unwrap();

        let rendered = to_string(&doc);

        assert_eq!(
            rendered,
            "audio:\n  chunk_size: 100\ninstruments:\n  - vocals\n  - drums\n"
        );
    }

    #[test]
    fn test_emit_preserves_key_order() {
        let doc: Value =
            serde_yaml::from_str("zeta: 1\nalpha: 2\nmiddle:\n  b: 1\n  a: 2\n").unwrap();

        let rendered = to_string(&doc);

        let zeta = rendered.find("zeta").unwrap();
        let alpha = rendered.find("alpha").unwrap();
        assert!(zeta < alpha);
        assert!(rendered.find("  b:").unwrap() < rendered.find("  a:").unwrap());
    }

    #[test]
    fn test_emit_quotes_ambiguous_strings() {
        let mut map = Mapping::new();
        map.insert(Value::from("version"), Value::from("1.0"));
        map.insert(Value::from("enabled"), Value::from("no"));
        map.insert(Value::from("name"), Value::from("plain"));

        let rendered = to_string(&Value::Mapping(map));

        assert!(rendered.contains("version: '1.0'"));
        assert!(rendered.contains("enabled: 'no'"));
        assert!(rendered.contains("name: plain"));
    }

    #[test]
    fn test_tuple_tag_round_trip() {
        let source = "model:\n  bands: !!python/tuple\n    - 500\n    - 1000\n";
        let doc: Value = serde_yaml::from_str(source).unwrap();

        let bands = &doc["model"]["bands"];
        let group = as_tuple(bands).expect("tuple tag should decode as a fixed group");
        assert_eq!(group.len(), 2);
        assert_eq!(group[0], Value::from(500));

        let rendered = to_string(&doc);
        assert!(rendered.contains("bands: !!python/tuple"));
        assert!(rendered.contains("    - 500"));

        // A re-parse of our own output must see the same group.
        let reparsed: Value = serde_yaml::from_str(&rendered).unwrap();
        assert_eq!(as_tuple(&reparsed["model"]["bands"]).unwrap().len(), 2);
    }

    #[test]
    fn test_tuple_constructor_matches_parsed_form() {
        let built = tuple(vec![Value::from(1), Value::from(2)]);
        assert_eq!(as_tuple(&built).unwrap().len(), 2);
    }

    #[test]
    fn test_document_file_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.yaml");
        fs::write(&path, "audio:\n  chunk_size: 352800\n").unwrap();

        let doc = load_document(&path).unwrap();
        write_document(&path, &doc).unwrap();

        let reloaded = load_document(&path).unwrap();
        assert_eq!(reloaded["audio"]["chunk_size"], Value::from(352800));
    }

    #[test]
    fn test_emit_sequence_of_mappings_compact() {
        let doc: Value =
            serde_yaml::from_str("stems:\n- name: vocals\n  gain: 1\n- name: drums\n  gain: 2\n")
                .unwrap();

        let rendered = to_string(&doc);

        assert!(rendered.contains("stems:\n  - name: vocals\n    gain: 1\n"));
        let reparsed: Value = serde_yaml::from_str(&rendered).unwrap();
        assert_eq!(reparsed, doc);
    }
}
