//! Writing merge inputs to disk.

use std::fs;

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use treemerge::Value;

/// Serialise `value` as pretty JSON into `dir/name`.
///
/// # Errors
///
/// Returns an error if the value cannot be represented as JSON or the file
/// cannot be written.
pub fn write_json(dir: &Utf8Path, name: &str, value: &Value) -> Result<Utf8PathBuf> {
    let path = dir.join(name);
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("serialise {name} as JSON"))?;
    fs::write(&path, json).with_context(|| format!("write {path}"))?;
    Ok(path)
}

/// Write raw `contents` into `dir/name`.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_text(dir: &Utf8Path, name: &str, contents: &str) -> Result<Utf8PathBuf> {
    let path = dir.join(name);
    fs::write(&path, contents).with_context(|| format!("write {path}"))?;
    Ok(path)
}

/// Parse a JSON document into a [`Value`].
///
/// # Errors
///
/// Returns an error if `text` is not valid JSON.
pub fn parse_json(text: &str) -> Result<Value> {
    let json: serde_json::Value = serde_json::from_str(text).context("parse JSON output")?;
    Ok(Value::from(json))
}
