pub mod label;
pub mod validate;

use anyhow::{Context, Result};
use gs1_forms::FormSnapshot;
use std::fs;
use std::path::Path;

/// Reads a JSON object of field values
pub fn read_snapshot(path: &Path) -> Result<FormSnapshot> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read form input: {:?}", path))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Form input {:?} is not a JSON object of strings", path))
}
