//! JSON encoding and decoding for hierarchy records.
//!
//! Decoding is the only way to build a record from untrusted input, so it is
//! where missing or mistyped fields are rejected. Child collections are
//! required on input: `"steps": []` is accepted, an absent `steps` is not.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ModelError;

/// Output layout for encoded records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    Compact,
    #[default]
    Pretty,
}

/// Decode a record of any kind from JSON text.
pub fn from_json<T: DeserializeOwned>(input: &str) -> Result<T, ModelError> {
    serde_json::from_str(input).map_err(ModelError::from)
}

/// Decode a record from an already-parsed JSON value.
pub fn from_value<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, ModelError> {
    // Any failure here is a shape mismatch; the text was already parsed.
    serde_json::from_value(value).map_err(ModelError::Validation)
}

pub fn to_json<T: Serialize>(record: &T, format: Format) -> Result<String, ModelError> {
    let encoded = match format {
        Format::Compact => serde_json::to_string(record),
        Format::Pretty => serde_json::to_string_pretty(record),
    };
    encoded.map_err(ModelError::Encode)
}

pub fn read_file<T: DeserializeOwned>(path: &Path) -> Result<T, ModelError> {
    let content = fs::read_to_string(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Decoding {} ({} bytes)", path.display(), content.len());
    from_json(&content)
}

pub fn write_file<T: Serialize>(path: &Path, record: &T, format: Format) -> Result<(), ModelError> {
    let mut content = to_json(record, format)?;
    content.push('\n');
    fs::write(path, content).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })
}
