use std::path::Path;

use serde_json::Value;

use crate::foundation::error::{MeshError, MeshResult};

/// Load a configuration document as a generic value tree.
///
/// `.json` files are parsed as JSON, anything else as YAML. A file that does not exist
/// loads as `null` (no threads); a file that exists but cannot be read or parsed is an
/// error.
#[tracing::instrument]
pub fn load_config(path: &Path) -> MeshResult<Value> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("config file not found; rendering without threads");
            return Ok(Value::Null);
        }
        Err(err) => {
            return Err(MeshError::config(format!(
                "read '{}': {err}",
                path.display()
            )));
        }
    };

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    let parsed = if is_json {
        parse_json(&text)
    } else {
        parse_yaml(&text)
    };
    parsed.map_err(|err| match err {
        MeshError::Config(msg) => MeshError::config(format!("'{}': {msg}", path.display())),
        other => other,
    })
}

/// Parse a JSON configuration document.
pub fn parse_json(text: &str) -> MeshResult<Value> {
    serde_json::from_str(text).map_err(|e| MeshError::config(format!("parse JSON: {e}")))
}

/// Parse a YAML configuration document. An empty document is `null`.
pub fn parse_yaml(text: &str) -> MeshResult<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_yaml::from_str(text).map_err(|e| MeshError::config(format!("parse YAML: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/config/load.rs"]
mod tests;
