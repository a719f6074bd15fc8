//! Build-time generators for the documentation site.
//!
//! - **Redirects**: meta-refresh stubs at legacy paths (`out/**.html`)
//! - **Menu**: proposal navigation manifest (`_meta.json`)
//! - **Lang paths**: per-language page listing (`LangPath.json`)
//!
//! Each generator is a single synchronous pass over the filesystem and
//! rewrites its output in full on every run.

pub mod lang_paths;
pub mod menu;
pub mod redirect;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("content directory `{0}` doesn't exist")]
    MissingDir(PathBuf),

    #[error("failed to read `{0}`")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("invalid front matter in `{0}`")]
    FrontMatter(PathBuf, #[source] crate::page::FrontMatterError),

    #[error("`{0}` has no `title` in its front matter")]
    MissingTitle(PathBuf),

    #[error("failed to serialize manifest")]
    Json(#[from] serde_json::Error),

    #[error("failed to write `{0}`")]
    Write(PathBuf, #[source] std::io::Error),
}

/// Serialize to JSON, indented with four spaces when `pretty`.
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<Vec<u8>, ManifestError> {
    if !pretty {
        return Ok(serde_json::to_vec(value)?);
    }

    let mut buf = Vec::with_capacity(1024);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}

/// Write a manifest in one call.
pub fn write_json<T: Serialize>(value: &T, path: &Path, pretty: bool) -> Result<(), ManifestError> {
    let json = to_json(value, pretty)?;
    fs::write(path, json).map_err(|e| ManifestError::Write(path.to_path_buf(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_json_pretty_uses_four_spaces() {
        let value = json!({ "index": "Evolution Process" });
        let out = String::from_utf8(to_json(&value, true).unwrap()).unwrap();
        assert_eq!(out, "{\n    \"index\": \"Evolution Process\"\n}");
    }

    #[test]
    fn test_to_json_compact() {
        let value = json!({ "en": ["/index.en.mdx"] });
        let out = String::from_utf8(to_json(&value, false).unwrap()).unwrap();
        assert_eq!(out, r#"{"en":["/index.en.mdx"]}"#);
    }

    #[test]
    fn test_write_json_reports_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing/dir/out.json");
        let err = write_json(&json!({}), &path, true).unwrap_err();
        assert!(err.to_string().contains("out.json"));
    }
}
