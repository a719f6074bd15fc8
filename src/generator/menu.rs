//! Navigation manifest for proposal documents.
//!
//! Scans the proposals directory (non-recursive) and writes `_meta.json`,
//! which the docs framework reads to render the section menu.
//!
//! ```json
//! {
//!     "index": "Evolution Process",
//!     "OTP-001": "Queries",
//!     "OTP-002": "Contract ABI"
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::{ManifestError, write_json};
use crate::config::ProposalsConfig;
use crate::debug;
use crate::page::MetaExtractor;

/// Leading manifest key, the section's overview page.
pub const INDEX_KEY: &str = "index";

static NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid regex"));

/// A proposal file with its front matter title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalDocument {
    /// File name without extension, e.g. `OTP-001`.
    pub id: String,
    pub title: String,
    pub path: PathBuf,
}

impl ProposalDocument {
    /// Sort key: first number in the id, then the id itself.
    fn sort_key(&self) -> (u64, &str) {
        let number = NUMBER
            .find(&self.id)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(u64::MAX);
        (number, &self.id)
    }
}

/// Ordered `id -> title` map with the overview entry first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationManifest {
    entries: Vec<(String, String)>,
}

impl NavigationManifest {
    pub fn new(index_label: &str, docs: &[ProposalDocument]) -> Self {
        let mut entries = Vec::with_capacity(docs.len() + 1);
        entries.push((INDEX_KEY.to_string(), index_label.to_string()));
        entries.extend(docs.iter().map(|doc| (doc.id.clone(), doc.title.clone())));
        Self { entries }
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Number of proposal entries (the index entry not included).
    pub fn proposal_count(&self) -> usize {
        self.entries.len() - 1
    }
}

impl Serialize for NavigationManifest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Collect proposal documents in proposal-number order.
pub fn collect_proposals(config: &ProposalsConfig) -> Result<Vec<ProposalDocument>, ManifestError> {
    let dir = &config.dir;
    if !dir.is_dir() {
        return Err(ManifestError::MissingDir(dir.clone()));
    }

    let suffix = format!(".{}", config.extension);
    let entries = fs::read_dir(dir).map_err(|e| ManifestError::Read(dir.clone(), e))?;

    let mut docs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ManifestError::Read(dir.clone(), e))?;
        let path = entry.path();
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        if !name.starts_with(&config.prefix) || !name.ends_with(&suffix) || !path.is_file() {
            continue;
        }

        let id = name[..name.len() - suffix.len()].to_string();
        let title = read_title(&path)?;
        let doc = ProposalDocument { id, title, path };
        debug!("proposals"; "{}: {} -> {}", doc.path.display(), doc.id, doc.title);
        docs.push(doc);
    }

    docs.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    Ok(docs)
}

/// Read the required `title` field from a document's front matter.
pub fn read_title(path: &Path) -> Result<String, ManifestError> {
    let content =
        fs::read_to_string(path).map_err(|e| ManifestError::Read(path.to_path_buf(), e))?;

    MetaExtractor
        .extract_frontmatter(&content)
        .map_err(|e| ManifestError::FrontMatter(path.to_path_buf(), e))?
        .and_then(|(meta, _)| meta.title)
        .ok_or_else(|| ManifestError::MissingTitle(path.to_path_buf()))
}

/// Scan proposals and write the manifest. Returns what was written.
pub fn build_menu(config: &ProposalsConfig) -> Result<NavigationManifest, ManifestError> {
    let docs = collect_proposals(config)?;
    let manifest = NavigationManifest::new(&config.index_label, &docs);
    write_json(&manifest, &config.output_path(), true)?;
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_for(dir: &Path) -> ProposalsConfig {
        ProposalsConfig {
            dir: dir.to_path_buf(),
            ..ProposalsConfig::default()
        }
    }

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_manifest_filters_and_orders() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "OTP-003.mdx", "---\ntitle: Third\n---\n");
        write(dir.path(), "OTP-001.mdx", "---\ntitle: First\n---\nbody");
        write(dir.path(), "notes.txt", "---\ntitle: Notes\n---\n");
        write(dir.path(), "OTP-002.md", "---\ntitle: Wrong extension\n---\n");
        write(dir.path(), "overview.mdx", "---\ntitle: Overview\n---\n");

        let manifest = build_menu(&config_for(dir.path())).unwrap();
        let keys: Vec<_> = manifest.entries().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["index", "OTP-001", "OTP-003"]);
        assert_eq!(manifest.proposal_count(), 2);

        let written = fs::read_to_string(dir.path().join("_meta.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        let object = value.as_object().unwrap();
        let keys: Vec<_> = object.keys().map(String::as_str).collect();
        assert_eq!(keys, ["index", "OTP-001", "OTP-003"]);
        assert_eq!(object["index"], "Evolution Process");
        assert_eq!(object["OTP-001"], "First");
        assert_eq!(object["OTP-003"], "Third");
        assert!(written.contains("\n    \"OTP-001\": \"First\""));
    }

    #[test]
    fn test_numeric_order_not_lexical() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "OTP-10.mdx", "---\ntitle: Ten\n---\n");
        write(dir.path(), "OTP-9.mdx", "---\ntitle: Nine\n---\n");

        let docs = collect_proposals(&config_for(dir.path())).unwrap();
        let ids: Vec<_> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["OTP-9", "OTP-10"]);
        assert_eq!(docs[0].path, dir.path().join("OTP-9.mdx"));
    }

    #[test]
    fn test_missing_title_is_an_error() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "OTP-001.mdx", "---\nauthor: someone\n---\n");

        let err = build_menu(&config_for(dir.path())).unwrap_err();
        assert!(matches!(err, ManifestError::MissingTitle(_)));
        assert!(err.to_string().contains("OTP-001.mdx"));
        assert!(!dir.path().join("_meta.json").exists());
    }

    #[test]
    fn test_no_frontmatter_is_missing_title() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "OTP-004.mdx", "# Just a heading");
        let err = collect_proposals(&config_for(dir.path())).unwrap_err();
        assert!(matches!(err, ManifestError::MissingTitle(_)));
    }

    #[test]
    fn test_missing_dir() {
        let dir = TempDir::new().unwrap();
        let err = collect_proposals(&config_for(&dir.path().join("evolution"))).unwrap_err();
        assert!(matches!(err, ManifestError::MissingDir(_)));
    }

    #[test]
    fn test_empty_dir_yields_index_only() {
        let dir = TempDir::new().unwrap();
        let manifest = build_menu(&config_for(dir.path())).unwrap();
        assert_eq!(
            manifest.entries(),
            &[("index".to_string(), "Evolution Process".to_string())]
        );
        assert_eq!(manifest.proposal_count(), 0);
    }

    #[test]
    fn test_rerun_regenerates() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "OTP-001.mdx", "---\ntitle: First\n---\n");
        let config = config_for(dir.path());
        build_menu(&config).unwrap();

        write(dir.path(), "OTP-001.mdx", "---\ntitle: Renamed\n---\n");
        build_menu(&config).unwrap();
        let written = fs::read_to_string(config.output_path()).unwrap();
        assert!(written.contains("Renamed"));
        assert!(!written.contains("\"First\""));
    }
}
