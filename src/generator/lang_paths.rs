//! Per-language page listing for the i18n build.
//!
//! Walks the pages tree and lists, for each configured language, every
//! file whose name carries that language tag:
//!
//! ```text
//! pages/
//! ├── index.en.mdx          -> en
//! ├── index.zh-CN.mdx       -> zh-CN
//! └── book/
//!     └── types.zh-CN.mdx   -> zh-CN
//!
//! {"en":["/index.en.mdx"],"zh-CN":["/book/types.zh-CN.mdx","/index.zh-CN.mdx"]}
//! ```
//!
//! Directories with a `.` in their name are not descended into.

use std::path::{Component, Path, PathBuf};

use jwalk::WalkDir;
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::{ManifestError, write_json};
use crate::config::LangPathsConfig;

/// Ordered `lang -> [path]` map, one key per configured language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangPathManifest {
    langs: Vec<(String, Vec<String>)>,
}

impl LangPathManifest {
    #[cfg(test)]
    pub fn paths(&self, lang: &str) -> Option<&[String]> {
        self.langs
            .iter()
            .find(|(l, _)| l == lang)
            .map(|(_, paths)| paths.as_slice())
    }

    pub fn langs(&self) -> &[(String, Vec<String>)] {
        &self.langs
    }

    pub fn total(&self) -> usize {
        self.langs.iter().map(|(_, paths)| paths.len()).sum()
    }
}

impl Serialize for LangPathManifest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.langs.len()))?;
        for (lang, paths) in &self.langs {
            map.serialize_entry(lang, paths)?;
        }
        map.end()
    }
}

/// Collect tagged page paths under `pages_dir`.
pub fn collect_lang_paths(
    pages_dir: &Path,
    languages: &[String],
) -> Result<LangPathManifest, ManifestError> {
    if !pages_dir.is_dir() {
        return Err(ManifestError::MissingDir(pages_dir.to_path_buf()));
    }

    let walk_error = |e: jwalk::Error| {
        let path = e.path().unwrap_or(pages_dir).to_path_buf();
        ManifestError::Read(path, e.into())
    };

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(pages_dir) {
        let mut entry = entry.map_err(walk_error)?;
        // an unreadable directory is reported on its own entry
        if let Some(err) = entry.read_children_error.take() {
            return Err(walk_error(err));
        }
        if entry.file_type().is_file() {
            files.push(entry.path());
        }
    }
    files.sort();

    let urls: Vec<String> = files
        .iter()
        .filter_map(|path| page_url(pages_dir, path))
        .collect();

    let langs = languages
        .iter()
        .map(|lang| {
            let tag = format!(".{lang}.");
            let paths = urls
                .iter()
                .filter(|url| file_name(url).contains(&tag))
                .cloned()
                .collect();
            (lang.clone(), paths)
        })
        .collect();

    Ok(LangPathManifest { langs })
}

/// Collect and write the manifest. Returns what was written.
pub fn build_lang_paths(config: &LangPathsConfig) -> Result<LangPathManifest, ManifestError> {
    let manifest = collect_lang_paths(&config.pages, &config.languages)?;
    write_json(&manifest, &config.output, false)?;
    Ok(manifest)
}

/// `{pages}/book/types.en.mdx` -> `/book/types.en.mdx`
///
/// `None` for files without a `.` in their name, files inside dotted
/// directories, and non UTF-8 paths.
fn page_url(pages_dir: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(pages_dir).ok()?;
    let mut parts = Vec::new();
    for component in rel.components() {
        let Component::Normal(part) = component else {
            return None;
        };
        parts.push(part.to_str()?);
    }

    let (name, dirs) = parts.split_last()?;
    if !name.contains('.') || dirs.iter().any(|dir| dir.contains('.')) {
        return None;
    }

    Some(format!("/{}", parts.join("/")))
}

fn file_name(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}
