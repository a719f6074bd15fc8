//! `[lang_paths]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [lang_paths]
//! pages = "pages"               # Pages tree (relative to project root)
//! languages = ["en", "zh-CN"]   # Language tags, in manifest order
//! output = "LangPath.json"      # Manifest path (relative to project root)
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LangPathsConfig {
    pub pages: PathBuf,
    pub languages: Vec<String>,
    pub output: PathBuf,
}

impl Default for LangPathsConfig {
    fn default() -> Self {
        Self {
            pages: "pages".into(),
            languages: vec!["en".into(), "zh-CN".into()],
            output: "LangPath.json".into(),
        }
    }
}

impl LangPathsConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let field = FieldPath::new("lang_paths.languages");
        if self.languages.is_empty() {
            diag.warn(field, "no languages, manifest will be empty");
        }
        for lang in &self.languages {
            if lang.is_empty() || lang.contains(['.', '/']) {
                diag.error(field, format!("invalid language tag `{lang}`"));
            }
        }
    }
}
