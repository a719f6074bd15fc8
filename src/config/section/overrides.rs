//! `[overrides]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [overrides]
//! dir = "configs-i18n"    # Override sources (relative to project root)
//!
//! [overrides.profiles]
//! i18n = [
//!     { root = "next.config.js", target = "i18n-next.config.js" },
//!     { root = "theme.config.jsx", target = "i18n-theme.config.jsx" },
//! ]
//! default = [
//!     { root = "next.config.js", target = "next.config.js" },
//!     { root = "theme.config.jsx", target = "theme.config.jsx" },
//! ]
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::hooks::ConfigOverride;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OverridesConfig {
    pub dir: PathBuf,
    pub profiles: BTreeMap<String, Vec<ConfigOverride>>,
}

impl Default for OverridesConfig {
    fn default() -> Self {
        let profiles = BTreeMap::from([
            (
                "i18n".to_string(),
                vec![
                    ConfigOverride::new("next.config.js", "i18n-next.config.js"),
                    ConfigOverride::new("theme.config.jsx", "i18n-theme.config.jsx"),
                ],
            ),
            (
                "default".to_string(),
                vec![
                    ConfigOverride::new("next.config.js", "next.config.js"),
                    ConfigOverride::new("theme.config.jsx", "theme.config.jsx"),
                ],
            ),
        ]);
        Self {
            dir: "configs-i18n".into(),
            profiles,
        }
    }
}

impl OverridesConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let field = FieldPath::new("overrides.profiles");
        for (name, list) in &self.profiles {
            for conf in list {
                if conf.root.as_os_str().is_empty() || conf.target.as_os_str().is_empty() {
                    diag.error(field, format!("profile `{name}` has an empty `root` or `target`"));
                }
                if conf.root.is_absolute() {
                    diag.error_with_hint(
                        field,
                        format!("profile `{name}`: `{}` must be relative", conf.root.display()),
                        "paths are resolved against the project root",
                    );
                }
            }
        }
    }
}
