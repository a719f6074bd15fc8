//! `[redirects]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [redirects]
//! output = "out"              # Built site (relative to project root)
//!
//! [[redirects.rules]]
//! source = "/book/ints"
//! destination = "/book/integers"
//!
//! [[redirects.rules]]
//! source = "/tools"
//! destination = "/ecosystem/tools"
//! sub_paths = ["typescript", "vs", "jetbrains"]
//! ```
//!
//! Without any `[[redirects.rules]]` the built-in table is used.

use std::borrow::Cow;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::generator::redirect::{RedirectRule, builtin_rules};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RedirectsConfig {
    /// Output directory of the built site.
    pub output: PathBuf,

    /// Redirect table. Empty means the built-in table.
    pub rules: Vec<RedirectRule>,
}

impl Default for RedirectsConfig {
    fn default() -> Self {
        Self {
            output: "out".into(),
            rules: Vec::new(),
        }
    }
}

impl RedirectsConfig {
    /// Rules to generate: the configured table, or the built-in one.
    pub fn effective_rules(&self) -> Cow<'_, [RedirectRule]> {
        if self.rules.is_empty() {
            Cow::Owned(builtin_rules())
        } else {
            Cow::Borrowed(&self.rules)
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (i, rule) in self.effective_rules().iter().enumerate() {
            rule.validate(i, diag);
        }
    }
}
