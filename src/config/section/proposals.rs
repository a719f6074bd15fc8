//! `[proposals]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [proposals]
//! dir = "pages/language/evolution"   # Proposal documents (relative to project root)
//! prefix = "OTP-"                    # File name prefix of a proposal
//! extension = "mdx"                  # File extension of a proposal
//! output = "_meta.json"              # Manifest file name, written inside `dir`
//! index_label = "Evolution Process"  # Label of the leading `index` entry
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProposalsConfig {
    pub dir: PathBuf,
    pub prefix: String,
    pub extension: String,
    pub output: PathBuf,
    pub index_label: String,
}

impl Default for ProposalsConfig {
    fn default() -> Self {
        Self {
            dir: "pages/language/evolution".into(),
            prefix: "OTP-".into(),
            extension: "mdx".into(),
            output: "_meta.json".into(),
            index_label: "Evolution Process".into(),
        }
    }
}

impl ProposalsConfig {
    /// Manifest path, inside the proposals directory.
    pub fn output_path(&self) -> PathBuf {
        self.dir.join(&self.output)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.prefix.is_empty() {
            diag.error_with_hint(
                FieldPath::new("proposals.prefix"),
                "must not be empty",
                "e.g. `OTP-`",
            );
        }
        if self.extension.is_empty() || self.extension.starts_with('.') {
            diag.error_with_hint(
                FieldPath::new("proposals.extension"),
                "must be a bare extension",
                "e.g. `mdx`, without the leading dot",
            );
        }
        if self.output.file_name().is_none() {
            diag.error(FieldPath::new("proposals.output"), "must be a file name");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let mut diag = ConfigDiagnostics::new();
        ProposalsConfig::default().validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_dotted_extension_rejected() {
        let mut diag = ConfigDiagnostics::new();
        ProposalsConfig {
            extension: ".mdx".into(),
            prefix: String::new(),
            ..ProposalsConfig::default()
        }
        .validate(&mut diag);
        assert_eq!(diag.len(), 2);
    }
}
