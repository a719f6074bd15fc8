//! Redirect rules and their expansion into concrete instances.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

const RULES_FIELD: FieldPath = FieldPath::new("redirects.rules");

/// One legacy-URL mapping.
///
/// Without `sub_paths` a rule maps `source` to `destination` directly.
/// With `sub_paths` it expands into one redirect per segment:
/// `source/seg` -> `destination/{prefix}seg{suffix}`.
///
/// ```toml
/// [[redirects.rules]]
/// source = "/tools"
/// destination = "/ecosystem/tools"
/// sub_paths = ["typescript", "vs", "jetbrains"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectRule {
    pub source: String,
    pub destination: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_paths: Option<Vec<String>>,
    /// Inserted before each segment on the destination side.
    #[serde(default)]
    pub prefix: String,
    /// Appended to each segment on the destination side.
    #[serde(default)]
    pub suffix: String,
}

/// A fully resolved `(source, destination)` pair ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectInstance {
    pub source: String,
    pub destination: String,
}

impl RedirectRule {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            sub_paths: None,
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    pub fn with_sub_paths(mut self, segments: &[&str]) -> Self {
        self.sub_paths = Some(segments.iter().map(|s| (*s).to_string()).collect());
        self
    }

    #[cfg(test)]
    pub fn with_affixes(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self.suffix = suffix.into();
        self
    }

    /// Number of instances `expand` yields.
    pub fn expected_count(&self) -> usize {
        self.sub_paths.as_ref().map_or(1, Vec::len)
    }

    /// Expand into concrete redirects, in sub-path order.
    pub fn expand(&self) -> Vec<RedirectInstance> {
        match &self.sub_paths {
            None => vec![RedirectInstance {
                source: self.source.clone(),
                destination: self.destination.clone(),
            }],
            Some(segments) => segments
                .iter()
                .map(|seg| RedirectInstance {
                    source: format!("{}/{}", self.source, seg),
                    destination: format!(
                        "{}/{}{}{}",
                        self.destination, self.prefix, seg, self.suffix
                    ),
                })
                .collect(),
        }
    }

    /// Check the rule is well formed. `index` is the rule's position in
    /// the table, used to point the user at it.
    pub fn validate(&self, index: usize, diag: &mut ConfigDiagnostics) {
        let at = format!("rule #{index} (`{}`)", self.source);

        if !self.source.starts_with('/') || self.source == "/" {
            diag.error_with_hint(
                RULES_FIELD,
                format!("{at}: source must be a root-relative page path"),
                "e.g. `/book/ints`",
            );
        }
        if self.source.len() > 1 && self.source.ends_with('/') {
            diag.error(RULES_FIELD, format!("{at}: source must not end with `/`"));
        }
        if self.source.split('/').any(|part| part == "..") {
            diag.error(RULES_FIELD, format!("{at}: source must not contain `..`"));
        }
        if !self.destination.starts_with('/') {
            diag.error(
                RULES_FIELD,
                format!("{at}: destination must start with `/`"),
            );
        }
        if self.destination.contains(['"', '<', '>']) {
            diag.error(
                RULES_FIELD,
                format!("{at}: destination must not contain `\"`, `<` or `>`"),
            );
        }

        match &self.sub_paths {
            Some(segments) if segments.is_empty() => {
                diag.warn(RULES_FIELD, format!("{at}: empty sub_paths, expands to nothing"));
            }
            Some(segments) => {
                for seg in segments {
                    if seg.is_empty() || seg.split('/').any(|part| part.is_empty() || part == "..")
                    {
                        diag.error(RULES_FIELD, format!("{at}: invalid sub path `{seg}`"));
                    }
                }
            }
            None => {
                if !self.prefix.is_empty() || !self.suffix.is_empty() {
                    diag.warn(
                        RULES_FIELD,
                        format!("{at}: prefix/suffix ignored without sub_paths"),
                    );
                }
            }
        }
    }
}

/// Sum of all rule expansions.
pub fn expected_total(rules: &[RedirectRule]) -> usize {
    rules.iter().map(RedirectRule::expected_count).sum()
}
