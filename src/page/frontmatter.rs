//! Front matter extraction from YAML (`---`) or TOML (`+++`) blocks.

use thiserror::Error;

use super::PageMeta;

#[derive(Debug, Error)]
pub enum FrontMatterError {
    #[error("invalid YAML front matter: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid TOML front matter: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Metadata extractor for `.md` / `.mdx` content files
pub struct MetaExtractor;

impl MetaExtractor {
    /// Extract front matter and return (metadata, body).
    ///
    /// Returns `None` when the file has no front matter block.
    pub fn extract_frontmatter<'a>(
        &self,
        content: &'a str,
    ) -> Result<Option<(PageMeta, &'a str)>, FrontMatterError> {
        match Self::detect_frontmatter(content) {
            Some((fm, body, is_toml)) => {
                let meta = if fm.is_empty() {
                    PageMeta::default()
                } else if is_toml {
                    toml::from_str(fm)?
                } else {
                    serde_yaml::from_str(fm)?
                };
                Ok(Some((meta, body)))
            }
            None => Ok(None),
        }
    }

    /// Detect and extract front matter.
    /// Returns `(frontmatter, body, is_toml)` if found.
    ///
    /// The opening fence must be alone on its line.
    fn detect_frontmatter(content: &str) -> Option<(&str, &str, bool)> {
        let trimmed = content.trim_start_matches('\u{feff}').trim_start();

        for (fence, is_toml) in [("---", false), ("+++", true)] {
            if let Some(rest) = trimmed.strip_prefix(fence)
                && (rest.starts_with('\n') || rest.starts_with("\r\n"))
                && let Some(end) = rest.find(&format!("\n{fence}"))
            {
                let fm = rest[..end].trim();
                let body = rest[end + 1 + fence.len()..].trim_start_matches(['\r', '\n']);
                return Some((fm, body, is_toml));
            }
        }

        None
    }
}
