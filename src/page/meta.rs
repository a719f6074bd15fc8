//! Page metadata read from front matter.

use serde::{Deserialize, Serialize};

/// Front matter fields the build steps care about.
///
/// Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    pub title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_meta_default() {
        let meta = PageMeta::default();
        assert!(meta.title.is_none());
    }

    #[test]
    fn test_page_meta_ignores_unknown_fields() {
        let json = r#"{"title": "Hello", "description": "ignored"}"#;
        let meta: PageMeta = serde_json::from_str(json).unwrap();
        assert_eq!(meta.title.as_deref(), Some("Hello"));
    }
}
