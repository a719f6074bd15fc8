//! Embedded static resources.
//!
//! # Module Structure
//!
//! - `template` - Template types for typed variable injection
//! - `build` - Build-time templates (redirect.html, banner.txt)
//!
//! # Usage
//!
//! ```ignore
//! use embed::build::{REDIRECT_HTML, RedirectVars};
//!
//! let html = REDIRECT_HTML.render(&RedirectVars { canonical_url: "/new-url" });
//! ```

mod template;

pub use template::{Template, TemplateVars};

pub mod build {
    use super::{Template, TemplateVars};

    /// Marker that identifies a page written by the redirect generator.
    ///
    /// Must stay in sync with `build/redirect.html`.
    pub const REDIRECT_MARKER: &str = "<title>Redirecting...</title>";

    /// Variables for redirect.html template.
    pub struct RedirectVars<'a> {
        pub canonical_url: &'a str,
    }

    impl TemplateVars for RedirectVars<'_> {
        fn apply(&self, content: &str) -> String {
            content.replace("__CANONICAL_URL__", self.canonical_url)
        }
    }

    /// Redirect HTML template for legacy paths.
    pub const REDIRECT_HTML: Template<RedirectVars<'static>> =
        Template::new(include_str!("build/redirect.html"));

    /// Variables for banner.txt template.
    pub struct BannerVars<'a> {
        pub overrides_dir: &'a str,
    }

    impl TemplateVars for BannerVars<'_> {
        fn apply(&self, content: &str) -> String {
            content.replace("__OVERRIDES_DIR__", self.overrides_dir)
        }
    }

    /// "Don't edit" banner prepended to overridden config files.
    pub const BANNER: Template<BannerVars<'static>> =
        Template::new(include_str!("build/banner.txt"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_template() {
        let vars = build::RedirectVars {
            canonical_url: "/book/integers",
        };
        let html = build::REDIRECT_HTML.render(&vars);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<link rel="canonical" href="/book/integers" />"#));
        assert!(html.contains(r#"content="0; url=/book/integers""#));
        assert!(!html.contains("__CANONICAL_URL__"));
    }

    #[test]
    fn test_redirect_template_carries_marker() {
        let html = build::REDIRECT_HTML.render(&build::RedirectVars { canonical_url: "/" });
        assert!(html.contains(build::REDIRECT_MARKER));
        assert!(build::REDIRECT_HTML.content().contains(build::REDIRECT_MARKER));
    }

    #[test]
    fn test_banner_template() {
        let banner = build::BANNER.render(&build::BannerVars {
            overrides_dir: "configs-i18n",
        });
        assert!(banner.starts_with("/**\n"));
        assert!(banner.contains("WARNING: This is an auto-generated file!"));
        assert!(banner.contains("go to configs-i18n/ directory"));
        assert!(banner.ends_with("*/\n"));
    }
}
