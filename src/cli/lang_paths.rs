//! `docs-kit lang-paths` - per-language page listing.

use anyhow::{Context, Result};

use crate::config::DocsConfig;
use crate::generator::lang_paths::{LangPathManifest, build_lang_paths};
use crate::log;
use crate::utils::plural_count;

pub fn generate_lang_paths(config: &DocsConfig) -> Result<LangPathManifest> {
    let lang_paths = &config.lang_paths;
    let manifest = build_lang_paths(lang_paths).with_context(|| {
        format!(
            "listing language pages in {}",
            config.root_relative(&lang_paths.pages).display()
        )
    })?;

    for (lang, paths) in manifest.langs() {
        log!("lang-paths"; "{}: {}", lang, plural_count(paths.len(), "page"));
    }
    log!(
        "lang-paths";
        "wrote {} ({})",
        config.root_relative(&lang_paths.output).display(),
        plural_count(manifest.total(), "page")
    );
    Ok(manifest)
}
