//! `docs-kit redirects` - write legacy URL redirect pages.

use anyhow::{Context, Result};

use crate::config::DocsConfig;
use crate::generator::redirect::{RedirectReport, RedirectWriter};
use crate::log;
use crate::utils::plural_count;

/// Generate redirect pages into the built site.
pub fn generate_redirects(config: &DocsConfig, dry_run: bool) -> Result<RedirectReport> {
    let output = &config.redirects.output;
    let writer = RedirectWriter::new(output)?.dry_run(dry_run);
    let rules = config.redirects.effective_rules();

    let report = writer
        .generate(&rules)
        .with_context(|| format!("generating redirects in {}", output.display()))?;

    let verb = if dry_run { "would generate" } else { "actually generated" };
    log!(
        "redirects";
        "finished, {}: {}{}",
        verb,
        report.generated,
        if report.skipped.is_empty() {
            String::new()
        } else {
            format!(" ({} skipped)", plural_count(report.skipped.len(), "real page"))
        }
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::redirect::RedirectRule;
    use std::fs;
    use tempfile::TempDir;

    fn config_in(dir: &std::path::Path) -> DocsConfig {
        let mut config = DocsConfig::default();
        config.set_root(dir);
        config.redirects.output = dir.join("out");
        config
    }

    #[test]
    fn test_missing_output_fails_fast() {
        let dir = TempDir::new().unwrap();
        let config = config_in(dir.path());
        let err = generate_redirects(&config, false).unwrap_err();
        assert!(err.to_string().contains("doesn't exist"));
    }

    #[test]
    fn test_generates_configured_rules() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(dir.path());
        fs::create_dir_all(&config.redirects.output).unwrap();
        config.redirects.rules = vec![RedirectRule::new("/book/ints", "/book/integers")];

        let report = generate_redirects(&config, false).unwrap();
        assert_eq!((report.expected, report.generated), (1, 1));
        assert!(dir.path().join("out/book/ints.html").is_file());
    }

    #[test]
    fn test_falls_back_to_builtin_table() {
        let dir = TempDir::new().unwrap();
        let config = config_in(dir.path());
        fs::create_dir_all(&config.redirects.output).unwrap();

        let report = generate_redirects(&config, true).unwrap();
        assert_eq!(report.expected, 35);
        assert_eq!(report.generated, 35);
        assert!(fs::read_dir(&config.redirects.output).unwrap().next().is_none());
    }
}
