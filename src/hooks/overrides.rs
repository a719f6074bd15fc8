//! Config file overrides.
//!
//! A profile is a list of `{ root, target }` pairs. Applying it replaces
//! each `<project root>/<root>` file with `<overrides dir>/<target>`, prefixed
//! with a "don't edit" banner:
//!
//! ```toml
//! [overrides.profiles]
//! i18n = [
//!     { root = "next.config.js", target = "i18n-next.config.js" },
//! ]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::DocsConfig;
use crate::embed::build::{BANNER, BannerVars};
use crate::log;

/// One file to replace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigOverride {
    /// File at the project root that gets overwritten.
    pub root: PathBuf,
    /// Source file inside the overrides directory.
    pub target: PathBuf,
}

impl ConfigOverride {
    pub fn new(root: impl Into<PathBuf>, target: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            target: target.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum OverrideError {
    #[error("{0} dir doesn't exist!")]
    MissingDir(PathBuf),

    #[error("unknown profile `{name}`, expected one of: {known}")]
    UnknownProfile { name: String, known: String },

    #[error("failed to read `{0}`")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("failed to write `{0}`")]
    Write(PathBuf, #[source] std::io::Error),
}

/// Overwrite root config files with their override variants.
///
/// `banner_dir` is the overrides directory as shown to the reader of the
/// generated file. Returns the files written, in order.
pub fn apply_overrides(
    root: &Path,
    overrides_dir: &Path,
    banner_dir: &str,
    overrides: &[ConfigOverride],
) -> Result<Vec<PathBuf>, OverrideError> {
    if !overrides_dir.is_dir() {
        return Err(OverrideError::MissingDir(overrides_dir.to_path_buf()));
    }

    let banner = BANNER.render(&BannerVars {
        overrides_dir: banner_dir,
    });

    let mut written = Vec::with_capacity(overrides.len());
    for conf in overrides {
        let source = overrides_dir.join(&conf.target);
        let dest = root.join(&conf.root);

        let contents =
            fs::read_to_string(&source).map_err(|e| OverrideError::Read(source.clone(), e))?;
        fs::write(&dest, format!("{banner}{contents}"))
            .map_err(|e| OverrideError::Write(dest.clone(), e))?;

        log!("configs"; "{} <- {}", conf.root.display(), source.display());
        written.push(dest);
    }

    Ok(written)
}

/// Apply the named profile from the loaded configuration.
pub fn run_profile(config: &DocsConfig, name: &str) -> Result<Vec<PathBuf>, OverrideError> {
    let overrides = &config.overrides;
    let Some(profile) = overrides.profiles.get(name) else {
        let known = overrides
            .profiles
            .keys()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        return Err(OverrideError::UnknownProfile {
            name: name.to_string(),
            known,
        });
    };

    let banner_dir = config.root_relative(&overrides.dir);
    apply_overrides(
        config.get_root(),
        &overrides.dir,
        &banner_dir.to_string_lossy(),
        profile,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let overrides = dir.path().join("configs-i18n");
        fs::create_dir_all(&overrides).unwrap();
        fs::write(overrides.join("i18n-next.config.js"), "module.exports = i18n;\n").unwrap();
        fs::write(overrides.join("next.config.js"), "module.exports = plain;\n").unwrap();
        fs::write(dir.path().join("next.config.js"), "original\n").unwrap();
        (dir, overrides)
    }

    #[test]
    fn test_apply_writes_banner_and_contents() {
        let (dir, overrides) = setup();
        let written = apply_overrides(
            dir.path(),
            &overrides,
            "configs-i18n",
            &[ConfigOverride::new("next.config.js", "i18n-next.config.js")],
        )
        .unwrap();

        assert_eq!(written, vec![dir.path().join("next.config.js")]);
        let result = fs::read_to_string(dir.path().join("next.config.js")).unwrap();
        assert!(result.starts_with("/**\n*  WARNING: This is an auto-generated file!"));
        assert!(result.contains("go to configs-i18n/ directory"));
        assert!(result.ends_with("*/\nmodule.exports = i18n;\n"));
    }

    #[test]
    fn test_apply_is_repeatable() {
        let (dir, overrides) = setup();
        let list = [ConfigOverride::new("next.config.js", "next.config.js")];
        apply_overrides(dir.path(), &overrides, "configs-i18n", &list).unwrap();
        let first = fs::read_to_string(dir.path().join("next.config.js")).unwrap();
        apply_overrides(dir.path(), &overrides, "configs-i18n", &list).unwrap();
        let second = fs::read_to_string(dir.path().join("next.config.js")).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.matches("WARNING").count(), 1);
    }

    #[test]
    fn test_missing_overrides_dir() {
        let dir = TempDir::new().unwrap();
        let err = apply_overrides(dir.path(), &dir.path().join("configs-i18n"), "configs-i18n", &[])
            .unwrap_err();
        assert!(matches!(err, OverrideError::MissingDir(_)));
    }

    #[test]
    fn test_missing_target_file() {
        let (dir, overrides) = setup();
        let err = apply_overrides(
            dir.path(),
            &overrides,
            "configs-i18n",
            &[ConfigOverride::new("theme.config.jsx", "i18n-theme.config.jsx")],
        )
        .unwrap_err();
        assert!(matches!(err, OverrideError::Read(..)));
        assert!(!dir.path().join("theme.config.jsx").exists());
    }

    #[test]
    fn test_run_profile_unknown() {
        let (dir, _) = setup();
        let mut config = DocsConfig::default();
        config.set_root(dir.path());
        config.overrides.dir = dir.path().join("configs-i18n");

        let err = run_profile(&config, "staging").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("staging"));
        assert!(message.contains("default"));
        assert!(message.contains("i18n"));
    }

    #[test]
    fn test_run_profile_default_restores() {
        let (dir, _) = setup();
        fs::write(
            dir.path().join("configs-i18n/theme.config.jsx"),
            "export default {};\n",
        )
        .unwrap();
        let mut config = DocsConfig::default();
        config.set_root(dir.path());
        config.overrides.dir = dir.path().join("configs-i18n");

        let written = run_profile(&config, "default").unwrap();
        assert_eq!(written.len(), 2);
        let next = fs::read_to_string(dir.path().join("next.config.js")).unwrap();
        assert!(next.ends_with("module.exports = plain;\n"));
        assert!(next.contains("go to configs-i18n/ directory"));
    }
}
