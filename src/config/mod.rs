//! Project configuration management for `docs.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # Config file discovery
//! └── mod.rs         # DocsConfig (this file)
//! ```
//!
//! Every section has defaults matching the documentation repo layout, so
//! a missing or empty `docs.toml` is a valid configuration.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{
    LangPathsConfig, OverridesConfig, ProjectConfig, ProposalsConfig, RedirectsConfig,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, Commands},
    debug, log,
    utils::path::normalize_path,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing docs.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocsConfig {
    /// Absolute path to the config file, empty if none was found (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub redirects: RedirectsConfig,

    #[serde(default)]
    pub proposals: ProposalsConfig,

    #[serde(default)]
    pub lang_paths: LangPathsConfig,

    #[serde(default)]
    pub overrides: OverridesConfig,
}

impl DocsConfig {
    /// Load configuration from CLI arguments.
    ///
    /// The config file is searched upward from cwd. The project root is
    /// `--root` if given, else the config file's directory, else cwd.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        Self::load_from(cli, &cwd)
    }

    /// [`DocsConfig::load`] with an explicit working directory.
    fn load_from(cli: &Cli, cwd: &Path) -> Result<Self> {
        let config_path = find_config_file(&cli.config, cwd);
        let mut config = match &config_path {
            Some(path) => Self::from_path(path)?,
            None => {
                debug!("config"; "{} not found, using defaults", cli.config.display());
                Self::default()
            }
        };

        let root = match (&cli.root, &config_path) {
            (Some(root), _) => cwd.join(root),
            (None, Some(path)) => path.parent().unwrap_or(cwd).to_path_buf(),
            (None, None) => cwd.to_path_buf(),
        };

        config.config_path = config_path.unwrap_or_default();
        debug!(
            "config";
            "config file: {}, project root: {}",
            config.config_path.display(),
            root.display()
        );
        config.finalize(cli, &root)?;
        Ok(config)
    }

    /// Resolve the root, apply CLI overrides and validate.
    fn finalize(&mut self, cli: &Cli, root: &Path) -> Result<()> {
        self.set_root(&normalize_path(root));
        self.check_root()?;
        self.apply_command_options(cli);
        self.normalize_paths();
        self.validate()
    }

    /// Parse configuration from TOML string
    #[cfg(test)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Get path relative to the project root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Redirects { output, .. } => {
                Self::update_option(&mut self.redirects.output, output.as_ref());
            }
            Commands::Proposals { dir } => {
                Self::update_option(&mut self.proposals.dir, dir.as_ref());
            }
            Commands::LangPaths { pages } => {
                Self::update_option(&mut self.lang_paths.pages, pages.as_ref());
            }
            Commands::Configs { .. } | Commands::All => {}
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Resolve all configured paths against the root directory.
    fn normalize_paths(&mut self) {
        let root = self.root.clone();
        let resolve = |path: &Path| normalize_path(&root.join(path));

        self.redirects.output = resolve(&self.redirects.output);
        self.proposals.dir = resolve(&self.proposals.dir);
        self.lang_paths.pages = resolve(&self.lang_paths.pages);
        self.lang_paths.output = resolve(&self.lang_paths.output);
        self.overrides.dir = resolve(&self.overrides.dir);
        // proposals.output stays a file name, joined with proposals.dir at write time
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Check the injected root: it must be a directory and, when
    /// `project.root_name` is set, carry that name.
    fn check_root(&self) -> Result<()> {
        if !self.root.is_dir() {
            bail!(ConfigError::Root(self.root.clone()));
        }

        if let Some(expected) = &self.project.root_name {
            let name = self.root.file_name().and_then(|n| n.to_str());
            if name != Some(expected.as_str()) {
                bail!(ConfigError::RootName {
                    expected: expected.clone(),
                    found: self.root.clone(),
                });
            }
        }

        Ok(())
    }

    /// Validate every section.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.redirects.validate(&mut diag);
        self.proposals.validate(&mut diag);
        self.lang_paths.validate(&mut diag);
        self.overrides.validate(&mut diag);

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// tests
// ============================================================================
