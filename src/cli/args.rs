//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Build-time tooling for the documentation site
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: docs.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, default_value = "docs.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Project root directory (default: directory of the config file)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write redirect pages for legacy URLs into the built site
    #[command(visible_alias = "r")]
    Redirects {
        /// Built site directory (relative to project root)
        #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
        output: Option<PathBuf>,

        /// Report what would be written without touching the output
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Generate the proposal menu manifest (_meta.json)
    #[command(visible_alias = "p")]
    Proposals {
        /// Proposals directory (relative to project root)
        #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
        dir: Option<PathBuf>,
    },

    /// Generate the per-language page listing (LangPath.json)
    #[command(visible_alias = "l")]
    LangPaths {
        /// Pages directory (relative to project root)
        #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
        pages: Option<PathBuf>,
    },

    /// Overwrite framework config files with a profile's variants
    #[command(visible_alias = "c")]
    Configs {
        /// Profile name (built-in: i18n, default)
        profile: String,
    },

    /// Generate all content manifests (proposals, lang-paths)
    #[command(visible_alias = "a")]
    All,
}

#[allow(unused)]
impl Cli {
    pub const fn is_redirects(&self) -> bool {
        matches!(self.command, Commands::Redirects { .. })
    }
    pub const fn is_configs(&self) -> bool {
        matches!(self.command, Commands::Configs { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_redirects() {
        let cli = Cli::try_parse_from(["docs-kit", "redirects", "--dry-run", "-o", "build"]).unwrap();
        assert!(cli.is_redirects());
        match cli.command {
            Commands::Redirects { output, dry_run } => {
                assert!(dry_run);
                assert_eq!(output, Some(PathBuf::from("build")));
            }
            _ => unreachable!(),
        }
        assert_eq!(cli.config, PathBuf::from("docs.toml"));
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["docs-kit", "configs", "i18n", "--root", "/srv/docs", "-v"])
            .unwrap();
        assert!(cli.is_configs());
        assert!(cli.verbose);
        assert_eq!(cli.root, Some(PathBuf::from("/srv/docs")));
    }

    #[test]
    fn test_configs_requires_profile() {
        assert!(Cli::try_parse_from(["docs-kit", "configs"]).is_err());
    }
}
