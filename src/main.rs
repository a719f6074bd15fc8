//! docs-kit - build-time tooling for the language documentation site.

mod cli;
mod config;
mod embed;
mod generator;
mod hooks;
mod logger;
mod page;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::DocsConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_output(&cli);

    let config = DocsConfig::load(&cli)?;

    match &cli.command {
        Commands::Redirects { dry_run, .. } => {
            cli::redirects::generate_redirects(&config, *dry_run).map(|_| ())
        }
        Commands::Proposals { .. } => cli::proposals::generate_proposals(&config).map(|_| ()),
        Commands::LangPaths { .. } => cli::lang_paths::generate_lang_paths(&config).map(|_| ()),
        Commands::Configs { profile } => cli::configs::apply_profile(&config, profile),
        Commands::All => build_all(&config),
    }
}

/// Apply `--color` and `--verbose` before anything is logged.
fn init_output(cli: &Cli) {
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);
}

/// Regenerate every content manifest.
fn build_all(config: &DocsConfig) -> Result<()> {
    cli::proposals::generate_proposals(config)?;
    cli::lang_paths::generate_lang_paths(config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_output_sets_verbose() {
        init_output(&Cli::try_parse_from(["docs-kit", "-v", "all"]).unwrap());
        assert!(logger::is_verbose());

        init_output(&Cli::try_parse_from(["docs-kit", "all"]).unwrap());
        assert!(!logger::is_verbose());
    }
}
