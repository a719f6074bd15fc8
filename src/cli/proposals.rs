//! `docs-kit proposals` - proposal menu manifest.

use anyhow::{Context, Result};

use crate::config::DocsConfig;
use crate::generator::menu::{NavigationManifest, build_menu};
use crate::log;
use crate::utils::plural_count;

pub fn generate_proposals(config: &DocsConfig) -> Result<NavigationManifest> {
    let proposals = &config.proposals;
    let manifest = build_menu(proposals).with_context(|| {
        format!(
            "generating proposal menu from {}",
            config.root_relative(&proposals.dir).display()
        )
    })?;

    log!(
        "proposals";
        "{} -> {}",
        plural_count(manifest.proposal_count(), "proposal"),
        config.root_relative(proposals.output_path()).display()
    );
    Ok(manifest)
}
