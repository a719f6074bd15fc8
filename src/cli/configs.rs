//! `docs-kit configs <profile>` - apply a config override profile.

use anyhow::{Context, Result};

use crate::config::DocsConfig;
use crate::hooks::run_profile;
use crate::log;
use crate::utils::plural_count;

pub fn apply_profile(config: &DocsConfig, profile: &str) -> Result<()> {
    let written =
        run_profile(config, profile).with_context(|| format!("applying `{profile}` configs"))?;
    log!(
        "configs";
        "profile `{}` applied, {} overwritten",
        profile,
        plural_count(written.len(), "file")
    );
    Ok(())
}
