//! Redirect stub generation for legacy URLs.
//!
//! For every expanded [`RedirectRule`] a static page is written at
//! `<output>/<source>.html` that meta-refreshes to the destination.
//! A file already at that path is left alone unless it is one of our own
//! stubs (it carries [`REDIRECT_MARKER`]).
//!
//! ```text
//! /book/ints -> /book/integers
//!
//! out/book/ints.html
//!   <title>Redirecting...</title>
//!   <meta http-equiv="refresh" content="0; url=/book/integers" />
//! ```

mod rule;
mod table;

pub use rule::{RedirectInstance, RedirectRule, expected_total};
pub use table::builtin_rules;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::embed::build::{REDIRECT_HTML, REDIRECT_MARKER, RedirectVars};
use crate::{debug, log};

#[derive(Debug, Error)]
pub enum RedirectError {
    #[error("output dir `{0}` doesn't exist, try building the site first")]
    MissingOutput(PathBuf),

    #[error("failed to create directory `{0}`")]
    CreateDir(PathBuf, #[source] std::io::Error),

    #[error("failed to write redirect `{0}`")]
    Write(PathBuf, #[source] std::io::Error),
}

/// Outcome of one generator run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RedirectReport {
    /// Sum of all rule expansions.
    pub expected: usize,
    /// Stubs written (or that would be written in a dry run).
    pub generated: usize,
    /// Targets occupied by real pages.
    pub skipped: Vec<PathBuf>,
}

/// Writes redirect stubs into a built output directory.
pub struct RedirectWriter<'a> {
    output_dir: &'a Path,
    dry_run: bool,
}

impl<'a> RedirectWriter<'a> {
    /// Fails if `output_dir` does not exist.
    pub fn new(output_dir: &'a Path) -> Result<Self, RedirectError> {
        if !output_dir.is_dir() {
            return Err(RedirectError::MissingOutput(output_dir.to_path_buf()));
        }
        Ok(Self {
            output_dir,
            dry_run: false,
        })
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Expand and write every rule. Stops at the first filesystem error.
    pub fn generate(&self, rules: &[RedirectRule]) -> Result<RedirectReport, RedirectError> {
        let mut report = RedirectReport {
            expected: expected_total(rules),
            ..RedirectReport::default()
        };
        log!("redirects"; "started generating redirects, expected count: {}", report.expected);

        for instance in rules.iter().flat_map(RedirectRule::expand) {
            match self.write_instance(&instance)? {
                Some(skipped) => report.skipped.push(skipped),
                None => report.generated += 1,
            }
        }

        Ok(report)
    }

    /// Write one redirect. Returns the target path if a real page is in the way.
    fn write_instance(&self, instance: &RedirectInstance) -> Result<Option<PathBuf>, RedirectError> {
        let target = target_path(self.output_dir, &instance.source);

        if is_regular_file(&target) {
            log!(
                "warning";
                "such path ({}) already exists in the docs, so redirect from it was NOT created",
                target.display()
            );
            return Ok(Some(target));
        }

        if !self.dry_run {
            write_redirect_file(&target, &instance.destination)?;
        }
        debug!("redirect"; "{} -> {}", instance.source, instance.destination);
        Ok(None)
    }
}

/// `/book/ints` -> `{output_dir}/book/ints.html`
pub fn target_path(output_dir: &Path, source: &str) -> PathBuf {
    output_dir.join(format!("{}.html", source.trim_start_matches('/')))
}

/// True if `path` holds a page this generator did not write.
///
/// Files that cannot be read as text count as real pages.
pub fn is_regular_file(path: &Path) -> bool {
    if !path.exists() {
        return false;
    }
    match fs::read_to_string(path) {
        Ok(content) => !content.contains(REDIRECT_MARKER),
        Err(_) => true,
    }
}

pub fn build_redirect_html(destination: &str) -> String {
    REDIRECT_HTML.render(&RedirectVars {
        canonical_url: destination,
    })
}

fn write_redirect_file(target: &Path, destination: &str) -> Result<(), RedirectError> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| RedirectError::CreateDir(parent.to_path_buf(), e))?;
    }

    fs::write(target, build_redirect_html(destination))
        .map_err(|e| RedirectError::Write(target.to_path_buf(), e))
}
