//! Command-line interface module.

mod args;
pub mod configs;
pub mod lang_paths;
pub mod proposals;
pub mod redirects;

pub use args::{Cli, Commands};
