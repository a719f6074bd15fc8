//! `[project]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [project]
//! root_name = "tact-docs"   # Refuse to run unless the root dir has this name
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Expected name of the project root directory.
    pub root_name: Option<String>,
}
