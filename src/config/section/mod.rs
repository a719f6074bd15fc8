//! Configuration section definitions.
//!
//! Each module corresponds to a section in `docs.toml`:
//!
//! | Module       | TOML Section     | Purpose                            |
//! |--------------|------------------|------------------------------------|
//! | `project`    | `[project]`      | Project root checks                |
//! | `redirects`  | `[redirects]`    | Legacy URL redirect table          |
//! | `proposals`  | `[proposals]`    | Proposal menu manifest             |
//! | `lang_paths` | `[lang_paths]`   | Per-language page listing          |
//! | `overrides`  | `[overrides]`    | Config override profiles           |

mod lang_paths;
mod overrides;
mod project;
mod proposals;
mod redirects;

pub use lang_paths::LangPathsConfig;
pub use overrides::OverridesConfig;
pub use project::ProjectConfig;
pub use proposals::ProposalsConfig;
pub use redirects::RedirectsConfig;
