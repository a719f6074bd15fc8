//! Pre/post build hooks.
//!
//! - `overrides`: swap framework config files at the repo root for a
//!   profile's variants (e.g. the i18n build), and back

mod overrides;

pub use overrides::*;
