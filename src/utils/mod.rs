//! Utility modules shared by the build steps.

pub mod path;
pub mod plural;

pub use plural::plural_count;
