//! Content page types: metadata and front matter.

mod frontmatter;
mod meta;

pub use frontmatter::{FrontMatterError, MetaExtractor};
pub use meta::PageMeta;
