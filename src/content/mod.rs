//! Content module - raw CMS records and the normalized display model

mod post;
mod raw;
mod transform;

pub use post::{Block, Hero, Post, Section};
pub use raw::{FieldBag, RawRecord};
pub use transform::{transform, BLOCKS_PER_SECTION, SECTION_COUNT};
