//! Helper functions shared by the transformer and the templates

mod date;
mod html;

pub use date::*;
pub use html::*;
