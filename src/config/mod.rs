//! Configuration surface: viewport geometry and tunable layout constants.
//!
//! `LayoutConfig` deserializes from partial JSON documents, so embedders only
//! spell out the keys they want to change.

mod layout;
mod viewport;

pub use layout::{LayoutConfig, SizeRange};
pub use viewport::{Margins, ViewportConfig};
