//! Sampling sources for the layout generator.
//!
//! The Halton radical inverse provides the evenly spread base coordinates;
//! [`JitterSource`] layers small seeded offsets on top so that the whole
//! layout stays a pure function of its inputs.

mod halton;
mod jitter;

pub use halton::{halton, sequence_index};
pub use jitter::{JitterMode, JitterSource, JitterStream};
