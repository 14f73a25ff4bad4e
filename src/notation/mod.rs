//! Pattern notation encoding
//!
//! Losslessly compresses a boolean step grid into a compact textual
//! pattern string: canonical shorthands, Euclidean-rhythm recognition,
//! and a run-length fallback.

pub mod encoder;
pub mod euclidean;

pub use encoder::encode_pattern;
pub use euclidean::euclidean_pattern;

/// Rest symbol in pattern notation
pub const REST: &str = "~";
