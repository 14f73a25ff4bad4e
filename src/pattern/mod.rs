//! Rhythmic step grids
//!
//! Fixed-resolution boolean grids and the operations that produce and
//! clean them:
//! - Onset-to-grid quantization
//! - Heuristic refinement against canonical archetypes
//! - Rule-based style classification

pub mod grid;
pub mod quantize;
pub mod refine;
pub mod style;

pub use grid::StepGrid;
pub use quantize::quantize;
pub use refine::refine;
pub use style::classify_style;
