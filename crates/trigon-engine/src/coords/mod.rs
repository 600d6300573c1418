//! Surface geometry: viewport rectangles and orthographic projection fitting.
//!
//! Scene space:
//! - origin at the surface center
//! - +X right, +Y up
//! - the shorter surface side spans `[-1, 1]` (see `FitMode::Extend`)
//!
//! Viewports are physical pixels with a top-left origin.

mod fit;
mod projection;
mod viewport;

pub use fit::{FitMode, Fitting};
pub use projection::{aspect_ratio, ProjectionVolume};
pub use viewport::Viewport;
