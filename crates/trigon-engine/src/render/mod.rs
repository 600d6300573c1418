//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipelines, buffers) and create them lazily
//! on first use, rebuilding the pipeline if the surface format changes.
//!
//! Convention:
//! - scene geometry is in scene units (origin centered, +Y up)
//! - the vertex shader applies the projection matrix from a uniform buffer

mod ctx;
mod triangle;

pub use ctx::{RenderCtx, RenderTarget};
pub use triangle::TriangleRenderer;
