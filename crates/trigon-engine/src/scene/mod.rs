//! Static scene data.
//!
//! Scene values are plain constants; renderers take them by reference and never
//! write back.

mod triangle;

pub use triangle::{Triangle, Vertex, VertexColor, TRIANGLE};
