//! trigon engine crate.
//!
//! Platform + GPU runtime, viewport fitting and the triangle renderer used by the
//! viewer binary.

pub mod device;
pub mod window;
pub mod core;

pub mod logging;
pub mod coords;
pub mod paint;
pub mod render;
pub mod scene;
