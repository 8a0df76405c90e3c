//! Drawing primitives, bounding boxes and the canvas surface.
//!
//! This module defines the data the gesture operations produce:
//! - [`Color`]: RGBA color with random per-gesture generation
//! - [`Primitive`]: the shapes a tool can commit
//! - [`BoundingBox`]: derived extent of a primitive
//! - [`CanvasSurface`]: draft/committed primitive store the host renders

pub mod bounds;
pub mod canvas;
pub mod color;
pub mod primitive;

// Re-export commonly used types at module level
pub use bounds::BoundingBox;
pub use canvas::{CanvasError, CanvasSurface, PrimitiveHandle};
pub use color::Color;
pub use primitive::Primitive;

#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, RED, WHITE, YELLOW};
