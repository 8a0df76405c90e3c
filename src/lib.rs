//! Library exports for the strokepad gesture engine.
//!
//! A host UI feeds raw pointer events into a [`GestureSession`], which runs the
//! selected tool's state machine and maintains draft and committed primitives
//! on a [`CanvasSurface`](draw::CanvasSurface). Configuration types are exposed
//! so that external tools can share validation and serialization code.

pub mod config;
pub mod draw;
pub mod input;
pub mod operation;
pub mod replay;
pub mod session;
pub mod settings;
pub mod util;

pub use config::Config;
pub use session::{Dispatch, GestureSession};
