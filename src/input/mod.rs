//! Input plumbing between the host UI layer and the gesture operations.
//!
//! This module holds the pointer event types, the tool table, the coordinate
//! mapper seam, the scoped subscription registry and the confirmation seam.

pub mod dialog;
pub mod events;
pub mod mapper;
pub mod subscription;
pub mod tool;

// Re-export commonly used types at module level
pub use dialog::{AutoAnswer, ConfirmDialog, Confirmation, PendingPrompt, PromptQueue};
pub use events::{MouseButton, PointerEvent, PointerKind};
pub use mapper::{CanvasViewport, CoordinateMapper};
pub use subscription::{EventBus, Subscription, Topic};
pub use tool::ToolKind;
