//! Per-tool gesture state machines.
//!
//! Every tool runs as one [`Operation`] variant. An operation holds the
//! [`Subscription`](crate::input::Subscription)s for the events it is waiting
//! on inside its current state, so leaving a state (or dropping the operation)
//! releases exactly the listeners that state acquired. The session routes an
//! event to the operation only while some listener for its topic is live.

mod clear;
mod drag;
mod freehand;
mod polyline;

pub use clear::{CLEAR_PROMPT, ClearOperation};
pub use drag::{DragShapeOperation, ShapeKind};
pub use freehand::FreehandOperation;
pub use polyline::PolylineOperation;

use crate::draw::{BoundingBox, CanvasSurface, Primitive, PrimitiveHandle};
use crate::input::{ConfirmDialog, CoordinateMapper, EventBus, PointerEvent, ToolKind};
use crate::settings::DrawingSettings;
use crate::util::Point;

/// What a finished gesture produced.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureOutcome {
    /// The draft became permanent canvas content
    Committed {
        handle: PrimitiveHandle,
        bounds: BoundingBox,
    },
    /// The draft was degenerate and has been removed
    Discarded,
    /// The user confirmed and the canvas was cleared
    Cleared,
    /// The clear confirmation was refused or dismissed
    ClearDeclined,
}

/// Result of feeding one event (or one poll) to an operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Step {
    /// The event was consumed and must not reach other consumers
    pub claimed: bool,
    pub outcome: Option<GestureOutcome>,
    /// The operation has exited and should be dropped
    pub finished: bool,
}

impl Step {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn claimed() -> Self {
        Self {
            claimed: true,
            ..Self::default()
        }
    }

    fn with_outcome(mut self, outcome: GestureOutcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    fn finish(mut self) -> Self {
        self.finished = true;
        self
    }
}

/// Mutable environment an operation works against while handling an event.
pub struct OperationContext<'a> {
    pub canvas: &'a mut CanvasSurface,
    pub mapper: &'a dyn CoordinateMapper,
}

impl OperationContext<'_> {
    /// Canvas-local position of `event`.
    pub fn local(&self, event: &PointerEvent) -> Point {
        if event.target_relative {
            event.position
        } else {
            self.mapper.to_local(event.position)
        }
    }
}

/// The running gesture of a session, one variant per family of tools.
#[derive(Debug)]
pub enum Operation {
    Shape(DragShapeOperation),
    Freehand(FreehandOperation),
    Polyline(PolylineOperation),
    Clear(ClearOperation),
}

impl Operation {
    /// Starts the operation for `tool` in its initial waiting state.
    pub fn start(
        tool: ToolKind,
        settings: DrawingSettings,
        bus: &EventBus,
        dialog: &mut dyn ConfirmDialog,
    ) -> Self {
        match tool {
            ToolKind::RectOutline => {
                Operation::Shape(DragShapeOperation::new(ShapeKind::RectOutline, settings, bus))
            }
            ToolKind::EllipseOutline => Operation::Shape(DragShapeOperation::new(
                ShapeKind::EllipseOutline,
                settings,
                bus,
            )),
            ToolKind::RectFill => {
                Operation::Shape(DragShapeOperation::new(ShapeKind::RectFill, settings, bus))
            }
            ToolKind::EllipseFill => {
                Operation::Shape(DragShapeOperation::new(ShapeKind::EllipseFill, settings, bus))
            }
            ToolKind::Freehand => Operation::Freehand(FreehandOperation::new(settings, bus)),
            ToolKind::Polyline => Operation::Polyline(PolylineOperation::new(settings, bus)),
            ToolKind::Clear => Operation::Clear(ClearOperation::new(dialog)),
        }
    }

    pub fn tool(&self) -> ToolKind {
        match self {
            Operation::Shape(op) => op.kind().tool(),
            Operation::Freehand(_) => ToolKind::Freehand,
            Operation::Polyline(_) => ToolKind::Polyline,
            Operation::Clear(_) => ToolKind::Clear,
        }
    }

    /// Name of the current suspension point, for logs and status display.
    pub fn state_name(&self) -> &'static str {
        match self {
            Operation::Shape(op) => op.state_name(),
            Operation::Freehand(op) => op.state_name(),
            Operation::Polyline(op) => op.state_name(),
            Operation::Clear(op) => op.state_name(),
        }
    }

    /// Feeds one pointer event.
    pub fn handle(&mut self, event: &PointerEvent, ctx: &mut OperationContext<'_>) -> Step {
        match self {
            Operation::Shape(op) => op.handle(event, ctx),
            Operation::Freehand(op) => op.handle(event, ctx),
            Operation::Polyline(op) => op.handle(event, ctx),
            Operation::Clear(_) => Step::ignored(),
        }
    }

    /// Checks on pending asynchronous work (the clear confirmation).
    pub fn poll(&mut self, canvas: &mut CanvasSurface) -> Step {
        match self {
            Operation::Clear(op) => op.poll(canvas),
            _ => Step::ignored(),
        }
    }

    /// Tears the operation down, removing any uncommitted draft.
    ///
    /// Consuming `self` drops every subscription the operation still holds.
    pub fn cancel(self, canvas: &mut CanvasSurface) {
        log::debug!("Cancelling {} operation ({})", self.tool().name(), self.state_name());
        match self {
            Operation::Shape(op) => op.cancel(canvas),
            Operation::Freehand(op) => op.cancel(canvas),
            Operation::Polyline(op) => op.cancel(canvas),
            Operation::Clear(_) => {}
        }
    }
}

/// Removes a draft that will not be committed, logging handle misuse.
fn discard_draft(canvas: &mut CanvasSurface, handle: PrimitiveHandle) {
    if let Err(err) = canvas.remove(handle) {
        log::warn!("Failed to discard draft: {err}");
    }
}

/// Commits a draft and reports it, or discards it when it is degenerate.
fn finalize_draft(
    canvas: &mut CanvasSurface,
    handle: PrimitiveHandle,
    bounds: Option<BoundingBox>,
    committable: bool,
) -> GestureOutcome {
    let kind = canvas.get(handle).map_or("primitive", Primitive::kind_name);
    match bounds {
        Some(bounds) if committable => match canvas.commit(handle) {
            Ok(()) => {
                log::info!(
                    "Committed {kind} {handle} ({:.1}, {:.1})-({:.1}, {:.1})",
                    bounds.x,
                    bounds.y,
                    bounds.right,
                    bounds.top
                );
                GestureOutcome::Committed { handle, bounds }
            }
            Err(err) => {
                log::warn!("Failed to commit draft: {err}");
                GestureOutcome::Discarded
            }
        },
        _ => {
            log::debug!("Discarding degenerate {kind} draft {handle}");
            discard_draft(canvas, handle);
            GestureOutcome::Discarded
        }
    }
}

/// Pushes the latest draft state to the canvas.
fn push_draft(canvas: &mut CanvasSurface, handle: PrimitiveHandle, primitive: Primitive) {
    if let Err(err) = canvas.update(handle, primitive) {
        log::warn!("Failed to update draft: {err}");
    }
}
