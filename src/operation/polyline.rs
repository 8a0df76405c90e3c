//! Click-to-place polyline operation.

use super::{OperationContext, Step, finalize_draft, push_draft};
use crate::draw::{CanvasSurface, Color, Primitive, PrimitiveHandle};
use crate::input::{EventBus, MouseButton, PointerEvent, PointerKind, Subscription, Topic};
use crate::settings::DrawingSettings;
use crate::util::Point;

/// Path under construction. The last point is the rubber-band preview that
/// follows the pointer; every point before it was placed by a click.
#[derive(Debug)]
struct Path {
    handle: PrimitiveHandle,
    points: Vec<Point>,
    width: f64,
    color: Color,
    _clicks: Subscription,
    _motion: Subscription,
}

impl Path {
    fn primitive(&self) -> Primitive {
        Primitive::Polyline {
            points: self.points.clone(),
            width: self.width,
            color: self.color,
        }
    }

    fn move_preview(&mut self, point: Point) {
        if let Some(last) = self.points.last_mut() {
            *last = point;
        }
    }
}

#[derive(Debug)]
enum PolylineState {
    Idle { _press: Subscription },
    Placing(Path),
    /// Gesture complete; no listeners left
    Done,
}

/// Single-pass polyline gesture.
///
/// Left clicks place vertices, pointer motion drags the preview segment
/// regardless of button state, and a right click finishes. The trailing
/// preview point was never clicked, so it is dropped before the commit.
#[derive(Debug)]
pub struct PolylineOperation {
    settings: DrawingSettings,
    bus: EventBus,
    state: PolylineState,
}

impl PolylineOperation {
    pub fn new(settings: DrawingSettings, bus: &EventBus) -> Self {
        Self {
            settings,
            bus: bus.clone(),
            state: PolylineState::Idle {
                _press: bus.subscribe(Topic::PointerDown),
            },
        }
    }

    pub fn state_name(&self) -> &'static str {
        match self.state {
            PolylineState::Idle { .. } => "idle",
            PolylineState::Placing(_) => "placing",
            PolylineState::Done => "done",
        }
    }

    /// Number of vertices the user has placed so far.
    pub fn placed_vertices(&self) -> usize {
        match &self.state {
            PolylineState::Placing(path) => path.points.len().saturating_sub(1),
            _ => 0,
        }
    }

    pub fn handle(&mut self, event: &PointerEvent, ctx: &mut OperationContext<'_>) -> Step {
        let local = ctx.local(event);
        match (&mut self.state, event.kind, event.button) {
            (PolylineState::Idle { .. }, PointerKind::Down, MouseButton::Left) => {
                if !ctx.canvas.contains(local) {
                    return Step::ignored();
                }
                // The live pointer drives the second point; it starts on the origin.
                let width = self.settings.stroke_width;
                let color = self.settings.line_color();
                let points = vec![local, local];
                let handle = ctx.canvas.add(Primitive::Polyline {
                    points: points.clone(),
                    width,
                    color,
                });
                log::debug!("Polyline started at ({:.1}, {:.1})", local.x, local.y);
                self.state = PolylineState::Placing(Path {
                    handle,
                    points,
                    width,
                    color,
                    _clicks: self.bus.subscribe(Topic::PointerDown),
                    _motion: self.bus.subscribe(Topic::PointerMove),
                });
                Step::claimed()
            }
            (PolylineState::Placing(path), PointerKind::Move, _) => {
                path.move_preview(local);
                push_draft(ctx.canvas, path.handle, path.primitive());
                Step::claimed()
            }
            (PolylineState::Placing(path), PointerKind::Down, MouseButton::Left) => {
                if !ctx.canvas.contains(local) {
                    return Step::ignored();
                }
                path.move_preview(local);
                path.points.push(local);
                push_draft(ctx.canvas, path.handle, path.primitive());
                Step::claimed()
            }
            (PolylineState::Placing(_), PointerKind::Down, MouseButton::Right) => {
                let PolylineState::Placing(mut path) =
                    std::mem::replace(&mut self.state, PolylineState::Done)
                else {
                    unreachable!("matched the placing state above");
                };
                path.points.pop();
                let primitive = path.primitive();
                push_draft(ctx.canvas, path.handle, primitive.clone());
                log::debug!("Polyline finished with {} vertices", path.points.len());
                let outcome = finalize_draft(
                    ctx.canvas,
                    path.handle,
                    primitive.bounding_box(),
                    primitive.is_committable(),
                );
                Step::claimed().with_outcome(outcome).finish()
            }
            _ => Step::ignored(),
        }
    }

    pub fn cancel(self, canvas: &mut CanvasSurface) {
        if let PolylineState::Placing(path) = self.state {
            super::discard_draft(canvas, path.handle);
        }
    }
}
