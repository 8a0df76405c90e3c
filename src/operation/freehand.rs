//! Freehand stroke operation with distance-based decimation.

use super::{OperationContext, Step, finalize_draft, push_draft};
use crate::draw::{BoundingBox, CanvasSurface, Color, Primitive, PrimitiveHandle};
use crate::input::{EventBus, MouseButton, PointerEvent, PointerKind, Subscription, Topic};
use crate::settings::DrawingSettings;
use crate::util::{self, Point};

#[derive(Debug)]
struct Stroke {
    handle: PrimitiveHandle,
    points: Vec<Point>,
    /// Grown point by point as samples are recorded
    bounds: BoundingBox,
    width: f64,
    color: Color,
    _moves: Subscription,
    _release: Subscription,
}

impl Stroke {
    fn primitive(&self) -> Primitive {
        Primitive::Freehand {
            points: self.points.clone(),
            width: self.width,
            color: self.color,
        }
    }

    /// Records `point` if it is far enough from the last sample.
    fn sample(&mut self, point: Point, threshold: f64) -> bool {
        let last = self.points.last().copied().unwrap_or(point);
        if util::manhattan_distance(last, point) > threshold {
            self.points.push(point);
            self.bounds.include(point);
            true
        } else {
            false
        }
    }
}

#[derive(Debug)]
enum FreehandState {
    Idle { _press: Subscription },
    Drawing(Stroke),
}

/// Looping freehand gesture.
///
/// Dense pointer-move streams are thinned out: a move only becomes a path
/// point when its Manhattan distance to the previous point exceeds the
/// sampling threshold.
#[derive(Debug)]
pub struct FreehandOperation {
    settings: DrawingSettings,
    bus: EventBus,
    state: FreehandState,
}

impl FreehandOperation {
    pub fn new(settings: DrawingSettings, bus: &EventBus) -> Self {
        Self {
            settings,
            bus: bus.clone(),
            state: FreehandState::Idle {
                _press: bus.subscribe(Topic::PointerDown),
            },
        }
    }

    pub fn state_name(&self) -> &'static str {
        match self.state {
            FreehandState::Idle { .. } => "idle",
            FreehandState::Drawing(_) => "dragging",
        }
    }

    pub fn handle(&mut self, event: &PointerEvent, ctx: &mut OperationContext<'_>) -> Step {
        let threshold = self.settings.freehand_threshold;
        match (&mut self.state, event.kind) {
            (FreehandState::Idle { .. }, PointerKind::Down) => {
                let origin = ctx.local(event);
                if event.button != MouseButton::Left || !ctx.canvas.contains(origin) {
                    return Step::ignored();
                }
                let width = self.settings.stroke_width;
                let color = self.settings.line_color();
                let handle = ctx.canvas.add(Primitive::Freehand {
                    points: vec![origin],
                    width,
                    color,
                });
                let stroke = Stroke {
                    handle,
                    points: vec![origin],
                    bounds: BoundingBox::at(origin),
                    width,
                    color,
                    _moves: self.bus.subscribe(Topic::PointerMove),
                    _release: self.bus.subscribe(Topic::PointerUp),
                };
                log::debug!("Freehand stroke started at ({:.1}, {:.1})", origin.x, origin.y);
                self.state = FreehandState::Drawing(stroke);
                Step::claimed()
            }
            (FreehandState::Drawing(stroke), PointerKind::Move) => {
                if stroke.sample(ctx.local(event), threshold) {
                    push_draft(ctx.canvas, stroke.handle, stroke.primitive());
                }
                Step::claimed()
            }
            (FreehandState::Drawing(stroke), PointerKind::Up)
                if event.button == MouseButton::Left =>
            {
                if stroke.sample(ctx.local(event), threshold) {
                    push_draft(ctx.canvas, stroke.handle, stroke.primitive());
                }
                let idle = FreehandState::Idle {
                    _press: self.bus.subscribe(Topic::PointerDown),
                };
                let FreehandState::Drawing(stroke) = std::mem::replace(&mut self.state, idle)
                else {
                    unreachable!("matched the drawing state above");
                };
                log::debug!("Freehand stroke ended with {} point(s)", stroke.points.len());
                let outcome = finalize_draft(
                    ctx.canvas,
                    stroke.handle,
                    Some(stroke.bounds),
                    stroke.bounds.has_extent(),
                );
                Step::claimed().with_outcome(outcome)
            }
            _ => Step::ignored(),
        }
    }

    pub fn cancel(self, canvas: &mut CanvasSurface) {
        if let FreehandState::Drawing(stroke) = self.state {
            super::discard_draft(canvas, stroke.handle);
        }
    }
}
