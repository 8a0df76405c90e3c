//! Corner-to-corner drag operation shared by the box and ellipse tools.

use super::{OperationContext, Step, finalize_draft, push_draft};
use crate::draw::{CanvasSurface, Primitive, PrimitiveHandle};
use crate::input::{EventBus, MouseButton, PointerEvent, PointerKind, Subscription, ToolKind, Topic};
use crate::settings::DrawingSettings;
use crate::util::{self, Point};

/// Which box-like primitive a drag produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    RectOutline,
    EllipseOutline,
    RectFill,
    EllipseFill,
}

impl ShapeKind {
    pub fn tool(self) -> ToolKind {
        match self {
            ShapeKind::RectOutline => ToolKind::RectOutline,
            ShapeKind::EllipseOutline => ToolKind::EllipseOutline,
            ShapeKind::RectFill => ToolKind::RectFill,
            ShapeKind::EllipseFill => ToolKind::EllipseFill,
        }
    }

    /// Zero-extent primitive anchored at `origin`, painted per `settings`.
    fn anchored_at(self, origin: Point, settings: &DrawingSettings) -> Primitive {
        let (min, max) = (origin, origin);
        match self {
            ShapeKind::RectOutline => Primitive::RectOutline {
                min,
                max,
                width: settings.stroke_width,
                color: settings.line_color(),
            },
            ShapeKind::EllipseOutline => Primitive::EllipseOutline {
                min,
                max,
                width: settings.stroke_width,
                color: settings.line_color(),
            },
            ShapeKind::RectFill => Primitive::RectFill {
                min,
                max,
                color: settings.fill_color(),
            },
            ShapeKind::EllipseFill => Primitive::EllipseFill {
                min,
                max,
                color: settings.fill_color(),
            },
        }
    }
}

/// In-progress box; holds the drag-stream listeners while it lives.
#[derive(Debug)]
struct Draft {
    handle: PrimitiveHandle,
    origin: Point,
    primitive: Primitive,
    _moves: Subscription,
    _release: Subscription,
}

#[derive(Debug)]
enum DragState {
    /// Waiting for a left press inside the canvas
    Idle { _press: Subscription },
    /// Button held, box follows the pointer
    Dragging(Draft),
}

/// Looping drag gesture for rectangles and ellipses, outlined or filled.
#[derive(Debug)]
pub struct DragShapeOperation {
    kind: ShapeKind,
    settings: DrawingSettings,
    bus: EventBus,
    state: DragState,
}

impl DragShapeOperation {
    pub fn new(kind: ShapeKind, settings: DrawingSettings, bus: &EventBus) -> Self {
        Self {
            kind,
            settings,
            bus: bus.clone(),
            state: DragState::Idle {
                _press: bus.subscribe(Topic::PointerDown),
            },
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn state_name(&self) -> &'static str {
        match self.state {
            DragState::Idle { .. } => "idle",
            DragState::Dragging(_) => "dragging",
        }
    }

    pub fn handle(&mut self, event: &PointerEvent, ctx: &mut OperationContext<'_>) -> Step {
        match (&mut self.state, event.kind) {
            (DragState::Idle { .. }, PointerKind::Down) => {
                let origin = ctx.local(event);
                if event.button != MouseButton::Left || !ctx.canvas.contains(origin) {
                    return Step::ignored();
                }
                let primitive = self.kind.anchored_at(origin, &self.settings);
                let handle = ctx.canvas.add(primitive.clone());
                log::debug!("{:?} drag started at ({:.1}, {:.1})", self.kind, origin.x, origin.y);
                self.state = DragState::Dragging(Draft {
                    handle,
                    origin,
                    primitive,
                    _moves: self.bus.subscribe(Topic::PointerMove),
                    _release: self.bus.subscribe(Topic::PointerUp),
                });
                Step::claimed()
            }
            (DragState::Dragging(draft), PointerKind::Move) => {
                track(draft, ctx.local(event), ctx.canvas);
                Step::claimed()
            }
            (DragState::Dragging(draft), PointerKind::Up) if event.button == MouseButton::Left => {
                track(draft, ctx.local(event), ctx.canvas);
                let idle = DragState::Idle {
                    _press: self.bus.subscribe(Topic::PointerDown),
                };
                let DragState::Dragging(draft) = std::mem::replace(&mut self.state, idle) else {
                    unreachable!("matched the dragging state above");
                };
                let outcome = finalize_draft(
                    ctx.canvas,
                    draft.handle,
                    draft.primitive.bounding_box(),
                    draft.primitive.is_committable(),
                );
                Step::claimed().with_outcome(outcome)
            }
            _ => Step::ignored(),
        }
    }

    pub fn cancel(self, canvas: &mut CanvasSurface) {
        if let DragState::Dragging(draft) = self.state {
            super::discard_draft(canvas, draft.handle);
        }
    }
}

/// Re-derives the box from the origin and the pointer, then pushes it.
fn track(draft: &mut Draft, current: Point, canvas: &mut CanvasSurface) {
    let (min, max) = util::normalize_corners(draft.origin, current);
    draft.primitive.set_corners(min, max);
    push_draft(canvas, draft.handle, draft.primitive.clone());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BoundingBox, RED, WHITE};
    use crate::input::CanvasViewport;
    use crate::operation::GestureOutcome;
    use crate::settings::ColorPolicy;

    fn settings() -> DrawingSettings {
        DrawingSettings {
            color_policy: ColorPolicy::Fixed {
                line: RED,
                fill: WHITE,
            },
            ..DrawingSettings::default()
        }
    }

    fn feed(
        op: &mut DragShapeOperation,
        canvas: &mut CanvasSurface,
        event: PointerEvent,
    ) -> Step {
        let mapper = CanvasViewport::default();
        let mut ctx = OperationContext {
            canvas,
            mapper: &mapper,
        };
        op.handle(&event, &mut ctx)
    }

    #[test]
    fn draft_renders_before_any_movement() {
        let bus = EventBus::new();
        let mut canvas = CanvasSurface::new(100.0, 100.0);
        let mut op = DragShapeOperation::new(ShapeKind::RectFill, settings(), &bus);

        let step = feed(&mut op, &mut canvas, PointerEvent::down(MouseButton::Left, 5.0, 5.0));
        assert!(step.claimed);
        assert_eq!(op.state_name(), "dragging");
        assert_eq!(canvas.draft_count(), 1);
        assert!(bus.is_subscribed(Topic::PointerMove));
        assert!(!bus.is_subscribed(Topic::PointerDown));
    }

    #[test]
    fn reverse_drag_is_normalized() {
        let bus = EventBus::new();
        let mut canvas = CanvasSurface::new(100.0, 100.0);
        let mut op = DragShapeOperation::new(ShapeKind::EllipseOutline, settings(), &bus);

        feed(&mut op, &mut canvas, PointerEvent::down(MouseButton::Left, 50.0, 30.0));
        feed(&mut op, &mut canvas, PointerEvent::motion(20.0, 40.0));
        let step = feed(&mut op, &mut canvas, PointerEvent::up(MouseButton::Left, 10.0, 10.0));

        let Some(GestureOutcome::Committed { handle, bounds }) = step.outcome else {
            panic!("expected a commit, got {:?}", step.outcome);
        };
        assert_eq!(
            bounds,
            BoundingBox {
                x: 10.0,
                y: 10.0,
                right: 50.0,
                top: 30.0
            }
        );
        assert!(matches!(
            canvas.get(handle),
            Some(Primitive::EllipseOutline { width, color, .. }) if *width == 2.0 && *color == RED
        ));
        assert_eq!(op.state_name(), "idle");
    }

    #[test]
    fn press_outside_canvas_or_with_other_button_is_not_claimed() {
        let bus = EventBus::new();
        let mut canvas = CanvasSurface::new(100.0, 100.0);
        let mut op = DragShapeOperation::new(ShapeKind::RectOutline, settings(), &bus);

        let outside = feed(&mut op, &mut canvas, PointerEvent::down(MouseButton::Left, 150.0, 5.0));
        let right = feed(&mut op, &mut canvas, PointerEvent::down(MouseButton::Right, 5.0, 5.0));
        assert!(!outside.claimed);
        assert!(!right.claimed);
        assert!(canvas.is_empty());
        assert_eq!(op.state_name(), "idle");
    }

    #[test]
    fn returning_to_origin_discards() {
        let bus = EventBus::new();
        let mut canvas = CanvasSurface::new(100.0, 100.0);
        let mut op = DragShapeOperation::new(ShapeKind::RectOutline, settings(), &bus);

        feed(&mut op, &mut canvas, PointerEvent::down(MouseButton::Left, 5.0, 5.0));
        feed(&mut op, &mut canvas, PointerEvent::motion(25.0, 25.0));
        let step = feed(&mut op, &mut canvas, PointerEvent::up(MouseButton::Left, 5.0, 5.0));
        assert_eq!(step.outcome, Some(GestureOutcome::Discarded));
        assert!(canvas.is_empty());
    }

    #[test]
    fn cancel_mid_drag_removes_draft_and_listeners() {
        let bus = EventBus::new();
        let mut canvas = CanvasSurface::new(100.0, 100.0);
        let mut op = DragShapeOperation::new(ShapeKind::RectFill, settings(), &bus);
        feed(&mut op, &mut canvas, PointerEvent::down(MouseButton::Left, 5.0, 5.0));
        feed(&mut op, &mut canvas, PointerEvent::motion(30.0, 30.0));

        op.cancel(&mut canvas);
        assert!(canvas.is_empty());
        assert_eq!(bus.listener_count(), 0);
    }
}
