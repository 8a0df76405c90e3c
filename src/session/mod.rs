//! Gesture session: tool selection and lifecycle of the single active operation.

use crate::draw::CanvasSurface;
use crate::input::{
    AutoAnswer, CanvasViewport, ConfirmDialog, Confirmation, CoordinateMapper, EventBus,
    PointerEvent, ToolKind, Topic,
};
use crate::operation::{GestureOutcome, Operation, OperationContext, Step};
use crate::settings::DrawingSettings;
use std::collections::VecDeque;


/// Result of delivering one event to the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dispatch {
    /// The active operation consumed the event
    pub claimed: bool,
    /// Set when the event completed a gesture
    pub outcome: Option<GestureOutcome>,
}

/// Owns the canvas and at most one running [`Operation`].
///
/// Everything happens on the caller's thread. Switching tools, deselecting
/// and resetting cancel the running operation before returning, so its
/// listeners are gone before anything else can be dispatched.
pub struct GestureSession {
    canvas: CanvasSurface,
    settings: DrawingSettings,
    bus: EventBus,
    mapper: Box<dyn CoordinateMapper>,
    dialog: Box<dyn ConfirmDialog>,
    selected_tool: Option<ToolKind>,
    active: Option<Operation>,
    queue: VecDeque<PointerEvent>,
}

impl GestureSession {
    /// Creates a session with an identity coordinate mapping and a dialog that
    /// declines every confirmation until [`with_dialog`](Self::with_dialog)
    /// installs a real one.
    pub fn new(canvas: CanvasSurface, settings: DrawingSettings) -> Self {
        Self {
            canvas,
            settings,
            bus: EventBus::new(),
            mapper: Box::new(CanvasViewport::default()),
            dialog: Box::new(AutoAnswer(Confirmation::Cancelled)),
            selected_tool: None,
            active: None,
            queue: VecDeque::new(),
        }
    }

    pub fn with_mapper(mut self, mapper: impl CoordinateMapper + 'static) -> Self {
        self.mapper = Box::new(mapper);
        self
    }

    pub fn with_dialog(mut self, dialog: impl ConfirmDialog + 'static) -> Self {
        self.dialog = Box::new(dialog);
        self
    }

    /// Cancels whatever is running and starts `tool`.
    ///
    /// Returns an outcome only when the new operation resolves immediately
    /// (a clear whose dialog answers synchronously).
    pub fn select_tool(&mut self, tool: ToolKind) -> Option<GestureOutcome> {
        self.cancel_active();
        log::info!("Selected tool: {}", tool.name());
        self.selected_tool = Some(tool);
        self.start(tool);
        self.pump()
    }

    /// Releases the toolbox selection and cancels the running operation.
    pub fn deselect(&mut self) {
        self.cancel_active();
        if let Some(tool) = self.selected_tool.take() {
            log::info!("Deselected tool: {}", tool.name());
        }
    }

    /// Cancels everything and empties the canvas, for host view teardown.
    pub fn reset(&mut self) {
        self.cancel_active();
        self.selected_tool = None;
        self.queue.clear();
        self.canvas.clear();
        log::info!("Session reset");
    }

    /// Delivers one pointer event to the active operation.
    ///
    /// Events nobody is listening for come back unclaimed so the host can
    /// route them elsewhere.
    pub fn dispatch(&mut self, event: PointerEvent) -> Dispatch {
        if !self.bus.is_subscribed(Topic::from(event.kind)) {
            return Dispatch::default();
        }
        let Some(operation) = self.active.as_mut() else {
            return Dispatch::default();
        };
        let mut ctx = OperationContext {
            canvas: &mut self.canvas,
            mapper: self.mapper.as_ref(),
        };
        let step = operation.handle(&event, &mut ctx);
        self.apply(step)
    }

    /// Queues an event for [`process_queued`](Self::process_queued).
    pub fn enqueue(&mut self, event: PointerEvent) {
        self.queue.push_back(event);
    }

    /// Dispatches queued events one at a time in arrival order.
    pub fn process_queued(&mut self) -> Vec<Dispatch> {
        let mut results = Vec::with_capacity(self.queue.len());
        while let Some(event) = self.queue.pop_front() {
            results.push(self.dispatch(event));
        }
        results
    }

    /// Gives the active operation a chance to pick up asynchronous answers.
    pub fn pump(&mut self) -> Option<GestureOutcome> {
        let operation = self.active.as_mut()?;
        let step = operation.poll(&mut self.canvas);
        self.apply(step).outcome
    }

    /// Status-bar text for the selected tool; empty when nothing is selected.
    pub fn helper_text(&self) -> &'static str {
        self.selected_tool.map_or("", ToolKind::helper_text)
    }

    pub fn selected_tool(&self) -> Option<ToolKind> {
        self.selected_tool
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Suspension point of the running operation, if any.
    pub fn active_state(&self) -> Option<&'static str> {
        self.active.as_ref().map(Operation::state_name)
    }

    pub fn canvas(&self) -> &CanvasSurface {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut CanvasSurface {
        &mut self.canvas
    }

    pub fn settings(&self) -> &DrawingSettings {
        &self.settings
    }

    /// Replaces the settings. Operations already running keep their snapshot.
    pub fn set_settings(&mut self, settings: DrawingSettings) {
        self.settings = settings;
    }

    /// Live event listeners held by the active operation.
    pub fn listener_count(&self) -> usize {
        self.bus.listener_count()
    }

    pub fn queued_len(&self) -> usize {
        self.queue.len()
    }

    fn start(&mut self, tool: ToolKind) {
        let operation = Operation::start(tool, self.settings, &self.bus, self.dialog.as_mut());
        log::debug!("Started {} operation ({})", tool.name(), operation.state_name());
        self.active = Some(operation);
    }

    fn cancel_active(&mut self) {
        if let Some(operation) = self.active.take() {
            operation.cancel(&mut self.canvas);
        }
        debug_assert_eq!(self.bus.listener_count(), 0, "cancelled operation leaked listeners");
    }

    /// Applies an operation step: drops finished operations and follows the
    /// per-tool exit policy.
    fn apply(&mut self, step: Step) -> Dispatch {
        if step.finished {
            if let Some(operation) = self.active.take() {
                let tool = operation.tool();
                drop(operation);
                log::debug!("{} operation exited", tool.name());
                if tool.resets_selection_on_exit() {
                    self.selected_tool = None;
                } else if tool == ToolKind::Polyline && self.settings.polyline_repeat {
                    self.start(tool);
                }
            }
        }
        Dispatch {
            claimed: step.claimed,
            outcome: step.outcome,
        }
    }
}

impl Default for GestureSession {
    fn default() -> Self {
        Self::new(CanvasSurface::default(), DrawingSettings::default())
    }
}
