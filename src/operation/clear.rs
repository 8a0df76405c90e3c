//! Confirm-then-clear operation.

use super::{GestureOutcome, Step};
use crate::draw::CanvasSurface;
use crate::input::{ConfirmDialog, Confirmation};
use tokio::sync::oneshot::{self, error::TryRecvError};

pub const CLEAR_PROMPT: &str = "clear the canvas ?";

/// Modal, single-shot operation that wipes the canvas after a yes.
///
/// It never listens to pointer events. It asks once on construction and
/// finishes as soon as an answer (or the lack of one) is known.
#[derive(Debug)]
pub struct ClearOperation {
    reply: Option<oneshot::Receiver<Confirmation>>,
}

impl ClearOperation {
    pub fn new(dialog: &mut dyn ConfirmDialog) -> Self {
        log::debug!("Asking for clear confirmation");
        Self {
            reply: Some(dialog.request(CLEAR_PROMPT)),
        }
    }

    pub fn state_name(&self) -> &'static str {
        if self.reply.is_some() {
            "awaiting-confirmation"
        } else {
            "done"
        }
    }

    /// Resolves the confirmation once the host has answered.
    pub fn poll(&mut self, canvas: &mut CanvasSurface) -> Step {
        let Some(reply) = self.reply.as_mut() else {
            return Step::ignored();
        };
        let answer = match reply.try_recv() {
            Ok(answer) => answer,
            Err(TryRecvError::Empty) => return Step::ignored(),
            // Dialog torn down without answering
            Err(TryRecvError::Closed) => Confirmation::Cancelled,
        };
        self.reply = None;

        let outcome = if answer.is_affirmative() {
            log::info!("Clearing canvas ({} primitive(s))", canvas.len());
            canvas.clear();
            GestureOutcome::Cleared
        } else {
            log::debug!("Clear declined ({answer:?})");
            GestureOutcome::ClearDeclined
        };
        Step::ignored().with_outcome(outcome).finish()
    }
}
