//! Yes/no confirmation collaborator.
//!
//! The dialog widget itself belongs to the host. The core asks for a decision
//! through [`ConfirmDialog::request`] and receives the answer later on a
//! oneshot channel, so the requesting operation can stay suspended while the
//! host runs its modal UI.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use tokio::sync::oneshot;

/// Result of a confirmation round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confirmation {
    Yes,
    No,
    /// Dismissed without a definite answer (focus lost, escape, ...)
    Cancelled,
}

impl Confirmation {
    /// Only an explicit yes counts as consent.
    pub fn is_affirmative(self) -> bool {
        self == Confirmation::Yes
    }
}

/// Host-side modal confirmation.
pub trait ConfirmDialog {
    /// Opens the dialog with `prompt`. The answer arrives on the receiver;
    /// dropping the sender without answering counts as [`Confirmation::Cancelled`].
    fn request(&mut self, prompt: &str) -> oneshot::Receiver<Confirmation>;
}

/// A question waiting for the host to answer it.
#[derive(Debug)]
pub struct PendingPrompt {
    pub prompt: String,
    reply: oneshot::Sender<Confirmation>,
}

impl PendingPrompt {
    /// Delivers the answer. Ignored if the asking operation is already gone.
    pub fn answer(self, answer: Confirmation) {
        if self.reply.send(answer).is_err() {
            log::debug!("Confirmation for '{}' arrived after cancel", self.prompt);
        }
    }
}

/// Dialog that queues prompts for the host to answer at its own pace.
#[derive(Debug, Clone, Default)]
pub struct PromptQueue {
    pending: Rc<RefCell<VecDeque<PendingPrompt>>>,
}

impl PromptQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the oldest unanswered prompt.
    pub fn next_prompt(&self) -> Option<PendingPrompt> {
        self.pending.borrow_mut().pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }
}

impl ConfirmDialog for PromptQueue {
    fn request(&mut self, prompt: &str) -> oneshot::Receiver<Confirmation> {
        let (reply, receiver) = oneshot::channel();
        self.pending.borrow_mut().push_back(PendingPrompt {
            prompt: prompt.to_string(),
            reply,
        });
        receiver
    }
}

/// Dialog that answers every prompt immediately with a fixed value.
#[derive(Debug, Clone, Copy)]
pub struct AutoAnswer(pub Confirmation);

impl ConfirmDialog for AutoAnswer {
    fn request(&mut self, prompt: &str) -> oneshot::Receiver<Confirmation> {
        let (reply, receiver) = oneshot::channel();
        log::debug!("Auto-answering '{prompt}' with {:?}", self.0);
        // The receiver is alive right here, so the send cannot fail.
        let _ = reply.send(self.0);
        receiver
    }
}
