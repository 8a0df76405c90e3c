//! Headless gesture scripts.
//!
//! A script is a TOML file of `[[step]]` tables replayed in order through a
//! [`GestureSession`]. Clear confirmations are queued and answered by explicit
//! `answer` steps, so a script can exercise every branch of the clear flow.
//!
//! ```toml
//! [[step]]
//! action = "select"
//! tool = "rect-outline"
//!
//! [[step]]
//! action = "down"
//! x = 10.0
//! y = 10.0
//!
//! [[step]]
//! action = "up"
//! x = 50.0
//! y = 30.0
//! ```

use crate::draw::{CanvasSurface, Primitive};
use crate::input::{Confirmation, MouseButton, PointerEvent, PromptQueue, ToolKind};
use crate::operation::GestureOutcome;
use crate::session::GestureSession;
use crate::settings::DrawingSettings;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading or replaying a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid script: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Step {step}: no confirmation is waiting for an answer")]
    NoPendingPrompt { step: usize },
}

/// One scripted host action.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum ScriptStep {
    /// Pick a tool in the toolbox
    Select { tool: ToolKind },
    /// Release the toolbox selection
    Deselect,
    /// Tear the view down: cancel and clear everything
    Reset,
    Down {
        x: f64,
        y: f64,
        #[serde(default = "default_button")]
        button: MouseButton,
        /// Coordinates are already canvas-local
        #[serde(default)]
        relative: bool,
    },
    Move {
        x: f64,
        y: f64,
        #[serde(default)]
        relative: bool,
    },
    Up {
        x: f64,
        y: f64,
        #[serde(default = "default_button")]
        button: MouseButton,
        #[serde(default)]
        relative: bool,
    },
    /// Answer the oldest open confirmation
    Answer { reply: Confirmation },
}

fn default_button() -> MouseButton {
    MouseButton::Left
}

impl ScriptStep {
    fn pointer_event(&self) -> Option<PointerEvent> {
        let (event, relative) = match *self {
            ScriptStep::Down {
                x,
                y,
                button,
                relative,
            } => (PointerEvent::down(button, x, y), relative),
            ScriptStep::Move { x, y, relative } => (PointerEvent::motion(x, y), relative),
            ScriptStep::Up {
                x,
                y,
                button,
                relative,
            } => (PointerEvent::up(button, x, y), relative),
            _ => return None,
        };
        Some(if relative { event.relative() } else { event })
    }
}

/// A parsed gesture script.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Script {
    #[serde(rename = "step", default)]
    pub steps: Vec<ScriptStep>,
}

impl Script {
    pub fn parse(source: &str) -> Result<Self, ScriptError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let source = std::fs::read_to_string(path).map_err(|source| ScriptError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&source)
    }
}

/// Drives a [`GestureSession`] from scripted steps.
pub struct ScriptRunner {
    session: GestureSession,
    prompts: PromptQueue,
    outcomes: Vec<GestureOutcome>,
}

impl ScriptRunner {
    pub fn new(canvas: CanvasSurface, settings: DrawingSettings) -> Self {
        let prompts = PromptQueue::new();
        let session = GestureSession::new(canvas, settings).with_dialog(prompts.clone());
        Self {
            session,
            prompts,
            outcomes: Vec::new(),
        }
    }

    /// Replays every step, stopping at the first failing one.
    pub fn run(&mut self, script: &Script) -> Result<(), ScriptError> {
        for (index, step) in script.steps.iter().enumerate() {
            self.apply(index + 1, step)?;
        }
        if !self.prompts.is_empty() {
            log::warn!(
                "Script ended with {} unanswered confirmation(s)",
                self.prompts.len()
            );
        }
        Ok(())
    }

    /// Applies step number `index` (1-based, for error messages).
    pub fn apply(&mut self, index: usize, step: &ScriptStep) -> Result<(), ScriptError> {
        log::debug!("Step {index}: {step:?}");
        let outcome = match step {
            ScriptStep::Select { tool } => self.session.select_tool(*tool),
            ScriptStep::Deselect => {
                self.session.deselect();
                None
            }
            ScriptStep::Reset => {
                self.session.reset();
                None
            }
            ScriptStep::Answer { reply } => {
                let prompt = self
                    .prompts
                    .next_prompt()
                    .ok_or(ScriptError::NoPendingPrompt { step: index })?;
                log::debug!("Answering '{}' with {reply:?}", prompt.prompt);
                prompt.answer(*reply);
                self.session.pump()
            }
            pointer => match pointer.pointer_event() {
                Some(event) => {
                    let dispatch = self.session.dispatch(event);
                    if !dispatch.claimed {
                        log::debug!("Step {index}: event not claimed");
                    }
                    dispatch.outcome
                }
                None => None,
            },
        };
        self.outcomes.extend(outcome);
        Ok(())
    }

    pub fn session(&self) -> &GestureSession {
        &self.session
    }

    /// Gesture results in the order they happened.
    pub fn outcomes(&self) -> &[GestureOutcome] {
        &self.outcomes
    }

    /// Committed canvas content in draw order.
    pub fn committed(&self) -> Vec<Primitive> {
        self.session.canvas().committed().cloned().collect()
    }
}
