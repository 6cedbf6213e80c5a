//! Output contracts from the core.
//!
//! Outputs carry the visual-state commands due this tick plus a separate
//! list of semantic events. Adapters (web/WASM) apply commands to the
//! presentation surface and transport events.

use serde::{Deserialize, Serialize};

use crate::ids::SessionId;
use crate::trace::{Bounds, Comparison};

/// One visual-state transition for the presentation sink.
///
/// The sink's apply operation is expected to be idempotent per command
/// type; the core mandates outcome observability (Equal vs Less vs
/// Greater), never concrete colors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PlaybackCommand {
    /// Uniform "search starting from here" transform over all elements,
    /// staggered per element by grid distance from the anchor.
    SettleIn {
        anchor: usize,
        columns: usize,
        delays_ms: Vec<f32>,
    },
    /// Highlight one probed element with its comparison outcome.
    Highlight {
        index: usize,
        comparison: Comparison,
        bounds: Bounds,
    },
    /// Terminal marker for a found target; the sink keeps `index`
    /// highlighted until the next start or reset.
    Settled { index: usize },
    /// Terminal marker for an absent target.
    NoMatch,
    /// Uniform return to base state for every element.
    ResetAll,
}

/// A command paired with its session and scheduled offset.
/// `session` is None only for surface-wide ResetAll.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Command {
    pub session: Option<SessionId>,
    pub at_ms: f32,
    pub command: PlaybackCommand,
}

/// Discrete semantic signals emitted during stepping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum CoreEvent {
    PlaybackStarted {
        session: SessionId,
    },
    PlaybackCancelled {
        session: SessionId,
    },
    /// The terminal command was emitted; `found_index` is None for a
    /// no-match run.
    PlaybackSettled {
        session: SessionId,
        found_index: Option<usize>,
    },
    PlaybackFinished {
        session: SessionId,
    },
    ResetApplied,
}

/// Outputs returned by Engine::update().
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub commands: Vec<Command>,
    #[serde(default)]
    pub events: Vec<CoreEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.commands.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_command(&mut self, command: Command) {
        self.commands.push(command);
    }

    #[inline]
    pub fn push_event(&mut self, event: CoreEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.events.is_empty()
    }
}
