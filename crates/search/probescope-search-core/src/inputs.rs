//! Input contracts for the core.
//!
//! All session control flows through Requests applied at the top of
//! Engine::update(), which is the single critical section: start, cancel,
//! and reset are mutually exclusive by construction, so two sessions can
//! never be live at once.

use serde::{Deserialize, Serialize};

use crate::ids::SessionId;
use crate::search::SearchResult;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Inputs {
    /// Session requests applied before stepping.
    #[serde(default)]
    pub requests: Vec<Request>,
}

impl Inputs {
    /// Convenience for the common single-request drive.
    pub fn one(request: Request) -> Self {
        Self {
            requests: vec![request],
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Request {
    /// Cancel any live session, then start playback of `result` anchored
    /// at `entry_index` (the clicked element or the located target).
    /// An out-of-range anchor falls back to index 0.
    Start {
        entry_index: usize,
        result: SearchResult,
        array_len: usize,
    },
    /// Idempotent: only a live session with this id is affected.
    Cancel { session: SessionId },
    /// Cancel any live session, then force a uniform return to base
    /// state. Valid with no session active.
    Reset,
}
