//! Engine: data ownership and public API (search + tick-driven playback).
//!
//! Methods:
//! - new, run_search (pure), update (apply requests -> advance -> emit),
//!   session accessors

use crate::config::Config;
use crate::ids::{IdAllocator, SessionId};
use crate::inputs::Inputs;
use crate::outputs::Outputs;
use crate::scheduler::{Scheduler, SessionState};
use crate::search::{self, Algorithm, SearchResult};

/// Engine owning one playback surface.
#[derive(Debug)]
pub struct Engine {
    cfg: Config,
    ids: IdAllocator,
    scheduler: Scheduler,

    // Per-tick outputs
    outputs: Outputs,
}

impl Engine {
    /// Create a new engine with the given config.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            ids: IdAllocator::new(),
            scheduler: Scheduler::new(),
            outputs: Outputs::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Execute a search. Pure: the array is borrowed read-only, never
    /// stored, and identical inputs always yield an identical result.
    pub fn run_search(&self, values: &[i32], target: i32, algorithm: Algorithm) -> SearchResult {
        search::run(values, target, algorithm)
    }

    /// Step playback by dt with given inputs, producing outputs.
    /// Requests apply before time advances, so a Start or Reset in
    /// `inputs` fully supersedes the previous session within this tick.
    pub fn update(&mut self, dt_ms: f32, inputs: Inputs) -> &Outputs {
        self.outputs.clear();
        self.scheduler
            .update(dt_ms, inputs, &self.cfg, &mut self.ids, &mut self.outputs);
        &self.outputs
    }

    /// Id and state of the session currently occupying the surface.
    pub fn session_state(&self) -> Option<(SessionId, SessionState)> {
        self.scheduler.active().map(|s| (s.id, s.state))
    }

    /// Total scheduled length of the active session, settle tail included.
    pub fn session_total_duration_ms(&self) -> Option<f32> {
        self.scheduler
            .active()
            .map(|s| s.total_duration_ms(&self.cfg))
    }
}
