//! Playback sessions and the single-surface scheduler.
//!
//! One Scheduler drives one presentation surface. At most one session is
//! live (Running or Settling) at a time; a Start or Reset request moves
//! any live session straight to Cancelled before anything else happens,
//! and a cancelled session never emits another command.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::ids::{IdAllocator, SessionId};
use crate::inputs::{Inputs, Request};
use crate::outputs::{Command, CoreEvent, Outputs, PlaybackCommand};
use crate::search::SearchResult;
use crate::timeline::{build_timeline, ScheduledCommand};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum SessionState {
    Idle,
    Running,
    Settling,
    Cancelled,
    Done,
}

/// One playback run, from start to terminal or cancelled state.
#[derive(Debug)]
pub struct PlaybackSession {
    pub id: SessionId,
    pub state: SessionState,
    /// Carried from the SearchResult for the terminal event.
    pub found_index: Option<usize>,
    timeline: Vec<ScheduledCommand>,
    cursor: usize,
    time_ms: f32,
}

impl PlaybackSession {
    fn new(id: SessionId, timeline: Vec<ScheduledCommand>, found_index: Option<usize>) -> Self {
        Self {
            id,
            state: SessionState::Idle,
            found_index,
            timeline,
            cursor: 0,
            time_ms: 0.0,
        }
    }

    /// Offset of the terminal command. The timeline always ends with one.
    fn terminal_at_ms(&self) -> f32 {
        self.timeline.last().map(|c| c.at_ms).unwrap_or(0.0)
    }

    /// Total run length in session time, settle tail included.
    pub fn total_duration_ms(&self, cfg: &Config) -> f32 {
        self.terminal_at_ms() + cfg.settle_tail_ms
    }
}

/// Scheduler for one presentation surface.
#[derive(Debug, Default)]
pub struct Scheduler {
    active: Option<PlaybackSession>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&PlaybackSession> {
        self.active.as_ref()
    }

    /// Apply requests, then advance time and emit due commands.
    ///
    /// Requests are applied first, so a Start or Reset in `inputs`
    /// guarantees this tick's outputs contain nothing from the session it
    /// superseded.
    pub fn update(
        &mut self,
        dt_ms: f32,
        inputs: Inputs,
        cfg: &Config,
        ids: &mut IdAllocator,
        outputs: &mut Outputs,
    ) {
        for request in inputs.requests {
            match request {
                Request::Start {
                    entry_index,
                    result,
                    array_len,
                } => self.start(entry_index, &result, array_len, cfg, ids, outputs),
                Request::Cancel { session } => self.cancel(session, outputs),
                Request::Reset => self.reset(outputs),
            }
        }
        self.step(dt_ms, cfg, outputs);
    }

    fn start(
        &mut self,
        entry_index: usize,
        result: &SearchResult,
        array_len: usize,
        cfg: &Config,
        ids: &mut IdAllocator,
        outputs: &mut Outputs,
    ) {
        self.cancel_active(outputs);
        // Out-of-range entry index means "no anchor": fall back to 0.
        let anchor = if entry_index < array_len { entry_index } else { 0 };
        let timeline = build_timeline(anchor, result, array_len, cfg);
        let id = ids.alloc_session();
        self.active = Some(PlaybackSession::new(id, timeline, result.found_index));
    }

    fn cancel(&mut self, session: SessionId, outputs: &mut Outputs) {
        if self.active.as_ref().map_or(false, |s| s.id == session) {
            self.cancel_active(outputs);
        }
    }

    fn reset(&mut self, outputs: &mut Outputs) {
        self.cancel_active(outputs);
        outputs.push_command(Command {
            session: None,
            at_ms: 0.0,
            command: PlaybackCommand::ResetAll,
        });
        outputs.push_event(CoreEvent::ResetApplied);
    }

    /// Move the live session (if any) to Cancelled and drop it.
    fn cancel_active(&mut self, outputs: &mut Outputs) {
        if let Some(mut s) = self.active.take() {
            s.state = SessionState::Cancelled;
            outputs.push_event(CoreEvent::PlaybackCancelled { session: s.id });
        }
    }

    fn step(&mut self, dt_ms: f32, cfg: &Config, outputs: &mut Outputs) {
        let Some(s) = self.active.as_mut() else {
            return;
        };

        if s.state == SessionState::Idle {
            s.state = SessionState::Running;
            outputs.push_event(CoreEvent::PlaybackStarted { session: s.id });
        }
        s.time_ms += dt_ms;

        let mut emitted = 0usize;
        while s.state == SessionState::Running
            && s.cursor < s.timeline.len()
            && s.timeline[s.cursor].at_ms <= s.time_ms
            && emitted < cfg.max_commands_per_tick
        {
            let scheduled = s.timeline[s.cursor].clone();
            s.cursor += 1;
            emitted += 1;
            outputs.push_command(Command {
                session: Some(s.id),
                at_ms: scheduled.at_ms,
                command: scheduled.command,
            });
            if s.cursor == s.timeline.len() {
                s.state = SessionState::Settling;
                outputs.push_event(CoreEvent::PlaybackSettled {
                    session: s.id,
                    found_index: s.found_index,
                });
            }
        }

        let mut finished = false;
        if s.state == SessionState::Settling && s.time_ms >= s.total_duration_ms(cfg) {
            s.state = SessionState::Done;
            outputs.push_event(CoreEvent::PlaybackFinished { session: s.id });
            finished = true;
        }
        if finished {
            self.active = None;
        }
    }
}
