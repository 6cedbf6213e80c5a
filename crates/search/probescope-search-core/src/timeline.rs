//! Timeline construction: probe trace -> offset-ordered command schedule.
//!
//! Kept separate from the scheduler so the schedule itself is a pure
//! function of (anchor, result, array length, config) and testable without
//! driving ticks.

use crate::config::Config;
use crate::grid::{grid_columns, stagger_delays};
use crate::outputs::PlaybackCommand;
use crate::search::SearchResult;

/// A command with its scheduled offset from session start.
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduledCommand {
    pub at_ms: f32,
    pub command: PlaybackCommand,
}

/// Build the full command schedule for one playback session.
///
/// Order is fixed: settle-in at 0, one highlight per probe in trace order
/// spaced by `step_ms` starting after the settle-in window, then the
/// terminal settled/no-match marker. An empty trace schedules only the
/// settle-in and the no-match marker.
pub fn build_timeline(
    anchor: usize,
    result: &SearchResult,
    array_len: usize,
    cfg: &Config,
) -> Vec<ScheduledCommand> {
    let mut schedule = Vec::with_capacity(result.trace.len() + 2);

    let delays_ms = stagger_delays(array_len, anchor, cfg.stagger_ms);
    let max_delay = delays_ms.iter().fold(0.0f32, |a, &d| a.max(d));
    schedule.push(ScheduledCommand {
        at_ms: 0.0,
        command: PlaybackCommand::SettleIn {
            anchor,
            columns: grid_columns(array_len),
            delays_ms,
        },
    });

    // Highlights begin once the slowest element has settled in.
    let base = cfg.settle_in_ms + max_delay;
    for (i, probe) in result.trace.probes.iter().enumerate() {
        schedule.push(ScheduledCommand {
            at_ms: base + i as f32 * cfg.step_ms,
            command: PlaybackCommand::Highlight {
                index: probe.probed_index,
                comparison: probe.comparison,
                bounds: probe.bounds_before,
            },
        });
    }

    let terminal_at = base + result.trace.len() as f32 * cfg.step_ms;
    let terminal = match result.found_index {
        Some(index) => PlaybackCommand::Settled { index },
        None => PlaybackCommand::NoMatch,
    };
    schedule.push(ScheduledCommand {
        at_ms: terminal_at,
        command: terminal,
    });

    schedule
}
