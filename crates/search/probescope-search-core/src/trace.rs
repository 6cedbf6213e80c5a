//! Probe trace data model.
//!
//! A search run produces an ordered log of every comparison it performed.
//! The log is append-only while the run executes and immutable afterwards;
//! the playback scheduler replays it without ever touching the array again.

use serde::{Deserialize, Serialize};

/// Outcome of comparing the probed value against the target.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Comparison {
    Less,
    Equal,
    Greater,
}

impl Comparison {
    /// Compare a probed value to the target from the probe's point of view.
    #[inline]
    pub fn of(probed: i32, target: i32) -> Self {
        match probed.cmp(&target) {
            std::cmp::Ordering::Less => Comparison::Less,
            std::cmp::Ordering::Equal => Comparison::Equal,
            std::cmp::Ordering::Greater => Comparison::Greater,
        }
    }
}

/// The active search window before a probe, inclusive on both ends.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub low: usize,
    pub high: usize,
}

/// One comparison performed during a search.
///
/// `probed_value` duplicates `values[probed_index]` so a trace replays
/// without the array being available. Fields are fixed; nothing is added
/// ad hoc.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ProbeEvent {
    pub probed_index: usize,
    pub probed_value: i32,
    pub comparison: Comparison,
    /// Window before this probe. Binary search probes the floor midpoint
    /// of this window; linear search records `{low: 0, high: index}`.
    pub bounds_before: Bounds,
}

/// Ordered log of probes; insertion order is execution order.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SearchTrace {
    #[serde(default)]
    pub probes: Vec<ProbeEvent>,
}

impl SearchTrace {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            probes: Vec::with_capacity(cap),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.probes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }

    #[inline]
    pub(crate) fn record(&mut self, event: ProbeEvent) {
        self.probes.push(event);
    }

    /// Index of the last probe that compared Equal, if any.
    pub fn last_equal_index(&self) -> Option<usize> {
        self.probes
            .iter()
            .rev()
            .find(|p| p.comparison == Comparison::Equal)
            .map(|p| p.probed_index)
    }
}
