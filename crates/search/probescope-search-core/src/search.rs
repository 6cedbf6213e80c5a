//! Instrumented search algorithms.
//!
//! Each algorithm is a pure function of (values, target): identical inputs
//! yield an identical SearchResult including trace order. Nothing here
//! fails; an empty array or absent target is a normal input that yields
//! `found_index: None` with whatever trace the algorithm produced.

use serde::{Deserialize, Serialize};

use crate::trace::{Bounds, Comparison, ProbeEvent, SearchTrace};

/// Which algorithm to run. Dispatch is by variant, not string matching;
/// new algorithms extend the enum.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Linear,
    Binary,
    Jump,
}

/// Result of one search run: the located index (last Equal probe) and the
/// full probe trace for replay.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub found_index: Option<usize>,
    pub trace: SearchTrace,
}

/// Run `algorithm` over `values` looking for `target`.
///
/// Binary and jump search require `values` sorted ascending; that
/// precondition is owned by the caller and not verified. On unsorted
/// input the probe sequence is still deterministic, just not guaranteed
/// to find the target.
pub fn run(values: &[i32], target: i32, algorithm: Algorithm) -> SearchResult {
    match algorithm {
        Algorithm::Linear => linear_search(values, target),
        Algorithm::Binary => binary_search(values, target),
        Algorithm::Jump => jump_search(values, target),
    }
}

/// Probe 0, 1, 2, ... in order; stop at the first Equal or the end.
/// Less/Greater are recorded for symmetry even though linear search does
/// not use ordering to prune.
fn linear_search(values: &[i32], target: i32) -> SearchResult {
    let mut trace = SearchTrace::with_capacity(values.len());
    let mut found = None;

    for (i, &v) in values.iter().enumerate() {
        let comparison = Comparison::of(v, target);
        trace.record(ProbeEvent {
            probed_index: i,
            probed_value: v,
            comparison,
            bounds_before: Bounds { low: 0, high: i },
        });
        if comparison == Comparison::Equal {
            found = Some(i);
            break;
        }
    }

    SearchResult {
        found_index: found,
        trace,
    }
}

/// Classic halving over a sorted slice. The window is tracked as i64 so
/// `high` can pass below zero at termination without wrapping.
fn binary_search(values: &[i32], target: i32) -> SearchResult {
    let mut trace = SearchTrace::default();
    let mut found = None;

    let mut low: i64 = 0;
    let mut high: i64 = values.len() as i64 - 1;

    while low <= high {
        let mid = low + (high - low) / 2;
        let v = values[mid as usize];
        let comparison = Comparison::of(v, target);
        trace.record(ProbeEvent {
            probed_index: mid as usize,
            probed_value: v,
            comparison,
            bounds_before: Bounds {
                low: low as usize,
                high: high as usize,
            },
        });
        match comparison {
            Comparison::Equal => {
                found = Some(mid as usize);
                break;
            }
            Comparison::Less => low = mid + 1,
            Comparison::Greater => high = mid - 1,
        }
    }

    SearchResult {
        found_index: found,
        trace,
    }
}

/// Jump search over a sorted slice: probe block heads `0, s, 2s, ...`
/// with `s = floor(sqrt(len))`, then linearly scan the single block that
/// can still contain the target (the block before the overshooting head,
/// or the tail block past the last head).
///
/// Block-head probes record the block they gate as their window; scan
/// probes record `{low: scan_start, high: index}`.
fn jump_search(values: &[i32], target: i32) -> SearchResult {
    let mut trace = SearchTrace::default();
    let mut found = None;

    let len = values.len();
    let step = ((len as f64).sqrt() as usize).max(1);

    // Half-open range left to scan linearly once block probing stops.
    let mut scan: Option<(usize, usize)> = None;

    let mut head = 0;
    while head < len {
        let v = values[head];
        let comparison = Comparison::of(v, target);
        trace.record(ProbeEvent {
            probed_index: head,
            probed_value: v,
            comparison,
            bounds_before: Bounds {
                low: head,
                high: (head + step - 1).min(len - 1),
            },
        });
        match comparison {
            Comparison::Equal => {
                found = Some(head);
                break;
            }
            Comparison::Greater => {
                // Overshot: the target can only be in the previous block.
                scan = Some((head.saturating_sub(step), head));
                break;
            }
            Comparison::Less => {
                if head + step >= len {
                    scan = Some((head + 1, len));
                    break;
                }
                head += step;
            }
        }
    }

    if found.is_none() {
        if let Some((start, end)) = scan {
            for i in start..end {
                let v = values[i];
                let comparison = Comparison::of(v, target);
                trace.record(ProbeEvent {
                    probed_index: i,
                    probed_value: v,
                    comparison,
                    bounds_before: Bounds { low: start, high: i },
                });
                if comparison == Comparison::Equal {
                    found = Some(i);
                    break;
                }
            }
        }
    }

    SearchResult {
        found_index: found,
        trace,
    }
}
