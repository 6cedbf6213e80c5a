//! Core configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Timing and sizing knobs for playback.
///
/// None of these are contractual: only command ordering is. The defaults
/// carry the visual tuning of the web visualizer.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Duration of the settle-in transform itself, before stagger.
    pub settle_in_ms: f32,
    /// Stagger added per grid cell of distance from the anchor.
    pub stagger_ms: f32,
    /// Interval between consecutive probe highlights.
    pub step_ms: f32,
    /// How long a session holds in Settling after its terminal command
    /// before it is Done.
    pub settle_tail_ms: f32,
    /// Maximum commands emitted in a single tick; the remainder carries
    /// over to following ticks in order.
    pub max_commands_per_tick: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settle_in_ms: 400.0,
            stagger_ms: 40.0,
            step_ms: 350.0,
            settle_tail_ms: 600.0,
            max_commands_per_tick: 256,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("'{field}' must be finite and >= 0, got {value}")]
    InvalidDuration { field: &'static str, value: f32 },
    #[error("max_commands_per_tick must be > 0")]
    ZeroCommandCap,
}

impl Config {
    /// Validate basic invariants (finite non-negative durations, non-zero
    /// command cap). Runtime code paths assume a validated config.
    pub fn validate_basic(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("settle_in_ms", self.settle_in_ms),
            ("stagger_ms", self.stagger_ms),
            ("step_ms", self.step_ms),
            ("settle_tail_ms", self.settle_tail_ms),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidDuration { field, value });
            }
        }
        if self.max_commands_per_tick == 0 {
            return Err(ConfigError::ZeroCommandCap);
        }
        Ok(())
    }
}
