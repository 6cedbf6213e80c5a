//! Probescope Search Core (engine-agnostic)
//!
//! This crate defines the probe-trace data model, the instrumented search
//! algorithms (linear, binary, jump), and the tick-driven playback
//! scheduler that turns a trace into an ordered, cancellable stream of
//! timed visual-state commands. Adapters (web/WASM) own rendering and
//! timers; the core owns ordering, causality, and cancellation.

pub mod config;
pub mod engine;
pub mod grid;
pub mod ids;
pub mod inputs;
pub mod outputs;
pub mod request;
pub mod scheduler;
pub mod search;
pub mod timeline;
pub mod trace;

// Re-exports for consumers (adapters)
pub use config::{Config, ConfigError};
pub use engine::Engine;
pub use ids::SessionId;
pub use inputs::{Inputs, Request};
pub use outputs::{Command, CoreEvent, Outputs, PlaybackCommand};
pub use request::{parse_search_request_json, RequestError, SearchRequest};
pub use scheduler::{PlaybackSession, Scheduler, SessionState};
pub use search::{run, Algorithm, SearchResult};
pub use timeline::{build_timeline, ScheduledCommand};
pub use trace::{Bounds, Comparison, ProbeEvent, SearchTrace};
