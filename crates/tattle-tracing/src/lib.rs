//! Tattle Tracing -- a debug engine backed by `tracing`.
//!
//! [`TracingEngine`] implements the full [`DebugEngine`](tattle_core::engine::DebugEngine)
//! surface for hosts that do not bring their own:
//!
//! - log entries become `tracing` events (target `"tattle"`) and are mirrored
//!   into a bounded [`DeveloperConsole`];
//! - debug lines are queued in a [`DebugDrawList`] that a renderer drains
//!   each frame;
//! - `break_execution` and `debug_break` set inspectable state instead of
//!   touching the process.
//!
//! # Quick Start
//!
//! ```
//! use tattle_core::prelude::*;
//! use tattle_tracing::{EngineConfig, TracingEngine};
//!
//! tattle_tracing::init_subscriber("info");
//!
//! let engine = TracingEngine::new(EngineConfig::default()).unwrap();
//! engine.log(&"level loaded", None);
//! engine.draw_ray(Vec3::ZERO, Vec3::UP, Color::GREEN, 0.0, true);
//!
//! assert_eq!(engine.console().len(), 1);
//! assert_eq!(engine.draw_list().len(), 1);
//! ```

#![deny(unsafe_code)]

pub mod config;
pub mod console;
pub mod draw;
pub mod engine;
pub mod logger;

pub use config::{ConfigError, EngineConfig};
pub use console::{ConsoleEntry, DeveloperConsole};
pub use draw::{DebugDrawList, DebugLine};
pub use engine::TracingEngine;
pub use logger::TracingLogger;

use tracing_subscriber::EnvFilter;

/// Install a global `fmt` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_directive` (e.g. `"info"` or
/// `"tattle=debug"`) is used. Returns `false` if a global subscriber was
/// already installed, which makes repeated calls harmless.
pub fn init_subscriber(default_directive: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
