//! Tattle Core -- contracts between the debug facade and a host engine.
//!
//! This crate defines what an engine must provide for the
//! [`tattle`](https://docs.rs/tattle) facade to forward into it: the
//! [`DebugEngine`](engine::DebugEngine) capability trait, the
//! [`Logger`](logger::Logger) handle it exposes, and the small value types
//! that cross the boundary ([`Vec3`](math::Vec3), [`Color`](math::Color),
//! [`Context`](context::Context), [`LogKind`](logger::LogKind)).
//!
//! Nothing in this crate is gated. Gating lives in the facade crate; engines
//! implement the full surface and receive only the calls that survive the
//! build-time gates.
//!
//! # Quick Start
//!
//! ```
//! use tattle_core::prelude::*;
//!
//! let engine = NopEngine;
//! engine.log(&"hello", None);
//! engine.draw_line(Vec3::ZERO, Vec3::UP, Color::WHITE, 0.0, true);
//! assert!(!engine.developer_console_visible());
//! ```

#![deny(unsafe_code)]

pub mod context;
pub mod engine;
pub mod logger;
pub mod math;

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for engine implementors.
pub mod prelude {
    pub use crate::context::Context;
    pub use crate::engine::{DebugEngine, NopEngine};
    pub use crate::logger::{LogKind, Logger, NopLogger};
    pub use crate::math::{Color, Vec3};
}
