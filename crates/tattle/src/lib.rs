//! Tattle -- a compile-time gated debug facade.
//!
//! Game code calls logging, assertion and debug-draw macros unconditionally.
//! Whether a call reaches the engine is decided when *this* crate is
//! compiled, by two cargo features:
//!
//! - `logging` opens logging, debug draw, utility, assertion and
//!   assertion-logging calls.
//! - `assertions` opens assertion and assertion-logging calls only.
//!
//! When none of a macro's gate features is enabled the macro expands to `()`.
//! The forwarded call and every argument expression disappear from the
//! caller, so side effects in arguments never happen and the disabled call
//! costs nothing. Because the `cfg` is evaluated here rather than in the
//! calling crate, every crate in a build sees the same gates.
//!
//! The passthrough properties ([`developer_console_visible`],
//! [`set_developer_console_visible`], [`is_debug_build`], [`logger`]) are
//! plain functions and are never gated.
//!
//! # Quick Start
//!
//! ```
//! use tattle::{Color, Context, Vec3};
//!
//! let player = Context::new(1, "player");
//! let hp = 10;
//!
//! tattle::log!("level loaded");
//! tattle::log_warning!(context: &player, "low health");
//! tattle::log_format!("hp = {}", hp);
//! tattle::assert_that!(hp > 0, "player should be alive");
//! tattle::draw_line!(Vec3::ZERO, Vec3::UP);
//! tattle::draw_ray!(Vec3::ZERO, Vec3::RIGHT, Color::RED, 2.0);
//! ```
//!
//! # Targeting an explicit engine
//!
//! Every macro accepts a leading `engine: <&impl DebugEngine>,` key. Without
//! it calls go to the engine installed with [`set_engine`] (a
//! [`NopEngine`] until then).
//!
//! ```
//! use tattle::NopEngine;
//!
//! let engine = NopEngine;
//! tattle::log_error!(engine: &engine, "sent to this engine only");
//! ```
//!
//! # Forwarding
//!
//! Open calls forward their arguments unchanged and in order to the matching
//! [`DebugEngine`] method. Omitted draw parameters are filled with
//! [`DEFAULT_COLOR`], [`DEFAULT_DURATION`] and [`DEFAULT_DEPTH_TEST`]; omitted
//! messages and contexts are forwarded as `None`. Nothing is caught: a panic
//! in the engine unwinds straight through the facade.

#![deny(unsafe_code)]

pub mod gate;
mod macros;
pub mod registry;

pub use registry::{engine, is_engine_installed, set_boxed_engine, set_engine, SetEngineError};
pub use tattle_core::context::Context;
pub use tattle_core::engine::{DebugEngine, NopEngine};
pub use tattle_core::logger::{LogKind, Logger};
pub use tattle_core::math::{Color, Vec3};

/// Re-export the core crate for engine implementors.
pub use tattle_core;

// ---------------------------------------------------------------------------
// Draw defaults
// ---------------------------------------------------------------------------

/// Color used by `draw_line!` / `draw_ray!` when none is given.
pub const DEFAULT_COLOR: Color = Color::WHITE;

/// Duration in seconds used when none is given. Zero means one frame.
pub const DEFAULT_DURATION: f32 = 0.0;

/// Depth-test flag used when none is given.
pub const DEFAULT_DEPTH_TEST: bool = true;

// ---------------------------------------------------------------------------
// Passthrough properties
// ---------------------------------------------------------------------------

/// Whether the engine's developer console is visible.
pub fn developer_console_visible() -> bool {
    engine().developer_console_visible()
}

/// Show or hide the engine's developer console.
pub fn set_developer_console_visible(visible: bool) {
    engine().set_developer_console_visible(visible);
}

/// Whether the engine reports a development build.
///
/// This is the engine's own flag, unrelated to the gate features.
pub fn is_debug_build() -> bool {
    engine().is_debug_build()
}

/// The engine's default logger.
pub fn logger() -> &'static dyn Logger {
    engine().logger()
}

// ---------------------------------------------------------------------------
// Macro support
// ---------------------------------------------------------------------------

#[doc(hidden)]
pub mod __private {
    pub use ::core::format_args;
    pub use ::core::option::Option::{None, Some};
    pub use tattle_core::engine::DebugEngine;
}
