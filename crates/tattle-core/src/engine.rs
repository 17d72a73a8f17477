//! The engine capability trait every facade call forwards into.
//!
//! [`DebugEngine`] is the complete debug surface of a host engine:
//!
//! - **Properties:** developer-console visibility, debug-build flag, default
//!   logger.
//! - **Assertions:** `assert`, `assert_format`.
//! - **Logging:** `log`, `log_warning`, `log_error`, `log_assertion`,
//!   `log_exception` and the `*_format` forms.
//! - **Debug draw:** `draw_line`, `draw_ray`.
//! - **Utility:** `break_execution`, `debug_break`, `clear_developer_console`.
//!
//! The assertion and logging methods have default implementations that route
//! through [`DebugEngine::logger`], so an engine only has to provide the
//! properties, draw, utility and logger pieces. Test doubles override
//! everything to record the exact arguments they receive.

use std::error::Error;
use std::fmt;

use crate::context::Context;
use crate::logger::{LogKind, Logger, NopLogger};
use crate::math::{Color, Vec3};

/// Message logged by the default [`DebugEngine::assert`] when none is given.
pub const ASSERTION_FAILED: &str = "Assertion failed";

// ---------------------------------------------------------------------------
// DebugEngine
// ---------------------------------------------------------------------------

/// The debug-and-logging surface of a host engine.
///
/// All methods take `&self` and must be callable from any thread; the facade
/// adds no locking of its own.
pub trait DebugEngine: Send + Sync {
    // --- Properties -------------------------------------------------------

    /// Whether the in-game developer console is shown.
    fn developer_console_visible(&self) -> bool;

    /// Show or hide the in-game developer console.
    fn set_developer_console_visible(&self, visible: bool);

    /// Whether this is a development build.
    fn is_debug_build(&self) -> bool;

    /// The engine's default logger.
    fn logger(&self) -> &dyn Logger;

    // --- Assertions -------------------------------------------------------

    /// Log an assertion failure when `condition` is false.
    fn assert(
        &self,
        condition: bool,
        message: Option<&dyn fmt::Display>,
        context: Option<&Context>,
    ) {
        if !condition {
            let message = message.unwrap_or(&ASSERTION_FAILED);
            self.logger().log(LogKind::Assert, message, context);
        }
    }

    /// Log a formatted assertion failure when `condition` is false.
    fn assert_format(&self, condition: bool, context: Option<&Context>, args: fmt::Arguments<'_>) {
        if !condition {
            self.logger().log_format(LogKind::Assert, context, args);
        }
    }

    // --- Utility ----------------------------------------------------------

    /// Pause the running game (the editor-level pause, not a debugger trap).
    fn break_execution(&self);

    /// Request a break into an attached native debugger.
    fn debug_break(&self);

    /// Remove all entries from the developer console.
    fn clear_developer_console(&self);

    // --- Debug draw -------------------------------------------------------

    /// Draw a line segment from `start` to `end`.
    ///
    /// A `duration` of zero means the line is visible for one frame.
    fn draw_line(&self, start: Vec3, end: Vec3, color: Color, duration: f32, depth_test: bool);

    /// Draw a line from `start` to `start + dir`.
    fn draw_ray(&self, start: Vec3, dir: Vec3, color: Color, duration: f32, depth_test: bool);

    // --- Logging ----------------------------------------------------------

    /// Log a message.
    fn log(&self, message: &dyn fmt::Display, context: Option<&Context>) {
        self.logger().log(LogKind::Log, message, context);
    }

    /// Log a formatted message.
    fn log_format(&self, context: Option<&Context>, args: fmt::Arguments<'_>) {
        self.logger().log_format(LogKind::Log, context, args);
    }

    /// Log a warning.
    fn log_warning(&self, message: &dyn fmt::Display, context: Option<&Context>) {
        self.logger().log(LogKind::Warning, message, context);
    }

    /// Log a formatted warning.
    fn log_warning_format(&self, context: Option<&Context>, args: fmt::Arguments<'_>) {
        self.logger().log_format(LogKind::Warning, context, args);
    }

    /// Log an error.
    fn log_error(&self, message: &dyn fmt::Display, context: Option<&Context>) {
        self.logger().log(LogKind::Error, message, context);
    }

    /// Log a formatted error.
    fn log_error_format(&self, context: Option<&Context>, args: fmt::Arguments<'_>) {
        self.logger().log_format(LogKind::Error, context, args);
    }

    /// Log an assertion message unconditionally.
    fn log_assertion(&self, message: &dyn fmt::Display, context: Option<&Context>) {
        self.logger().log(LogKind::Assert, message, context);
    }

    /// Log a formatted assertion message unconditionally.
    fn log_assertion_format(&self, context: Option<&Context>, args: fmt::Arguments<'_>) {
        self.logger().log_format(LogKind::Assert, context, args);
    }

    /// Log an error value.
    fn log_exception(&self, exception: &dyn Error, context: Option<&Context>) {
        self.logger().log_exception(exception, context);
    }
}

// ---------------------------------------------------------------------------
// NopEngine
// ---------------------------------------------------------------------------

/// An engine that ignores every call.
///
/// The facade forwards here until a real engine is installed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NopEngine;

impl DebugEngine for NopEngine {
    fn developer_console_visible(&self) -> bool {
        false
    }

    fn set_developer_console_visible(&self, _visible: bool) {}

    fn is_debug_build(&self) -> bool {
        false
    }

    fn logger(&self) -> &dyn Logger {
        &NopLogger
    }

    fn break_execution(&self) {}

    fn debug_break(&self) {}

    fn clear_developer_console(&self) {}

    fn draw_line(&self, _start: Vec3, _end: Vec3, _color: Color, _duration: f32, _depth_test: bool) {
    }

    fn draw_ray(&self, _start: Vec3, _dir: Vec3, _color: Color, _duration: f32, _depth_test: bool) {
    }
}
