//! Recording engine shared by the facade integration tests.
//!
//! Every `DebugEngine` method is overridden to record its exact arguments, so
//! tests can assert both how many calls reached the engine and what they
//! carried.

#![allow(dead_code)]

use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use tattle::{Color, Context, DebugEngine, LogKind, Logger, Vec3};

// ---------------------------------------------------------------------------
// Recorded calls
// ---------------------------------------------------------------------------

/// One forwarded call, with its arguments rendered to owned values.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Assert {
        condition: bool,
        message: Option<String>,
        context: Option<Context>,
    },
    AssertFormat {
        condition: bool,
        context: Option<Context>,
        text: String,
    },
    BreakExecution,
    DebugBreak,
    ClearDeveloperConsole,
    DrawLine {
        start: Vec3,
        end: Vec3,
        color: Color,
        duration: f32,
        depth_test: bool,
    },
    DrawRay {
        start: Vec3,
        dir: Vec3,
        color: Color,
        duration: f32,
        depth_test: bool,
    },
    /// `log`, `log_warning`, `log_error`, `log_assertion`.
    Message {
        method: &'static str,
        message: String,
        context: Option<Context>,
    },
    /// The `*_format` logging methods.
    Format {
        method: &'static str,
        context: Option<Context>,
        text: String,
    },
    Exception {
        message: String,
        context: Option<Context>,
    },
}

impl Call {
    pub fn message(method: &'static str, message: &str, context: Option<&Context>) -> Self {
        Call::Message {
            method,
            message: message.to_owned(),
            context: context.cloned(),
        }
    }

    pub fn format(method: &'static str, text: &str, context: Option<&Context>) -> Self {
        Call::Format {
            method,
            context: context.cloned(),
            text: text.to_owned(),
        }
    }
}

// ---------------------------------------------------------------------------
// SwitchLogger
// ---------------------------------------------------------------------------

/// A logger with real enabled/filter state and no output.
pub struct SwitchLogger {
    enabled: AtomicBool,
    filter: Mutex<LogKind>,
}

impl Default for SwitchLogger {
    fn default() -> Self {
        Self {
            enabled: AtomicBool::new(true),
            filter: Mutex::new(LogKind::Log),
        }
    }
}

impl Logger for SwitchLogger {
    fn log_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    fn set_log_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    fn filter_log_kind(&self) -> LogKind {
        *self.filter.lock().unwrap()
    }

    fn set_filter_log_kind(&self, kind: LogKind) {
        *self.filter.lock().unwrap() = kind;
    }

    fn log(&self, _kind: LogKind, _message: &dyn fmt::Display, _context: Option<&Context>) {}
}

// ---------------------------------------------------------------------------
// RecordingEngine
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct RecordingEngine {
    calls: Mutex<Vec<Call>>,
    console_visible: AtomicBool,
    logger: SwitchLogger,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, in call order.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn message(&self, method: &'static str, message: &dyn fmt::Display, context: Option<&Context>) {
        self.record(Call::Message {
            method,
            message: message.to_string(),
            context: context.cloned(),
        });
    }

    fn format(&self, method: &'static str, context: Option<&Context>, args: fmt::Arguments<'_>) {
        self.record(Call::Format {
            method,
            context: context.cloned(),
            text: args.to_string(),
        });
    }
}

impl DebugEngine for RecordingEngine {
    fn developer_console_visible(&self) -> bool {
        self.console_visible.load(Ordering::SeqCst)
    }

    fn set_developer_console_visible(&self, visible: bool) {
        self.console_visible.store(visible, Ordering::SeqCst);
    }

    fn is_debug_build(&self) -> bool {
        true
    }

    fn logger(&self) -> &dyn Logger {
        &self.logger
    }

    fn assert(&self, condition: bool, message: Option<&dyn fmt::Display>, context: Option<&Context>) {
        self.record(Call::Assert {
            condition,
            message: message.map(|m| m.to_string()),
            context: context.cloned(),
        });
    }

    fn assert_format(&self, condition: bool, context: Option<&Context>, args: fmt::Arguments<'_>) {
        self.record(Call::AssertFormat {
            condition,
            context: context.cloned(),
            text: args.to_string(),
        });
    }

    fn break_execution(&self) {
        self.record(Call::BreakExecution);
    }

    fn debug_break(&self) {
        self.record(Call::DebugBreak);
    }

    fn clear_developer_console(&self) {
        self.record(Call::ClearDeveloperConsole);
    }

    fn draw_line(&self, start: Vec3, end: Vec3, color: Color, duration: f32, depth_test: bool) {
        self.record(Call::DrawLine {
            start,
            end,
            color,
            duration,
            depth_test,
        });
    }

    fn draw_ray(&self, start: Vec3, dir: Vec3, color: Color, duration: f32, depth_test: bool) {
        self.record(Call::DrawRay {
            start,
            dir,
            color,
            duration,
            depth_test,
        });
    }

    fn log(&self, message: &dyn fmt::Display, context: Option<&Context>) {
        self.message("log", message, context);
    }

    fn log_format(&self, context: Option<&Context>, args: fmt::Arguments<'_>) {
        self.format("log_format", context, args);
    }

    fn log_warning(&self, message: &dyn fmt::Display, context: Option<&Context>) {
        self.message("log_warning", message, context);
    }

    fn log_warning_format(&self, context: Option<&Context>, args: fmt::Arguments<'_>) {
        self.format("log_warning_format", context, args);
    }

    fn log_error(&self, message: &dyn fmt::Display, context: Option<&Context>) {
        self.message("log_error", message, context);
    }

    fn log_error_format(&self, context: Option<&Context>, args: fmt::Arguments<'_>) {
        self.format("log_error_format", context, args);
    }

    fn log_assertion(&self, message: &dyn fmt::Display, context: Option<&Context>) {
        self.message("log_assertion", message, context);
    }

    fn log_assertion_format(&self, context: Option<&Context>, args: fmt::Arguments<'_>) {
        self.format("log_assertion_format", context, args);
    }

    fn log_exception(&self, exception: &dyn Error, context: Option<&Context>) {
        self.record(Call::Exception {
            message: exception.to_string(),
            context: context.cloned(),
        });
    }
}

/// `vec![call]` when `enabled`, otherwise empty.
pub fn expect_if(enabled: bool, call: Call) -> Vec<Call> {
    if enabled {
        vec![call]
    } else {
        Vec::new()
    }
}
