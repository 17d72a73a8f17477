//! The engine's default logger handle.
//!
//! Every [`DebugEngine`](crate::engine::DebugEngine) owns one [`Logger`]. The
//! facade exposes it as a passthrough property so callers can toggle logging
//! or raise the filter at runtime without going through the gated macros.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::context::Context;

// ---------------------------------------------------------------------------
// LogKind
// ---------------------------------------------------------------------------

/// Category of a log entry.
///
/// Ordered by severity the way the filter compares them: `Error` is the most
/// severe and `Log` the least. `Exception` sits outside that scale: it always
/// passes an enabled logger, and using it as the filter lets everything
/// through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    /// An error message.
    Error,
    /// A failed assertion or an explicit assertion log.
    Assert,
    /// A warning.
    Warning,
    /// A regular informational message.
    Log,
    /// An error value reported through `log_exception`.
    Exception,
}

impl LogKind {
    /// All kinds, most severe first.
    pub const ALL: [LogKind; 5] = [
        LogKind::Error,
        LogKind::Assert,
        LogKind::Warning,
        LogKind::Log,
        LogKind::Exception,
    ];

    /// Lowercase name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            LogKind::Error => "error",
            LogKind::Assert => "assert",
            LogKind::Warning => "warning",
            LogKind::Log => "log",
            LogKind::Exception => "exception",
        }
    }
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether an entry of `kind` passes a logger with the given state.
///
/// Shared by [`Logger::is_log_kind_allowed`]'s default and by engines that
/// cache the state elsewhere.
pub fn kind_allowed(enabled: bool, filter: LogKind, kind: LogKind) -> bool {
    if !enabled {
        return false;
    }
    if kind == LogKind::Exception {
        return true;
    }
    filter == LogKind::Exception || kind <= filter
}

// ---------------------------------------------------------------------------
// Logger
// ---------------------------------------------------------------------------

/// A logger owned by the engine.
///
/// Setters take `&self`: the logger is shared behind the engine and
/// implementations are expected to use interior mutability.
pub trait Logger: Send + Sync {
    /// Whether logging is enabled at all.
    fn log_enabled(&self) -> bool;

    /// Enable or disable logging.
    fn set_log_enabled(&self, enabled: bool);

    /// The least severe kind that still passes.
    fn filter_log_kind(&self) -> LogKind;

    /// Change the filter.
    fn set_filter_log_kind(&self, kind: LogKind);

    /// Whether an entry of `kind` would be emitted right now.
    fn is_log_kind_allowed(&self, kind: LogKind) -> bool {
        kind_allowed(self.log_enabled(), self.filter_log_kind(), kind)
    }

    /// Emit one entry. Implementations check
    /// [`is_log_kind_allowed`](Self::is_log_kind_allowed) themselves.
    fn log(&self, kind: LogKind, message: &dyn fmt::Display, context: Option<&Context>);

    /// Emit one pre-formatted entry.
    fn log_format(&self, kind: LogKind, context: Option<&Context>, args: fmt::Arguments<'_>) {
        self.log(kind, &args, context);
    }

    /// Emit an error value as an [`LogKind::Exception`] entry.
    fn log_exception(&self, exception: &dyn Error, context: Option<&Context>) {
        self.log(LogKind::Exception, &exception, context);
    }
}

// ---------------------------------------------------------------------------
// NopLogger
// ---------------------------------------------------------------------------

/// A logger that is permanently disabled and discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NopLogger;

impl Logger for NopLogger {
    fn log_enabled(&self) -> bool {
        false
    }

    fn set_log_enabled(&self, _enabled: bool) {}

    fn filter_log_kind(&self) -> LogKind {
        LogKind::Log
    }

    fn set_filter_log_kind(&self, _kind: LogKind) {}

    fn log(&self, _kind: LogKind, _message: &dyn fmt::Display, _context: Option<&Context>) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_order() {
        assert!(LogKind::Error < LogKind::Assert);
        assert!(LogKind::Assert < LogKind::Warning);
        assert!(LogKind::Warning < LogKind::Log);
    }

    #[test]
    fn disabled_logger_allows_nothing() {
        for kind in LogKind::ALL {
            assert!(!kind_allowed(false, LogKind::Exception, kind));
        }
    }

    #[test]
    fn exception_always_passes_enabled_logger() {
        assert!(kind_allowed(true, LogKind::Error, LogKind::Exception));
    }

    #[test]
    fn warning_filter_drops_plain_logs() {
        assert!(kind_allowed(true, LogKind::Warning, LogKind::Error));
        assert!(kind_allowed(true, LogKind::Warning, LogKind::Assert));
        assert!(kind_allowed(true, LogKind::Warning, LogKind::Warning));
        assert!(!kind_allowed(true, LogKind::Warning, LogKind::Log));
    }

    #[test]
    fn exception_filter_allows_everything() {
        for kind in LogKind::ALL {
            assert!(kind_allowed(true, LogKind::Exception, kind));
        }
    }

    #[test]
    fn serialized_names_are_lowercase() {
        assert_eq!(serde_json::to_string(&LogKind::Warning).unwrap(), "\"warning\"");
        let kind: LogKind = serde_json::from_str("\"exception\"").unwrap();
        assert_eq!(kind, LogKind::Exception);
        assert_eq!(kind.to_string(), "exception");
    }

    #[test]
    fn nop_logger_reports_disabled() {
        let logger = NopLogger;
        logger.set_log_enabled(true);
        assert!(!logger.log_enabled());
        assert!(!logger.is_log_kind_allowed(LogKind::Exception));
    }
}
