//! A [`Logger`] that emits `tracing` events and mirrors them into the
//! developer console.
//!
//! Log kinds map to `tracing` levels under the `"tattle"` target:
//!
//! | Kind | Level |
//! |------|-------|
//! | `Log` | `INFO` |
//! | `Warning` | `WARN` |
//! | `Error`, `Assert`, `Exception` | `ERROR` |

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use tattle_core::context::Context;
use tattle_core::logger::{LogKind, Logger};

use crate::console::{ConsoleEntry, DeveloperConsole};

/// `tracing` target used for every forwarded entry.
pub const TARGET: &str = "tattle";

fn kind_to_u8(kind: LogKind) -> u8 {
    match kind {
        LogKind::Error => 0,
        LogKind::Assert => 1,
        LogKind::Warning => 2,
        LogKind::Log => 3,
        LogKind::Exception => 4,
    }
}

fn kind_from_u8(raw: u8) -> LogKind {
    match raw {
        0 => LogKind::Error,
        1 => LogKind::Assert,
        2 => LogKind::Warning,
        3 => LogKind::Log,
        _ => LogKind::Exception,
    }
}

/// Logger state plus the console it writes to.
#[derive(Debug)]
pub struct TracingLogger {
    enabled: AtomicBool,
    filter: AtomicU8,
    console: DeveloperConsole,
}

impl TracingLogger {
    pub fn new(enabled: bool, filter: LogKind, console: DeveloperConsole) -> Self {
        Self {
            enabled: AtomicBool::new(enabled),
            filter: AtomicU8::new(kind_to_u8(filter)),
            console,
        }
    }

    /// The console entries are mirrored into.
    pub fn console(&self) -> &DeveloperConsole {
        &self.console
    }
}

impl Logger for TracingLogger {
    fn log_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    fn set_log_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    fn filter_log_kind(&self) -> LogKind {
        kind_from_u8(self.filter.load(Ordering::Relaxed))
    }

    fn set_filter_log_kind(&self, kind: LogKind) {
        self.filter.store(kind_to_u8(kind), Ordering::Relaxed);
    }

    fn log(&self, kind: LogKind, message: &dyn fmt::Display, context: Option<&Context>) {
        if !self.is_log_kind_allowed(kind) {
            return;
        }
        let message = message.to_string();
        emit(kind, &message, context);
        self.console.push(ConsoleEntry {
            kind,
            message,
            context: context.cloned(),
        });
    }
}

fn emit(kind: LogKind, message: &str, context: Option<&Context>) {
    let context_id = context.map(|c| c.id);
    let context_name = context.map(|c| c.name.as_str());
    match kind {
        LogKind::Log => tracing::info!(
            target: TARGET,
            kind = kind.as_str(),
            context.id = context_id,
            context.name = context_name,
            "{message}"
        ),
        LogKind::Warning => tracing::warn!(
            target: TARGET,
            kind = kind.as_str(),
            context.id = context_id,
            context.name = context_name,
            "{message}"
        ),
        LogKind::Error | LogKind::Assert | LogKind::Exception => tracing::error!(
            target: TARGET,
            kind = kind.as_str(),
            context.id = context_id,
            context.name = context_name,
            "{message}"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logger(filter: LogKind) -> TracingLogger {
        TracingLogger::new(true, filter, DeveloperConsole::new(8, false))
    }

    #[test]
    fn kind_encoding_roundtrips() {
        for kind in LogKind::ALL {
            assert_eq!(kind_from_u8(kind_to_u8(kind)), kind);
        }
    }

    #[test]
    fn allowed_entries_reach_console() {
        let logger = logger(LogKind::Log);
        let ctx = Context::new(5, "enemy");
        logger.log(LogKind::Warning, &"too close", Some(&ctx));
        assert_eq!(
            logger.console().entries(),
            vec![ConsoleEntry {
                kind: LogKind::Warning,
                message: "too close".into(),
                context: Some(ctx),
            }]
        );
    }

    #[test]
    fn filtered_entries_are_dropped() {
        let logger = logger(LogKind::Error);
        logger.log(LogKind::Log, &"chatter", None);
        logger.log(LogKind::Warning, &"chatter", None);
        logger.log(LogKind::Error, &"kept", None);
        assert_eq!(logger.console().len(), 1);
    }

    #[test]
    fn disabled_logger_drops_exceptions_too() {
        let logger = logger(LogKind::Log);
        logger.set_log_enabled(false);
        let err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        logger.log_exception(&err, None);
        assert!(logger.console().is_empty());
    }

    #[test]
    fn filter_setter_is_observed() {
        let logger = logger(LogKind::Log);
        logger.set_filter_log_kind(LogKind::Assert);
        assert_eq!(logger.filter_log_kind(), LogKind::Assert);
        assert!(!logger.is_log_kind_allowed(LogKind::Warning));
        assert!(logger.is_log_kind_allowed(LogKind::Exception));
    }
}
