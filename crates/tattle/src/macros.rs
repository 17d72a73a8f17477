//! The gated macro catalog.
//!
//! Every public macro parses its arguments, fills in defaults, and hands the
//! finished engine call to one of two gate macros. Each gate macro has two
//! definitions selected by `#[cfg]` on this crate's features: the open one
//! emits the call, the closed one discards the tokens and emits `()`. The
//! discarded tokens are never type-checked, evaluated or code-generated.
//!
//! Argument conventions shared by all macros:
//!
//! - `engine: <expr>,` first targets that engine (`&E` where
//!   `E: DebugEngine`) instead of [`crate::engine()`].
//! - `context: <expr>,` next passes `Some(<expr>)` (a `&Context`) as the
//!   context; otherwise `None` is forwarded.
//! - Messages are borrowed (`&message`) and forwarded as `&dyn Display`;
//!   `*_format!` macros take `format_args!` syntax.

// ---------------------------------------------------------------------------
// Gates
// ---------------------------------------------------------------------------

#[cfg(feature = "logging")]
#[doc(hidden)]
#[macro_export]
macro_rules! __gate_logging {
    ($($call:tt)*) => {
        $($call)*
    };
}

#[cfg(not(feature = "logging"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __gate_logging {
    ($($call:tt)*) => {
        ()
    };
}

#[cfg(any(feature = "logging", feature = "assertions"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __gate_logging_or_assertions {
    ($($call:tt)*) => {
        $($call)*
    };
}

#[cfg(not(any(feature = "logging", feature = "assertions")))]
#[doc(hidden)]
#[macro_export]
macro_rules! __gate_logging_or_assertions {
    ($($call:tt)*) => {
        ()
    };
}

// ---------------------------------------------------------------------------
// Assertion -- gate: logging | assertions
// ---------------------------------------------------------------------------

/// Assert a condition; the engine logs an assertion failure when it is false.
///
/// Gate: `logging` OR `assertions`. The condition is forwarded as-is, so the
/// engine receives the call whether it holds or not.
///
/// ```
/// # let player = tattle::Context::new(1, "player");
/// # let hp = 3;
/// tattle::assert_that!(hp > 0);
/// tattle::assert_that!(hp > 0, "player died");
/// tattle::assert_that!(context: &player, hp > 0);
/// tattle::assert_that!(context: &player, hp > 0, "player died");
/// ```
#[macro_export]
macro_rules! assert_that {
    (engine: $engine:expr, context: $context:expr, $condition:expr, $message:expr $(,)?) => {
        $crate::__gate_logging_or_assertions! {
            $crate::__private::DebugEngine::assert(
                $engine,
                $condition,
                $crate::__private::Some(&$message as &dyn ::core::fmt::Display),
                $crate::__private::Some($context),
            )
        }
    };
    (engine: $engine:expr, context: $context:expr, $condition:expr $(,)?) => {
        $crate::__gate_logging_or_assertions! {
            $crate::__private::DebugEngine::assert(
                $engine,
                $condition,
                $crate::__private::None,
                $crate::__private::Some($context),
            )
        }
    };
    (engine: $engine:expr, $condition:expr, $message:expr $(,)?) => {
        $crate::__gate_logging_or_assertions! {
            $crate::__private::DebugEngine::assert(
                $engine,
                $condition,
                $crate::__private::Some(&$message as &dyn ::core::fmt::Display),
                $crate::__private::None,
            )
        }
    };
    (engine: $engine:expr, $condition:expr $(,)?) => {
        $crate::__gate_logging_or_assertions! {
            $crate::__private::DebugEngine::assert(
                $engine,
                $condition,
                $crate::__private::None,
                $crate::__private::None,
            )
        }
    };
    (context: $context:expr, $condition:expr $(, $message:expr)? $(,)?) => {
        $crate::assert_that!(engine: $crate::engine(), context: $context, $condition $(, $message)?)
    };
    ($condition:expr $(, $message:expr)? $(,)?) => {
        $crate::assert_that!(engine: $crate::engine(), $condition $(, $message)?)
    };
}

/// Assert a condition with a formatted failure message.
///
/// Gate: `logging` OR `assertions`.
///
/// ```
/// # let hp = 3;
/// tattle::assert_format!(hp > 0, "hp went negative: {}", hp);
/// ```
#[macro_export]
macro_rules! assert_format {
    (engine: $engine:expr, context: $context:expr, $condition:expr, $($arg:tt)+) => {
        $crate::__gate_logging_or_assertions! {
            $crate::__private::DebugEngine::assert_format(
                $engine,
                $condition,
                $crate::__private::Some($context),
                $crate::__private::format_args!($($arg)+),
            )
        }
    };
    (engine: $engine:expr, $condition:expr, $($arg:tt)+) => {
        $crate::__gate_logging_or_assertions! {
            $crate::__private::DebugEngine::assert_format(
                $engine,
                $condition,
                $crate::__private::None,
                $crate::__private::format_args!($($arg)+),
            )
        }
    };
    (context: $context:expr, $condition:expr, $($arg:tt)+) => {
        $crate::assert_format!(engine: $crate::engine(), context: $context, $condition, $($arg)+)
    };
    ($condition:expr, $($arg:tt)+) => {
        $crate::assert_format!(engine: $crate::engine(), $condition, $($arg)+)
    };
}

// ---------------------------------------------------------------------------
// Utility -- gate: logging
// ---------------------------------------------------------------------------

/// Pause the running game. Gate: `logging`.
#[macro_export]
macro_rules! break_execution {
    (engine: $engine:expr $(,)?) => {
        $crate::__gate_logging! {
            $crate::__private::DebugEngine::break_execution($engine)
        }
    };
    () => {
        $crate::break_execution!(engine: $crate::engine())
    };
}

/// Ask the engine to trap into an attached native debugger. Gate: `logging`.
#[macro_export]
macro_rules! debug_break {
    (engine: $engine:expr $(,)?) => {
        $crate::__gate_logging! {
            $crate::__private::DebugEngine::debug_break($engine)
        }
    };
    () => {
        $crate::debug_break!(engine: $crate::engine())
    };
}

/// Clear the developer console. Gate: `logging`.
#[macro_export]
macro_rules! clear_developer_console {
    (engine: $engine:expr $(,)?) => {
        $crate::__gate_logging! {
            $crate::__private::DebugEngine::clear_developer_console($engine)
        }
    };
    () => {
        $crate::clear_developer_console!(engine: $crate::engine())
    };
}

// ---------------------------------------------------------------------------
// Debug draw -- gate: logging
// ---------------------------------------------------------------------------

/// Draw a line between two world-space points. Gate: `logging`.
///
/// Trailing parameters are optional, in order: `color`
/// ([`DEFAULT_COLOR`](crate::DEFAULT_COLOR)), `duration` in seconds
/// ([`DEFAULT_DURATION`](crate::DEFAULT_DURATION)) and `depth_test`
/// ([`DEFAULT_DEPTH_TEST`](crate::DEFAULT_DEPTH_TEST)).
///
/// ```
/// use tattle::{Color, Vec3};
///
/// tattle::draw_line!(Vec3::ZERO, Vec3::ONE);
/// tattle::draw_line!(Vec3::ZERO, Vec3::ONE, Color::GREEN, 0.5, false);
/// ```
#[macro_export]
macro_rules! draw_line {
    (engine: $engine:expr, $start:expr, $end:expr, $color:expr, $duration:expr, $depth_test:expr $(,)?) => {
        $crate::__gate_logging! {
            $crate::__private::DebugEngine::draw_line($engine, $start, $end, $color, $duration, $depth_test)
        }
    };
    (engine: $engine:expr, $start:expr, $end:expr, $color:expr, $duration:expr $(,)?) => {
        $crate::draw_line!(engine: $engine, $start, $end, $color, $duration, $crate::DEFAULT_DEPTH_TEST)
    };
    (engine: $engine:expr, $start:expr, $end:expr, $color:expr $(,)?) => {
        $crate::draw_line!(
            engine: $engine,
            $start,
            $end,
            $color,
            $crate::DEFAULT_DURATION,
            $crate::DEFAULT_DEPTH_TEST
        )
    };
    (engine: $engine:expr, $start:expr, $end:expr $(,)?) => {
        $crate::draw_line!(
            engine: $engine,
            $start,
            $end,
            $crate::DEFAULT_COLOR,
            $crate::DEFAULT_DURATION,
            $crate::DEFAULT_DEPTH_TEST
        )
    };
    ($start:expr, $end:expr $(, $optional:expr)* $(,)?) => {
        $crate::draw_line!(engine: $crate::engine(), $start, $end $(, $optional)*)
    };
}

/// Draw a ray from `start` along `dir`. Gate: `logging`.
///
/// Optional trailing parameters and defaults match [`draw_line!`].
#[macro_export]
macro_rules! draw_ray {
    (engine: $engine:expr, $start:expr, $dir:expr, $color:expr, $duration:expr, $depth_test:expr $(,)?) => {
        $crate::__gate_logging! {
            $crate::__private::DebugEngine::draw_ray($engine, $start, $dir, $color, $duration, $depth_test)
        }
    };
    (engine: $engine:expr, $start:expr, $dir:expr, $color:expr, $duration:expr $(,)?) => {
        $crate::draw_ray!(engine: $engine, $start, $dir, $color, $duration, $crate::DEFAULT_DEPTH_TEST)
    };
    (engine: $engine:expr, $start:expr, $dir:expr, $color:expr $(,)?) => {
        $crate::draw_ray!(
            engine: $engine,
            $start,
            $dir,
            $color,
            $crate::DEFAULT_DURATION,
            $crate::DEFAULT_DEPTH_TEST
        )
    };
    (engine: $engine:expr, $start:expr, $dir:expr $(,)?) => {
        $crate::draw_ray!(
            engine: $engine,
            $start,
            $dir,
            $crate::DEFAULT_COLOR,
            $crate::DEFAULT_DURATION,
            $crate::DEFAULT_DEPTH_TEST
        )
    };
    ($start:expr, $dir:expr $(, $optional:expr)* $(,)?) => {
        $crate::draw_ray!(engine: $crate::engine(), $start, $dir $(, $optional)*)
    };
}

// ---------------------------------------------------------------------------
// Logging -- gate: logging
// ---------------------------------------------------------------------------

/// Log a message. Gate: `logging`.
///
/// ```
/// # let door = tattle::Context::new(9, "door");
/// tattle::log!("door opened");
/// tattle::log!(context: &door, "opened");
/// ```
#[macro_export]
macro_rules! log {
    (engine: $engine:expr, context: $context:expr, $message:expr $(,)?) => {
        $crate::__gate_logging! {
            $crate::__private::DebugEngine::log($engine, &$message, $crate::__private::Some($context))
        }
    };
    (engine: $engine:expr, $message:expr $(,)?) => {
        $crate::__gate_logging! {
            $crate::__private::DebugEngine::log($engine, &$message, $crate::__private::None)
        }
    };
    (context: $context:expr, $message:expr $(,)?) => {
        $crate::log!(engine: $crate::engine(), context: $context, $message)
    };
    ($message:expr $(,)?) => {
        $crate::log!(engine: $crate::engine(), $message)
    };
}

/// Log a formatted message. Gate: `logging`.
///
/// ```
/// # let score = 120;
/// tattle::log_format!("score: {score}");
/// ```
#[macro_export]
macro_rules! log_format {
    (engine: $engine:expr, context: $context:expr, $($arg:tt)+) => {
        $crate::__gate_logging! {
            $crate::__private::DebugEngine::log_format(
                $engine,
                $crate::__private::Some($context),
                $crate::__private::format_args!($($arg)+),
            )
        }
    };
    (engine: $engine:expr, $($arg:tt)+) => {
        $crate::__gate_logging! {
            $crate::__private::DebugEngine::log_format(
                $engine,
                $crate::__private::None,
                $crate::__private::format_args!($($arg)+),
            )
        }
    };
    (context: $context:expr, $($arg:tt)+) => {
        $crate::log_format!(engine: $crate::engine(), context: $context, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_format!(engine: $crate::engine(), $($arg)+)
    };
}

/// Log a warning. Gate: `logging`.
#[macro_export]
macro_rules! log_warning {
    (engine: $engine:expr, context: $context:expr, $message:expr $(,)?) => {
        $crate::__gate_logging! {
            $crate::__private::DebugEngine::log_warning($engine, &$message, $crate::__private::Some($context))
        }
    };
    (engine: $engine:expr, $message:expr $(,)?) => {
        $crate::__gate_logging! {
            $crate::__private::DebugEngine::log_warning($engine, &$message, $crate::__private::None)
        }
    };
    (context: $context:expr, $message:expr $(,)?) => {
        $crate::log_warning!(engine: $crate::engine(), context: $context, $message)
    };
    ($message:expr $(,)?) => {
        $crate::log_warning!(engine: $crate::engine(), $message)
    };
}

/// Log a formatted warning. Gate: `logging`.
#[macro_export]
macro_rules! log_warning_format {
    (engine: $engine:expr, context: $context:expr, $($arg:tt)+) => {
        $crate::__gate_logging! {
            $crate::__private::DebugEngine::log_warning_format(
                $engine,
                $crate::__private::Some($context),
                $crate::__private::format_args!($($arg)+),
            )
        }
    };
    (engine: $engine:expr, $($arg:tt)+) => {
        $crate::__gate_logging! {
            $crate::__private::DebugEngine::log_warning_format(
                $engine,
                $crate::__private::None,
                $crate::__private::format_args!($($arg)+),
            )
        }
    };
    (context: $context:expr, $($arg:tt)+) => {
        $crate::log_warning_format!(engine: $crate::engine(), context: $context, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_warning_format!(engine: $crate::engine(), $($arg)+)
    };
}

/// Log an error. Gate: `logging`.
#[macro_export]
macro_rules! log_error {
    (engine: $engine:expr, context: $context:expr, $message:expr $(,)?) => {
        $crate::__gate_logging! {
            $crate::__private::DebugEngine::log_error($engine, &$message, $crate::__private::Some($context))
        }
    };
    (engine: $engine:expr, $message:expr $(,)?) => {
        $crate::__gate_logging! {
            $crate::__private::DebugEngine::log_error($engine, &$message, $crate::__private::None)
        }
    };
    (context: $context:expr, $message:expr $(,)?) => {
        $crate::log_error!(engine: $crate::engine(), context: $context, $message)
    };
    ($message:expr $(,)?) => {
        $crate::log_error!(engine: $crate::engine(), $message)
    };
}

/// Log a formatted error. Gate: `logging`.
#[macro_export]
macro_rules! log_error_format {
    (engine: $engine:expr, context: $context:expr, $($arg:tt)+) => {
        $crate::__gate_logging! {
            $crate::__private::DebugEngine::log_error_format(
                $engine,
                $crate::__private::Some($context),
                $crate::__private::format_args!($($arg)+),
            )
        }
    };
    (engine: $engine:expr, $($arg:tt)+) => {
        $crate::__gate_logging! {
            $crate::__private::DebugEngine::log_error_format(
                $engine,
                $crate::__private::None,
                $crate::__private::format_args!($($arg)+),
            )
        }
    };
    (context: $context:expr, $($arg:tt)+) => {
        $crate::log_error_format!(engine: $crate::engine(), context: $context, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_error_format!(engine: $crate::engine(), $($arg)+)
    };
}

/// Log an error value (anything implementing [`std::error::Error`]).
/// Gate: `logging`.
///
/// ```
/// let err = std::io::Error::new(std::io::ErrorKind::NotFound, "save file missing");
/// tattle::log_exception!(err);
/// ```
#[macro_export]
macro_rules! log_exception {
    (engine: $engine:expr, context: $context:expr, $exception:expr $(,)?) => {
        $crate::__gate_logging! {
            $crate::__private::DebugEngine::log_exception($engine, &$exception, $crate::__private::Some($context))
        }
    };
    (engine: $engine:expr, $exception:expr $(,)?) => {
        $crate::__gate_logging! {
            $crate::__private::DebugEngine::log_exception($engine, &$exception, $crate::__private::None)
        }
    };
    (context: $context:expr, $exception:expr $(,)?) => {
        $crate::log_exception!(engine: $crate::engine(), context: $context, $exception)
    };
    ($exception:expr $(,)?) => {
        $crate::log_exception!(engine: $crate::engine(), $exception)
    };
}

// ---------------------------------------------------------------------------
// Assertion logging -- gate: logging | assertions
// ---------------------------------------------------------------------------

/// Log an assertion message without checking a condition.
///
/// Gate: `logging` OR `assertions`.
#[macro_export]
macro_rules! log_assertion {
    (engine: $engine:expr, context: $context:expr, $message:expr $(,)?) => {
        $crate::__gate_logging_or_assertions! {
            $crate::__private::DebugEngine::log_assertion($engine, &$message, $crate::__private::Some($context))
        }
    };
    (engine: $engine:expr, $message:expr $(,)?) => {
        $crate::__gate_logging_or_assertions! {
            $crate::__private::DebugEngine::log_assertion($engine, &$message, $crate::__private::None)
        }
    };
    (context: $context:expr, $message:expr $(,)?) => {
        $crate::log_assertion!(engine: $crate::engine(), context: $context, $message)
    };
    ($message:expr $(,)?) => {
        $crate::log_assertion!(engine: $crate::engine(), $message)
    };
}

/// Log a formatted assertion message without checking a condition.
///
/// Gate: `logging` OR `assertions`.
#[macro_export]
macro_rules! log_assertion_format {
    (engine: $engine:expr, context: $context:expr, $($arg:tt)+) => {
        $crate::__gate_logging_or_assertions! {
            $crate::__private::DebugEngine::log_assertion_format(
                $engine,
                $crate::__private::Some($context),
                $crate::__private::format_args!($($arg)+),
            )
        }
    };
    (engine: $engine:expr, $($arg:tt)+) => {
        $crate::__gate_logging_or_assertions! {
            $crate::__private::DebugEngine::log_assertion_format(
                $engine,
                $crate::__private::None,
                $crate::__private::format_args!($($arg)+),
            )
        }
    };
    (context: $context:expr, $($arg:tt)+) => {
        $crate::log_assertion_format!(engine: $crate::engine(), context: $context, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_assertion_format!(engine: $crate::engine(), $($arg)+)
    };
}
