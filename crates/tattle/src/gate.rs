//! Gate symbols and the operation catalog, as data.
//!
//! The macros in this crate are gated with `#[cfg]` on the crate's own
//! features, which is what physically removes closed calls. This module
//! describes the same policy as values so that tools (and tests) can ask
//! which operations a build keeps:
//!
//! | Category | Gate set |
//! |----------|----------|
//! | Assertion, assertion logging | `logging` OR `assertions` |
//! | Logging, debug draw, utility | `logging` |
//! | Passthrough properties | none (always open) |
//!
//! A gate set is **open** when it is empty or when at least one of its
//! symbols is active. Symbols are never combined with AND.

use std::fmt;

// ---------------------------------------------------------------------------
// GateSymbol
// ---------------------------------------------------------------------------

/// A build-time flag. Each symbol is a cargo feature of this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateSymbol {
    /// The `logging` feature.
    Logging,
    /// The `assertions` feature.
    Assertions,
}

impl GateSymbol {
    /// Every symbol, in declaration order.
    pub const ALL: [GateSymbol; 2] = [GateSymbol::Logging, GateSymbol::Assertions];

    /// The cargo feature name.
    pub const fn name(self) -> &'static str {
        match self {
            GateSymbol::Logging => "logging",
            GateSymbol::Assertions => "assertions",
        }
    }

    /// Whether the feature is enabled in this build.
    pub const fn is_active(self) -> bool {
        match self {
            GateSymbol::Logging => cfg!(feature = "logging"),
            GateSymbol::Assertions => cfg!(feature = "assertions"),
        }
    }
}

impl fmt::Display for GateSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The symbols enabled in this build.
pub fn active_symbols() -> impl Iterator<Item = GateSymbol> {
    GateSymbol::ALL.into_iter().filter(|s| s.is_active())
}

// ---------------------------------------------------------------------------
// GateSet
// ---------------------------------------------------------------------------

/// The symbols attached to one operation, combined with OR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GateSet {
    logging: bool,
    assertions: bool,
}

impl GateSet {
    /// No symbols: the operation always runs.
    pub const ALWAYS: GateSet = GateSet {
        logging: false,
        assertions: false,
    };

    /// Runs when `logging` is active.
    pub const LOGGING: GateSet = GateSet {
        logging: true,
        assertions: false,
    };

    /// Runs when `logging` or `assertions` is active.
    pub const LOGGING_OR_ASSERTIONS: GateSet = GateSet {
        logging: true,
        assertions: true,
    };

    /// Whether `symbol` is part of the set.
    pub const fn contains(self, symbol: GateSymbol) -> bool {
        match symbol {
            GateSymbol::Logging => self.logging,
            GateSymbol::Assertions => self.assertions,
        }
    }

    /// Whether the set has no symbols.
    pub const fn is_empty(self) -> bool {
        !self.logging && !self.assertions
    }

    /// Whether an operation carrying this set runs in this build.
    pub const fn is_open(self) -> bool {
        self.is_empty()
            || (self.logging && GateSymbol::Logging.is_active())
            || (self.assertions && GateSymbol::Assertions.is_active())
    }

    /// The symbols in the set.
    pub fn symbols(self) -> impl Iterator<Item = GateSymbol> {
        GateSymbol::ALL.into_iter().filter(move |s| self.contains(*s))
    }
}

impl fmt::Display for GateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("always");
        }
        let mut first = true;
        for symbol in self.symbols() {
            if !first {
                f.write_str(" | ")?;
            }
            f.write_str(symbol.name())?;
            first = false;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Groups operations that share a gate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Assertion,
    Logging,
    AssertionLogging,
    DebugDraw,
    Utility,
    Passthrough,
}

impl Category {
    /// The gate set shared by every operation in the category.
    pub const fn gate_set(self) -> GateSet {
        match self {
            Category::Assertion | Category::AssertionLogging => GateSet::LOGGING_OR_ASSERTIONS,
            Category::Logging | Category::DebugDraw | Category::Utility => GateSet::LOGGING,
            Category::Passthrough => GateSet::ALWAYS,
        }
    }
}

// ---------------------------------------------------------------------------
// Operation
// ---------------------------------------------------------------------------

/// One entry point of the facade. Overloads of the same operation are arms
/// of one macro and share the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    DeveloperConsoleVisible,
    SetDeveloperConsoleVisible,
    IsDebugBuild,
    Logger,
    Assert,
    AssertFormat,
    BreakExecution,
    DebugBreak,
    ClearDeveloperConsole,
    DrawLine,
    DrawRay,
    Log,
    LogFormat,
    LogWarning,
    LogWarningFormat,
    LogError,
    LogErrorFormat,
    LogAssertion,
    LogAssertionFormat,
    LogException,
}

/// Every operation the facade exposes.
pub const CATALOG: [Operation; 20] = [
    Operation::DeveloperConsoleVisible,
    Operation::SetDeveloperConsoleVisible,
    Operation::IsDebugBuild,
    Operation::Logger,
    Operation::Assert,
    Operation::AssertFormat,
    Operation::BreakExecution,
    Operation::DebugBreak,
    Operation::ClearDeveloperConsole,
    Operation::DrawLine,
    Operation::DrawRay,
    Operation::Log,
    Operation::LogFormat,
    Operation::LogWarning,
    Operation::LogWarningFormat,
    Operation::LogError,
    Operation::LogErrorFormat,
    Operation::LogAssertion,
    Operation::LogAssertionFormat,
    Operation::LogException,
];

impl Operation {
    /// The macro or function name callers use.
    pub const fn name(self) -> &'static str {
        match self {
            Operation::DeveloperConsoleVisible => "developer_console_visible",
            Operation::SetDeveloperConsoleVisible => "set_developer_console_visible",
            Operation::IsDebugBuild => "is_debug_build",
            Operation::Logger => "logger",
            Operation::Assert => "assert_that",
            Operation::AssertFormat => "assert_format",
            Operation::BreakExecution => "break_execution",
            Operation::DebugBreak => "debug_break",
            Operation::ClearDeveloperConsole => "clear_developer_console",
            Operation::DrawLine => "draw_line",
            Operation::DrawRay => "draw_ray",
            Operation::Log => "log",
            Operation::LogFormat => "log_format",
            Operation::LogWarning => "log_warning",
            Operation::LogWarningFormat => "log_warning_format",
            Operation::LogError => "log_error",
            Operation::LogErrorFormat => "log_error_format",
            Operation::LogAssertion => "log_assertion",
            Operation::LogAssertionFormat => "log_assertion_format",
            Operation::LogException => "log_exception",
        }
    }

    /// The category the operation belongs to.
    pub const fn category(self) -> Category {
        match self {
            Operation::DeveloperConsoleVisible
            | Operation::SetDeveloperConsoleVisible
            | Operation::IsDebugBuild
            | Operation::Logger => Category::Passthrough,
            Operation::Assert | Operation::AssertFormat => Category::Assertion,
            Operation::BreakExecution
            | Operation::DebugBreak
            | Operation::ClearDeveloperConsole => Category::Utility,
            Operation::DrawLine | Operation::DrawRay => Category::DebugDraw,
            Operation::Log
            | Operation::LogFormat
            | Operation::LogWarning
            | Operation::LogWarningFormat
            | Operation::LogError
            | Operation::LogErrorFormat
            | Operation::LogException => Category::Logging,
            Operation::LogAssertion | Operation::LogAssertionFormat => Category::AssertionLogging,
        }
    }

    /// The symbols gating this operation.
    pub const fn gate_set(self) -> GateSet {
        self.category().gate_set()
    }

    /// Whether calls to this operation survive in this build.
    pub const fn is_enabled(self) -> bool {
        self.gate_set().is_open()
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
