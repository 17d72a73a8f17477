//! The process-wide engine slot.
//!
//! Gated macros without an `engine:` key forward to whatever engine was
//! installed here. Installation happens at most once; until then calls go to
//! a [`NopEngine`].

use std::sync::OnceLock;

use tattle_core::engine::{DebugEngine, NopEngine};

use crate::gate;

/// Error returned when an engine is installed a second time.
#[derive(Debug, thiserror::Error)]
pub enum SetEngineError {
    /// An engine is already installed. The existing one stays in place.
    #[error("a debug engine is already installed -- `set_engine` may only be called once per process")]
    AlreadySet,
}

enum Slot {
    Static(&'static dyn DebugEngine),
    Boxed(Box<dyn DebugEngine>),
}

static ENGINE: OnceLock<Slot> = OnceLock::new();
static NOP: NopEngine = NopEngine;

/// Install the engine the facade forwards to.
///
/// # Errors
///
/// Returns [`SetEngineError::AlreadySet`] if an engine was installed before.
pub fn set_engine(engine: &'static dyn DebugEngine) -> Result<(), SetEngineError> {
    install(Slot::Static(engine))
}

/// Install an owned engine. It lives until the process exits.
///
/// # Errors
///
/// Returns [`SetEngineError::AlreadySet`] if an engine was installed before;
/// `engine` is dropped in that case.
pub fn set_boxed_engine(engine: Box<dyn DebugEngine>) -> Result<(), SetEngineError> {
    install(Slot::Boxed(engine))
}

fn install(slot: Slot) -> Result<(), SetEngineError> {
    ENGINE.set(slot).map_err(|_| SetEngineError::AlreadySet)?;
    tracing::debug!(
        logging = gate::GateSymbol::Logging.is_active(),
        assertions = gate::GateSymbol::Assertions.is_active(),
        "debug engine installed"
    );
    Ok(())
}

/// The installed engine, or a [`NopEngine`] if none was installed yet.
pub fn engine() -> &'static dyn DebugEngine {
    match ENGINE.get() {
        Some(Slot::Static(engine)) => *engine,
        Some(Slot::Boxed(engine)) => engine.as_ref(),
        None => &NOP,
    }
}

/// Whether [`set_engine`] or [`set_boxed_engine`] has succeeded.
pub fn is_engine_installed() -> bool {
    ENGINE.get().is_some()
}
