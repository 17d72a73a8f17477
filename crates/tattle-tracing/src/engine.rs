//! [`TracingEngine`]: the concrete [`DebugEngine`] of this crate.
//!
//! Logging and assertions use the trait's default routing through
//! [`TracingLogger`]; this type supplies the properties, the draw list and the
//! pause/break state.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use tattle_core::engine::DebugEngine;
use tattle_core::logger::Logger;
use tattle_core::math::{Color, Vec3};

use crate::config::{ConfigError, EngineConfig};
use crate::console::DeveloperConsole;
use crate::draw::DebugDrawList;
use crate::logger::{TracingLogger, TARGET};

/// A debug engine that logs through `tracing` and keeps console and draw
/// state in memory for the host's UI and renderer to consume.
#[derive(Debug)]
pub struct TracingEngine {
    debug_build: bool,
    logger: TracingLogger,
    draw_list: DebugDrawList,
    paused: AtomicBool,
    debug_breaks: AtomicU64,
}

impl TracingEngine {
    /// Build an engine from a validated config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroConsoleCapacity`] if the config fails
    /// validation.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_config(&config))
    }

    fn from_config(config: &EngineConfig) -> Self {
        let console = DeveloperConsole::new(config.console_capacity, config.developer_console_visible);
        Self {
            debug_build: config.debug_build,
            logger: TracingLogger::new(config.log_enabled, config.filter, console),
            draw_list: DebugDrawList::new(),
            paused: AtomicBool::new(false),
            debug_breaks: AtomicU64::new(0),
        }
    }

    /// The developer console entries are mirrored into.
    pub fn console(&self) -> &DeveloperConsole {
        self.logger.console()
    }

    /// The queued debug lines.
    pub fn draw_list(&self) -> &DebugDrawList {
        &self.draw_list
    }

    /// Whether `break_execution` paused the game.
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Acquire)
    }

    /// Clear the pause set by `break_execution`.
    pub fn resume(&self) {
        if self.paused.swap(false, Ordering::AcqRel) {
            tracing::info!(target: TARGET, "execution resumed");
        }
    }

    /// How many times `debug_break` has been requested.
    pub fn debug_break_count(&self) -> u64 {
        self.debug_breaks.load(Ordering::Relaxed)
    }

    /// Finish a frame: age the draw list by `dt` seconds.
    ///
    /// Returns the number of expired lines.
    pub fn end_frame(&self, dt: f32) -> usize {
        self.draw_list.tick(dt)
    }
}

impl Default for TracingEngine {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl DebugEngine for TracingEngine {
    fn developer_console_visible(&self) -> bool {
        self.console().is_visible()
    }

    fn set_developer_console_visible(&self, visible: bool) {
        self.console().set_visible(visible);
    }

    fn is_debug_build(&self) -> bool {
        self.debug_build
    }

    fn logger(&self) -> &dyn Logger {
        &self.logger
    }

    fn break_execution(&self) {
        self.paused.store(true, Ordering::Release);
        tracing::warn!(target: TARGET, "execution paused");
    }

    fn debug_break(&self) {
        let count = self.debug_breaks.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::error!(target: TARGET, count, "debug break requested");
    }

    fn clear_developer_console(&self) {
        let cleared = self.console().len();
        self.console().clear();
        tracing::debug!(target: TARGET, cleared, "developer console cleared");
    }

    fn draw_line(&self, start: Vec3, end: Vec3, color: Color, duration: f32, depth_test: bool) {
        self.draw_list.push_line(start, end, color, duration, depth_test);
    }

    fn draw_ray(&self, start: Vec3, dir: Vec3, color: Color, duration: f32, depth_test: bool) {
        self.draw_list.push_ray(start, dir, color, duration, depth_test);
    }
}
