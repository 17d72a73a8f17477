//! Debug-draw line buffer.
//!
//! Lines are queued by `draw_line`/`draw_ray` and stay in the list until
//! [`DebugDrawList::tick`] has aged them past their duration. A renderer
//! calls [`DebugDrawList::lines`] once per frame, draws them, then calls
//! `tick` with the frame's delta time.
//!
//! | Duration | Frames visible |
//! |----------|----------------|
//! | `<= 0.0` | exactly one |
//! | `d > 0.0` | until `d` seconds of `tick` have elapsed |

use std::sync::Mutex;

use tattle_core::math::{Color, Vec3};

/// One queued line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugLine {
    pub start: Vec3,
    pub end: Vec3,
    pub color: Color,
    /// Requested lifetime in seconds.
    pub duration: f32,
    /// Whether the line is hidden behind geometry.
    pub depth_test: bool,
    /// Seconds elapsed since the line was queued.
    pub age: f32,
}

/// Thread-safe queue of debug lines.
#[derive(Debug, Default)]
pub struct DebugDrawList {
    lines: Mutex<Vec<DebugLine>>,
}

impl DebugDrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a line segment.
    pub fn push_line(&self, start: Vec3, end: Vec3, color: Color, duration: f32, depth_test: bool) {
        self.lock().push(DebugLine {
            start,
            end,
            color,
            duration,
            depth_test,
            age: 0.0,
        });
    }

    /// Queue a ray as the segment `start..start + dir`.
    pub fn push_ray(&self, start: Vec3, dir: Vec3, color: Color, duration: f32, depth_test: bool) {
        self.push_line(start, start + dir, color, duration, depth_test);
    }

    /// Snapshot of the lines to draw this frame.
    pub fn lines(&self) -> Vec<DebugLine> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Age every line by `dt` seconds and drop the expired ones.
    ///
    /// Returns the number of lines removed.
    pub fn tick(&self, dt: f32) -> usize {
        let mut lines = self.lock();
        let before = lines.len();
        lines.retain_mut(|line| {
            line.age += dt;
            line.duration > 0.0 && line.age < line.duration
        });
        before - lines.len()
    }

    /// Drop every line regardless of age.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<DebugLine>> {
        self.lines.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
