//! In-memory developer console.
//!
//! A bounded ring of recent log entries plus a visibility flag. A game's UI
//! layer reads [`DeveloperConsole::entries`] to draw the overlay; this crate
//! never renders it.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use tattle_core::context::Context;
use tattle_core::logger::LogKind;

/// One line in the developer console.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleEntry {
    pub kind: LogKind,
    pub message: String,
    pub context: Option<Context>,
}

/// Bounded log history with a visibility flag.
///
/// When full, pushing evicts the oldest entry.
#[derive(Debug)]
pub struct DeveloperConsole {
    entries: Mutex<VecDeque<ConsoleEntry>>,
    capacity: usize,
    visible: AtomicBool,
}

impl DeveloperConsole {
    /// Create an empty console holding at most `capacity` entries.
    ///
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize, visible: bool) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
            visible: AtomicBool::new(visible),
        }
    }

    /// Append an entry, evicting the oldest one when full.
    pub fn push(&self, entry: ConsoleEntry) {
        let mut entries = self.lock();
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// Snapshot of the current entries, oldest first.
    pub fn entries(&self) -> Vec<ConsoleEntry> {
        self.lock().iter().cloned().collect()
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the console holds no entries.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Maximum number of entries kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Remove every entry.
    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::Acquire)
    }

    pub fn set_visible(&self, visible: bool) {
        self.visible.store(visible, Ordering::Release);
    }

    // The ring is valid after any panic mid-push; poisoning is ignored.
    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<ConsoleEntry>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
