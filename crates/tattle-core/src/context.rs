//! The object a diagnostic message applies to.
//!
//! Engines typically highlight or select the context object when a console
//! entry is clicked. Here it is an opaque `(id, name)` pair; the facade never
//! inspects it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies the engine object a log entry, assertion or draw refers to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Context {
    /// Engine-assigned instance ID.
    pub id: u64,
    /// Human-readable object name (e.g. `"player"`).
    pub name: String,
}

impl Context {
    /// Create a context for the object with the given ID and name.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_name_and_id() {
        let ctx = Context::new(7, "player");
        assert_eq!(ctx.to_string(), "player (#7)");
    }

    #[test]
    fn serde_roundtrip() {
        let ctx = Context::new(42, "brick_3");
        let json = serde_json::to_string(&ctx).unwrap();
        let back: Context = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ctx);
    }
}
