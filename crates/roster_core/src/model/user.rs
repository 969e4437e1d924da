//! User record model.
//!
//! # Responsibility
//! - Define the record both backends create, list, rename and remove.
//!
//! # Invariants
//! - `id` never changes after creation and is never reused for another
//!   record within one store.
//! - `name` carries no constraints: empty and duplicate values are allowed.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Stable identifier for a user record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// The in-memory backend assigns these from a monotonic counter; the sqlite
/// backend delegates to the table's integer identity column.
pub type UserId = i64;

/// One user entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Assigned by the store at creation time, positive.
    pub id: UserId,
    /// Free text, mutable via rename.
    pub name: String,
}

impl User {
    /// Creates a record with a store-assigned id.
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Display for User {
    /// Renders the console list line shape, `<id> - <name>`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.id, self.name)
    }
}
