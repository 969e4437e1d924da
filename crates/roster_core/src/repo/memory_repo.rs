//! In-memory user store.
//!
//! # Responsibility
//! - Provide the non-persistent twin of the sqlite backend behind the same
//!   `UserRepository` contract.
//!
//! # Invariants
//! - `next_id` starts at 1, grows on every successful add and is never
//!   reused, even after removes.
//! - Records keep insertion order, which is also ascending id order.

use crate::model::user::{User, UserId};
use crate::repo::user_repo::{RepoResult, UpdateOutcome, UserRepository};

/// Ordered, growable collection of records owned by this store instance.
///
/// Data is lost when the store is dropped.
#[derive(Debug)]
pub struct MemoryUserRepository {
    users: Vec<User>,
    next_id: UserId,
}

impl Default for MemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryUserRepository {
    /// Creates an empty store with the id counter at its starting value.
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
        }
    }
}

impl UserRepository for MemoryUserRepository {
    fn add_user(&mut self, name: &str) -> RepoResult<User> {
        let user = User::new(self.next_id, name);
        self.next_id += 1;
        self.users.push(user.clone());
        Ok(user)
    }

    fn list_users(&self) -> RepoResult<Vec<User>> {
        Ok(self.users.clone())
    }

    fn rename_user(&mut self, id: UserId, new_name: &str) -> RepoResult<UpdateOutcome> {
        match self.users.iter_mut().find(|user| user.id == id) {
            Some(user) => {
                user.name = new_name.to_string();
                Ok(UpdateOutcome::Applied)
            }
            None => Ok(UpdateOutcome::NotFound),
        }
    }

    fn remove_user(&mut self, id: UserId) -> RepoResult<UpdateOutcome> {
        let before = self.users.len();
        self.users.retain(|user| user.id != id);

        if self.users.len() == before {
            return Ok(UpdateOutcome::NotFound);
        }

        Ok(UpdateOutcome::Applied)
    }
}
