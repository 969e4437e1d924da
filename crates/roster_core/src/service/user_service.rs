//! User use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for the command loop.
//! - Delegate persistence to the selected store implementation.
//!
//! # Invariants
//! - Service APIs never bypass store contracts.
//! - The service layer remains storage-agnostic: it holds whichever backend
//!   was selected at startup, including a boxed one.

use crate::model::user::{User, UserId};
use crate::repo::user_repo::{RepoResult, UpdateOutcome, UserRepository};

/// Use-case service wrapper for user CRUD operations.
pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a service using the provided store implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a record from one line of command input.
    ///
    /// The name is stored as given: empty and duplicate names are allowed.
    pub fn add_user(&mut self, name: &str) -> RepoResult<User> {
        self.repo.add_user(name)
    }

    /// Lists all records ordered by ascending id.
    pub fn list_users(&self) -> RepoResult<Vec<User>> {
        self.repo.list_users()
    }

    /// Renames one record, reporting not-found as a normal outcome.
    pub fn rename_user(&mut self, id: UserId, new_name: &str) -> RepoResult<UpdateOutcome> {
        self.repo.rename_user(id, new_name)
    }

    /// Removes one record, reporting not-found as a normal outcome.
    pub fn remove_user(&mut self, id: UserId) -> RepoResult<UpdateOutcome> {
        self.repo.remove_user(id)
    }
}
