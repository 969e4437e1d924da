//! User store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable add/list/rename/remove APIs over the `users` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - The sqlite backend opens one fresh connection per operation and releases
//!   it on every exit path; no connection or row cache survives a call.
//! - Read paths reject invalid persisted state instead of masking it.
//! - Rename/remove derive not-found from the affected row count.

use crate::db::{self, DbError, DbResult};
use crate::model::user::{User, UserId};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic store error for user persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted user data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Result of a rename or remove targeting one record id.
///
/// A missing id is a normal outcome of these operations, distinct from both
/// success and backend failure, so it is not folded into `RepoError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The record existed and the mutation was applied.
    Applied,
    /// No record carries the requested id; the store is unchanged.
    NotFound,
}

impl UpdateOutcome {
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Record store interface shared by the in-memory and sqlite backends.
pub trait UserRepository {
    /// Creates a record and returns it with its freshly assigned id.
    fn add_user(&mut self, name: &str) -> RepoResult<User>;
    /// Returns all records ordered by ascending id.
    fn list_users(&self) -> RepoResult<Vec<User>>;
    /// Replaces the name of the record with the given id, if it exists.
    fn rename_user(&mut self, id: UserId, new_name: &str) -> RepoResult<UpdateOutcome>;
    /// Permanently deletes the record with the given id, if it exists.
    fn remove_user(&mut self, id: UserId) -> RepoResult<UpdateOutcome>;
}

impl<R: UserRepository + ?Sized> UserRepository for Box<R> {
    fn add_user(&mut self, name: &str) -> RepoResult<User> {
        (**self).add_user(name)
    }

    fn list_users(&self) -> RepoResult<Vec<User>> {
        (**self).list_users()
    }

    fn rename_user(&mut self, id: UserId, new_name: &str) -> RepoResult<UpdateOutcome> {
        (**self).rename_user(id, new_name)
    }

    fn remove_user(&mut self, id: UserId) -> RepoResult<UpdateOutcome> {
        (**self).remove_user(id)
    }
}

/// SQLite-backed user store.
///
/// Holds only the database path. Every operation opens its own connection
/// through [`db::open_db`] and drops it before returning, success or error,
/// so no session state is shared between operations.
pub struct SqliteUserRepository {
    db_path: PathBuf,
}

impl SqliteUserRepository {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    fn connect(&self) -> DbResult<Connection> {
        db::open_db(&self.db_path)
    }
}

impl UserRepository for SqliteUserRepository {
    fn add_user(&mut self, name: &str) -> RepoResult<User> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO users (name, created_at, updated_at)
             VALUES (?1, strftime('%s', 'now') * 1000, strftime('%s', 'now') * 1000);",
            params![name],
        )?;

        Ok(User::new(conn.last_insert_rowid(), name))
    }

    fn list_users(&self) -> RepoResult<Vec<User>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare("SELECT id, name FROM users ORDER BY id ASC;")?;
        let mut rows = stmt.query([])?;
        let mut users = Vec::new();

        while let Some(row) = rows.next()? {
            users.push(parse_user_row(row)?);
        }

        Ok(users)
    }

    fn rename_user(&mut self, id: UserId, new_name: &str) -> RepoResult<UpdateOutcome> {
        let conn = self.connect()?;
        let changed = conn.execute(
            "UPDATE users
             SET
                name = ?1,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?2;",
            params![new_name, id],
        )?;

        if changed == 0 {
            return Ok(UpdateOutcome::NotFound);
        }

        Ok(UpdateOutcome::Applied)
    }

    fn remove_user(&mut self, id: UserId) -> RepoResult<UpdateOutcome> {
        let conn = self.connect()?;
        let changed = conn.execute("DELETE FROM users WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Ok(UpdateOutcome::NotFound);
        }

        Ok(UpdateOutcome::Applied)
    }
}

fn parse_user_row(row: &Row<'_>) -> RepoResult<User> {
    let id: i64 = row.get("id")?;
    if id <= 0 {
        return Err(RepoError::InvalidData(format!(
            "invalid id value `{id}` in users.id"
        )));
    }

    Ok(User {
        id,
        name: row.get("name")?,
    })
}
