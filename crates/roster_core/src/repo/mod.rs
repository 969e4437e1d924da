//! Record store abstractions and backend implementations.
//!
//! # Responsibility
//! - Define the four-operation data access contract both backends share.
//! - Isolate SQL query details from service/command orchestration.
//!
//! # Invariants
//! - Backends expose the same success / not-found / error trichotomy so the
//!   command loop never depends on the concrete variant.
//! - Not-found is reported as a normal `UpdateOutcome`, never as an error.

pub mod memory_repo;
pub mod user_repo;
