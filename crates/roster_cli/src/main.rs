//! Console entry point.
//!
//! # Responsibility
//! - Wire logging, the configured backend and stdin/stdout into the loop.
//! - Keep all terminal I/O on this side of the core crate boundary.

mod config;
mod menu;

use config::Backend;
use roster_core::{
    default_log_level, init_logging, MemoryUserRepository, SqliteUserRepository, UserRepository,
    UserService,
};
use std::io::{self, Write};

fn main() -> io::Result<()> {
    let log_dir = std::env::temp_dir().join("roster-logs");
    if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        eprintln!("logging disabled: {err}");
    }

    let (repo, mode) = select_repository();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    match config::BACKEND {
        Backend::Memory => writeln!(out, "Mode: memory (records are lost on exit).")?,
        Backend::Sqlite => writeln!(out, "Mode: sqlite ({}).", config::SQLITE_DB_PATH)?,
    }

    let mut service = UserService::new(repo);
    menu::run_menu(&mut service, mode, &mut input, &mut out)
}

fn select_repository() -> (Box<dyn UserRepository>, &'static str) {
    match config::BACKEND {
        Backend::Memory => (Box::new(MemoryUserRepository::new()), "memory"),
        Backend::Sqlite => (
            Box::new(SqliteUserRepository::new(config::SQLITE_DB_PATH)),
            "sqlite",
        ),
    }
}
