//! Interactive command loop.
//!
//! # Responsibility
//! - Read an operation selector and free-text arguments line by line.
//! - Dispatch to the user service and render human-readable results.
//!
//! # Invariants
//! - Non-integer input where an integer is expected is recovered locally by
//!   re-prompting; it never surfaces as a failure.
//! - Backend errors are printed as one line and the loop continues.
//! - End of input terminates the loop cleanly.

use roster_core::{UpdateOutcome, UserRepository, UserService};
use std::io::{self, BufRead, Write};

/// Runs the menu loop until the quit selector or end of input.
///
/// I/O is passed in so tests can drive the loop with scripted input and
/// capture the rendered output.
pub fn run_menu<S, R, W>(
    service: &mut UserService<S>,
    mode: &str,
    input: &mut R,
    out: &mut W,
) -> io::Result<()>
where
    S: UserRepository,
    R: BufRead,
    W: Write,
{
    loop {
        write_menu(out, mode)?;
        let Some(choice) = prompt_int(input, out, "Choose: ")? else {
            break;
        };

        match choice {
            1 => add_user(service, input, out)?,
            2 => list_users(service, out)?,
            3 => rename_user(service, input, out)?,
            4 => remove_user(service, input, out)?,
            0 => {
                writeln!(out, "Bye.")?;
                break;
            }
            _ => writeln!(out, "Invalid option!")?,
        }
    }

    Ok(())
}

fn write_menu<W: Write>(out: &mut W, mode: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== roster ({mode}) ===")?;
    writeln!(out, "1 - Add user")?;
    writeln!(out, "2 - List users")?;
    writeln!(out, "3 - Rename user")?;
    writeln!(out, "4 - Remove user")?;
    writeln!(out, "0 - Quit")?;
    Ok(())
}

fn add_user<S: UserRepository, R: BufRead, W: Write>(
    service: &mut UserService<S>,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let Some(name) = prompt_line(input, out, "Name: ")? else {
        return Ok(());
    };

    match service.add_user(&name) {
        Ok(user) => writeln!(out, "Added: {user}"),
        Err(err) => writeln!(out, "Could not add user: {err}"),
    }
}

fn list_users<S: UserRepository, W: Write>(
    service: &UserService<S>,
    out: &mut W,
) -> io::Result<()> {
    match service.list_users() {
        Ok(users) if users.is_empty() => writeln!(out, "No users found."),
        Ok(users) => {
            for user in &users {
                writeln!(out, "{user}")?;
            }
            Ok(())
        }
        Err(err) => writeln!(out, "Could not list users: {err}"),
    }
}

fn rename_user<S: UserRepository, R: BufRead, W: Write>(
    service: &mut UserService<S>,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let Some(id) = prompt_int(input, out, "User id: ")? else {
        return Ok(());
    };
    let Some(new_name) = prompt_line(input, out, "New name: ")? else {
        return Ok(());
    };

    match service.rename_user(id, &new_name) {
        Ok(UpdateOutcome::Applied) => writeln!(out, "Updated!"),
        Ok(UpdateOutcome::NotFound) => writeln!(out, "Id {id} not found."),
        Err(err) => writeln!(out, "Could not update user: {err}"),
    }
}

fn remove_user<S: UserRepository, R: BufRead, W: Write>(
    service: &mut UserService<S>,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let Some(id) = prompt_int(input, out, "User id: ")? else {
        return Ok(());
    };

    match service.remove_user(id) {
        Ok(UpdateOutcome::Applied) => writeln!(out, "Removed!"),
        Ok(UpdateOutcome::NotFound) => writeln!(out, "Id {id} not found."),
        Err(err) => writeln!(out, "Could not remove user: {err}"),
    }
}

/// Prompts until a line parses as an integer. `None` means end of input.
fn prompt_int<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<i64>> {
    loop {
        let Some(line) = prompt_line(input, out, prompt)? else {
            return Ok(None);
        };

        match line.trim().parse::<i64>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => writeln!(out, "Enter a number!")?,
        }
    }
}

/// Prompts for one raw line, without the trailing newline. `None` means end
/// of input. The line is not trimmed: names keep their inner whitespace.
fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }

    Ok(Some(line))
}
