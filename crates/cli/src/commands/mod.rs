//! CLI command implementations.

pub mod backup;
pub mod customers;
pub mod remind;

use std::io::{self, BufRead, Write};

/// Ask a yes/no question on the terminal; anything but `y`/`yes` is a no.
///
/// # Errors
///
/// Returns an I/O error if the terminal cannot be read or written.
#[allow(clippy::print_stdout)]
pub fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
