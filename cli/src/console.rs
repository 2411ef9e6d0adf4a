use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};

pub fn clear_screen() -> Result<()> {
    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    Ok(())
}

/// Prints the message on the same line and reads one line of input. Only
/// the line terminator is stripped; leading and trailing spaces are part of
/// the answer (a lone space is a meaningful edit value).
pub fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        bail!("input stream closed");
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

/// Error banner between dashed rules, shown above the menu it returns to.
pub fn banner(message: &str) {
    let rule = "-".repeat(50);
    println!("{rule}");
    println!("{message}");
    println!("{rule}");
}

pub fn pause() -> Result<()> {
    prompt("Press ENTER to continue...")?;
    Ok(())
}
