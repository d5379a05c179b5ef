//! Interactive strategy menu.
//!
//! Generic over reader and writer so the loop can be driven from tests.

use std::io::{self, BufRead, Write};

use linpuzzle_search::strategy::StrategyKind;

/// What the user picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Strategy(StrategyKind),
    Exit,
}

/// Parse one line of menu input. Case and surrounding whitespace are
/// ignored.
#[must_use]
pub fn parse_choice(input: &str) -> Option<MenuChoice> {
    match input.trim().to_ascii_lowercase().as_str() {
        "1" => Some(MenuChoice::Strategy(StrategyKind::Breadth)),
        "2" => Some(MenuChoice::Strategy(StrategyKind::Depth)),
        "x" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// Show the menu and read until a valid choice. End of input counts as
/// [`MenuChoice::Exit`].
///
/// # Errors
///
/// Propagates I/O errors from `input` or `output`.
pub fn prompt_strategy<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
) -> io::Result<MenuChoice> {
    writeln!(output, "Please select the search strategy")?;
    writeln!(output, "1 - Breadth-first search algorithm")?;
    writeln!(output, "2 - Depth-first search algorithm")?;
    writeln!(output, "X - Exit application")?;

    let mut line = String::new();
    loop {
        write!(output, "Enter your selection, please: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(MenuChoice::Exit);
        }
        if let Some(choice) = parse_choice(&line) {
            return Ok(choice);
        }
        writeln!(output, "\nInput value not correct, please try again.\n")?;
    }
}
