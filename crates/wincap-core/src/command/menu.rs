use std::io::{BufRead, Write};

use tracing::debug;

use super::errors::CommandError;

/// Ask for a 1-based choice among `count` entries and return its 0-based index.
///
/// Invalid input re-prompts; end of input cancels the selection.
pub fn prompt_choice(
    out: &mut dyn Write,
    input: &mut dyn BufRead,
    prompt: &str,
    count: usize,
) -> Result<usize, CommandError> {
    loop {
        write!(out, "{} [1-{}]: ", prompt, count)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Err(CommandError::SelectionCancelled);
        }

        match line.trim().parse::<usize>() {
            Ok(choice) if (1..=count).contains(&choice) => return Ok(choice - 1),
            _ => {
                debug!(event = "core.command.selection_rejected", input = line.trim());
                writeln!(
                    out,
                    "Please enter a number between 1 and {}.",
                    count
                )?;
            }
        }
    }
}
