//! Line-based prompts for generation counts.

use std::io::{BufRead, Write};

use tracing::warn;

use super::commands::CliError;

/// Asks for a non-negative integer until a valid answer arrives.
///
/// Invalid lines are reported on `prompt` and the question is repeated with
/// no attempt limit. End of input yields [`CliError::InputClosed`].
pub(super) fn prompt_count<R, P>(
    input: &mut R,
    prompt: &mut P,
    label: &'static str,
) -> Result<usize, CliError>
where
    R: BufRead + ?Sized,
    P: Write + ?Sized,
{
    let mut line = String::new();
    loop {
        write!(prompt, "{label}: ").map_err(CliError::Prompt)?;
        prompt.flush().map_err(CliError::Prompt)?;

        line.clear();
        if input.read_line(&mut line).map_err(CliError::Prompt)? == 0 {
            return Err(CliError::InputClosed { label });
        }
        if let Some(value) = parse_count(&line) {
            return Ok(value);
        }

        warn!(label, input = line.trim(), "rejected prompt answer");
        writeln!(prompt, "Invalid value, expected a non-negative integer.")
            .map_err(CliError::Prompt)?;
    }
}

fn parse_count(raw: &str) -> Option<usize> {
    raw.trim().parse().ok()
}
