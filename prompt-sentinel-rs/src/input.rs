//! Prompt acquisition from arguments or stdin

use anyhow::{bail, Context, Result};
use std::io::BufRead;

/// Use the argument if present, otherwise read all lines from `reader`.
///
/// Prompts that are blank after trimming are rejected here so the engine
/// never sees them.
pub fn resolve_prompt<R: BufRead>(arg: Option<String>, reader: R) -> Result<String> {
    let prompt = match arg {
        Some(prompt) => prompt,
        None => read_lines(reader).context("failed to read from stdin")?,
    };

    if prompt.trim().is_empty() {
        bail!("prompt cannot be empty");
    }

    Ok(prompt)
}

fn read_lines<R: BufRead>(reader: R) -> std::io::Result<String> {
    let lines = reader.lines().collect::<std::io::Result<Vec<_>>>()?;
    Ok(lines.join("\n"))
}
