use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::types::Credential;

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    write!(output, "{question}").context("Failed to write prompt")?;
    output.flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read input")?;
    Ok(line.trim().to_string())
}

/// Ask for the API key. Returns `Ok(None)` when the answer is empty.
pub fn read_credential<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Option<Credential>> {
    let answer = ask(input, output, "Enter Google Maps API key: ")?;
    Ok(Credential::new(&answer))
}

/// Ask whether to save the results. Only `y` (any case) counts as yes.
pub fn confirm_save<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<bool> {
    let answer = ask(input, output, "\nSave results to JSON file? (y/n): ")?;
    Ok(answer.eq_ignore_ascii_case("y"))
}
