use std::io::{BufRead, Write};
use crate::error::{PromptError, Result};

/// Writes `question` to `output` and reads one line from `input`.
///
/// The trailing newline is stripped, other whitespace is kept as typed.
pub fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    write!(output, "{question}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(PromptError::Closed(question.trim().to_string()));
    }

    let answer = line.trim_end_matches(['\n', '\r']);
    Ok(answer.to_string())
}
