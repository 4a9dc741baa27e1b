//! Line-oriented console input helpers.
//!
//! # Responsibility
//! - Read exactly one line per prompt from the console.
//! - Recover from malformed numeric input by re-prompting, without limit.
//!
//! # Invariants
//! - Numeric prompts return only via a successfully parsed value or end of
//!   input; parse failures never propagate.
//! - `None` means the input stream is closed (EOF), never a bad value.

use std::io::{self, BufRead, Write};

const INVALID_NUMBER_PROMPT: &str = "Invalid input. Please enter a valid number: ";

/// Writes a prompt (no trailing newline) and reads one line.
///
/// Returns `Ok(None)` when the input stream is exhausted.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;
    read_line(input)
}

/// Prompts for a decimal value, re-prompting until one parses.
pub fn prompt_f64<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<f64>> {
    prompt_number(input, output, prompt)
}

/// Prompts for an integer id, re-prompting until one parses.
pub fn prompt_u32<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<u32>> {
    prompt_number(input, output, prompt)
}

fn prompt_number<T, R, W>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<Option<T>>
where
    T: std::str::FromStr,
    R: BufRead,
    W: Write,
{
    let mut line = match prompt_line(input, output, prompt)? {
        Some(line) => line,
        None => return Ok(None),
    };
    loop {
        if let Ok(value) = line.trim().parse::<T>() {
            return Ok(Some(value));
        }
        line = match prompt_line(input, output, INVALID_NUMBER_PROMPT)? {
            Some(line) => line,
            None => return Ok(None),
        };
    }
}

/// Reads one line, stripping the trailing line separator only.
///
/// Returns `Ok(None)` at end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buffer = String::new();
    if input.read_line(&mut buffer)? == 0 {
        return Ok(None);
    }
    if buffer.ends_with('\n') {
        buffer.pop();
        if buffer.ends_with('\r') {
            buffer.pop();
        }
    }
    Ok(Some(buffer))
}

#[cfg(test)]
mod tests {
    use super::{prompt_f64, prompt_line, prompt_u32, read_line};
    use std::io::Cursor;

    #[test]
    fn read_line_strips_line_separator_but_keeps_inner_spaces() {
        let mut input = Cursor::new("  Jane Doe  \r\n");
        assert_eq!(read_line(&mut input).unwrap().unwrap(), "  Jane Doe  ");
    }

    #[test]
    fn read_line_returns_none_at_eof() {
        let mut input = Cursor::new("");
        assert!(read_line(&mut input).unwrap().is_none());
    }

    #[test]
    fn prompt_line_writes_prompt_without_newline() {
        let mut input = Cursor::new("alice\n");
        let mut output = Vec::new();
        let value = prompt_line(&mut input, &mut output, "Enter username: ").unwrap();
        assert_eq!(value.as_deref(), Some("alice"));
        assert_eq!(String::from_utf8(output).unwrap(), "Enter username: ");
    }

    #[test]
    fn prompt_f64_retries_until_a_value_parses() {
        let mut input = Cursor::new("abc\n\n12.5\n");
        let mut output = Vec::new();
        let value = prompt_f64(&mut input, &mut output, "Enter Salary: ").unwrap();
        assert_eq!(value, Some(12.5));

        let rendered = String::from_utf8(output).unwrap();
        assert_eq!(rendered.matches("Invalid input").count(), 2);
    }

    #[test]
    fn prompt_u32_rejects_decimals_and_negatives() {
        let mut input = Cursor::new("2.5\n-3\n7\n");
        let mut output = Vec::new();
        let value = prompt_u32(&mut input, &mut output, "Enter Employee ID: ").unwrap();
        assert_eq!(value, Some(7));
    }

    #[test]
    fn prompt_number_returns_none_when_input_closes_mid_retry() {
        let mut input = Cursor::new("oops\n");
        let mut output = Vec::new();
        assert!(prompt_u32(&mut input, &mut output, "Enter Employee ID: ")
            .unwrap()
            .is_none());
    }
}
