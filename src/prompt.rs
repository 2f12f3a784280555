//! Interactive bound entry: prompt, validate, re-prompt until accepted.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::bound::Bound;
use crate::error::PromptError;

pub const BANNER: &str = "-------------------- PRIME NUMBERS GENERATOR --------------------";

/// Keep asking until a line parses as a [`Bound`].
///
/// Rejected lines leave nothing behind; the next attempt starts fresh.
/// Returns [`PromptError::Closed`] if input ends first.
pub fn read_bound<R, W>(input: &mut R, output: &mut W) -> Result<Bound, PromptError>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        writeln!(output, "Prime numbers can only be generated up to [{}]", Bound::MAX)?;
        write!(output, "Generate prime numbers up to : ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }

        match Bound::parse(&line) {
            Ok(bound) => return Ok(bound),
            Err(err) => {
                debug!(input = line.trim(), %err, "bound rejected");
                writeln!(output, "Incorrect input ({}). Please enter a valid number", err)?;
                writeln!(output, "             ___________________________            ")?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn feed(text: &str) -> (Result<Bound, PromptError>, String) {
        let mut input = Cursor::new(text.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = read_bound(&mut input, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_first_try() {
        let (result, out) = feed("100\n");
        assert_eq!(result.unwrap().get(), 100);
        assert_eq!(out.matches("Generate prime numbers up to").count(), 1);
        assert!(!out.contains("Incorrect input"));
    }

    #[test]
    fn test_reprompts_until_valid() {
        let (result, out) = feed("abc\n4294967295\n1\n\n30\n");
        assert_eq!(result.unwrap().get(), 30);
        assert_eq!(out.matches("Incorrect input").count(), 4);
        assert_eq!(out.matches("Generate prime numbers up to").count(), 5);
        assert!(out.contains("4294967294"));
    }

    #[test]
    fn test_last_line_without_newline() {
        let (result, _) = feed("x\n77");
        assert_eq!(result.unwrap().get(), 77);
    }

    #[test]
    fn test_closed_input() {
        let (result, _) = feed("");
        assert!(matches!(result, Err(PromptError::Closed)));
        let (result, out) = feed("nope\n");
        assert!(matches!(result, Err(PromptError::Closed)));
        assert_eq!(out.matches("Incorrect input").count(), 1);
    }
}
