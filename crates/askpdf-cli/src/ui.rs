//! Terminal input and output

use colored::*;
use std::io::{self, BufRead, Write};

use askpdf_core::{Error, Result};

/// Shown before reading the question
pub const QUERY_PROMPT: &str = "Ask something: ";

/// Printed in front of the answer
pub const ANSWER_PREFIX: &str = "🤖: ";

/// Prompt for and read one line of input.
///
/// Only the line terminator is removed; leading and trailing spaces are part
/// of the query. A closed input with nothing on it is an error.
pub fn read_query<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "{}", QUERY_PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    if read == 0 {
        return Err(Error::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "no question given: input closed",
        )));
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(line)
}

/// Read the question from the terminal
pub fn read_query_from_stdin() -> Result<String> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    read_query(&mut input, &mut output)
}

/// Write the answer with its prefix. The text is not altered.
pub fn write_answer<W: Write>(output: &mut W, answer: &str) -> Result<()> {
    writeln!(output, "{}{}", ANSWER_PREFIX, answer)?;
    output.flush()?;
    Ok(())
}

/// Report a failure on stderr
pub fn print_error(error: &dyn std::fmt::Display) {
    eprintln!("{} {}", "❌".red(), error.to_string().red());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_write_answer_exact_bytes() {
        let mut out = Vec::new();
        write_answer(&mut out, "The capital is Paris.").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "🤖: The capital is Paris.\n");
    }

    #[test]
    fn test_write_answer_keeps_multiline_text() {
        let mut out = Vec::new();
        write_answer(&mut out, "See page 4.\n\n- item").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "🤖: See page 4.\n\n- item\n");
    }

    #[test]
    fn test_read_query_prints_prompt() {
        let mut input = Cursor::new("What is on page 3?\n");
        let mut out = Vec::new();

        let query = read_query(&mut input, &mut out).unwrap();

        assert_eq!(query, "What is on page 3?");
        assert_eq!(String::from_utf8(out).unwrap(), "Ask something: ");
    }

    #[test]
    fn test_read_query_keeps_whitespace() {
        let mut out = Vec::new();

        let query = read_query(&mut Cursor::new("   \n"), &mut out).unwrap();
        assert_eq!(query, "   ");

        let query = read_query(&mut Cursor::new("  padded \r\n"), &mut out).unwrap();
        assert_eq!(query, "  padded ");
    }

    #[test]
    fn test_read_query_without_newline() {
        let mut out = Vec::new();
        let query = read_query(&mut Cursor::new("last line"), &mut out).unwrap();
        assert_eq!(query, "last line");
    }

    #[test]
    fn test_read_query_empty_line_is_empty_query() {
        let mut out = Vec::new();
        let query = read_query(&mut Cursor::new("\n"), &mut out).unwrap();
        assert_eq!(query, "");
    }

    #[test]
    fn test_read_query_closed_input() {
        let mut out = Vec::new();
        let err = read_query(&mut Cursor::new(""), &mut out).unwrap_err();
        assert!(matches!(err, Error::Io(ref e) if e.kind() == io::ErrorKind::UnexpectedEof));
    }
}
