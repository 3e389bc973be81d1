//! Resolution of the number of points per surface, either from an explicit value or by asking
//! the user through a line-oriented source that may run dry at any time.

use crate::airfoil::DEFAULT_SURFACE_POINTS;
use crate::errors::PointCountError;
use log::debug;
use std::io::{BufRead, Write};

/// Smallest point count accepted at the interactive prompt.
pub const MIN_PROMPT_POINTS: usize = 40;

/// A source of user-entered lines. `None` signals that no further input is available.
pub trait LineSource {
    fn next_line(&mut self) -> Option<String>;
}

/// Adapts any buffered reader, such as a locked stdin, into a [`LineSource`]. End of input and
/// read failures both count as exhaustion.
pub struct ReaderLines<R: BufRead> {
    reader: R,
}

impl<R: BufRead> ReaderLines<R> {
    pub fn new(reader: R) -> Self {
        ReaderLines { reader }
    }
}

impl<R: BufRead> LineSource for ReaderLines<R> {
    fn next_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PromptParams {
    /// Value used for an empty answer or when input runs out
    pub default: usize,

    /// Smallest accepted answer
    pub minimum: usize,
}

impl Default for PromptParams {
    fn default() -> Self {
        PromptParams::new(DEFAULT_SURFACE_POINTS)
    }
}

impl PromptParams {
    pub fn new(default: usize) -> Self {
        PromptParams {
            default,
            minimum: MIN_PROMPT_POINTS,
        }
    }

    /// Checks one line of user input. An empty line selects the default and yields `Ok(None)`.
    pub fn validate(&self, raw: &str) -> Result<Option<usize>, PointCountError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }

        let value: i64 = raw
            .parse()
            .map_err(|_| PointCountError::NotInteger(raw.to_string()))?;

        match usize::try_from(value) {
            Ok(v) if v >= self.minimum => Ok(Some(v)),
            _ => Err(PointCountError::BelowMinimum {
                value,
                minimum: self.minimum,
            }),
        }
    }

    /// Repeatedly asks for a point count on `out` until `source` yields an acceptable answer or
    /// runs out of lines, in which case the default is used.
    pub fn prompt<S: LineSource, W: Write>(
        &self,
        source: &mut S,
        out: &mut W,
    ) -> std::io::Result<usize> {
        loop {
            write!(
                out,
                "Number of cosine-spaced points per surface (default {}): ",
                self.default
            )?;
            out.flush()?;

            let Some(line) = source.next_line() else {
                writeln!(out)?;
                debug!("No input available, using default of {}", self.default);
                return Ok(self.default);
            };

            match self.validate(&line) {
                Ok(Some(value)) => return Ok(value),
                Ok(None) => return Ok(self.default),
                Err(e) => writeln!(out, "{}", e)?,
            }
        }
    }
}

/// Uses the explicit point count as given, without enforcing the prompt's minimum. A missing or
/// zero count falls back to prompting.
pub fn resolve_point_count<S: LineSource, W: Write>(
    explicit: Option<usize>,
    params: &PromptParams,
    source: &mut S,
    out: &mut W,
) -> std::io::Result<usize> {
    match explicit.filter(|n| *n > 0) {
        Some(n) => Ok(n),
        None => params.prompt(source, out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use test_case::test_case;

    fn source(text: &str) -> ReaderLines<Cursor<Vec<u8>>> {
        ReaderLines::new(Cursor::new(text.as_bytes().to_vec()))
    }

    #[test_case("120", Ok(Some(120)))]
    #[test_case("  40 \n", Ok(Some(40)))]
    #[test_case("+64", Ok(Some(64)))]
    #[test_case("", Ok(None))]
    #[test_case("   \n", Ok(None))]
    #[test_case("abc", Err(PointCountError::NotInteger("abc".to_string())))]
    #[test_case("12.5", Err(PointCountError::NotInteger("12.5".to_string())))]
    #[test_case("39", Err(PointCountError::BelowMinimum { value: 39, minimum: 40 }))]
    #[test_case("-200", Err(PointCountError::BelowMinimum { value: -200, minimum: 40 }))]
    fn test_validate(raw: &str, expected: Result<Option<usize>, PointCountError>) {
        assert_eq!(expected, PromptParams::new(160).validate(raw));
    }

    #[test]
    fn test_prompt_rejects_then_defaults() {
        let mut input = source("abc\n10\n\n");
        let mut out = Vec::new();
        let n = PromptParams::new(160).prompt(&mut input, &mut out).unwrap();
        assert_eq!(160, n);

        let text = String::from_utf8(out).unwrap();
        assert_eq!(3, text.matches("(default 160)").count());
        assert!(text.contains("Enter an integer value, e.g. 120."));
        assert!(text.contains("Please enter at least 40 to keep the curve smooth."));
    }

    #[test]
    fn test_prompt_accepts_value() {
        let mut input = source("x\n80\n200\n");
        let mut out = Vec::new();
        let n = PromptParams::new(160).prompt(&mut input, &mut out).unwrap();
        assert_eq!(80, n);
        assert_eq!(Some("200\n".to_string()), input.next_line());
    }

    #[test]
    fn test_prompt_end_of_input() {
        let mut input = source("5\n");
        let mut out = Vec::new();
        let n = PromptParams::new(90).prompt(&mut input, &mut out).unwrap();
        assert_eq!(90, n);
        assert_eq!(2, String::from_utf8(out).unwrap().matches("(default 90)").count());
    }

    #[test_case(Some(12), 12)]
    #[test_case(Some(500), 500)]
    #[test_case(Some(0), 160)]
    #[test_case(None, 160)]
    fn test_resolve_point_count(explicit: Option<usize>, expected: usize) {
        let mut input = source("");
        let mut out = Vec::new();
        let n = resolve_point_count(explicit, &PromptParams::default(), &mut input, &mut out);
        assert_eq!(expected, n.unwrap());
    }
}
