use crate::errors::AirfoilError;
use crate::Result;
use regex::Regex;
use std::fmt::{Display, Formatter};
use std::sync::OnceLock;

fn code_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[0-9]{4}").expect("static pattern is valid"))
}

/// A NACA 4-digit code of the form MPTT, where M is the maximum camber in percent of the chord,
/// P is the location of the maximum camber in tenths of the chord, and TT is the maximum
/// thickness in percent of the chord. For example, a NACA 2412 airfoil has 2% camber at 40% of
/// the chord and a maximum thickness of 12% of the chord.
#[derive(Debug, Clone, PartialEq)]
pub struct NacaCode {
    digits: String,

    /// Maximum camber as a fraction of the chord
    pub m: f64,

    /// Location of the maximum camber as a fraction of the chord
    pub p: f64,

    /// Maximum thickness as a fraction of the chord
    pub t: f64,
}

impl NacaCode {
    /// The four digits the code was built from, e.g. "2412"
    pub fn digits(&self) -> &str {
        &self.digits
    }

    fn from_digits(digits: &str) -> NacaCode {
        let d: Vec<u32> = digits.bytes().map(|b| u32::from(b - b'0')).collect();
        NacaCode {
            digits: digits.to_string(),
            m: d[0] as f64 / 100.0,
            p: d[1] as f64 / 10.0,
            t: (d[2] * 10 + d[3]) as f64 / 100.0,
        }
    }
}

impl Display for NacaCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "NACA {}", self.digits)
    }
}

/// Finds the first four consecutive digits in `header` and decodes them as a NACA 4-digit code.
/// The digits may sit anywhere in free text and may be the start of a longer run of digits.
pub fn parse_code(header: &str) -> Result<NacaCode> {
    code_pattern()
        .find(header)
        .map(|found| NacaCode::from_digits(found.as_str()))
        .ok_or_else(|| AirfoilError::Format {
            header: header.to_string(),
        })
}
