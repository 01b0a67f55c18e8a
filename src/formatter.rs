//! Display formatting for [`Value`]s
//!
//! Text is uppercased, numbers are rendered in fixed-point notation.
//!
//! ## Rounding
//!
//! Numbers are rounded from their exact binary value. Only values whose
//! binary expansion lands exactly half-way between two candidates are
//! ties, and ties round away from zero. Literals such as `2.005` are stored
//! as `2.00499999…` and therefore round down to `"2.00"`, while `0.125`
//! (exactly representable) rounds to `"0.13"`.

use crate::config::FormattingConfig;
use crate::error::{Result, ValueFmtError};
use crate::value::Value;
use serde::{Deserialize, Serialize};

/// Fraction digits used when no configuration is supplied
pub const DEFAULT_FRACTION_DIGITS: usize = 2;

/// Largest accepted fraction digit count
pub const MAX_FRACTION_DIGITS: usize = 100;

/// How text input is uppercased
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMapping {
    /// Locale-invariant Unicode mapping (`ß` becomes `SS`)
    #[default]
    Unicode,

    /// Only `a`..=`z` are mapped, everything else is left alone
    Ascii,
}

/// Formats text and numeric values into display strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueFormatter {
    fraction_digits: usize,
    case_mapping: CaseMapping,
}

impl Default for ValueFormatter {
    fn default() -> Self {
        Self {
            fraction_digits: DEFAULT_FRACTION_DIGITS,
            case_mapping: CaseMapping::Unicode,
        }
    }
}

impl ValueFormatter {
    /// Create a formatter from configuration
    ///
    /// Digit counts above [`MAX_FRACTION_DIGITS`] are clamped; use
    /// [`Config::validate`](crate::config::Config::validate) to reject them
    /// up front.
    pub fn new(config: &FormattingConfig) -> Self {
        Self {
            fraction_digits: config.fraction_digits.min(MAX_FRACTION_DIGITS),
            case_mapping: config.case_mapping,
        }
    }

    pub fn fraction_digits(&self) -> usize {
        self.fraction_digits
    }

    pub fn case_mapping(&self) -> CaseMapping {
        self.case_mapping
    }

    /// Format a value according to its variant
    pub fn format(&self, input: &Value) -> String {
        match input {
            Value::Text(s) => self.uppercase(s),
            Value::Numeric(v) => format_fixed(*v, self.fraction_digits),
        }
    }

    /// Format an untyped `serde_json::Value` or `serde_yaml::Value`
    ///
    /// Only strings and numbers are accepted; anything else fails with
    /// `InvalidInputKind` and produces no output.
    pub fn format_dynamic<'a, T>(&self, input: &'a T) -> Result<String>
    where
        T: ?Sized,
        Value: TryFrom<&'a T, Error = ValueFmtError>,
    {
        let value = Value::try_from(input)?;
        Ok(self.format(&value))
    }

    fn uppercase(&self, s: &str) -> String {
        match self.case_mapping {
            CaseMapping::Unicode => s.to_uppercase(),
            CaseMapping::Ascii => s.to_ascii_uppercase(),
        }
    }
}

/// Format a value with the default rules (Unicode uppercase, two digits)
pub fn format_value(input: &Value) -> String {
    ValueFormatter::default().format(input)
}

/// Render `v` with exactly `digits` fraction digits
///
/// `digits` is clamped to [`MAX_FRACTION_DIGITS`].
pub fn format_fixed(v: f64, digits: usize) -> String {
    let digits = digits.min(MAX_FRACTION_DIGITS);
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = v.abs();
    let body = match exact_tie(magnitude, digits) {
        Some(exact) => round_up_decimal(&exact[..exact.len() - 1]),
        None => format!("{:.*}", digits, magnitude),
    };

    // Negative zero has no sign; negatives that round to zero keep theirs
    if v < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}

/// Exact decimal expansion of `magnitude` with one extra digit, if it sits
/// exactly half-way at `digits` fraction digits
fn exact_tie(magnitude: f64, digits: usize) -> Option<String> {
    // A tie needs at most digits + 1 fractional binary places, in which case
    // printing digits + 1 decimals is exact.
    let scale = i32::try_from(digits + 1).ok()?;
    let scaled = magnitude * 2f64.powi(scale);
    if !scaled.is_finite() || scaled.fract() != 0.0 {
        return None;
    }
    let exact = format!("{:.*}", digits + 1, magnitude);
    exact.ends_with('5').then_some(exact)
}

/// Add one unit in the last place of a non-negative decimal string
///
/// A trailing `.` (zero fraction digits) is dropped.
fn round_up_decimal(decimal: &str) -> String {
    let trimmed = decimal.strip_suffix('.').unwrap_or(decimal);
    let mut bytes = trimmed.as_bytes().to_vec();
    let mut carry = true;
    for b in bytes.iter_mut().rev() {
        if !carry {
            break;
        }
        match *b {
            b'.' => continue,
            b'9' => *b = b'0',
            _ => {
                *b += 1;
                carry = false;
            }
        }
    }
    let mut out = String::with_capacity(bytes.len() + 1);
    if carry {
        out.push('1');
    }
    out.push_str(&String::from_utf8_lossy(&bytes));
    out
}
