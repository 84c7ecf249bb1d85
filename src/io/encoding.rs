//! Binary and text encodings of patterns and signatures
//!
//! Binary: contiguous little-endian IEEE-754 `f32`, row-major for patterns,
//! with undefined cells written as the canonical sentinel bits.
//!
//! Text: `(v0,v1,...)` for signatures and `((v, v, ...), (v, ...), ...)` for
//! patterns, each value printed with a fixed number of decimals. Patterns use
//! `", "` between values and between rows, signatures a bare `","`. Undefined
//! cells print as `NaN`. This is the literal format database columns use.
//! Parsing ignores whitespace, so both separator styles are accepted.

use std::fmt;
use std::str::FromStr;

use crate::fingerprint::pattern::{Pattern, is_undefined};
use crate::fingerprint::signature::Signature;
use crate::io::configuration::{PATTERN_CELLS, PATTERN_SIZE, SIGNATURE_SIZE};
use crate::io::error::{FingerprintError, Result, malformed};
use crate::math::precision::Precision;

const FLOAT_BYTES: usize = 4;

fn read_floats(bytes: &[u8], count: usize, what: &'static str) -> Result<Vec<f32>> {
    if bytes.len() != count * FLOAT_BYTES {
        return Err(malformed(
            what,
            &format!("expected {} bytes, got {}", count * FLOAT_BYTES, bytes.len()),
        ));
    }
    Ok(bytes
        .chunks_exact(FLOAT_BYTES)
        .map(|chunk| match *chunk {
            [a, b, c, d] => f32::from_le_bytes([a, b, c, d]),
            _ => f32::NAN,
        })
        .collect())
}

/// Serialize a pattern as 4096 little-endian `f32`
pub fn encode_pattern(pattern: &Pattern) -> Vec<u8> {
    pattern.iter().flat_map(f32::to_le_bytes).collect()
}

/// Deserialize a pattern written by [`encode_pattern`]
///
/// Any NaN payload is read as the undefined sentinel.
///
/// # Errors
///
/// Returns an error if the length is wrong or a value is infinite
pub fn decode_pattern(bytes: &[u8]) -> Result<Pattern> {
    Pattern::from_row_major(read_floats(bytes, PATTERN_CELLS, "pattern bytes")?)
}

/// Serialize a signature as 16 little-endian `f32`
pub fn encode_signature(signature: &Signature) -> Vec<u8> {
    signature
        .values()
        .iter()
        .flat_map(|value| value.to_le_bytes())
        .collect()
}

/// Deserialize a signature written by [`encode_signature`]
///
/// # Errors
///
/// Returns an error if the length is wrong or a value is not finite
pub fn decode_signature(bytes: &[u8]) -> Result<Signature> {
    let floats = read_floats(bytes, SIGNATURE_SIZE, "signature bytes")?;
    let values: [f32; SIGNATURE_SIZE] = floats
        .try_into()
        .map_err(|_rejected: Vec<f32>| malformed("signature bytes", &"wrong component count"))?;
    Signature::from_values(values)
}

fn write_value(f: &mut fmt::Formatter<'_>, value: f32, digits: usize) -> fmt::Result {
    if is_undefined(value) {
        f.write_str("NaN")
    } else {
        write!(f, "{value:.digits$}")
    }
}

const SIGNATURE_SEPARATOR: &str = ",";
const PATTERN_SEPARATOR: &str = ", ";

fn write_row(
    f: &mut fmt::Formatter<'_>,
    values: &[f32],
    digits: usize,
    separator: &str,
) -> fmt::Result {
    f.write_str("(")?;
    for (index, &value) in values.iter().enumerate() {
        if index > 0 {
            f.write_str(separator)?;
        }
        write_value(f, value, digits)?;
    }
    f.write_str(")")
}

// `{:.N}` overrides the process-wide precision
fn digits_for(f: &fmt::Formatter<'_>) -> usize {
    f.precision()
        .unwrap_or_else(|| usize::from(Precision::global().digits()))
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_row(f, self.values(), digits_for(f), SIGNATURE_SEPARATOR)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = digits_for(f);
        f.write_str("(")?;
        for (index, row) in self.values().outer_iter().enumerate() {
            if index > 0 {
                f.write_str(PATTERN_SEPARATOR)?;
            }
            write_row(f, &row.to_vec(), digits, PATTERN_SEPARATOR)?;
        }
        f.write_str(")")
    }
}

fn parse_value(text: &str, what: &'static str) -> Result<f32> {
    let trimmed = text.trim();
    if trimmed.eq_ignore_ascii_case("nan") {
        return Ok(f32::NAN);
    }
    trimmed
        .parse::<f32>()
        .map_err(|e| malformed(what, &format!("'{trimmed}': {e}")))
}

fn strip_parens<'a>(text: &'a str, what: &'static str) -> Result<&'a str> {
    text.trim()
        .strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
        .ok_or_else(|| malformed(what, &"missing enclosing parentheses"))
}

fn parse_row(text: &str, expected: usize, what: &'static str) -> Result<Vec<f32>> {
    let values = strip_parens(text, what)?
        .split(',')
        .map(|part| parse_value(part, what))
        .collect::<Result<Vec<f32>>>()?;
    if values.len() != expected {
        return Err(malformed(
            what,
            &format!("expected {expected} values, got {}", values.len()),
        ));
    }
    Ok(values)
}

impl FromStr for Signature {
    type Err = FingerprintError;

    fn from_str(text: &str) -> Result<Self> {
        let values = parse_row(text, SIGNATURE_SIZE, "signature text")?;
        let values: [f32; SIGNATURE_SIZE] = values
            .try_into()
            .map_err(|_rejected: Vec<f32>| malformed("signature text", &"wrong component count"))?;
        Self::from_values(values)
    }
}

impl FromStr for Pattern {
    type Err = FingerprintError;

    fn from_str(text: &str) -> Result<Self> {
        let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        let inner = strip_parens(&compact, "pattern text")?;

        let rows: Vec<&str> = inner.split("),(").collect();
        if rows.len() != PATTERN_SIZE {
            return Err(malformed(
                "pattern text",
                &format!("expected {PATTERN_SIZE} rows, got {}", rows.len()),
            ));
        }

        let last = rows.len() - 1;
        let mut values = Vec::with_capacity(PATTERN_CELLS);
        for (index, row) in rows.into_iter().enumerate() {
            // Splitting on "),(" eats the inner parentheses of every boundary
            let opening = if index == 0 { "" } else { "(" };
            let closing = if index == last { "" } else { ")" };
            let row_text = format!("{opening}{row}{closing}");
            values.extend(parse_row(&row_text, PATTERN_SIZE, "pattern text")?);
        }
        Self::from_row_major(values)
    }
}

/// Text form of a signature with an explicit precision
pub fn signature_text(signature: &Signature, precision: Precision) -> String {
    let digits = usize::from(precision.digits());
    format!("{signature:.digits$}")
}

/// Text form of a pattern with an explicit precision
pub fn pattern_text(pattern: &Pattern, precision: Precision) -> String {
    let digits = usize::from(precision.digits());
    format!("{pattern:.digits$}")
}
