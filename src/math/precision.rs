//! Decimal precision policy applied to every emitted float
//!
//! Values are computed at full precision internally and only rounded when they
//! cross the public interface (pattern cells, signature components, distances).
//!
//! A process-wide default exists for callers that do not thread a
//! [`Precision`] explicitly. It follows a single-writer discipline: set it once
//! during start-up with [`Precision::set_global`]. Reconfiguring later is
//! allowed but has no ordering guarantee relative to calls already in flight,
//! since each [`crate::fingerprint::pipeline::Fingerprinter`] captures the
//! precision when it is created. Values already returned are never affected.

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};

use num_traits::Float;

use crate::io::configuration::{DEFAULT_PRECISION, MAX_PRECISION};
use crate::io::error::{Result, invalid_parameter};

static GLOBAL_PRECISION: AtomicU8 = AtomicU8::new(DEFAULT_PRECISION);

/// Number of decimal digits kept after the point in emitted values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Precision {
    digits: u8,
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            digits: DEFAULT_PRECISION,
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} digits", self.digits)
    }
}

impl Precision {
    /// Create a precision policy keeping `digits` decimals
    ///
    /// # Errors
    ///
    /// Returns an error if `digits` exceeds the supported maximum
    pub fn new(digits: u8) -> Result<Self> {
        if digits > MAX_PRECISION {
            return Err(invalid_parameter(
                "precision",
                &digits,
                &format!("must be between 0 and {MAX_PRECISION}"),
            ));
        }
        Ok(Self { digits })
    }

    /// Number of decimal digits kept
    pub const fn digits(self) -> u8 {
        self.digits
    }

    /// Read the process-wide default precision
    pub fn global() -> Self {
        Self {
            digits: GLOBAL_PRECISION.load(Ordering::Relaxed),
        }
    }

    /// Replace the process-wide default precision
    pub fn set_global(self) {
        let previous = GLOBAL_PRECISION.swap(self.digits, Ordering::Relaxed);
        if previous != self.digits {
            tracing::debug!(previous, current = self.digits, "global precision changed");
        }
    }

    /// Round a value to this many decimals
    ///
    /// Non-finite values pass through unchanged and negative zero collapses to
    /// positive zero so rounded output has a single zero bit pattern.
    pub fn round<F: Float>(self, value: F) -> F {
        if !value.is_finite() {
            return value;
        }
        let factor = 10_f64.powi(i32::from(self.digits));
        let Some(scale) = <F as num_traits::NumCast>::from(factor) else {
            return value;
        };
        let rounded = (value * scale).round() / scale;
        if rounded.is_zero() { F::zero() } else { rounded }
    }

    /// Round an `f32` by way of `f64` so large scales keep every digit
    pub fn round_f32(self, value: f32) -> f32 {
        self.round(f64::from(value)) as f32
    }
}
