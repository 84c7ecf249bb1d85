//! Tests for the decimal precision policy

#[cfg(test)]
mod tests {
    use imgsmlr::FingerprintError;
    use imgsmlr::io::configuration::{DEFAULT_PRECISION, MAX_PRECISION};
    use imgsmlr::math::precision::Precision;

    // Tests construction bounds
    // Verified by accepting any digit count
    #[test]
    fn test_precision_bounds() {
        assert!(Precision::new(0).is_ok());
        assert!(Precision::new(MAX_PRECISION).is_ok());

        let error = Precision::new(MAX_PRECISION + 1).unwrap_err();
        assert!(matches!(
            error,
            FingerprintError::InvalidParameter {
                parameter: "precision",
                ..
            }
        ));
    }

    // Tests default digit count
    // Verified by changing the default constant
    #[test]
    fn test_precision_default() {
        assert_eq!(Precision::default().digits(), DEFAULT_PRECISION);
        assert_eq!(Precision::default().digits(), 6);
    }

    // Tests rounding to two decimals
    // Verified by truncating instead of rounding
    #[test]
    fn test_round_two_digits() {
        let precision = Precision::new(2).unwrap();

        assert_eq!(precision.round(0.123_456_789_f64), 0.12);
        assert_eq!(precision.round(0.126_f64), 0.13);
        assert_eq!(precision.round_f32(0.126_f32), 0.13_f32);
        assert_eq!(precision.round(7.0_f64), 7.0);
    }

    // Tests the generic path scales f32 values without widening
    // Verified by converting the scale factor through the wrong float type
    #[test]
    fn test_round_generic_f32() {
        let precision = Precision::new(2).unwrap();

        assert_eq!(precision.round(0.126_f32), 0.13_f32);
        assert_eq!(precision.round(-0.004_f32).to_bits(), 0.0_f32.to_bits());
        assert_eq!(Precision::new(0).unwrap().round(2.5_f32), 3.0_f32);
        assert!(precision.round(f32::NAN).is_nan());
    }

    // Tests zero digits rounds to integers
    // Verified by skipping the scale factor
    #[test]
    fn test_round_zero_digits() {
        let precision = Precision::new(0).unwrap();

        assert_eq!(precision.round(2.6_f64), 3.0);
        assert_eq!(precision.round(-2.6_f64), -3.0);
    }

    // Tests negative zero collapses to positive zero
    // Verified by returning the raw rounded value
    #[test]
    fn test_round_negative_zero() {
        let precision = Precision::new(2).unwrap();
        let rounded = precision.round(-0.000_1_f64);

        assert_eq!(rounded.to_bits(), 0.0_f64.to_bits());
    }

    // Tests non-finite values pass through untouched
    // Verified by rounding NaN to zero
    #[test]
    fn test_round_non_finite() {
        let precision = Precision::new(3).unwrap();

        assert!(precision.round(f64::NAN).is_nan());
        assert!(precision.round_f32(f32::NAN).is_nan());
        assert_eq!(precision.round(f64::INFINITY), f64::INFINITY);
    }

    // Tests rounding an already rounded value is stable
    // Verified by adding an offset during rounding
    #[test]
    fn test_round_idempotent() {
        let precision = Precision::new(4).unwrap();
        for value in [0.0_f32, 0.123_45, 0.999_99, 3.141_592_7, 42.5] {
            let once = precision.round_f32(value);
            assert_eq!(precision.round_f32(once), once);
        }
    }

    // Tests display names the digit count
    // Verified by printing the debug form
    #[test]
    fn test_precision_display() {
        assert_eq!(Precision::new(4).unwrap().to_string(), "4 digits");
    }
}
