//! Tests for fingerprint geometry constants and defaults

#[cfg(test)]
mod tests {
    use imgsmlr::io::configuration::{
        DEFAULT_PRECISION, FLAT_RANGE_EPSILON, MAX_PRECISION, MAX_SOURCE_PIXELS, PATTERN_CELLS,
        PATTERN_SIZE, PROGRESS_MIN_FILES, SIGNATURE_SIZE, STRUCTURE_EPSILON, SUPPORTED_EXTENSIONS,
        UNDEFINED_BITS,
    };

    // Tests the pattern grid geometry
    // Verified by changing the pattern side
    #[test]
    fn test_pattern_geometry() {
        assert_eq!(PATTERN_SIZE, 64);
        assert_eq!(PATTERN_CELLS, 4096);
        assert!(PATTERN_SIZE.is_power_of_two());
    }

    // Tests the signature holds five levels of three subbands plus the mean
    // Verified by changing the signature length
    #[test]
    fn test_signature_size() {
        let levels = (PATTERN_SIZE / 2).trailing_zeros() as usize;
        assert_eq!(SIGNATURE_SIZE, 16);
        assert_eq!(levels * 3 + 1, SIGNATURE_SIZE);
    }

    // Tests the sentinel is a quiet NaN
    // Verified by using an infinity bit pattern
    #[test]
    fn test_undefined_bits_quiet_nan() {
        let value = f32::from_bits(UNDEFINED_BITS);
        assert!(value.is_nan());
        assert_ne!(UNDEFINED_BITS & 0x0040_0000, 0);
    }

    // Tests thresholds are small positive values
    // Verified by swapping the epsilons
    #[test]
    fn test_thresholds() {
        assert!(FLAT_RANGE_EPSILON > 0.0 && FLAT_RANGE_EPSILON < STRUCTURE_EPSILON);
        assert!(STRUCTURE_EPSILON < 1e-2);
        assert!(MAX_SOURCE_PIXELS >= 16_384 * 16_384);
    }

    // Tests the default precision lies in the supported range
    // Verified by raising the default above the maximum
    #[test]
    fn test_precision_defaults() {
        assert_eq!(DEFAULT_PRECISION, 6);
        assert!(DEFAULT_PRECISION <= MAX_PRECISION);
    }

    // Tests the CLI picks up every decodable extension
    // Verified by removing the jpeg alias
    #[test]
    fn test_cli_settings() {
        assert!(SUPPORTED_EXTENSIONS.contains(&"jpg"));
        assert!(SUPPORTED_EXTENSIONS.contains(&"jpeg"));
        assert!(!SUPPORTED_EXTENSIONS.contains(&"webp"));
        assert!(PROGRESS_MIN_FILES > 1);
    }
}
