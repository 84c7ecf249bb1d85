//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use imgsmlr::FingerprintError;
    use imgsmlr::io::error::{decode_error, invalid_parameter, invalid_pattern, malformed};
    use std::error::Error;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = FingerprintError::FileSystem {
            path: "/tmp/test.png".into(),
            operation: "read image",
            source: io_error,
        };

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("read image"));
        assert!(message.contains("/tmp/test.png"));
    }

    // Tests decode errors name the format
    // Verified by omitting the format from the message
    #[test]
    fn test_decode_error() {
        let error = decode_error("png", &"not a valid png file");

        assert!(matches!(error, FingerprintError::Decode { format: "png", .. }));
        assert!(error.to_string().contains("png image"));
        assert!(error.source().is_none());
    }

    // Tests unsupported input reports the geometry
    // Verified by swapping width and height in the message
    #[test]
    fn test_unsupported_input_error() {
        let error = FingerprintError::UnsupportedInput {
            width: 10,
            height: 20,
            reason: "image has zero area".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("10x20"));
        assert!(message.contains("zero area"));
    }

    // Tests only degenerate content is classed as degenerate
    // Verified by matching every variant
    #[test]
    fn test_is_degenerate() {
        assert!(FingerprintError::DegenerateContent.is_degenerate());
        assert!(!invalid_pattern(&"empty").is_degenerate());
        assert!(!malformed("pattern text", &"bad").is_degenerate());
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("precision", &12, &"must be between 0 and 9");

        let message = error.to_string();
        assert!(message.contains("precision"));
        assert!(message.contains("12"));
        assert!(message.contains("between 0 and 9"));
    }

    // Tests helper constructors fill the matching variants
    // Verified by routing malformed input to InvalidPattern
    #[test]
    fn test_helper_variants() {
        let error = malformed("signature bytes", &"expected 64 bytes, got 3");
        assert!(matches!(
            error,
            FingerprintError::Malformed {
                what: "signature bytes",
                ..
            }
        ));
        assert!(error.to_string().starts_with("Malformed signature bytes"));

        let error = invalid_pattern(&"pattern side is not a power of two");
        assert!(error.to_string().contains("power of two"));
    }
}
