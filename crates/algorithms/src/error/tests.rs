use super::*;
use api::Error as CoreError;

#[test]
fn test_error_conversion() {
    // Parameter error
    let err = Error::Parameter {
        name: "test",
        reason: "invalid value",
    };
    let core_err = CoreError::from(err);

    match core_err {
        CoreError::InvalidParameter { context, .. } => {
            assert_eq!(context, "test");
        }
        _ => panic!("Expected InvalidParameter error"),
    }

    // Length error
    let err = Error::Length {
        context: "buffer",
        expected: 32,
        actual: 16,
    };
    let core_err = CoreError::from(err);

    match core_err {
        CoreError::InvalidLength {
            context,
            expected,
            actual,
        } => {
            assert_eq!(context, "buffer");
            assert_eq!(expected, 32);
            assert_eq!(actual, 16);
        }
        _ => panic!("Expected InvalidLength error"),
    }
}

#[test]
fn test_validation_functions() {
    // Parameter validation
    assert!(validate::parameter(true, "test", "should pass").is_ok());
    let err = validate::parameter(false, "test", "should fail").unwrap_err();

    match err {
        Error::Parameter { name, reason } => {
            assert_eq!(name, "test");
            assert_eq!(reason, "should fail");
        }
        _ => panic!("Expected Parameter error"),
    }

    // Length validation
    assert!(validate::length("buffer", 32, 32).is_ok());
    let err = validate::length("buffer", 16, 32).unwrap_err();

    match err {
        Error::Length {
            context,
            expected,
            actual,
        } => {
            assert_eq!(context, "buffer");
            assert_eq!(expected, 32);
            assert_eq!(actual, 16);
        }
        _ => panic!("Expected Length error"),
    }

    // Bounded length validation
    assert!(validate::min_length("buffer", 32, 16).is_ok());
    assert!(validate::min_length("buffer", 8, 16).is_err());
    assert!(validate::max_length("buffer", 16, 32).is_ok());
    assert!(validate::max_length("buffer", 64, 32).is_err());
}

#[test]
fn test_with_context_keeps_payload() {
    let result: api::Result<()> = to_core_result(
        validate::length("schedule", 40, 44).map(|_| ()),
        "key expansion",
    );
    let err = result.with_context("cipher setup").unwrap_err();

    match err {
        CoreError::InvalidLength {
            context,
            expected,
            actual,
        } => {
            assert_eq!(context, "cipher setup");
            assert_eq!(expected, 44);
            assert_eq!(actual, 40);
        }
        _ => panic!("Expected InvalidLength error"),
    }
}

#[test]
fn test_display_formatting() {
    let err = Error::Length {
        context: "AES block",
        expected: 16,
        actual: 15,
    };
    assert_eq!(
        err.to_string(),
        "Invalid length for AES block: expected 16, got 15"
    );

    let err = Error::param("key", "unsupported size");
    assert_eq!(err.to_string(), "Invalid parameter 'key': unsupported size");
}
