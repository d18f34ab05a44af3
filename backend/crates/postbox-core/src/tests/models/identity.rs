use crate::{CoreError, Identity};

use googletest::prelude::*;

#[test]
fn given_fingerprint_with_padding_when_parsed_then_trimmed() {
    // When
    let identity = Identity::parse("  nThbg6kXUpJWGl7E1IGOCspRomTxdCARLviKw6E5SY8\n").unwrap();

    // Then
    assert_that!(
        identity.as_str(),
        eq("nThbg6kXUpJWGl7E1IGOCspRomTxdCARLviKw6E5SY8")
    );
    assert_that!(
        identity.to_string(),
        eq("nThbg6kXUpJWGl7E1IGOCspRomTxdCARLviKw6E5SY8")
    );
}

#[test]
fn given_blank_value_when_parsed_then_invalid_identity() {
    // When
    let result = Identity::parse("   ");

    // Then
    assert!(matches!(result, Err(CoreError::InvalidIdentity { .. })));
}

#[test]
fn given_inner_whitespace_when_parsed_then_invalid_identity() {
    // When
    let result = Identity::parse("abc def");

    // Then
    assert!(matches!(result, Err(CoreError::InvalidIdentity { .. })));
}

#[test]
fn given_equal_fingerprints_when_compared_then_equal() {
    // Given
    let a = Identity::parse("alice").unwrap();
    let b = Identity::parse(" alice ").unwrap();

    // Then
    assert_that!(a, eq(&b));
}

#[test]
fn given_typed_recipient_with_spaces_when_parsed_verbatim_then_kept_as_typed() {
    // When
    let identity = Identity::parse_verbatim(" bob smith ").unwrap();

    // Then
    assert_that!(identity.as_str(), eq(" bob smith "));
}

#[test]
fn given_empty_value_when_parsed_verbatim_then_invalid_identity() {
    // When
    let result = Identity::parse_verbatim("");

    // Then
    assert!(matches!(result, Err(CoreError::InvalidIdentity { .. })));
}
