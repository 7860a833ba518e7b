use super::*;

#[test]
fn exit_codes_are_distinct() {
    assert_eq!(EXIT_SUCCESS, 0);
    assert_eq!(EXIT_VALIDATION_FAILED, 1);
    assert_eq!(EXIT_CONFIG_ERROR, 2);
}

#[test]
fn error_is_reexported() {
    let err = ReviewError::Config("bad".to_string());
    let result: Result<()> = Err(err);
    assert!(result.is_err());
}
