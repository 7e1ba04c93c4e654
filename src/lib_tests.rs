use super::*;

#[test]
fn exit_codes_documented() {
    assert_eq!(EXIT_SUCCESS, 0);
    assert_eq!(EXIT_INPUT_ERROR, 1);
    assert_eq!(EXIT_CONFIG_ERROR, 2);
}
