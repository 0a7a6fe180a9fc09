use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        RippleError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        RippleError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        RippleError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = RippleError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
