use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        OdysseyError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        OdysseyError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        OdysseyError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = OdysseyError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
