use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ReelError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ReelError::no_usable_fonts("x")
            .to_string()
            .contains("no usable fonts:")
    );
    assert!(ReelError::render("x").to_string().contains("render error:"));
    assert!(
        ReelError::encoding("x")
            .to_string()
            .contains("encoding error:")
    );
    assert!(
        ReelError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn font_unavailable_names_the_family() {
    let err: ReelError = FontUnavailableError::new("Lora", "bad table").into();
    let msg = err.to_string();
    assert!(msg.contains("Lora"));
    assert!(msg.contains("bad table"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ReelError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
