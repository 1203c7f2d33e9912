use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        TempoError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        TempoError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(TempoError::import("x").to_string().contains("import error:"));
    assert!(TempoError::export("x").to_string().contains("export error:"));
    assert!(
        TempoError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = TempoError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn serde_json_errors_convert() {
    let err: TempoError = serde_json::from_str::<serde_json::Value>("{")
        .unwrap_err()
        .into();
    assert!(matches!(err, TempoError::Serde(_)));
}
