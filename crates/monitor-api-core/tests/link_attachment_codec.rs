//! Decode/encode behaviour of the link attachment model

use monitor_api_core::models::v2::IncidentAttachmentLinkAttributesAttachmentObject as Link;
use monitor_api_core::{Error, ModelCodec, Record, Result, TypedCodec};
use serde_json::{json, Value as JsonValue};

const CODEC: TypedCodec<Link> = TypedCodec::new();

fn missing_field(result: Result<Record<Link>>) -> String {
    match result {
        Err(Error::MissingRequiredField(name)) => name,
        other => panic!("expected MissingRequiredField, got {other:?}"),
    }
}

#[test]
fn round_trip_reproduces_typed_record() -> Result<()> {
    let record = Link::new("https://example.com/runbook", "Runbook").into_record();
    let decoded = CODEC.decode(&CODEC.encode(&record)?)?;
    assert_eq!(decoded, record);
    assert!(decoded.is_typed());
    Ok(())
}

#[test]
fn missing_required_fields_are_reported_in_declaration_order() {
    assert_eq!(missing_field(CODEC.decode(br#"{"title": "x"}"#)), "documentUrl");
    assert_eq!(missing_field(CODEC.decode(br#"{"documentUrl": "y"}"#)), "title");
    assert_eq!(missing_field(CODEC.decode(b"{}")), "documentUrl");
}

#[test]
fn missing_required_field_wins_over_shape_mismatch() {
    // `documentUrl` has the wrong type, but `title` is absent: hard error, no fallback
    assert_eq!(missing_field(CODEC.decode(br#"{"documentUrl": 5}"#)), "title");
}

#[test]
fn non_json_is_malformed() {
    let err = CODEC.decode(b"not json").unwrap_err();
    assert!(matches!(err, Error::MalformedPayload(_)));
    assert!(err.to_string().starts_with("malformed payload"));
}

#[test]
fn additional_properties_are_merged_on_encode() -> Result<()> {
    let record = Link::new("u", "t")
        .into_record()
        .with_additional_property("owner", "team-x");
    let value: JsonValue = serde_json::from_slice(&CODEC.encode(&record)?)?;
    assert_eq!(value, json!({"documentUrl": "u", "title": "t", "owner": "team-x"}));
    Ok(())
}

#[test]
fn additional_property_overwrites_declared_field() -> Result<()> {
    let record = Link::new("u", "t")
        .into_record()
        .with_additional_property("title", json!({"localized": "Titre"}));
    let text = String::from_utf8(CODEC.encode(&record)?).unwrap();
    assert_eq!(text, r#"{"documentUrl":"u","title":{"localized":"Titre"}}"#);
    Ok(())
}

#[test]
fn shape_mismatch_falls_back_to_unparsed() -> Result<()> {
    let payload = br#"{"documentUrl": "u", "title": 123}"#;
    let record = CODEC.decode(payload)?;
    assert!(record.is_unparsed());
    assert!(record.fields().is_none());

    let original: JsonValue = serde_json::from_slice(payload)?;
    let reencoded: JsonValue = serde_json::from_slice(&CODEC.encode(&record)?)?;
    assert_eq!(reencoded, original);
    Ok(())
}

#[test]
fn unparsed_record_keeps_key_order() -> Result<()> {
    let payload = r#"{"title":[1],"zeta":true,"documentUrl":"u","alpha":null}"#;
    let record = CODEC.decode(payload.as_bytes())?;
    assert_eq!(String::from_utf8(CODEC.encode(&record)?).unwrap(), payload);
    Ok(())
}

#[test]
fn unknown_properties_are_dropped_on_typed_decode() -> Result<()> {
    let record = CODEC.decode(br#"{"documentUrl": "u", "title": "t", "owner": "team-x"}"#)?;
    assert!(record.is_typed());
    assert!(record.additional_properties().unwrap().is_empty());
    assert_eq!(
        CODEC.encode_value(&record)?,
        json!({"documentUrl": "u", "title": "t"})
    );
    Ok(())
}

#[test]
fn encoding_is_idempotent() -> Result<()> {
    let record = Link::new("https://example.com/a", "A").into_record();
    let first = CODEC.encode(&record)?;
    let second = CODEC.encode(&CODEC.decode(&first)?)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn fixture_payloads() -> Result<()> {
    let fixtures = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../tests/fixtures/payloads");

    let bytes = std::fs::read(fixtures.join("link_attachment.json"))?;
    let record = Record::<Link>::from_slice(&bytes)?;
    assert_eq!(
        record.fields().map(|l| l.title.as_str()),
        Some("Runbook for webstore service failures")
    );

    let bytes = std::fs::read(fixtures.join("link_attachment_drift.json"))?;
    let record = Record::<Link>::from_slice(&bytes)?;
    let original: JsonValue = serde_json::from_slice(&bytes)?;
    assert_eq!(record.to_value()?, original);
    Ok(())
}
