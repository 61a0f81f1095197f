//! Integration tests for metadata fields driven by catalog contents.

use chrono::{TimeZone, Utc};

use mediameta::dublincore::{encoding, vocab, DublinCore, DublinCoreValue, Precision};
use mediameta::fields::{
    apply_raw_values, FieldType, FieldValue, MetadataCollection, MetadataField,
};

/// Pull the raw strings of one property out of a catalog.
fn raw_values(catalog: &DublinCore, property: &mediameta::dublincore::EName) -> Vec<String> {
    catalog
        .get(property)
        .iter()
        .map(|v| v.value().to_string())
        .collect()
}

fn event_catalog() -> DublinCore {
    let mut catalog = DublinCore::new();
    catalog.add(
        vocab::title(),
        DublinCoreValue::with_language("Opening Night", "en"),
    );
    catalog.add_plain(vocab::creator(), "Alice Example");
    catalog.add_plain(vocab::creator(), "Bob Example");
    catalog.add(
        vocab::created(),
        encoding::encode_date(
            Utc.with_ymd_and_hms(2020, 1, 1, 10, 0, 0).unwrap(),
            Precision::Second,
        ),
    );
    let period = mediameta::dublincore::Period::new(
        Some(Utc.with_ymd_and_hms(2020, 1, 1, 10, 0, 0).unwrap()),
        Some(Utc.with_ymd_and_hms(2020, 1, 1, 11, 30, 0).unwrap()),
    )
    .unwrap();
    catalog.add(
        vocab::temporal(),
        encoding::encode_period(&period, Precision::Second),
    );
    catalog
}

fn event_form() -> MetadataCollection {
    let mut collection = MetadataCollection::new();
    collection.add_field(MetadataField::text("title", "Title").with_required(true));
    collection.add_field(
        MetadataField::iterable_text("creator", "Presenters").with_translatable(false),
    );
    collection.add_field(MetadataField::date("created", "Created").with_read_only(true));
    collection.add_field(MetadataField::duration("duration", "Duration"));
    collection.add_field(MetadataField::text("license", "License").with_order(0));
    collection
}

#[test]
fn form_fills_from_catalog() {
    let catalog = event_catalog();
    let mut form = event_form();

    let title_values = raw_values(&catalog, &vocab::title());
    apply_raw_values(form.get_mut("title").unwrap(), &title_values).unwrap();

    let creator_values = raw_values(&catalog, &vocab::creator());
    apply_raw_values(form.get_mut("creator").unwrap(), &creator_values).unwrap();

    let created_values = raw_values(&catalog, &vocab::created());
    apply_raw_values(form.get_mut("created").unwrap(), &created_values).unwrap();

    // The event period feeds the duration field; end - start is the value
    let temporal_values = raw_values(&catalog, &vocab::temporal());
    apply_raw_values(form.get_mut("duration").unwrap(), &temporal_values).unwrap();

    assert_eq!(
        form.get("title").unwrap().value(),
        Some(&FieldValue::Text("Opening Night".into()))
    );
    assert_eq!(
        form.get("creator").unwrap().value(),
        Some(&FieldValue::TextList(vec![
            "Alice Example".into(),
            "Bob Example".into()
        ]))
    );
    assert_eq!(
        form.get("created").unwrap().value(),
        Some(&FieldValue::Date(
            Utc.with_ymd_and_hms(2020, 1, 1, 10, 0, 0).unwrap()
        )),
    );
    assert_eq!(
        form.get("duration").unwrap().value(),
        Some(&FieldValue::Duration(5_400_000))
    );
}

#[test]
fn form_renders_ordered_json() {
    let catalog = event_catalog();
    let mut form = event_form();

    let temporal_values = raw_values(&catalog, &vocab::temporal());
    apply_raw_values(form.get_mut("duration").unwrap(), &temporal_values).unwrap();

    let json = form.to_json();
    let ids: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["id"].as_str().unwrap())
        .collect();
    // Unordered fields in arrival order, the ordered license field last
    assert_eq!(ids, ["title", "creator", "created", "duration", "license"]);

    let duration = &json[3];
    assert_eq!(duration["type"], "text");
    assert_eq!(duration["value"], "01:30:00");
    assert_eq!(duration["readOnly"], false);

    let created = &json[2];
    assert_eq!(created["readOnly"], true);
    assert_eq!(created["value"], serde_json::Value::Null);
}

#[test]
fn multiple_values_into_single_field_keep_last() {
    let mut field = MetadataField::text("title", "Title");
    apply_raw_values(&mut field, &["a".to_string(), "b".to_string()]).unwrap();
    assert_eq!(field.value(), Some(&FieldValue::Text("b".into())));
}

#[test]
fn duration_field_accepts_legacy_millisecond_strings() {
    let mut field = MetadataField::duration("duration", "Duration");
    apply_raw_values(&mut field, &["5400000".to_string()]).unwrap();
    assert_eq!(field.value(), Some(&FieldValue::Duration(5_400_000)));
}

#[test]
fn unknown_type_tags_are_fatal_for_the_field() {
    let err = FieldType::parse("geolocation").unwrap_err();
    assert_eq!(err.to_string(), "unknown metadata field type 'geolocation'");
}

#[test]
fn editing_marks_fields_updated() {
    let mut form = event_form();
    assert!(!form.is_updated());

    form.get_mut("title")
        .unwrap()
        .set_value(Some(FieldValue::Text("Edited".into())))
        .unwrap();
    assert!(form.is_updated());
}

#[test]
fn date_fields_respect_patterns_end_to_end() {
    let mut field = MetadataField::date("created", "Created").with_pattern("%d.%m.%Y");
    apply_raw_values(&mut field, &["10.01.1927".to_string()]).unwrap();
    assert_eq!(
        field.value(),
        Some(&FieldValue::Date(
            Utc.with_ymd_and_hms(1927, 1, 10, 0, 0, 0).unwrap()
        ))
    );

    let json = field.to_json();
    assert_eq!(json["value"], "10.01.1927");
}
