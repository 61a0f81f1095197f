//! dublincore::json
//!
//! JSON catalog objects.
//!
//! The wire shape maps prefixed property names to value lists:
//!
//! ```json
//! {
//!   "dcterms:title": [ { "value": "Metropolis", "lang": "en" } ],
//!   "dcterms:creator": [ { "value": "Fritz Lang" } ]
//! }
//! ```
//!
//! JSON objects carry no namespace declarations, so prefixed names
//! resolve against the standard bindings on read and the catalog's own
//! bindings on write. JSON objects are also unordered: reading restores
//! property grouping but not document order across properties.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::catalog::DublinCore;
use super::value::DublinCoreValue;

/// Errors from JSON catalog reading and writing.
#[derive(Debug, Error)]
pub enum JsonError {
    #[error("failed to parse catalog json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unresolvable property name '{0}'")]
    UnresolvableName(String),

    #[error("no prefix bound for namespace of '{0}'")]
    UnboundNamespace(String),
}

/// One value in the JSON catalog shape.
#[derive(Debug, Serialize, Deserialize)]
struct JsonEntry {
    value: String,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    lang: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none", default)]
    scheme: Option<String>,
}

/// Render a catalog as a JSON catalog object.
///
/// Properties are keyed by prefixed name under the catalog's bindings;
/// keys are emitted in sorted order for determinism.
///
/// # Errors
///
/// Fails with `JsonError::UnboundNamespace` when a property or scheme
/// has no prefix under the catalog's bindings.
pub fn write_json(catalog: &DublinCore) -> Result<String, JsonError> {
    let bindings = catalog.bindings();
    let mut object: BTreeMap<String, Vec<JsonEntry>> = BTreeMap::new();

    for (property, value) in catalog.entries() {
        let key = bindings
            .qualify(property)
            .ok_or_else(|| JsonError::UnboundNamespace(property.to_string()))?;
        let scheme = match value.encoding_scheme() {
            Some(scheme) => Some(
                bindings
                    .qualify(scheme)
                    .ok_or_else(|| JsonError::UnboundNamespace(scheme.to_string()))?,
            ),
            None => None,
        };
        object.entry(key).or_default().push(JsonEntry {
            value: value.value().to_string(),
            lang: value.language().map(str::to_string),
            scheme,
        });
    }

    Ok(serde_json::to_string_pretty(&object)?)
}

/// Parse a JSON catalog object.
///
/// Property keys and scheme names resolve against the standard
/// bindings. Entries with blank values are treated as absent.
///
/// # Errors
///
/// Fails on malformed JSON and on a key or scheme name whose prefix is
/// not bound.
pub fn read_json(json: &str) -> Result<DublinCore, JsonError> {
    let object: BTreeMap<String, Vec<JsonEntry>> = serde_json::from_str(json)?;

    let mut catalog = DublinCore::new();
    for (key, entries) in object {
        let property = catalog
            .bindings()
            .expand(&key)
            .ok_or_else(|| JsonError::UnresolvableName(key.clone()))?;
        for entry in entries {
            if entry.value.trim().is_empty() {
                continue;
            }
            let mut value = DublinCoreValue::new(entry.value);
            value.set_language(entry.lang);
            if let Some(scheme) = entry.scheme {
                let scheme = catalog
                    .bindings()
                    .expand(&scheme)
                    .ok_or_else(|| JsonError::UnresolvableName(scheme.clone()))?;
                value.set_encoding_scheme(Some(scheme));
            }
            catalog.add(property.clone(), value);
        }
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dublincore::{encoding, vocab, Precision};
    use chrono::{TimeZone, Utc};

    fn sample() -> DublinCore {
        let mut catalog = DublinCore::new();
        catalog.add(
            vocab::title(),
            DublinCoreValue::with_language("Metropolis", "en"),
        );
        catalog.add_plain(vocab::creator(), "Fritz Lang");
        catalog.add_plain(vocab::creator(), "Thea von Harbou");
        catalog.add(
            vocab::created(),
            encoding::encode_date(
                Utc.with_ymd_and_hms(1927, 1, 10, 0, 0, 0).unwrap(),
                Precision::Day,
            ),
        );
        catalog
    }

    #[test]
    fn write_shape() {
        let json = write_json(&sample()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["dcterms:title"][0]["value"], "Metropolis");
        assert_eq!(parsed["dcterms:title"][0]["lang"], "en");
        assert_eq!(parsed["dcterms:creator"][1]["value"], "Thea von Harbou");
        assert_eq!(parsed["dcterms:created"][0]["type"], "dcterms:W3CDTF");
        assert!(parsed["dcterms:creator"][0].get("lang").is_none());
    }

    #[test]
    fn round_trip_preserves_content() {
        let original = sample();
        let json = write_json(&original).unwrap();
        let parsed = read_json(&json).unwrap();
        assert!(parsed.content_equals(&original));
        // Schemes survive too
        let created = parsed.get(&vocab::created());
        assert_eq!(created[0].encoding_scheme(), Some(&vocab::scheme_w3cdtf()));
    }

    #[test]
    fn value_order_within_property_preserved() {
        let json = write_json(&sample()).unwrap();
        let parsed = read_json(&json).unwrap();
        let creators: Vec<_> = parsed
            .get(&vocab::creator())
            .iter()
            .map(|v| v.value())
            .collect();
        assert_eq!(creators, ["Fritz Lang", "Thea von Harbou"]);
    }

    #[test]
    fn blank_values_skipped() {
        let json = r#"{ "dcterms:title": [ { "value": "  " }, { "value": "Kept" } ] }"#;
        let parsed = read_json(json).unwrap();
        let titles = parsed.get(&vocab::title());
        assert_eq!(titles.len(), 1);
        assert_eq!(titles[0].value(), "Kept");
    }

    #[test]
    fn unresolvable_key_fails() {
        let json = r#"{ "nosuch:thing": [ { "value": "x" } ] }"#;
        assert!(matches!(
            read_json(json),
            Err(JsonError::UnresolvableName(_))
        ));
    }

    #[test]
    fn malformed_json_fails() {
        assert!(matches!(read_json("{"), Err(JsonError::Parse(_))));
    }
}
