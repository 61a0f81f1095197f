//! dublincore::checksum
//!
//! Order-independent digest over a catalog's semantic content.
//!
//! Two catalogs with the same property/value/attribute content produce
//! the same checksum regardless of insertion order or in-memory
//! representation. Any change to a value, an attribute, or the root tag
//! changes it.
//!
//! Note the asymmetry with [`DublinCore::content_equals`]: content
//! equality ignores encoding-scheme attributes, the checksum includes
//! them.

use sha2::{Digest, Sha256};

use super::catalog::DublinCore;
use super::ename::EName;
use super::value::DublinCoreValue;

/// A hex-encoded catalog digest.
///
/// # Example
///
/// ```
/// use mediameta::dublincore::{checksum, vocab, DublinCore};
///
/// let mut a = DublinCore::new();
/// a.add_plain(vocab::title(), "T");
/// a.add_plain(vocab::creator(), "C");
///
/// let mut b = DublinCore::new();
/// b.add_plain(vocab::creator(), "C");
/// b.add_plain(vocab::title(), "T");
///
/// // Insertion order does not matter
/// assert_eq!(checksum(&a), checksum(&b));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Checksum(String);

impl Checksum {
    /// Get the checksum as a hex string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Checksum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Compute the catalog checksum.
///
/// Entries are sorted by the property's qualified name before hashing,
/// so the digest is independent of in-memory ordering; same-property
/// values keep document order. Every token is followed by a single NUL
/// separator; the root tag's qualified name closes the stream.
pub fn checksum(catalog: &DublinCore) -> Checksum {
    let mut entries: Vec<&(EName, DublinCoreValue)> = catalog.entries().iter().collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    let mut hasher = Sha256::new();
    for (property, value) in entries {
        hasher.update(property.local_name().as_bytes());
        hasher.update(b"\0");
        hasher.update(value.value().as_bytes());
        hasher.update(b"\0");
        for (key, attr_value) in value.attributes() {
            hasher.update(key.as_bytes());
            hasher.update(b"\0");
            hasher.update(attr_value.as_bytes());
            hasher.update(b"\0");
        }
    }
    hasher.update(catalog.root_tag().to_string().as_bytes());

    let result = hasher.finalize();
    Checksum(hex::encode(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dublincore::vocab;

    fn sample() -> DublinCore {
        let mut catalog = DublinCore::new();
        catalog.add(
            vocab::title(),
            DublinCoreValue::with_language("The Ring", "en"),
        );
        catalog.add_plain(vocab::creator(), "Wagner");
        catalog.add_plain(vocab::subject(), "Opera");
        catalog
    }

    #[test]
    fn deterministic() {
        let catalog = sample();
        assert_eq!(checksum(&catalog), checksum(&catalog));
    }

    #[test]
    fn independent_of_property_order() {
        let mut reordered = DublinCore::new();
        reordered.add_plain(vocab::subject(), "Opera");
        reordered.add_plain(vocab::creator(), "Wagner");
        reordered.add(
            vocab::title(),
            DublinCoreValue::with_language("The Ring", "en"),
        );
        assert_eq!(checksum(&sample()), checksum(&reordered));
    }

    #[test]
    fn sensitive_to_value_change() {
        let mut changed = sample();
        changed.set(vocab::creator(), DublinCoreValue::new("Verdi"));
        assert_ne!(checksum(&sample()), checksum(&changed));
    }

    #[test]
    fn sensitive_to_attribute_change() {
        let mut changed = sample();
        changed.remove_language(&vocab::title(), Some("en"));
        changed.add(
            vocab::title(),
            DublinCoreValue::with_language("The Ring", "de"),
        );
        assert_ne!(checksum(&sample()), checksum(&changed));
    }

    #[test]
    fn sensitive_to_encoding_scheme() {
        let mut a = DublinCore::new();
        a.add_plain(vocab::date(), "2020-01-01");

        let mut b = DublinCore::new();
        b.add(
            vocab::date(),
            DublinCoreValue::with_scheme("2020-01-01", vocab::scheme_w3cdtf()),
        );

        // Content-equal, checksum-distinct: the documented asymmetry
        assert!(a.content_equals(&b));
        assert_ne!(checksum(&a), checksum(&b));
    }

    #[test]
    fn sensitive_to_root_tag() {
        let a = sample();
        let b = sample().with_root_tag(vocab::description());
        assert_ne!(checksum(&a), checksum(&b));
    }

    #[test]
    fn hex_encoded() {
        let digest = checksum(&sample());
        assert_eq!(digest.as_str().len(), 64);
        assert!(digest.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }
}
