//! dublincore::merge
//!
//! Overlay merge: apply a delta catalog onto a base catalog.
//!
//! Merge is not commutative. The delta decides what changes; the base
//! supplies everything the delta does not touch. The base catalog is
//! never mutated in place.
//!
//! # Delta semantics
//!
//! - A language-tagged entry replaces only the values under the same
//!   property and language; a blank value deletes them instead.
//! - An untagged entry replaces every value of the property; a blank
//!   value deletes the property.
//! - Entries whose property equals the base's root tag are structural
//!   and skipped.
//!
//! # Example
//!
//! ```
//! use mediameta::dublincore::{merge, vocab, DublinCore, DublinCoreValue};
//!
//! let mut base = DublinCore::new();
//! base.add(vocab::title(), DublinCoreValue::with_language("Old", "en"));
//!
//! let mut delta = DublinCore::new();
//! delta.add(vocab::title(), DublinCoreValue::with_language("New", "en"));
//!
//! let merged = merge(Some(&delta), Some(&base)).unwrap();
//! assert_eq!(
//!     merged.first_value_with_language(&vocab::title(), Some("en")),
//!     Some("New")
//! );
//! ```

use super::catalog::DublinCore;
use super::ename::EName;
use super::value::DublinCoreValue;

/// Overlay `from` (the delta) onto `into` (the base).
///
/// An absent side returns the other unchanged; two absent sides return
/// `None`.
pub fn merge(from: Option<&DublinCore>, into: Option<&DublinCore>) -> Option<DublinCore> {
    match (from, into) {
        (None, None) => None,
        (Some(from), None) => Some(from.clone()),
        (None, Some(into)) => Some(into.clone()),
        (Some(from), Some(into)) => Some(merge_catalogs(from, into)),
    }
}

fn merge_catalogs(from: &DublinCore, into: &DublinCore) -> DublinCore {
    let mut merged = into.clone();

    // Deterministic application order: property, then original position.
    // sort_by is stable, so same-property entries keep document order.
    let mut delta: Vec<&(EName, DublinCoreValue)> = from.entries().iter().collect();
    delta.sort_by(|a, b| a.0.cmp(&b.0));

    for (property, value) in delta {
        if property == into.root_tag() {
            continue;
        }
        match value.language() {
            Some(language) => {
                merged.remove_language(property, Some(language));
                if !value.is_blank() {
                    merged.add(property.clone(), value.clone());
                }
            }
            None => {
                merged.remove(property);
                if !value.is_blank() {
                    merged.add(property.clone(), value.clone());
                }
            }
        }
    }
    merged
}
