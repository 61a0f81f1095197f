//! fields::collection
//!
//! An ordered collection of metadata fields.
//!
//! # Ordering
//!
//! Fields without an explicit order keep arrival order and come first.
//! Fields with an explicit order follow, stable-sorted by their order
//! value. Re-adding a field with the same `(input id, output id)` pair
//! first removes the previous occurrence, so the pair is unique.
//!
//! # Example
//!
//! ```
//! use mediameta::fields::{MetadataCollection, MetadataField};
//!
//! let mut collection = MetadataCollection::new();
//! collection.add_field(MetadataField::text("title", "Title"));
//! collection.add_field(MetadataField::text("license", "License").with_order(0));
//! collection.add_field(MetadataField::text("creator", "Creator"));
//!
//! let ids: Vec<_> = collection.fields().iter().map(|f| f.output_id()).collect();
//! assert_eq!(ids, ["title", "creator", "license"]);
//! ```

use serde_json::Value;

use super::field::MetadataField;

/// An ordered list of metadata fields with lookup by output id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataCollection {
    fields: Vec<MetadataField>,
}

impl MetadataCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, maintaining the ordering invariant.
    ///
    /// Any existing field with the same `(input id, output id)` pair is
    /// removed first.
    pub fn add_field(&mut self, field: MetadataField) {
        self.fields.retain(|existing| {
            !(existing.input_id() == field.input_id()
                && existing.output_id() == field.output_id())
        });

        let ordered_start = self
            .fields
            .iter()
            .position(|f| f.order().is_some())
            .unwrap_or(self.fields.len());

        let at = match field.order() {
            // Unordered fields close out the arrival-order prefix
            None => ordered_start,
            Some(order) => {
                let mut at = self.fields.len();
                for i in ordered_start..self.fields.len() {
                    if matches!(self.fields[i].order(), Some(existing) if existing > order) {
                        at = i;
                        break;
                    }
                }
                at
            }
        };
        self.fields.insert(at, field);
    }

    /// Look up a field by output id.
    pub fn get(&self, output_id: &str) -> Option<&MetadataField> {
        self.fields.iter().find(|f| f.output_id() == output_id)
    }

    /// Look up a field mutably by output id.
    pub fn get_mut(&mut self, output_id: &str) -> Option<&mut MetadataField> {
        self.fields.iter_mut().find(|f| f.output_id() == output_id)
    }

    /// Remove and return a field by output id.
    pub fn remove(&mut self, output_id: &str) -> Option<MetadataField> {
        let at = self.fields.iter().position(|f| f.output_id() == output_id)?;
        Some(self.fields.remove(at))
    }

    /// The fields in presentation order.
    pub fn fields(&self) -> &[MetadataField] {
        &self.fields
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether any field was mutated since construction.
    pub fn is_updated(&self) -> bool {
        self.fields.iter().any(MetadataField::is_updated)
    }

    /// Render the ordered JSON field list for the form layer.
    pub fn to_json(&self) -> Value {
        Value::Array(self.fields.iter().map(MetadataField::to_json).collect())
    }
}
