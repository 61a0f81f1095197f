//! fields::field
//!
//! A single editable metadata field, as presented to UI form builders.
//!
//! Fields are constructed by a per-type factory, mutated through
//! `set_value`/`set_pattern` (which mark the field updated), and
//! rendered as the JSON object shape the form layer consumes.
//!
//! # Example
//!
//! ```
//! use mediameta::fields::{FieldValue, MetadataField};
//!
//! let mut title = MetadataField::text("title", "Title").with_required(true);
//! assert!(!title.is_updated());
//!
//! title.set_value(Some(FieldValue::Text("Metropolis".into()))).unwrap();
//! assert!(title.is_updated());
//!
//! let json = title.to_json();
//! assert_eq!(json["id"], "title");
//! assert_eq!(json["value"], "Metropolis");
//! assert_eq!(json["required"], true);
//! ```

use std::collections::BTreeMap;

use serde_json::{json, Value};

use super::dispatch::{self, FieldError};
use super::field_type::FieldType;
use super::value::FieldValue;

/// An editable metadata field.
///
/// The type tag fixes the native value representation and both wire
/// forms; see [`dispatch`](super::dispatch) for the conversion rules.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataField {
    input_id: String,
    output_id: Option<String>,
    label: String,
    field_type: FieldType,
    value: Option<FieldValue>,
    read_only: bool,
    required: bool,
    translatable: Option<bool>,
    order: Option<usize>,
    namespace: Option<String>,
    pattern: Option<String>,
    delimiter: Option<String>,
    collection: Option<BTreeMap<String, String>>,
    collection_id: Option<String>,
    different_values: Option<bool>,
    updated: bool,
}

impl MetadataField {
    /// Create a field with the given type tag and defaults.
    pub fn new(
        input_id: impl Into<String>,
        label: impl Into<String>,
        field_type: FieldType,
    ) -> Self {
        Self {
            input_id: input_id.into(),
            output_id: None,
            label: label.into(),
            field_type,
            value: None,
            read_only: false,
            required: false,
            translatable: None,
            order: None,
            namespace: None,
            pattern: None,
            delimiter: None,
            collection: None,
            collection_id: None,
            different_values: None,
            updated: false,
        }
    }

    // Per-type factories.

    /// Create a boolean field.
    pub fn boolean(input_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(input_id, label, FieldType::Boolean)
    }

    /// Create a date field.
    pub fn date(input_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(input_id, label, FieldType::Date)
    }

    /// Create a duration field.
    pub fn duration(input_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(input_id, label, FieldType::Duration)
    }

    /// Create an iterable text field.
    pub fn iterable_text(input_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(input_id, label, FieldType::IterableText)
    }

    /// Create a mixed text field.
    pub fn mixed_text(input_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(input_id, label, FieldType::MixedText)
    }

    /// Create an ordered text field.
    pub fn ordered_text(input_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(input_id, label, FieldType::OrderedText)
    }

    /// Create a long (integer) field.
    pub fn long(input_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(input_id, label, FieldType::Long)
    }

    /// Create a start-date field.
    pub fn start_date(input_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(input_id, label, FieldType::StartDate)
    }

    /// Create a start-time field.
    pub fn start_time(input_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(input_id, label, FieldType::StartTime)
    }

    /// Create a single-line text field.
    pub fn text(input_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(input_id, label, FieldType::Text)
    }

    /// Create a long text field.
    pub fn text_long(input_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(input_id, label, FieldType::TextLong)
    }

    // Builder-style configuration.

    /// Set the output id, when it differs from the input id.
    pub fn with_output_id(mut self, output_id: impl Into<String>) -> Self {
        self.output_id = Some(output_id.into());
        self
    }

    /// Mark the field read-only.
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Mark the field required.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Mark the field translatable.
    pub fn with_translatable(mut self, translatable: bool) -> Self {
        self.translatable = Some(translatable);
        self
    }

    /// Give the field an explicit position among ordered fields.
    pub fn with_order(mut self, order: usize) -> Self {
        self.order = Some(order);
        self
    }

    /// Set the property namespace the field maps back to.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Set the chrono format pattern used by date-like fields.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Set the delimiter used when splitting raw list input.
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    /// Attach a value collection (UI choice list) and its id.
    pub fn with_collection(
        mut self,
        collection: BTreeMap<String, String>,
        collection_id: impl Into<String>,
    ) -> Self {
        self.collection = Some(collection);
        self.collection_id = Some(collection_id.into());
        self
    }

    // Accessors.

    /// The id the value was read from.
    pub fn input_id(&self) -> &str {
        &self.input_id
    }

    /// The id the field is published under; falls back to the input id.
    pub fn output_id(&self) -> &str {
        self.output_id.as_deref().unwrap_or(&self.input_id)
    }

    /// The human-readable label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The type tag.
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// The current value, if any.
    pub fn value(&self) -> Option<&FieldValue> {
        self.value.as_ref()
    }

    /// Whether the field is read-only.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Whether the field is required.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Whether the field is translatable, when declared.
    pub fn translatable(&self) -> Option<bool> {
        self.translatable
    }

    /// The explicit position among ordered fields, if any.
    pub fn order(&self) -> Option<usize> {
        self.order
    }

    /// The property namespace, if declared.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// The date format pattern, if declared.
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    /// The list delimiter, if declared.
    pub fn delimiter(&self) -> Option<&str> {
        self.delimiter.as_deref()
    }

    /// The attached choice collection, if any.
    pub fn collection(&self) -> Option<&BTreeMap<String, String>> {
        self.collection.as_ref()
    }

    /// The id of the attached choice collection, if any.
    pub fn collection_id(&self) -> Option<&str> {
        self.collection_id.as_deref()
    }

    /// Whether distinct source values were collapsed into this field.
    pub fn different_values(&self) -> Option<bool> {
        self.different_values
    }

    /// Whether the field was mutated since construction.
    pub fn is_updated(&self) -> bool {
        self.updated
    }

    // Mutation.

    /// Replace the value and mark the field updated.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::Mismatch` when the value variant does not
    /// fit the field's type tag.
    pub fn set_value(&mut self, value: Option<FieldValue>) -> Result<(), FieldError> {
        if let Some(value) = &value {
            dispatch::check_value(self.field_type, value)?;
        }
        self.value = value;
        self.updated = true;
        Ok(())
    }

    /// Replace the date format pattern and mark the field updated.
    pub fn set_pattern(&mut self, pattern: Option<String>) {
        self.pattern = pattern;
        self.updated = true;
    }

    /// Flag that distinct source values were collapsed into this field.
    pub fn set_different_values(&mut self, different_values: bool) {
        self.different_values = Some(different_values);
    }

    /// Render the UI-facing JSON object for this field.
    pub fn to_json(&self) -> Value {
        let mut object = serde_json::Map::new();
        object.insert("id".into(), json!(self.output_id()));
        object.insert("label".into(), json!(self.label));
        object.insert(
            "value".into(),
            dispatch::encode_json(self.field_type, self.pattern(), self.value.as_ref()),
        );
        object.insert("type".into(), json!(self.field_type.json_type().as_str()));
        object.insert("readOnly".into(), json!(self.read_only));
        object.insert("required".into(), json!(self.required));
        if let Some(collection) = &self.collection {
            object.insert("collection".into(), json!(collection));
        }
        if let Some(translatable) = self.translatable {
            object.insert("translatable".into(), json!(translatable));
        }
        if let Some(delimiter) = &self.delimiter {
            object.insert("delimiter".into(), json!(delimiter));
        }
        if let Some(different_values) = self.different_values {
            object.insert("differentValues".into(), json!(different_values));
        }
        Value::Object(object)
    }
}
