//! fields
//!
//! Editable metadata fields for building UI forms from catalog
//! contents.
//!
//! # Modules
//!
//! - [`field_type`] - The closed type-tag set and JSON wire types
//! - [`value`] - Native field value representations
//! - [`field`] - The field itself: factories, mutation, JSON shape
//! - [`dispatch`] - Value conversion and the raw-value policy
//! - [`collection`] - Ordered field collections
//!
//! # Design Principles
//!
//! - One type tag fixes one native representation and both wire forms
//! - Dispatch is a single exhaustive match, not per-field closures
//! - Multi-value conflicts resolve deterministically, never by error

pub mod collection;
pub mod dispatch;
pub mod field;
pub mod field_type;
pub mod value;

pub use collection::MetadataCollection;
pub use dispatch::{apply_raw_values, decode_value, encode_json, encode_string, FieldError};
pub use field::MetadataField;
pub use field_type::{FieldType, JsonType, UnknownTypeError};
pub use value::FieldValue;
