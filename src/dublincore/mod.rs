//! dublincore
//!
//! The Dublin Core catalog core: value model, temporal codec, merge,
//! checksum, and the XML/JSON wire formats.
//!
//! # Modules
//!
//! - [`ename`] - Qualified property names
//! - [`value`] - Property values with language and scheme tags
//! - [`vocab`] - Namespaces, properties, and encoding schemes
//! - [`catalog`] - The catalog model and prefix bindings
//! - [`temporal`] - Instants, periods, durations, precisions
//! - [`encoding`] - W3C-DTF / DCMI period / ISO 8601 codec
//! - [`merge`] - Overlay merge of a delta onto a base
//! - [`checksum`] - Order-independent content digest
//! - [`xml`] - XML catalog documents
//! - [`json`] - JSON catalog objects
//!
//! # Design Principles
//!
//! - All operations are pure, synchronous transformations
//! - Invalid names and temporal values cannot be represented
//! - Mandatory decodes fail loudly; optional decodes yield "no value"

pub mod catalog;
pub mod checksum;
pub mod ename;
pub mod encoding;
pub mod json;
pub mod merge;
pub mod temporal;
pub mod value;
pub mod vocab;
pub mod xml;

pub use catalog::{DublinCore, PrefixBindings};
pub use checksum::{checksum, Checksum};
pub use ename::{EName, ENameError};
pub use encoding::DecodeError;
pub use merge::merge;
pub use temporal::{Period, Precision, Temporal, TemporalError};
pub use value::DublinCoreValue;
