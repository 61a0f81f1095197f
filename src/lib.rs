//! Mediameta - Dublin Core metadata catalogs for media asset management
//!
//! Mediameta is the metadata layer of a media asset management system:
//! it models Dublin Core catalogs, converts them to and from their XML
//! and JSON wire forms, and exposes a typed metadata-field abstraction
//! for building editable UI forms from catalog contents.
//!
//! # Architecture
//!
//! The codebase has two areas:
//!
//! - [`dublincore`] - The catalog core: qualified names, values, the
//!   temporal codec (W3C-DTF dates, DCMI periods, ISO 8601 durations),
//!   overlay merge, the order-independent content checksum, and the
//!   XML/JSON formats
//! - [`fields`] - Typed metadata fields: a closed type-tag set with a
//!   single dispatch table converting between native values and their
//!   wire forms, plus ordered field collections
//!
//! # Correctness Invariants
//!
//! 1. Invalid property names and temporal values cannot be represented
//! 2. Merge never mutates the base catalog
//! 3. Checksums are independent of in-memory entry order
//! 4. Every operation is a pure, synchronous transformation
//!
//! # Example
//!
//! ```
//! use mediameta::dublincore::{checksum, merge, vocab, DublinCore};
//!
//! let mut base = DublinCore::new();
//! base.add_plain(vocab::title(), "Working Title");
//! base.add_plain(vocab::creator(), "Someone");
//!
//! let mut delta = DublinCore::new();
//! delta.add_plain(vocab::title(), "Final Title");
//!
//! let merged = merge(Some(&delta), Some(&base)).unwrap();
//! assert_eq!(merged.first_value(&vocab::title()), Some("Final Title"));
//! assert_ne!(checksum(&base), checksum(&merged));
//! ```

pub mod dublincore;
pub mod fields;
