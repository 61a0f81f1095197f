//! dublincore::value
//!
//! Catalog property values.
//!
//! A property may carry multiple values (several creators, several
//! subjects), each independently tagged with a language and, optionally,
//! the encoding scheme that produced its text form.

use serde::{Deserialize, Serialize};

use super::ename::EName;

/// A single Dublin Core property value.
///
/// Structural equality covers all three parts. Catalog *content*
/// equality ignores the encoding scheme (see
/// [`DublinCore::content_equals`](super::DublinCore::content_equals)),
/// while the catalog checksum folds it back in.
///
/// # Example
///
/// ```
/// use mediameta::dublincore::DublinCoreValue;
///
/// let plain = DublinCoreValue::new("The Land Beyond the Forest");
/// assert!(plain.language().is_none());
///
/// let tagged = DublinCoreValue::with_language("Der Golem", "de");
/// assert_eq!(tagged.language(), Some("de"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DublinCoreValue {
    value: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    encoding_scheme: Option<EName>,
}

impl DublinCoreValue {
    /// Create a value with no language tag and no encoding scheme.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: None,
            encoding_scheme: None,
        }
    }

    /// Create a language-tagged value.
    pub fn with_language(value: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: Some(language.into()),
            encoding_scheme: None,
        }
    }

    /// Create a value tagged with an encoding scheme.
    pub fn with_scheme(value: impl Into<String>, scheme: EName) -> Self {
        Self {
            value: value.into(),
            language: None,
            encoding_scheme: Some(scheme),
        }
    }

    /// Get the text form.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Get the language tag, if any.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Get the encoding scheme, if any.
    pub fn encoding_scheme(&self) -> Option<&EName> {
        self.encoding_scheme.as_ref()
    }

    /// Replace the language tag.
    pub fn set_language(&mut self, language: Option<String>) {
        self.language = language;
    }

    /// Replace the encoding scheme.
    pub fn set_encoding_scheme(&mut self, scheme: Option<EName>) {
        self.encoding_scheme = scheme;
    }

    /// Check whether the text form is blank (empty or whitespace only).
    ///
    /// Blank values mean "delete" in merge deltas and "absent" in the
    /// wire readers.
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Project this value's XML attributes as sorted key/value pairs.
    ///
    /// A language tag becomes `xml:lang`; an encoding scheme becomes
    /// `xsi:type` with a Clark-notation value. The checksum and the XML
    /// writer both consume this projection.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = Vec::new();
        if let Some(lang) = &self.language {
            attrs.push(("xml:lang", lang.clone()));
        }
        if let Some(scheme) = &self.encoding_scheme {
            attrs.push(("xsi:type", scheme.to_string()));
        }
        attrs.sort_by(|a, b| a.0.cmp(b.0));
        attrs
    }
}
