//! dublincore::ename
//!
//! Expanded (qualified) names for catalog properties.
//!
//! # Types
//!
//! - [`EName`] - Validated `(namespace URI, local name)` pair
//!
//! # Validation
//!
//! Local names are validated at construction time against the XML NCName
//! rules this catalog format relies on. Invalid names cannot be
//! represented, so every property key in a catalog is well-formed by
//! construction.
//!
//! # Examples
//!
//! ```
//! use mediameta::dublincore::EName;
//!
//! let title = EName::new("http://purl.org/dc/terms/", "title").unwrap();
//! assert_eq!(title.namespace(), "http://purl.org/dc/terms/");
//! assert_eq!(title.local_name(), "title");
//!
//! // Clark notation round-trip
//! assert_eq!(title.to_string(), "{http://purl.org/dc/terms/}title");
//! assert_eq!(EName::from_clark(&title.to_string()).unwrap(), title);
//!
//! // Invalid local names fail at creation time
//! assert!(EName::new("http://purl.org/dc/terms/", "has space").is_err());
//! assert!(EName::new("http://purl.org/dc/terms/", "").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from expanded-name validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ENameError {
    #[error("invalid local name: {0}")]
    InvalidLocalName(String),

    #[error("invalid clark notation: {0}")]
    InvalidClark(String),
}

/// An expanded XML element name: a namespace URI plus a local name.
///
/// `EName` identifies a catalog property. It is an immutable value type,
/// compared and hashed by value, and ordered by `(namespace, local name)`
/// so catalog digests can sort properties deterministically.
///
/// The namespace may be empty (an element in no namespace); the local
/// name must be a valid NCName.
///
/// # Example
///
/// ```
/// use mediameta::dublincore::EName;
///
/// let a = EName::new("http://purl.org/dc/terms/", "creator").unwrap();
/// let b = EName::new("http://purl.org/dc/terms/", "title").unwrap();
/// assert!(a < b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EName {
    namespace: String,
    local_name: String,
}

impl EName {
    /// Create a new validated expanded name.
    ///
    /// # Errors
    ///
    /// Returns `ENameError::InvalidLocalName` if the local name is not a
    /// valid NCName.
    pub fn new(
        namespace: impl Into<String>,
        local_name: impl Into<String>,
    ) -> Result<Self, ENameError> {
        let namespace = namespace.into();
        let local_name = local_name.into();
        Self::validate_local(&local_name)?;
        Ok(Self {
            namespace,
            local_name,
        })
    }

    /// Parse an expanded name from Clark notation (`{namespace}local`).
    ///
    /// A name without braces is treated as having an empty namespace.
    ///
    /// # Errors
    ///
    /// Returns `ENameError::InvalidClark` if the braces are unbalanced, or
    /// `ENameError::InvalidLocalName` if the local part is not an NCName.
    ///
    /// # Example
    ///
    /// ```
    /// use mediameta::dublincore::EName;
    ///
    /// let name = EName::from_clark("{http://purl.org/dc/terms/}title").unwrap();
    /// assert_eq!(name.local_name(), "title");
    ///
    /// let bare = EName::from_clark("title").unwrap();
    /// assert_eq!(bare.namespace(), "");
    /// ```
    pub fn from_clark(s: &str) -> Result<Self, ENameError> {
        if let Some(rest) = s.strip_prefix('{') {
            match rest.split_once('}') {
                Some((ns, local)) => Self::new(ns, local),
                None => Err(ENameError::InvalidClark(format!(
                    "missing closing brace in '{s}'"
                ))),
            }
        } else if s.contains('}') {
            Err(ENameError::InvalidClark(format!(
                "unexpected closing brace in '{s}'"
            )))
        } else {
            Self::new("", s)
        }
    }

    /// Create an expanded name from parts known to be valid.
    ///
    /// Used by the vocabulary module for compile-time constants.
    pub(crate) fn from_static(namespace: &str, local_name: &str) -> Self {
        // Safe because callers pass constants that satisfy the NCName rules
        Self {
            namespace: namespace.to_string(),
            local_name: local_name.to_string(),
        }
    }

    /// Validate a local name against NCName rules.
    fn validate_local(local: &str) -> Result<(), ENameError> {
        // Cannot be empty
        let mut chars = local.chars();
        let first = match chars.next() {
            Some(c) => c,
            None => {
                return Err(ENameError::InvalidLocalName(
                    "local name cannot be empty".into(),
                ));
            }
        };

        // First character must be a letter or '_'
        if !(first.is_alphabetic() || first == '_') {
            return Err(ENameError::InvalidLocalName(format!(
                "local name cannot start with '{first}'"
            )));
        }

        // Remaining characters: letters, digits, '-', '.', '_'
        for c in chars {
            let ok = c.is_alphanumeric() || c == '-' || c == '.' || c == '_';
            if !ok {
                return Err(ENameError::InvalidLocalName(format!(
                    "local name cannot contain '{c}'"
                )));
            }
        }

        // NCName forbids ':' everywhere (covered above) and whitespace
        Ok(())
    }

    /// Get the namespace URI.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Get the local name.
    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// Check whether this name has an empty namespace.
    pub fn has_empty_namespace(&self) -> bool {
        self.namespace.is_empty()
    }
}

impl TryFrom<String> for EName {
    type Error = ENameError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_clark(&s)
    }
}

impl From<EName> for String {
    fn from(name: EName) -> Self {
        name.to_string()
    }
}

impl std::fmt::Display for EName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.namespace.is_empty() {
            write!(f, "{}", self.local_name)
        } else {
            write!(f, "{{{}}}{}", self.namespace, self.local_name)
        }
    }
}
