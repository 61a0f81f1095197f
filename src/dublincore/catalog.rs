//! dublincore::catalog
//!
//! The catalog model: an ordered list of property entries plus the
//! document's root tag and namespace prefix bindings.
//!
//! # Invariants
//!
//! - Values for the same property preserve insertion order
//! - "Any language" lookups return the first value regardless of tag
//! - The root tag and bindings are structural: they never appear as
//!   entries
//!
//! # Example
//!
//! ```
//! use mediameta::dublincore::{vocab, DublinCore, DublinCoreValue};
//!
//! let mut catalog = DublinCore::new();
//! catalog.add(vocab::title(), DublinCoreValue::with_language("The Ring", "en"));
//! catalog.add(vocab::title(), DublinCoreValue::with_language("Der Ring", "de"));
//!
//! assert_eq!(catalog.first_value(&vocab::title()), Some("The Ring"));
//! assert_eq!(
//!     catalog.first_value_with_language(&vocab::title(), Some("de")),
//!     Some("Der Ring")
//! );
//! ```

use std::collections::{BTreeMap, HashMap};

use super::ename::EName;
use super::value::DublinCoreValue;
use super::vocab;

/// Namespace prefix bindings for a catalog document.
///
/// Maps prefixes to namespace URIs. The empty prefix stands for the
/// default namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixBindings {
    bindings: BTreeMap<String, String>,
}

impl PrefixBindings {
    /// Create an empty binding set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard catalog bindings: `oai_dc`, `dcterms`, `dc`, `xsi`.
    pub fn standard() -> Self {
        let mut bindings = Self::new();
        bindings.bind("oai_dc", vocab::NS_OAI_DC);
        bindings.bind("dcterms", vocab::NS_TERMS);
        bindings.bind("dc", vocab::NS_ELEMENTS);
        bindings.bind("xsi", vocab::NS_XSI);
        bindings
    }

    /// Bind a prefix to a namespace URI, replacing any previous binding.
    pub fn bind(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.bindings.insert(prefix.into(), namespace.into());
    }

    /// Resolve a prefix to its namespace URI.
    pub fn namespace_of(&self, prefix: &str) -> Option<&str> {
        self.bindings.get(prefix).map(String::as_str)
    }

    /// Find a prefix bound to the given namespace URI.
    ///
    /// When several prefixes are bound to the same URI the
    /// lexicographically smallest wins, so output is deterministic.
    pub fn prefix_of(&self, namespace: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(_, ns)| ns.as_str() == namespace)
            .map(|(prefix, _)| prefix.as_str())
    }

    /// Render an expanded name as a prefixed name under these bindings.
    ///
    /// Names in the default namespace (empty prefix) render bare.
    pub fn qualify(&self, name: &EName) -> Option<String> {
        if name.has_empty_namespace() {
            return Some(name.local_name().to_string());
        }
        let prefix = self.prefix_of(name.namespace())?;
        if prefix.is_empty() {
            Some(name.local_name().to_string())
        } else {
            Some(format!("{}:{}", prefix, name.local_name()))
        }
    }

    /// Expand a prefixed name (`dcterms:title`) to an [`EName`].
    ///
    /// An unprefixed name resolves against the default namespace when one
    /// is bound and an empty namespace otherwise.
    pub fn expand(&self, prefixed: &str) -> Option<EName> {
        match prefixed.split_once(':') {
            Some((prefix, local)) => {
                let namespace = self.namespace_of(prefix)?;
                EName::new(namespace, local).ok()
            }
            None => {
                let namespace = self.namespace_of("").unwrap_or("");
                EName::new(namespace, prefixed).ok()
            }
        }
    }

    /// Iterate bindings as `(prefix, namespace)` pairs in prefix order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings
            .iter()
            .map(|(prefix, ns)| (prefix.as_str(), ns.as_str()))
    }
}

/// A Dublin Core catalog: properties mapped to ordered value lists.
///
/// The in-memory model mirrors the document model: a flat, ordered entry
/// list. Lookup helpers provide the property-keyed view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DublinCore {
    root_tag: EName,
    bindings: PrefixBindings,
    entries: Vec<(EName, DublinCoreValue)>,
}

impl Default for DublinCore {
    fn default() -> Self {
        Self::new()
    }
}

impl DublinCore {
    /// Create an empty catalog with the OAI-DC root tag and the standard
    /// bindings.
    pub fn new() -> Self {
        Self {
            root_tag: vocab::root_tag(),
            bindings: PrefixBindings::standard(),
            entries: Vec::new(),
        }
    }

    /// Replace the root tag.
    pub fn with_root_tag(mut self, root_tag: EName) -> Self {
        self.root_tag = root_tag;
        self
    }

    /// Get the root tag.
    pub fn root_tag(&self) -> &EName {
        &self.root_tag
    }

    /// Get the prefix bindings.
    pub fn bindings(&self) -> &PrefixBindings {
        &self.bindings
    }

    /// Bind a prefix on this catalog.
    pub fn bind(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.bindings.bind(prefix, namespace);
    }

    /// All entries in document order.
    pub fn entries(&self) -> &[(EName, DublinCoreValue)] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct properties in first-appearance order.
    pub fn properties(&self) -> Vec<&EName> {
        let mut seen = Vec::new();
        for (property, _) in &self.entries {
            if !seen.contains(&property) {
                seen.push(property);
            }
        }
        seen
    }

    /// All values of a property, in insertion order.
    pub fn get(&self, property: &EName) -> Vec<&DublinCoreValue> {
        self.entries
            .iter()
            .filter(|(p, _)| p == property)
            .map(|(_, v)| v)
            .collect()
    }

    /// First value of a property regardless of language tag.
    pub fn first_value(&self, property: &EName) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.value())
    }

    /// First value of a property under the given language tag.
    ///
    /// `None` selects values that carry no tag.
    pub fn first_value_with_language(
        &self,
        property: &EName,
        language: Option<&str>,
    ) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, v)| p == property && v.language() == language)
            .map(|(_, v)| v.value())
    }

    /// Append a value to a property.
    ///
    /// Entries equal to the root tag are structural and rejected
    /// silently: the root tag marker never becomes content.
    pub fn add(&mut self, property: EName, value: DublinCoreValue) {
        if property == self.root_tag {
            return;
        }
        self.entries.push((property, value));
    }

    /// Append a plain text value to a property.
    pub fn add_plain(&mut self, property: EName, text: impl Into<String>) {
        self.add(property, DublinCoreValue::new(text));
    }

    /// Replace all values of a property with a single value.
    pub fn set(&mut self, property: EName, value: DublinCoreValue) {
        self.remove(&property);
        self.add(property, value);
    }

    /// Remove all values of a property. Returns the number removed.
    pub fn remove(&mut self, property: &EName) -> usize {
        let before = self.entries.len();
        self.entries.retain(|(p, _)| p != property);
        before - self.entries.len()
    }

    /// Remove the values of a property that carry the given language tag.
    ///
    /// `None` removes values without a tag. Returns the number removed.
    pub fn remove_language(&mut self, property: &EName, language: Option<&str>) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|(p, v)| !(p == property && v.language() == language));
        before - self.entries.len()
    }

    /// Compare semantic content: property to (value, language) lists.
    ///
    /// Encoding-scheme attributes are ignored here; the catalog checksum
    /// folds them back in. Root tags and bindings do not participate.
    pub fn content_equals(&self, other: &DublinCore) -> bool {
        self.content_map() == other.content_map()
    }

    fn content_map(&self) -> HashMap<&EName, Vec<(&str, Option<&str>)>> {
        let mut map: HashMap<&EName, Vec<(&str, Option<&str>)>> = HashMap::new();
        for (property, value) in &self.entries {
            map.entry(property)
                .or_default()
                .push((value.value(), value.language()));
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title_en_de() -> DublinCore {
        let mut catalog = DublinCore::new();
        catalog.add(
            vocab::title(),
            DublinCoreValue::with_language("The Ring", "en"),
        );
        catalog.add(
            vocab::title(),
            DublinCoreValue::with_language("Der Ring", "de"),
        );
        catalog
    }

    mod bindings {
        use super::*;

        #[test]
        fn standard_bindings_resolve() {
            let bindings = PrefixBindings::standard();
            assert_eq!(bindings.namespace_of("dcterms"), Some(vocab::NS_TERMS));
            assert_eq!(bindings.prefix_of(vocab::NS_TERMS), Some("dcterms"));
        }

        #[test]
        fn qualify_and_expand_round_trip() {
            let bindings = PrefixBindings::standard();
            let title = vocab::title();
            let prefixed = bindings.qualify(&title).unwrap();
            assert_eq!(prefixed, "dcterms:title");
            assert_eq!(bindings.expand(&prefixed), Some(title));
        }

        #[test]
        fn unknown_namespace_does_not_qualify() {
            let bindings = PrefixBindings::standard();
            let foreign = EName::new("urn:elsewhere", "thing").unwrap();
            assert_eq!(bindings.qualify(&foreign), None);
        }

        #[test]
        fn default_namespace_renders_bare() {
            let mut bindings = PrefixBindings::new();
            bindings.bind("", vocab::NS_TERMS);
            assert_eq!(bindings.qualify(&vocab::title()), Some("title".into()));
            assert_eq!(bindings.expand("title"), Some(vocab::title()));
        }

        #[test]
        fn unprefixed_without_default_is_empty_namespace() {
            let bindings = PrefixBindings::standard();
            let expanded = bindings.expand("dublincore").unwrap();
            assert_eq!(expanded.namespace(), "");
        }
    }

    mod lookup {
        use super::*;

        #[test]
        fn any_language_returns_first() {
            let catalog = title_en_de();
            assert_eq!(catalog.first_value(&vocab::title()), Some("The Ring"));
        }

        #[test]
        fn language_scoped_lookup() {
            let catalog = title_en_de();
            assert_eq!(
                catalog.first_value_with_language(&vocab::title(), Some("de")),
                Some("Der Ring")
            );
            assert_eq!(
                catalog.first_value_with_language(&vocab::title(), Some("fr")),
                None
            );
            assert_eq!(
                catalog.first_value_with_language(&vocab::title(), None),
                None
            );
        }

        #[test]
        fn insertion_order_preserved() {
            let mut catalog = DublinCore::new();
            catalog.add_plain(vocab::creator(), "First");
            catalog.add_plain(vocab::creator(), "Second");
            let values: Vec<_> = catalog
                .get(&vocab::creator())
                .iter()
                .map(|v| v.value())
                .collect();
            assert_eq!(values, ["First", "Second"]);
        }

        #[test]
        fn properties_in_first_appearance_order() {
            let mut catalog = DublinCore::new();
            catalog.add_plain(vocab::creator(), "a");
            catalog.add_plain(vocab::title(), "b");
            catalog.add_plain(vocab::creator(), "c");
            let properties = catalog.properties();
            assert_eq!(properties, [&vocab::creator(), &vocab::title()]);
        }
    }

    mod mutation {
        use super::*;

        #[test]
        fn set_replaces_all_values() {
            let mut catalog = title_en_de();
            catalog.set(vocab::title(), DublinCoreValue::new("Only"));
            assert_eq!(catalog.get(&vocab::title()).len(), 1);
            assert_eq!(catalog.first_value(&vocab::title()), Some("Only"));
        }

        #[test]
        fn remove_language_is_scoped() {
            let mut catalog = title_en_de();
            assert_eq!(catalog.remove_language(&vocab::title(), Some("en")), 1);
            assert_eq!(catalog.first_value(&vocab::title()), Some("Der Ring"));
        }

        #[test]
        fn root_tag_entries_rejected() {
            let mut catalog = DublinCore::new();
            let root = catalog.root_tag().clone();
            catalog.add_plain(root.clone(), "structural");
            assert!(catalog.get(&root).is_empty());
        }
    }

    mod content_equality {
        use super::*;

        #[test]
        fn ignores_encoding_scheme() {
            let mut a = DublinCore::new();
            a.add_plain(vocab::date(), "2020-01-01");

            let mut b = DublinCore::new();
            b.add(
                vocab::date(),
                DublinCoreValue::with_scheme("2020-01-01", vocab::scheme_w3cdtf()),
            );

            assert!(a.content_equals(&b));
            assert_ne!(a, b);
        }

        #[test]
        fn sensitive_to_language() {
            let mut a = DublinCore::new();
            a.add(vocab::title(), DublinCoreValue::with_language("X", "en"));

            let mut b = DublinCore::new();
            b.add(vocab::title(), DublinCoreValue::with_language("X", "de"));

            assert!(!a.content_equals(&b));
        }

        #[test]
        fn sensitive_to_value_order() {
            let mut a = DublinCore::new();
            a.add_plain(vocab::creator(), "1");
            a.add_plain(vocab::creator(), "2");

            let mut b = DublinCore::new();
            b.add_plain(vocab::creator(), "2");
            b.add_plain(vocab::creator(), "1");

            assert!(!a.content_equals(&b));
        }
    }
}
