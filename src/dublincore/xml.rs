//! dublincore::xml
//!
//! XML catalog documents.
//!
//! A catalog document is a root element whose children are namespaced
//! property elements, one per value, each optionally carrying an
//! `xml:lang` attribute and an `xsi:type` attribute naming the encoding
//! scheme as a prefixed QName.
//!
//! The reader resolves arbitrary input prefixes, including the default
//! namespace; the writer renders under the catalog's own bindings.
//! Blank text content is treated as an absent value, not an error.
//!
//! # Example
//!
//! ```
//! use mediameta::dublincore::{vocab, xml, DublinCore, DublinCoreValue};
//!
//! let mut catalog = DublinCore::new();
//! catalog.add(
//!     vocab::title(),
//!     DublinCoreValue::with_language("Metropolis", "en"),
//! );
//!
//! let doc = xml::write_xml(&catalog).unwrap();
//! let parsed = xml::read_xml(&doc).unwrap();
//! assert_eq!(parsed.first_value(&vocab::title()), Some("Metropolis"));
//! ```

use std::collections::HashMap;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use thiserror::Error;

use super::catalog::DublinCore;
use super::ename::{EName, ENameError};
use super::value::DublinCoreValue;
use super::vocab;

/// Errors from XML catalog reading and writing.
#[derive(Debug, Error)]
pub enum XmlError {
    #[error("malformed xml: {0}")]
    Malformed(#[from] quick_xml::Error),

    #[error("malformed attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("document is not valid utf-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("unbound namespace prefix '{0}'")]
    UnboundPrefix(String),

    #[error("no prefix bound for namespace of '{0}'")]
    UnboundNamespace(String),

    #[error("invalid name: {0}")]
    InvalidName(#[from] ENameError),

    #[error("document has no root element")]
    MissingRoot,
}

/// Parse an XML catalog document.
///
/// The first element becomes the root tag; its namespace declarations
/// are merged into the catalog's bindings. Each child element becomes
/// one entry unless its text content is blank. Elements nested deeper
/// than the property level are ignored.
///
/// # Errors
///
/// Fails on malformed XML, on an element or `xsi:type` prefix with no
/// in-scope binding, and on an empty document.
pub fn read_xml(xml: &str) -> Result<DublinCore, XmlError> {
    let mut reader = Reader::from_str(xml);

    let mut catalog: Option<DublinCore> = None;
    let mut scopes: Vec<HashMap<String, String>> = Vec::new();
    let mut depth: usize = 0;
    let mut current: Option<(EName, Option<String>, Option<EName>)> = None;
    let mut text = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                scopes.push(namespace_decls(&e)?);
                open_element(&e, &scopes, depth, &mut catalog, &mut current)?;
                if depth == 1 {
                    text.clear();
                }
                depth += 1;
            }
            Event::Empty(e) => {
                scopes.push(namespace_decls(&e)?);
                // An empty property element has blank content; only a
                // root element registers anything.
                if depth == 0 {
                    open_element(&e, &scopes, depth, &mut catalog, &mut None)?;
                }
                scopes.pop();
            }
            Event::Text(e) => {
                if current.is_some() {
                    text.push_str(&e.unescape()?);
                }
            }
            Event::CData(e) => {
                if current.is_some() {
                    text.push_str(std::str::from_utf8(&e.into_inner())?);
                }
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                scopes.pop();
                if depth == 1 {
                    if let (Some(catalog), Some((property, language, scheme))) =
                        (catalog.as_mut(), current.take())
                    {
                        let trimmed = text.trim();
                        if !trimmed.is_empty() {
                            let mut value = DublinCoreValue::new(trimmed);
                            value.set_language(language);
                            value.set_encoding_scheme(scheme);
                            catalog.add(property, value);
                        }
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    catalog.ok_or(XmlError::MissingRoot)
}

fn open_element(
    e: &BytesStart<'_>,
    scopes: &[HashMap<String, String>],
    depth: usize,
    catalog: &mut Option<DublinCore>,
    current: &mut Option<(EName, Option<String>, Option<EName>)>,
) -> Result<(), XmlError> {
    let name = std::str::from_utf8(e.name().as_ref())?.to_string();
    if depth == 0 {
        let root = resolve_name(&name, scopes)?;
        let mut built = DublinCore::new().with_root_tag(root);
        if let Some(decls) = scopes.last() {
            for (prefix, namespace) in decls {
                built.bind(prefix.clone(), namespace.clone());
            }
        }
        *catalog = Some(built);
    } else if depth == 1 {
        let property = resolve_name(&name, scopes)?;
        let (language, scheme) = value_attributes(e, scopes)?;
        *current = Some((property, language, scheme));
    }
    Ok(())
}

/// Collect the `xmlns` declarations of one element.
fn namespace_decls(e: &BytesStart<'_>) -> Result<HashMap<String, String>, XmlError> {
    let mut decls = HashMap::new();
    for attr in e.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = attr.unescape_value()?;
        if key == "xmlns" {
            decls.insert(String::new(), value.into_owned());
        } else if let Some(prefix) = key.strip_prefix("xmlns:") {
            decls.insert(prefix.to_string(), value.into_owned());
        }
    }
    Ok(decls)
}

/// Resolve a prefix against the scope stack, innermost first.
fn resolve_prefix<'a>(prefix: &str, scopes: &'a [HashMap<String, String>]) -> Option<&'a str> {
    if prefix == "xml" {
        return Some(vocab::NS_XML);
    }
    scopes
        .iter()
        .rev()
        .find_map(|scope| scope.get(prefix))
        .map(String::as_str)
}

/// Resolve a possibly-prefixed element or QName-valued attribute.
fn resolve_name(name: &str, scopes: &[HashMap<String, String>]) -> Result<EName, XmlError> {
    match name.split_once(':') {
        Some((prefix, local)) => {
            let namespace = resolve_prefix(prefix, scopes)
                .ok_or_else(|| XmlError::UnboundPrefix(prefix.to_string()))?;
            Ok(EName::new(namespace, local)?)
        }
        None => {
            let namespace = resolve_prefix("", scopes).unwrap_or("");
            Ok(EName::new(namespace, name)?)
        }
    }
}

/// Read the `xml:lang` and `xsi:type` attributes of a property element.
fn value_attributes(
    e: &BytesStart<'_>,
    scopes: &[HashMap<String, String>],
) -> Result<(Option<String>, Option<EName>), XmlError> {
    let mut language = None;
    let mut scheme = None;
    for attr in e.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())?;
        if key == "xml:lang" {
            language = Some(attr.unescape_value()?.into_owned());
            continue;
        }
        if let Some((prefix, local)) = key.split_once(':') {
            if prefix == "xmlns" {
                continue;
            }
            // Only the schema-instance type attribute matters; other
            // foreign attributes are tolerated and dropped.
            if local == "type" && resolve_prefix(prefix, scopes) == Some(vocab::NS_XSI) {
                let value = attr.unescape_value()?;
                scheme = Some(resolve_name(&value, scopes)?);
            }
        }
    }
    Ok((language, scheme))
}

/// Render a catalog as an XML document.
///
/// # Errors
///
/// Fails with `XmlError::UnboundNamespace` when the root tag, a
/// property, or an encoding scheme has no prefix under the catalog's
/// bindings.
pub fn write_xml(catalog: &DublinCore) -> Result<String, XmlError> {
    let bindings = catalog.bindings();
    let root = qualify(catalog, catalog.root_tag())?;

    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str(&format!("<{root}"));
    for (prefix, namespace) in bindings.iter() {
        if prefix.is_empty() {
            xml.push_str(&format!(" xmlns=\"{}\"", escape_xml(namespace)));
        } else {
            xml.push_str(&format!(" xmlns:{prefix}=\"{}\"", escape_xml(namespace)));
        }
    }
    xml.push_str(">\n");

    for (property, value) in catalog.entries() {
        let tag = qualify(catalog, property)?;
        xml.push_str(&format!("  <{tag}"));
        if let Some(language) = value.language() {
            xml.push_str(&format!(" xml:lang=\"{}\"", escape_xml(language)));
        }
        if let Some(scheme) = value.encoding_scheme() {
            let scheme = qualify(catalog, scheme)?;
            xml.push_str(&format!(" xsi:type=\"{}\"", escape_xml(&scheme)));
        }
        xml.push_str(&format!(">{}</{tag}>\n", escape_xml(value.value())));
    }

    xml.push_str(&format!("</{root}>\n"));
    Ok(xml)
}

fn qualify(catalog: &DublinCore, name: &EName) -> Result<String, XmlError> {
    catalog
        .bindings()
        .qualify(name)
        .ok_or_else(|| XmlError::UnboundNamespace(name.to_string()))
}

/// Escape XML special characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
