//! dublincore::vocab
//!
//! The Dublin Core vocabulary: namespaces, the DCMES element set plus the
//! DCMI terms this crate's codec produces, and the encoding-scheme names
//! values are tagged with.
//!
//! Properties live in the DCMI terms namespace (`dcterms`); the classic
//! `dc` elements namespace is bound by default so legacy documents keyed
//! by `dc:` prefixes still resolve.

use super::ename::EName;

/// DCMI terms namespace. All catalog properties live here.
pub const NS_TERMS: &str = "http://purl.org/dc/terms/";

/// Legacy Dublin Core element set namespace (bound for input documents).
pub const NS_ELEMENTS: &str = "http://purl.org/dc/elements/1.1/";

/// OAI-DC container namespace; the default catalog root tag lives here.
pub const NS_OAI_DC: &str = "http://www.openarchives.org/OAI/2.0/oai_dc/";

/// XML Schema instance namespace (`xsi:type` scheme attributes).
pub const NS_XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// The XML namespace itself (`xml:lang` attributes).
pub const NS_XML: &str = "http://www.w3.org/XML/1998/namespace";

/// Default root tag for catalogs: the OAI-DC `dc` container element.
pub fn root_tag() -> EName {
    EName::from_static(NS_OAI_DC, "dc")
}

fn term(local: &str) -> EName {
    EName::from_static(NS_TERMS, local)
}

// The fifteen DCMES elements.

/// dcterms:title - Title of the resource
pub fn title() -> EName {
    term("title")
}

/// dcterms:creator - Entity primarily responsible for the resource
pub fn creator() -> EName {
    term("creator")
}

/// dcterms:subject - Topic of the resource
pub fn subject() -> EName {
    term("subject")
}

/// dcterms:description - Account of the resource
pub fn description() -> EName {
    term("description")
}

/// dcterms:publisher - Entity responsible for making the resource available
pub fn publisher() -> EName {
    term("publisher")
}

/// dcterms:contributor - Entity contributing to the resource
pub fn contributor() -> EName {
    term("contributor")
}

/// dcterms:date - Point or period of time associated with the resource
pub fn date() -> EName {
    term("date")
}

/// dcterms:type - Nature or genre of the resource
pub fn type_() -> EName {
    term("type")
}

/// dcterms:format - File format, physical medium, or dimensions
pub fn format() -> EName {
    term("format")
}

/// dcterms:identifier - Unambiguous reference to the resource
pub fn identifier() -> EName {
    term("identifier")
}

/// dcterms:source - Related resource from which the resource is derived
pub fn source() -> EName {
    term("source")
}

/// dcterms:language - Language of the resource
pub fn language() -> EName {
    term("language")
}

/// dcterms:relation - Related resource
pub fn relation() -> EName {
    term("relation")
}

/// dcterms:coverage - Spatial or temporal topic of the resource
pub fn coverage() -> EName {
    term("coverage")
}

/// dcterms:rights - Information about rights held in and over the resource
pub fn rights() -> EName {
    term("rights")
}

// DCMI terms the temporal codec and media catalogs additionally use.

/// dcterms:created - Creation instant of the resource
pub fn created() -> EName {
    term("created")
}

/// dcterms:temporal - Temporal extent of the resource (a period)
pub fn temporal() -> EName {
    term("temporal")
}

/// dcterms:extent - Size or duration of the resource
pub fn extent() -> EName {
    term("extent")
}

/// dcterms:available - Period the resource is or will be available
pub fn available() -> EName {
    term("available")
}

/// dcterms:license - Legal document under which the resource is offered
pub fn license() -> EName {
    term("license")
}

/// dcterms:spatial - Spatial characteristics of the resource
pub fn spatial() -> EName {
    term("spatial")
}

/// dcterms:isPartOf - Related resource this resource is included in
pub fn is_part_of() -> EName {
    term("isPartOf")
}

/// dcterms:replaces - Related resource this resource supplants
pub fn replaces() -> EName {
    term("replaces")
}

/// dcterms:rightsHolder - Entity owning or managing rights
pub fn rights_holder() -> EName {
    term("rightsHolder")
}

// Encoding schemes.

/// dcterms:W3CDTF - W3C date-time format profile of ISO 8601
pub fn scheme_w3cdtf() -> EName {
    term("W3CDTF")
}

/// dcterms:Period - DCMI period (`start=...; end=...;` compound string)
pub fn scheme_period() -> EName {
    term("Period")
}

/// dcterms:ISO8601 - ISO 8601 duration text
pub fn scheme_iso8601() -> EName {
    term("ISO8601")
}
