//! Collection paths relative to the API base. The transport appends `.json`.
//!
//! Caller-supplied ids are percent-encoded as single path segments.

use urlencoding::encode;

pub const ENGINES: &str = "engines";

pub fn engine(engine_id: &str) -> String {
    format!("{ENGINES}/{}", encode(engine_id))
}

pub fn document_types(engine_id: &str) -> String {
    format!("{}/document_types", engine(engine_id))
}

pub fn document_type(engine_id: &str, slug: &str) -> String {
    format!("{}/{}", document_types(engine_id), encode(slug))
}

pub fn documents(engine_id: &str, slug: &str) -> String {
    format!("{}/documents", document_type(engine_id, slug))
}

pub fn document(engine_id: &str, slug: &str, document_id: &str) -> String {
    format!("{}/{}", documents(engine_id, slug), encode(document_id))
}

pub fn domains(engine_id: &str) -> String {
    format!("{}/domains", engine(engine_id))
}

pub fn domain(engine_id: &str, domain_id: &str) -> String {
    format!("{}/{}", domains(engine_id), encode(domain_id))
}

pub fn analytics(engine_id: &str, report: &str) -> String {
    format!("{}/analytics/{report}", engine(engine_id))
}
