//! Decoding of search and suggest responses into one result set per document type.
//!
//! Both decoders make a single validating pass and either return the complete
//! mapping or an error; a partially filled mapping is never handed out.

use std::collections::HashMap;

use serde_json::{Map, Value};
use tracing::trace;

use crate::error::{Error, Result};
use crate::record::{type_name, value_text, Record};

pub type SearchResults = HashMap<String, SearchResultSet>;
pub type SuggestResults = HashMap<String, SuggestResultSet>;

/// Paging and facet metadata for one document type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Info {
    pub query: String,
    pub total_result_count: u64,
    pub page_count: u64,
    pub page: u64,
    pub per_page: u64,
    /// Facet counts exactly as the service returned them.
    pub facets: Option<Map<String, Value>>,
}

impl Info {
    fn from_object(mut object: Map<String, Value>) -> Self {
        Self {
            query: object.remove("query").map(value_text).unwrap_or_default(),
            total_result_count: object.get("total_result_count").map_or(0, int_value),
            page_count: object.get("num_pages").map_or(0, int_value),
            page: object.get("current_page").map_or(0, int_value),
            per_page: object.get("per_page").map_or(0, int_value),
            facets: match object.remove("facets") {
                Some(Value::Object(facets)) => Some(facets),
                _ => None,
            },
        }
    }

    /// Value → count breakdown for one faceted field.
    pub fn facet(&self, field: &str) -> Option<Vec<(String, u64)>> {
        let counts = self.facets.as_ref()?.get(field)?.as_object()?;
        Some(counts.iter().map(|(value, count)| (value.clone(), int_value(count))).collect())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResultSet {
    info: Info,
    records: Vec<Record>,
}

impl SearchResultSet {
    pub fn info(&self) -> &Info {
        &self.info
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

/// Suggestions for one document type.
///
/// The service reports a single `record_count` for the whole response; every
/// document type's set carries that same figure.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestResultSet {
    records: Vec<Record>,
    record_count: u64,
}

impl SuggestResultSet {
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn record_count(&self) -> u64 {
        self.record_count
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

/// Splits `{"info": {..}, "records": {..}}` into one set per document type
/// named in `info`.
pub fn decode_search_response(body: &str) -> Result<SearchResults> {
    let mut root = into_object(serde_json::from_str(body)?, "search response")?;
    let info = take_object(&mut root, "info")?;
    let mut records = take_object(&mut root, "records")?;

    let results = info
        .into_iter()
        .map(|(document_type, info)| {
            let info = Info::from_object(into_object(info, "info block")?);
            let list = records
                .remove(&document_type)
                .ok_or_else(|| Error::Decode(format!("no records for document type '{document_type}'")))?;
            let records = Record::list_from_json(list)?;
            Ok((document_type, SearchResultSet { info, records }))
        })
        .collect::<Result<SearchResults>>()?;

    trace!(document_types = results.len(), "decoded search response");
    Ok(results)
}

/// Splits `{"record_count": n, "records": {..}}` into one set per document type.
///
/// A missing or null `records` means no suggestions and yields an empty
/// mapping; a null entry for a document type is skipped. Any other shape is
/// a decode error.
pub fn decode_suggest_response(body: &str) -> Result<SuggestResults> {
    let mut root = into_object(serde_json::from_str(body)?, "suggest response")?;
    let record_count = root.get("record_count").map_or(0, int_value);
    let records = match root.remove("records") {
        None | Some(Value::Null) => return Ok(SuggestResults::new()),
        Some(records) => into_object(records, "records")?,
    };

    let results = records
        .into_iter()
        .filter(|(_, list)| !list.is_null())
        .map(|(document_type, list)| {
            let records = Record::list_from_json(list)?;
            Ok((document_type, SuggestResultSet { records, record_count }))
        })
        .collect::<Result<SuggestResults>>()?;

    trace!(document_types = results.len(), record_count, "decoded suggest response");
    Ok(results)
}

fn into_object(value: Value, what: &str) -> Result<Map<String, Value>> {
    match value {
        Value::Object(object) => Ok(object),
        other => Err(Error::Decode(format!("{what} is {}, expected an object", type_name(&other)))),
    }
}

fn take_object(root: &mut Map<String, Value>, key: &str) -> Result<Map<String, Value>> {
    let value = root.remove(key).ok_or_else(|| Error::Decode(format!("missing '{key}'")))?;
    into_object(value, key)
}

/// Lenient integer read: numbers, numeric strings, anything else is 0.
fn int_value(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().map(|f| f.max(0.0) as u64)).unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}
