//! Search and suggest options.
//!
//! [`QueryOptionsBuilder`] accumulates per-document-type settings and is
//! consumed by [`QueryOptionsBuilder::build`] into an immutable
//! [`QueryOptions`]. Options that were never set are left out of the request
//! body entirely; there are no empty placeholders.

use std::collections::BTreeMap;
use std::num::NonZeroU32;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Sort order for a document type's sort field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

/// Ranking curve applied to a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionalBoost {
    Logarithmic,
    Linear,
    Exponential,
}

/// Search field entry with a relative weight, e.g. `title^3`.
pub fn weighted_field(field: &str, weight: u32) -> String {
    format!("{field}^{weight}")
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QueryOptions {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    fetch_fields: BTreeMap<String, Vec<String>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    search_fields: BTreeMap<String, Vec<String>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    filters: BTreeMap<String, BTreeMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    functional_boosts: BTreeMap<String, BTreeMap<String, FunctionalBoost>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    sort_field: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    sort_direction: BTreeMap<String, Direction>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    facets: BTreeMap<String, Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    document_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<NonZeroU32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    per_page: Option<NonZeroU32>,
}

#[derive(Serialize)]
struct QueryBody<'a> {
    q: &'a str,
    #[serde(flatten)]
    options: &'a QueryOptions,
}

impl QueryOptions {
    /// No options at all; serializes as the query term alone.
    pub const DEFAULT: QueryOptions = QueryOptions {
        fetch_fields: BTreeMap::new(),
        search_fields: BTreeMap::new(),
        filters: BTreeMap::new(),
        functional_boosts: BTreeMap::new(),
        sort_field: BTreeMap::new(),
        sort_direction: BTreeMap::new(),
        facets: BTreeMap::new(),
        document_types: None,
        page: None,
        per_page: None,
    };

    pub fn builder() -> QueryOptionsBuilder {
        QueryOptionsBuilder::default()
    }

    /// Request body for a search or suggest: `q` first, then every set option.
    ///
    /// Takes `&self`, so one `QueryOptions` can back any number of requests.
    pub fn with_query_term(&self, term: &str) -> Result<String> {
        Ok(serde_json::to_string(&QueryBody { q: term, options: self })?)
    }

    pub fn to_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::DEFAULT
    }

    pub fn page(&self) -> Option<u32> {
        self.page.map(NonZeroU32::get)
    }

    pub fn per_page(&self) -> Option<u32> {
        self.per_page.map(NonZeroU32::get)
    }

    pub fn document_types(&self) -> Option<&[String]> {
        self.document_types.as_deref()
    }
}

impl FromStr for QueryOptions {
    type Err = Error;

    /// Parses the option tree as produced by [`QueryOptions::to_json`].
    fn from_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

/// Single-owner accumulator for [`QueryOptions`].
#[derive(Debug, Clone, Default)]
pub struct QueryOptionsBuilder {
    options: QueryOptions,
}

impl QueryOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fields returned for `document_type`. Replaces any earlier selection.
    pub fn fetch_fields<I, S>(mut self, document_type: &str, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.fetch_fields.insert(document_type.to_string(), collect(fields));
        self
    }

    /// Fields searched for `document_type`; see [`weighted_field`] for weights.
    /// Replaces any earlier selection.
    pub fn search_fields<I, S>(mut self, document_type: &str, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.search_fields.insert(document_type.to_string(), collect(fields));
        self
    }

    /// Conditions on one field. Replaces that field's conditions only.
    pub fn filter<I, S>(mut self, document_type: &str, field: &str, conditions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options
            .filters
            .entry(document_type.to_string())
            .or_default()
            .insert(field.to_string(), collect(conditions));
        self
    }

    pub fn functional_boost(mut self, document_type: &str, field: &str, boost: FunctionalBoost) -> Self {
        self.options
            .functional_boosts
            .entry(document_type.to_string())
            .or_default()
            .insert(field.to_string(), boost);
        self
    }

    /// Sorts ascending on `field`.
    pub fn sort_field(self, document_type: &str, field: &str) -> Self {
        self.sort(document_type, field, Direction::default())
    }

    pub fn sort(mut self, document_type: &str, field: &str, direction: Direction) -> Self {
        self.options.sort_field.insert(document_type.to_string(), field.to_string());
        self.sort_direction(document_type, direction)
    }

    /// Direction only; without a sort field the service orders on `_score`.
    pub fn sort_direction(mut self, document_type: &str, direction: Direction) -> Self {
        self.options.sort_direction.insert(document_type.to_string(), direction);
        self
    }

    pub fn facets<I, S>(mut self, document_type: &str, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.facets.insert(document_type.to_string(), collect(fields));
        self
    }

    /// Restricts the query to these document types.
    pub fn document_types<I, S>(mut self, document_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.document_types = Some(collect(document_types));
        self
    }

    /// 1-based page; `0` clears it.
    pub fn page(mut self, page: u32) -> Self {
        self.options.page = NonZeroU32::new(page);
        self
    }

    /// `0` clears it.
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.options.per_page = NonZeroU32::new(per_page);
        self
    }

    pub fn build(self) -> QueryOptions {
        self.options
    }
}

fn collect<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}
