//! Search and suggest entry points shared by every search-capable scope.

use std::collections::HashMap;

use easysearch_core::options::QueryOptions;
use easysearch_core::results::{decode_search_response, decode_suggest_response};
use easysearch_core::{Error, Result, SearchResults, SuggestResults};

use crate::client::Client;

/// POSTs `term` plus `options` to `<scope>/search`.
///
/// A transport failure is returned before any decoding happens.
pub(crate) fn search(client: &Client, scope: &str, term: &str, options: &QueryOptions) -> Result<SearchResults> {
    let body = options.with_query_term(term)?;
    let text = client.post_text(&format!("{scope}/search"), body)?;
    decode_search_response(&text)
}

pub(crate) fn suggest(client: &Client, scope: &str, term: &str, options: &QueryOptions) -> Result<SuggestResults> {
    let body = options.with_query_term(term)?;
    let text = client.post_text(&format!("{scope}/suggest"), body)?;
    decode_suggest_response(&text)
}

/// Takes the one entry a single-document-type query answers with.
pub fn single<T>(mut results: HashMap<String, T>, document_type: &str) -> Result<T> {
    results
        .remove(document_type)
        .ok_or_else(|| Error::Decode(format!("response has no results for document type '{document_type}'")))
}
