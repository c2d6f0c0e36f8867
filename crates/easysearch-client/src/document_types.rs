use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

use easysearch_core::options::QueryOptions;
use easysearch_core::{Result, SearchResultSet, SearchResults, SuggestResultSet, SuggestResults};

use crate::client::Client;
use crate::documents::DocumentsApi;
use crate::handle::{nullable, Collection, Entity, Handle};
use crate::{paths, query};

/// A named schema within an engine.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DocumentType {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub slug: String,
    #[serde(deserialize_with = "nullable")]
    pub engine_id: String,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "nullable")]
    pub document_count: u64,
}

impl Entity for DocumentType {
    const KIND: &'static str = "DocumentType";
    type Api = DocumentTypesApi;

    fn remote_id(&self) -> &str {
        &self.slug
    }
}

#[derive(Debug, Clone)]
pub struct DocumentTypesApi {
    client: Client,
    engine_id: String,
}

impl Collection for DocumentTypesApi {
    fn client(&self) -> &Client {
        &self.client
    }

    fn member_path(&self, slug: &str) -> String {
        paths::document_type(&self.engine_id, slug)
    }
}

impl DocumentTypesApi {
    pub fn new(client: Client, engine_id: &str) -> Self {
        Self { client, engine_id: engine_id.to_string() }
    }

    pub fn engine_id(&self) -> &str {
        &self.engine_id
    }

    pub fn all(&self) -> Result<Vec<Handle<DocumentType>>> {
        let body = self.client.get(&paths::document_types(&self.engine_id), &[])?;
        Handle::list_from_response(self, &body)
    }

    pub fn get(&self, slug: &str) -> Result<Handle<DocumentType>> {
        let body = self.client.get(&self.member_path(slug), &[])?;
        Handle::from_response(self.clone(), &body)
    }

    pub fn create(&self, name: &str) -> Result<Handle<DocumentType>> {
        let payload = json!({ "document_type": { "name": name } });
        let body = self.client.post(&paths::document_types(&self.engine_id), &payload)?;
        Handle::from_response(self.clone(), &body)
    }

    pub fn destroy(&self, slug: &str) -> Result<()> {
        self.client.delete(&self.member_path(slug))
    }

    /// One-entry mapping keyed by `slug`; see [`Self::search_one`].
    pub fn search(&self, slug: &str, term: &str, options: &QueryOptions) -> Result<SearchResults> {
        query::search(&self.client, &self.member_path(slug), term, options)
    }

    pub fn search_one(&self, slug: &str, term: &str, options: &QueryOptions) -> Result<SearchResultSet> {
        query::single(self.search(slug, term, options)?, slug)
    }

    pub fn suggest(&self, slug: &str, term: &str, options: &QueryOptions) -> Result<SuggestResults> {
        query::suggest(&self.client, &self.member_path(slug), term, options)
    }

    pub fn suggest_one(&self, slug: &str, term: &str, options: &QueryOptions) -> Result<SuggestResultSet> {
        query::single(self.suggest(slug, term, options)?, slug)
    }
}

impl Handle<DocumentType> {
    pub fn search(&self, term: &str) -> Result<SearchResultSet> {
        self.search_with(term, &QueryOptions::DEFAULT)
    }

    pub fn search_with(&self, term: &str, options: &QueryOptions) -> Result<SearchResultSet> {
        let (api, slug) = self.live_api()?;
        api.search_one(slug, term, options)
    }

    pub fn suggest(&self, term: &str) -> Result<SuggestResultSet> {
        self.suggest_with(term, &QueryOptions::DEFAULT)
    }

    pub fn suggest_with(&self, term: &str, options: &QueryOptions) -> Result<SuggestResultSet> {
        let (api, slug) = self.live_api()?;
        api.suggest_one(slug, term, options)
    }

    pub fn documents(&self) -> Result<DocumentsApi> {
        let (api, slug) = self.live_api()?;
        Ok(DocumentsApi::new(api.client.clone(), &api.engine_id, slug))
    }
}
