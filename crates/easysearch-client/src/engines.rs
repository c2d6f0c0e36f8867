use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

use easysearch_core::options::QueryOptions;
use easysearch_core::{Result, SearchResults, SuggestResults};

use crate::analytics::AnalyticsApi;
use crate::client::Client;
use crate::document_types::DocumentTypesApi;
use crate::domains::DomainsApi;
use crate::handle::{nullable, Collection, Entity, Handle};
use crate::{paths, query};

/// A search index.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Engine {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub key: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub slug: String,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "nullable")]
    pub document_count: u64,
}

impl Entity for Engine {
    const KIND: &'static str = "Engine";
    type Api = EnginesApi;

    fn remote_id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone)]
pub struct EnginesApi {
    client: Client,
}

impl Collection for EnginesApi {
    fn client(&self) -> &Client {
        &self.client
    }

    fn member_path(&self, id: &str) -> String {
        paths::engine(id)
    }
}

impl EnginesApi {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn all(&self) -> Result<Vec<Handle<Engine>>> {
        let body = self.client.get(paths::ENGINES, &[])?;
        Handle::list_from_response(self, &body)
    }

    /// `engine_id` may be the id or the slug.
    pub fn get(&self, engine_id: &str) -> Result<Handle<Engine>> {
        let body = self.client.get(&paths::engine(engine_id), &[])?;
        Handle::from_response(self.clone(), &body)
    }

    pub fn create(&self, name: &str) -> Result<Handle<Engine>> {
        let body = self.client.post(paths::ENGINES, &json!({ "engine": { "name": name } }))?;
        Handle::from_response(self.clone(), &body)
    }

    pub fn destroy(&self, engine_id: &str) -> Result<()> {
        self.client.delete(&paths::engine(engine_id))
    }

    /// Searches every document type of the engine unless `options` restricts them.
    pub fn search(&self, engine_id: &str, term: &str, options: &QueryOptions) -> Result<SearchResults> {
        query::search(&self.client, &paths::engine(engine_id), term, options)
    }

    pub fn suggest(&self, engine_id: &str, term: &str, options: &QueryOptions) -> Result<SuggestResults> {
        query::suggest(&self.client, &paths::engine(engine_id), term, options)
    }
}

impl Handle<Engine> {
    pub fn search(&self, term: &str) -> Result<SearchResults> {
        self.search_with(term, &QueryOptions::DEFAULT)
    }

    pub fn search_with(&self, term: &str, options: &QueryOptions) -> Result<SearchResults> {
        let (api, id) = self.live_api()?;
        api.search(id, term, options)
    }

    pub fn suggest(&self, term: &str) -> Result<SuggestResults> {
        self.suggest_with(term, &QueryOptions::DEFAULT)
    }

    pub fn suggest_with(&self, term: &str, options: &QueryOptions) -> Result<SuggestResults> {
        let (api, id) = self.live_api()?;
        api.suggest(id, term, options)
    }

    pub fn document_types(&self) -> Result<DocumentTypesApi> {
        let (api, id) = self.live_api()?;
        Ok(DocumentTypesApi::new(api.client.clone(), id))
    }

    pub fn domains(&self) -> Result<DomainsApi> {
        let (api, id) = self.live_api()?;
        Ok(DomainsApi::new(api.client.clone(), id))
    }

    pub fn analytics(&self) -> Result<AnalyticsApi> {
        let (api, id) = self.live_api()?;
        Ok(AnalyticsApi::new(api.client.clone(), id))
    }
}
