use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

use easysearch_core::Result;

use crate::client::Client;
use crate::handle::{nullable, Collection, Entity, Handle};
use crate::paths;

/// A crawl target attached to an engine.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Domain {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub submitted_url: String,
    #[serde(deserialize_with = "nullable")]
    pub start_crawl_url: String,
    #[serde(deserialize_with = "nullable")]
    pub crawling: bool,
    #[serde(deserialize_with = "nullable")]
    pub document_count: u64,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entity for Domain {
    const KIND: &'static str = "Domain";
    type Api = DomainsApi;

    fn remote_id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone)]
pub struct DomainsApi {
    client: Client,
    engine_id: String,
}

impl Collection for DomainsApi {
    fn client(&self) -> &Client {
        &self.client
    }

    fn member_path(&self, domain_id: &str) -> String {
        paths::domain(&self.engine_id, domain_id)
    }
}

impl DomainsApi {
    pub fn new(client: Client, engine_id: &str) -> Self {
        Self { client, engine_id: engine_id.to_string() }
    }

    pub fn engine_id(&self) -> &str {
        &self.engine_id
    }

    pub fn all(&self) -> Result<Vec<Handle<Domain>>> {
        let body = self.client.get(&paths::domains(&self.engine_id), &[])?;
        Handle::list_from_response(self, &body)
    }

    pub fn get(&self, domain_id: &str) -> Result<Handle<Domain>> {
        let body = self.client.get(&self.member_path(domain_id), &[])?;
        Handle::from_response(self.clone(), &body)
    }

    pub fn create(&self, url: &str) -> Result<Handle<Domain>> {
        let payload = json!({ "domain": { "submitted_url": url } });
        let body = self.client.post(&paths::domains(&self.engine_id), &payload)?;
        Handle::from_response(self.clone(), &body)
    }

    pub fn destroy(&self, domain_id: &str) -> Result<()> {
        self.client.delete(&self.member_path(domain_id))
    }

    /// Queues a full recrawl; the crawl itself runs asynchronously on the server.
    pub fn recrawl(&self, domain_id: &str) -> Result<Handle<Domain>> {
        let path = format!("{}/recrawl", self.member_path(domain_id));
        let body = self.client.put(&path, &json!({}))?;
        Handle::from_response(self.clone(), &body)
    }

    /// Adds or refreshes a single URL on the domain.
    pub fn crawl_url(&self, domain_id: &str, url: &str) -> Result<()> {
        let path = format!("{}/crawl_url", self.member_path(domain_id));
        self.client.put(&path, &json!({ "url": url })).map(drop)
    }
}

impl Handle<Domain> {
    pub fn engine_id(&self) -> Result<&str> {
        let (api, _) = self.live_api()?;
        Ok(api.engine_id())
    }

    /// Queues a recrawl and adopts the domain state the server returns.
    pub fn recrawl(&mut self) -> Result<&Domain> {
        let (api, id) = self.live_api()?;
        let domain = api.recrawl(id)?.into_inner()?;
        self.replace(domain)?;
        self.get()
    }

    pub fn crawl_url(&self, url: &str) -> Result<()> {
        let (api, id) = self.live_api()?;
        api.crawl_url(id, url)
    }

    /// Refreshes first, so the answer reflects the server's current state.
    pub fn is_crawling(&mut self) -> Result<bool> {
        Ok(self.refresh()?.crawling)
    }
}
