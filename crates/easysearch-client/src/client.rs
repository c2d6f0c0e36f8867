use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::warn;

use easysearch_core::config::ClientConfig;
use easysearch_core::traits::Transport;
use easysearch_core::types::{Method, Request};
use easysearch_core::{Error, Result};

use crate::analytics::AnalyticsApi;
use crate::document_types::DocumentTypesApi;
use crate::documents::DocumentsApi;
use crate::domains::DomainsApi;
use crate::engines::EnginesApi;
use crate::transport::HttpTransport;

/// Entry point: a shared transport plus the "2xx or fail" status policy.
///
/// Cloning is cheap; every API value and handle holds its own clone.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}

impl Client {
    pub fn new<T: Transport + 'static>(transport: T) -> Self {
        Self { transport: Arc::new(transport) }
    }

    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Ok(Self::new(HttpTransport::new(config)?))
    }

    pub fn engines(&self) -> EnginesApi {
        EnginesApi::new(self.clone())
    }

    pub fn document_types(&self, engine_id: &str) -> DocumentTypesApi {
        DocumentTypesApi::new(self.clone(), engine_id)
    }

    pub fn documents(&self, engine_id: &str, document_type: &str) -> DocumentsApi {
        DocumentsApi::new(self.clone(), engine_id, document_type)
    }

    pub fn domains(&self, engine_id: &str) -> DomainsApi {
        DomainsApi::new(self.clone(), engine_id)
    }

    pub fn analytics(&self, engine_id: &str) -> AnalyticsApi {
        AnalyticsApi::new(self.clone(), engine_id)
    }

    /// Body text of a 2xx response; anything else is `Error::Status`.
    pub(crate) fn execute(&self, request: Request) -> Result<String> {
        let (method, path) = (request.method, request.path.clone());
        let response = self.transport.send(request)?;
        if response.is_success() {
            return Ok(response.body);
        }
        warn!(%method, path = %path, status = response.status, "request rejected");
        Err(Error::Status { method, path, status: response.status, body: response.body })
    }

    /// Like a GET, but a 404 comes back as `None`.
    pub(crate) fn fetch(&self, path: &str) -> Result<Option<String>> {
        match self.execute(Request::new(Method::Get, path)) {
            Ok(body) => Ok(Some(body)),
            Err(Error::Status { status: 404, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub(crate) fn get(&self, path: &str, params: &[(&str, String)]) -> Result<String> {
        let request = params
            .iter()
            .fold(Request::new(Method::Get, path), |request, (k, v)| request.param(*k, v.clone()));
        self.execute(request)
    }

    pub(crate) fn post(&self, path: &str, body: &Value) -> Result<String> {
        self.post_text(path, body.to_string())
    }

    pub(crate) fn post_text(&self, path: &str, body: String) -> Result<String> {
        self.execute(Request::new(Method::Post, path).body(body))
    }

    pub(crate) fn put(&self, path: &str, body: &Value) -> Result<String> {
        self.execute(Request::new(Method::Put, path).body(body.to_string()))
    }

    pub(crate) fn delete(&self, path: &str) -> Result<()> {
        self.execute(Request::new(Method::Delete, path)).map(drop)
    }
}
