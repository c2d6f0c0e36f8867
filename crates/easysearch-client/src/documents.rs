use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{json, Map, Value};

use easysearch_core::Result;

use crate::client::Client;
use crate::handle::{nullable, Collection, Entity, Handle};
use crate::paths;

/// One indexed record. Attributes beyond the fixed ones stay in `fields`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Document {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub external_id: String,
    #[serde(deserialize_with = "nullable")]
    pub engine_id: String,
    #[serde(deserialize_with = "nullable")]
    pub document_type_id: String,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Entity for Document {
    const KIND: &'static str = "Document";
    type Api = DocumentsApi;

    fn remote_id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone)]
pub struct DocumentsApi {
    client: Client,
    engine_id: String,
    document_type: String,
}

impl Collection for DocumentsApi {
    fn client(&self) -> &Client {
        &self.client
    }

    fn member_path(&self, document_id: &str) -> String {
        paths::document(&self.engine_id, &self.document_type, document_id)
    }
}

impl DocumentsApi {
    pub fn new(client: Client, engine_id: &str, document_type: &str) -> Self {
        Self { client, engine_id: engine_id.to_string(), document_type: document_type.to_string() }
    }

    fn collection_path(&self) -> String {
        paths::documents(&self.engine_id, &self.document_type)
    }

    pub fn all(&self) -> Result<Vec<Handle<Document>>> {
        let body = self.client.get(&self.collection_path(), &[])?;
        Handle::list_from_response(self, &body)
    }

    pub fn page(&self, page: u32, per_page: u32) -> Result<Vec<Handle<Document>>> {
        let params = [("page", page.to_string()), ("per_page", per_page.to_string())];
        let body = self.client.get(&self.collection_path(), &params)?;
        Handle::list_from_response(self, &body)
    }

    pub fn get(&self, document_id: &str) -> Result<Handle<Document>> {
        let body = self.client.get(&self.member_path(document_id), &[])?;
        Handle::from_response(self.clone(), &body)
    }

    /// `document` is `{"external_id": .., "fields": [{"name", "value", "type"}, ..]}`.
    pub fn create(&self, document: &Value) -> Result<Handle<Document>> {
        let body = self.client.post(&self.collection_path(), &json!({ "document": document }))?;
        Handle::from_response(self.clone(), &body)
    }

    pub fn create_or_update(&self, document: &Value) -> Result<Handle<Document>> {
        let path = format!("{}/create_or_update", self.collection_path());
        let body = self.client.post(&path, &json!({ "document": document }))?;
        Handle::from_response(self.clone(), &body)
    }

    /// Per-document success flags, in input order.
    pub fn bulk_create(&self, documents: &[Value]) -> Result<Vec<bool>> {
        self.bulk_post("bulk_create", json!({ "documents": documents }))
    }

    pub fn bulk_create_or_update(&self, documents: &[Value]) -> Result<Vec<bool>> {
        self.bulk_post("bulk_create_or_update", json!({ "documents": documents }))
    }

    pub fn update(&self, document_id: &str, fields: &Map<String, Value>) -> Result<Handle<Document>> {
        let path = format!("{}/update_fields", self.member_path(document_id));
        let body = self.client.put(&path, &json!({ "fields": fields }))?;
        Handle::from_response(self.clone(), &body)
    }

    /// `documents` are `{"external_id": .., "fields": {name: value, ..}}`.
    pub fn bulk_update(&self, documents: &[Value]) -> Result<Vec<bool>> {
        let path = format!("{}/bulk_update", self.collection_path());
        let body = self.client.put(&path, &json!({ "documents": documents }))?;
        Ok(serde_json::from_str(&body)?)
    }

    pub fn destroy(&self, document_id: &str) -> Result<()> {
        self.client.delete(&self.member_path(document_id))
    }

    pub fn bulk_destroy<S: AsRef<str>>(&self, document_ids: &[S]) -> Result<Vec<bool>> {
        let ids: Vec<&str> = document_ids.iter().map(|id| id.as_ref()).collect();
        self.bulk_post("bulk_destroy", json!({ "documents": ids }))
    }

    fn bulk_post(&self, action: &str, payload: Value) -> Result<Vec<bool>> {
        let path = format!("{}/{action}", self.collection_path());
        let body = self.client.post(&path, &payload)?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl Handle<Document> {
    /// Sends the changed fields, then refreshes from the server copy.
    pub fn update(&mut self, fields: &Map<String, Value>) -> Result<&Document> {
        let (api, id) = self.live_api()?;
        api.update(id, fields)?;
        self.refresh()
    }
}
