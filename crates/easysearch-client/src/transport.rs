//! Blocking HTTP transport on `reqwest`.

use std::time::Duration;

use reqwest::blocking::Client as HttpClient;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Url;
use tracing::debug;

use easysearch_core::config::ClientConfig;
use easysearch_core::traits::Transport;
use easysearch_core::types::{Method, Request, Response};
use easysearch_core::{Error, Result};

pub const DEFAULT_USER_AGENT: &str = concat!("easysearch-rust/", env!("CARGO_PKG_VERSION"));

/// Sends requests to `<base_url><path>.json?auth_token=<key>&<params>`.
pub struct HttpTransport {
    http: HttpClient,
    base_url: String,
    api_key: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let user_agent = config.user_agent.clone().unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());
        let mut builder = HttpClient::builder().user_agent(user_agent);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| Error::InvalidConfig(format!("building http client: {e}")))?;
        Ok(Self { http, base_url: config.base_url(), api_key: config.api_key.clone() })
    }

    pub fn url(&self, path: &str, params: &[(String, String)]) -> Result<Url> {
        let raw = format!("{}{}.json", self.base_url, path);
        let mut url = Url::parse(&raw).map_err(|e| Error::InvalidConfig(format!("'{raw}' is not a valid URL: {e}")))?;
        url.query_pairs_mut()
            .append_pair("auth_token", &self.api_key)
            .extend_pairs(params.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        Ok(url)
    }
}

fn http_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: Request) -> Result<Response> {
        let url = self.url(&request.path, &request.params)?;
        let mut builder = self.http.request(http_method(request.method), url);
        if let Some(body) = request.body {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .header(ACCEPT, "application/json")
                .body(body);
        }

        let network = |e: reqwest::Error| Error::Network {
            method: request.method,
            path: request.path.clone(),
            source: Box::new(e),
        };
        let response = builder.send().map_err(network)?;
        let status = response.status().as_u16();
        let body = response.text().map_err(network)?;
        debug!(method = %request.method, path = %request.path, status, "request completed");
        Ok(Response { status, body })
    }
}
