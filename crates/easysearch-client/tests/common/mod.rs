#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, Once};

use serde_json::Value;

use easysearch_client::Client;
use easysearch_core::traits::Transport;
use easysearch_core::types::{Request, Response};
use easysearch_core::{Error, Result};

/// Answers with scripted responses in order and records every request.
/// Running out of script behaves like an unreachable server.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Response>>,
    requests: Mutex<Vec<Request>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push(&self, status: u16, body: impl Into<String>) {
        self.responses.lock().unwrap().push_back(Response::new(status, body));
    }

    pub fn push_json(&self, body: &Value) {
        self.push(200, body.to_string());
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> Request {
        self.requests().pop().expect("no request was sent")
    }

    pub fn last_body(&self) -> Value {
        let body = self.last().body.expect("last request had no body");
        serde_json::from_str(&body).expect("request body is JSON")
    }
}

impl Transport for MockTransport {
    fn send(&self, request: Request) -> Result<Response> {
        let (method, path) = (request.method, request.path.clone());
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| Error::Network { method, path, source: "connection refused".into() })
    }
}

pub fn client(mock: &Arc<MockTransport>) -> Client {
    init_tracing();
    Client::with_transport(mock.clone())
}

fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
