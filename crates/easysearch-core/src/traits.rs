use crate::error::Result;
use crate::types::{Request, Response};

/// Sends one request and hands back whatever the server answered.
///
/// Implementations return `Err(Error::Network { .. })` only when no response
/// was received. Every received status, 2xx or not, comes back as a
/// [`Response`]; status policy belongs to the caller.
pub trait Transport: Send + Sync {
    fn send(&self, request: Request) -> Result<Response>;
}
