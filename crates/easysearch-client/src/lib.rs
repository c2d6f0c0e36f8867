//! easysearch-client
//!
//! Blocking client for the hosted search API. [`Client`] owns the transport;
//! the per-entity APIs ([`EnginesApi`], [`DocumentTypesApi`], [`DocumentsApi`],
//! [`DomainsApi`]) hand out [`Handle`]s, and [`AnalyticsApi`] reads reports.
//!
//! ```no_run
//! use easysearch_client::Client;
//! use easysearch_core::config::Config;
//! use easysearch_core::QueryOptions;
//!
//! # fn main() -> easysearch_core::Result<()> {
//! let client = Client::from_config(&Config::load()?.client()?)?;
//! let engine = client.engines().get("bookstore")?;
//! let options = QueryOptions::builder().per_page(5).build();
//! for (document_type, set) in engine.search_with("dune", &options)? {
//!     println!("{document_type}: {} hits", set.info().total_result_count);
//! }
//! # Ok(())
//! # }
//! ```

pub mod analytics;
pub mod client;
pub mod document_types;
pub mod documents;
pub mod domains;
pub mod engines;
pub mod handle;
pub mod paths;
pub mod query;
pub mod transport;

pub use analytics::{AnalyticsApi, DateCount, DateRange, QueryCount};
pub use client::Client;
pub use document_types::{DocumentType, DocumentTypesApi};
pub use documents::{Document, DocumentsApi};
pub use domains::{Domain, DomainsApi};
pub use engines::{Engine, EnginesApi};
pub use handle::{Collection, Entity, Handle};
pub use query::single;
pub use transport::HttpTransport;
