//! easysearch-core
//!
//! Transport-independent half of the client: query options, response
//! decoding, the record model, the [`traits::Transport`] seam, errors, and
//! configuration loading. HTTP and the per-entity APIs live in
//! `easysearch-client`.

pub mod config;
pub mod error;
pub mod options;
pub mod record;
pub mod results;
pub mod traits;
pub mod types;

pub use error::{Error, ErrorKind, Result};
pub use options::{Direction, FunctionalBoost, QueryOptions, QueryOptionsBuilder};
pub use record::Record;
pub use results::{Info, SearchResultSet, SearchResults, SuggestResultSet, SuggestResults};
