//! Paged subgraph query client
//!
//! Builds GraphQL entity queries from a typed description and drains them
//! page by page:
//! - `PagedQuery` / `Where`: the query description and its filters
//! - `SubgraphQuery`: the executor seam (one page request at a time)
//! - `HttpSubgraph`: GraphQL-over-HTTP executor backed by `reqwest`
//! - `fetch_all`: the pagination loop, tolerant of truncated result sets

pub mod client;
pub mod error;
pub mod fetch;
pub mod query;

// Re-export commonly used types
pub use client::{HttpSubgraph, SubgraphQuery};
pub use error::SubgraphError;
pub use fetch::fetch_all;
pub use query::{PagedQuery, Where, PAGE_SIZE};
