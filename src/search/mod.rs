//! Generic searchable-repository query engine.
//!
//! Three cooperating pieces:
//!
//! - **Normalizer** ([`params`]): raw, possibly malformed pagination/sort
//!   input becomes a canonical [`SearchParams`] value. Every input maps to
//!   some valid output.
//! - **Pipeline** ([`pipeline`]): filter → sort → paginate over a store
//!   snapshot, generic over entity kind via [`SearchStrategy`].
//! - **Result** ([`result`]): the page of records plus pagination metadata.

pub mod params;
pub mod pipeline;
pub mod result;

pub use params::{
    FilterInput, SearchParams, SearchRequest, SortDirection, DEFAULT_PAGE, DEFAULT_PER_PAGE,
};
pub use pipeline::{contains_ci, SearchPipeline, SearchStrategy, SortSpec};
pub use result::SearchResult;
