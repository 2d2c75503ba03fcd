//! Media-catalog administrative backend core.
//!
//! In-memory searchable repositories for the catalog's entity kinds
//! (categories, cast members, genres, videos), built around a generic
//! three-stage query pipeline:
//!
//! - **Entity store** ([`state`]): ordered, identity-keyed CRUD
//! - **Search pipeline** ([`search::pipeline`]): filter → sort → paginate
//! - **Parameter normalizer** ([`search::params`]): raw, possibly malformed
//!   input becomes a safe, bounded parameter set
//!
//! # Example
//!
//! ```
//! use media_catalog_admin::models::Category;
//! use media_catalog_admin::search::{SearchParams, SearchRequest};
//! use media_catalog_admin::state::{
//!     create_category_repository, Repository, SearchableRepository,
//! };
//! use serde_json::json;
//!
//! # #[tokio::main]
//! # async fn main() -> media_catalog_admin::Result<()> {
//! let repo = create_category_repository();
//! repo.insert(Category::new("Movies", None)).await?;
//! repo.insert(Category::new("Series", None)).await?;
//!
//! let request = SearchRequest::new()
//!     .with_filter(json!("mov"))
//!     .with_page(json!("1"));
//! let params: SearchParams<String> = SearchParams::from_request(&request);
//!
//! let result = repo.search(&params).await?;
//! assert_eq!(result.total(), 1);
//! assert_eq!(result.items()[0].name, "Movies");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod search;
pub mod state;

pub use error::{AppError, Result};
