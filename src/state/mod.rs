//! In-memory entity stores.
//!
//! Each entity kind gets an [`InMemoryRepository`] specialized by a search
//! strategy: identity-keyed CRUD over an ordered collection, plus the
//! filter → sort → paginate query of [`crate::search`].

pub mod cast_member;
pub mod category;
pub mod factory;
pub mod genre;
pub mod store;
pub mod video;

pub use cast_member::{CastMemberFilter, CastMemberRepository, CastMemberSearch};
pub use category::{CategoryRepository, CategorySearch};
pub use factory::{
    create_cast_member_repository, create_category_repository, create_genre_repository,
    create_video_repository,
};
pub use genre::{GenreFilter, GenreRepository, GenreSearch};
pub use store::InMemoryRepository;
pub use video::{VideoFilter, VideoRepository, VideoSearch};

use crate::error::Result;
use crate::models::Entity;
use crate::search::{SearchParams, SearchResult};
use async_trait::async_trait;

/// Identity-keyed CRUD over one entity kind.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Append a record. The store trusts the caller not to reuse an
    /// identifier.
    async fn insert(&self, entity: T) -> Result<()>;

    /// Append records preserving input order.
    async fn bulk_insert(&self, entities: Vec<T>) -> Result<()>;

    /// Replace the record with the same identifier, keeping its position.
    async fn update(&self, entity: T) -> Result<()>;

    /// Remove the record with this identifier.
    async fn delete(&self, id: &T::Id) -> Result<()>;

    /// Lookup by identifier. Absence is a normal outcome, not an error.
    async fn find_by_id(&self, id: &T::Id) -> Result<Option<T>>;

    /// The full ordered collection, unfiltered.
    async fn find_all(&self) -> Result<Vec<T>>;
}

/// A repository that also answers filter → sort → paginate queries.
#[async_trait]
pub trait SearchableRepository<T: Entity, F: Send + Sync>: Repository<T> {
    /// Run one search against the store's current contents.
    async fn search(&self, params: &SearchParams<F>) -> Result<SearchResult<T>>;
}
