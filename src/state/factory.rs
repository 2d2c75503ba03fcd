//! Repository constructors.

use crate::state::cast_member::{CastMemberRepository, CastMemberSearch};
use crate::state::category::{CategoryRepository, CategorySearch};
use crate::state::genre::{GenreRepository, GenreSearch};
use crate::state::store::InMemoryRepository;
use crate::state::video::{VideoRepository, VideoSearch};

/// Create an in-memory category repository
pub fn create_category_repository() -> CategoryRepository {
    InMemoryRepository::new(CategorySearch)
}

/// Create an in-memory cast-member repository
pub fn create_cast_member_repository() -> CastMemberRepository {
    InMemoryRepository::new(CastMemberSearch)
}

/// Create an in-memory genre repository
pub fn create_genre_repository() -> GenreRepository {
    InMemoryRepository::new(GenreSearch)
}

/// Create an in-memory video repository
pub fn create_video_repository() -> VideoRepository {
    InMemoryRepository::new(VideoSearch)
}
