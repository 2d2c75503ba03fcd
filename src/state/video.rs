use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{CastMemberId, CategoryId, GenreId, Video};
use crate::search::params::normalize_id_list;
use crate::search::{contains_ci, FilterInput, SearchStrategy, SortDirection, SortSpec};
use crate::state::store::InMemoryRepository;

/// Structured video filter. Present sub-criteria combine with AND; each id
/// list matches a video attached to any of the listed ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoFilter {
    /// Case-insensitive substring on `title`
    pub title: Option<String>,

    /// Category membership
    pub category_ids: Option<Vec<CategoryId>>,

    /// Genre membership
    pub genre_ids: Option<Vec<GenreId>>,

    /// Cast-member membership
    pub cast_member_ids: Option<Vec<CastMemberId>>,
}

impl VideoFilter {
    fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.category_ids.is_none()
            && self.genre_ids.is_none()
            && self.cast_member_ids.is_none()
    }
}

impl FilterInput for VideoFilter {
    fn from_raw(raw: &Value) -> Option<Self> {
        let object = raw.as_object()?;

        let filter = Self {
            title: object.get("title").and_then(String::from_raw),
            category_ids: object.get("category_ids").and_then(normalize_id_list),
            genre_ids: object.get("genre_ids").and_then(normalize_id_list),
            cast_member_ids: object.get("cast_member_ids").and_then(normalize_id_list),
        };

        if filter.is_empty() {
            None
        } else {
            Some(filter)
        }
    }
}

/// Search strategy for videos
#[derive(Debug, Clone, Copy, Default)]
pub struct VideoSearch;

impl SearchStrategy for VideoSearch {
    type Entity = Video;
    type Filter = VideoFilter;

    fn sortable_fields(&self) -> &'static [&'static str] {
        &["title", "created_at"]
    }

    fn default_sort(&self) -> Option<SortSpec> {
        Some(SortSpec::new("created_at", SortDirection::Desc))
    }

    fn matches(&self, video: &Video, filter: &VideoFilter) -> bool {
        let title_ok = filter
            .title
            .as_ref()
            .is_none_or(|title| contains_ci(&video.title, title));
        let categories_ok = filter
            .category_ids
            .as_ref()
            .is_none_or(|ids| ids.iter().any(|id| video.category_ids.contains(id)));
        let genres_ok = filter
            .genre_ids
            .as_ref()
            .is_none_or(|ids| ids.iter().any(|id| video.genre_ids.contains(id)));
        let cast_ok = filter
            .cast_member_ids
            .as_ref()
            .is_none_or(|ids| ids.iter().any(|id| video.cast_member_ids.contains(id)));

        title_ok && categories_ok && genres_ok && cast_ok
    }

    fn compare(&self, a: &Video, b: &Video, field: &str) -> Ordering {
        match field {
            "title" => a.title.cmp(&b.title),
            "created_at" => a.created_at.cmp(&b.created_at),
            _ => Ordering::Equal,
        }
    }
}

/// In-memory video repository
pub type VideoRepository = InMemoryRepository<VideoSearch>;
