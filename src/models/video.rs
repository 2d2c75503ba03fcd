use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::{entity_id, CastMemberId, CategoryId, Entity, GenreId};

entity_id!(
    /// Identifier for a video
    VideoId
);

/// Audience rating, following the Brazilian classification scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display)]
pub enum Rating {
    /// Free for all audiences
    #[serde(rename = "L")]
    #[strum(serialize = "L")]
    L,
    #[serde(rename = "10")]
    #[strum(serialize = "10")]
    R10,
    #[serde(rename = "12")]
    #[strum(serialize = "12")]
    R12,
    #[serde(rename = "14")]
    #[strum(serialize = "14")]
    R14,
    #[serde(rename = "16")]
    #[strum(serialize = "16")]
    R16,
    #[serde(rename = "18")]
    #[strum(serialize = "18")]
    R18,
}

/// A video in the catalog, linked to categories, genres and cast members
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    /// Unique identifier
    pub id: VideoId,

    /// Title
    pub title: String,

    /// Synopsis
    pub description: String,

    /// Release year
    pub year_launched: i32,

    /// Duration in minutes
    pub duration: u32,

    /// Audience rating
    pub rating: Rating,

    /// Whether the video is open for early access
    pub is_opened: bool,

    /// Whether the video is published in the catalog
    pub is_published: bool,

    /// Categories this video belongs to
    pub category_ids: Vec<CategoryId>,

    /// Genres this video belongs to
    pub genre_ids: Vec<GenreId>,

    /// Cast members attached to this video
    pub cast_member_ids: Vec<CastMemberId>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Video {
    /// Create a new unpublished video
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        year_launched: i32,
        duration: u32,
        rating: Rating,
    ) -> Self {
        Self {
            id: VideoId::new(),
            title: title.into(),
            description: description.into(),
            year_launched,
            duration,
            rating,
            is_opened: false,
            is_published: false,
            category_ids: Vec::new(),
            genre_ids: Vec::new(),
            cast_member_ids: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Mark the video as published
    pub fn publish(&mut self) {
        self.is_published = true;
    }

    /// Attach a category, ignoring duplicates
    pub fn add_category(&mut self, category_id: CategoryId) {
        if !self.category_ids.contains(&category_id) {
            self.category_ids.push(category_id);
        }
    }

    /// Attach a genre, ignoring duplicates
    pub fn add_genre(&mut self, genre_id: GenreId) {
        if !self.genre_ids.contains(&genre_id) {
            self.genre_ids.push(genre_id);
        }
    }

    /// Attach a cast member, ignoring duplicates
    pub fn add_cast_member(&mut self, cast_member_id: CastMemberId) {
        if !self.cast_member_ids.contains(&cast_member_id) {
            self.cast_member_ids.push(cast_member_id);
        }
    }
}

impl Entity for Video {
    type Id = VideoId;

    const KIND: &'static str = "Video";

    fn id(&self) -> &VideoId {
        &self.id
    }
}
