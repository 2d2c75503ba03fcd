//! Shared fixtures for integration tests.

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::Rng;

use media_catalog_admin::models::{
    CastMember, CastMemberKind, Category, CategoryId, Genre, Rating, Video,
};

/// Pick a random element of a non-empty slice.
pub fn pick_random<T>(items: &[T]) -> &T {
    let index = rand::rng().random_range(0..items.len());
    &items[index]
}

/// A fixed instant plus an offset, for deterministic `created_at` ordering.
pub fn ts(offset_secs: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(offset_secs)
}

pub fn category(name: &str) -> Category {
    Category::new(name, None)
}

pub fn category_at(name: &str, created_at: DateTime<Utc>) -> Category {
    let mut category = Category::new(name, None);
    category.created_at = created_at;
    category
}

pub fn cast_member(name: &str, kind: CastMemberKind) -> CastMember {
    CastMember::new(name, kind)
}

pub fn genre(name: &str, category_ids: Vec<CategoryId>) -> Genre {
    Genre::new(name, category_ids)
}

pub fn video(title: &str) -> Video {
    Video::new(title, "synopsis", 2020, 90, Rating::R12)
}
