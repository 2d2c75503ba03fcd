use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{CategoryId, Genre};
use crate::search::params::normalize_id_list;
use crate::search::{contains_ci, FilterInput, SearchStrategy, SortDirection, SortSpec};
use crate::state::store::InMemoryRepository;

/// Structured genre filter. Present sub-criteria combine with AND; the id
/// list matches a genre attached to any of the listed categories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenreFilter {
    /// Case-insensitive substring on `name`
    pub name: Option<String>,

    /// Category membership
    pub category_ids: Option<Vec<CategoryId>>,
}

impl GenreFilter {
    fn is_empty(&self) -> bool {
        self.name.is_none() && self.category_ids.is_none()
    }
}

impl FilterInput for GenreFilter {
    fn from_raw(raw: &Value) -> Option<Self> {
        let object = raw.as_object()?;

        let filter = Self {
            name: object.get("name").and_then(String::from_raw),
            category_ids: object.get("category_ids").and_then(normalize_id_list),
        };

        if filter.is_empty() {
            None
        } else {
            Some(filter)
        }
    }
}

/// Search strategy for genres
#[derive(Debug, Clone, Copy, Default)]
pub struct GenreSearch;

impl SearchStrategy for GenreSearch {
    type Entity = Genre;
    type Filter = GenreFilter;

    fn sortable_fields(&self) -> &'static [&'static str] {
        &["name", "created_at"]
    }

    fn default_sort(&self) -> Option<SortSpec> {
        Some(SortSpec::new("created_at", SortDirection::Desc))
    }

    fn matches(&self, genre: &Genre, filter: &GenreFilter) -> bool {
        let name_ok = filter
            .name
            .as_ref()
            .is_none_or(|name| contains_ci(&genre.name, name));
        let categories_ok = filter
            .category_ids
            .as_ref()
            .is_none_or(|ids| ids.iter().any(|id| genre.category_ids.contains(id)));

        name_ok && categories_ok
    }

    fn compare(&self, a: &Genre, b: &Genre, field: &str) -> Ordering {
        match field {
            "name" => a.name.cmp(&b.name),
            "created_at" => a.created_at.cmp(&b.created_at),
            _ => Ordering::Equal,
        }
    }
}

/// In-memory genre repository
pub type GenreRepository = InMemoryRepository<GenreSearch>;
