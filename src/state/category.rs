use std::cmp::Ordering;

use crate::models::Category;
use crate::search::{contains_ci, SearchStrategy, SortDirection, SortSpec};
use crate::state::store::InMemoryRepository;

/// Search strategy for categories: plain case-insensitive substring filter
/// on `name`, newest-first fallback sort.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategorySearch;

impl SearchStrategy for CategorySearch {
    type Entity = Category;
    type Filter = String;

    fn sortable_fields(&self) -> &'static [&'static str] {
        &["name", "created_at"]
    }

    fn default_sort(&self) -> Option<SortSpec> {
        Some(SortSpec::new("created_at", SortDirection::Desc))
    }

    fn matches(&self, category: &Category, filter: &String) -> bool {
        contains_ci(&category.name, filter)
    }

    fn compare(&self, a: &Category, b: &Category, field: &str) -> Ordering {
        match field {
            "name" => a.name.cmp(&b.name),
            "created_at" => a.created_at.cmp(&b.created_at),
            _ => Ordering::Equal,
        }
    }
}

/// In-memory category repository
pub type CategoryRepository = InMemoryRepository<CategorySearch>;
