use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{entity_id, CategoryId, Entity};

entity_id!(
    /// Identifier for a genre
    GenreId
);

/// A genre, linked to the categories it appears under
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    /// Unique identifier
    pub id: GenreId,

    /// Display name
    pub name: String,

    /// Categories this genre is attached to
    pub category_ids: Vec<CategoryId>,

    /// Inactive genres stay cataloged but are hidden from listings
    pub is_active: bool,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Genre {
    /// Create a new active genre
    pub fn new(name: impl Into<String>, category_ids: Vec<CategoryId>) -> Self {
        Self {
            id: GenreId::new(),
            name: name.into(),
            category_ids,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    /// Attach a category, ignoring duplicates
    pub fn add_category(&mut self, category_id: CategoryId) {
        if !self.category_ids.contains(&category_id) {
            self.category_ids.push(category_id);
        }
    }

    /// Detach a category if present
    pub fn remove_category(&mut self, category_id: &CategoryId) {
        self.category_ids.retain(|id| id != category_id);
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}

impl Entity for Genre {
    type Id = GenreId;

    const KIND: &'static str = "Genre";

    fn id(&self) -> &GenreId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_creation() {
        let category_id = CategoryId::new();
        let genre = Genre::new("Drama", vec![category_id]);

        assert_eq!(genre.name, "Drama");
        assert_eq!(genre.category_ids, vec![category_id]);
        assert!(genre.is_active);
    }

    #[test]
    fn test_category_links() {
        let mut genre = Genre::new("Horror", Vec::new());
        let category_id = CategoryId::new();

        genre.add_category(category_id);
        genre.add_category(category_id); // duplicate is ignored
        assert_eq!(genre.category_ids.len(), 1);

        genre.remove_category(&category_id);
        assert!(genre.category_ids.is_empty());
    }
}
