use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{entity_id, Entity};

entity_id!(
    /// Identifier for a category
    CategoryId
);

/// A content category (e.g. "Movies", "Documentaries")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Display name
    pub name: String,

    /// Optional long-form description
    pub description: Option<String>,

    /// Inactive categories stay cataloged but are hidden from listings
    pub is_active: bool,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// Create a new active category
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            description,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    /// Change the display name
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}

impl Entity for Category {
    type Id = CategoryId;

    const KIND: &'static str = "Category";

    fn id(&self) -> &CategoryId {
        &self.id
    }
}
