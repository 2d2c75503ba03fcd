use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::{entity_id, Entity};

entity_id!(
    /// Identifier for a cast member
    CastMemberId
);

/// Role a cast member plays in a production
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CastMemberKind {
    Director,
    Actor,
}

/// A person attached to videos (director or actor)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastMember {
    /// Unique identifier
    pub id: CastMemberId,

    /// Full name
    pub name: String,

    /// Director or actor
    pub kind: CastMemberKind,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl CastMember {
    /// Create a new cast member
    pub fn new(name: impl Into<String>, kind: CastMemberKind) -> Self {
        Self {
            id: CastMemberId::new(),
            name: name.into(),
            kind,
            created_at: Utc::now(),
        }
    }

    /// Change the display name
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl Entity for CastMember {
    type Id = CastMemberId;

    const KIND: &'static str = "CastMember";

    fn id(&self) -> &CastMemberId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_cast_member_creation() {
        let member = CastMember::new("Mary Doe", CastMemberKind::Director);

        assert_eq!(member.name, "Mary Doe");
        assert_eq!(member.kind, CastMemberKind::Director);
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!(
            CastMemberKind::from_str("actor").unwrap(),
            CastMemberKind::Actor
        );
        assert_eq!(
            CastMemberKind::from_str("DIRECTOR").unwrap(),
            CastMemberKind::Director
        );
        assert!(CastMemberKind::from_str("producer").is_err());
    }
}
