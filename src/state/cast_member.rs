use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{CastMember, CastMemberKind};
use crate::search::{contains_ci, FilterInput, SearchStrategy, SortDirection, SortSpec};
use crate::state::store::InMemoryRepository;

/// Structured cast-member filter. Present sub-criteria combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CastMemberFilter {
    /// Case-insensitive substring on `name`
    pub name: Option<String>,

    /// Exact kind match
    pub kind: Option<CastMemberKind>,
}

impl CastMemberFilter {
    fn is_empty(&self) -> bool {
        self.name.is_none() && self.kind.is_none()
    }
}

impl FilterInput for CastMemberFilter {
    fn from_raw(raw: &Value) -> Option<Self> {
        let object = raw.as_object()?;

        let filter = Self {
            name: object.get("name").and_then(String::from_raw),
            kind: object
                .get("kind")
                .and_then(Value::as_str)
                .and_then(|s| CastMemberKind::from_str(s).ok()),
        };

        if filter.is_empty() {
            None
        } else {
            Some(filter)
        }
    }
}

/// Search strategy for cast members
#[derive(Debug, Clone, Copy, Default)]
pub struct CastMemberSearch;

impl SearchStrategy for CastMemberSearch {
    type Entity = CastMember;
    type Filter = CastMemberFilter;

    fn sortable_fields(&self) -> &'static [&'static str] {
        &["name", "created_at"]
    }

    fn default_sort(&self) -> Option<SortSpec> {
        Some(SortSpec::new("created_at", SortDirection::Desc))
    }

    fn matches(&self, member: &CastMember, filter: &CastMemberFilter) -> bool {
        let name_ok = filter
            .name
            .as_ref()
            .is_none_or(|name| contains_ci(&member.name, name));
        let kind_ok = filter.kind.is_none_or(|kind| member.kind == kind);

        name_ok && kind_ok
    }

    fn compare(&self, a: &CastMember, b: &CastMember, field: &str) -> Ordering {
        match field {
            "name" => a.name.cmp(&b.name),
            "created_at" => a.created_at.cmp(&b.created_at),
            _ => Ordering::Equal,
        }
    }
}

/// In-memory cast-member repository
pub type CastMemberRepository = InMemoryRepository<CastMemberSearch>;
