//! The generic filter → sort → paginate pipeline.
//!
//! Entity-specific behavior is injected through a [`SearchStrategy`]: which
//! fields are valid sort targets, how two records compare on a field, what
//! a filter matches, and the fallback sort applied when a request names no
//! usable sort. The pipeline itself is a pure function of a store snapshot
//! and a normalized parameter set.

use std::cmp::Ordering;

use crate::search::params::{SearchParams, SortDirection};
use crate::search::result::SearchResult;

/// Explicit default-sort configuration for an entity's strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: &'static str,
    pub direction: SortDirection,
}

impl SortSpec {
    pub const fn new(field: &'static str, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}

/// Entity-specific search behavior injected into the generic pipeline.
pub trait SearchStrategy: Send + Sync {
    type Entity: Clone + Send + Sync;
    type Filter: Send + Sync;

    /// Field names accepted as sort targets.
    fn sortable_fields(&self) -> &'static [&'static str];

    /// Fallback sort when the request names no valid sort field.
    fn default_sort(&self) -> Option<SortSpec> {
        None
    }

    /// Filter predicate for one record.
    fn matches(&self, entity: &Self::Entity, filter: &Self::Filter) -> bool;

    /// Natural ordering of two records on a sortable field.
    ///
    /// String fields use native `str` ordering; this is case-sensitive even
    /// though filtering is not, preserving the original system's behavior.
    fn compare(&self, a: &Self::Entity, b: &Self::Entity, field: &str) -> Ordering;
}

/// Three-stage query over an in-memory snapshot. Filter always precedes
/// sort, sort always precedes pagination.
pub struct SearchPipeline<'a, S> {
    strategy: &'a S,
}

impl<'a, S: SearchStrategy> SearchPipeline<'a, S> {
    pub fn new(strategy: &'a S) -> Self {
        Self { strategy }
    }

    /// Run the full pipeline against a snapshot of the store.
    pub fn run(
        &self,
        items: Vec<S::Entity>,
        params: &SearchParams<S::Filter>,
    ) -> SearchResult<S::Entity> {
        let filtered = self.apply_filter(items, params.filter());
        let total = filtered.len() as u64;
        let sorted = self.apply_sort(filtered, params);
        let page_items = paginate(sorted, params.page(), params.per_page());

        SearchResult::new(page_items, total, params.page(), params.per_page())
    }

    /// Stage 1: an absent filter passes the snapshot through untouched and
    /// never invokes the predicate.
    fn apply_filter(&self, items: Vec<S::Entity>, filter: Option<&S::Filter>) -> Vec<S::Entity> {
        match filter {
            None => items,
            Some(filter) => items
                .into_iter()
                .filter(|entity| self.strategy.matches(entity, filter))
                .collect(),
        }
    }

    /// Stage 2: stable sort on the resolved field; records comparing equal
    /// keep their insertion order.
    fn apply_sort(
        &self,
        mut items: Vec<S::Entity>,
        params: &SearchParams<S::Filter>,
    ) -> Vec<S::Entity> {
        let Some((field, direction)) = self.resolve_sort(params) else {
            return items;
        };

        items.sort_by(|a, b| {
            let ordering = self.strategy.compare(a, b, field);
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
        items
    }

    /// A requested field must be declared sortable; otherwise the
    /// strategy's configured default applies, or no sorting at all.
    fn resolve_sort<'p>(
        &self,
        params: &'p SearchParams<S::Filter>,
    ) -> Option<(&'p str, SortDirection)> {
        if let Some(field) = params.sort() {
            if self.strategy.sortable_fields().contains(&field) {
                let direction = params.sort_direction().unwrap_or(SortDirection::Asc);
                return Some((field, direction));
            }
        }

        self.strategy
            .default_sort()
            .map(|spec| (spec.field, spec.direction))
    }
}

/// Stage 3: the slice `[(page - 1) * per_page, + per_page)`. Pages past the
/// end yield an empty sequence, not an error.
fn paginate<T>(items: Vec<T>, page: u32, per_page: u32) -> Vec<T> {
    let start = (page as usize).saturating_sub(1) * per_page as usize;
    items.into_iter().skip(start).take(per_page as usize).collect()
}

/// Case-insensitive substring containment, the default convention for
/// string filters.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
