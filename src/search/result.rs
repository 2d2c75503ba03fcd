use serde::Serialize;

/// Immutable result of one search invocation: the requested page of records
/// plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult<T> {
    items: Vec<T>,
    total: u64,
    current_page: u32,
    per_page: u32,
    last_page: u32,
}

impl<T> SearchResult<T> {
    /// Assemble a result page. `total` is the filtered, pre-pagination
    /// count; `last_page` is derived as `ceil(total / per_page)`.
    pub fn new(items: Vec<T>, total: u64, current_page: u32, per_page: u32) -> Self {
        let last_page = if per_page == 0 {
            0
        } else {
            total.div_ceil(u64::from(per_page)) as u32
        };

        Self {
            items,
            total,
            current_page,
            per_page,
            last_page,
        }
    }

    /// Records on the requested page, at most `per_page` of them
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the result, keeping only the records
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Count of records matching the filter before pagination
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn last_page(&self) -> u32 {
        self.last_page
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_page_derivation() {
        let result = SearchResult::new(vec![1, 2, 3], 16, 1, 15);
        assert_eq!(result.last_page(), 2);

        let exact = SearchResult::new(vec![1], 30, 1, 15);
        assert_eq!(exact.last_page(), 2);

        let empty: SearchResult<i32> = SearchResult::new(Vec::new(), 0, 1, 15);
        assert_eq!(empty.last_page(), 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_echoes_request_values() {
        let result = SearchResult::new(vec!["a"], 1, 3, 7);
        assert_eq!(result.current_page(), 3);
        assert_eq!(result.per_page(), 7);
        assert_eq!(result.total(), 1);
        assert_eq!(result.items(), &["a"]);
    }
}
