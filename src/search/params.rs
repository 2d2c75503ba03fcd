//! Search parameter normalization.
//!
//! Raw input arrives as a [`SearchRequest`] whose fields are arbitrary JSON
//! values, the shape in which UI or API boundaries hand them over. The
//! normalizer maps every possible input to a safe, bounded
//! [`SearchParams`] value; it never fails.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumString};

/// Page used when input is missing or malformed.
pub const DEFAULT_PAGE: u32 = 1;

/// Per-page used when input is missing or malformed and no configured
/// default applies.
pub const DEFAULT_PER_PAGE: u32 = 15;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// A filter shape that can be normalized from raw request input.
pub trait FilterInput: Sized {
    /// Normalize a raw value. `None` when the value is absent, empty or
    /// mis-shaped; a structured filter with every sub-criterion empty is
    /// `None` as a whole.
    fn from_raw(raw: &Value) -> Option<Self>;
}

/// Plain substring filter used by simple entities.
impl FilterInput for String {
    fn from_raw(raw: &Value) -> Option<Self> {
        normalize_string(raw)
    }
}

/// Scalar-to-string coercion shared by `sort` and plain string filters.
/// Empty strings, null and composite values normalize to `None`.
pub(crate) fn normalize_string(raw: &Value) -> Option<String> {
    match raw {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Normalize a raw id-list criterion: a single id string or an array of id
/// strings. Unparseable entries are dropped; an empty result is absent.
pub(crate) fn normalize_id_list<I: FromStr>(raw: &Value) -> Option<Vec<I>> {
    let ids: Vec<I> = match raw {
        Value::String(s) => s.parse().ok().into_iter().collect(),
        Value::Array(values) => values
            .iter()
            .filter_map(|value| value.as_str())
            .filter_map(|s| s.parse().ok())
            .collect(),
        _ => Vec::new(),
    };
    if ids.is_empty() {
        None
    } else {
        Some(ids)
    }
}

/// Raw, possibly malformed search input as it arrives from a boundary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub page: Option<Value>,

    #[serde(default)]
    pub per_page: Option<Value>,

    #[serde(default)]
    pub sort: Option<Value>,

    #[serde(default)]
    pub sort_direction: Option<Value>,

    #[serde(default)]
    pub filter: Option<Value>,
}

impl SearchRequest {
    /// Create an empty request (normalizes to all defaults)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the raw page value
    pub fn with_page(mut self, page: impl Into<Value>) -> Self {
        self.page = Some(page.into());
        self
    }

    /// Set the raw per-page value
    pub fn with_per_page(mut self, per_page: impl Into<Value>) -> Self {
        self.per_page = Some(per_page.into());
        self
    }

    /// Set the raw sort field
    pub fn with_sort(mut self, sort: impl Into<Value>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Set the raw sort direction
    pub fn with_sort_direction(mut self, direction: impl Into<Value>) -> Self {
        self.sort_direction = Some(direction.into());
        self
    }

    /// Set the raw filter value
    pub fn with_filter(mut self, filter: impl Into<Value>) -> Self {
        self.filter = Some(filter.into());
        self
    }
}

/// Canonical, bounded search parameters.
///
/// Construct through [`SearchParams::from_request`]; every field is already
/// normalized and re-normalization yields the same values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchParams<F = String> {
    page: u32,
    per_page: u32,
    sort: Option<String>,
    sort_direction: Option<SortDirection>,
    filter: Option<F>,
}

impl<F> Default for SearchParams<F> {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            sort: None,
            sort_direction: None,
            filter: None,
        }
    }
}

impl<F: FilterInput> SearchParams<F> {
    /// Parameters with all defaults: page 1, 15 per page, no sort, no filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize raw input with the built-in per-page default.
    pub fn from_request(request: &SearchRequest) -> Self {
        Self::from_request_with(request, DEFAULT_PER_PAGE)
    }

    /// Normalize raw input; a missing or malformed `per_page` resets to
    /// `default_per_page`.
    pub fn from_request_with(request: &SearchRequest, default_per_page: u32) -> Self {
        Self {
            per_page: default_per_page,
            ..Self::default()
        }
        .update(request)
    }

    /// Re-normalize against the current values. The JSON boolean `true` in
    /// `per_page` is the "keep previous per-page" sentinel: it preserves
    /// the current value instead of being coerced.
    pub fn update(&self, request: &SearchRequest) -> Self {
        let sort = normalize_sort(request.sort.as_ref());
        let sort_direction = normalize_direction(request.sort_direction.as_ref(), sort.as_deref());

        Self {
            page: normalize_page(request.page.as_ref()),
            per_page: normalize_per_page(request.per_page.as_ref(), self.per_page),
            sort,
            sort_direction,
            filter: request.filter.as_ref().and_then(F::from_raw),
        }
    }
}

impl<F> SearchParams<F> {
    /// Typed page setter for in-process callers; zero is clamped to 1.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = if page == 0 { DEFAULT_PAGE } else { page };
        self
    }

    /// Typed per-page setter; zero is clamped to the default.
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = if per_page == 0 {
            DEFAULT_PER_PAGE
        } else {
            per_page
        };
        self
    }

    /// Typed sort setter; an empty field name clears the sort.
    pub fn with_sort(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        let field = field.into();
        if field.is_empty() {
            self.sort = None;
            self.sort_direction = None;
        } else {
            self.sort = Some(field);
            self.sort_direction = Some(direction);
        }
        self
    }

    /// Typed filter setter. The value is taken as-is; raw boundary input
    /// goes through [`SearchParams::from_request`] instead.
    pub fn with_filter(mut self, filter: F) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    pub fn sort_direction(&self) -> Option<SortDirection> {
        self.sort_direction
    }

    pub fn filter(&self) -> Option<&F> {
        self.filter.as_ref()
    }
}

impl<F: Serialize> SearchParams<F> {
    /// Project back to raw-request form. Round-trips through
    /// [`SearchParams::from_request`] unchanged.
    pub fn to_request(&self) -> SearchRequest {
        SearchRequest {
            page: Some(Value::from(self.page)),
            per_page: Some(Value::from(self.per_page)),
            sort: self.sort.clone().map(Value::String),
            sort_direction: self
                .sort_direction
                .map(|direction| Value::String(direction.to_string())),
            filter: self
                .filter
                .as_ref()
                .and_then(|filter| serde_json::to_value(filter).ok()),
        }
    }
}

/// Coerce a raw value to a positive integer: positive ints, integral
/// floats and numeric strings pass; everything else is rejected.
fn coerce_positive(raw: &Value) -> Option<u32> {
    match raw {
        Value::Number(n) => {
            if let Some(i) = n.as_u64() {
                (1..=u64::from(u32::MAX)).contains(&i).then(|| i as u32)
            } else if let Some(f) = n.as_f64() {
                (f.fract() == 0.0 && f >= 1.0 && f <= f64::from(u32::MAX)).then(|| f as u32)
            } else {
                None
            }
        }
        Value::String(s) => s.trim().parse::<u32>().ok().filter(|v| *v >= 1),
        _ => None,
    }
}

fn normalize_page(raw: Option<&Value>) -> u32 {
    raw.and_then(coerce_positive).unwrap_or(DEFAULT_PAGE)
}

/// `current` is the configured default on fresh construction and the
/// previous value during [`SearchParams::update`].
fn normalize_per_page(raw: Option<&Value>, current: u32) -> u32 {
    match raw {
        // keep-previous sentinel
        Some(Value::Bool(true)) => current,
        Some(value) => coerce_positive(value).unwrap_or(current),
        None => current,
    }
}

fn normalize_sort(raw: Option<&Value>) -> Option<String> {
    raw.and_then(normalize_string)
}

/// Direction is meaningless without a sort key and forced to `None`;
/// otherwise anything that is not `asc`/`desc` (any case) falls back to asc.
fn normalize_direction(raw: Option<&Value>, sort: Option<&str>) -> Option<SortDirection> {
    sort?;
    let direction = raw
        .and_then(normalize_string)
        .and_then(|s| SortDirection::from_str(&s).ok())
        .unwrap_or(SortDirection::Asc);
    Some(direction)
}
