use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

/// Default page number when the caller sends nothing usable
pub const DEFAULT_PAGE: u64 = 1;

/// Default page size when the caller sends nothing usable
pub const DEFAULT_LIMIT: i64 = 10;

/// Product entity - represents a product stored in MongoDB
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Product title
    pub title: String,
    /// Product description
    #[serde(default)]
    pub description: String,
    /// Free-form category label (text-searchable alongside the title)
    pub category: String,
    /// Price in cents (for precision)
    pub price: i64,
    /// Current stock quantity
    pub stock: i32,
    /// Internal product code
    pub code: Option<String>,
    /// Image URLs
    #[serde(default)]
    pub thumbnails: Vec<String>,
    /// Additional descriptive fields as JSON
    #[serde(default)]
    pub metadata: serde_json::Value,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Check if the product can currently be purchased
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Price in currency units, for display only (money math stays in cents)
    pub fn display_price(&self) -> f64 {
        self.price as f64 / 100.0
    }
}

/// Catalog filter - a closed set; free-form query input never travels past
/// this boundary as a loose string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProductFilter {
    /// No filtering
    #[default]
    All,
    /// Products with stock strictly greater than zero
    InStock,
    /// Case-insensitive substring match on title OR category.
    /// The pattern is untrusted literal text, not query syntax.
    Text(String),
}

impl ProductFilter {
    /// Build a filter from the raw `query` request parameter.
    ///
    /// Mirrors the storefront's boundary policy: absent/empty means no
    /// filter, the literal `stock` selects in-stock products, anything else
    /// is a text search.
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Self::All,
            Some("stock") => Self::InStock,
            Some(text) => Self::Text(text.to_string()),
        }
    }
}

/// Sort directive for catalog listings, keyed on price
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PriceSort {
    /// Backing-store natural order (not guaranteed stable across calls)
    #[default]
    Unsorted,
    /// Cheapest first
    Asc,
    /// Most expensive first
    Desc,
}

impl PriceSort {
    /// Build a sort directive from the raw `sort` request parameter.
    ///
    /// Anything outside `asc`/`desc` (case-insensitive) normalizes to
    /// `Unsorted` rather than erroring.
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw {
            Some(s) if s.eq_ignore_ascii_case("asc") => Self::Asc,
            Some(s) if s.eq_ignore_ascii_case("desc") => Self::Desc,
            _ => Self::Unsorted,
        }
    }
}

/// Pagination and ordering options for catalog queries
#[derive(Debug, Clone, Deserialize)]
pub struct PageRequest {
    /// 1-based page number
    #[serde(default = "default_page")]
    pub page: u64,
    /// Maximum number of items per page
    #[serde(default = "default_limit")]
    pub limit: i64,
    /// Price ordering
    #[serde(default)]
    pub sort: PriceSort,
}

fn default_page() -> u64 {
    DEFAULT_PAGE
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            sort: PriceSort::default(),
        }
    }
}

impl PageRequest {
    /// Build a request from raw request parameters.
    ///
    /// Non-numeric or non-positive `page`/`limit` values fall back to the
    /// defaults; malformed pagination input is never an error.
    pub fn from_params(page: Option<&str>, limit: Option<&str>, sort: Option<&str>) -> Self {
        Self {
            page: page
                .and_then(|p| p.trim().parse::<u64>().ok())
                .filter(|p| *p >= 1)
                .unwrap_or(DEFAULT_PAGE),
            limit: limit
                .and_then(|l| l.trim().parse::<i64>().ok())
                .filter(|l| *l >= 1)
                .unwrap_or(DEFAULT_LIMIT),
            sort: PriceSort::from_query(sort),
        }
    }

    /// Return a copy with out-of-range values replaced by the defaults.
    ///
    /// Repository implementations may assume `page >= 1` and `limit >= 1`.
    pub fn normalized(&self) -> Self {
        Self {
            page: if self.page >= 1 { self.page } else { DEFAULT_PAGE },
            limit: if self.limit >= 1 { self.limit } else { DEFAULT_LIMIT },
            sort: self.sort,
        }
    }

    /// Number of documents to skip for this page
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1) * self.limit.max(1) as u64
    }
}

/// One page of catalog results plus pagination metadata
#[derive(Debug, Clone, Serialize)]
pub struct ProductPage {
    /// Items on this page (at most `limit`)
    pub items: Vec<Product>,
    /// Count of ALL items matching the filter, across every page
    pub total_items: u64,
    /// 1-based page number this result is for
    pub page: u64,
    /// Page size the result was computed with
    pub limit: i64,
    /// ceil(total_items / limit)
    pub total_pages: u64,
    pub has_prev_page: bool,
    pub has_next_page: bool,
}

impl ProductPage {
    /// Assemble a page envelope from fetched items and the full match count.
    ///
    /// A `page` beyond the last page is a valid request: it produces an empty
    /// item list with accurate totals, `has_next_page = false`, and
    /// `has_prev_page = true` whenever earlier pages exist.
    pub fn assemble(items: Vec<Product>, total_items: u64, request: &PageRequest) -> Self {
        let limit = request.limit.max(1);
        let total_pages = total_items.div_ceil(limit as u64);

        Self {
            items,
            total_items,
            page: request.page,
            limit,
            total_pages,
            has_prev_page: request.page > 1 && total_pages > 0,
            has_next_page: request.page < total_pages,
        }
    }

    /// True when the page carries no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
