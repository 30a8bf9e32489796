use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_PER_PAGE: u64 = 20;
pub const MAX_PER_PAGE: u64 = 100;

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Success envelope: `{ "data": ..., "meta": ... }`.
///
/// `meta` is only present on paginated responses.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct DataDto<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMetaDto>,
}

impl<T> DataDto<T> {
    pub fn new(data: T) -> Self {
        Self { data, meta: None }
    }

    pub fn paginated(data: T, meta: PageMetaDto) -> Self {
        Self {
            data,
            meta: Some(meta),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, ToSchema)]
pub struct PageMetaDto {
    pub total: u64,
    /// Zero-based page index.
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// `?page=&per_page=` query shared by every paginated listing.
#[derive(Deserialize, Debug, Clone, Copy, IntoParams)]
pub struct PaginationQuery {
    /// Zero-based page index, defaults to 0.
    #[serde(default)]
    pub page: u64,
    /// Page size, defaults to 20 and is clamped to 1..=100.
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

impl PaginationQuery {
    pub fn new(page: u64, per_page: u64) -> Self {
        Self { page, per_page }
    }

    /// Returns `(page, per_page)` with the page size clamped to the allowed range.
    pub fn clamped(self) -> (u64, u64) {
        (self.page, self.per_page.clamp(1, MAX_PER_PAGE))
    }
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self::new(0, DEFAULT_PER_PAGE)
    }
}

pub fn default_per_page() -> u64 {
    DEFAULT_PER_PAGE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_page_size() {
        assert_eq!(PaginationQuery::new(2, 0).clamped(), (2, 1));
        assert_eq!(PaginationQuery::new(0, 500).clamped(), (0, MAX_PER_PAGE));
        assert_eq!(PaginationQuery::default().clamped(), (0, 20));
    }

    #[test]
    fn omits_meta_for_single_resources() {
        let body = serde_json::to_value(DataDto::new(5)).unwrap();
        assert_eq!(body, serde_json::json!({ "data": 5 }));
    }
}
