use serde::{Deserialize, Serialize};

use super::ValidatorRecord;

/// Pagination metadata as reported by the rewards API. Absent fields read as
/// zero, which the fetcher treats as "no data".
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub page_size: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageResponse {
    #[serde(default)]
    pub pagination: Pagination,
    #[serde(default)]
    pub data: Vec<ValidatorRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageQuery {
    pub scope: String,
    pub current_page: u32,
    pub page_size: u32,
}
