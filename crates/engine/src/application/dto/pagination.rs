//! Pagination envelope shared by list responses.

use serde::{Deserialize, Serialize};

/// Page metadata echoed back alongside list results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page: u32,
    pub limit: usize,
    pub total: usize,
    pub total_pages: usize,
}

impl PageInfo {
    /// `total_pages` is `ceil(total / limit)`, zero when `limit` is zero.
    pub fn new(page: u32, limit: usize, total: usize) -> Self {
        let total_pages = if limit == 0 { 0 } else { total.div_ceil(limit) };
        Self {
            page,
            limit,
            total,
            total_pages,
        }
    }
}
