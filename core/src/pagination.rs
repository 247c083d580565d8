//! Client-side pagination over a fully downloaded list.
//!
//! BigTime list endpoints return the whole collection, so paging only slices
//! what came back. `limit`/`offset` are never sent upstream.

use serde::Serialize;

pub const DEFAULT_LIMIT: i64 = 50;
pub const MAX_LIMIT: i64 = 1000;

/// Effective window after defaults and clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: usize,
    pub offset: usize,
}

/// Pagination block echoed in list envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub total: usize,
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
    pub returned: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::from_input(None, None)
    }
}

impl Pagination {
    /// `limit` defaults to 50 and is clamped to `1..=1000`; `offset`
    /// defaults to 0 and negative values become 0. Inputs are never rejected.
    pub fn from_input(limit: Option<i64>, offset: Option<i64>) -> Self {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let offset = offset.unwrap_or(0).max(0);
        Self {
            limit: limit as usize,
            offset: usize::try_from(offset).unwrap_or(usize::MAX),
        }
    }

    /// Keep items `[offset, offset + limit)`.
    pub fn slice<T>(&self, items: Vec<T>) -> (Vec<T>, PageInfo) {
        let total = items.len();
        let page: Vec<T> = items.into_iter().skip(self.offset).take(self.limit).collect();
        let info = PageInfo {
            total,
            offset: self.offset,
            limit: self.limit,
            has_more: self.offset.saturating_add(self.limit) < total,
            returned: page.len(),
        };
        (page, info)
    }
}
