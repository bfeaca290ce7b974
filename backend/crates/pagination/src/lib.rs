//! Offset and limit paging primitives shared by listing endpoints.
//!
//! Listing endpoints accept an optional `limit` and `offset`, validate them
//! into a [`PageRequest`], and respond with a [`Page`] envelope describing the
//! window that was returned and where the next one starts.
//!
//! Offsets index into an ordered snapshot taken by a single request. When the
//! underlying collection changes between two page requests, a client walking
//! pages by offset may see an entry twice or miss one.
//!
//! # Example
//!
//! ```
//! use pagination::PageRequest;
//!
//! let request = PageRequest::new(Some(2), Some(1)).expect("valid window");
//! let page = request.paginate(vec!["a", "b", "c", "d"]);
//!
//! assert_eq!(page.items, vec!["b", "c"]);
//! assert_eq!(page.next_offset, Some(3));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of items returned when the caller does not supply a limit.
pub const DEFAULT_LIMIT: u32 = 20;

/// Hard ceiling for the number of items a single page may contain.
pub const MAX_LIMIT: u32 = 100;

/// Errors raised while validating paging parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// The limit was zero.
    #[error("limit must be at least 1")]
    ZeroLimit,
    /// The limit exceeded [`MAX_LIMIT`].
    #[error("limit must not exceed {max}, got {limit}")]
    LimitTooLarge {
        /// Limit supplied by the caller.
        limit: u32,
        /// Largest accepted limit.
        max: u32,
    },
}

/// Validated paging window.
///
/// Deserialising goes through [`PageRequest::new`], so serialised input is
/// held to the same bounds as caller input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPageRequest")]
pub struct PageRequest {
    offset: u32,
    limit: u32,
}

#[derive(Deserialize)]
struct RawPageRequest {
    limit: Option<u32>,
    offset: Option<u32>,
}

impl TryFrom<RawPageRequest> for PageRequest {
    type Error = PaginationError;

    fn try_from(raw: RawPageRequest) -> Result<Self, Self::Error> {
        Self::new(raw.limit, raw.offset)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    /// Build a window from optional caller input, applying defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError`] when the limit is zero or above
    /// [`MAX_LIMIT`].
    pub fn new(limit: Option<u32>, offset: Option<u32>) -> Result<Self, PaginationError> {
        let limit_value = limit.unwrap_or(DEFAULT_LIMIT);
        if limit_value == 0 {
            return Err(PaginationError::ZeroLimit);
        }
        if limit_value > MAX_LIMIT {
            return Err(PaginationError::LimitTooLarge {
                limit: limit_value,
                max: MAX_LIMIT,
            });
        }
        Ok(Self {
            offset: offset.unwrap_or(0),
            limit: limit_value,
        })
    }

    /// Number of leading items skipped.
    #[must_use]
    pub const fn offset(&self) -> u32 {
        self.offset
    }

    /// Maximum number of items returned.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Skip `offset` items and take at most `limit` of the remainder.
    pub fn apply<I>(&self, items: I) -> impl Iterator<Item = I::Item>
    where
        I: IntoIterator,
    {
        items
            .into_iter()
            .skip(to_usize(self.offset))
            .take(to_usize(self.limit))
    }

    /// Cut a window out of a fully ordered collection and describe it.
    #[must_use]
    pub fn paginate<T>(&self, items: Vec<T>) -> Page<T> {
        let total = items.len();
        let end = to_usize(self.offset).saturating_add(to_usize(self.limit));
        let has_more = end < total;
        let window: Vec<T> = self.apply(items).collect();
        Page {
            items: window,
            offset: self.offset,
            limit: self.limit,
            has_more,
            next_offset: has_more.then(|| self.offset.saturating_add(self.limit)),
        }
    }
}

fn to_usize(value: u32) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

/// Envelope returned by paged listing endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items contained in this window.
    pub items: Vec<T>,
    /// Offset the window starts at.
    pub offset: u32,
    /// Limit the window was cut with.
    pub limit: u32,
    /// Whether items remain after this window.
    pub has_more: bool,
    /// Offset of the following window, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_offset: Option<u32>,
}

impl<T> Page<T> {
    /// Convert every item while keeping the window metadata.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            offset: self.offset,
            limit: self.limit,
            has_more: self.has_more,
            next_offset: self.next_offset,
        }
    }
}
