pub mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError};
pub use responses::*;

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Id type wrapper helps ensure we don't mix up ids for different resources.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct WordId(pub i64);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct GroupId(pub i64);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct StudySessionId(pub i64);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct StudyActivityId(pub i64);

pub const DEFAULT_PER_PAGE: u32 = 100;

/// Pagination metadata attached to every paginated response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl Default for PaginationState {
    /// The shape views render against before anything has loaded.
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            total: 0,
            total_pages: 1,
        }
    }
}

impl PaginationState {
    /// Clamp `page` and `total_pages` to at least 1.
    ///
    /// The backend reports `total_pages = 0` for an empty table. `per_page`
    /// is kept as reported; the helpers below never divide by it.
    pub fn normalized(self) -> Self {
        Self {
            page: self.page.max(1),
            total_pages: self.total_pages.max(1),
            ..self
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// 1-based index of the first item on this page, or 0 when the page is
    /// empty.
    pub fn first_item(&self) -> u64 {
        let offset =
            u64::from(self.page.saturating_sub(1)) * u64::from(self.per_page);
        if offset >= self.total {
            0
        } else {
            offset + 1
        }
    }

    /// 1-based index of the last item on this page, or 0 when the page is
    /// empty.
    pub fn last_item(&self) -> u64 {
        let first = self.first_item();
        if first == 0 {
            return 0;
        }
        (first + u64::from(self.per_page) - 1).min(self.total)
    }
}

/// One page of a list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pagination: PaginationState,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize,
    Deserialize,
)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "ASC")]
    #[display("ASC")]
    Asc,
    #[serde(rename = "DESC")]
    #[display("DESC")]
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Page and sort order requested from a list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: u32,
    pub sort_by: String,
    pub sort_direction: SortDirection,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 1,
            sort_by: String::new(),
            sort_direction: SortDirection::Asc,
        }
    }
}

impl PageQuery {
    pub fn page(page: u32) -> Self {
        Self {
            page,
            ..Default::default()
        }
    }

    /// Query parameters for the list endpoints. The sort pair is only sent
    /// when a sort column is set.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("page", self.page.to_string())];
        if !self.sort_by.is_empty() {
            params.push(("sort", self.sort_by.clone()));
            params.push(("direction", self.sort_direction.to_string()));
        }
        params
    }
}
