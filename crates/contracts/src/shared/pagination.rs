use serde::{Deserialize, Serialize};

/// Cursor page info returned alongside every list query.
///
/// The products and users queries only select `hasNextPage`/`endCursor`,
/// so the backward-paging fields default when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    #[serde(default)]
    pub has_previous_page: bool,
    #[serde(default)]
    pub end_cursor: Option<String>,
    #[serde(default)]
    pub start_cursor: Option<String>,
}

impl PageInfo {
    /// Cursor for the next request, `None` once the collection is exhausted.
    pub fn next_cursor(&self) -> Option<&str> {
        if self.has_next_page {
            self.end_cursor.as_deref()
        } else {
            None
        }
    }
}

/// One page of a cursor-paginated collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    pub nodes: Vec<T>,
    pub page_info: PageInfo,
}

/// Variables shared by the unfiltered list queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageVariables {
    pub first: u32,
    pub after: Option<String>,
}
