//! Accumulating cursor-paginated list
//!
//! Pages are appended as they arrive. Every request is stamped with the key
//! (filter parameters) and reset generation that issued it; a response whose
//! stamp no longer matches the list is dropped, so a slow response for an
//! old filter can never overwrite newer results.

use contracts::shared::pagination::Connection;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest<K> {
    pub key: K,
    pub generation: u64,
    /// `None` for the first page
    pub after: Option<String>,
}

impl<K> PageRequest<K> {
    pub fn is_first_page(&self) -> bool {
        self.after.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PagedList<T, K> {
    items: Vec<T>,
    key: K,
    generation: u64,
    initial_loading: bool,
    loading_more: bool,
    loaded: bool,
    has_next_page: bool,
    end_cursor: Option<String>,
    error: Option<String>,
}

impl<T, K: Clone + PartialEq> PagedList<T, K> {
    /// A list waiting for its first page; [`Self::reset`] issues the request.
    pub fn new(key: K) -> Self {
        Self {
            items: Vec::new(),
            key,
            generation: 0,
            initial_loading: true,
            loading_more: false,
            loaded: false,
            has_next_page: false,
            end_cursor: None,
            error: None,
        }
    }

    /// Drops everything loaded so far and starts over from the first page.
    pub fn reset(&mut self, key: K) -> PageRequest<K> {
        self.items.clear();
        self.key = key;
        self.generation += 1;
        self.initial_loading = true;
        self.loading_more = false;
        self.loaded = false;
        self.has_next_page = false;
        self.end_cursor = None;
        self.error = None;
        self.first_page_request()
    }

    /// Request for the following page, or `None` when a fetch is in flight,
    /// the list is exhausted, or the last attempt failed.
    pub fn next_page_request(&mut self) -> Option<PageRequest<K>> {
        if !self.can_load_more() {
            return None;
        }
        let after = self.end_cursor.clone()?;
        self.loading_more = true;
        Some(PageRequest {
            key: self.key.clone(),
            generation: self.generation,
            after: Some(after),
        })
    }

    /// Re-issues whatever failed last: the first page if nothing has loaded
    /// yet, the next page otherwise.
    pub fn retry(&mut self) -> Option<PageRequest<K>> {
        self.error.take()?;
        if self.loaded {
            self.next_page_request()
        } else {
            self.initial_loading = true;
            Some(self.first_page_request())
        }
    }

    /// Applies a response. Returns `false` when the response was stale and ignored.
    pub fn complete<E: Display>(
        &mut self,
        request: &PageRequest<K>,
        result: Result<Connection<T>, E>,
    ) -> bool {
        if !self.is_current(request) {
            return false;
        }

        self.initial_loading = false;
        self.loading_more = false;

        match result {
            Ok(page) => {
                if request.is_first_page() {
                    self.items = page.nodes;
                } else {
                    self.items.extend(page.nodes);
                }
                self.has_next_page = page.page_info.has_next_page;
                self.end_cursor = page.page_info.end_cursor;
                self.loaded = true;
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e.to_string());
            }
        }
        true
    }

    pub fn is_current(&self, request: &PageRequest<K>) -> bool {
        request.generation == self.generation && request.key == self.key
    }

    fn first_page_request(&self) -> PageRequest<K> {
        PageRequest {
            key: self.key.clone(),
            generation: self.generation,
            after: None,
        }
    }

    pub fn can_load_more(&self) -> bool {
        self.loaded
            && !self.initial_loading
            && !self.loading_more
            && self.has_next_page
            && self.error.is_none()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// True only before the first page for the current key has arrived
    pub fn is_initial_loading(&self) -> bool {
        self.initial_loading
    }

    pub fn is_loading_more(&self) -> bool {
        self.loading_more
    }

    pub fn has_next_page(&self) -> bool {
        self.has_next_page
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Loaded successfully and the service returned nothing
    pub fn is_empty_result(&self) -> bool {
        self.loaded && !self.initial_loading && self.items.is_empty() && self.error.is_none()
    }
}
