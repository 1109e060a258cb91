//! Page state for the catalog browser.
//!
//! Every fetch is tagged with a monotonically increasing request token.
//! Responses carry their token back, and only the response matching the
//! latest token is applied; anything older is dropped on the floor. This
//! keeps a slow page-2 response from overwriting an already rendered page 3.

use crate::model::book::Book;

#[derive(Debug)]
pub struct CatalogState {
    /// Current 1-based page indicator.
    pub page: u32,
    /// Records of the most recently applied page. On failure the previous
    /// page stays visible until the user retries.
    pub books: Vec<Book>,
    pub loading: bool,
    pub error: Option<String>,
    latest: u64,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            page: 1,
            books: Vec::new(),
            loading: false,
            error: None,
            latest: 0,
        }
    }
}

impl CatalogState {
    /// Marks a fetch as started and returns its token. Clears any prior
    /// error and invalidates all earlier in-flight requests.
    pub fn begin_load(&mut self) -> u64 {
        self.loading = true;
        self.error = None;
        self.latest += 1;
        self.latest
    }

    /// Applies a successful response: wholesale replacement of the book
    /// list. Returns false (and changes nothing) for a stale token.
    pub fn apply_success(&mut self, token: u64, books: Vec<Book>) -> bool {
        if token != self.latest {
            return false;
        }
        self.books = books;
        self.loading = false;
        true
    }

    /// Applies a failed response. The previous book list is kept so the user
    /// still has something to look at next to the error banner. Returns
    /// false for a stale token.
    pub fn apply_failure(&mut self, token: u64, message: String) -> bool {
        if token != self.latest {
            return false;
        }
        self.error = Some(message);
        self.loading = false;
        true
    }

    /// Advances the page indicator and returns the page to fetch.
    pub fn next(&mut self) -> u32 {
        self.page += 1;
        self.page
    }

    /// Steps the page indicator back, flooring at page 1. Returns `None`
    /// when already on the first page, in which case no fetch should be
    /// issued.
    pub fn prev(&mut self) -> Option<u32> {
        if self.page <= 1 {
            return None;
        }
        self.page -= 1;
        Some(self.page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn book(id: u64, title: &str) -> Book {
        Book {
            id,
            title: title.to_string(),
            authors: Vec::new(),
            summaries: Vec::new(),
            subjects: Vec::new(),
            bookshelves: Vec::new(),
            languages: vec!["en".to_string()],
            copyright: Some(false),
            media_type: "Text".to_string(),
            formats: HashMap::new(),
            download_count: 0,
        }
    }

    #[test]
    fn success_replaces_items_wholesale() {
        let mut state = CatalogState::default();
        let token = state.begin_load();
        assert!(state.loading);
        assert!(state.apply_success(token, vec![book(1, "Page one")]));

        state.next();
        let token = state.begin_load();
        assert!(state.apply_success(token, vec![book(2, "Page two")]));

        assert_eq!(state.page, 2);
        assert_eq!(state.books.len(), 1);
        assert_eq!(state.books[0].title, "Page two");
        assert!(!state.loading);
    }

    #[test]
    fn failure_keeps_previous_items_visible() {
        let mut state = CatalogState::default();
        let token = state.begin_load();
        state.apply_success(token, vec![book(1, "Page one")]);

        state.next();
        let token = state.begin_load();
        assert!(state.apply_failure(token, "Failed to fetch books".to_string()));

        assert_eq!(state.error.as_deref(), Some("Failed to fetch books"));
        assert_eq!(state.books[0].title, "Page one");
        assert!(!state.loading);
    }

    #[test]
    fn begin_load_clears_the_error() {
        let mut state = CatalogState::default();
        let token = state.begin_load();
        state.apply_failure(token, "boom".to_string());

        state.begin_load();
        assert!(state.error.is_none());
        assert!(state.loading);
    }

    #[test]
    fn stale_responses_are_ignored() {
        let mut state = CatalogState::default();
        let stale = state.begin_load();
        let fresh = state.begin_load();

        assert!(state.apply_success(fresh, vec![book(3, "Latest")]));
        assert!(!state.apply_success(stale, vec![book(2, "Stale")]));
        assert_eq!(state.books[0].title, "Latest");

        // A stale failure must not clobber an applied result either.
        assert!(!state.apply_failure(stale, "late error".to_string()));
        assert!(state.error.is_none());
    }

    #[test]
    fn prev_floors_at_page_one() {
        let mut state = CatalogState::default();
        assert_eq!(state.prev(), None);
        assert_eq!(state.page, 1);

        state.next();
        state.next();
        assert_eq!(state.prev(), Some(2));
        assert_eq!(state.prev(), Some(1));
        assert_eq!(state.prev(), None);
    }
}
