// src/browse.rs
// Owned state for one browsing view: a collection snapshot plus the
// search term, category filter, and page cursor that shape what the view
// shows. One instance per view; there is no shared or ambient state.

use crate::pagination::{paginate, Page};
use crate::query::{query, Queryable, FILTER_ALL};

/// Search, filter, and pagination state over one loaded collection.
///
/// Changing the search term or category resets the page cursor to the
/// first page, so a narrowed result set is never viewed from a stale
/// page. Swapping the collection resets everything.
#[derive(Debug, Clone)]
pub struct BrowseState<T: Queryable> {
    items: Vec<T>,
    search_term: String,
    category: String,
    page_number: usize,
    page_size: usize,
}

impl<T: Queryable> BrowseState<T> {
    pub fn new(items: Vec<T>, page_size: usize) -> Self {
        BrowseState {
            items,
            search_term: String::new(),
            category: FILTER_ALL.to_string(),
            page_number: 1,
            page_size,
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn page_number(&self) -> usize {
        self.page_number
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
        self.page_number = 1;
    }

    pub fn set_category(&mut self, category: &str) {
        self.category = category.to_string();
        self.page_number = 1;
    }

    /// Swaps in a new collection snapshot (e.g. a mode or scope switch)
    /// and clears the search, filter, and page cursor.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.search_term.clear();
        self.category = FILTER_ALL.to_string();
        self.page_number = 1;
    }

    /// Moves to the next page if there is one; never wraps.
    pub fn next_page(&mut self) {
        if self.page_number < self.current_total_pages() {
            self.page_number += 1;
        }
    }

    /// Moves to the previous page if there is one; never wraps.
    pub fn prev_page(&mut self) {
        if self.page_number > 1 {
            self.page_number -= 1;
        }
    }

    /// The current page of filtered results, recomputed from the current
    /// inputs on every call.
    pub fn page(&self) -> Page<&T> {
        let results = query(&self.items, &self.search_term, &self.category);
        paginate(&results, self.page_size, self.page_number)
    }

    fn current_total_pages(&self) -> usize {
        self.page().total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_data::entry;
    use crate::catalog::DictionaryEntry;

    fn big_dictionary() -> Vec<DictionaryEntry> {
        (1..=120)
            .map(|i| {
                let deck = if i % 2 == 0 {
                    "Xhosa Notes::Even"
                } else {
                    "Xhosa Notes::Odd"
                };
                entry(i, &format!("word{}", i), &format!("gloss{}", i), deck)
            })
            .collect()
    }

    #[test]
    fn pages_through_the_unfiltered_collection() {
        let mut view = BrowseState::new(big_dictionary(), 50);
        let first = view.page();
        assert_eq!(first.items.len(), 50);
        assert_eq!(first.total_pages, 3);
        assert!(first.is_first());

        view.next_page();
        view.next_page();
        let last = view.page();
        assert_eq!(last.page_number, 3);
        assert_eq!(last.items.len(), 20);
        assert!(last.is_last());

        // next at the last page stays put.
        view.next_page();
        assert_eq!(view.page_number(), 3);
    }

    #[test]
    fn changing_the_search_term_resets_the_page() {
        let mut view = BrowseState::new(big_dictionary(), 50);
        view.next_page();
        assert_eq!(view.page_number(), 2);

        view.set_search_term("word1");
        assert_eq!(view.page_number(), 1);
        // "word1" matches word1, word10..word19, word100..word119.
        assert_eq!(view.page().items.len(), 32);
    }

    #[test]
    fn changing_the_category_resets_the_page() {
        let mut view = BrowseState::new(big_dictionary(), 50);
        view.next_page();

        view.set_category("Even");
        assert_eq!(view.page_number(), 1);
        assert_eq!(view.page().total_pages, 2);
        assert_eq!(view.page().items.len(), 50);
    }

    #[test]
    fn swapping_the_collection_resets_everything() {
        let mut view = BrowseState::new(big_dictionary(), 50);
        view.set_search_term("word1");
        view.set_category("Even");
        view.next_page();

        view.set_items(vec![entry(1, "molo", "hello", "Xhosa Notes::Greetings")]);
        assert_eq!(view.search_term(), "");
        assert_eq!(view.category(), FILTER_ALL);
        assert_eq!(view.page_number(), 1);
        assert_eq!(view.page().items.len(), 1);
    }

    #[test]
    fn prev_at_the_first_page_stays_put() {
        let mut view = BrowseState::new(big_dictionary(), 50);
        view.prev_page();
        assert_eq!(view.page_number(), 1);
    }

    #[test]
    fn zero_results_is_an_empty_page_not_an_error() {
        let mut view = BrowseState::new(big_dictionary(), 50);
        view.set_search_term("no such word");
        let page = view.page();
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
    }
}
