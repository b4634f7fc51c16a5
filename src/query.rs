// src/query.rs
// Free-text search + category filtering over a loaded collection. The same
// query shape serves dictionary entries, text rows, and lessons; only the
// searched fields and the category semantics differ per type.

use crate::catalog::texts::TextRow;
use crate::catalog::{DictionaryEntry, Lesson};

/// The category filter value that matches every record.
pub const FILTER_ALL: &str = "all";

/// A record the query engine can filter.
pub trait Queryable {
    /// The fields scanned by a free-text search, in a fixed order.
    fn search_fields(&self) -> Vec<&str>;

    /// Whether the record belongs to the given category filter. The "all"
    /// filter is handled by `query` and never reaches this method.
    fn matches_category(&self, filter: &str) -> bool;
}

/// Returns the records matching both the search term and the category
/// filter, preserving the collection's relative order. An empty term and
/// the "all" filter each match everything; zero matches is an empty list,
/// not an error.
pub fn query<'a, T: Queryable>(
    items: &'a [T],
    search_term: &str,
    category: &str,
) -> Vec<&'a T> {
    let needle = search_term.to_lowercase();
    items
        .iter()
        .filter(|item| category == FILTER_ALL || item.matches_category(category))
        .filter(|item| {
            needle.is_empty()
                || item
                    .search_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

impl Queryable for DictionaryEntry {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.source_text.as_str(), self.target_text.as_str()];
        fields.extend(self.source_context.as_deref());
        fields.extend(self.target_context.as_deref());
        fields
    }

    // Decks are hierarchical paths; a filter matches any segment of the
    // path by substring containment.
    fn matches_category(&self, filter: &str) -> bool {
        self.deck.contains(filter)
    }
}

impl Queryable for TextRow<'_> {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.line.source_text.as_str(), self.line.target_text.as_str()];
        fields.extend(self.line.source_context.as_deref());
        fields.extend(self.line.target_context.as_deref());
        fields.push(self.title);
        fields
    }

    // Text filters carry the full derived title; unlike decks this is an
    // exact match.
    fn matches_category(&self, filter: &str) -> bool {
        self.title == filter
    }
}

impl Queryable for Lesson {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.objective.as_str()];
        for item in &self.vocabulary {
            fields.push(item.word.as_str());
            fields.push(item.meaning.as_str());
        }
        fields
    }

    // Lessons filter by their shard's part name, exact.
    fn matches_category(&self, filter: &str) -> bool {
        self.part == filter
    }
}
