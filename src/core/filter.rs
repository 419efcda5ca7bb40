//! Search and facet filtering over record snapshots

use crate::core::entity::Record;
use indexmap::IndexMap;
use uuid::Uuid;

/// Filter state for a list view: a committed search string plus an optional
/// exact-match selector (order status, product category).
///
/// `search` holds the settled debounced value, never the raw keystroke
/// stream. Both fields start empty when a view is freshly mounted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub search: String,
    pub facet: Option<String>,
}

impl ListFilter {
    /// Whether the filter lets everything through
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.facet.is_none()
    }

    /// Whether `record` passes both predicates.
    ///
    /// A record matches when the search string is empty or is a
    /// case-insensitive substring of one of the record's searchable fields,
    /// and the facet is unset or equals the record's facet field exactly.
    pub fn matches<T: Record>(&self, record: &T) -> bool {
        let text_ok = self.search.is_empty() || {
            let query = self.search.to_lowercase();
            record
                .search_text()
                .iter()
                .any(|field| field.to_lowercase().contains(&query))
        };

        let facet_ok = self
            .facet
            .as_deref()
            .is_none_or(|facet| facet == record.facet());

        text_ok && facet_ok
    }

    /// Apply the filter to a snapshot, preserving the source order
    pub fn apply<T: Record>(&self, records: &IndexMap<Uuid, T>) -> Vec<T> {
        records
            .values()
            .filter(|record| self.matches(*record))
            .cloned()
            .collect()
    }

    /// Number of records passing the filter, without cloning them
    pub fn count<T: Record>(&self, records: &IndexMap<Uuid, T>) -> usize {
        records
            .values()
            .filter(|record| self.matches(*record))
            .count()
    }
}
