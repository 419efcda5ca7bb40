//! Record trait defining the shape every listed entity shares

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Base trait for every record held in a [`Collection`](crate::core::Collection).
///
/// All records have:
/// - id: Unique identifier, synthesized at construction
/// - created_at: Creation timestamp, fixed for the lifetime of the record
/// - search_text: The fields scanned by the list search predicate
/// - facet: The field matched exactly by the status/category selector
///
/// Records are immutable by convention: an update constructs a whole new
/// value that keeps the original id and creation timestamp.
pub trait Record: Clone + Send + Sync + 'static {
    /// The singular resource name (e.g., "order", "product")
    fn resource_name() -> &'static str;

    /// Get the unique identifier for this record
    fn id(&self) -> Uuid;

    /// Get the creation timestamp
    fn created_at(&self) -> DateTime<Utc>;

    /// Fields the case-insensitive search predicate scans.
    ///
    /// Each record type decides what is searchable: orders expose their
    /// display code and customer name, products their name and category.
    fn search_text(&self) -> Vec<&str>;

    /// The value compared exactly against the status/category selector
    fn facet(&self) -> &str;
}
