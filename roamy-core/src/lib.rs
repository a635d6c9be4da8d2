pub mod catalog;
pub mod repository;
pub mod search;

pub use catalog::{Amenity, Attraction, AttractionType, Destination, Hotel, StarRating, TravelInterest};
pub use repository::{AttractionRepository, Catalog, DestinationRepository, HotelRepository};
pub use search::{CatalogSearch, HotelQuery, HotelSort, Recommendations, SortOrder};

/// Failures raised by a catalog store adapter.
///
/// "Nothing matched" is never an error: lookups return `Ok(None)` or an empty list.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store query failed: {0}")]
    Query(String),
    #[error("Store unavailable: {0}")]
    Unavailable(String),
    #[error("Store call timed out after {0} ms")]
    Timeout(u64),
    #[error("Invalid catalog seed: {0}")]
    Seed(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type CoreResult<T> = Result<T, CoreError>;
