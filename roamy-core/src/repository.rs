use async_trait::async_trait;
use std::sync::Arc;
use crate::catalog::{Attraction, Destination, Hotel};
use crate::StoreResult;

/// Read-only access to stored destinations
#[async_trait]
pub trait DestinationRepository: Send + Sync {
    /// Case-insensitive exact match on the destination name.
    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Destination>>;

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Destination>>;

    /// Case-insensitive substring match on name, city or country.
    async fn search(&self, term: &str) -> StoreResult<Vec<Destination>>;

    async fn find_all(&self) -> StoreResult<Vec<Destination>>;

    async fn find_active(&self) -> StoreResult<Vec<Destination>>;
}

/// Read-only access to stored attractions
#[async_trait]
pub trait AttractionRepository: Send + Sync {
    async fn find_active_by_destination(&self, destination_id: i64) -> StoreResult<Vec<Attraction>>;
}

/// Read-only access to stored hotels
#[async_trait]
pub trait HotelRepository: Send + Sync {
    /// Available hotels of a destination, best rated first, cheaper first on ties.
    async fn find_available_ranked(&self, destination_id: i64) -> StoreResult<Vec<Hotel>>;

    /// Every hotel of a destination in store order, availability unchecked.
    async fn find_by_destination(&self, destination_id: i64) -> StoreResult<Vec<Hotel>>;
}

/// The three catalog repositories handed to services as one value.
#[derive(Clone)]
pub struct Catalog {
    pub destinations: Arc<dyn DestinationRepository>,
    pub attractions: Arc<dyn AttractionRepository>,
    pub hotels: Arc<dyn HotelRepository>,
}

impl Catalog {
    /// Builds a catalog where a single adapter serves all three repositories.
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: DestinationRepository + AttractionRepository + HotelRepository + 'static,
    {
        Self {
            destinations: store.clone(),
            attractions: store.clone(),
            hotels: store,
        }
    }
}
