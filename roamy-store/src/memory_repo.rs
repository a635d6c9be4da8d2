use async_trait::async_trait;
use serde::Deserialize;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;
use roamy_core::repository::{AttractionRepository, DestinationRepository, HotelRepository};
use roamy_core::{Attraction, Destination, Hotel, StoreError, StoreResult};

/// Catalog contents as read from a seed file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSeed {
    #[serde(default)]
    pub destinations: Vec<Destination>,
    #[serde(default)]
    pub attractions: Vec<Attraction>,
    #[serde(default)]
    pub hotels: Vec<Hotel>,
}

/// Read-only catalog held in memory. Used by the CLI's memory backend and by tests.
pub struct MemoryCatalog {
    destinations: Vec<Destination>,
    attractions: Vec<Attraction>,
    hotels: Vec<Hotel>,
}

impl MemoryCatalog {
    pub fn new(seed: CatalogSeed) -> StoreResult<Self> {
        let mut ids = HashSet::new();
        for destination in &seed.destinations {
            let id = destination.persisted_id().ok_or_else(|| {
                StoreError::Seed(format!("destination '{}' needs a positive id", destination.name))
            })?;
            if !ids.insert(id) {
                return Err(StoreError::Seed(format!("duplicate destination id {}", id)));
            }
        }

        if let Some(orphan) = seed.attractions.iter().find(|a| !ids.contains(&a.destination_id)) {
            return Err(StoreError::Seed(format!(
                "attraction {} references unknown destination {}",
                orphan.id, orphan.destination_id
            )));
        }
        if let Some(orphan) = seed.hotels.iter().find(|h| !ids.contains(&h.destination_id)) {
            return Err(StoreError::Seed(format!(
                "hotel {} references unknown destination {}",
                orphan.id, orphan.destination_id
            )));
        }

        Ok(Self {
            destinations: seed.destinations,
            attractions: seed.attractions,
            hotels: seed.hotels,
        })
    }

    pub fn empty() -> Self {
        Self {
            destinations: Vec::new(),
            attractions: Vec::new(),
            hotels: Vec::new(),
        }
    }

    pub fn from_json(raw: &str) -> StoreResult<Self> {
        let seed: CatalogSeed = serde_json::from_str(raw).map_err(|e| StoreError::Seed(e.to_string()))?;
        Self::new(seed)
    }

    pub async fn from_file(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| StoreError::Seed(format!("{}: {}", path.display(), e)))?;
        let catalog = Self::from_json(&raw)?;

        info!(
            "Loaded catalog seed from {} ({} destinations, {} attractions, {} hotels)",
            path.display(),
            catalog.destinations.len(),
            catalog.attractions.len(),
            catalog.hotels.len()
        );
        Ok(catalog)
    }

    fn hotels_of(&self, destination_id: i64) -> impl Iterator<Item = &Hotel> {
        self.hotels.iter().filter(move |h| h.destination_id == destination_id)
    }
}

/// Best rated first (unrated last), then cheaper first.
fn rank_hotels(a: &Hotel, b: &Hotel) -> Ordering {
    let by_rating = match (a.average_rating, b.average_rating) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_rating.then_with(|| a.price_per_night.cmp(&b.price_per_night))
}

#[async_trait]
impl DestinationRepository for MemoryCatalog {
    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Destination>> {
        let name = name.trim();
        Ok(self.destinations.iter().find(|d| d.name.eq_ignore_ascii_case(name)).cloned())
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Destination>> {
        Ok(self.destinations.iter().find(|d| d.id == Some(id)).cloned())
    }

    async fn search(&self, term: &str) -> StoreResult<Vec<Destination>> {
        Ok(self.destinations.iter().filter(|d| d.mentions(term)).cloned().collect())
    }

    async fn find_all(&self) -> StoreResult<Vec<Destination>> {
        Ok(self.destinations.clone())
    }

    async fn find_active(&self) -> StoreResult<Vec<Destination>> {
        Ok(self.destinations.iter().filter(|d| d.active).cloned().collect())
    }
}

#[async_trait]
impl AttractionRepository for MemoryCatalog {
    async fn find_active_by_destination(&self, destination_id: i64) -> StoreResult<Vec<Attraction>> {
        Ok(self
            .attractions
            .iter()
            .filter(|a| a.destination_id == destination_id && a.active)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl HotelRepository for MemoryCatalog {
    async fn find_available_ranked(&self, destination_id: i64) -> StoreResult<Vec<Hotel>> {
        let mut hotels: Vec<Hotel> = self.hotels_of(destination_id).filter(|h| h.available).cloned().collect();
        hotels.sort_by(rank_hotels);
        Ok(hotels)
    }

    async fn find_by_destination(&self, destination_id: i64) -> StoreResult<Vec<Hotel>> {
        Ok(self.hotels_of(destination_id).cloned().collect())
    }
}
