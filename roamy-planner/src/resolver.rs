use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{info, warn};
use roamy_core::repository::DestinationRepository;
use roamy_core::{Destination, StoreResult};
use crate::bounded::StoreDeadline;

const PLACEHOLDER_RATING: f64 = 4.0;

/// How a destination name was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Exact,
    Partial,
    Scan,
    Placeholder,
}

/// Turns a free-text destination name into a `Destination`. Never fails:
/// store errors and misses both end in a synthesized, unpersisted placeholder.
pub struct DestinationResolver {
    destinations: Arc<dyn DestinationRepository>,
    deadline: StoreDeadline,
}

impl DestinationResolver {
    pub fn new(destinations: Arc<dyn DestinationRepository>, deadline: StoreDeadline) -> Self {
        Self { destinations, deadline }
    }

    pub async fn resolve(&self, name: &str) -> (Destination, Resolution) {
        let name = name.trim();
        if name.is_empty() {
            warn!("Blank destination name, using placeholder");
            return (placeholder(name), Resolution::Placeholder);
        }

        match self.lookup(name).await {
            Ok(Some((destination, resolution))) => {
                info!(
                    "Resolved destination {} -> {} (ID: {:?}, {:?})",
                    name, destination.name, destination.id, resolution
                );
                (destination, resolution)
            }
            Ok(None) => {
                warn!("No stored destination found for: {}, using placeholder", name);
                (placeholder(name), Resolution::Placeholder)
            }
            Err(e) => {
                warn!("Error finding destination '{}': {}", name, e);
                (placeholder(name), Resolution::Placeholder)
            }
        }
    }

    async fn lookup(&self, name: &str) -> StoreResult<Option<(Destination, Resolution)>> {
        if let Some(found) = self.deadline.run(self.destinations.find_by_name(name)).await? {
            return Ok(Some((found, Resolution::Exact)));
        }

        let partial = self.deadline.run(self.destinations.search(name)).await?;
        if let Some(found) = partial.into_iter().next() {
            return Ok(Some((found, Resolution::Partial)));
        }

        let all = self.deadline.run(self.destinations.find_all()).await?;
        info!("Scanning {} stored destinations for: {}", all.len(), name);
        Ok(all.into_iter().find(|d| d.is_named(name)).map(|d| (d, Resolution::Scan)))
    }
}

/// Stand-in for a destination the catalog does not know. Has no id.
pub fn placeholder(name: &str) -> Destination {
    Destination {
        id: None,
        name: name.to_string(),
        city: name.to_string(),
        country: "Unknown".to_string(),
        country_code: None,
        latitude: None,
        longitude: None,
        description: Some("Destination information".to_string()),
        image_url: None,
        time_zone: None,
        climate: None,
        best_time_to_visit: None,
        popular_interests: Vec::new(),
        budget_daily_cost: Some(Decimal::from(50)),
        mid_range_daily_cost: Some(Decimal::from(125)),
        luxury_daily_cost: Some(Decimal::from(250)),
        average_rating: Some(PLACEHOLDER_RATING),
        total_reviews: 0,
        popularity_score: 0,
        active: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use roamy_core::StoreError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Answers exact lookups for one name, searches for another, and scans for a third.
    struct Staged {
        exact: Option<Destination>,
        partial: Vec<Destination>,
        all: Vec<Destination>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl DestinationRepository for Staged {
        async fn find_by_name(&self, _name: &str) -> StoreResult<Option<Destination>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.exact.clone())
        }
        async fn find_by_id(&self, _id: i64) -> StoreResult<Option<Destination>> {
            Ok(None)
        }
        async fn search(&self, _term: &str) -> StoreResult<Vec<Destination>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.partial.clone())
        }
        async fn find_all(&self) -> StoreResult<Vec<Destination>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.all.clone())
        }
        async fn find_active(&self) -> StoreResult<Vec<Destination>> {
            Ok(self.all.clone())
        }
    }

    struct Broken;

    #[async_trait]
    impl DestinationRepository for Broken {
        async fn find_by_name(&self, _name: &str) -> StoreResult<Option<Destination>> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
        async fn find_by_id(&self, _id: i64) -> StoreResult<Option<Destination>> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
        async fn search(&self, _term: &str) -> StoreResult<Vec<Destination>> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
        async fn find_all(&self) -> StoreResult<Vec<Destination>> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
        async fn find_active(&self) -> StoreResult<Vec<Destination>> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
    }

    fn stored(id: i64, name: &str, city: &str) -> Destination {
        Destination { id: Some(id), name: name.to_string(), city: city.to_string(), country: "France".to_string(), ..placeholder(name) }
    }

    fn resolver(repo: impl DestinationRepository + 'static) -> DestinationResolver {
        DestinationResolver::new(Arc::new(repo), StoreDeadline::from_millis(0))
    }

    #[tokio::test]
    async fn test_exact_match_short_circuits() {
        let repo = Staged { exact: Some(stored(1, "Paris", "Paris")), partial: vec![], all: vec![], calls: AtomicUsize::new(0) };
        let resolver = resolver(repo);
        let (destination, how) = resolver.resolve("paris").await;
        assert_eq!(how, Resolution::Exact);
        assert_eq!(destination.id, Some(1));
    }

    #[tokio::test]
    async fn test_partial_then_scan() {
        let partial = Staged {
            exact: None,
            partial: vec![stored(2, "Nice", "Nice"), stored(3, "Nimes", "Nimes")],
            all: vec![],
            calls: AtomicUsize::new(0),
        };
        let (destination, how) = resolver(partial).resolve("Ni").await;
        assert_eq!(how, Resolution::Partial);
        assert_eq!(destination.name, "Nice");

        let scan = Staged { exact: None, partial: vec![], all: vec![stored(4, "Goa", "Panaji")], calls: AtomicUsize::new(0) };
        let (destination, how) = resolver(scan).resolve("PANAJI").await;
        assert_eq!(how, Resolution::Scan);
        assert_eq!(destination.id, Some(4));
    }

    #[tokio::test]
    async fn test_unknown_name_gets_placeholder() {
        let repo = Staged { exact: None, partial: vec![], all: vec![stored(4, "Goa", "Panaji")], calls: AtomicUsize::new(0) };
        let (destination, how) = resolver(repo).resolve("Nowhereville").await;
        assert_eq!(how, Resolution::Placeholder);
        assert!(!destination.is_persisted());
        assert_eq!(destination.name, "Nowhereville");
        assert_eq!(destination.country, "Unknown");
        assert_eq!(destination.budget_daily_cost, Some(dec!(50)));
        assert_eq!(destination.mid_range_daily_cost, Some(dec!(125)));
        assert_eq!(destination.luxury_daily_cost, Some(dec!(250)));
        assert_eq!(destination.average_rating, Some(4.0));
        assert!(destination.popular_interests.is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_degrades_to_placeholder() {
        let (destination, how) = resolver(Broken).resolve("Paris").await;
        assert_eq!(how, Resolution::Placeholder);
        assert_eq!(destination.country, "Unknown");
    }

    #[tokio::test]
    async fn test_blank_name_skips_the_store() {
        let repo = Arc::new(Staged { exact: None, partial: vec![stored(1, "Paris", "Paris")], all: vec![], calls: AtomicUsize::new(0) });
        let resolver = DestinationResolver::new(repo.clone(), StoreDeadline::from_millis(0));
        let (_, how) = resolver.resolve("   ").await;
        assert_eq!(how, Resolution::Placeholder);
        assert_eq!(repo.calls.load(Ordering::SeqCst), 0);
    }
}
