use async_trait::async_trait;
use rust_decimal_macros::dec;
use std::sync::Arc;
use std::time::{Duration, Instant};
use roamy_core::repository::{AttractionRepository, DestinationRepository, HotelRepository};
use roamy_core::{Attraction, Catalog, Destination, Hotel, StoreError, StoreResult};
use roamy_planner::{SuggestionEngine, SuggestionRequest};
use roamy_store::{MemoryCatalog, SuggestionConfig};

const SEED: &str = r#"{
    "destinations": [
        {"id": 1, "name": "Kyoto", "city": "Kyoto", "country": "Japan",
         "popular_interests": ["CULTURE", "HISTORY"], "average_rating": 4.8},
        {"id": 2, "name": "Reykjavik", "city": "Reykjavik", "country": "Iceland"}
    ],
    "attractions": [
        {"id": 10, "destination_id": 1, "name": "Fushimi Inari", "address": "Fushimi-ku",
         "matching_interests": ["CULTURE", "HISTORY"], "average_rating": 4.9, "free_entry": true},
        {"id": 11, "destination_id": 1, "name": "Nishiki Market", "address": "Nakagyo-ku",
         "matching_interests": ["FOOD", "SHOPPING"], "average_rating": 4.4, "entry_fee": 0},
        {"id": 12, "destination_id": 1, "name": "Kyoto National Museum", "address": "Higashiyama-ku",
         "matching_interests": ["CULTURE", "ART"], "average_rating": 2.5, "entry_fee": 7}
    ],
    "hotels": [
        {"id": 100, "destination_id": 1, "name": "Ryokan Sakura", "address": "Gion",
         "price_per_night": 180, "star_rating": 4, "average_rating": 4.7, "amenities": ["WIFI", "BREAKFAST_INCLUDED"]},
        {"id": 101, "destination_id": 1, "name": "Capsule Stay", "address": "Kyoto Station",
         "price_per_night": 35, "star_rating": 1, "average_rating": 3.1},
        {"id": 102, "destination_id": 1, "name": "Closed Inn", "address": "Arashiyama",
         "price_per_night": 90, "available": false}
    ]
}"#;

fn engine_over(catalog: Catalog, store_timeout_ms: u64) -> SuggestionEngine {
    let config = SuggestionConfig { store_timeout_ms, ..SuggestionConfig::default() };
    SuggestionEngine::new(catalog, &config)
}

fn seeded_engine() -> SuggestionEngine {
    let store = MemoryCatalog::from_json(SEED).expect("seed parses");
    engine_over(Catalog::from_store(Arc::new(store)), 2000)
}

fn request(to: &str, days: i64, interests: &[&str]) -> SuggestionRequest {
    SuggestionRequest {
        to_location: Some(to.to_string()),
        duration_days: Some(days),
        interests: Some(interests.iter().map(|i| i.to_string()).collect()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_unknown_destination_degrades_to_samples() {
    let response = seeded_engine().generate(&request("Nowhereville", 3, &[])).await;

    assert_eq!(response.suggested_itinerary.len(), 3);
    assert_eq!(response.destination_overview.country, "Unknown");
    assert_eq!(response.suggested_attractions.len(), 5);
    assert!(response.suggested_accommodations.is_empty());
    assert_eq!(response.budget_breakdown.total_budget.duration_days, 3);
    assert_eq!(response.budget_breakdown.total_budget.budget_total, dec!(600));
}

#[tokio::test]
async fn test_interest_filter_keeps_only_tagged_attractions() {
    let response = seeded_engine().generate(&request("kyoto", 2, &["culture"])).await;

    let names: Vec<&str> = response.suggested_attractions.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Fushimi Inari", "Kyoto National Museum"]);
    assert!(response
        .suggested_attractions
        .iter()
        .all(|a| a.matching_interests.contains(&"CULTURE".to_string())));

    let scores: Vec<i32> = response.suggested_attractions.iter().map(|a| a.priority_score).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(scores, vec![10, 9]);
    assert_eq!(response.suggested_attractions[0].price_range, "Free");
    assert_eq!(response.suggested_attractions[1].price_range, "$ - Budget");
    assert_eq!(response.metadata.data_sources, vec!["internal-db"]);
}

#[tokio::test]
async fn test_stored_hotels_ranked_and_unavailable_dropped() {
    let response = seeded_engine().generate(&request("Kyoto", 4, &[])).await;

    let hotels = &response.suggested_accommodations;
    let ids: Vec<i64> = hotels.iter().map(|h| h.id).collect();
    assert_eq!(ids, vec![100, 101]);
    assert_eq!(hotels[0].category, "luxury");
    assert_eq!(hotels[0].total_estimated_cost, dec!(720));
    assert_eq!(hotels[1].category, "budget");
    assert_eq!(hotels[1].priority_score, 9);
    assert!(hotels.iter().all(|h| (0..=10).contains(&h.priority_score)));
}

#[tokio::test]
async fn test_destination_without_hotels_gets_no_sample_hotels() {
    let response = seeded_engine().generate(&request("Reykjavik", 2, &[])).await;

    assert!(response.suggested_accommodations.is_empty());
    // Attractions still fall back
    assert_eq!(response.suggested_attractions.len(), 5);
    assert_eq!(response.metadata.data_sources, vec!["internal-db", "sample-data"]);
}

#[tokio::test]
async fn test_itinerary_rotates_scored_attractions() {
    let response = seeded_engine().generate(&request("Kyoto", 8, &[])).await;

    assert_eq!(response.suggested_itinerary.len(), 8);
    assert_eq!(response.suggested_itinerary[7].theme, "Arrival and City Orientation");
    let first = &response.suggested_attractions[0].name;
    assert_eq!(&response.suggested_itinerary[0].activities[1].activity, first);
    assert_eq!(&response.suggested_itinerary[3].activities[1].activity, first);
}

#[tokio::test]
async fn test_long_trip_keeps_every_requested_day() {
    let response = seeded_engine().generate(&request("Kyoto", 400, &[])).await;

    assert_eq!(response.suggested_itinerary.len(), 400);
    assert_eq!(response.suggested_itinerary[399].day_number, 400);
    assert_eq!(response.suggested_itinerary[399].theme, "Arrival and City Orientation");
    assert_eq!(response.budget_breakdown.total_budget.duration_days, 400);
    assert_eq!(response.budget_breakdown.total_budget.budget_total, dec!(80000));
}

struct Unreachable;

#[async_trait]
impl DestinationRepository for Unreachable {
    async fn find_by_name(&self, _name: &str) -> StoreResult<Option<Destination>> {
        Err(StoreError::Unavailable("database is down".to_string()))
    }
    async fn find_by_id(&self, _id: i64) -> StoreResult<Option<Destination>> {
        Err(StoreError::Unavailable("database is down".to_string()))
    }
    async fn search(&self, _term: &str) -> StoreResult<Vec<Destination>> {
        Err(StoreError::Unavailable("database is down".to_string()))
    }
    async fn find_all(&self) -> StoreResult<Vec<Destination>> {
        Err(StoreError::Unavailable("database is down".to_string()))
    }
    async fn find_active(&self) -> StoreResult<Vec<Destination>> {
        Err(StoreError::Unavailable("database is down".to_string()))
    }
}

#[async_trait]
impl AttractionRepository for Unreachable {
    async fn find_active_by_destination(&self, _destination_id: i64) -> StoreResult<Vec<Attraction>> {
        Err(StoreError::Unavailable("database is down".to_string()))
    }
}

#[async_trait]
impl HotelRepository for Unreachable {
    async fn find_available_ranked(&self, _destination_id: i64) -> StoreResult<Vec<Hotel>> {
        Err(StoreError::Unavailable("database is down".to_string()))
    }
    async fn find_by_destination(&self, _destination_id: i64) -> StoreResult<Vec<Hotel>> {
        Err(StoreError::Unavailable("database is down".to_string()))
    }
}

#[tokio::test]
async fn test_failing_store_still_produces_a_response() {
    let engine = engine_over(Catalog::from_store(Arc::new(Unreachable)), 2000);
    let response = engine.generate(&request("Paris", 2, &["culture"])).await;

    assert_eq!(response.destination_overview.name, "Paris");
    assert_eq!(response.destination_overview.country, "Unknown");
    assert_eq!(response.suggested_attractions.len(), 5);
    assert!(response.suggested_accommodations.is_empty());
    assert_eq!(response.suggested_itinerary.len(), 2);
}

/// Knows one destination but takes far too long to answer anything else.
struct Sluggish {
    inner: MemoryCatalog,
    delay: Duration,
}

#[async_trait]
impl DestinationRepository for Sluggish {
    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Destination>> {
        self.inner.find_by_name(name).await
    }
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Destination>> {
        self.inner.find_by_id(id).await
    }
    async fn search(&self, term: &str) -> StoreResult<Vec<Destination>> {
        self.inner.search(term).await
    }
    async fn find_all(&self) -> StoreResult<Vec<Destination>> {
        self.inner.find_all().await
    }
    async fn find_active(&self) -> StoreResult<Vec<Destination>> {
        self.inner.find_active().await
    }
}

#[async_trait]
impl AttractionRepository for Sluggish {
    async fn find_active_by_destination(&self, destination_id: i64) -> StoreResult<Vec<Attraction>> {
        tokio::time::sleep(self.delay).await;
        self.inner.find_active_by_destination(destination_id).await
    }
}

#[async_trait]
impl HotelRepository for Sluggish {
    async fn find_available_ranked(&self, destination_id: i64) -> StoreResult<Vec<Hotel>> {
        tokio::time::sleep(self.delay).await;
        self.inner.find_available_ranked(destination_id).await
    }
    async fn find_by_destination(&self, destination_id: i64) -> StoreResult<Vec<Hotel>> {
        tokio::time::sleep(self.delay).await;
        self.inner.find_by_destination(destination_id).await
    }
}

#[tokio::test]
async fn test_slow_store_is_cut_off_by_timeout() {
    let store = Sluggish {
        inner: MemoryCatalog::from_json(SEED).expect("seed parses"),
        delay: Duration::from_secs(5),
    };
    let engine = engine_over(Catalog::from_store(Arc::new(store)), 50);

    let started = Instant::now();
    let response = engine.generate(&request("Kyoto", 3, &[])).await;

    assert!(started.elapsed() < Duration::from_secs(2));
    assert_eq!(response.destination_overview.country, "Japan");
    assert_eq!(response.suggested_attractions.len(), 5);
    assert_eq!(response.suggested_attractions[0].name, "Historic City Center");
    assert!(response.suggested_accommodations.is_empty());
}
