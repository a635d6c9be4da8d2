use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};
use roamy_core::repository::HotelRepository;
use roamy_core::{Amenity, Destination, Hotel, StoreResult};
use crate::bounded::StoreDeadline;
use crate::models::SuggestedAccommodation;
use crate::request::TripPlan;

const BASE_SCORE: i32 = 5;
const MAX_SCORE: i32 = 10;
const DEFAULT_STARS: u8 = 3;
const DEFAULT_RATING: f64 = 4.0;
const CHECK_IN: &str = "3:00 PM";
const CHECK_OUT: &str = "11:00 AM";
const DEFAULT_IMAGE: &str = "/api/images/default-hotel.jpg";

/// Hotel suggestions for a destination. Unlike attractions there is no
/// sample fallback: no stored hotels means no suggestions.
pub struct AccommodationScorer {
    hotels: Arc<dyn HotelRepository>,
    deadline: StoreDeadline,
}

impl AccommodationScorer {
    pub fn new(hotels: Arc<dyn HotelRepository>, deadline: StoreDeadline) -> Self {
        Self { hotels, deadline }
    }

    pub async fn score(&self, destination: &Destination, plan: &TripPlan) -> Vec<SuggestedAccommodation> {
        let Some(id) = destination.persisted_id() else {
            info!("No stored hotels for unpersisted destination: {}", destination.name);
            return Vec::new();
        };

        let hotels = match self.load(id).await {
            Ok(hotels) => hotels,
            Err(e) => {
                warn!("Failed to load hotels for destination {}: {}", destination.name, e);
                return Vec::new();
            }
        };

        let mut suggestions: Vec<SuggestedAccommodation> = hotels
            .iter()
            .filter(|h| h.available)
            .map(|h| suggest(h, plan.duration_days))
            .collect();

        info!(
            "Generated {} accommodation suggestions from {} hotels for destination: {}",
            suggestions.len(),
            hotels.len(),
            destination.name
        );

        suggestions.sort_by(|a, b| b.priority_score.cmp(&a.priority_score));
        suggestions
    }

    async fn load(&self, destination_id: i64) -> StoreResult<Vec<Hotel>> {
        let ranked = self.deadline.run(self.hotels.find_available_ranked(destination_id)).await?;
        if !ranked.is_empty() {
            return Ok(ranked);
        }
        self.deadline.run(self.hotels.find_by_destination(destination_id)).await
    }
}

/// 5 + whole rating points + star count, capped at 10.
pub fn accommodation_score(hotel: &Hotel) -> i32 {
    let rating = hotel
        .average_rating
        .map(|r| r.floor().clamp(-(MAX_SCORE as f64), MAX_SCORE as f64) as i32)
        .unwrap_or(0);
    let stars = hotel.star_rating.map(|s| s.value() as i32).unwrap_or(0);
    (BASE_SCORE + rating + stars).clamp(0, MAX_SCORE)
}

/// Nightly price tier.
pub fn price_tier(price_per_night: Decimal) -> &'static str {
    if price_per_night <= Decimal::from(50) {
        "budget"
    } else if price_per_night <= Decimal::from(150) {
        "mid-range"
    } else {
        "luxury"
    }
}

fn suggest(hotel: &Hotel, nights: u32) -> SuggestedAccommodation {
    let tier = price_tier(hotel.price_per_night);
    let image_urls = if hotel.image_urls.is_empty() {
        vec![DEFAULT_IMAGE.to_string()]
    } else {
        hotel.image_urls.clone()
    };

    SuggestedAccommodation {
        id: hotel.id,
        name: hotel.name.clone(),
        accommodation_type: "Hotel".to_string(),
        category: tier.to_string(),
        description: hotel.description.clone(),
        location: hotel.address.clone(),
        price_per_night: hotel.price_per_night,
        total_estimated_cost: hotel.price_per_night * Decimal::from(nights),
        price_range: tier.to_string(),
        rating: hotel.average_rating.unwrap_or(DEFAULT_RATING),
        star_rating: hotel.star_rating.map(|s| s.value()).unwrap_or(DEFAULT_STARS),
        amenities: hotel.amenities.iter().map(|a| a.as_str().to_string()).collect(),
        nearby_attractions: vec!["Main attractions within walking distance".to_string()],
        booking_url: format!("https://booking.example.com/hotel/{}", hotel.id),
        breakfast_included: hotel.has_amenity(Amenity::BreakfastIncluded),
        free_wifi: hotel.has_amenity(Amenity::Wifi),
        free_cancellation: true,
        check_in_time: CHECK_IN.to_string(),
        check_out_time: CHECK_OUT.to_string(),
        image_urls,
        policies: policies(),
        priority_score: accommodation_score(hotel),
    }
}

fn policies() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("checkIn".to_string(), CHECK_IN.to_string()),
        ("checkOut".to_string(), CHECK_OUT.to_string()),
        ("cancellation".to_string(), "Free cancellation up to 24 hours before check-in".to_string()),
        ("pets".to_string(), "Pet policy varies by property".to_string()),
    ])
}
