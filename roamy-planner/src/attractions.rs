use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};
use roamy_core::repository::AttractionRepository;
use roamy_core::{Attraction, Destination};
use crate::bounded::StoreDeadline;
use crate::models::SuggestedAttraction;
use crate::request::TripPlan;

const BASE_SCORE: i32 = 5;
const MAX_SCORE: i32 = 10;
const INTEREST_BONUS: i32 = 2;
const SAMPLE_SCORE: i32 = 8;
const ASSUMED_ENTRY_FEE: i64 = 15;
const DEFAULT_RATING: f64 = 4.0;
const DEFAULT_DURATION: &str = "2-3 hours";
const DEFAULT_IMAGE: &str = "/api/images/default-attraction.jpg";

const SAMPLES: [(&str, &str); 5] = [
    ("Historic City Center", "must-see"),
    ("Local Market", "popular"),
    ("Scenic Viewpoint", "hidden-gem"),
    ("Cultural Museum", "popular"),
    ("Traditional Restaurant", "local-experience"),
];

/// Attraction suggestions plus whether they came from the store or the canned samples.
pub struct ScoredAttractions {
    pub suggestions: Vec<SuggestedAttraction>,
    pub from_samples: bool,
}

pub struct AttractionScorer {
    attractions: Arc<dyn AttractionRepository>,
    deadline: StoreDeadline,
}

impl AttractionScorer {
    pub fn new(attractions: Arc<dyn AttractionRepository>, deadline: StoreDeadline) -> Self {
        Self { attractions, deadline }
    }

    pub async fn score(&self, destination: &Destination, plan: &TripPlan) -> ScoredAttractions {
        let stored = match destination.persisted_id() {
            Some(id) => self.load(id, destination, plan).await,
            None => Vec::new(),
        };

        let mut suggestions: Vec<SuggestedAttraction> = stored.iter().map(|a| suggest(a, &plan.interests)).collect();
        let from_samples = suggestions.is_empty();
        if from_samples {
            info!("Using sample attractions for destination: {}", destination.name);
            suggestions = sample_attractions(&destination.name);
        }

        // Stable, so equal scores keep store order
        suggestions.sort_by(|a, b| b.priority_score.cmp(&a.priority_score));
        ScoredAttractions { suggestions, from_samples }
    }

    async fn load(&self, destination_id: i64, destination: &Destination, plan: &TripPlan) -> Vec<Attraction> {
        let attractions = match self.deadline.run(self.attractions.find_active_by_destination(destination_id)).await {
            Ok(attractions) => attractions,
            Err(e) => {
                warn!("Failed to load attractions for destination {}: {}", destination.name, e);
                return Vec::new();
            }
        };

        if plan.interest_tags.is_empty() {
            return attractions;
        }
        attractions.into_iter().filter(|a| a.matches_any(&plan.interest_tags)).collect()
    }
}

/// 5 + whole rating points + 2 per requested interest the attraction carries, within 0..=10.
pub fn attraction_score(attraction: &Attraction, requested: &[String]) -> i32 {
    let rating = attraction.average_rating.map(rating_points).unwrap_or(0);
    let matches = attraction.count_matching(requested) as i32;
    (BASE_SCORE + rating + INTEREST_BONUS * matches).clamp(0, MAX_SCORE)
}

/// Whole rating points, bounded so that no rating can push the sum past the score range.
fn rating_points(rating: f64) -> i32 {
    rating.floor().clamp(-(MAX_SCORE as f64), MAX_SCORE as f64) as i32
}

pub fn category_for(score: i32) -> &'static str {
    match score {
        s if s >= 8 => "must-see",
        s if s >= 6 => "popular",
        s if s >= 4 => "hidden-gem",
        _ => "local-experience",
    }
}

pub fn price_range(attraction: &Attraction) -> &'static str {
    if attraction.free_entry {
        return "Free";
    }
    let fee = attraction.entry_fee.unwrap_or_else(|| Decimal::from(ASSUMED_ENTRY_FEE));
    if fee <= Decimal::from(10) {
        "$ - Budget"
    } else if fee <= Decimal::from(30) {
        "$$ - Moderate"
    } else {
        "$$$ - Premium"
    }
}

fn suggest(attraction: &Attraction, requested: &[String]) -> SuggestedAttraction {
    let score = attraction_score(attraction, requested);
    let duration = attraction
        .recommended_duration_hours
        .map(|h| format!("{} hours", h))
        .unwrap_or_else(|| DEFAULT_DURATION.to_string());

    let mut practical_info = BTreeMap::new();
    practical_info.insert("address".to_string(), attraction.address.clone());
    if let Some(hours) = &attraction.opening_hours {
        practical_info.insert("openingHours".to_string(), hours.clone());
    }
    if let Some(best) = &attraction.best_time_to_visit {
        practical_info.insert("bestTimeToVisit".to_string(), best.clone());
    }
    if attraction.recommended_duration_hours.is_some() {
        practical_info.insert("duration".to_string(), duration.clone());
    }

    let estimated_cost = if attraction.free_entry {
        Decimal::ZERO
    } else {
        attraction.entry_fee.unwrap_or(Decimal::ZERO)
    };

    let image_urls = if attraction.image_urls.is_empty() {
        vec![DEFAULT_IMAGE.to_string()]
    } else {
        attraction.image_urls.clone()
    };

    SuggestedAttraction {
        name: attraction.name.clone(),
        attraction_type: attraction
            .attraction_type
            .map(|t| t.as_str().to_string())
            .unwrap_or_else(|| "ATTRACTION".to_string()),
        category: category_for(score).to_string(),
        description: attraction.description.clone(),
        matching_interests: attraction.matching_interests.iter().map(|i| i.as_str().to_string()).collect(),
        rating: attraction.average_rating.unwrap_or(DEFAULT_RATING),
        price_range: price_range(attraction).to_string(),
        estimated_cost,
        duration,
        best_time_to_visit: attraction.best_time_to_visit.clone(),
        difficulty: "Easy".to_string(),
        wheelchair_accessible: attraction.wheelchair_accessible,
        family_friendly: attraction.kids_friendly,
        booking_required: if attraction.free_entry { "Not Required" } else { "Recommended" }.to_string(),
        location: attraction.address.clone(),
        image_urls,
        practical_info,
        priority_score: score,
    }
}

/// Canned attractions shown when the catalog has nothing for a destination.
pub fn sample_attractions(location: &str) -> Vec<SuggestedAttraction> {
    SAMPLES
        .iter()
        .map(|(name, category)| SuggestedAttraction {
            name: name.to_string(),
            attraction_type: "ATTRACTION".to_string(),
            category: category.to_string(),
            description: Some(format!("A wonderful place to explore in {}", location)),
            matching_interests: vec!["CULTURE".to_string(), "SIGHTSEEING".to_string()],
            rating: 4.2,
            price_range: "$$ - Moderate".to_string(),
            estimated_cost: Decimal::from(ASSUMED_ENTRY_FEE),
            duration: DEFAULT_DURATION.to_string(),
            best_time_to_visit: Some("Morning or afternoon".to_string()),
            difficulty: "Easy".to_string(),
            wheelchair_accessible: true,
            family_friendly: true,
            booking_required: "Not Required".to_string(),
            location: location.to_string(),
            image_urls: vec![DEFAULT_IMAGE.to_string()],
            practical_info: BTreeMap::from([
                ("location".to_string(), location.to_string()),
                ("duration".to_string(), DEFAULT_DURATION.to_string()),
            ]),
            priority_score: SAMPLE_SCORE,
        })
        .collect()
}
