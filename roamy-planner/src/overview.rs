use std::collections::BTreeMap;
use roamy_core::Destination;
use crate::models::DestinationOverview;

const DEFAULT_DESCRIPTION: &str =
    "A beautiful destination offering rich culture, stunning landscapes, and unforgettable experiences.";
const DEFAULT_BEST_TIME: &str = "Year-round destination with seasonal variations";
const DEFAULT_CLIMATE: &str = "Temperate climate";
const DEFAULT_TIME_ZONE: &str = "Local time zone";
const DEFAULT_IMAGE: &str = "/api/images/default-destination.jpg";
const DEFAULT_RATING: f64 = 4.2;

const HIGHLIGHTS: [&str; 5] = [
    "Rich cultural heritage and history",
    "Stunning natural landscapes",
    "Delicious local cuisine",
    "Friendly local people",
    "Unique attractions and experiences",
];

pub fn build_overview(destination: &Destination, currency: &str) -> DestinationOverview {
    DestinationOverview {
        name: destination.name.clone(),
        country: destination.country.clone(),
        region: destination.city.clone(),
        description: or_default(&destination.description, DEFAULT_DESCRIPTION),
        highlights: HIGHLIGHTS.iter().map(|h| h.to_string()).collect(),
        best_time_to_visit: or_default(&destination.best_time_to_visit, DEFAULT_BEST_TIME),
        climate: or_default(&destination.climate, DEFAULT_CLIMATE),
        time_zone: or_default(&destination.time_zone, DEFAULT_TIME_ZONE),
        currency: currency.to_string(),
        languages: vec!["English".to_string(), "Local Language".to_string()],
        safety_rating: "Generally Safe".to_string(),
        average_rating: destination.average_rating.unwrap_or(DEFAULT_RATING),
        image_url: or_default(&destination.image_url, DEFAULT_IMAGE),
        top_interests: destination.popular_interests.iter().map(|i| i.as_str().to_string()).collect(),
        quick_facts: quick_facts(),
    }
}

fn or_default(value: &Option<String>, default: &str) -> String {
    value.clone().unwrap_or_else(|| default.to_string())
}

// No per-destination facts are stored yet
fn quick_facts() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("population".to_string(), "Population varies by region".to_string()),
        ("area".to_string(), "Area information available locally".to_string()),
        ("founded".to_string(), "Rich historical background".to_string()),
        ("elevation".to_string(), "Elevation varies by location".to_string()),
    ])
}
