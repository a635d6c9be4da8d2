use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use roamy_core::TravelInterest;

pub const DEFAULT_DURATION_DAYS: u32 = 7;
pub const DEFAULT_CURRENCY: &str = "USD";

/// Incoming suggestion request. Every field is optional on the wire;
/// `TripPlan::from_request` resolves the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SuggestionRequest {
    pub to_location: Option<String>,
    pub from_location: Option<String>,
    pub preferred_departure_date: Option<NaiveDate>,
    pub preferred_return_date: Option<NaiveDate>,
    pub duration_days: Option<i64>,
    pub number_of_travelers: Option<i64>,
    pub number_of_adults: Option<i64>,
    pub number_of_children: Option<i64>,
    /// budget, mid-range, luxury or custom
    pub budget_level: Option<String>,
    pub min_budget: Option<f64>,
    pub max_budget: Option<f64>,
    pub currency: Option<String>,
    pub interests: Option<Vec<String>>,
    pub accommodation_type: Option<String>,
    pub min_hotel_rating: Option<i64>,
    pub required_amenities: Option<Vec<String>>,
    pub preferred_transport_types: Option<Vec<String>>,
    pub transport_class: Option<String>,
    pub wheelchair_accessible: Option<bool>,
    pub family_friendly: Option<bool>,
    pub pet_friendly: Option<bool>,
    pub include_transport_options: Option<bool>,
    pub include_accommodation_options: Option<bool>,
}

impl SuggestionRequest {
    /// Origin-to-destination request with everything else defaulted.
    pub fn quick(from: &str, to: &str, budget_level: Option<&str>, interests: Vec<String>) -> Self {
        Self {
            to_location: Some(to.to_string()),
            from_location: Some(from.to_string()),
            budget_level: budget_level.map(str::to_string),
            interests: Some(interests),
            ..Default::default()
        }
    }

    /// Destination-only request without an origin, so no long-distance transport.
    pub fn for_destination(name: &str, budget_level: Option<&str>, interests: Vec<String>, duration_days: Option<i64>) -> Self {
        Self {
            to_location: Some(name.to_string()),
            budget_level: budget_level.map(str::to_string),
            interests: Some(interests),
            duration_days,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetLevel {
    Budget,
    MidRange,
    Luxury,
    Custom,
}

impl BudgetLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetLevel::Budget => "budget",
            BudgetLevel::MidRange => "mid-range",
            BudgetLevel::Luxury => "luxury",
            BudgetLevel::Custom => "custom",
        }
    }

    /// Absent means mid-range; anything unrecognised is treated as custom.
    pub fn from_label(label: Option<&str>) -> Self {
        let Some(label) = label.map(str::trim).filter(|l| !l.is_empty()) else {
            return BudgetLevel::MidRange;
        };
        match label.to_ascii_lowercase().as_str() {
            "budget" => BudgetLevel::Budget,
            "mid-range" | "midrange" | "mid_range" => BudgetLevel::MidRange,
            "luxury" => BudgetLevel::Luxury,
            _ => BudgetLevel::Custom,
        }
    }
}

impl fmt::Display for BudgetLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request with every default applied. All scoring works from this.
#[derive(Debug, Clone)]
pub struct TripPlan {
    pub destination: String,
    pub origin: Option<String>,
    pub departure_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
    pub duration_days: u32,
    pub travelers: u32,
    pub adults: u32,
    pub children: u32,
    pub budget_level: BudgetLevel,
    pub currency: String,
    /// Trimmed free-text interests, in request order.
    pub interests: Vec<String>,
    /// The subset of `interests` naming a known tag, without duplicates.
    pub interest_tags: Vec<TravelInterest>,
    pub include_accommodations: bool,
    pub include_transport: bool,
}

impl TripPlan {
    pub fn from_request(request: &SuggestionRequest) -> Self {
        let destination = request.to_location.as_deref().map(str::trim).unwrap_or_default().to_string();
        let origin = request
            .from_location
            .as_deref()
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string);

        let duration_days = request
            .duration_days
            .unwrap_or(DEFAULT_DURATION_DAYS as i64)
            .clamp(1, u32::MAX as i64) as u32;

        let currency = request
            .currency
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CURRENCY)
            .to_ascii_uppercase();

        let interests: Vec<String> = request
            .interests
            .iter()
            .flatten()
            .map(|i| i.trim())
            .filter(|i| !i.is_empty())
            .map(str::to_string)
            .collect();

        let mut interest_tags = Vec::new();
        for tag in interests.iter().filter_map(|i| TravelInterest::parse(i)) {
            if !interest_tags.contains(&tag) {
                interest_tags.push(tag);
            }
        }

        Self {
            destination,
            origin,
            departure_date: request.preferred_departure_date,
            return_date: request.preferred_return_date,
            duration_days,
            travelers: headcount(request.number_of_travelers, 1, 1),
            adults: headcount(request.number_of_adults, 1, 0),
            children: headcount(request.number_of_children, 0, 0),
            budget_level: BudgetLevel::from_label(request.budget_level.as_deref()),
            currency,
            interests,
            interest_tags,
            include_accommodations: request.include_accommodation_options.unwrap_or(true),
            include_transport: request.include_transport_options.unwrap_or(true),
        }
    }
}

fn headcount(value: Option<i64>, default: u32, min: u32) -> u32 {
    value.map(|v| v.clamp(min as i64, u32::MAX as i64) as u32).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_request_gets_defaults() {
        let plan = TripPlan::from_request(&SuggestionRequest::default());
        assert_eq!(plan.destination, "");
        assert_eq!(plan.origin, None);
        assert_eq!(plan.duration_days, 7);
        assert_eq!((plan.travelers, plan.adults, plan.children), (1, 1, 0));
        assert_eq!(plan.budget_level, BudgetLevel::MidRange);
        assert_eq!(plan.currency, "USD");
        assert!(plan.interests.is_empty());
        assert!(plan.include_accommodations && plan.include_transport);
    }

    #[test]
    fn test_duration_clamped_to_at_least_one_day() {
        for raw in [0, -4] {
            let request = SuggestionRequest { duration_days: Some(raw), ..Default::default() };
            assert_eq!(TripPlan::from_request(&request).duration_days, 1);
        }
        for raw in [365, 400, 100_000] {
            let request = SuggestionRequest { duration_days: Some(raw), ..Default::default() };
            assert_eq!(TripPlan::from_request(&request).duration_days as i64, raw);
        }
        let request = SuggestionRequest { duration_days: Some(i64::MAX), ..Default::default() };
        assert_eq!(TripPlan::from_request(&request).duration_days, u32::MAX);
    }

    #[test]
    fn test_budget_labels() {
        assert_eq!(BudgetLevel::from_label(None), BudgetLevel::MidRange);
        assert_eq!(BudgetLevel::from_label(Some("  ")), BudgetLevel::MidRange);
        assert_eq!(BudgetLevel::from_label(Some("Budget")), BudgetLevel::Budget);
        assert_eq!(BudgetLevel::from_label(Some("LUXURY")), BudgetLevel::Luxury);
        assert_eq!(BudgetLevel::from_label(Some("backpacker")), BudgetLevel::Custom);
        assert_eq!(BudgetLevel::MidRange.to_string(), "mid-range");
    }

    #[test]
    fn test_interests_and_origin_are_cleaned() {
        let request: SuggestionRequest = serde_json::from_value(serde_json::json!({
            "toLocation": "  Paris ",
            "fromLocation": "   ",
            "currency": "eur",
            "interests": ["culture", " ", "Culture", "sightseeing", " food "]
        }))
        .unwrap();

        let plan = TripPlan::from_request(&request);
        assert_eq!(plan.destination, "Paris");
        assert_eq!(plan.origin, None);
        assert_eq!(plan.currency, "EUR");
        assert_eq!(plan.interests, vec!["culture", "Culture", "sightseeing", "food"]);
        assert_eq!(plan.interest_tags, vec![TravelInterest::Culture, TravelInterest::Food]);
    }

    #[test]
    fn test_convenience_constructors() {
        let quick = TripPlan::from_request(&SuggestionRequest::quick("London", "Paris", Some("luxury"), vec![]));
        assert_eq!(quick.origin.as_deref(), Some("London"));
        assert_eq!(quick.budget_level, BudgetLevel::Luxury);
        assert_eq!(quick.duration_days, 7);

        let local = TripPlan::from_request(&SuggestionRequest::for_destination("Goa", None, vec!["beach".into()], Some(3)));
        assert_eq!(local.origin, None);
        assert_eq!(local.duration_days, 3);
        assert_eq!(local.interest_tags, vec![TravelInterest::Beach]);
    }
}
