use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Everything generated for one suggestion request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionResponse {
    pub destination_overview: DestinationOverview,
    pub suggested_attractions: Vec<SuggestedAttraction>,
    pub suggested_accommodations: Vec<SuggestedAccommodation>,
    pub suggested_transport_options: Vec<SuggestedTransport>,
    pub budget_breakdown: BudgetBreakdown,
    pub suggested_itinerary: Vec<ItineraryDay>,
    pub travel_tips: TravelTips,
    pub metadata: SuggestionMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationOverview {
    pub name: String,
    pub country: String,
    pub region: String,
    pub description: String,
    pub highlights: Vec<String>,
    pub best_time_to_visit: String,
    pub climate: String,
    pub time_zone: String,
    pub currency: String,
    pub languages: Vec<String>,
    pub safety_rating: String,
    pub average_rating: f64,
    pub image_url: String,
    pub top_interests: Vec<String>,
    pub quick_facts: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedAttraction {
    pub name: String,
    #[serde(rename = "type")]
    pub attraction_type: String,
    /// must-see, popular, hidden-gem or local-experience
    pub category: String,
    pub description: Option<String>,
    pub matching_interests: Vec<String>,
    pub rating: f64,
    pub price_range: String,
    pub estimated_cost: Decimal,
    pub duration: String,
    pub best_time_to_visit: Option<String>,
    pub difficulty: String,
    pub wheelchair_accessible: bool,
    pub family_friendly: bool,
    pub booking_required: String,
    pub location: String,
    pub image_urls: Vec<String>,
    pub practical_info: BTreeMap<String, String>,
    /// 0-10, higher is more recommended
    pub priority_score: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedAccommodation {
    /// Hotel id, kept for booking
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub accommodation_type: String,
    pub category: String,
    pub description: Option<String>,
    pub location: String,
    pub price_per_night: Decimal,
    pub total_estimated_cost: Decimal,
    pub price_range: String,
    pub rating: f64,
    pub star_rating: u8,
    pub amenities: Vec<String>,
    pub nearby_attractions: Vec<String>,
    pub booking_url: String,
    pub breakfast_included: bool,
    pub free_wifi: bool,
    pub free_cancellation: bool,
    pub check_in_time: String,
    pub check_out_time: String,
    pub image_urls: Vec<String>,
    pub policies: BTreeMap<String, String>,
    pub priority_score: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedTransport {
    #[serde(rename = "type")]
    pub transport_type: String,
    /// international or local
    pub category: String,
    pub provider: String,
    pub route: String,
    pub description: String,
    pub estimated_cost: Decimal,
    pub price_range: String,
    pub duration: String,
    pub frequency: String,
    pub advantages: Vec<String>,
    pub considerations: Vec<String>,
    pub booking_advice: String,
    pub advance_booking_required: bool,
    pub booking_url: Option<String>,
    pub priority_score: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetBreakdown {
    pub currency: String,
    pub accommodation: BudgetCategory,
    pub transport: BudgetCategory,
    pub activities: BudgetCategory,
    pub meals: BudgetCategory,
    pub shopping: BudgetCategory,
    pub miscellaneous: BudgetCategory,
    pub total_budget: BudgetSummary,
    pub budget_tips: Vec<BudgetTip>,
}

impl BudgetBreakdown {
    pub fn categories(&self) -> [&BudgetCategory; 6] {
        [
            &self.accommodation,
            &self.transport,
            &self.activities,
            &self.meals,
            &self.shopping,
            &self.miscellaneous,
        ]
    }
}

/// Daily amounts for one spending category
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetCategory {
    pub category: String,
    pub budget_option: Decimal,
    pub mid_range_option: Decimal,
    pub luxury_option: Decimal,
    pub recommended: Decimal,
    pub notes: String,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    pub budget_total: Decimal,
    pub mid_range_total: Decimal,
    pub luxury_total: Decimal,
    pub recommended_total: Decimal,
    pub budget_level: String,
    pub duration_days: u32,
    pub per_person_per_day: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetTip {
    pub tip: String,
    pub category: String,
    pub potential_savings: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryDay {
    pub day_number: u32,
    pub date: String,
    pub theme: String,
    pub activities: Vec<ItineraryActivity>,
    pub estimated_daily_cost: Decimal,
    pub transportation_notes: String,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryActivity {
    pub time: String,
    pub activity: String,
    pub location: String,
    pub description: Option<String>,
    pub estimated_cost: Decimal,
    pub duration: String,
    /// attraction or meal
    #[serde(rename = "type")]
    pub activity_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelTips {
    pub general_tips: Vec<String>,
    pub cultural_tips: Vec<String>,
    pub safety_tips: Vec<String>,
    pub budget_tips: Vec<String>,
    pub packing_tips: Vec<String>,
    pub local_customs: Vec<String>,
    pub emergency_info: BTreeMap<String, String>,
    pub useful_apps: Vec<String>,
    pub common_phrases: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionMetadata {
    pub request_id: Uuid,
    pub processing_time_ms: u64,
    pub suggestion_algorithm: String,
    pub total_suggestions: usize,
    pub last_updated: DateTime<Utc>,
    pub data_freshness: String,
    /// internal-db when stored records were used, sample-data when canned content was
    pub data_sources: Vec<String>,
}
