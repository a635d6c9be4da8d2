use chrono::Utc;
use std::time::Instant;
use tracing::info;
use uuid::Uuid;
use roamy_core::Catalog;
use roamy_store::SuggestionConfig;
use crate::accommodations::AccommodationScorer;
use crate::attractions::AttractionScorer;
use crate::bounded::StoreDeadline;
use crate::budget::build_budget;
use crate::itinerary::compose_itinerary;
use crate::models::{SuggestionMetadata, SuggestionResponse};
use crate::overview::build_overview;
use crate::request::{SuggestionRequest, TripPlan};
use crate::resolver::DestinationResolver;
use crate::tips::travel_tips;
use crate::transport::suggest_transport;

/// Builds the full suggestion response for a request. Holds no per-request state.
pub struct SuggestionEngine {
    resolver: DestinationResolver,
    attractions: AttractionScorer,
    accommodations: AccommodationScorer,
    algorithm: String,
}

impl SuggestionEngine {
    pub fn new(catalog: Catalog, config: &SuggestionConfig) -> Self {
        let deadline = StoreDeadline::from_millis(config.store_timeout_ms);
        Self {
            resolver: DestinationResolver::new(catalog.destinations, deadline),
            attractions: AttractionScorer::new(catalog.attractions, deadline),
            accommodations: AccommodationScorer::new(catalog.hotels, deadline),
            algorithm: config.algorithm.clone(),
        }
    }

    /// Always succeeds; store trouble shows up as placeholder or sample content.
    pub async fn generate(&self, request: &SuggestionRequest) -> SuggestionResponse {
        let started = Instant::now();
        let plan = TripPlan::from_request(request);
        info!("Generating travel suggestions for: {}", plan.destination);

        let (destination, _) = self.resolver.resolve(&plan.destination).await;

        let (attractions, accommodations) = tokio::join!(self.attractions.score(&destination, &plan), async {
            if plan.include_accommodations {
                self.accommodations.score(&destination, &plan).await
            } else {
                Vec::new()
            }
        });

        let transport = if plan.include_transport { suggest_transport(&plan) } else { Vec::new() };
        let itinerary = compose_itinerary(plan.duration_days, &attractions.suggestions);

        let mut data_sources = Vec::new();
        if destination.is_persisted() {
            data_sources.push("internal-db".to_string());
        }
        if attractions.from_samples {
            data_sources.push("sample-data".to_string());
        }

        let total_suggestions = attractions.suggestions.len() + accommodations.len() + transport.len();
        let metadata = SuggestionMetadata {
            request_id: Uuid::new_v4(),
            processing_time_ms: started.elapsed().as_millis() as u64,
            suggestion_algorithm: self.algorithm.clone(),
            total_suggestions,
            last_updated: Utc::now(),
            data_freshness: "real-time".to_string(),
            data_sources,
        };

        info!(
            "Generated {} suggestions for {} in {} ms",
            total_suggestions, destination.name, metadata.processing_time_ms
        );

        SuggestionResponse {
            destination_overview: build_overview(&destination, &plan.currency),
            suggested_attractions: attractions.suggestions,
            suggested_accommodations: accommodations,
            suggested_transport_options: transport,
            budget_breakdown: build_budget(&plan),
            suggested_itinerary: itinerary,
            travel_tips: travel_tips(),
            metadata,
        }
    }
}
