pub mod request;
pub mod models;
pub mod resolver;
pub mod overview;
pub mod attractions;
pub mod accommodations;
pub mod transport;
pub mod budget;
pub mod itinerary;
pub mod tips;
pub mod engine;
pub mod bounded;

pub use request::{BudgetLevel, SuggestionRequest, TripPlan};
pub use models::SuggestionResponse;
pub use resolver::{DestinationResolver, Resolution};
pub use engine::SuggestionEngine;
pub use bounded::StoreDeadline;
