use std::collections::BTreeMap;
use crate::models::TravelTips;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Generic advice, identical for every destination.
pub fn travel_tips() -> TravelTips {
    TravelTips {
        general_tips: strings(&[
            "Book accommodations in advance for better rates",
            "Learn basic local phrases",
            "Keep copies of important documents",
            "Research local customs and etiquette",
        ]),
        cultural_tips: strings(&[
            "Respect local customs and traditions",
            "Dress appropriately for religious sites",
            "Learn about tipping culture",
            "Be mindful of photography restrictions",
        ]),
        safety_tips: strings(&[
            "Stay aware of your surroundings",
            "Keep emergency contacts handy",
            "Use registered transportation services",
            "Avoid displaying expensive items",
        ]),
        budget_tips: strings(&[
            "Eat at local restaurants for authentic and affordable meals",
            "Use public transportation when safe and available",
            "Look for free walking tours and activities",
            "Book tours and activities online for better deals",
        ]),
        packing_tips: strings(&[
            "Pack light and versatile clothing",
            "Bring comfortable walking shoes",
            "Pack weather-appropriate items",
            "Don't forget chargers and adapters",
        ]),
        local_customs: strings(&[
            "Greeting customs vary by region",
            "Tipping practices differ globally",
            "Business hours may vary",
            "Religious and cultural holidays affect schedules",
        ]),
        emergency_info: BTreeMap::from([
            ("emergency".to_string(), "911".to_string()),
            ("police".to_string(), "Police: 100".to_string()),
            ("medical".to_string(), "Medical: 102".to_string()),
            ("tourism".to_string(), "Tourism Helpline: 1363".to_string()),
        ]),
        useful_apps: strings(&["Google Translate", "Maps.me (offline maps)", "TripAdvisor", "Local transportation apps"]),
        common_phrases: strings(&["Hello / Hi", "Thank you", "Please", "Excuse me / Sorry"]),
    }
}
