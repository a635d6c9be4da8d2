use rust_decimal::Decimal;
use crate::models::SuggestedTransport;
use crate::request::TripPlan;

/// Fixed transport options: long-distance ones only when the trip has an origin,
/// local ones always. Best first.
pub fn suggest_transport(plan: &TripPlan) -> Vec<SuggestedTransport> {
    let mut options = Vec::new();
    if let Some(origin) = &plan.origin {
        let route = format!("{} → {}", origin, plan.destination);
        options.push(flight(route.clone()));
        options.push(train(route));
    }
    options.push(public_transport());
    options.push(taxi());

    options.sort_by(|a, b| b.priority_score.cmp(&a.priority_score));
    options
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn flight(route: String) -> SuggestedTransport {
    SuggestedTransport {
        transport_type: "flight".to_string(),
        category: "international".to_string(),
        provider: "Multiple Airlines".to_string(),
        route,
        description: "Direct and connecting flights available".to_string(),
        estimated_cost: Decimal::from(500),
        price_range: "$400 - $800".to_string(),
        duration: "6-12 hours (depending on connections)".to_string(),
        frequency: "Multiple daily flights".to_string(),
        advantages: strings(&["Fastest option", "Multiple airline choices", "Various price points"]),
        considerations: strings(&["Airport transfers needed", "Advance booking recommended", "Baggage restrictions"]),
        booking_advice: "Book 6-8 weeks in advance for best prices".to_string(),
        advance_booking_required: true,
        booking_url: Some("https://flights.example.com".to_string()),
        priority_score: 9,
    }
}

fn train(route: String) -> SuggestedTransport {
    SuggestedTransport {
        transport_type: "train".to_string(),
        category: "international".to_string(),
        provider: "Rail Networks".to_string(),
        route,
        description: "Scenic rail journey with comfortable seating".to_string(),
        estimated_cost: Decimal::from(200),
        price_range: "$150 - $300".to_string(),
        duration: "8-15 hours".to_string(),
        frequency: "Daily departures".to_string(),
        advantages: strings(&["Scenic views", "No baggage restrictions", "City center to city center"]),
        considerations: strings(&["Longer travel time", "Limited routes", "Advance booking recommended"]),
        booking_advice: "Book early for sleeper compartments".to_string(),
        advance_booking_required: true,
        booking_url: Some("https://rail.example.com".to_string()),
        priority_score: 7,
    }
}

fn public_transport() -> SuggestedTransport {
    SuggestedTransport {
        transport_type: "local-transport".to_string(),
        category: "local".to_string(),
        provider: "Public Transport".to_string(),
        route: "City-wide network".to_string(),
        description: "Buses, metro, and trams covering the city".to_string(),
        estimated_cost: Decimal::from(2),
        price_range: "$1 - $5 per ride".to_string(),
        duration: "Varies by route".to_string(),
        frequency: "Regular schedules".to_string(),
        advantages: strings(&["Cost-effective", "Extensive coverage", "Eco-friendly"]),
        considerations: strings(&["Can be crowded", "Limited late-night service", "Language barriers"]),
        booking_advice: "Get a day pass or travel card".to_string(),
        advance_booking_required: false,
        booking_url: None,
        priority_score: 8,
    }
}

fn taxi() -> SuggestedTransport {
    SuggestedTransport {
        transport_type: "taxi".to_string(),
        category: "local".to_string(),
        provider: "Taxi & Ride-share".to_string(),
        route: "Door-to-door service".to_string(),
        description: "Convenient point-to-point transport".to_string(),
        estimated_cost: Decimal::from(15),
        price_range: "$10 - $30 per ride".to_string(),
        duration: "Direct routes".to_string(),
        frequency: "On-demand".to_string(),
        advantages: strings(&["Door-to-door", "Available 24/7", "No walking required"]),
        considerations: strings(&["More expensive", "Traffic delays", "Surge pricing"]),
        booking_advice: "Use ride-share apps for transparency".to_string(),
        advance_booking_required: false,
        booking_url: None,
        priority_score: 6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::SuggestionRequest;

    #[test]
    fn test_with_origin_all_four_sorted() {
        let plan = TripPlan::from_request(&SuggestionRequest::quick("London", "Paris", None, vec![]));
        let options = suggest_transport(&plan);

        let types: Vec<&str> = options.iter().map(|o| o.transport_type.as_str()).collect();
        assert_eq!(types, vec!["flight", "local-transport", "train", "taxi"]);
        let scores: Vec<i32> = options.iter().map(|o| o.priority_score).collect();
        assert_eq!(scores, vec![9, 8, 7, 6]);
        assert_eq!(options[0].route, "London → Paris");
    }

    #[test]
    fn test_without_origin_only_local() {
        let plan = TripPlan::from_request(&SuggestionRequest::for_destination("Paris", None, vec![], None));
        let options = suggest_transport(&plan);
        assert_eq!(options.len(), 2);
        assert!(options.iter().all(|o| o.category == "local"));
        assert_eq!(options[0].provider, "Public Transport");
    }
}
