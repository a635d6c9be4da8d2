use rust_decimal::Decimal;
use crate::models::{ItineraryActivity, ItineraryDay, SuggestedAttraction};

pub const DAY_THEMES: [&str; 7] = [
    "Arrival and City Orientation",
    "Cultural Exploration",
    "Adventure and Nature",
    "Local Experiences",
    "Relaxation and Shopping",
    "Hidden Gems Discovery",
    "Farewell and Departure",
];

const DAY_TIPS: [&str; 3] = ["Start early to avoid crowds", "Carry water and snacks", "Wear comfortable shoes"];

/// Theme of a 1-based trip day. Day 0 is treated as day 1.
pub fn theme_for(day: u32) -> &'static str {
    DAY_THEMES[(day.max(1) as usize - 1) % DAY_THEMES.len()]
}

/// One day per trip day. Attractions rotate, so they repeat on trips longer than the list.
pub fn compose_itinerary(duration_days: u32, attractions: &[SuggestedAttraction]) -> Vec<ItineraryDay> {
    (1..=duration_days).map(|day| compose_day(day, attractions)).collect()
}

fn compose_day(day: u32, attractions: &[SuggestedAttraction]) -> ItineraryDay {
    let mut activities = vec![fixed(
        "09:00",
        "Breakfast at local café",
        "Near accommodation",
        "Start the day with local breakfast",
        15,
        "1 hour",
        "meal",
    )];

    if !attractions.is_empty() {
        let attraction = &attractions[(day as usize - 1) % attractions.len()];
        activities.push(ItineraryActivity {
            time: "10:30".to_string(),
            activity: attraction.name.clone(),
            location: attraction.location.clone(),
            description: attraction.description.clone(),
            estimated_cost: attraction.estimated_cost,
            duration: attraction.duration.clone(),
            activity_type: "attraction".to_string(),
        });
    }

    activities.push(fixed("13:00", "Lunch at local restaurant", "City center", "Try local cuisine", 25, "1.5 hours", "meal"));
    activities.push(fixed(
        "15:00",
        "Explore local markets",
        "Traditional market area",
        "Shopping and cultural experience",
        20,
        "2 hours",
        "attraction",
    ));

    let estimated_daily_cost = activities.iter().map(|a| a.estimated_cost).sum::<Decimal>();

    ItineraryDay {
        day_number: day,
        date: format!("Day {}", day),
        theme: theme_for(day).to_string(),
        activities,
        estimated_daily_cost,
        transportation_notes: "Use public transport or walking".to_string(),
        tips: DAY_TIPS.iter().map(|t| t.to_string()).collect(),
    }
}

fn fixed(time: &str, activity: &str, location: &str, description: &str, cost: i64, duration: &str, kind: &str) -> ItineraryActivity {
    ItineraryActivity {
        time: time.to_string(),
        activity: activity.to_string(),
        location: location.to_string(),
        description: Some(description.to_string()),
        estimated_cost: Decimal::from(cost),
        duration: duration.to_string(),
        activity_type: kind.to_string(),
    }
}
