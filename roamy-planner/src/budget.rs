use rust_decimal::Decimal;
use crate::models::{BudgetBreakdown, BudgetCategory, BudgetSummary, BudgetTip};
use crate::request::TripPlan;

/// Daily base amounts in the request currency. Never converted.
const ACCOMMODATION: i64 = 50;
const TRANSPORT: i64 = 30;
const ACTIVITIES: i64 = 40;
const MEALS: i64 = 35;
const SHOPPING: i64 = 25;
const MISCELLANEOUS: i64 = 20;

const CATEGORY_TIPS: [&str; 3] = ["Look for deals and discounts", "Compare prices online", "Consider alternatives"];

/// 2.5x
fn mid_range(base: Decimal) -> Decimal {
    base * Decimal::new(25, 1)
}

/// 5.0x
fn luxury(base: Decimal) -> Decimal {
    base * Decimal::new(50, 1)
}

pub fn build_budget(plan: &TripPlan) -> BudgetBreakdown {
    let daily_budget = Decimal::from(ACCOMMODATION + TRANSPORT + ACTIVITIES + MEALS + SHOPPING + MISCELLANEOUS);
    let daily_mid_range = mid_range(daily_budget);
    let daily_luxury = luxury(daily_budget);
    let days = Decimal::from(plan.duration_days);

    let total_budget = BudgetSummary {
        budget_total: daily_budget * days,
        mid_range_total: daily_mid_range * days,
        luxury_total: daily_luxury * days,
        recommended_total: daily_mid_range * days,
        budget_level: plan.budget_level.as_str().to_string(),
        duration_days: plan.duration_days,
        // Whole party per day; travellers are not split out
        per_person_per_day: daily_mid_range,
    };

    BudgetBreakdown {
        currency: plan.currency.clone(),
        accommodation: category("Accommodation", ACCOMMODATION, "Hotels, hostels, and alternative lodging"),
        transport: category("Transport", TRANSPORT, "Flights, local transport, and transfers"),
        activities: category("Activities", ACTIVITIES, "Attractions, tours, and experiences"),
        meals: category("Meals", MEALS, "Restaurants, street food, and groceries"),
        shopping: category("Shopping", SHOPPING, "Souvenirs and local products"),
        miscellaneous: category("Miscellaneous", MISCELLANEOUS, "Tips, emergency fund, and extras"),
        total_budget,
        budget_tips: budget_tips(),
    }
}

fn category(name: &str, base: i64, notes: &str) -> BudgetCategory {
    let base = Decimal::from(base);
    BudgetCategory {
        category: name.to_string(),
        budget_option: base,
        mid_range_option: mid_range(base),
        luxury_option: luxury(base),
        recommended: mid_range(base),
        notes: notes.to_string(),
        tips: CATEGORY_TIPS.iter().map(|t| t.to_string()).collect(),
    }
}

fn budget_tips() -> Vec<BudgetTip> {
    [
        ("Eat at local restaurants instead of tourist areas", "meals", 20),
        ("Use public transportation", "transport", 15),
        ("Book accommodations in advance", "accommodation", 30),
    ]
    .into_iter()
    .map(|(tip, category, savings)| BudgetTip {
        tip: tip.to_string(),
        category: category.to_string(),
        potential_savings: Decimal::from(savings),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{BudgetLevel, SuggestionRequest};
    use rust_decimal_macros::dec;

    fn plan(days: i64, travelers: i64, level: Option<&str>) -> TripPlan {
        TripPlan::from_request(&SuggestionRequest {
            duration_days: Some(days),
            number_of_travelers: Some(travelers),
            budget_level: level.map(str::to_string),
            currency: Some("eur".to_string()),
            ..Default::default()
        })
    }

    #[test]
    fn test_tier_multipliers_hold_for_every_category() {
        for days in [1, 3, 14] {
            let breakdown = build_budget(&plan(days, 1, None));
            for c in breakdown.categories() {
                assert_eq!(c.mid_range_option, c.budget_option * dec!(2.5), "{}", c.category);
                assert_eq!(c.luxury_option, c.budget_option * dec!(5), "{}", c.category);
                assert_eq!(c.recommended, c.mid_range_option);
            }
        }
    }

    #[test]
    fn test_category_bases() {
        let b = build_budget(&plan(1, 1, None));
        let bases: Vec<Decimal> = b.categories().iter().map(|c| c.budget_option).collect();
        assert_eq!(bases, vec![dec!(50), dec!(30), dec!(40), dec!(35), dec!(25), dec!(20)]);
        assert_eq!(b.accommodation.mid_range_option, dec!(125));
        assert_eq!(b.miscellaneous.luxury_option, dec!(100));
        assert_eq!(b.currency, "EUR");
        assert_eq!(b.budget_tips.len(), 3);
    }

    #[test]
    fn test_totals_scale_with_duration() {
        let summary = build_budget(&plan(3, 1, Some("luxury"))).total_budget;
        assert_eq!(summary.budget_total, dec!(600));
        assert_eq!(summary.mid_range_total, dec!(1500));
        assert_eq!(summary.luxury_total, dec!(3000));
        assert_eq!(summary.recommended_total, summary.mid_range_total);
        assert_eq!(summary.duration_days, 3);
        assert_eq!(summary.budget_level, BudgetLevel::Luxury.as_str());
    }

    #[test]
    fn test_per_person_per_day_ignores_traveller_count() {
        // Kept as the undivided daily mid-range amount
        let solo = build_budget(&plan(5, 1, None)).total_budget;
        let group = build_budget(&plan(5, 4, None)).total_budget;
        assert_eq!(solo.per_person_per_day, dec!(500));
        assert_eq!(group.per_person_per_day, dec!(500));
    }
}
