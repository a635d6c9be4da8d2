use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::info;
use crate::catalog::{Attraction, Destination, Hotel, StarRating, TravelInterest};
use crate::repository::Catalog;
use crate::{CoreError, CoreResult};

/// Names shown as trending until search history is tracked.
const DEFAULT_TRENDING: [&str; 6] = ["Goa", "Paris", "Tokyo", "New Delhi", "Mumbai", "Dubai"];
const TRENDING_LIMIT: usize = 6;
const RECOMMENDED_HOTELS: usize = 5;
const RECOMMENDED_ATTRACTIONS: usize = 10;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HotelSort {
    Price,
    Rating,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Filters for listing the hotels of one destination
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HotelQuery {
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub min_rating: Option<f64>,
    pub sort_by: Option<HotelSort>,
    pub sort_order: Option<SortOrder>,
}

impl HotelQuery {
    fn accepts(&self, hotel: &Hotel) -> bool {
        let price = hotel.price_per_night;
        if self.min_price.is_some_and(|min| price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| price > max) {
            return false;
        }
        match self.min_rating {
            Some(min) => hotel.average_rating.is_some_and(|r| r >= min),
            None => true,
        }
    }

    fn sort(&self, hotels: &mut Vec<Hotel>) {
        match self.sort_by {
            Some(HotelSort::Price) => {
                hotels.sort_by(|a, b| a.price_per_night.cmp(&b.price_per_night));
                if self.sort_order == Some(SortOrder::Desc) {
                    hotels.reverse();
                }
            }
            Some(HotelSort::Rating) => {
                // Unrated hotels sink to the end
                hotels.sort_by(|a, b| match (a.average_rating, b.average_rating) {
                    (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
                    (None, Some(_)) => Ordering::Greater,
                    (Some(_), None) => Ordering::Less,
                    (None, None) => Ordering::Equal,
                });
                if self.sort_order == Some(SortOrder::Asc) {
                    hotels.reverse();
                }
            }
            None => {}
        }
    }
}

/// A stored destination with a short list of its hotels and most popular attractions.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendations {
    pub destination: Destination,
    pub hotels: Vec<Hotel>,
    pub attractions: Vec<Attraction>,
}

/// Direct catalog lookups: destination search, trending list, per-destination listings.
pub struct CatalogSearch {
    catalog: Catalog,
}

impl CatalogSearch {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub async fn list_destinations(&self) -> CoreResult<Vec<Destination>> {
        info!("Fetching all active destinations");
        Ok(self.catalog.destinations.find_active().await?)
    }

    pub async fn search_destinations(&self, query: &str) -> CoreResult<Vec<Destination>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(CoreError::Validation("search query must not be blank".to_string()));
        }
        info!("Searching destinations with query: {}", query);
        Ok(self.catalog.destinations.search(query).await?)
    }

    pub async fn trending_destinations(&self) -> CoreResult<Vec<Destination>> {
        let mut trending = Vec::new();
        for name in DEFAULT_TRENDING {
            if let Some(destination) = self.catalog.destinations.find_by_name(name).await? {
                trending.push(destination);
            }
            if trending.len() >= TRENDING_LIMIT {
                break;
            }
        }
        Ok(trending)
    }

    pub async fn hotels_for_destination(&self, destination_id: i64, query: &HotelQuery) -> CoreResult<Vec<Hotel>> {
        self.require_destination(destination_id).await?;

        let mut hotels: Vec<Hotel> = self.catalog.hotels.find_by_destination(destination_id).await?
            .into_iter()
            .filter(|h| query.accepts(h))
            .collect();
        query.sort(&mut hotels);
        Ok(hotels)
    }

    pub async fn attractions_for_destination(&self, destination_id: i64, interests: &[String]) -> CoreResult<Vec<Attraction>> {
        self.require_destination(destination_id).await?;

        let wanted: Vec<TravelInterest> = interests.iter().filter_map(|i| TravelInterest::parse(i)).collect();
        let attractions = self.catalog.attractions.find_active_by_destination(destination_id).await?;

        if wanted.is_empty() {
            return Ok(attractions);
        }
        Ok(attractions.into_iter().filter(|a| a.matches_any(&wanted)).collect())
    }

    /// Hotels are taken from the ranked list: cheapest first for `budget`,
    /// four stars and up for `luxury`, ranked order otherwise.
    pub async fn recommendations(&self, name: &str, budget_level: Option<&str>) -> CoreResult<Recommendations> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::Validation("destination name must not be blank".to_string()));
        }
        info!("Getting recommendations for destination: {}", name);

        let destination = self.catalog.destinations.find_by_name(name).await?
            .ok_or_else(|| CoreError::NotFound(format!("Destination {}", name)))?;
        let Some(id) = destination.id else {
            return Err(CoreError::NotFound(format!("Destination {}", name)));
        };

        let mut hotels = self.catalog.hotels.find_available_ranked(id).await?;
        match budget_level.map(|b| b.trim().to_ascii_lowercase()).as_deref() {
            Some("budget") => hotels.sort_by(|a, b| a.price_per_night.cmp(&b.price_per_night)),
            Some("luxury") => hotels.retain(|h| h.star_rating.is_some_and(|s| s.value() >= StarRating::Four.value())),
            _ => {}
        }
        hotels.truncate(RECOMMENDED_HOTELS);

        let mut attractions = self.catalog.attractions.find_active_by_destination(id).await?;
        attractions.sort_by(|a, b| b.popularity_score.cmp(&a.popularity_score));
        attractions.truncate(RECOMMENDED_ATTRACTIONS);

        Ok(Recommendations { destination, hotels, attractions })
    }

    async fn require_destination(&self, destination_id: i64) -> CoreResult<Destination> {
        self.catalog.destinations.find_by_id(destination_id).await?
            .ok_or_else(|| CoreError::NotFound(format!("Destination {}", destination_id)))
    }
}
