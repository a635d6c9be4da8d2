use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::warn;
use roamy_core::repository::{AttractionRepository, DestinationRepository, HotelRepository};
use roamy_core::{Amenity, Attraction, AttractionType, Destination, Hotel, StarRating, StoreError, StoreResult, TravelInterest};

/// PostgreSQL catalog adapter. Reads only; the schema is owned elsewhere.
pub struct PgCatalogRepository {
    pool: PgPool,
}

impl PgCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const DESTINATION_SELECT: &str = r#"
    SELECT d.id, d.name, d.city, d.country, d.country_code,
           d.latitude::FLOAT8 AS latitude, d.longitude::FLOAT8 AS longitude,
           d.description, d.image_url, d.time_zone, d.climate, d.best_time_to_visit,
           d.budget_daily_cost, d.mid_range_daily_cost, d.luxury_daily_cost,
           d.average_rating::FLOAT8 AS average_rating, d.total_reviews, d.popularity_score, d.active,
           ARRAY(SELECT di.interest::TEXT FROM destination_interests di WHERE di.destination_id = d.id) AS popular_interests
    FROM destinations d
"#;

const ATTRACTION_SELECT: &str = r#"
    SELECT a.id, a.destination_id, a.name, a.description, a.address,
           a.latitude::FLOAT8 AS latitude, a.longitude::FLOAT8 AS longitude,
           a.attraction_type::TEXT AS attraction_type, a.entry_fee, a.currency, a.free_entry, a.opening_hours, a.operating_days,
           a.average_rating::FLOAT8 AS average_rating, a.total_reviews, a.popularity_score,
           a.wheelchair_accessible, a.kids_friendly, a.recommended_duration_hours, a.best_time_to_visit,
           a.active, a.featured,
           ARRAY(SELECT ai.interest::TEXT FROM attraction_interests ai WHERE ai.attraction_id = a.id) AS matching_interests,
           ARRAY(SELECT im.image_url::TEXT FROM attraction_images im WHERE im.attraction_id = a.id) AS image_urls
    FROM attractions a
"#;

const HOTEL_SELECT: &str = r#"
    SELECT h.id, h.destination_id, h.name, h.address,
           h.latitude::FLOAT8 AS latitude, h.longitude::FLOAT8 AS longitude,
           h.description, h.star_rating::TEXT AS star_rating, h.price_per_night, h.currency,
           h.average_rating::FLOAT8 AS average_rating, h.total_reviews, h.available, h.featured,
           h.check_in_time::TEXT AS check_in_time, h.check_out_time::TEXT AS check_out_time,
           ARRAY(SELECT ha.amenity::TEXT FROM hotel_amenities ha WHERE ha.hotel_id = h.id) AS amenities,
           ARRAY(SELECT im.image_url::TEXT FROM hotel_images im WHERE im.hotel_id = h.id) AS image_urls
    FROM hotels h
"#;

// Internal structs for type-safe querying
#[derive(sqlx::FromRow)]
struct DestinationRow {
    id: i64,
    name: String,
    city: String,
    country: String,
    country_code: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    description: Option<String>,
    image_url: Option<String>,
    time_zone: Option<String>,
    climate: Option<String>,
    best_time_to_visit: Option<String>,
    budget_daily_cost: Option<Decimal>,
    mid_range_daily_cost: Option<Decimal>,
    luxury_daily_cost: Option<Decimal>,
    average_rating: Option<f64>,
    total_reviews: Option<i32>,
    popularity_score: Option<i32>,
    active: Option<bool>,
    popular_interests: Vec<String>,
}

impl From<DestinationRow> for Destination {
    fn from(row: DestinationRow) -> Self {
        Destination {
            id: Some(row.id),
            name: row.name,
            city: row.city,
            country: row.country,
            country_code: row.country_code,
            latitude: row.latitude,
            longitude: row.longitude,
            description: row.description,
            image_url: row.image_url,
            time_zone: row.time_zone,
            climate: row.climate,
            best_time_to_visit: row.best_time_to_visit,
            popular_interests: parse_tags(&row.popular_interests, TravelInterest::parse),
            budget_daily_cost: row.budget_daily_cost,
            mid_range_daily_cost: row.mid_range_daily_cost,
            luxury_daily_cost: row.luxury_daily_cost,
            average_rating: row.average_rating,
            total_reviews: row.total_reviews.unwrap_or(0),
            popularity_score: row.popularity_score.unwrap_or(0),
            active: row.active.unwrap_or(true),
        }
    }
}

#[derive(sqlx::FromRow)]
struct AttractionRow {
    id: i64,
    destination_id: i64,
    name: String,
    description: Option<String>,
    address: String,
    latitude: Option<f64>,
    longitude: Option<f64>,
    attraction_type: Option<String>,
    entry_fee: Option<Decimal>,
    currency: Option<String>,
    free_entry: Option<bool>,
    opening_hours: Option<String>,
    operating_days: Option<String>,
    average_rating: Option<f64>,
    total_reviews: Option<i32>,
    popularity_score: Option<i32>,
    wheelchair_accessible: Option<bool>,
    kids_friendly: Option<bool>,
    recommended_duration_hours: Option<i32>,
    best_time_to_visit: Option<String>,
    active: Option<bool>,
    featured: Option<bool>,
    matching_interests: Vec<String>,
    image_urls: Vec<String>,
}

impl From<AttractionRow> for Attraction {
    fn from(row: AttractionRow) -> Self {
        Attraction {
            id: row.id,
            destination_id: row.destination_id,
            name: row.name,
            description: row.description,
            address: row.address,
            latitude: row.latitude,
            longitude: row.longitude,
            attraction_type: row.attraction_type.as_deref().and_then(AttractionType::parse),
            matching_interests: parse_tags(&row.matching_interests, TravelInterest::parse),
            image_urls: row.image_urls,
            entry_fee: row.entry_fee,
            currency: row.currency.unwrap_or_else(|| "USD".to_string()),
            free_entry: row.free_entry.unwrap_or(false),
            opening_hours: row.opening_hours,
            operating_days: row.operating_days,
            average_rating: row.average_rating,
            total_reviews: row.total_reviews.unwrap_or(0),
            popularity_score: row.popularity_score.unwrap_or(0),
            wheelchair_accessible: row.wheelchair_accessible.unwrap_or(false),
            kids_friendly: row.kids_friendly.unwrap_or(true),
            recommended_duration_hours: row.recommended_duration_hours,
            best_time_to_visit: row.best_time_to_visit,
            active: row.active.unwrap_or(true),
            featured: row.featured.unwrap_or(false),
        }
    }
}

#[derive(sqlx::FromRow)]
struct HotelRow {
    id: i64,
    destination_id: i64,
    name: String,
    address: String,
    latitude: Option<f64>,
    longitude: Option<f64>,
    description: Option<String>,
    star_rating: Option<String>,
    price_per_night: Option<Decimal>,
    currency: Option<String>,
    average_rating: Option<f64>,
    total_reviews: Option<i32>,
    available: Option<bool>,
    featured: Option<bool>,
    check_in_time: Option<String>,
    check_out_time: Option<String>,
    amenities: Vec<String>,
    image_urls: Vec<String>,
}

impl HotelRow {
    /// A hotel without a nightly price cannot be costed and is dropped.
    fn into_hotel(self) -> Option<Hotel> {
        let Some(price_per_night) = self.price_per_night else {
            warn!("Skipping hotel {} ({}): no price per night", self.id, self.name);
            return None;
        };

        Some(Hotel {
            id: self.id,
            destination_id: self.destination_id,
            name: self.name,
            address: self.address,
            latitude: self.latitude,
            longitude: self.longitude,
            description: self.description,
            image_urls: self.image_urls,
            star_rating: self.star_rating.as_deref().and_then(parse_star_rating),
            amenities: parse_tags(&self.amenities, Amenity::parse),
            price_per_night,
            currency: self.currency.unwrap_or_else(|| "USD".to_string()),
            average_rating: self.average_rating,
            total_reviews: self.total_reviews.unwrap_or(0),
            available: self.available.unwrap_or(true),
            featured: self.featured.unwrap_or(false),
            check_in_time: self.check_in_time,
            check_out_time: self.check_out_time,
        })
    }
}

/// Tags are stored by enum name; unknown names are ignored.
fn parse_tags<T>(raw: &[String], parse: fn(&str) -> Option<T>) -> Vec<T> {
    raw.iter().filter_map(|tag| parse(tag)).collect()
}

/// Accepts the stored enum name ("FOUR") or a plain digit ("4").
fn parse_star_rating(raw: &str) -> Option<StarRating> {
    let value = match raw.trim().to_ascii_uppercase().as_str() {
        "ONE" => 1,
        "TWO" => 2,
        "THREE" => 3,
        "FOUR" => 4,
        "FIVE" => 5,
        other => other.parse::<u8>().ok()?,
    };
    StarRating::try_from(value).ok()
}

/// `%term%` with LIKE metacharacters escaped.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

fn query_error(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            StoreError::Unavailable(err.to_string())
        }
        other => StoreError::Query(other.to_string()),
    }
}

#[async_trait]
impl DestinationRepository for PgCatalogRepository {
    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Destination>> {
        let sql = format!("{} WHERE LOWER(d.name) = LOWER($1) ORDER BY d.id LIMIT 1", DESTINATION_SELECT);
        let row = sqlx::query_as::<_, DestinationRow>(&sql)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error)?;

        Ok(row.map(Destination::from))
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Destination>> {
        let sql = format!("{} WHERE d.id = $1", DESTINATION_SELECT);
        let row = sqlx::query_as::<_, DestinationRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error)?;

        Ok(row.map(Destination::from))
    }

    async fn search(&self, term: &str) -> StoreResult<Vec<Destination>> {
        let sql = format!(
            "{} WHERE d.name ILIKE $1 OR d.city ILIKE $1 OR d.country ILIKE $1 ORDER BY d.id",
            DESTINATION_SELECT
        );
        let rows = sqlx::query_as::<_, DestinationRow>(&sql)
            .bind(like_pattern(term))
            .fetch_all(&self.pool)
            .await
            .map_err(query_error)?;

        Ok(rows.into_iter().map(Destination::from).collect())
    }

    async fn find_all(&self) -> StoreResult<Vec<Destination>> {
        let sql = format!("{} ORDER BY d.id", DESTINATION_SELECT);
        let rows = sqlx::query_as::<_, DestinationRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(query_error)?;

        Ok(rows.into_iter().map(Destination::from).collect())
    }

    async fn find_active(&self) -> StoreResult<Vec<Destination>> {
        let sql = format!("{} WHERE COALESCE(d.active, TRUE) ORDER BY d.id", DESTINATION_SELECT);
        let rows = sqlx::query_as::<_, DestinationRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(query_error)?;

        Ok(rows.into_iter().map(Destination::from).collect())
    }
}

#[async_trait]
impl AttractionRepository for PgCatalogRepository {
    async fn find_active_by_destination(&self, destination_id: i64) -> StoreResult<Vec<Attraction>> {
        let sql = format!(
            "{} WHERE a.destination_id = $1 AND COALESCE(a.active, TRUE) ORDER BY a.id",
            ATTRACTION_SELECT
        );
        let rows = sqlx::query_as::<_, AttractionRow>(&sql)
            .bind(destination_id)
            .fetch_all(&self.pool)
            .await
            .map_err(query_error)?;

        Ok(rows.into_iter().map(Attraction::from).collect())
    }
}

#[async_trait]
impl HotelRepository for PgCatalogRepository {
    async fn find_available_ranked(&self, destination_id: i64) -> StoreResult<Vec<Hotel>> {
        let sql = format!(
            "{} WHERE h.destination_id = $1 AND COALESCE(h.available, TRUE) \
             ORDER BY h.average_rating DESC NULLS LAST, h.price_per_night ASC",
            HOTEL_SELECT
        );
        let rows = sqlx::query_as::<_, HotelRow>(&sql)
            .bind(destination_id)
            .fetch_all(&self.pool)
            .await
            .map_err(query_error)?;

        Ok(rows.into_iter().filter_map(HotelRow::into_hotel).collect())
    }

    async fn find_by_destination(&self, destination_id: i64) -> StoreResult<Vec<Hotel>> {
        let sql = format!("{} WHERE h.destination_id = $1 ORDER BY h.id", HOTEL_SELECT);
        let rows = sqlx::query_as::<_, HotelRow>(&sql)
            .bind(destination_id)
            .fetch_all(&self.pool)
            .await
            .map_err(query_error)?;

        Ok(rows.into_iter().filter_map(HotelRow::into_hotel).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("par"), "%par%");
        assert_eq!(like_pattern("100%_off"), "%100\\%\\_off%");
    }

    #[test]
    fn test_star_rating_accepts_names_and_digits() {
        assert_eq!(parse_star_rating("FOUR"), Some(StarRating::Four));
        assert_eq!(parse_star_rating("two"), Some(StarRating::Two));
        assert_eq!(parse_star_rating("5"), Some(StarRating::Five));
        assert_eq!(parse_star_rating("SEVEN"), None);
        assert_eq!(parse_star_rating("9"), None);
    }

    #[test]
    fn test_unknown_tags_are_dropped() {
        let raw = vec!["CULTURE".to_string(), "SIGHTSEEING".to_string(), "food".to_string()];
        let tags = parse_tags(&raw, TravelInterest::parse);
        assert_eq!(tags, vec![TravelInterest::Culture, TravelInterest::Food]);
    }

    #[test]
    fn test_hotel_row_without_price_is_skipped() {
        let row = HotelRow {
            id: 1,
            destination_id: 1,
            name: "No Price Inn".to_string(),
            address: "Nowhere".to_string(),
            latitude: None,
            longitude: None,
            description: None,
            star_rating: Some("THREE".to_string()),
            price_per_night: None,
            currency: None,
            average_rating: None,
            total_reviews: None,
            available: None,
            featured: None,
            check_in_time: None,
            check_out_time: None,
            amenities: vec!["WIFI".to_string()],
            image_urls: vec![],
        };
        assert!(row.into_hotel().is_none());
    }
}
