use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declares a tag enum stored as its SCREAMING_SNAKE_CASE name, with a
/// lenient case-insensitive parser for free-text input.
macro_rules! catalog_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Case-insensitive lookup; `None` for unknown labels.
            pub fn parse(label: &str) -> Option<Self> {
                let label = label.trim();
                Self::ALL.iter().copied().find(|v| v.as_str().eq_ignore_ascii_case(label))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s).ok_or_else(|| format!("unknown {}: {}", stringify!($name), s))
            }
        }
    };
}

catalog_enum!(
    /// Interest tags shared by destinations, attractions and travellers.
    TravelInterest {
        Adventure => "ADVENTURE",
        Culture => "CULTURE",
        Food => "FOOD",
        Nightlife => "NIGHTLIFE",
        Nature => "NATURE",
        Beach => "BEACH",
        Shopping => "SHOPPING",
        History => "HISTORY",
        Art => "ART",
        Music => "MUSIC",
        Sports => "SPORTS",
        Wellness => "WELLNESS",
        Business => "BUSINESS",
        Luxury => "LUXURY",
        Budget => "BUDGET",
        Family => "FAMILY",
        Romantic => "ROMANTIC",
    }
);

catalog_enum!(
    AttractionType {
        Museum => "MUSEUM",
        Park => "PARK",
        Monument => "MONUMENT",
        Church => "CHURCH",
        Temple => "TEMPLE",
        Castle => "CASTLE",
        Palace => "PALACE",
        Beach => "BEACH",
        Mountain => "MOUNTAIN",
        Lake => "LAKE",
        Waterfall => "WATERFALL",
        Garden => "GARDEN",
        Zoo => "ZOO",
        Aquarium => "AQUARIUM",
        Theater => "THEATER",
        ConcertHall => "CONCERT_HALL",
        ShoppingCenter => "SHOPPING_CENTER",
        Market => "MARKET",
        Restaurant => "RESTAURANT",
        Bar => "BAR",
        Club => "CLUB",
        Casino => "CASINO",
        Spa => "SPA",
        SportsVenue => "SPORTS_VENUE",
        AdventurePark => "ADVENTURE_PARK",
        HistoricalSite => "HISTORICAL_SITE",
        ArchaeologicalSite => "ARCHAEOLOGICAL_SITE",
        Viewpoint => "VIEWPOINT",
        Bridge => "BRIDGE",
        Building => "BUILDING",
        Square => "SQUARE",
        Street => "STREET",
        Neighborhood => "NEIGHBORHOOD",
        Island => "ISLAND",
    }
);

catalog_enum!(
    Amenity {
        Wifi => "WIFI",
        Parking => "PARKING",
        Pool => "POOL",
        Gym => "GYM",
        Spa => "SPA",
        Restaurant => "RESTAURANT",
        Bar => "BAR",
        RoomService => "ROOM_SERVICE",
        Laundry => "LAUNDRY",
        Concierge => "CONCIERGE",
        BusinessCenter => "BUSINESS_CENTER",
        PetFriendly => "PET_FRIENDLY",
        AirportShuttle => "AIRPORT_SHUTTLE",
        BreakfastIncluded => "BREAKFAST_INCLUDED",
        AirConditioning => "AIR_CONDITIONING",
        Beachfront => "BEACHFRONT",
        CityView => "CITY_VIEW",
        MountainView => "MOUNTAIN_VIEW",
        Balcony => "BALCONY",
        Kitchenette => "KITCHENETTE",
        MiniBar => "MINI_BAR",
        Safe => "SAFE",
        Tv => "TV",
    }
);

/// Hotel classification, serialized as its numeric value (1-5).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(try_from = "u8", into = "u8")]
pub enum StarRating {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl StarRating {
    pub fn value(&self) -> u8 {
        match self {
            StarRating::One => 1,
            StarRating::Two => 2,
            StarRating::Three => 3,
            StarRating::Four => 4,
            StarRating::Five => 5,
        }
    }
}

impl TryFrom<u8> for StarRating {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(StarRating::One),
            2 => Ok(StarRating::Two),
            3 => Ok(StarRating::Three),
            4 => Ok(StarRating::Four),
            5 => Ok(StarRating::Five),
            other => Err(format!("star rating must be between 1 and 5, got {}", other)),
        }
    }
}

impl From<StarRating> for u8 {
    fn from(rating: StarRating) -> Self {
        rating.value()
    }
}

fn default_true() -> bool {
    true
}

fn default_currency() -> String {
    "USD".to_string()
}

/// A travel destination as stored in the catalog.
///
/// `id` is `None` for values synthesized at request time; those are never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub city: String,
    pub country: String,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub time_zone: Option<String>,
    #[serde(default)]
    pub climate: Option<String>,
    #[serde(default)]
    pub best_time_to_visit: Option<String>,
    #[serde(default)]
    pub popular_interests: Vec<TravelInterest>,
    #[serde(default)]
    pub budget_daily_cost: Option<Decimal>,
    #[serde(default)]
    pub mid_range_daily_cost: Option<Decimal>,
    #[serde(default)]
    pub luxury_daily_cost: Option<Decimal>,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub total_reviews: i32,
    #[serde(default)]
    pub popularity_score: i32,
    #[serde(default = "default_true")]
    pub active: bool,
}

impl Destination {
    /// True when the value came from the store (positive id).
    pub fn is_persisted(&self) -> bool {
        matches!(self.id, Some(id) if id > 0)
    }

    pub fn persisted_id(&self) -> Option<i64> {
        self.id.filter(|id| *id > 0)
    }

    /// Case-insensitive match against name or city.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name) || self.city.eq_ignore_ascii_case(name)
    }

    /// Case-insensitive substring match against name, city or country.
    pub fn mentions(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        [&self.name, &self.city, &self.country]
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attraction {
    pub id: i64,
    pub destination_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub address: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(rename = "type", default)]
    pub attraction_type: Option<AttractionType>,
    #[serde(default)]
    pub matching_interests: Vec<TravelInterest>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub entry_fee: Option<Decimal>,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub free_entry: bool,
    #[serde(default)]
    pub opening_hours: Option<String>,
    #[serde(default)]
    pub operating_days: Option<String>,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub total_reviews: i32,
    #[serde(default)]
    pub popularity_score: i32,
    #[serde(default)]
    pub wheelchair_accessible: bool,
    #[serde(default = "default_true")]
    pub kids_friendly: bool,
    #[serde(default)]
    pub recommended_duration_hours: Option<i32>,
    #[serde(default)]
    pub best_time_to_visit: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub featured: bool,
}

impl Attraction {
    pub fn matches_any(&self, interests: &[TravelInterest]) -> bool {
        self.matching_interests.iter().any(|i| interests.contains(i))
    }

    /// Counts requested labels (free text) that name one of this attraction's interests.
    pub fn count_matching(&self, requested: &[String]) -> usize {
        requested
            .iter()
            .filter(|label| {
                self.matching_interests
                    .iter()
                    .any(|i| i.as_str().eq_ignore_ascii_case(label.trim()))
            })
            .count()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hotel {
    pub id: i64,
    pub destination_id: i64,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub star_rating: Option<StarRating>,
    #[serde(default)]
    pub amenities: Vec<Amenity>,
    pub price_per_night: Decimal,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub total_reviews: i32,
    #[serde(default = "default_true")]
    pub available: bool,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub check_in_time: Option<String>,
    #[serde(default)]
    pub check_out_time: Option<String>,
}

impl Hotel {
    pub fn has_amenity(&self, amenity: Amenity) -> bool {
        self.amenities.contains(&amenity)
    }
}
