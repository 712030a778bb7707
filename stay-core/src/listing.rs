use serde::{Deserialize, Serialize};

/// Property category a listing belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    House,
    Hotel,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::House => "house",
            PropertyType::Hotel => "hotel",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::House => "House",
            PropertyType::Hotel => "Hotel",
        }
    }
}

impl std::str::FromStr for PropertyType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "apartment" => Ok(PropertyType::Apartment),
            "house" => Ok(PropertyType::House),
            "hotel" => Ok(PropertyType::Hotel),
            _ => Err(()),
        }
    }
}

/// Flat fee structure attached to a listing. Cleaning and service are
/// charged once per stay, not per night.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Fees {
    pub cleaning: i64,
    pub service: i64,
    pub discount_percent: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Host {
    pub name: String,
    #[serde(default)]
    pub is_superhost: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub author_name: String,
    pub rating: f64,
    pub date: String,
    #[serde(default)]
    pub text: String,
}

/// A catalog entry. Loaded once from the static dataset and never mutated;
/// bookings embed a clone so later catalog changes cannot rewrite past trips.
///
/// External payloads use camelCase keys, matching the dataset shape. Keys the
/// engine has no use for (images, coordinates, policies) are ignored on read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub city: String,
    pub country: String,
    #[serde(default)]
    pub area: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub price_per_night: i64,
    pub rating: f64,
    pub reviews_count: u32,
    pub max_guests: u32,
    pub bedrooms: u32,
    pub baths: u32,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub fees: Fees,
    #[serde(default)]
    pub instant_book: bool,
    #[serde(default)]
    pub free_cancellation: bool,
    #[serde(default)]
    pub host: Option<Host>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Listing {
    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities.iter().any(|a| a == amenity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_deserializes_dataset_shape() {
        let json = r#"
            {
                "id": "l1",
                "title": "Canal View Loft",
                "city": "Amsterdam",
                "country": "Netherlands",
                "area": "Jordaan",
                "type": "apartment",
                "coords": { "lat": 52.37, "lng": 4.88 },
                "pricePerNight": 140,
                "rating": 4.82,
                "reviewsCount": 212,
                "images": ["a.jpg"],
                "maxGuests": 3,
                "bedrooms": 1,
                "baths": 1,
                "amenities": ["wifi", "kitchen"],
                "fees": { "cleaning": 25, "service": 18, "discountPercent": 0 },
                "instantBook": true,
                "freeCancellation": true,
                "host": { "name": "Anouk", "isSuperhost": true },
                "description": "Bright loft on the canal."
            }
        "#;
        let listing: Listing = serde_json::from_str(json).expect("dataset shape must parse");
        assert_eq!(listing.property_type, PropertyType::Apartment);
        assert_eq!(listing.price_per_night, 140);
        assert_eq!(listing.fees.cleaning, 25);
        assert!(listing.has_amenity("wifi"));
        assert!(!listing.has_amenity("pool"));
        assert!(listing.reviews.is_empty());
    }

    #[test]
    fn test_property_type_round_trip() {
        for (text, ty) in [
            ("apartment", PropertyType::Apartment),
            ("house", PropertyType::House),
            ("hotel", PropertyType::Hotel),
        ] {
            assert_eq!(text.parse::<PropertyType>(), Ok(ty));
            assert_eq!(ty.as_str(), text);
        }
        assert!("castle".parse::<PropertyType>().is_err());
    }
}
