use crate::models::{PropertyRecord, PropertyType};
use crate::sources::traits::PropertySource;
use crate::sources::{validated, SourceError};
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::info;

/// Built-in sample listings, used when no data file or URL is configured
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSource;

impl FixtureSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PropertySource for FixtureSource {
    async fn load(&self) -> Result<Vec<PropertyRecord>, SourceError> {
        info!("📋 Loading built-in sample listings");
        validated(self.source_name(), sample_listings())
    }

    fn source_name(&self) -> &'static str {
        "fixture"
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// The sample marketplace dataset
pub fn sample_listings() -> Vec<PropertyRecord> {
    vec![
        PropertyRecord {
            id: "1".to_string(),
            title: "Modern Downtown Apartment".to_string(),
            description: "Bright corner unit with floor-to-ceiling windows and city views.".to_string(),
            location: "Downtown, San Francisco".to_string(),
            price: 3200,
            bedrooms: 2,
            bathrooms: 2.0,
            rating: 4.8,
            reviews: 24,
            property_type: PropertyType::Apartment,
            amenities: labels(&["WiFi", "Parking", "Gym", "Pool"]),
            images: labels(&["/images/property-1.jpg"]),
            available: true,
            date_posted: date(2024, 1, 15),
            landlord: "Sarah Johnson".to_string(),
        },
        PropertyRecord {
            id: "2".to_string(),
            title: "Cozy Studio Near University".to_string(),
            description: "Compact studio a short walk from campus, utilities included.".to_string(),
            location: "Berkeley, CA".to_string(),
            price: 1800,
            bedrooms: 0,
            bathrooms: 1.0,
            rating: 4.5,
            reviews: 18,
            property_type: PropertyType::Studio,
            amenities: labels(&["WiFi", "Laundry"]),
            images: labels(&["/images/property-2.jpg"]),
            available: true,
            date_posted: date(2024, 1, 12),
            landlord: "Mike Chen".to_string(),
        },
        PropertyRecord {
            id: "3".to_string(),
            title: "Spacious Family House".to_string(),
            description: "Four-bedroom house with a fenced backyard and two-car garage.".to_string(),
            location: "Palo Alto, CA".to_string(),
            price: 4500,
            bedrooms: 4,
            bathrooms: 3.0,
            rating: 4.9,
            reviews: 31,
            property_type: PropertyType::House,
            amenities: labels(&["Garden", "Garage", "Fireplace", "WiFi"]),
            images: labels(&["/images/property-3.jpg"]),
            available: true,
            date_posted: date(2024, 1, 10),
            landlord: "Emily Rodriguez".to_string(),
        },
        PropertyRecord {
            id: "4".to_string(),
            title: "Luxury Waterfront Condo".to_string(),
            description: "Bay-facing condo with concierge, rooftop deck and private balcony.".to_string(),
            location: "Marina District, San Francisco".to_string(),
            price: 5200,
            bedrooms: 3,
            bathrooms: 2.5,
            rating: 4.7,
            reviews: 15,
            property_type: PropertyType::Condo,
            amenities: labels(&["Concierge", "Balcony", "Gym", "Parking"]),
            images: labels(&["/images/property-4.jpg"]),
            available: false,
            date_posted: date(2024, 1, 8),
            landlord: "David Park".to_string(),
        },
        PropertyRecord {
            id: "5".to_string(),
            title: "Charming Victorian Townhouse".to_string(),
            description: "Restored townhouse with original details and a sunny patio.".to_string(),
            location: "Mission District, San Francisco".to_string(),
            price: 3800,
            bedrooms: 3,
            bathrooms: 1.5,
            rating: 4.6,
            reviews: 22,
            property_type: PropertyType::Townhouse,
            amenities: labels(&["Patio", "Laundry", "WiFi"]),
            images: labels(&["/images/property-5.jpg"]),
            available: true,
            date_posted: date(2024, 1, 14),
            landlord: "Lisa Thompson".to_string(),
        },
        PropertyRecord {
            id: "6".to_string(),
            title: "Garden Level Duplex".to_string(),
            description: "Split-level duplex unit with private entrance and shared garden.".to_string(),
            location: "Oakland, CA".to_string(),
            price: 2600,
            bedrooms: 2,
            bathrooms: 1.0,
            rating: 4.3,
            reviews: 9,
            property_type: PropertyType::Duplex,
            amenities: labels(&["Garden", "Pet Friendly"]),
            images: labels(&["/images/property-6.jpg"]),
            available: true,
            date_posted: date(2024, 1, 11),
            landlord: "James Wilson".to_string(),
        },
        PropertyRecord {
            id: "7".to_string(),
            title: "Sunny One Bedroom Apartment".to_string(),
            description: "Quiet one-bedroom near transit with updated kitchen.".to_string(),
            location: "San Jose, CA".to_string(),
            price: 2100,
            bedrooms: 1,
            bathrooms: 1.0,
            rating: 4.4,
            reviews: 12,
            property_type: PropertyType::Apartment,
            amenities: labels(&["WiFi", "Dishwasher", "Parking"]),
            images: vec![],
            available: true,
            date_posted: date(2024, 1, 13),
            landlord: "Ana Martinez".to_string(),
        },
        PropertyRecord {
            id: "8".to_string(),
            title: "Hillside Retreat with Views".to_string(),
            description: "Five-bedroom home overlooking the valley, ideal for large households.".to_string(),
            location: "Los Gatos, CA".to_string(),
            price: 6800,
            bedrooms: 5,
            bathrooms: 4.0,
            rating: 5.0,
            reviews: 7,
            property_type: PropertyType::House,
            amenities: labels(&["Pool", "Garage", "Fireplace", "Garden"]),
            images: labels(&["/images/property-8.jpg"]),
            available: true,
            date_posted: date(2024, 1, 9),
            landlord: "Robert Kim".to_string(),
        },
    ]
}
