use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Kind of dwelling a listing offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    House,
    Condo,
    Townhouse,
    Studio,
    Duplex,
}

impl PropertyType {
    pub fn all() -> &'static [PropertyType] {
        use PropertyType::*;
        &[Apartment, House, Condo, Townhouse, Studio, Duplex]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::House => "house",
            PropertyType::Condo => "condo",
            PropertyType::Townhouse => "townhouse",
            PropertyType::Studio => "studio",
            PropertyType::Duplex => "duplex",
        }
    }

    /// Case-insensitive lookup by wire name.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rental listing as shown in the marketplace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    /// Monthly rent in whole currency units
    pub price: u32,
    /// 0 means studio
    pub bedrooms: u8,
    pub bathrooms: f32,
    pub rating: f32,
    pub reviews: u32,
    pub property_type: PropertyType,
    pub amenities: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub available: bool,
    pub date_posted: NaiveDate,
    pub landlord: String,
}

/// Invariant violations found in a loaded listing collection.
#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("listing has an empty id")]
    EmptyId,
    #[error("duplicate listing id: {0}")]
    DuplicateId(String),
    #[error("listing {id}: rating {rating} is outside 0-5")]
    RatingOutOfRange { id: String, rating: f32 },
    #[error("listing {id}: invalid bathroom count {bathrooms}")]
    InvalidBathrooms { id: String, bathrooms: f32 },
    #[error("listing {id}: posted on {posted}, which is after {today}")]
    PostedInFuture {
        id: String,
        posted: NaiveDate,
        today: NaiveDate,
    },
}

impl PropertyRecord {
    pub fn is_studio(&self) -> bool {
        self.bedrooms == 0
    }

    /// Checks the per-record invariants against the given calendar date.
    pub fn validate(&self, today: NaiveDate) -> Result<(), ModelError> {
        if self.id.trim().is_empty() {
            return Err(ModelError::EmptyId);
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(ModelError::RatingOutOfRange {
                id: self.id.clone(),
                rating: self.rating,
            });
        }
        if !self.bathrooms.is_finite() || self.bathrooms < 0.0 {
            return Err(ModelError::InvalidBathrooms {
                id: self.id.clone(),
                bathrooms: self.bathrooms,
            });
        }
        if self.date_posted > today {
            return Err(ModelError::PostedInFuture {
                id: self.id.clone(),
                posted: self.date_posted,
                today,
            });
        }
        Ok(())
    }
}

/// Validates every record and checks that ids are unique across the collection.
pub fn validate_collection(records: &[PropertyRecord], today: NaiveDate) -> Result<(), ModelError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        record.validate(today)?;
        if !seen.insert(record.id.as_str()) {
            return Err(ModelError::DuplicateId(record.id.clone()));
        }
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::test_support::record;
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
    }

    #[test]
    fn property_type_parses_case_insensitively() {
        assert_eq!(PropertyType::parse("Townhouse"), Some(PropertyType::Townhouse));
        assert_eq!(PropertyType::parse(" condo "), Some(PropertyType::Condo));
        assert_eq!(PropertyType::parse("castle"), None);
    }

    #[test]
    fn record_deserializes_from_camel_case_json() {
        let json = r#"{
            "id": "7",
            "title": "Loft",
            "description": "Open plan",
            "location": "Downtown",
            "price": 2400,
            "bedrooms": 1,
            "bathrooms": 1.5,
            "rating": 4.6,
            "reviews": 12,
            "propertyType": "condo",
            "amenities": ["Gym", "Parking"],
            "available": true,
            "datePosted": "2024-01-15",
            "landlord": "Jane Doe"
        }"#;
        let parsed: PropertyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.property_type, PropertyType::Condo);
        assert_eq!(parsed.bathrooms, 1.5);
        assert!(parsed.images.is_empty());
        assert_eq!(parsed.date_posted, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn validate_rejects_rating_above_five() {
        let mut listing = record("1", 2000, 1, (2024, 1, 1));
        listing.rating = 5.2;
        assert!(matches!(
            listing.validate(today()),
            Err(ModelError::RatingOutOfRange { .. })
        ));
    }

    #[test]
    fn validate_rejects_future_posting() {
        let listing = record("1", 2000, 1, (2024, 3, 1));
        assert!(matches!(
            listing.validate(today()),
            Err(ModelError::PostedInFuture { .. })
        ));
    }

    #[test]
    fn validate_rejects_negative_bathrooms() {
        let mut listing = record("1", 2000, 1, (2024, 1, 1));
        listing.bathrooms = -1.0;
        assert!(listing.validate(today()).is_err());
    }

    #[test]
    fn collection_rejects_duplicate_ids() {
        let records = vec![
            record("a", 1000, 0, (2024, 1, 1)),
            record("a", 1200, 1, (2024, 1, 2)),
        ];
        assert_eq!(
            validate_collection(&records, today()),
            Err(ModelError::DuplicateId("a".to_string()))
        );
    }

    #[test]
    fn posting_today_is_valid() {
        let listing = record("1", 2000, 1, (2024, 2, 1));
        assert!(listing.validate(today()).is_ok());
    }
}
