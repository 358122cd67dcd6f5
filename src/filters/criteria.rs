use crate::models::PropertyType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse monthly rent ranges offered by the search bar.
///
/// Adjacent ranges share their boundary value: a rent of exactly 3000 falls in
/// both `From2000To3000` and `From3000To4000`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PriceBucket {
    #[default]
    All,
    Under2000,
    From2000To3000,
    From3000To4000,
    Over4000,
}

impl PriceBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceBucket::All => "all",
            PriceBucket::Under2000 => "under-2000",
            PriceBucket::From2000To3000 => "2000-3000",
            PriceBucket::From3000To4000 => "3000-4000",
            PriceBucket::Over4000 => "over-4000",
        }
    }

    /// Unrecognized values fall back to `All`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "under-2000" => PriceBucket::Under2000,
            "2000-3000" => PriceBucket::From2000To3000,
            "3000-4000" => PriceBucket::From3000To4000,
            "over-4000" => PriceBucket::Over4000,
            _ => PriceBucket::All,
        }
    }

    pub fn contains(&self, price: u32) -> bool {
        match self {
            PriceBucket::All => true,
            PriceBucket::Under2000 => price < 2000,
            PriceBucket::From2000To3000 => (2000..=3000).contains(&price),
            PriceBucket::From3000To4000 => (3000..=4000).contains(&price),
            PriceBucket::Over4000 => price > 4000,
        }
    }
}

/// Bedroom count filter. `Studio` means zero bedrooms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BedroomBucket {
    #[default]
    All,
    Studio,
    One,
    Two,
    Three,
    FourPlus,
}

impl BedroomBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            BedroomBucket::All => "all",
            BedroomBucket::Studio => "studio",
            BedroomBucket::One => "1",
            BedroomBucket::Two => "2",
            BedroomBucket::Three => "3",
            BedroomBucket::FourPlus => "4-plus",
        }
    }

    /// Accepts both "4-plus" and the "4+" form the search form emits.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "studio" | "0" => BedroomBucket::Studio,
            "1" => BedroomBucket::One,
            "2" => BedroomBucket::Two,
            "3" => BedroomBucket::Three,
            "4-plus" | "4+" => BedroomBucket::FourPlus,
            _ => BedroomBucket::All,
        }
    }

    pub fn contains(&self, bedrooms: u8) -> bool {
        match self {
            BedroomBucket::All => true,
            BedroomBucket::Studio => bedrooms == 0,
            BedroomBucket::One => bedrooms == 1,
            BedroomBucket::Two => bedrooms == 2,
            BedroomBucket::Three => bedrooms == 3,
            BedroomBucket::FourPlus => bedrooms >= 4,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PropertyTypeFilter {
    #[default]
    All,
    Only(PropertyType),
}

impl PropertyTypeFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyTypeFilter::All => "all",
            PropertyTypeFilter::Only(kind) => kind.as_str(),
        }
    }

    pub fn parse(value: &str) -> Self {
        PropertyType::parse(value)
            .map(PropertyTypeFilter::Only)
            .unwrap_or(PropertyTypeFilter::All)
    }

    pub fn contains(&self, kind: PropertyType) -> bool {
        match self {
            PropertyTypeFilter::All => true,
            PropertyTypeFilter::Only(wanted) => *wanted == kind,
        }
    }
}

/// Display order of the listing grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortKey {
    #[default]
    Newest,
    PriceLow,
    PriceHigh,
    Rating,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Rating => "rating",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "price-low" => SortKey::PriceLow,
            "price-high" => SortKey::PriceHigh,
            "rating" => SortKey::Rating,
            _ => SortKey::Newest,
        }
    }
}

macro_rules! wire_string_conversions {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<String> for $ty {
                fn from(value: String) -> Self {
                    <$ty>::parse(&value)
                }
            }

            impl From<&str> for $ty {
                fn from(value: &str) -> Self {
                    <$ty>::parse(value)
                }
            }

            impl From<$ty> for String {
                fn from(value: $ty) -> Self {
                    value.as_str().to_string()
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

wire_string_conversions!(PriceBucket, BedroomBucket, PropertyTypeFilter, SortKey);

/// Search, filter and sort parameters chosen in the listings view
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterCriteria {
    pub search: String,
    pub price: PriceBucket,
    pub bedrooms: BedroomBucket,
    pub property_type: PropertyTypeFilter,
    pub sort: SortKey,
}

impl FilterCriteria {
    pub fn with_search(self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..self
        }
    }

    pub fn with_price(self, price: PriceBucket) -> Self {
        Self { price, ..self }
    }

    pub fn with_bedrooms(self, bedrooms: BedroomBucket) -> Self {
        Self { bedrooms, ..self }
    }

    pub fn with_property_type(self, property_type: PropertyTypeFilter) -> Self {
        Self {
            property_type,
            ..self
        }
    }

    pub fn with_sort(self, sort: SortKey) -> Self {
        Self { sort, ..self }
    }

    /// True when no filter narrows the collection (sort may still differ).
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_empty()
            && self.price == PriceBucket::All
            && self.bedrooms == BedroomBucket::All
            && self.property_type == PropertyTypeFilter::All
    }
}
