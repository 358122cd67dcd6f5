use crate::filters::criteria::{FilterCriteria, SortKey};
use crate::models::PropertyRecord;
use std::cmp::Ordering;
use tracing::debug;

/// Case-insensitive substring match over title, location and description.
fn matches_search(record: &PropertyRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [&record.title, &record.location, &record.description]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

fn passes(record: &PropertyRecord, criteria: &FilterCriteria, needle: &str) -> bool {
    matches_search(record, needle)
        && criteria.price.contains(record.price)
        && criteria.bedrooms.contains(record.bedrooms)
        && criteria.property_type.contains(record.property_type)
}

/// Whether a single listing passes every active filter in `criteria`.
pub fn matches(record: &PropertyRecord, criteria: &FilterCriteria) -> bool {
    passes(record, criteria, &criteria.search.to_lowercase())
}

fn compare(a: &PropertyRecord, b: &PropertyRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Newest => b.date_posted.cmp(&a.date_posted),
        SortKey::PriceLow => a.price.cmp(&b.price),
        SortKey::PriceHigh => b.price.cmp(&a.price),
        SortKey::Rating => b.rating.total_cmp(&a.rating),
    }
}

/// Stable in-place sort; equal keys keep their relative order.
pub fn sort_listings(items: &mut [&PropertyRecord], key: SortKey) {
    items.sort_by(|a, b| compare(a, b, key));
}

/// Derive the visible listings for `criteria`, in display order.
///
/// Never fails and never touches `records`: no matches yields an empty vec.
pub fn apply<'a>(records: &'a [PropertyRecord], criteria: &FilterCriteria) -> Vec<&'a PropertyRecord> {
    let needle = criteria.search.to_lowercase();
    let mut visible: Vec<&PropertyRecord> = records
        .iter()
        .filter(|record| passes(record, criteria, &needle))
        .collect();

    sort_listings(&mut visible, criteria.sort);

    debug!(
        total = records.len(),
        visible = visible.len(),
        sort = %criteria.sort,
        "applied listing filters"
    );

    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::criteria::{BedroomBucket, PriceBucket, PropertyTypeFilter};
    use crate::models::test_support::record;
    use crate::models::PropertyType;

    fn ids(listings: &[&PropertyRecord]) -> Vec<String> {
        listings.iter().map(|l| l.id.clone()).collect()
    }

    #[test]
    fn search_matches_any_text_field_ignoring_case() {
        let mut by_title = record("t", 1500, 1, (2024, 1, 1));
        by_title.title = "Sunny LOFT".to_string();
        let mut by_location = record("l", 1500, 1, (2024, 1, 2));
        by_location.location = "Lofton Heights".to_string();
        let mut by_description = record("d", 1500, 1, (2024, 1, 3));
        by_description.description = "converted loft space".to_string();
        let miss = record("m", 1500, 1, (2024, 1, 4));

        let records = vec![by_title, by_location, by_description, miss];
        let criteria = FilterCriteria::default().with_search("Loft");
        assert_eq!(ids(&apply(&records, &criteria)), vec!["d", "l", "t"]);
    }

    #[test]
    fn price_bucket_example() {
        let a = record("A", 1800, 0, (2024, 1, 12));
        let b = record("B", 3200, 4, (2024, 1, 10));
        let criteria = FilterCriteria::default().with_price(PriceBucket::From2000To3000);

        let records = vec![a.clone(), b.clone()];
        assert!(apply(&records, &criteria).is_empty());

        let c = record("C", 2500, 2, (2024, 1, 11));
        let records = vec![a, b, c];
        assert_eq!(ids(&apply(&records, &criteria)), vec!["C"]);
    }

    #[test]
    fn four_plus_bedrooms_then_newest() {
        let records = vec![
            record("A", 2000, 2, (2024, 1, 3)),
            record("B", 2000, 4, (2024, 1, 1)),
            record("C", 2000, 5, (2024, 1, 2)),
        ];
        let criteria = FilterCriteria::default().with_bedrooms(BedroomBucket::parse("4+"));
        assert_eq!(ids(&apply(&records, &criteria)), vec!["C", "B"]);
    }

    #[test]
    fn studio_bucket_matches_zero_bedrooms() {
        let records = vec![
            record("s", 1200, 0, (2024, 1, 1)),
            record("o", 1400, 1, (2024, 1, 1)),
        ];
        let criteria = FilterCriteria::default().with_bedrooms(BedroomBucket::Studio);
        assert_eq!(ids(&apply(&records, &criteria)), vec!["s"]);
    }

    #[test]
    fn rating_sort_is_descending() {
        let mut records = vec![
            record("a", 1000, 1, (2024, 1, 1)),
            record("b", 1000, 1, (2024, 1, 1)),
            record("c", 1000, 1, (2024, 1, 1)),
        ];
        records[0].rating = 4.8;
        records[1].rating = 4.5;
        records[2].rating = 4.9;
        let criteria = FilterCriteria::default().with_sort(SortKey::Rating);
        let ratings: Vec<f32> = apply(&records, &criteria).iter().map(|l| l.rating).collect();
        assert_eq!(ratings, vec![4.9, 4.8, 4.5]);
    }

    #[test]
    fn ties_keep_input_order() {
        let records = vec![
            record("first", 2500, 1, (2024, 1, 1)),
            record("second", 2500, 2, (2024, 1, 1)),
            record("third", 2500, 3, (2024, 1, 1)),
        ];
        for key in [SortKey::Newest, SortKey::PriceLow, SortKey::PriceHigh, SortKey::Rating] {
            let criteria = FilterCriteria::default().with_sort(key);
            assert_eq!(
                ids(&apply(&records, &criteria)),
                vec!["first", "second", "third"],
                "sort key {key}"
            );
        }
    }

    #[test]
    fn type_filter_is_exact() {
        let mut house = record("h", 3500, 3, (2024, 1, 1));
        house.property_type = PropertyType::House;
        let mut townhouse = record("t", 3500, 3, (2024, 1, 2));
        townhouse.property_type = PropertyType::Townhouse;
        let records = vec![house, townhouse];
        let criteria = FilterCriteria::default()
            .with_property_type(PropertyTypeFilter::Only(PropertyType::House));
        assert_eq!(ids(&apply(&records, &criteria)), vec!["h"]);
    }

    #[test]
    fn matches_agrees_with_apply() {
        let records = vec![
            record("a", 1900, 0, (2024, 1, 1)),
            record("b", 3000, 2, (2024, 1, 2)),
            record("c", 4100, 4, (2024, 1, 3)),
        ];
        let criteria = FilterCriteria::default().with_price(PriceBucket::From3000To4000);
        let expected: Vec<&PropertyRecord> = records.iter().filter(|r| matches(r, &criteria)).collect();
        assert_eq!(ids(&apply(&records, &criteria)), ids(&expected));
    }

    #[test]
    fn empty_collection_yields_empty_result() {
        let criteria = FilterCriteria::default().with_search("anything");
        assert!(apply(&[], &criteria).is_empty());
    }
}
