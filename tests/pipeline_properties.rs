//! Ordering and filtering guarantees of the listing pipeline, checked over the
//! sample dataset with every combination of bucket filters.

use rental_listings::filters::{
    apply, matches, BedroomBucket, FilterCriteria, PriceBucket, PropertyTypeFilter, SortKey,
};
use rental_listings::sources::fixture::sample_listings;
use rental_listings::{PropertyRecord, PropertyType};

fn every_criteria() -> Vec<FilterCriteria> {
    let prices = ["all", "under-2000", "2000-3000", "3000-4000", "over-4000"];
    let bedrooms = ["all", "studio", "1", "2", "3", "4+"];
    let mut types: Vec<PropertyTypeFilter> = vec![PropertyTypeFilter::All];
    types.extend(PropertyType::all().iter().copied().map(PropertyTypeFilter::Only));
    let sorts = [SortKey::Newest, SortKey::PriceLow, SortKey::PriceHigh, SortKey::Rating];
    let searches = ["", "san francisco", "HOUSE", "garden", "no such text"];

    let mut all = Vec::new();
    for price in prices {
        for beds in bedrooms {
            for kind in &types {
                for sort in sorts {
                    for search in searches {
                        all.push(
                            FilterCriteria::default()
                                .with_search(search)
                                .with_price(PriceBucket::parse(price))
                                .with_bedrooms(BedroomBucket::parse(beds))
                                .with_property_type(*kind)
                                .with_sort(sort),
                        );
                    }
                }
            }
        }
    }
    all
}

fn ids(listings: &[&PropertyRecord]) -> Vec<String> {
    listings.iter().map(|l| l.id.clone()).collect()
}

#[test]
fn output_is_exactly_the_matching_records() {
    let listings = sample_listings();
    for criteria in every_criteria() {
        let output = apply(&listings, &criteria);
        assert!(output.iter().all(|l| matches(l, &criteria)), "{criteria:?}");

        for listing in listings.iter().filter(|l| matches(l, &criteria)) {
            let hits = output.iter().filter(|o| o.id == listing.id).count();
            assert_eq!(hits, 1, "listing {} for {criteria:?}", listing.id);
        }
    }
}

#[test]
fn price_sorts_are_monotonic() {
    let listings = sample_listings();
    for criteria in every_criteria() {
        let output = apply(&listings, &criteria);
        match criteria.sort {
            SortKey::PriceLow => assert!(output.windows(2).all(|w| w[0].price <= w[1].price)),
            SortKey::PriceHigh => assert!(output.windows(2).all(|w| w[0].price >= w[1].price)),
            SortKey::Rating => assert!(output.windows(2).all(|w| w[0].rating >= w[1].rating)),
            SortKey::Newest => {
                assert!(output.windows(2).all(|w| w[0].date_posted >= w[1].date_posted))
            }
        }
    }
}

#[test]
fn filtering_is_idempotent() {
    let listings = sample_listings();
    for criteria in every_criteria() {
        let once = apply(&listings, &criteria);
        let owned: Vec<PropertyRecord> = once.iter().map(|l| (*l).clone()).collect();
        let twice = apply(&owned, &criteria);
        assert_eq!(ids(&once), ids(&twice), "{criteria:?}");
    }
}

#[test]
fn default_criteria_return_everything_newest_first() {
    let listings = sample_listings();
    let output = apply(&listings, &FilterCriteria::default());
    assert_eq!(output.len(), listings.len());
    assert_eq!(ids(&output), vec!["1", "5", "7", "2", "6", "3", "8", "4"]);
}

#[test]
fn input_collection_is_untouched() {
    let listings = sample_listings();
    let before = listings.clone();
    let criteria = FilterCriteria::default()
        .with_sort(SortKey::PriceHigh)
        .with_price(PriceBucket::Over4000);
    let _ = apply(&listings, &criteria);
    assert_eq!(listings, before);
}

#[test]
fn boundary_price_appears_in_both_adjacent_buckets() {
    let mut listings = sample_listings();
    listings[0].price = 3000;
    let low = FilterCriteria::default().with_price(PriceBucket::From2000To3000);
    let high = FilterCriteria::default().with_price(PriceBucket::From3000To4000);
    assert!(ids(&apply(&listings, &low)).contains(&"1".to_string()));
    assert!(ids(&apply(&listings, &high)).contains(&"1".to_string()));
}

#[test]
fn sample_search_examples() {
    let listings = sample_listings();

    let sf = FilterCriteria::default()
        .with_search("San Francisco")
        .with_sort(SortKey::PriceLow);
    assert_eq!(ids(&apply(&listings, &sf)), vec!["1", "5", "4"]);

    let big = FilterCriteria::default()
        .with_bedrooms(BedroomBucket::FourPlus)
        .with_sort(SortKey::Rating);
    assert_eq!(ids(&apply(&listings, &big)), vec!["8", "3"]);

    let studios = FilterCriteria::default().with_bedrooms(BedroomBucket::Studio);
    assert_eq!(ids(&apply(&listings, &studios)), vec!["2"]);
}
