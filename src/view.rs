use crate::filters::{self, BedroomBucket, FilterCriteria, PriceBucket, PropertyTypeFilter, SortKey};
use crate::models::PropertyRecord;
use std::collections::HashSet;
use tracing::debug;

/// Browsing state for the listings page.
///
/// Borrows the collection it displays. Setters only record the new criteria;
/// call [`ListingView::refresh`] to recompute the visible listings.
#[derive(Debug)]
pub struct ListingView<'a> {
    listings: &'a [PropertyRecord],
    criteria: FilterCriteria,
    visible: Vec<&'a PropertyRecord>,
    stale: bool,
    saved: HashSet<String>,
}

impl<'a> ListingView<'a> {
    pub fn new(listings: &'a [PropertyRecord]) -> Self {
        Self::with_criteria(listings, FilterCriteria::default())
    }

    pub fn with_criteria(listings: &'a [PropertyRecord], criteria: FilterCriteria) -> Self {
        let visible = filters::apply(listings, &criteria);
        Self {
            listings,
            criteria,
            visible,
            stale: false,
            saved: HashSet::new(),
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    fn update(&mut self, criteria: FilterCriteria) {
        if criteria != self.criteria {
            self.criteria = criteria;
            self.stale = true;
        }
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        let criteria = self.criteria.clone().with_search(search);
        self.update(criteria);
    }

    pub fn set_price_bucket(&mut self, price: PriceBucket) {
        let criteria = self.criteria.clone().with_price(price);
        self.update(criteria);
    }

    pub fn set_bedroom_bucket(&mut self, bedrooms: BedroomBucket) {
        let criteria = self.criteria.clone().with_bedrooms(bedrooms);
        self.update(criteria);
    }

    pub fn set_property_type(&mut self, property_type: PropertyTypeFilter) {
        let criteria = self.criteria.clone().with_property_type(property_type);
        self.update(criteria);
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        let criteria = self.criteria.clone().with_sort(sort);
        self.update(criteria);
    }

    /// Clears every filter and the search term. The sort key is kept.
    pub fn reset_filters(&mut self) {
        let criteria = FilterCriteria::default().with_sort(self.criteria.sort);
        self.update(criteria);
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Recomputes the visible listings if the criteria changed since the last run.
    pub fn refresh(&mut self) -> &[&'a PropertyRecord] {
        if self.stale {
            self.visible = filters::apply(self.listings, &self.criteria);
            self.stale = false;
        }
        &self.visible
    }

    /// Listings as of the last refresh.
    pub fn visible(&self) -> &[&'a PropertyRecord] {
        &self.visible
    }

    /// Detail lookup over the whole collection, regardless of filters.
    pub fn find(&self, id: &str) -> Option<&'a PropertyRecord> {
        self.listings.iter().find(|listing| listing.id == id)
    }

    /// Toggles the saved marker for `id`; returns whether it is now saved.
    /// Ids that are not in the collection are ignored.
    pub fn toggle_saved(&mut self, id: &str) -> bool {
        if self.find(id).is_none() {
            debug!(id, "ignoring save toggle for unknown listing");
            return false;
        }
        if self.saved.remove(id) {
            false
        } else {
            self.saved.insert(id.to_string());
            true
        }
    }

    pub fn is_saved(&self, id: &str) -> bool {
        self.saved.contains(id)
    }

    /// Saved listings in collection order.
    pub fn saved_listings(&self) -> Vec<&'a PropertyRecord> {
        self.listings
            .iter()
            .filter(|listing| self.saved.contains(&listing.id))
            .collect()
    }

    pub fn summary(&self) -> String {
        format!(
            "Showing {} of {} properties",
            self.visible.len(),
            self.listings.len()
        )
    }
}
