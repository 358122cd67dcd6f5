//! Rental marketplace core: listing data, the search/filter/sort pipeline,
//! browsing state, listing providers and the sign-in/sign-up flow.

pub mod auth;
pub mod config;
pub mod display;
pub mod filters;
pub mod models;
pub mod sources;
pub mod view;

pub use filters::{apply, FilterCriteria};
pub use models::{PropertyRecord, PropertyType};
pub use view::ListingView;
