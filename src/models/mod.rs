// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{DinerPreferences, ExploreFilters, Restaurant, ScoredRestaurant, TasteProfile};
pub use requests::{ExploreQuery, GroupSearchRequest};
pub use responses::{
    ErrorResponse, ExploreResponse, GroupSearchResponse, HealthResponse, SearchResponse,
};
