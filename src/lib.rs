//! DineMatch - Restaurant matching service for the DineMatch dining app
//!
//! This library powers the DineMatch backend: it scores restaurants against
//! diner preferences, merges group tastes two different ways, and ranks the
//! results for the search, group-search, and explore endpoints.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{fit_score, fit_score_percent, merge_preferences, rank_for_group, rank_for_profile};
pub use crate::models::{DinerPreferences, Restaurant, ScoredRestaurant, TasteProfile};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let restaurant = Restaurant {
            name: "Trattoria Roma".to_string(),
            cuisine: "Italian".to_string(),
            area: "Downtown".to_string(),
            price_level: Some(2),
            rating: Some(5.0),
            address: None,
            url: None,
            photo_url: None,
        };
        let profile = TasteProfile {
            cuisine: "Italian".to_string(),
            area: "Downtown".to_string(),
            budget: 2.0,
        };

        assert_eq!(fit_score(&restaurant, &profile), 125.0);
    }
}
