use serde::{Deserialize, Serialize};
use validator::Validate;

/// A restaurant row from the candidate table.
///
/// `price_level` (1-4) and `rating` (0-5) are nullable in the source data;
/// scoring coerces both to 0 while ordering keeps NULL ratings last, so the
/// options are preserved here rather than defaulted at the edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    pub cuisine: String,
    pub area: String,
    pub price_level: Option<i32>,
    pub rating: Option<f64>,
    pub address: Option<String>,
    pub url: Option<String>,
    pub photo_url: Option<String>,
}

/// One diner's search submission: identity plus dining preferences.
///
/// A submission is valid only when every field is filled in and the budget
/// sits in the 1-4 price band. The same shape is used for the single-search
/// body and for each member of a group search. Keys missing from the body
/// deserialize to their empty values and fail validation, so an incomplete
/// submission gets the contract's "Missing required fields" answer instead
/// of a deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DinerPreferences {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub name: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub email: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub cuisine: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub area: String,
    #[validate(range(min = 1, max = 4))]
    #[serde(default)]
    pub budget: i32,
}

impl DinerPreferences {
    /// The taste profile scoring runs against for this diner alone.
    pub fn profile(&self) -> TasteProfile {
        TasteProfile {
            cuisine: self.cuisine.clone(),
            area: self.area.clone(),
            budget: self.budget as f64,
        }
    }
}

/// The `{cuisine, area, budget}` triple the score model consumes.
///
/// Derived either from a single [`DinerPreferences`] or by merging a whole
/// group's preferences; budget is an f64 because the merged value passes
/// through an arithmetic mean. Request-scoped: computed, used, discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct TasteProfile {
    pub cuisine: String,
    pub area: String,
    pub budget: f64,
}

/// A restaurant together with its computed fit score.
///
/// Serializes flat (restaurant columns plus `fit_score`) to match the wire
/// contract the result cards consume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredRestaurant {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    pub fit_score: f64,
}

/// Optional equality filters for the explore listing.
///
/// Each field is applied only when present; the budget query parameter maps
/// to an exact `price_level` match, not a tolerance band.
#[derive(Debug, Clone, Default)]
pub struct ExploreFilters {
    pub cuisine: Option<String>,
    pub area: Option<String>,
    pub price_level: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_preferences() -> DinerPreferences {
        DinerPreferences {
            name: "Dana".to_string(),
            email: "dana@example.com".to_string(),
            cuisine: "Italian".to_string(),
            area: "Downtown".to_string(),
            budget: 2,
        }
    }

    #[test]
    fn test_valid_preferences_pass() {
        assert!(valid_preferences().validate().is_ok());
    }

    #[test]
    fn test_empty_field_rejected() {
        let mut prefs = valid_preferences();
        prefs.cuisine = String::new();
        assert!(prefs.validate().is_err());
    }

    #[test]
    fn test_zero_budget_rejected() {
        let mut prefs = valid_preferences();
        prefs.budget = 0;
        assert!(prefs.validate().is_err());
    }

    #[test]
    fn test_missing_budget_key_defaults_then_fails_validation() {
        let body = r#"{"name":"Dana","email":"dana@example.com","cuisine":"Italian","area":"Downtown"}"#;
        let prefs: DinerPreferences = serde_json::from_str(body).unwrap();
        assert_eq!(prefs.budget, 0);
        assert!(prefs.validate().is_err());
    }

    #[test]
    fn test_empty_body_defaults_every_field() {
        let prefs: DinerPreferences = serde_json::from_str("{}").unwrap();
        assert!(prefs.name.is_empty());
        assert!(prefs.email.is_empty());
        assert!(prefs.cuisine.is_empty());
        assert!(prefs.area.is_empty());
        assert_eq!(prefs.budget, 0);
        assert!(prefs.validate().is_err());
    }

    #[test]
    fn test_out_of_band_budget_rejected() {
        let mut prefs = valid_preferences();
        prefs.budget = 5;
        assert!(prefs.validate().is_err());
    }

    #[test]
    fn test_profile_widens_budget() {
        let profile = valid_preferences().profile();
        assert_eq!(profile.cuisine, "Italian");
        assert_eq!(profile.area, "Downtown");
        assert_eq!(profile.budget, 2.0);
    }
}
