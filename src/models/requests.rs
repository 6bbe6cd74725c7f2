use serde::{de, Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::models::domain::{DinerPreferences, ExploreFilters};

/// Body of a group search: every friend's preferences, first friend first.
///
/// The array defaults to empty when the key is missing so the handler can
/// answer with the contract's "friends array is required" message instead of
/// a generic deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GroupSearchRequest {
    #[validate(nested)]
    #[serde(default)]
    pub friends: Vec<DinerPreferences>,
}

/// Query string of the explore listing; every filter is optional.
///
/// An empty-valued `budget=` counts as absent, like the string parameters;
/// only a non-empty value has to parse as an integer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExploreQuery {
    pub cuisine: Option<String>,
    pub area: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub budget: Option<i32>,
}

impl ExploreQuery {
    /// Normalize the raw query into filters, treating present-but-empty
    /// string parameters the same as absent ones.
    pub fn filters(&self) -> ExploreFilters {
        ExploreFilters {
            cuisine: self.cuisine.clone().filter(|s| !s.is_empty()),
            area: self.area.clone().filter(|s| !s.is_empty()),
            price_level: self.budget,
        }
    }
}

/// Deserializes an optional integer parameter, treating an empty value
/// the same as an absent one.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(text) => text.parse().map(Some).map_err(de::Error::custom),
    }
}
