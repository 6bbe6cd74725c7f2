use serde::{Deserialize, Serialize};

use crate::models::domain::{DinerPreferences, Restaurant, ScoredRestaurant};

/// Response for a single search: the submitted preferences echoed back plus
/// the top-scored candidates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: DinerPreferences,
    pub results: Vec<ScoredRestaurant>,
}

/// Response for a group search: every candidate, ranked by averaged score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupSearchResponse {
    pub results: Vec<ScoredRestaurant>,
}

/// Response for the explore listing: filtered rows, no scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExploreResponse {
    pub results: Vec<Restaurant>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Wire error: `{error}` for validation rejects, `{error, detail}` for
/// data-source failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}
