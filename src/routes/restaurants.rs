use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{
    DinerPreferences, ErrorResponse, ExploreQuery, ExploreResponse, GroupSearchRequest,
    GroupSearchResponse, HealthResponse, SearchResponse,
};
use crate::services::{PostgresClient, SearchLogEntry, CANDIDATE_POOL_SIZE};
use crate::core::{rank_for_group, rank_for_profile};
use std::sync::Arc;

/// How many scored restaurants a single-diner search returns.
pub const SEARCH_RESULT_LIMIT: usize = 20;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub postgres: Arc<PostgresClient>,
}

/// Configure all restaurant-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/search", web::post().to(search))
        .route("/group-search", web::post().to(group_search))
        .route("/explore", web::get().to(explore));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    // Check PostgreSQL health
    let pg_healthy = state.postgres.health_check().await.unwrap_or(false);

    let status = if pg_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Single-diner search endpoint
///
/// POST /search
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "email": "string",
///   "cuisine": "string",
///   "area": "string",
///   "budget": 2
/// }
/// ```
///
/// Returns the top scored restaurants for the submitted preferences and
/// echoes the preferences back as `query`. Every successful search also
/// appends a row of search history.
async fn search(
    state: web::Data<AppState>,
    req: web::Json<DinerPreferences>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for search request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Missing required fields".to_string(),
            detail: None,
        });
    }

    let preferences = req.into_inner();

    tracing::info!(
        "Searching restaurants for {}: cuisine={}, area={}, budget={}",
        preferences.email,
        preferences.cuisine,
        preferences.area,
        preferences.budget
    );

    let candidates = match state.postgres.fetch_candidates(CANDIDATE_POOL_SIZE).await {
        Ok(candidates) => candidates,
        Err(e) => {
            tracing::error!("Failed to fetch candidates: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "DB error".to_string(),
                detail: Some(e.to_string()),
            });
        }
    };

    let results = rank_for_profile(candidates, &preferences.profile(), Some(SEARCH_RESULT_LIMIT));

    // Search history is written before responding; a failed write fails
    // the request.
    let top_fit_score = results.first().map(|scored| scored.fit_score);
    let entry = SearchLogEntry::new(&preferences, top_fit_score);
    if let Err(e) = state.postgres.log_search(&entry).await {
        tracing::error!("Failed to log search for {}: {}", preferences.email, e);
        return HttpResponse::InternalServerError().json(ErrorResponse {
            error: "DB error".to_string(),
            detail: Some(e.to_string()),
        });
    }

    tracing::info!(
        "Returning {} results for {}",
        results.len(),
        preferences.email
    );

    HttpResponse::Ok().json(SearchResponse {
        query: preferences,
        results,
    })
}

/// Group search endpoint
///
/// POST /group-search
///
/// Request body:
/// ```json
/// {
///   "friends": [
///     {"name": "string", "email": "string", "cuisine": "string", "area": "string", "budget": 2}
///   ]
/// }
/// ```
///
/// Scores every candidate against every member and ranks by the average
/// fit, returning the full ranked list. History is attributed to the
/// first member of the group.
async fn group_search(
    state: web::Data<AppState>,
    req: web::Json<GroupSearchRequest>,
) -> impl Responder {
    if req.friends.is_empty() {
        tracing::info!("Group search rejected: no friends submitted");
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "friends array is required".to_string(),
            detail: None,
        });
    }

    // Validate every member
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for group search request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Missing required fields".to_string(),
            detail: None,
        });
    }

    let friends = req.into_inner().friends;

    tracing::info!("Group search for {} friends", friends.len());

    let candidates = match state.postgres.fetch_candidates(CANDIDATE_POOL_SIZE).await {
        Ok(candidates) => candidates,
        Err(e) => {
            tracing::error!("Failed to fetch candidates: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "DB error".to_string(),
                detail: Some(e.to_string()),
            });
        }
    };

    let results = rank_for_group(candidates, &friends);

    let top_fit_score = results.first().map(|scored| scored.fit_score);
    // Non-empty guarded above; the first member gets the history row.
    let entry = SearchLogEntry::new(&friends[0], top_fit_score);
    if let Err(e) = state.postgres.log_search(&entry).await {
        tracing::error!("Failed to log group search: {}", e);
        return HttpResponse::InternalServerError().json(ErrorResponse {
            error: "DB error".to_string(),
            detail: Some(e.to_string()),
        });
    }

    tracing::info!("Returning {} results for the group", results.len());

    HttpResponse::Ok().json(GroupSearchResponse { results })
}

/// Catalog browsing endpoint
///
/// GET /explore?cuisine=&area=&budget=
///
/// All filters optional; present ones are exact matches (budget filters
/// price_level directly). No scoring.
async fn explore(
    state: web::Data<AppState>,
    query: web::Query<ExploreQuery>,
) -> impl Responder {
    let filters = query.filters();

    tracing::debug!("Explore with filters: {:?}", filters);

    match state.postgres.explore(&filters).await {
        Ok(results) => HttpResponse::Ok().json(ExploreResponse { results }),
        Err(e) => {
            tracing::error!("Explore query failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "DB error".to_string(),
                detail: Some(e.to_string()),
            })
        }
    }
}
