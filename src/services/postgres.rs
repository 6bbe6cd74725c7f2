use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;

use crate::config::DatabaseSettings;
use crate::models::{DinerPreferences, ExploreFilters, Restaurant};

/// How many candidates a scoring request pulls from the table at most.
/// Explore queries share the same cap.
pub const CANDIDATE_POOL_SIZE: i64 = 200;

/// Errors that can occur when interacting with PostgreSQL
#[derive(Debug, Error)]
pub enum PostgresError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),
}

/// One row of search history, written after every scored search.
#[derive(Debug, Clone)]
pub struct SearchLogEntry {
    pub name: String,
    pub email: String,
    pub cuisine: String,
    pub area: String,
    pub budget: i32,
    pub top_fit_score: Option<f64>,
}

impl SearchLogEntry {
    /// Build a log entry from the requester's preferences and the fit score
    /// of their best result (None when the search came back empty).
    pub fn new(preferences: &DinerPreferences, top_fit_score: Option<f64>) -> Self {
        Self {
            name: preferences.name.clone(),
            email: preferences.email.clone(),
            cuisine: preferences.cuisine.clone(),
            area: preferences.area.clone(),
            budget: preferences.budget,
            top_fit_score,
        }
    }
}

/// PostgreSQL client for the restaurant catalog and search history
///
/// Holds the connection pool shared across workers. Restaurants are read
/// in rating order and scored in-process; the client never ranks.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout_secs: u64,
        idle_timeout_secs: u64,
    ) -> Result<Self, PostgresError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(idle_timeout_secs))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(settings: &DatabaseSettings) -> Result<Self, PostgresError> {
        tracing::info!("Connecting to PostgreSQL with URL: {}", settings.url);

        Self::new(
            &settings.url,
            settings.max_connections.unwrap_or(10),
            settings.min_connections.unwrap_or(1),
            settings.acquire_timeout_secs.unwrap_or(5),
            settings.idle_timeout_secs.unwrap_or(600),
        )
        .await
    }

    /// Fetch the candidate pool for scoring.
    ///
    /// Rows come back best-rated first with unrated places last and ties
    /// broken by name, so the stable ranking sort downstream inherits a
    /// sensible order for equal scores.
    pub async fn fetch_candidates(&self, limit: i64) -> Result<Vec<Restaurant>, PostgresError> {
        let query = r#"
            SELECT name, cuisine, area, price_level, rating, address, url, photo_url
            FROM restaurants
            ORDER BY rating DESC NULLS LAST, name ASC
            LIMIT $1
        "#;

        let rows = sqlx::query(query).bind(limit).fetch_all(&self.pool).await?;

        let restaurants: Vec<Restaurant> = rows.iter().map(restaurant_from_row).collect();

        tracing::debug!("Fetched {} candidate restaurants", restaurants.len());

        Ok(restaurants)
    }

    /// Browse the catalog with optional equality filters, no scoring.
    pub async fn explore(&self, filters: &ExploreFilters) -> Result<Vec<Restaurant>, PostgresError> {
        let query = explore_sql(filters);

        let mut q = sqlx::query(&query);
        if let Some(cuisine) = &filters.cuisine {
            q = q.bind(cuisine.as_str());
        }
        if let Some(area) = &filters.area {
            q = q.bind(area.as_str());
        }
        if let Some(price_level) = filters.price_level {
            q = q.bind(price_level);
        }
        q = q.bind(CANDIDATE_POOL_SIZE);

        let rows = q.fetch_all(&self.pool).await?;

        let restaurants: Vec<Restaurant> = rows.iter().map(restaurant_from_row).collect();

        tracing::debug!("Explore returned {} restaurants", restaurants.len());

        Ok(restaurants)
    }

    /// Append one row of search history.
    pub async fn log_search(&self, entry: &SearchLogEntry) -> Result<(), PostgresError> {
        let query = r#"
            INSERT INTO search_logs (name, email, cuisine, area, budget, top_fit_score)
            VALUES ($1, $2, $3, $4, $5, $6)
        "#;

        sqlx::query(query)
            .bind(entry.name.as_str())
            .bind(entry.email.as_str())
            .bind(entry.cuisine.as_str())
            .bind(entry.area.as_str())
            .bind(entry.budget)
            .bind(entry.top_fit_score)
            .execute(&self.pool)
            .await?;

        tracing::debug!("Logged search for {}", entry.email);

        Ok(())
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, PostgresError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

/// Assemble the explore statement for whichever filters are present.
///
/// Filters are ANDed equality checks in a fixed order (cuisine, area,
/// price level) with sequential placeholders; the row cap is always the
/// final placeholder. Pure text assembly, so it can be tested without a
/// database.
pub fn explore_sql(filters: &ExploreFilters) -> String {
    let mut sql = String::from(
        "SELECT name, cuisine, area, price_level, rating, address, url, photo_url FROM restaurants",
    );
    let mut conditions: Vec<String> = Vec::new();
    let mut placeholder = 1;

    if filters.cuisine.is_some() {
        conditions.push(format!("cuisine = ${}", placeholder));
        placeholder += 1;
    }
    if filters.area.is_some() {
        conditions.push(format!("area = ${}", placeholder));
        placeholder += 1;
    }
    if filters.price_level.is_some() {
        conditions.push(format!("price_level = ${}", placeholder));
        placeholder += 1;
    }

    if !conditions.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&conditions.join(" AND "));
    }

    sql.push_str(" ORDER BY rating DESC NULLS LAST, name ASC LIMIT $");
    sql.push_str(&placeholder.to_string());

    sql
}

fn restaurant_from_row(row: &PgRow) -> Restaurant {
    Restaurant {
        name: row.get("name"),
        cuisine: row.get("cuisine"),
        area: row.get("area"),
        price_level: row.get("price_level"),
        rating: row.get("rating"),
        address: row.get("address"),
        url: row.get("url"),
        photo_url: row.get("photo_url"),
    }
}
