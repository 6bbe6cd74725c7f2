// Service exports
pub mod postgres;

pub use postgres::{
    explore_sql, PostgresClient, PostgresError, SearchLogEntry, CANDIDATE_POOL_SIZE,
};
