// Core algorithm exports
pub mod group;
pub mod ranking;
pub mod scoring;

pub use group::{average_fit_score, merge_preferences};
pub use ranking::{compare_by_fit, rank_for_group, rank_for_profile};
pub use scoring::{fit_breakdown, fit_score, fit_score_percent, FitBreakdown};
