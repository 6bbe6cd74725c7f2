use crate::models::{Restaurant, TasteProfile};

/// Points for an exact cuisine match.
pub const CUISINE_MATCH_POINTS: f64 = 50.0;
/// Points for an exact area match.
pub const AREA_MATCH_POINTS: f64 = 25.0;
/// Points when the price level equals the budget.
pub const PRICE_EXACT_POINTS: f64 = 25.0;
/// Points when the price level is one band off the budget.
pub const PRICE_ADJACENT_POINTS: f64 = 15.0;
/// Multiplier applied to the 0-5 rating.
pub const RATING_BONUS_PER_STAR: f64 = 5.0;
/// Highest reachable score for a 0-5 rating: 50 + 25 + 25 + 5 * 5.
pub const MAX_FIT_SCORE: f64 = 125.0;

/// Calculate the fit score for a restaurant against one taste profile.
///
/// Scoring formula:
/// - +50 for an exact cuisine match
/// - +25 for an exact area match
/// - +25 when |price_level - budget| == 0, +15 when it is 1, else nothing
/// - +rating * 5 as a quality bonus, uncapped
///
/// A missing price level counts as 0 for the price distance and a missing
/// rating contributes no bonus. The comparator in [`crate::core::ranking`]
/// does NOT mirror that coercion: a missing rating sorts after a 0.0 rating
/// on ties. Both behaviors are intentional and relied on by the frontend.
pub fn fit_score(restaurant: &Restaurant, profile: &TasteProfile) -> f64 {
    let mut score = 0.0;

    if restaurant.cuisine == profile.cuisine {
        score += CUISINE_MATCH_POINTS;
    }

    if restaurant.area == profile.area {
        score += AREA_MATCH_POINTS;
    }

    let price_level = restaurant.price_level.unwrap_or(0) as f64;
    let diff = (price_level - profile.budget).abs();
    if diff == 0.0 {
        score += PRICE_EXACT_POINTS;
    } else if diff == 1.0 {
        score += PRICE_ADJACENT_POINTS;
    }

    score += restaurant.rating.unwrap_or(0.0) * RATING_BONUS_PER_STAR;

    score
}

/// Normalize a raw fit score to the 0-100 percentage shown on result cards.
///
/// Rounds half up, like the badge rendering does. Scores above the 125
/// maximum (ratings past 5 stars) normalize past 100; callers display the
/// value as-is.
#[inline]
pub fn fit_score_percent(score: f64) -> i64 {
    (score / MAX_FIT_SCORE * 100.0).round() as i64
}

/// Per-component match percentages for the fit breakdown meters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitBreakdown {
    pub cuisine_pct: u8,
    pub area_pct: u8,
    pub price_pct: u8,
}

/// Break a match down into the three meter values shown for the top result.
///
/// Cuisine and area are all-or-nothing; the price meter keeps a 60% partial
/// fill for the one-band-off case so a near-miss still reads as a near-miss.
pub fn fit_breakdown(restaurant: &Restaurant, profile: &TasteProfile) -> FitBreakdown {
    let cuisine_pct = if restaurant.cuisine == profile.cuisine { 100 } else { 0 };
    let area_pct = if restaurant.area == profile.area { 100 } else { 0 };

    let price_level = restaurant.price_level.unwrap_or(0) as f64;
    let diff = (price_level - profile.budget).abs();
    let price_pct = if diff == 0.0 {
        100
    } else if diff == 1.0 {
        60
    } else {
        0
    };

    FitBreakdown {
        cuisine_pct,
        area_pct,
        price_pct,
    }
}
