use crate::core::scoring::fit_score;
use crate::models::{DinerPreferences, Restaurant, TasteProfile};

/// Merge a group's preferences into a single taste profile.
///
/// This is the "agree on one order first" strategy: majority cuisine,
/// majority area, and the average budget rounded to the nearest price band.
/// The merged profile then goes through the ordinary single-profile scoring
/// path.
///
/// Ties in the majority votes resolve to the value seen first in the group,
/// so results are deterministic for any member order. Empty cuisine/area
/// values and zero budgets are skipped entirely; a group with nothing to
/// count yields empty strings and a 0.0 budget.
pub fn merge_preferences(group: &[DinerPreferences]) -> TasteProfile {
    TasteProfile {
        cuisine: majority_value(group.iter().map(|friend| friend.cuisine.as_str())),
        area: majority_value(group.iter().map(|friend| friend.area.as_str())),
        budget: average_budget(group),
    }
}

/// Average the per-member fit scores for one restaurant.
///
/// This is the "score for everyone, then split the difference" strategy used
/// by the group-search endpoint: the restaurant is scored against every
/// member's profile independently and the true mean is returned, unrounded.
/// `profiles` must be non-empty.
///
/// Deliberately NOT the same thing as scoring against a merged profile: the
/// majority vote is non-linear in the members, and the two strategies rank
/// differently for most multi-member groups.
pub fn average_fit_score(restaurant: &Restaurant, profiles: &[TasteProfile]) -> f64 {
    let total: f64 = profiles
        .iter()
        .map(|profile| fit_score(restaurant, profile))
        .sum();

    total / profiles.len() as f64
}

/// Majority vote over non-empty values, first-encountered value winning ties.
fn majority_value<'a>(values: impl Iterator<Item = &'a str>) -> String {
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for value in values {
        if value.is_empty() {
            continue;
        }
        match counts.iter_mut().find(|(seen, _)| *seen == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value, 1)),
        }
    }

    // Stable sort: tied counts keep their first-encounter order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .first()
        .map(|(value, _)| (*value).to_string())
        .unwrap_or_default()
}

/// Mean of the non-zero budgets, rounded half up; 0.0 when none are set.
fn average_budget(group: &[DinerPreferences]) -> f64 {
    let budgets: Vec<i32> = group
        .iter()
        .map(|friend| friend.budget)
        .filter(|budget| *budget != 0)
        .collect();

    if budgets.is_empty() {
        return 0.0;
    }

    (budgets.iter().sum::<i32>() as f64 / budgets.len() as f64).round()
}
