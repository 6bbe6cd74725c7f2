use std::cmp::Ordering;

use crate::core::group::average_fit_score;
use crate::core::scoring::fit_score;
use crate::models::{DinerPreferences, Restaurant, ScoredRestaurant, TasteProfile};

/// Order scored restaurants by fit score descending, breaking ties on rating
/// descending with unrated places last.
///
/// Note the asymmetry with scoring: `fit_score` treats a missing rating as
/// 0.0, but the tie-break keeps `Some(0.0)` ahead of `None`. Two restaurants
/// can therefore tie on score and still have a defined order here.
pub fn compare_by_fit(a: &ScoredRestaurant, b: &ScoredRestaurant) -> Ordering {
    b.fit_score
        .partial_cmp(&a.fit_score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| compare_ratings(a.restaurant.rating, b.restaurant.rating))
}

/// Rating descending, nulls last.
fn compare_ratings(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Score candidates against a single taste profile and rank them.
///
/// The sort is stable, so candidates that tie on both score and rating keep
/// the order they arrived in (rating descending from the fetch). `limit`
/// trims the ranked list when present.
pub fn rank_for_profile(
    candidates: Vec<Restaurant>,
    profile: &TasteProfile,
    limit: Option<usize>,
) -> Vec<ScoredRestaurant> {
    let mut scored: Vec<ScoredRestaurant> = candidates
        .into_iter()
        .map(|restaurant| {
            let score = fit_score(&restaurant, profile);
            ScoredRestaurant {
                restaurant,
                fit_score: score,
            }
        })
        .collect();

    scored.sort_by(compare_by_fit);

    if let Some(limit) = limit {
        scored.truncate(limit);
    }

    scored
}

/// Score candidates for a whole group and rank them by mean fit.
///
/// Each restaurant is scored against every member independently and ranked
/// by the average (see [`average_fit_score`]); the list is never truncated,
/// so the group sees its full spread of options. `group` must be non-empty,
/// which the group-search handler guarantees.
pub fn rank_for_group(
    candidates: Vec<Restaurant>,
    group: &[DinerPreferences],
) -> Vec<ScoredRestaurant> {
    let profiles: Vec<TasteProfile> = group.iter().map(DinerPreferences::profile).collect();

    let mut scored: Vec<ScoredRestaurant> = candidates
        .into_iter()
        .map(|restaurant| {
            let score = average_fit_score(&restaurant, &profiles);
            ScoredRestaurant {
                restaurant,
                fit_score: score,
            }
        })
        .collect();

    scored.sort_by(compare_by_fit);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant(name: &str, cuisine: &str, area: &str, price_level: Option<i32>, rating: Option<f64>) -> Restaurant {
        Restaurant {
            name: name.to_string(),
            cuisine: cuisine.to_string(),
            area: area.to_string(),
            price_level,
            rating,
            address: None,
            url: None,
            photo_url: None,
        }
    }

    fn scored(name: &str, fit_score: f64, rating: Option<f64>) -> ScoredRestaurant {
        ScoredRestaurant {
            restaurant: restaurant(name, "Italian", "Downtown", Some(2), rating),
            fit_score,
        }
    }

    fn profile(cuisine: &str, area: &str, budget: f64) -> TasteProfile {
        TasteProfile {
            cuisine: cuisine.to_string(),
            area: area.to_string(),
            budget,
        }
    }

    #[test]
    fn test_higher_fit_sorts_first() {
        let a = scored("low", 40.0, Some(5.0));
        let b = scored("high", 90.0, Some(1.0));

        assert_eq!(compare_by_fit(&b, &a), Ordering::Less);
        assert_eq!(compare_by_fit(&a, &b), Ordering::Greater);
    }

    #[test]
    fn test_fit_tie_breaks_on_rating() {
        let a = scored("better rated", 75.0, Some(4.8));
        let b = scored("worse rated", 75.0, Some(3.2));

        assert_eq!(compare_by_fit(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_unrated_sorts_after_zero_rating() {
        // A 0.0 rating scores the same as a missing one, but the tie-break
        // still puts the rated restaurant first.
        let zero = scored("rated zero", 75.0, Some(0.0));
        let none = scored("unrated", 75.0, None);

        assert_eq!(compare_by_fit(&zero, &none), Ordering::Less);
        assert_eq!(compare_by_fit(&none, &zero), Ordering::Greater);
        assert_eq!(compare_by_fit(&none, &none), Ordering::Equal);
    }

    #[test]
    fn test_rank_for_profile_orders_and_truncates() {
        let candidates = vec![
            restaurant("Far Miss", "Mexican", "Uptown", Some(4), Some(4.9)),
            restaurant("Perfect", "Italian", "Downtown", Some(2), Some(4.0)),
            restaurant("Close", "Italian", "Downtown", Some(3), Some(4.5)),
        ];

        let ranked = rank_for_profile(candidates, &profile("Italian", "Downtown", 2.0), Some(2));

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].restaurant.name, "Perfect");
        assert_eq!(ranked[0].fit_score, 120.0);
        assert_eq!(ranked[1].restaurant.name, "Close");
        // 50 + 25 + 15 + 4.5 * 5
        assert_eq!(ranked[1].fit_score, 112.5);
    }

    #[test]
    fn test_rank_for_profile_without_limit() {
        let candidates = vec![
            restaurant("One", "Italian", "Downtown", Some(2), None),
            restaurant("Two", "Italian", "Downtown", Some(2), None),
            restaurant("Three", "Italian", "Downtown", Some(2), None),
        ];

        let ranked = rank_for_profile(candidates, &profile("Italian", "Downtown", 2.0), None);
        assert_eq!(ranked.len(), 3);
    }

    #[test]
    fn test_equal_candidates_keep_fetch_order() {
        let candidates = vec![
            restaurant("Alpha", "Italian", "Downtown", Some(2), None),
            restaurant("Beta", "Italian", "Downtown", Some(2), None),
        ];

        let ranked = rank_for_profile(candidates, &profile("Italian", "Downtown", 2.0), None);

        assert_eq!(ranked[0].restaurant.name, "Alpha");
        assert_eq!(ranked[1].restaurant.name, "Beta");
    }

    #[test]
    fn test_rank_for_group_uses_mean_fit() {
        let friends = vec![
            DinerPreferences {
                name: "Ana".to_string(),
                email: "ana@example.com".to_string(),
                cuisine: "Italian".to_string(),
                area: "Downtown".to_string(),
                budget: 2,
            },
            DinerPreferences {
                name: "Ben".to_string(),
                email: "ben@example.com".to_string(),
                cuisine: "Mexican".to_string(),
                area: "Uptown".to_string(),
                budget: 4,
            },
        ];
        let candidates = vec![
            restaurant("Trattoria", "Italian", "Downtown", Some(2), None),
            restaurant("Cantina", "Mexican", "Uptown", Some(4), None),
            restaurant("Diner", "American", "Midtown", Some(3), None),
        ];

        let ranked = rank_for_group(candidates, &friends);

        // Trattoria: (100 + 0) / 2 = 50; Cantina: (0 + 100) / 2 = 50;
        // Diner: (15 + 15) / 2 = 15. The tied pair keeps fetch order.
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].restaurant.name, "Trattoria");
        assert_eq!(ranked[0].fit_score, 50.0);
        assert_eq!(ranked[1].restaurant.name, "Cantina");
        assert_eq!(ranked[1].fit_score, 50.0);
        assert_eq!(ranked[2].restaurant.name, "Diner");
        assert_eq!(ranked[2].fit_score, 15.0);
    }
}
