// Criterion benchmarks for DineMatch

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dinematch::core::{fit_score, merge_preferences, rank_for_group, rank_for_profile};
use dinematch::models::{DinerPreferences, Restaurant, TasteProfile};

fn create_candidate(id: usize) -> Restaurant {
    let cuisines = ["Italian", "Mexican", "Thai", "American", "Sushi"];
    let areas = ["Downtown", "Uptown", "Midtown", "Harbor"];

    Restaurant {
        name: format!("Place {:04}", id),
        cuisine: cuisines[id % cuisines.len()].to_string(),
        area: areas[id % areas.len()].to_string(),
        price_level: Some(1 + (id % 4) as i32),
        rating: if id % 7 == 0 {
            None
        } else {
            Some(2.0 + (id % 30) as f64 * 0.1)
        },
        address: None,
        url: None,
        photo_url: None,
    }
}

fn create_profile() -> TasteProfile {
    TasteProfile {
        cuisine: "Italian".to_string(),
        area: "Downtown".to_string(),
        budget: 2.0,
    }
}

fn create_group(size: usize) -> Vec<DinerPreferences> {
    let cuisines = ["Italian", "Mexican", "Thai"];
    let areas = ["Downtown", "Uptown"];

    (0..size)
        .map(|i| DinerPreferences {
            name: format!("Friend {}", i),
            email: format!("friend{}@example.com", i),
            cuisine: cuisines[i % cuisines.len()].to_string(),
            area: areas[i % areas.len()].to_string(),
            budget: 1 + (i % 4) as i32,
        })
        .collect()
}

fn bench_fit_score(c: &mut Criterion) {
    let restaurant = create_candidate(1);
    let profile = create_profile();

    c.bench_function("fit_score", |b| {
        b.iter(|| fit_score(black_box(&restaurant), black_box(&profile)));
    });
}

fn bench_merge_preferences(c: &mut Criterion) {
    let group = create_group(8);

    c.bench_function("merge_preferences_8_friends", |b| {
        b.iter(|| merge_preferences(black_box(&group)));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let profile = create_profile();

    let mut group = c.benchmark_group("ranking");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<Restaurant> = (0..*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::new("rank_for_profile", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    rank_for_profile(
                        black_box(candidates.clone()),
                        black_box(&profile),
                        black_box(Some(20)),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_group_ranking(c: &mut Criterion) {
    let candidates: Vec<Restaurant> = (0..200).map(create_candidate).collect();

    let mut group = c.benchmark_group("group_ranking");

    for group_size in [2, 4, 8].iter() {
        let friends = create_group(*group_size);

        group.bench_with_input(
            BenchmarkId::new("rank_for_group", group_size),
            group_size,
            |b, _| {
                b.iter(|| rank_for_group(black_box(candidates.clone()), black_box(&friends)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_fit_score,
    bench_merge_preferences,
    bench_ranking,
    bench_group_ranking
);

criterion_main!(benches);
