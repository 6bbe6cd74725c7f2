//! Seed data generator for DineMatch
//!
//! Writes a SQL file with INSERT statements for the restaurants table so a
//! development database has something to score against.
//!
//! Run: cargo run --bin seed_restaurants
//! Apply: psql "$DATABASE_URL" -f seed_restaurants.sql

use std::fs::File;
use std::io::{BufWriter, Write};

const NAME_PREFIXES: &[&str] = &[
    "Golden", "Little", "Old Town", "Blue Door", "Mama's", "The Corner", "Brick Lane",
];

const NAME_STEMS: &[&str] = &[
    "Table", "Kitchen", "Grill", "Bistro", "Cantina", "Garden", "House", "Oven", "Spoon",
];

const CUISINES: &[&str] = &[
    "Italian", "Mexican", "Thai", "American", "Sushi", "Indian", "Greek",
];

const AREAS: &[&str] = &["Downtown", "Uptown", "Midtown", "Harbor", "Old Quarter"];

const STREETS: &[&str] = &["Market", "Harbor", "Elm", "Station", "Vine", "College"];

fn escape_sql(s: &str) -> String {
    s.replace('\'', "''")
}

fn quoted(s: &str) -> String {
    format!("'{}'", escape_sql(s))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let num_restaurants = 60;

    println!("Generating {} seed restaurants...", num_restaurants);

    let mut out = BufWriter::new(File::create("seed_restaurants.sql")?);

    writeln!(out, "-- DineMatch seed data, generated by seed_restaurants")?;
    writeln!(out, "BEGIN;")?;

    for i in 0..num_restaurants {
        // Co-prime pool sizes keep the composed names unique.
        let name = format!(
            "{} {}",
            NAME_PREFIXES[i % NAME_PREFIXES.len()],
            NAME_STEMS[i % NAME_STEMS.len()]
        );
        let cuisine = CUISINES[i % CUISINES.len()];
        let area = AREAS[i % AREAS.len()];

        // A slice of each column stays NULL so the null-handling paths get
        // real data to chew on.
        let price_level = if i % 11 == 10 {
            "NULL".to_string()
        } else {
            (1 + i % 4).to_string()
        };
        let rating = if i % 7 == 6 {
            "NULL".to_string()
        } else {
            format!("{:.1}", 3.0 + ((i * 13) % 21) as f64 / 10.0)
        };

        let address = quoted(&format!(
            "{} {} St",
            10 + (i * 3) % 90,
            STREETS[i % STREETS.len()]
        ));
        let url = if i % 3 == 0 {
            "NULL".to_string()
        } else {
            quoted(&format!("https://dinematch.example/r/{}", i))
        };
        let photo_url = if i % 4 == 0 {
            "NULL".to_string()
        } else {
            quoted(&format!("https://dinematch.example/photos/{}.jpg", i))
        };

        writeln!(
            out,
            "INSERT INTO restaurants (name, cuisine, area, price_level, rating, address, url, photo_url) VALUES ({}, {}, {}, {}, {}, {}, {}, {});",
            quoted(&name),
            quoted(cuisine),
            quoted(area),
            price_level,
            rating,
            address,
            url,
            photo_url,
        )?;
    }

    writeln!(out, "COMMIT;")?;

    println!("Created seed_restaurants.sql with {} restaurants", num_restaurants);
    println!();
    println!("Apply it with:");
    println!("  psql \"$DATABASE_URL\" -f seed_restaurants.sql");
    println!();

    Ok(())
}
