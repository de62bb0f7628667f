// benches/jsobj.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use trip_manager::{
    jsobj::{js_to_json, literal_extent},
    store,
    trip::{ItineraryDay, Trip},
};

/// A catalog roughly the size the site grows to, rendered the way the
/// manager writes it.
fn sample_file(n: usize) -> String {
    let trips: Vec<Trip> = (0..n)
        .map(|i| {
            let mut t = Trip::new(format!("trip_{i}"), format!("Trip number {i} - 'quoted' \"too\""));
            t.location = s("Chikmagalur, Karnataka");
            t.price = format!("{},999", i % 9 + 1);
            t.about = s("Shola forests, grassland ridges and a sunrise summit.\nBring rain gear.");
            t.available_dates = vec![s("Jan 15-17"), s("Feb 02"), s("Mar 28 - Apr 02")];
            t.highlights = vec![s("Sunrise"), s("Waterfalls"), s("Campfire")];
            t.itinerary = (1..=3)
                .map(|d| ItineraryDay {
                    day: format!("Day {d}"),
                    title: s("Trek"),
                    activities: vec![s("Breakfast"), s("Hike 12 km"), s("Dinner")],
                })
                .collect();
            t.inclusions = vec![s("Meals"), s("Stay")];
            t.exclusions = vec![s("Insurance")];
            t
        })
        .collect();
    store::render_trips(&trips, chrono::Local::now())
}

fn s(x: &str) -> String {
    x.to_string()
}

fn bench_scanner(c: &mut Criterion) {
    let doc = sample_file(60);
    let start = doc.find("const tripsData = ").map(|i| i + "const tripsData = ".len()).unwrap_or(0);
    let literal = &doc[start..start + literal_extent(&doc[start..]).unwrap_or(0)];

    c.bench_function("literal_extent", |b| {
        b.iter(|| black_box(literal_extent(black_box(&doc[start..]))))
    });

    c.bench_function("js_to_json", |b| {
        b.iter(|| black_box(js_to_json(black_box(literal)).len()))
    });

    c.bench_function("parse_trips", |b| {
        b.iter(|| black_box(store::parse_trips(black_box(&doc)).map(|t| t.len()).unwrap_or(0)))
    });
}

criterion_group!(benches, bench_scanner);
criterion_main!(benches);
