//! Benchmarks for the row filter
//!
//! Run with: cargo bench --package movie-filter
//!
//! Uses a synthetic dataset so the benchmark does not depend on a CSV file
//! being present.

use criterion::{black_box, criterion_group, criterion_main, Criterion as Bench};
use data_loader::MovieRow;
use movie_filter::{ActiveCriteria, Criterion, RowFilter};

const GENRES: [&str; 5] = ["Action", "Drama", "Comedy", "Crime", "Sci-Fi"];

fn synthetic_rows(count: usize) -> Vec<MovieRow> {
    (0..count)
        .map(|i| {
            MovieRow::from_pairs([
                ("title", format!("Movie {i}")),
                ("released_year", format!("{}", 1920 + i % 100)),
                ("imdb_rating", format!("{:.1}", 7.5 + (i % 20) as f64 / 10.0)),
                (
                    "genre",
                    format!("{}, {}", GENRES[i % 5], GENRES[(i + 2) % 5]),
                ),
                ("runtime", format!("{} min", 80 + i % 100)),
                ("no_of_votes", format!("{}", 25_000 + i * 37)),
                (
                    "gross",
                    if i % 7 == 0 {
                        String::new()
                    } else {
                        format!("{},{:03}", i, i % 1000)
                    },
                ),
                ("director", format!("Director {}", i % 50)),
                ("star_1", format!("Actor {}", i % 40)),
                ("star_2", format!("Actor {}", (i + 1) % 40)),
                ("star_3", format!("Actor {}", (i + 2) % 40)),
                ("star_4", format!("Actor {}", (i + 3) % 40)),
            ])
        })
        .collect()
}

fn bench_filter_all_criteria(c: &mut Bench) {
    let rows = synthetic_rows(1000);
    let criteria = ActiveCriteria::new()
        .with(Criterion::YearAfter(1950))
        .with(Criterion::RatingAbove(7.8))
        .with(Criterion::VotesMin(30_000))
        .with(Criterion::RuntimeLessThan(170))
        .with(Criterion::GrossMin(1))
        .with(Criterion::genre(&["Drama", "Crime"]).expect("valid genre"))
        .with(Criterion::actor(&["Actor 3"]).expect("valid actor"));
    let filter = RowFilter::new(&criteria).expect("consistent criteria");

    c.bench_function("row_filter_all_criteria", |b| {
        b.iter(|| {
            let kept = filter.apply(black_box(rows.clone())).unwrap();
            black_box(kept)
        })
    });
}

fn bench_filter_no_criteria(c: &mut Bench) {
    let rows = synthetic_rows(1000);
    let filter = RowFilter::empty();

    c.bench_function("row_filter_identity", |b| {
        b.iter(|| {
            let kept = filter.apply(black_box(rows.clone())).unwrap();
            black_box(kept)
        })
    });
}

criterion_group!(benches, bench_filter_all_criteria, bench_filter_no_criteria);
criterion_main!(benches);
