use cadence_core::models::RecurrencePattern;
use cadence_core::recurrence::RecurrenceRule;
use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 31).unwrap()
}

fn bench_next_occurrence(c: &mut Criterion) {
    let daily = RecurrenceRule::new(RecurrencePattern::Daily, 2, anchor(), None).unwrap();
    let monthly = RecurrenceRule::new(RecurrencePattern::Monthly, 1, anchor(), None).unwrap();
    let after = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

    c.bench_function("next_occurrence_after/daily", |b| {
        b.iter(|| daily.next_occurrence_after(black_box(after)))
    });
    c.bench_function("next_occurrence_after/monthly_clamped", |b| {
        b.iter(|| monthly.next_occurrence_after(black_box(after)))
    });
}

fn bench_next_occurrence_random_dates(c: &mut Criterion) {
    let rule = RecurrenceRule::new(RecurrencePattern::Weekly, 3, anchor(), None).unwrap();
    let base = anchor();

    c.bench_function("next_occurrence_after/random_after", |b| {
        b.iter(|| {
            let after = base + Duration::days(fastrand::i64(0..3650));
            rule.next_occurrence_after(black_box(after))
        })
    });
}

fn bench_occurrences_between(c: &mut Criterion) {
    let rule = RecurrenceRule::new(RecurrencePattern::Daily, 1, anchor(), None).unwrap();
    let start = anchor();
    let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();

    c.bench_function("occurrences_between/five_years_daily", |b| {
        b.iter(|| rule.occurrences_between(black_box(start), black_box(end)))
    });
}

criterion_group!(
    benches,
    bench_next_occurrence,
    bench_next_occurrence_random_dates,
    bench_occurrences_between
);
criterion_main!(benches);
