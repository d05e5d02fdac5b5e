//! Performance benchmarks for the upcoming-birthdays query.
//!
//! Measures the query over address books of different sizes, with birthdays
//! spread evenly across the year so roughly one in fifty falls in the window.

use address_book::{AddressBook, Record};
use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Build an address book of `size` contacts with one birthday per day of 1990.
fn create_test_book(size: usize) -> AddressBook {
    let start = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
    let mut book = AddressBook::new();

    for i in 0..size {
        let birthday = start
            .checked_add_days(Days::new((i % 365) as u64))
            .unwrap();
        let mut record = Record::new(format!("Contact {}", i));
        record.add_phone(&format!("{:010}", i)).unwrap();
        record
            .add_birthday(&birthday.format("%d.%m.%Y").to_string())
            .unwrap();
        book.add_record(record).unwrap();
    }

    book
}

fn bench_upcoming_birthdays(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 6, 7).unwrap();
    let mut group = c.benchmark_group("upcoming_birthdays");

    for size in [100, 1_000, 10_000] {
        let book = create_test_book(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &book, |b, book| {
            b.iter(|| book.get_upcoming_birthdays(black_box(today)));
        });
    }

    group.finish();
}

fn bench_add_record(c: &mut Criterion) {
    c.bench_function("add_1000_records", |b| {
        b.iter(|| create_test_book(black_box(1_000)));
    });
}

criterion_group!(benches, bench_upcoming_birthdays, bench_add_record);
criterion_main!(benches);
