use criterion::{Criterion, black_box, criterion_group, criterion_main};

use phone_number_core::PHONE_NUMBER_UTIL;

type TestEntity = (&'static str, Option<&'static str>);

fn setup_numbers() -> Vec<TestEntity> {
    vec![
        ("+14155552671", None),
        ("(415) 555-2671", Some("US")),
        ("1 (415) 555-2671", Some("US")),
        ("+44 20 7946 0958", None),
        ("020 7946 0958", Some("GB")),
        ("02 1234 5678", Some("IT")),
        ("+7 912 345-67-89", None),
        ("+55 11 96123-4567", None),
    ]
}

fn parsing_benchmark(c: &mut Criterion) {
    let numbers = setup_numbers();

    let mut group = c.benchmark_group("Parsing");
    group.bench_function("parse", |b| {
        b.iter(|| {
            for (raw, region) in &numbers {
                PHONE_NUMBER_UTIL
                    .parse(black_box(raw), black_box(*region))
                    .unwrap();
            }
        })
    });

    let parsed: Vec<_> = numbers
        .iter()
        .map(|(raw, region)| PHONE_NUMBER_UTIL.parse(raw, *region).unwrap())
        .collect();
    group.bench_function("is_valid_number", |b| {
        b.iter(|| {
            for number in &parsed {
                PHONE_NUMBER_UTIL.is_valid_number(black_box(number));
            }
        })
    });
    group.bench_function("get_number_type", |b| {
        b.iter(|| {
            for number in &parsed {
                PHONE_NUMBER_UTIL.get_number_type(black_box(number));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, parsing_benchmark);
criterion_main!(benches);
