use core::hint::black_box;
use criterion::{
    BenchmarkId, Criterion, criterion_group, criterion_main,
};
use fieldwise::{StructuralEq, comparator, describe, equal};

#[derive(StructuralEq, PartialEq, Debug, Clone)]
struct Order {
    id: u64,
    customer: String,
    quantity: u32,
    price: f64,
    note: Option<String>,
}

#[derive(StructuralEq, PartialEq, Debug, Clone)]
struct Shipment {
    order: Order,
    carrier: String,
    tracking: Option<u64>,
}

fn shipment(id: u64) -> Shipment {
    Shipment {
        order: Order {
            id,
            customer: "ada".to_string(),
            quantity: 3,
            price: 9.5,
            note: Some("fragile".to_string()),
        },
        carrier: "post".to_string(),
        tracking: Some(id * 7),
    }
}

fn bench_equal(c: &mut Criterion) {
    let a = shipment(1);
    let cases = [("equal", shipment(1)), ("unequal", shipment(2))];

    for (label, b) in &cases {
        // derived PartialEq as the baseline
        c.bench_with_input(
            BenchmarkId::new("partial_eq", label),
            b,
            |bencher, b| bencher.iter(|| black_box(&a) == black_box(b)),
        );
        c.bench_with_input(
            BenchmarkId::new("fieldwise equal", label),
            b,
            |bencher, b| bencher.iter(|| equal(black_box(&a), black_box(b))),
        );
        let cached = comparator::<Shipment>().expect("comparator");
        c.bench_with_input(
            BenchmarkId::new("cached comparator", label),
            b,
            |bencher, b| {
                bencher.iter(|| cached.compare(black_box(&a), black_box(b)))
            },
        );
    }
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build descriptor", |b| {
        b.iter(|| black_box(describe::<Shipment>().expect("descriptor")))
    });
    c.bench_function("build comparator", |b| {
        b.iter(|| {
            black_box(
                describe::<Shipment>()
                    .expect("descriptor")
                    .into_comparator(),
            )
        })
    });
}

criterion_group!(comparison, bench_equal);
criterion_group! {name = build; config = Criterion::default().sample_size(20); targets = bench_build}

criterion_main!(comparison, build);
