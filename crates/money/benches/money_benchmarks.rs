use criterion::{Criterion, black_box, criterion_group, criterion_main};

use coinage_money::{Money, MoneyFactory, currency, locale};
use rust_decimal_macros::dec;

fn bench_format(c: &mut Criterion) {
    let value = Money::with_currency(123_456_789, &currency::USD, Some(&locale::EN_US));
    let plain = Money::with_currency(123_456_789, &currency::USD, None);

    c.bench_function("format_localized", |b| {
        b.iter(|| black_box(value).format())
    });
    c.bench_function("format_plain", |b| b.iter(|| black_box(plain).format()));
}

fn bench_arithmetic(c: &mut Criterion) {
    let factory = MoneyFactory::default();
    let a = factory.money(1_000i64, "USD").unwrap();
    let b_val = factory.money(500i64, "USD").unwrap();

    c.bench_function("add", |b| {
        b.iter(|| black_box(a).add(black_box(b_val)).unwrap())
    });
    c.bench_function("multiply", |b| {
        b.iter(|| black_box(a).multiply(dec!(1.19)).unwrap())
    });
}

fn bench_allocate(c: &mut Criterion) {
    let value = Money::with_currency(1_000_003, &currency::USD, Some(&locale::EN_US));
    let ratios = [3u32, 7, 11, 13, 17, 19, 23, 29, 31, 37];

    c.bench_function("allocate_10_ratios", |b| {
        b.iter(|| black_box(value).allocate(black_box(&ratios)).unwrap())
    });
}

criterion_group!(benches, bench_format, bench_arithmetic, bench_allocate);
criterion_main!(benches);
