use criterion::{Criterion, black_box, criterion_group, criterion_main};

use finident::checksum::{luhn, mod97};
use finident::iban;
use finident::vat;

fn bench_primitives(c: &mut Criterion) {
    let long_digits = "1234567890".repeat(7);
    c.bench_function("mod97_70_digits", |b| {
        b.iter(|| mod97(black_box(&long_digits)).unwrap())
    });
    c.bench_function("luhn_16_digits", |b| {
        b.iter(|| luhn(black_box("4111111111111111")).unwrap())
    });
}

fn bench_iban(c: &mut Criterion) {
    c.bench_function("iban_is_valid_checksum_only", |b| {
        b.iter(|| iban::is_valid_iban(black_box("GB82 WEST 1234 5698 7654 32")))
    });
    c.bench_function("iban_validate_full", |b| {
        b.iter(|| iban::validate(black_box("FR14 2004 1010 0505 0001 3M02 606")))
    });
    c.bench_function("iban_registry_dispatch", |b| {
        b.iter(|| iban::registry().validate(black_box("DE89370400440532013000")))
    });
}

fn bench_vat(c: &mut Criterion) {
    c.bench_function("vat_validate_de", |b| {
        b.iter(|| vat::validate_vat(black_box("DE136695976")))
    });
}

criterion_group!(benches, bench_primitives, bench_iban, bench_vat);
criterion_main!(benches);
