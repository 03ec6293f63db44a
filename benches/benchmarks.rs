extern crate criterion;
extern crate polyploid_genotypes;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polyploid_genotypes::genotype::gametes::GameteEnumerator;
use polyploid_genotypes::genotype::genotype_enumerator::GenotypeEnumerator;
use polyploid_genotypes::utils::math_utils::MathUtils;

fn bench_enumerate_genotypes(c: &mut Criterion) {
    c.bench_function("enumerate_genotypes_6_6", |b| {
        b.iter(|| GenotypeEnumerator::enumerate_genotypes(black_box(6), black_box(6)))
    });
}

fn bench_index_genotype(c: &mut Criterion) {
    let genotype = vec![0, 1, 1, 3, 4, 4, 7, 9];
    c.bench_function("index_genotype", |b| {
        b.iter(|| GenotypeEnumerator::index_genotype(black_box(&genotype)))
    });
}

fn bench_genotype_from_index(c: &mut Criterion) {
    c.bench_function("genotype_from_index", |b| {
        b.iter(|| GenotypeEnumerator::genotype_from_index(black_box(20_000), black_box(8)))
    });
}

fn bench_make_gametes(c: &mut Criterion) {
    let genotype = vec![0, 0, 1, 2, 2, 3, 4, 5];
    c.bench_function("make_gametes_octoploid", |b| {
        b.iter(|| GameteEnumerator::make_gametes(black_box(&genotype)))
    });
}

fn bench_densities(c: &mut Criterion) {
    let counts = [20.0, 25.0, 35.0];
    let probabilities = [0.25, 0.25, 0.5];
    c.bench_function("multinomial_density", |b| {
        b.iter(|| MathUtils::multinomial_density(black_box(&counts), black_box(&probabilities)))
    });
    c.bench_function("dirichlet_multinomial_density", |b| {
        b.iter(|| {
            MathUtils::dirichlet_multinomial_density(
                black_box(&counts),
                black_box(&probabilities),
                black_box(9.0),
            )
        })
    });
}

criterion_group!(
    benches,
    bench_enumerate_genotypes,
    bench_index_genotype,
    bench_genotype_from_index,
    bench_make_gametes,
    bench_densities,
);
criterion_main!(benches);
