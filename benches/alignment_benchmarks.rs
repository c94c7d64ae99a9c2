use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use wfst_edit::cost::{CostMatrix, FlatCost, KeyboardLayout};
use wfst_edit::edit::{build_lattice, AlignerBuilder, Penalties};
use wfst_edit::fst::NativeRuntime;
use wfst_edit::symbol::{Number, SymbolTable};

/// Deterministic pseudo-word of `len` letters
fn word(len: usize, seed: usize) -> Vec<char> {
    let letters: Vec<char> = "etaoinshrdlucmfwypvbgkjqxz".chars().collect();
    (0..len)
        .map(|i| letters[(i * 7 + seed * 13 + i * i) % letters.len()])
        .collect()
}

/// Copy of `source` with every fourth letter shifted to its keyboard neighbour
fn typo(source: &[char]) -> Vec<char> {
    source
        .iter()
        .enumerate()
        .map(|(i, &c)| match (i % 4, c) {
            (0, 'e') => 'r',
            (0, 'o') => 'p',
            (0, 'a') => 's',
            (0, _) => 'k',
            _ => c,
        })
        .collect()
}

/// Full alignment with keyboard soft substitutions
fn bench_keyboard_alignment(c: &mut Criterion) {
    let mut group = c.benchmark_group("keyboard_alignment");
    let aligner = AlignerBuilder::new()
        .cost_model(KeyboardLayout::default())
        .build()
        .unwrap();

    for len in [4, 8, 16, 32].iter() {
        let source = word(*len, 1);
        let target = typo(&source);

        group.throughput(Throughput::Elements(*len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), len, |b, _| {
            b.iter(|| black_box(aligner.align(black_box(&source), black_box(&target)).unwrap()));
        });
    }
    group.finish();
}

/// Full alignment with flat penalties only
fn bench_flat_alignment(c: &mut Criterion) {
    let mut group = c.benchmark_group("flat_alignment");
    let aligner = AlignerBuilder::new().build().unwrap();

    for len in [4, 8, 16, 32].iter() {
        let source = word(*len, 1);
        let target = word(*len, 2);

        group.throughput(Throughput::Elements(*len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), len, |b, _| {
            b.iter(|| black_box(aligner.align(black_box(&source), black_box(&target)).unwrap()));
        });
    }
    group.finish();
}

/// Numeric alignment where most pairs are within the threshold
fn bench_numeric_alignment(c: &mut Criterion) {
    let mut group = c.benchmark_group("numeric_alignment");
    let aligner = AlignerBuilder::new()
        .cost_model(wfst_edit::cost::NumericThreshold::new(2.0).unwrap())
        .build()
        .unwrap();

    for len in [4, 8, 16].iter() {
        let source: Vec<Number> = (0..*len)
            .map(|i| Number::new((i % 5) as f64 * 0.5).unwrap())
            .collect();
        let target: Vec<Number> = (0..*len)
            .map(|i| Number::new(((i + 2) % 5) as f64 * 0.4).unwrap())
            .collect();

        group.throughput(Throughput::Elements(*len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), len, |b, _| {
            b.iter(|| black_box(aligner.align(black_box(&source), black_box(&target)).unwrap()));
        });
    }
    group.finish();
}

/// Lattice construction alone, without extraction
fn bench_lattice_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("lattice_construction");

    for len in [8, 16, 32].iter() {
        let source = word(*len, 3);
        let target = word(*len, 4);
        let table = SymbolTable::build(source.iter().chain(&target).copied()).unwrap();
        let matrix = CostMatrix::build(&FlatCost, &source, &target);
        let penalties = Penalties::default();

        group.bench_with_input(BenchmarkId::from_parameter(len), len, |b, _| {
            b.iter(|| {
                black_box(
                    build_lattice(&NativeRuntime, &table, &source, &target, &matrix, &penalties)
                        .unwrap(),
                )
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_keyboard_alignment,
    bench_flat_alignment,
    bench_numeric_alignment,
    bench_lattice_construction
);
criterion_main!(benches);
