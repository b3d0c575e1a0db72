use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use trpg_dice_lib::evaluator;
use trpg_dice_lib::solver::RandomSource;
use trpg_dice_lib::{parse_expression, Limits};

pub fn benchmark_parsing(c: &mut Criterion) {
    let limits = Limits::default();
    c.bench_function("parse plain dice", |b| {
        b.iter(|| parse_expression(black_box("d20"), &limits))
    });
    c.bench_function("parse full expression", |b| {
        b.iter(|| parse_expression(black_box(" ( 4d6 k3 + 2 - 1 ) x 5 "), &limits))
    });
}

pub fn benchmark_rolling(c: &mut Criterion) {
    let limits = Limits::default();
    let spec = parse_expression("100d1000k50+10", &limits).unwrap();
    c.bench_function("roll largest dice", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(1);
            evaluator::evaluate(&spec, &mut RandomSource { generator: &mut rng });
        });
    });
    c.bench_function("roll largest batch", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(1);
            evaluator::evaluate_batch(&spec, 100, &limits, &mut RandomSource { generator: &mut rng })
        });
    });
}

criterion_group!(benches, benchmark_parsing, benchmark_rolling);
criterion_main!(benches);
