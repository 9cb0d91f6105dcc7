use criterion::{criterion_group, criterion_main, Criterion};
use tinyrand::{Rand, Wyrand};

use squares::dataset::{GameRecord, ScoreDataset, Side};
use squares::digits::{compute_digit_frequency, compute_digit_pair_distribution};
use squares::heatmap::project_heatmap;

fn criterion_benchmark(c: &mut Criterion) {
    fn fixture(games: usize) -> ScoreDataset {
        let mut rand = Wyrand::default();
        let records = (0..games)
            .map(|_| GameRecord::new(rand.next_lim_u32(50), rand.next_lim_u32(50)))
            .collect();
        ScoreDataset::from_records(records)
    }

    // sanity check
    let dataset = fixture(1_000);
    let distribution = compute_digit_pair_distribution(&dataset);
    assert!((distribution.sum() - 1.0).abs() < 1e-9);

    fn bench(c: &mut Criterion, games: usize) {
        let dataset = fixture(games);
        c.bench_function(&format!("cri_digits_pair_{games}"), |b| {
            b.iter(|| compute_digit_pair_distribution(&dataset));
        });
        c.bench_function(&format!("cri_digits_frequency_{games}"), |b| {
            b.iter(|| compute_digit_frequency(&dataset, Side::Home));
        });
        let distribution = compute_digit_pair_distribution(&dataset);
        c.bench_function(&format!("cri_digits_heatmap_{games}"), |b| {
            b.iter(|| project_heatmap(&distribution));
        });
    }
    bench(c, 2_500);
    bench(c, 100_000);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
