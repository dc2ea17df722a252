use conway::{InitialLayout, Universe};
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("universe_step");
    for &(width, height) in &[(64_u32, 64_u32), (256, 256), (1024, 512)] {
        group.bench_function(format!("random_{width}x{height}"), |b| {
            b.iter_batched(
                || {
                    let mut universe = Universe::new(width, height).expect("valid dimensions");
                    universe.randomize_with(&mut StdRng::seed_from_u64(0xC0FFEE));
                    universe
                },
                |mut universe| {
                    universe.step();
                    universe
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.bench_function("interesting_64x64_x100", |b| {
        let mut universe =
            Universe::with_layout(64, 64, InitialLayout::Interesting).expect("valid dimensions");
        b.iter(|| {
            for _ in 0..100 {
                universe.step();
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
