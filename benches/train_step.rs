use criterion::{black_box, criterion_group, criterion_main, Criterion};

use xor_nn::{Sgd, TrainConfig, Trainer, XOR_TRUTH_TABLE};

fn full_batch_step(c: &mut Criterion) {
    let config = TrainConfig::default();
    let mut trainer = Trainer::new(&config).unwrap();
    let optimizer = Sgd::new(config.learning_rate);

    c.bench_function("xor_full_batch_step_64", |b| {
        b.iter(|| {
            trainer.reset_gradients();
            for example in &XOR_TRUTH_TABLE {
                black_box(trainer.accumulate(black_box(example)));
            }
            trainer.apply_update(&optimizer);
        })
    });
}

fn forward_only(c: &mut Criterion) {
    let mut trainer = Trainer::new(&TrainConfig::default()).unwrap();

    c.bench_function("xor_forward_64", |b| {
        b.iter(|| black_box(trainer.predict(black_box([1.0, 0.0]))))
    });
}

criterion_group!(benches, full_batch_step, forward_only);
criterion_main!(benches);
