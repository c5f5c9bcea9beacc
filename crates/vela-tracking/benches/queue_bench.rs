use criterion::{black_box, criterion_group, criterion_main, Criterion};

use vela_core::{DeviceMotions, SampleTimestamp, TrackingSample};
use vela_tracking::SampleQueue;

fn bench_push(c: &mut Criterion) {
    let sample = TrackingSample::new(SampleTimestamp::from_millis(16), DeviceMotions::default());

    // The producer-path worst case: every push evicts.
    let mut full = SampleQueue::new(8);
    for _ in 0..8 {
        full.push(sample.clone());
    }
    c.bench_function("push_full_ring", |b| {
        b.iter(|| full.push(black_box(sample.clone())))
    });

    c.bench_function("push_then_pop", |b| {
        let mut queue = SampleQueue::new(8);
        b.iter(|| {
            queue.push(black_box(sample.clone()));
            black_box(queue.pop());
        })
    });
}

criterion_group!(benches, bench_push);
criterion_main!(benches);
