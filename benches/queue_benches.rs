use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::seq::SliceRandom;

use ringlist::queue::Queue;
use ringlist::queue::merge::ContextList;

const SAMPLE_SIZE: usize = 10_000;

fn churn_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_churn");
    group.throughput(Throughput::Elements(SAMPLE_SIZE as u64));

    let keys: Vec<String> = (0..SAMPLE_SIZE).map(|i| format!("key{}", i)).collect();

    group.bench_function(BenchmarkId::new("insert_tail_remove_head", SAMPLE_SIZE), |b| {
        b.iter(|| {
            let mut q = Queue::new();
            for key in &keys {
                q.insert_tail(key);
            }
            while let Some(elem) = q.remove_head() {
                black_box(elem.value().len());
            }
        })
    });

    group.finish();
}

fn sort_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_sort");
    group.throughput(Throughput::Elements(SAMPLE_SIZE as u64));

    let mut keys: Vec<String> = (0..SAMPLE_SIZE).map(|i| format!("key{}", i)).collect();
    keys.shuffle(&mut rand::rng());

    group.bench_function(BenchmarkId::new("shuffled", SAMPLE_SIZE), |b| {
        b.iter_with_setup(
            || {
                let mut q = Queue::new();
                for key in &keys {
                    q.insert_tail(key);
                }
                q
            },
            |mut q| {
                q.sort(false);
                q
            },
        )
    });

    group.finish();
}

fn merge_benchmark(c: &mut Criterion) {
    const QUEUES: usize = 8;

    let mut group = c.benchmark_group("queue_merge");
    group.throughput(Throughput::Elements(SAMPLE_SIZE as u64));

    let per_queue = SAMPLE_SIZE / QUEUES;

    group.bench_function(BenchmarkId::new("k_way", QUEUES), |b| {
        b.iter_with_setup(
            || {
                let mut contexts = ContextList::new();
                for i in 0..QUEUES {
                    let mut q = Queue::new();
                    for j in 0..per_queue {
                        q.insert_tail(&format!("key{:05}{}", j, i));
                    }
                    contexts.push(q);
                }
                contexts
            },
            |mut contexts| {
                black_box(contexts.merge(false));
                contexts
            },
        )
    });

    group.finish();
}

criterion_group!(benches, churn_benchmark, sort_benchmark, merge_benchmark);
criterion_main!(benches);
