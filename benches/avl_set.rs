use avl_collections::avl_tree::AvlSet;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 100;

fn keys() -> Vec<u32> {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    (0..NUM_OF_OPERATIONS).map(|_| rng.next_u32()).collect()
}

fn bench_btreeset_insert(c: &mut Criterion) {
    let keys = keys();
    c.bench_function("bench btreeset insert", move |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for key in &keys {
                set.insert(*key);
            }
        })
    });
}

fn bench_btreeset_remove(c: &mut Criterion) {
    let keys = keys();
    c.bench_function("bench btreeset remove", move |b| {
        b.iter(|| {
            let mut set = keys.iter().cloned().collect::<BTreeSet<u32>>();
            for key in &keys {
                black_box(set.remove(key));
            }
        })
    });
}

fn bench_avl_set_insert(c: &mut Criterion) {
    let keys = keys();
    c.bench_function("bench avl_set insert", move |b| {
        b.iter(|| {
            let mut set = AvlSet::new();
            for key in &keys {
                set.insert(*key);
            }
        })
    });
}

fn bench_avl_set_contains(c: &mut Criterion) {
    let keys = keys();
    let set = keys.iter().cloned().collect::<AvlSet<u32>>();
    c.bench_function("bench avl_set contains", move |b| {
        b.iter(|| {
            for key in &keys {
                black_box(set.contains(key));
            }
        })
    });
}

fn bench_avl_set_delete(c: &mut Criterion) {
    let keys = keys();
    c.bench_function("bench avl_set delete", move |b| {
        b.iter(|| {
            let mut set = keys.iter().cloned().collect::<AvlSet<u32>>();
            for key in &keys {
                black_box(set.delete(key));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_btreeset_insert,
    bench_btreeset_remove,
    bench_avl_set_insert,
    bench_avl_set_contains,
    bench_avl_set_delete
);
criterion_main!(benches);
