// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

use criterion::{Criterion, criterion_group, criterion_main};
use growable_seq::GrowableSequence;
use std::hint::black_box;

fn bench_push_std(c: &mut Criterion) {
    c.bench_function("std_vec_push", |b| {
        b.iter(|| {
            let mut v = Vec::new();
            for i in 0..1000 {
                v.push(black_box(i));
            }
            v
        })
    });
}

fn bench_push_sequence(c: &mut Criterion) {
    c.bench_function("growable_sequence_push", |b| {
        b.iter(|| {
            let mut s = GrowableSequence::new();
            for i in 0..1000 {
                s.push(black_box(i));
            }
            s
        })
    });
}

fn bench_insert_front(c: &mut Criterion) {
    c.bench_function("growable_sequence_insert_front", |b| {
        b.iter(|| {
            let mut s = GrowableSequence::new();
            for i in 0..200 {
                s.insert(0, black_box(i)).unwrap();
            }
            s
        })
    });
}

fn bench_concat(c: &mut Criterion) {
    let left: GrowableSequence<i32> = GrowableSequence::from(&(0..500).collect::<Vec<i32>>()[..]);
    let right = left.clone();
    c.bench_function("growable_sequence_concat", |b| {
        b.iter(|| black_box(&left).concat(black_box(&right)))
    });
}

criterion_group!(
    benches,
    bench_push_std,
    bench_push_sequence,
    bench_insert_front,
    bench_concat
);
criterion_main!(benches);
