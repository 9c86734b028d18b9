// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Codec Resolution Benchmark
//!
//! Measures:
//! - cached serializer/deserializer lookups (the steady-state path)
//! - uncached narrowing over a bucket of generic candidates
//! - primitive array encode + decode through the wire tree

#![allow(clippy::uninlined_format_args)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hdds_serde::binding::{from_wire, to_wire};
use hdds_serde::builtins::ObjectSerializer;
use hdds_serde::{Argument, ClassRef, PrimitiveKind, SerdeRegistry, StaticComponentRegistry, Value};

fn container_of(param: Argument) -> Argument {
    Argument::generic(ClassRef::new("Container"), vec![param])
}

/// One open candidate plus `exact` candidates for distinct parameters.
fn registry_with_candidates(exact: usize) -> SerdeRegistry {
    let mut builder = StaticComponentRegistry::builder().serializer(
        "Open",
        container_of(Argument::variable("N", Argument::of(ClassRef::number()))),
        || ObjectSerializer,
    );
    for i in 0..exact {
        builder = builder.serializer(
            &format!("Exact{}", i),
            container_of(Argument::of(ClassRef::new(format!("Payload{}", i)))),
            || ObjectSerializer,
        );
    }
    SerdeRegistry::builder()
        .components(builder.build().expect("components"))
        .build()
        .expect("registry")
}

fn bench_cached_lookup(c: &mut Criterion) {
    let registry = registry_with_candidates(16);
    let generic = container_of(Argument::of(ClassRef::new("Payload7")));
    let builtin = Argument::of(ClassRef::uuid());
    registry.find_serializer(&generic).expect("warm");

    c.bench_function("find_serializer_cached_generic", |b| {
        b.iter(|| registry.find_serializer(black_box(&generic)).expect("cached"));
    });
    c.bench_function("find_serializer_builtin", |b| {
        b.iter(|| registry.find_serializer(black_box(&builtin)).expect("builtin"));
    });
    c.bench_function("find_deserializer_cached", |b| {
        b.iter(|| registry.find_deserializer(black_box(&builtin)));
    });
}

fn bench_uncached_narrowing(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_serializer_uncached");
    for candidates in [1usize, 16, 128] {
        let request = container_of(Argument::boxed(PrimitiveKind::Long));
        group.bench_with_input(
            BenchmarkId::from_parameter(candidates),
            &candidates,
            |b, &candidates| {
                b.iter_batched(
                    || registry_with_candidates(candidates),
                    |registry| {
                        registry.find_serializer(&request).expect("open candidate");
                        registry
                    },
                    criterion::BatchSize::LargeInput,
                );
            },
        );
    }
    group.finish();
}

fn bench_array_round_trip(c: &mut Criterion) {
    let registry = SerdeRegistry::builtin_only();
    let ty = Argument::array_of(&Argument::primitive(PrimitiveKind::Int));
    let mut group = c.benchmark_group("int_array_round_trip");
    for len in [10usize, 100, 1000] {
        let value = Value::IntArray((0..len as i32).collect());
        group.bench_with_input(BenchmarkId::from_parameter(len), &value, |b, value| {
            b.iter(|| {
                let wire = to_wire(&registry, black_box(value), &ty).expect("encode");
                from_wire(&registry, wire, &ty).expect("decode")
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_cached_lookup,
    bench_uncached_narrowing,
    bench_array_round_trip
);
criterion_main!(benches);
