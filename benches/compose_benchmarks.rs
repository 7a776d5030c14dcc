//! Criterion benchmarks for the composition engine hot paths.
//!
//! Run with: `cargo bench`
//!
//! The validator and suggestion engine are re-run on every keystroke of the
//! interactive editor, so these keep an eye on their cost over the full
//! built-in catalog.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use stack_blocks::blocks;
use stack_blocks::compose::{
    can_enable, expand_preset, preset_defs, suggested_blocks, BlockInstance, CompositionValidator,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Every catalog block instantiated and enabled — the worst realistic case.
fn full_composition() -> Vec<BlockInstance> {
    blocks::builtin()
        .iter()
        .map(|block| {
            let mut instance = BlockInstance::default_for(block);
            instance.enabled = true;
            instance
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn bench_validate(c: &mut Criterion) {
    let catalog = blocks::builtin();
    let mut group = c.benchmark_group("validate");

    let full = full_composition();
    group.bench_function("full_catalog", |b| {
        b.iter(|| black_box(CompositionValidator::validate(catalog, &full)))
    });

    for count in [3, 9, 27] {
        let subset: Vec<BlockInstance> = full.iter().take(count).cloned().collect();
        group.bench_with_input(BenchmarkId::from_parameter(count), &subset, |b, subset| {
            b.iter(|| black_box(CompositionValidator::validate(catalog, subset)))
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Advisory helpers
// ---------------------------------------------------------------------------

fn bench_suggestions(c: &mut Criterion) {
    let catalog = blocks::builtin();
    let full = full_composition();
    let enabled: Vec<&str> = full.iter().map(|i| i.block_id.as_str()).collect();

    c.bench_function("suggested_blocks", |b| {
        b.iter(|| black_box(suggested_blocks(catalog, &enabled)))
    });

    c.bench_function("can_enable", |b| {
        b.iter(|| black_box(can_enable(catalog, "caddy", &enabled)))
    });
}

// ---------------------------------------------------------------------------
// Factory and presets
// ---------------------------------------------------------------------------

fn bench_factory(c: &mut Criterion) {
    let catalog = blocks::builtin();
    let php = catalog.get("php-fpm").unwrap();

    c.bench_function("default_instance", |b| {
        b.iter(|| black_box(BlockInstance::default_for(php)))
    });

    let defs = preset_defs();
    let full_stack = defs.iter().find(|d| d.name == "Laravel Full Stack").unwrap();
    c.bench_function("expand_preset", |b| {
        b.iter(|| black_box(expand_preset(catalog, full_stack)))
    });
}

criterion_group!(benches, bench_validate, bench_suggestions, bench_factory);
criterion_main!(benches);
