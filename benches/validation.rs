use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scene_guard::fallback::uv_sphere;
use scene_guard::math::compute_bounding_volumes;
use scene_guard::{SceneNode, Validator, ValidatorConfig};

/// Scene of `count` sphere meshes, optionally corrupting the last one
fn sphere_scene(count: usize, corrupt_last: bool) -> SceneNode {
    let mut root = SceneNode::group("bench");
    for i in 0..count {
        let mut geometry = uv_sphere(1.0 + i as f32 * 0.01, 64, 48);
        if corrupt_last && i + 1 == count {
            let last = geometry.position.len() - 1;
            geometry.position[last] = f32::NAN;
        }
        root.children.push(SceneNode::mesh(format!("sphere{}", i), geometry));
    }
    root
}

/// Benchmark: bounding volumes over a dense sphere
fn bench_bounding_volumes(c: &mut Criterion) {
    let sphere = uv_sphere(1.0, 256, 128);

    c.bench_function("bounding_volumes_33k_vertices", |b| {
        b.iter(|| black_box(compute_bounding_volumes(black_box(&sphere.position))))
    });
}

/// Benchmark: full validation, with and without the bounds pass
fn bench_validate_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_scene");

    for count in [1, 10, 50].iter() {
        let scene = sphere_scene(*count, false);
        let with_bounds = Validator::default();
        let scan_only = Validator::new(&ValidatorConfig {
            check_bounds: false,
            ..ValidatorConfig::default()
        });

        group.bench_with_input(BenchmarkId::new("with_bounds", count), count, |b, _| {
            b.iter(|| black_box(with_bounds.validate(Some(black_box(&scene))).is_valid()))
        });
        group.bench_with_input(BenchmarkId::new("scan_only", count), count, |b, _| {
            b.iter(|| black_box(scan_only.validate(Some(black_box(&scene))).is_valid()))
        });
    }

    group.finish();
}

/// Benchmark: worst case, corruption in the very last scalar
fn bench_validate_corrupt_tail(c: &mut Criterion) {
    let scene = sphere_scene(10, true);
    let validator = Validator::default();

    c.bench_function("validate_corrupt_tail", |b| {
        b.iter(|| black_box(validator.validate(Some(black_box(&scene))).is_valid()))
    });
}

criterion_group!(
    benches,
    bench_bounding_volumes,
    bench_validate_scene,
    bench_validate_corrupt_tail
);
criterion_main!(benches);
