use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use planar_primitives::{Geometry, GeometryTrait, Round};
use std::hint::black_box;

const POLYGON_COUNT: usize = 1_000;
const RING_SIZE: usize = 256;

fn large_multi_polygon() -> Geometry {
	let polygons = (0..POLYGON_COUNT)
		.map(|i| {
			let offset = i as f64 * 0.123_456_789;
			let ring = (0..RING_SIZE)
				.map(|j| {
					let angle = j as f64 / RING_SIZE as f64 * std::f64::consts::TAU;
					[offset + angle.cos(), offset + angle.sin()]
				})
				.collect::<Vec<_>>();
			vec![ring]
		})
		.collect::<Vec<_>>();
	Geometry::new_multi_polygon(polygons)
}

fn benchmark_round(c: &mut Criterion) {
	let geometry = large_multi_polygon();

	c.bench_function("round_multi_polygon", |b| {
		b.iter_batched(
			|| geometry.clone(),
			|mut g| {
				g.round(black_box(Some(6)));
				g
			},
			BatchSize::LargeInput,
		);
	});

	c.bench_function("bound_multi_polygon", |b| {
		b.iter(|| black_box(&geometry).bound());
	});
}

criterion_group!(
	name = benches;
	config = Criterion::default().significance_level(0.1).sample_size(15);
	targets = benchmark_round
);
criterion_main!(benches);
