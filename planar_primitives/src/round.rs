//! In-place rounding of coordinates to a fixed number of decimal places.
//!
//! Rounding mutates the geometry it is given through an exclusive borrow and returns that
//! same instance, so anything that later reads the geometry observes the rounded values.

use crate::{Bound, Collection, Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon, Ring};
use log::trace;

/// Number of decimal places kept when no factor is given.
pub const DEFAULT_ROUNDING_FACTOR: i32 = 6;

/// How coordinates are rounded: `round(value × 10^factor) / 10^factor`,
/// with ties rounded away from zero.
///
/// A factor of `0` rounds to whole numbers, negative factors round to tens, hundreds, …
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundOptions {
	factor: i32,
	scale: f64,
}

impl RoundOptions {
	/// Uses `factor` decimal places, or [`DEFAULT_ROUNDING_FACTOR`] if `None`.
	#[must_use]
	pub fn new(factor: Option<i32>) -> Self {
		let factor = factor.unwrap_or(DEFAULT_ROUNDING_FACTOR);
		// 10^400 is already infinite, larger exponents change nothing
		let exponent = factor.saturating_abs().min(400);
		Self {
			factor,
			scale: 10f64.powi(exponent),
		}
	}

	#[must_use]
	pub fn factor(&self) -> i32 {
		self.factor
	}

	/// Rounds a single value.
	#[must_use]
	pub fn round_value(&self, value: f64) -> f64 {
		if self.factor >= 0 {
			let scaled = value * self.scale;
			// already finer than f64 can resolve at this scale
			if scaled.is_finite() { scaled.round() / self.scale } else { value }
		} else if self.scale.is_finite() {
			// dividing keeps the result an exact multiple of the scale
			(value / self.scale).round() * self.scale
		} else {
			0.0
		}
	}
}

impl Default for RoundOptions {
	fn default() -> Self {
		Self::new(None)
	}
}

/// Geometries whose coordinates can be rounded in place.
pub trait Round {
	/// Rounds every coordinate using `options`.
	fn round_with(&mut self, options: &RoundOptions);

	/// Rounds every coordinate to `factor` decimal places (default 6) and returns `self`.
	fn round(&mut self, factor: Option<i32>) -> &mut Self {
		self.round_with(&RoundOptions::new(factor));
		self
	}
}

/// Rounds an optional geometry in place. An absent geometry is accepted and yields `None`.
///
/// ```
/// use planar_primitives::{Geometry, round};
///
/// let mut point = Geometry::new_point([1.23456789, 9.87654321]);
/// round(Some(&mut point), Some(6));
/// assert_eq!(point, Geometry::new_point([1.234568, 9.876543]));
/// assert!(round::<Geometry>(None, Some(6)).is_none());
/// ```
pub fn round<G: Round>(geometry: Option<&mut G>, factor: Option<i32>) -> Option<&mut G> {
	geometry.map(|g| g.round(factor))
}

fn round_points(points: &mut [Point], options: &RoundOptions) {
	for point in points {
		point.round_with(options);
	}
}

impl Round for Point {
	fn round_with(&mut self, options: &RoundOptions) {
		for value in &mut self.0 {
			*value = options.round_value(*value);
		}
	}
}

impl Round for MultiPoint {
	fn round_with(&mut self, options: &RoundOptions) {
		round_points(&mut self.0, options);
	}
}

impl Round for LineString {
	fn round_with(&mut self, options: &RoundOptions) {
		round_points(&mut self.0, options);
	}
}

impl Round for Ring {
	fn round_with(&mut self, options: &RoundOptions) {
		round_points(&mut self.0, options);
	}
}

impl Round for MultiLineString {
	fn round_with(&mut self, options: &RoundOptions) {
		for line in &mut self.0 {
			line.round_with(options);
		}
	}
}

impl Round for Polygon {
	fn round_with(&mut self, options: &RoundOptions) {
		for ring in &mut self.0 {
			ring.round_with(options);
		}
	}
}

impl Round for MultiPolygon {
	fn round_with(&mut self, options: &RoundOptions) {
		for polygon in &mut self.0 {
			polygon.round_with(options);
		}
	}
}

impl Round for Collection {
	fn round_with(&mut self, options: &RoundOptions) {
		for geometry in &mut self.0 {
			geometry.round_with(options);
		}
	}
}

impl Round for Bound {
	fn round_with(&mut self, options: &RoundOptions) {
		for corner in [&mut self.min, &mut self.max] {
			corner[0] = options.round_value(corner[0]);
			corner[1] = options.round_value(corner[1]);
		}
	}
}

impl Round for Geometry {
	fn round_with(&mut self, options: &RoundOptions) {
		trace!("round {} with factor {}", self.variant_name(), options.factor());
		match self {
			Geometry::Point(g) => g.round_with(options),
			Geometry::MultiPoint(g) => g.round_with(options),
			Geometry::LineString(g) => g.round_with(options),
			Geometry::MultiLineString(g) => g.round_with(options),
			Geometry::Ring(g) => g.round_with(options),
			Geometry::Polygon(g) => g.round_with(options),
			Geometry::MultiPolygon(g) => g.round_with(options),
			Geometry::Collection(g) => g.round_with(options),
			Geometry::Bound(g) => g.round_with(options),
		}
	}
}
