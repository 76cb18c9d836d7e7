use super::{GeometryTrait, Point, Polygon, Ring};
use anyhow::{Context, Result, ensure};
use std::fmt::Debug;

/// An axis-aligned rectangle given by its minimum and maximum corner.
///
/// A bound whose `min` exceeds its `max` on any axis is *empty*. This is a valid value,
/// not an error: it is produced by [`Bound::EMPTY`] or by padding with a large negative
/// distance, and every operation is defined for it.
///
/// # Examples
///
/// ```
/// use planar_primitives::{Bound, Point};
///
/// let bound = Bound::new([0.0, 0.0], [10.0, 10.0]).extend(&Point::new(5.0, 15.0));
/// assert_eq!(bound, Bound::new([0.0, 0.0], [10.0, 15.0]));
/// ```
#[derive(Clone, Copy, Default, PartialEq)]
pub struct Bound {
	pub min: [f64; 2],
	pub max: [f64; 2],
}

impl Bound {
	/// The canonical empty bound. Extending or uniting it behaves like starting from nothing.
	pub const EMPTY: Bound = Bound {
		min: [1.0, 1.0],
		max: [-1.0, -1.0],
	};

	/// Creates a bound from its two corners. No ordering is enforced.
	#[must_use]
	pub fn new(min: [f64; 2], max: [f64; 2]) -> Self {
		Self { min, max }
	}

	/// Returns `true` if the point lies inside the bound or on its boundary.
	#[must_use]
	pub fn contains(&self, point: &Point) -> bool {
		let (x, y) = (point.x(), point.y());
		if y < self.min[1] || self.max[1] < y {
			return false;
		}
		if x < self.min[0] || self.max[0] < x {
			return false;
		}
		true
	}

	/// Returns `true` if both bounds overlap. Touching edges or corners count as overlap.
	#[must_use]
	pub fn intersects(&self, other: &Bound) -> bool {
		!(self.max[0] < other.min[0]
			|| self.min[0] > other.max[0]
			|| self.max[1] < other.min[1]
			|| self.min[1] > other.max[1])
	}

	/// Returns a bound grown just enough to include `point`.
	#[must_use]
	pub fn extend(&self, point: &Point) -> Bound {
		if self.contains(point) {
			return *self;
		}
		let (x, y) = (point.x(), point.y());
		Bound {
			min: [self.min[0].min(x), self.min[1].min(y)],
			max: [self.max[0].max(x), self.max[1].max(y)],
		}
	}

	/// Returns the smallest bound covering both `self` and `other`.
	///
	/// An empty `other` leaves `self` unchanged. Otherwise `self` is extended by all four
	/// corners of `other`: min, max, left-top and right-bottom, in that order.
	#[must_use]
	pub fn union(&self, other: &Bound) -> Bound {
		if other.is_empty() {
			return *self;
		}
		[
			Point::from(other.min),
			Point::from(other.max),
			other.left_top(),
			other.right_bottom(),
		]
		.iter()
		.fold(*self, |bound, corner| bound.extend(corner))
	}

	/// Moves `min` by `-d` and `max` by `+d` on both axes.
	///
	/// A negative `d` larger than half the width or height yields an empty bound.
	#[must_use]
	pub fn pad(&self, d: f64) -> Bound {
		Bound {
			min: [self.min[0] - d, self.min[1] - d],
			max: [self.max[0] + d, self.max[1] + d],
		}
	}

	#[must_use]
	pub fn center(&self) -> Point {
		Point::new((self.min[0] + self.max[0]) / 2.0, (self.min[1] + self.max[1]) / 2.0)
	}

	#[must_use]
	pub fn top(&self) -> f64 {
		self.max[1]
	}

	#[must_use]
	pub fn bottom(&self) -> f64 {
		self.min[1]
	}

	#[must_use]
	pub fn left(&self) -> f64 {
		self.min[0]
	}

	#[must_use]
	pub fn right(&self) -> f64 {
		self.max[0]
	}

	#[must_use]
	pub fn left_top(&self) -> Point {
		Point::new(self.left(), self.top())
	}

	#[must_use]
	pub fn right_bottom(&self) -> Point {
		Point::new(self.right(), self.bottom())
	}

	/// Returns `true` if `min` exceeds `max` on either axis.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.min[0] > self.max[0] || self.min[1] > self.max[1]
	}

	/// Returns `true` if both corners sit exactly on the origin.
	#[must_use]
	pub fn is_zero(&self) -> bool {
		self.min == [0.0, 0.0] && self.max == [0.0, 0.0]
	}

	/// The closed outline of the bound, counterclockwise from `min`.
	#[must_use]
	pub fn to_ring(&self) -> Ring {
		Ring::from(vec![
			[self.min[0], self.min[1]],
			[self.max[0], self.min[1]],
			[self.max[0], self.max[1]],
			[self.min[0], self.max[1]],
			[self.min[0], self.min[1]],
		])
	}

	#[must_use]
	pub fn to_polygon(&self) -> Polygon {
		Polygon(vec![self.to_ring()])
	}

	/// Returns the bound as `[x_min, y_min, x_max, y_max]`.
	#[must_use]
	pub fn as_array(&self) -> [f64; 4] {
		[self.min[0], self.min[1], self.max[0], self.max[1]]
	}
}

impl GeometryTrait for Bound {
	fn dimensions(&self) -> u8 {
		2
	}

	fn bound(&self) -> Bound {
		*self
	}

	/// Serialized as its outline polygon.
	fn geojson_type(&self) -> &'static str {
		"Polygon"
	}
}

impl Debug for Bound {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Bound({:?}, {:?})", self.min, self.max)
	}
}

impl TryFrom<&[f64]> for Bound {
	type Error = anyhow::Error;

	/// Builds a bound from `[x_min, y_min, x_max, y_max]`.
	fn try_from(input: &[f64]) -> Result<Self> {
		ensure!(
			input.len() == 4,
			"Bound must have 4 elements (x_min, y_min, x_max, y_max), got {}",
			input.len()
		);
		Ok(Bound::new([input[0], input[1]], [input[2], input[3]]))
	}
}

impl TryFrom<Vec<f64>> for Bound {
	type Error = anyhow::Error;

	fn try_from(input: Vec<f64>) -> Result<Self> {
		Bound::try_from(input.as_slice()).with_context(|| format!("Failed to convert {input:?} to Bound"))
	}
}

impl From<[f64; 4]> for Bound {
	fn from(value: [f64; 4]) -> Self {
		Bound::new([value[0], value[1]], [value[2], value[3]])
	}
}

impl From<geo::Rect> for Bound {
	fn from(value: geo::Rect) -> Self {
		Bound::new([value.min().x, value.min().y], [value.max().x, value.max().y])
	}
}
