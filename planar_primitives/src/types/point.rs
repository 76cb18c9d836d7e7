use super::{Bound, GeometryTrait};
use std::fmt::Debug;

/// A position given by an ordered list of coordinates: `x`, `y`, optionally `z` and `m`.
///
/// No dimensionality is enforced. A point may hold zero, one, two or more values, and the
/// accessors return `0.0` for any coordinate that is absent instead of failing.
#[derive(Clone, Default)]
pub struct Point(pub Vec<f64>);

impl Point {
	/// Constructs a two-dimensional point.
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self(vec![x, y])
	}

	fn coord(&self, index: usize) -> f64 {
		if self.0.len() > index { self.0[index] } else { 0.0 }
	}

	/// Horizontal coordinate, or `0.0` if absent.
	#[must_use]
	pub fn x(&self) -> f64 {
		self.coord(0)
	}

	/// Vertical coordinate, or `0.0` if absent.
	#[must_use]
	pub fn y(&self) -> f64 {
		self.coord(1)
	}

	/// Height coordinate, or `0.0` if absent.
	#[must_use]
	pub fn z(&self) -> f64 {
		self.coord(2)
	}

	/// Measurement value, or `0.0` if absent.
	#[must_use]
	pub fn m(&self) -> f64 {
		self.coord(3)
	}

	/// Longitude, an alias for [`Point::x`].
	#[must_use]
	pub fn lon(&self) -> f64 {
		self.x()
	}

	/// Latitude, an alias for [`Point::y`].
	#[must_use]
	pub fn lat(&self) -> f64 {
		self.y()
	}

	/// Number of coordinates stored in the point.
	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	#[must_use]
	pub fn as_slice(&self) -> &[f64] {
		&self.0
	}

	pub fn as_mut_slice(&mut self) -> &mut [f64] {
		&mut self.0
	}
}

/// Points are equal only if they have the same number of coordinates
/// and every coordinate matches exactly.
impl PartialEq for Point {
	fn eq(&self, other: &Self) -> bool {
		self.0.len() == other.0.len() && self.0.iter().zip(&other.0).all(|(a, b)| a == b)
	}
}

impl GeometryTrait for Point {
	fn dimensions(&self) -> u8 {
		0
	}

	/// A zero-area bound at `(x, y)`, or at the origin for a point without coordinates.
	fn bound(&self) -> Bound {
		if self.is_empty() {
			return Bound::default();
		}
		let xy = [self.x(), self.y()];
		Bound::new(xy, xy)
	}

	fn geojson_type(&self) -> &'static str {
		"Point"
	}
}

impl Debug for Point {
	/// Formats the point like its coordinate list, e.g. `[1.0, 2.0]`.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl<T: Into<f64>, const N: usize> From<[T; N]> for Point {
	fn from(value: [T; N]) -> Self {
		Self(value.into_iter().map(Into::into).collect())
	}
}

impl<'a, T, const N: usize> From<&'a [T; N]> for Point
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; N]) -> Self {
		Self(value.iter().map(|v| (*v).into()).collect())
	}
}

impl From<&[f64]> for Point {
	fn from(value: &[f64]) -> Self {
		Self(value.to_vec())
	}
}

impl From<Vec<f64>> for Point {
	fn from(value: Vec<f64>) -> Self {
		Self(value)
	}
}

impl From<(f64, f64)> for Point {
	fn from(value: (f64, f64)) -> Self {
		Self::new(value.0, value.1)
	}
}

impl From<geo::Coord> for Point {
	fn from(value: geo::Coord) -> Self {
		Self::new(value.x, value.y)
	}
}

impl From<geo::Point> for Point {
	fn from(value: geo::Point) -> Self {
		Self::from(value.0)
	}
}
