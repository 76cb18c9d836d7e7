use super::{Bound, GeometryTrait, MultiLineString, Point, multi_point::bound_of_points};
use std::fmt::Debug;

/// A sequence of connected points forming a path.
#[derive(Clone, Default, PartialEq)]
pub struct LineString(pub Vec<Point>);

impl LineString {
	/// Wraps this line into a `MultiLineString` with a single member.
	#[must_use]
	pub fn into_multi(self) -> MultiLineString {
		MultiLineString(vec![self])
	}
}

impl GeometryTrait for LineString {
	fn dimensions(&self) -> u8 {
		1
	}

	fn bound(&self) -> Bound {
		bound_of_points(&self.0)
	}

	fn geojson_type(&self) -> &'static str {
		"LineString"
	}
}

impl Debug for LineString {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_composite!(LineString, Point);
crate::impl_from_array!(LineString, Point);

impl From<geo::LineString> for LineString {
	fn from(geometry: geo::LineString) -> Self {
		geometry.into_iter().map(Point::from).collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::CompositeGeometryTrait;

	#[test]
	fn bound() {
		let line = LineString::from(&[[1, 1], [4, -1], [2, 6]]);
		assert_eq!(line.bound(), Bound::new([1.0, -1.0], [4.0, 6.0]));
		assert!(LineString::new().bound().is_empty());
	}

	#[test]
	fn metadata() {
		let line = LineString::from(&[[0, 0], [1, 1]]);
		assert_eq!(line.dimensions(), 1);
		assert_eq!(line.geojson_type(), "LineString");
	}

	#[test]
	fn into_multi() {
		let line = LineString::from(&[[0, 0], [1, 1]]);
		let multi = line.clone().into_multi();
		assert_eq!(multi.len(), 1);
		assert_eq!(multi.0[0], line);
	}

	#[test]
	fn from_slice_and_vec_ref() {
		let coords = vec![[0.5, 1.0], [2.0, 3.5]];
		let expected = LineString(vec![Point::new(0.5, 1.0), Point::new(2.0, 3.5)]);
		assert_eq!(LineString::from(coords.as_slice()), expected);
		assert_eq!(LineString::from(&coords), expected);
		assert_eq!(LineString::from(coords), expected);
	}

	#[test]
	fn from_geo() {
		let ls = geo::LineString::from(vec![(0.0, 0.0), (1.0, 2.0)]);
		assert_eq!(LineString::from(ls), LineString::from(&[[0, 0], [1, 2]]));
	}
}
