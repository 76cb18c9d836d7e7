use super::{Bound, GeometryTrait, Point};
use std::fmt::Debug;

/// An unordered set of points, stored in insertion order.
#[derive(Clone, Default, PartialEq)]
pub struct MultiPoint(pub Vec<Point>);

/// Bound of a point sequence: starts at the first point and extends by the rest.
pub(crate) fn bound_of_points(points: &[Point]) -> Bound {
	match points.split_first() {
		None => Bound::EMPTY,
		Some((first, rest)) => rest.iter().fold(first.bound(), |bound, p| bound.extend(p)),
	}
}

impl GeometryTrait for MultiPoint {
	fn dimensions(&self) -> u8 {
		0
	}

	fn bound(&self) -> Bound {
		bound_of_points(&self.0)
	}

	fn geojson_type(&self) -> &'static str {
		"MultiPoint"
	}
}

impl Debug for MultiPoint {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_composite!(MultiPoint, Point);
crate::impl_from_array!(MultiPoint, Point);

impl From<Point> for MultiPoint {
	fn from(point: Point) -> Self {
		Self(vec![point])
	}
}
