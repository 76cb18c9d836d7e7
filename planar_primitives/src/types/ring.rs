use super::{Bound, GeometryTrait, Point, multi_point::bound_of_points};
use std::fmt::Debug;

/// A closed sequence of points bounding an area, the building block of polygons.
///
/// A well-formed ring repeats its first point at the end. This is not enforced;
/// use [`Ring::is_closed`] to check it.
#[derive(Clone, Default, PartialEq)]
pub struct Ring(pub Vec<Point>);

impl Ring {
	/// Returns `true` if the ring has points and its first and last point are equal.
	#[must_use]
	pub fn is_closed(&self) -> bool {
		match (self.0.first(), self.0.last()) {
			(Some(first), Some(last)) => first == last,
			_ => false,
		}
	}
}

impl GeometryTrait for Ring {
	fn dimensions(&self) -> u8 {
		2
	}

	fn bound(&self) -> Bound {
		bound_of_points(&self.0)
	}

	/// A ring is serialized as a polygon without holes.
	fn geojson_type(&self) -> &'static str {
		"Polygon"
	}
}

impl Debug for Ring {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_composite!(Ring, Point);
crate::impl_from_array!(Ring, Point);

impl From<geo::LineString> for Ring {
	fn from(geometry: geo::LineString) -> Self {
		geometry.into_iter().map(Point::from).collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::CompositeGeometryTrait;

	fn square() -> Ring {
		Ring::from(&[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]])
	}

	#[test]
	fn bound() {
		assert_eq!(square().bound(), Bound::new([0.0, 0.0], [10.0, 10.0]));
		assert!(Ring::new().bound().is_empty());
	}

	#[test]
	fn is_closed() {
		assert!(square().is_closed());
		assert!(!Ring::from(&[[0, 0], [1, 0], [1, 1]]).is_closed());
		assert!(!Ring::new().is_closed());
	}

	#[test]
	fn metadata() {
		assert_eq!(square().dimensions(), 2);
		assert_eq!(square().geojson_type(), "Polygon");
	}

	#[test]
	fn from_geo_linestring() {
		let ls = geo::LineString::from(vec![geo::Coord { x: 0.0, y: 0.0 }, geo::Coord { x: 1.0, y: 1.0 }]);
		let ring = Ring::from(ls);
		assert_eq!(ring.len(), 2);
	}
}
