use super::{Bound, GeometryTrait, MultiPolygon, Ring};
use std::fmt::Debug;

/// An area given by an outer ring followed by zero or more holes.
#[derive(Clone, Default, PartialEq)]
pub struct Polygon(pub Vec<Ring>);

impl Polygon {
	#[must_use]
	pub fn into_multi(self) -> MultiPolygon {
		MultiPolygon(vec![self])
	}
}

impl GeometryTrait for Polygon {
	fn dimensions(&self) -> u8 {
		2
	}

	/// The bound of the outer ring. Holes lie inside it.
	fn bound(&self) -> Bound {
		self.0.first().map_or(Bound::EMPTY, Ring::bound)
	}

	fn geojson_type(&self) -> &'static str {
		"Polygon"
	}
}

impl Debug for Polygon {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_composite!(Polygon, Ring);
crate::impl_from_array!(Polygon, Ring);

impl From<geo::Polygon> for Polygon {
	fn from(geometry: geo::Polygon) -> Self {
		let (exterior, interiors) = geometry.into_inner();
		std::iter::once(exterior).chain(interiors).map(Ring::from).collect()
	}
}
