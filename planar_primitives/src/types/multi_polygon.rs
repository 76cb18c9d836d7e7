use super::{Bound, GeometryTrait, Polygon, multi_linestring::union_of_bounds};
use std::fmt::Debug;

/// A set of polygons, e.g. a country with islands.
#[derive(Clone, Default, PartialEq)]
pub struct MultiPolygon(pub Vec<Polygon>);

impl GeometryTrait for MultiPolygon {
	fn dimensions(&self) -> u8 {
		2
	}

	fn bound(&self) -> Bound {
		union_of_bounds(&self.0)
	}

	fn geojson_type(&self) -> &'static str {
		"MultiPolygon"
	}
}

impl Debug for MultiPolygon {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_composite!(MultiPolygon, Polygon);
crate::impl_from_array!(MultiPolygon, Polygon);

impl From<geo::MultiPolygon> for MultiPolygon {
	fn from(geometry: geo::MultiPolygon) -> Self {
		geometry.into_iter().map(Polygon::from).collect()
	}
}
