use super::{Bound, GeometryTrait, multi_linestring::union_of_bounds};
use crate::Geometry;
use std::fmt::Debug;

/// A heterogeneous sequence of geometries, which may include other collections.
#[derive(Clone, Default, PartialEq)]
pub struct Collection(pub Vec<Geometry>);

impl GeometryTrait for Collection {
	/// The highest dimension among the members; `0` for an empty collection.
	fn dimensions(&self) -> u8 {
		self.0.iter().map(Geometry::dimensions).max().unwrap_or(0)
	}

	fn bound(&self) -> Bound {
		union_of_bounds(&self.0)
	}

	fn geojson_type(&self) -> &'static str {
		"GeometryCollection"
	}
}

impl Debug for Collection {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_composite!(Collection, Geometry);

impl From<Vec<Geometry>> for Collection {
	fn from(value: Vec<Geometry>) -> Self {
		Self(value)
	}
}

impl FromIterator<Geometry> for Collection {
	fn from_iter<I: IntoIterator<Item = Geometry>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{CompositeGeometryTrait, LineString, Point};

	fn mixed() -> Collection {
		Collection(vec![
			Geometry::from(Point::new(-1.0, 3.0)),
			Geometry::from(LineString::from(&[[0, 0], [2, 1]])),
			Geometry::from(Bound::new([1.0, -4.0], [2.0, 0.0])),
		])
	}

	#[test]
	fn dimensions_is_max_of_members() {
		assert_eq!(mixed().dimensions(), 2);
		let points: Collection = vec![Geometry::new_point([1, 2])].into_iter().collect();
		assert_eq!(points.dimensions(), 0);
		assert_eq!(Collection::new().dimensions(), 0);
	}

	#[test]
	fn bound_is_union() {
		assert_eq!(mixed().bound(), Bound::new([-1.0, -4.0], [2.0, 3.0]));
		assert!(Collection::new().bound().is_empty());
	}

	#[test]
	fn nested() {
		let nested = Collection(vec![Geometry::from(mixed()), Geometry::new_point([10, 10])]);
		assert_eq!(nested.bound(), Bound::new([-1.0, -4.0], [10.0, 10.0]));
		assert_eq!(nested.geojson_type(), "GeometryCollection");
	}

	#[test]
	fn leading_empty_member_is_skipped() {
		let c = Collection(vec![Geometry::from(Collection::new()), Geometry::new_point([5, 5])]);
		assert_eq!(c.bound(), Bound::new([5.0, 5.0], [5.0, 5.0]));
	}
}
