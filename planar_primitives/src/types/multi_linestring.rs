use super::{Bound, GeometryTrait, LineString};
use std::fmt::Debug;

/// A set of independent line strings.
#[derive(Clone, Default, PartialEq)]
pub struct MultiLineString(pub Vec<LineString>);

impl GeometryTrait for MultiLineString {
	fn dimensions(&self) -> u8 {
		1
	}

	fn bound(&self) -> Bound {
		union_of_bounds(&self.0)
	}

	fn geojson_type(&self) -> &'static str {
		"MultiLineString"
	}
}

/// Union of the members' bounds. Members without coordinates are skipped.
pub(crate) fn union_of_bounds<G: GeometryTrait>(members: &[G]) -> Bound {
	members
		.iter()
		.map(GeometryTrait::bound)
		.filter(|bound| !bound.is_empty())
		.reduce(|acc, bound| acc.union(&bound))
		.unwrap_or(Bound::EMPTY)
}

impl Debug for MultiLineString {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_composite!(MultiLineString, LineString);
crate::impl_from_array!(MultiLineString, LineString);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::CompositeGeometryTrait;

	#[test]
	fn bound_is_union() {
		let mls = MultiLineString::from(&[vec![[0, 0], [1, 1]], vec![[5, -3], [6, 2]]]);
		assert_eq!(mls.bound(), Bound::new([0.0, -3.0], [6.0, 2.0]));
	}

	#[test]
	fn empty_members_are_skipped() {
		let mls = MultiLineString(vec![LineString::from(&[[2, 2], [3, 3]]), LineString::new()]);
		assert_eq!(mls.bound(), Bound::new([2.0, 2.0], [3.0, 3.0]));
		assert!(MultiLineString::new().bound().is_empty());
	}

	#[test]
	fn leading_empty_member_is_skipped() {
		let mls = MultiLineString(vec![LineString::new(), LineString::from(&[[5, 5], [10, 10]])]);
		assert_eq!(mls.bound(), Bound::new([5.0, 5.0], [10.0, 10.0]));
		let all_empty = MultiLineString(vec![LineString::new(), LineString::new()]);
		assert_eq!(all_empty.bound(), Bound::EMPTY);
	}

	#[test]
	fn metadata() {
		let mls = MultiLineString::new();
		assert_eq!(mls.dimensions(), 1);
		assert_eq!(mls.geojson_type(), "MultiLineString");
	}
}
