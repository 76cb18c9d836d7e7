use super::Bound;
use std::fmt::Debug;

/// Behaviour shared by every geometry variant.
pub trait GeometryTrait: Debug + Clone {
	/// Topological dimension: 0 for points, 1 for lines, 2 for areas.
	fn dimensions(&self) -> u8;

	/// Axis-aligned bounding box of all coordinates.
	///
	/// Composites without any coordinates return [`Bound::EMPTY`].
	fn bound(&self) -> Bound;

	/// The GeoJSON `type` tag a serializer should emit for this geometry.
	fn geojson_type(&self) -> &'static str;
}

/// Composite geometries are ordered sequences of simpler elements,
/// e.g. a polygon is a sequence of rings and a ring a sequence of points.
pub trait CompositeGeometryTrait<Item>: Debug + Clone {
	/// Creates an empty composite.
	fn new() -> Self;

	/// Borrows the elements.
	fn as_vec(&self) -> &Vec<Item>;

	/// Borrows the elements mutably, e.g. to edit them in place.
	fn as_mut_vec(&mut self) -> &mut Vec<Item>;

	/// Consumes the composite and returns its elements.
	fn into_inner(self) -> Vec<Item>;

	/// Returns `true` if there are no elements.
	fn is_empty(&self) -> bool {
		self.as_vec().is_empty()
	}

	/// Number of elements.
	fn len(&self) -> usize {
		self.as_vec().len()
	}

	/// Appends an element.
	fn push(&mut self, item: Item) {
		self.as_mut_vec().push(item);
	}

	/// Removes and returns the last element, if any.
	fn pop(&mut self) -> Option<Item> {
		self.as_mut_vec().pop()
	}

	/// The first element, if any.
	fn first(&self) -> Option<&Item> {
		self.as_vec().first()
	}

	/// The last element, if any.
	fn last(&self) -> Option<&Item> {
		self.as_vec().last()
	}

	/// Iterates over the elements.
	fn iter(&self) -> std::slice::Iter<'_, Item> {
		self.as_vec().iter()
	}

	/// Iterates mutably over the elements.
	fn iter_mut(&mut self) -> std::slice::IterMut<'_, Item> {
		self.as_mut_vec().iter_mut()
	}
}
