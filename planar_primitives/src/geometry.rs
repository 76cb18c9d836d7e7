use crate::types::*;
use std::fmt::Debug;

/// The closed set of geometry variants.
///
/// Every shape handled by this crate is exactly one of these. Operations that have to
/// treat each variant differently, such as rounding, match on this enum exhaustively.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(Point),
	MultiPoint(MultiPoint),
	LineString(LineString),
	MultiLineString(MultiLineString),
	Ring(Ring),
	Polygon(Polygon),
	MultiPolygon(MultiPolygon),
	Collection(Collection),
	Bound(Bound),
}

impl Geometry {
	/// Creates a point from `[x, y]`.
	pub fn new_point<T: Into<f64>>(value: [T; 2]) -> Self {
		Self::Point(Point::from(value))
	}
	/// Creates a multi point from a list of `[x, y]` pairs.
	pub fn new_multi_point<T: Into<f64>>(value: Vec<[T; 2]>) -> Self {
		Self::MultiPoint(MultiPoint::from(value))
	}
	/// Creates a line string from a list of `[x, y]` pairs.
	pub fn new_line_string<T: Into<f64>>(value: Vec<[T; 2]>) -> Self {
		Self::LineString(LineString::from(value))
	}
	/// Creates a multi line string, one coordinate list per line.
	pub fn new_multi_line_string<T: Into<f64>>(value: Vec<Vec<[T; 2]>>) -> Self {
		Self::MultiLineString(MultiLineString::from(value))
	}
	/// Creates a ring from a list of `[x, y]` pairs. Closing it is up to the caller.
	pub fn new_ring<T: Into<f64>>(value: Vec<[T; 2]>) -> Self {
		Self::Ring(Ring::from(value))
	}
	/// Creates a polygon from its rings, outer ring first.
	pub fn new_polygon<T: Into<f64>>(value: Vec<Vec<[T; 2]>>) -> Self {
		Self::Polygon(Polygon::from(value))
	}
	/// Creates a multi polygon, one list of rings per polygon.
	pub fn new_multi_polygon<T: Into<f64>>(value: Vec<Vec<Vec<[T; 2]>>>) -> Self {
		Self::MultiPolygon(MultiPolygon::from(value))
	}
	/// Creates a collection of arbitrary geometries.
	pub fn new_collection(value: Vec<Geometry>) -> Self {
		Self::Collection(Collection(value))
	}
	/// Creates a bound from its `min` and `max` corner.
	pub fn new_bound(min: [f64; 2], max: [f64; 2]) -> Self {
		Self::Bound(Bound::new(min, max))
	}

	/// Name of the variant, for diagnostics. Unlike [`GeometryTrait::geojson_type`]
	/// this distinguishes `Ring` and `Bound` from `Polygon`.
	pub fn variant_name(&self) -> &'static str {
		match self {
			Geometry::Point(_) => "Point",
			Geometry::MultiPoint(_) => "MultiPoint",
			Geometry::LineString(_) => "LineString",
			Geometry::MultiLineString(_) => "MultiLineString",
			Geometry::Ring(_) => "Ring",
			Geometry::Polygon(_) => "Polygon",
			Geometry::MultiPolygon(_) => "MultiPolygon",
			Geometry::Collection(_) => "Collection",
			Geometry::Bound(_) => "Bound",
		}
	}

	/// Wraps single geometries into their multi counterpart. Everything else is returned as is.
	pub fn into_multi(self) -> Self {
		match self {
			Geometry::Point(g) => Geometry::MultiPoint(MultiPoint::from(g)),
			Geometry::LineString(g) => Geometry::MultiLineString(g.into_multi()),
			Geometry::Polygon(g) => Geometry::MultiPolygon(g.into_multi()),
			Geometry::MultiPoint(_)
			| Geometry::MultiLineString(_)
			| Geometry::Ring(_)
			| Geometry::MultiPolygon(_)
			| Geometry::Collection(_)
			| Geometry::Bound(_) => self,
		}
	}
}

/// Evaluates `$body` with `$g` bound to the payload of whichever variant `$value` holds.
macro_rules! dispatch {
	($value:expr, $g:ident => $body:expr) => {
		match $value {
			Geometry::Point($g) => $body,
			Geometry::MultiPoint($g) => $body,
			Geometry::LineString($g) => $body,
			Geometry::MultiLineString($g) => $body,
			Geometry::Ring($g) => $body,
			Geometry::Polygon($g) => $body,
			Geometry::MultiPolygon($g) => $body,
			Geometry::Collection($g) => $body,
			Geometry::Bound($g) => $body,
		}
	};
}

impl GeometryTrait for Geometry {
	fn dimensions(&self) -> u8 {
		dispatch!(self, g => g.dimensions())
	}

	fn bound(&self) -> Bound {
		dispatch!(self, g => g.bound())
	}

	fn geojson_type(&self) -> &'static str {
		dispatch!(self, g => g.geojson_type())
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = dispatch!(self, g => g);
		f.debug_tuple(self.variant_name()).field(inner).finish()
	}
}

macro_rules! impl_from_variant {
	($($v:ident),*) => {$(
		impl From<$v> for Geometry {
			fn from(value: $v) -> Self {
				Geometry::$v(value)
			}
		}
	)*}
}

impl_from_variant!(
	Point,
	MultiPoint,
	LineString,
	MultiLineString,
	Ring,
	Polygon,
	MultiPolygon,
	Collection,
	Bound
);

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Geometry::new_point([1, 2]), 0, "Point")]
	#[case(Geometry::new_multi_point(vec![[1, 2]]), 0, "MultiPoint")]
	#[case(Geometry::new_line_string(vec![[1, 2], [3, 4]]), 1, "LineString")]
	#[case(Geometry::new_multi_line_string(vec![vec![[1, 2], [3, 4]]]), 1, "MultiLineString")]
	#[case(Geometry::new_ring(vec![[0, 0], [1, 0], [1, 1], [0, 0]]), 2, "Polygon")]
	#[case(Geometry::new_polygon(vec![vec![[0, 0], [1, 0], [1, 1], [0, 0]]]), 2, "Polygon")]
	#[case(Geometry::new_multi_polygon(vec![vec![vec![[0, 0], [1, 0], [1, 1], [0, 0]]]]), 2, "MultiPolygon")]
	#[case(Geometry::new_collection(vec![]), 0, "GeometryCollection")]
	#[case(Geometry::new_bound([0.0, 0.0], [1.0, 1.0]), 2, "Polygon")]
	fn metadata(#[case] geometry: Geometry, #[case] dimensions: u8, #[case] geojson_type: &str) {
		assert_eq!(geometry.dimensions(), dimensions);
		assert_eq!(geometry.geojson_type(), geojson_type);
	}

	#[test]
	fn bound_dispatch() {
		let g = Geometry::new_polygon(vec![vec![[0, 0], [4, 0], [4, 3], [0, 0]]]);
		assert_eq!(g.bound(), Bound::new([0.0, 0.0], [4.0, 3.0]));
		let g = Geometry::new_bound([1.0, 2.0], [3.0, 4.0]);
		assert_eq!(g.bound(), Bound::new([1.0, 2.0], [3.0, 4.0]));
	}

	#[test]
	fn into_multi() {
		assert_eq!(
			Geometry::new_point([1, 2]).into_multi(),
			Geometry::new_multi_point(vec![[1, 2]])
		);
		assert_eq!(
			Geometry::new_line_string(vec![[1, 2], [3, 4]]).into_multi(),
			Geometry::new_multi_line_string(vec![vec![[1, 2], [3, 4]]])
		);
		let ring = Geometry::new_ring(vec![[0, 0], [1, 1], [0, 0]]);
		assert_eq!(ring.clone().into_multi(), ring);
	}

	#[test]
	fn debug_format() {
		assert_eq!(format!("{:?}", Geometry::new_point([1, 2])), "Point([1.0, 2.0])");
		assert_eq!(
			format!("{:?}", Geometry::new_bound([0.0, 0.0], [1.0, 1.0])),
			"Bound(Bound([0.0, 0.0], [1.0, 1.0]))"
		);
	}

	#[test]
	fn variant_name() {
		assert_eq!(Geometry::new_ring(vec![[0, 0]]).variant_name(), "Ring");
		assert_eq!(Geometry::from(Collection::default()).variant_name(), "Collection");
	}
}
