// This module defines the value types of the crate: `Point` and `Bound` as the leaves,
// and the composites `MultiPoint`, `LineString`, `MultiLineString`, `Ring`, `Polygon`,
// `MultiPolygon` and `Collection` built from them. All of them implement `GeometryTrait`,
// the composites additionally implement `CompositeGeometryTrait`.

mod bound;
mod collection;
mod linestring;
mod macros;
mod multi_linestring;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod ring;
mod traits;

pub use bound::*;
pub use collection::*;
pub use linestring::*;
pub use multi_linestring::*;
pub use multi_point::*;
pub use multi_polygon::*;
pub use point::*;
pub use polygon::*;
pub use ring::*;
pub use traits::*;
