/// Implements the coordinate-list conversions of a composite tuple struct `$t` over
/// elements `$i`: owned vectors convert element-wise by value, borrowed vectors and
/// arrays go through the slice conversion, and `$t` can be collected from `$i`.
#[macro_export]
macro_rules! impl_from_array {
	($($t:ty,$i:ty),*) => {$(
		impl FromIterator<$i> for $t {
			fn from_iter<I: IntoIterator<Item = $i>>(iter: I) -> Self {
				Self(iter.into_iter().collect())
			}
		}

		impl<T> From<Vec<T>> for $t
		where
			$i: From<T>,
		{
			fn from(items: Vec<T>) -> Self {
				items.into_iter().map(<$i>::from).collect()
			}
		}

		impl<'a, T> From<&'a [T]> for $t
		where
			$i: From<&'a T>,
		{
			fn from(items: &'a [T]) -> Self {
				items.iter().map(<$i>::from).collect()
			}
		}

		impl<'a, T> From<&'a Vec<T>> for $t
		where
			$i: From<&'a T>,
		{
			fn from(items: &'a Vec<T>) -> Self {
				Self::from(items.as_slice())
			}
		}

		impl<'a, T, const N: usize> From<&'a [T; N]> for $t
		where
			$i: From<&'a T>,
		{
			fn from(items: &'a [T; N]) -> Self {
				Self::from(items.as_slice())
			}
		}
	)*}
}

/// Implements `CompositeGeometryTrait<$i>` for a tuple struct `$t` wrapping `Vec<$i>`.
#[macro_export]
macro_rules! impl_composite {
	($($t:ty,$i:ty),*) => {$(
		impl $crate::CompositeGeometryTrait<$i> for $t {
			fn new() -> Self {
				Self(Vec::new())
			}
			fn as_vec(&self) -> &Vec<$i> {
				&self.0
			}
			fn as_mut_vec(&mut self) -> &mut Vec<$i> {
				&mut self.0
			}
			fn into_inner(self) -> Vec<$i> {
				self.0
			}
		}
	)*}
}
