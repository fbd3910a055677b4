use num_traits::{PrimInt, Signed};

/// Division that rounds toward negative infinity.
/// Truncating division (what `/` does) rounds toward zero, which puts
/// `-1 / 16` in chunk `0` instead of chunk `-1`.
/// `divisor` must not be zero.
#[inline]
pub fn floor_div<T: PrimInt + Signed>(dividend: T, divisor: T) -> T {
	let quotient = dividend / divisor;
	let remainder = dividend % divisor;
	if !remainder.is_zero() && (remainder.is_negative() != divisor.is_negative()) {
		quotient - T::one()
	} else {
		quotient
	}
}

/// The remainder that pairs with [floor_div].
/// For a positive `divisor` the result is always in `[0, divisor)`.
#[inline]
pub fn floor_mod<T: PrimInt + Signed>(dividend: T, divisor: T) -> T {
	let remainder = dividend % divisor;
	if !remainder.is_zero() && (remainder.is_negative() != divisor.is_negative()) {
		remainder + divisor
	} else {
		remainder
	}
}

/// A horizontal coordinate pair.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord2 {
	pub x: i64,
	pub z: i64,
}

impl Coord2 {
	#[inline(always)]
	pub const fn new(x: i64, z: i64) -> Self {
		Self {
			x,
			z
		}
	}

	#[inline(always)]
	pub fn map<F: Fn(i64)->i64>(self, map: F) -> Self {
		Self {
			x: map(self.x),
			z: map(self.z),
		}
	}

	#[inline(always)]
	pub fn xz(self) -> (i64, i64) {
		(self.x, self.z)
	}
}

impl From<(i64, i64)> for Coord2 {
	#[inline(always)]
	fn from(value: (i64, i64)) -> Self {
		Coord2::new(value.0, value.1)
	}
}

impl From<Coord2> for (i64, i64) {
	#[inline(always)]
	fn from(value: Coord2) -> Self {
		(value.x, value.z)
	}
}

impl std::fmt::Display for Coord2 {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "({}, {})", self.x, self.z)
	}
}
