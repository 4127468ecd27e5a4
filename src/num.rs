//! Numbers and numerics.

use num_traits as nt;
use std::fmt;

/// Gathers what generic vector code needs from a scalar base type.
///
/// Implemented for the signed integer and floating point primitives. The
/// numeric-limit constants follow the conventions of C++'s
/// `std::numeric_limits`, so for integers [`Scalar::SMALLEST`] is the most
/// negative value and [`Scalar::EPSILON`] is zero.
pub trait Scalar:
    'static
    + Copy
    + fmt::Debug
    + fmt::Display
    + PartialOrd
    + nt::Signed
    + nt::NumAssign
    + nt::AsPrimitive<Self>
{
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    /// The most negative finite value.
    const LOWEST: Self;
    /// The largest finite value.
    const MAX: Self;
    /// The smallest positive normal value for floats, the minimum value for
    /// integers.
    const SMALLEST: Self;
    /// The smallest `e` for which `1 + e != 1`, zero for integers.
    const EPSILON: Self;

    /// The distance `|self - other|`, or `None` if it is not representable.
    fn checked_distance(self, other: Self) -> Option<Self>;

    /// The absolute value, clamped to [`Scalar::MAX`] for integers.
    fn saturating_magnitude(self) -> Self;

    /// The product, clamped to the representable range for integers.
    fn saturating_product(self, other: Self) -> Self;
}

/// Gathers traits useful for working with generic floating point types.
///
/// Only vectors over a [`Float`] expose length and normalization.
pub trait Float: Scalar + nt::Float + approx::RelativeEq<Epsilon = Self> {}

macro_rules! impl_scalar_int {
    ($i:ty) => {
        impl Scalar for $i {
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const TWO: Self = 2;
            const LOWEST: Self = Self::MIN;
            const MAX: Self = Self::MAX;
            const SMALLEST: Self = Self::MIN;
            const EPSILON: Self = 0;

            #[inline]
            fn checked_distance(self, other: Self) -> Option<Self> {
                if self > other {
                    self.checked_sub(other)
                } else {
                    other.checked_sub(self)
                }
            }

            #[inline]
            fn saturating_magnitude(self) -> Self {
                self.saturating_abs()
            }

            #[inline]
            fn saturating_product(self, other: Self) -> Self {
                self.saturating_mul(other)
            }
        }
    };
}

macro_rules! impl_scalar_float {
    ($f:ty) => {
        impl Scalar for $f {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;
            const LOWEST: Self = Self::MIN;
            const MAX: Self = Self::MAX;
            const SMALLEST: Self = Self::MIN_POSITIVE;
            const EPSILON: Self = Self::EPSILON;

            #[inline]
            fn checked_distance(self, other: Self) -> Option<Self> {
                Some(if self > other { self - other } else { other - self })
            }

            #[inline]
            fn saturating_magnitude(self) -> Self {
                self.abs()
            }

            #[inline]
            fn saturating_product(self, other: Self) -> Self {
                self * other
            }
        }

        impl Float for $f {}
    };
}

impl_scalar_int!(i8);
impl_scalar_int!(i16);
impl_scalar_int!(i32);
impl_scalar_int!(i64);
impl_scalar_float!(f32);
impl_scalar_float!(f64);

/// Whether `a` and `b` differ by at most `e`.
///
/// The difference is formed as larger minus smaller. For integers, a
/// difference too large to represent exceeds every valid `e`.
#[inline]
pub fn equal_with_abs_error<T: Scalar>(a: T, b: T, e: T) -> bool {
    a.checked_distance(b).is_some_and(|difference| difference <= e)
}

/// Whether `a` and `b` differ by at most `e` times the magnitude of `a`.
///
/// Note that the error is relative to `a` only, so the comparison is not
/// symmetric in its operands.
#[inline]
pub fn equal_with_rel_error<T: Scalar>(a: T, b: T, e: T) -> bool {
    let Some(difference) = a.checked_distance(b) else {
        return false;
    };
    difference <= e.saturating_product(a.saturating_magnitude())
}
