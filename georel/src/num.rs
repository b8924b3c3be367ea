//! Numeric types that can be used as coordinates.

use nalgebra::Scalar;
use num_traits::{AsPrimitive, Bounded, FromPrimitive};

/// Near-equality of two values.
///
/// Floating point values are considered equal if they differ by no more than the machine epsilon of the type,
/// scaled by the larger of the two magnitudes (but not less than 1):
///
/// `|a - b| <= eps * max(1, |a|, |b|)`
///
/// Integer values are compared exactly.
pub trait NearEq {
    /// Returns true if the values are equal within the tolerance of the type.
    fn near_eq(&self, other: &Self) -> bool;
}

macro_rules! impl_near_eq_float {
    ($($t:ty),*) => {$(
        impl NearEq for $t {
            fn near_eq(&self, other: &Self) -> bool {
                approx::relative_eq!(
                    *self,
                    *other,
                    epsilon = <$t>::EPSILON,
                    max_relative = <$t>::EPSILON
                )
            }
        }
    )*};
}

macro_rules! impl_near_eq_exact {
    ($($t:ty),*) => {$(
        impl NearEq for $t {
            fn near_eq(&self, other: &Self) -> bool {
                self == other
            }
        }
    )*};
}

impl_near_eq_float!(f32, f64);
impl_near_eq_exact!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Numeric type of point coordinates.
///
/// This trait is auto-implemented for all primitive numeric types. All calculations that cannot be done in the
/// coordinate type itself (lengths, directions, areas of integer geometries) are done in `f64`, which is why the
/// coordinate must be convertible into it.
pub trait CoordNum:
    num_traits::Num
    + Copy
    + PartialOrd
    + Bounded
    + Scalar
    + FromPrimitive
    + AsPrimitive<f64>
    + NearEq
{
}

impl<T> CoordNum for T where
    T: num_traits::Num
        + Copy
        + PartialOrd
        + Bounded
        + Scalar
        + FromPrimitive
        + AsPrimitive<f64>
        + NearEq
{
}

/// Compares two `f64` values that are results of calculations, with the same tolerance as [`NearEq`] for floats.
pub(crate) fn near_eq_f64(a: f64, b: f64) -> bool {
    a.near_eq(&b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_near_eq() {
        assert!(1.0f64.near_eq(&1.0));
        assert!(1.0f64.near_eq(&(1.0 + f64::EPSILON)));
        assert!(!1.0f64.near_eq(&(1.0 + 4.0 * f64::EPSILON)));
        assert!(1e10f64.near_eq(&(1e10 + 1e-7)));
        assert!(!1e10f64.near_eq(&(1e10 + 1e-3)));
        assert!(0.0f64.near_eq(&1e-17));
        assert!(0.1f32.near_eq(&0.1));
    }

    #[test]
    fn integer_near_eq() {
        assert!(5i32.near_eq(&5));
        assert!(!5i32.near_eq(&6));
        assert!(!0u8.near_eq(&1));
    }
}
