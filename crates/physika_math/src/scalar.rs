//! Numeric element types for vectors and matrices
//!
//! [`Scalar`] covers every primitive integer and float; [`Real`] narrows it to
//! the floating point types for operations that need a field (inversion,
//! tolerance comparisons, norms).

use std::fmt::{Debug, Display};

use num_traits::{Float, Num, NumAssign, NumCast};

/// Element type of a [`Vector`](crate::Vector) or [`SquareMatrix`](crate::SquareMatrix)
///
/// Integer scalars follow integer arithmetic (division truncates, overflow
/// panics in debug builds). The `wrapping_*` hooks give the modulo 2^w
/// arithmetic used by determinants. Float scalars carry an epsilon used as
/// the near-zero threshold for divisors.
pub trait Scalar:
    Copy
    + Debug
    + Display
    + PartialEq
    + PartialOrd
    + Num
    + NumAssign
    + NumCast
    + Send
    + Sync
    + 'static
{
    /// Smallest representable difference from one (zero for integers)
    fn epsilon() -> Self;

    /// Absolute value (identity for unsigned types)
    fn magnitude(self) -> Self;

    /// Whether dividing by this value is rejected
    ///
    /// Floats: magnitude below epsilon. Integers: exactly zero.
    fn is_degenerate_divisor(self) -> bool;

    /// Addition that wraps on integer overflow
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Subtraction that wraps on integer overflow
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Multiplication that wraps on integer overflow
    fn wrapping_mul(self, rhs: Self) -> Self;
}

/// Floating point scalar
pub trait Real: Scalar + Float {}

macro_rules! impl_integer_scalar {
    ($abs:ident => $($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn epsilon() -> Self {
                    0
                }

                #[inline]
                fn magnitude(self) -> Self {
                    impl_integer_scalar!(@$abs self)
                }

                #[inline]
                fn is_degenerate_divisor(self) -> bool {
                    self == 0
                }

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$t>::wrapping_sub(self, rhs)
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$t>::wrapping_mul(self, rhs)
                }
            }
        )*
    };
    (@signed $x:ident) => { $x.abs() };
    (@unsigned $x:ident) => { $x };
}

macro_rules! impl_float_scalar {
    ($($t:ident),* $(,)?) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn epsilon() -> Self {
                    $t::EPSILON
                }

                #[inline]
                fn magnitude(self) -> Self {
                    self.abs()
                }

                #[inline]
                fn is_degenerate_divisor(self) -> bool {
                    self.magnitude() < <$t as Scalar>::epsilon()
                }

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    self - rhs
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    self * rhs
                }
            }

            impl Real for $t {}
        )*
    };
}

impl_integer_scalar!(unsigned => u8, u16, u32, u64, u128, usize);
impl_integer_scalar!(signed => i8, i16, i32, i64, i128, isize);
impl_float_scalar!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_epsilon() {
        assert_eq!(<f32 as Scalar>::epsilon(), f32::EPSILON);
        assert_eq!(<f64 as Scalar>::epsilon(), f64::EPSILON);
    }

    #[test]
    fn test_integer_epsilon_is_zero() {
        assert_eq!(<u8 as Scalar>::epsilon(), 0);
        assert_eq!(<i64 as Scalar>::epsilon(), 0);
    }

    #[test]
    fn test_float_degenerate_divisor() {
        assert!(0.0f32.is_degenerate_divisor());
        assert!((-0.0f64).is_degenerate_divisor());
        assert!((f64::EPSILON * 0.5).is_degenerate_divisor());
        assert!((-f32::EPSILON * 0.5).is_degenerate_divisor());

        assert!(!f64::EPSILON.is_degenerate_divisor());
        assert!(!(-1.0f32).is_degenerate_divisor());
    }

    #[test]
    fn test_magnitude() {
        assert_eq!((-3i8).magnitude(), 3);
        assert_eq!(7u64.magnitude(), 7);
        assert_eq!((-2.5f64).magnitude(), 2.5);
        assert_eq!(Scalar::magnitude(-0.0f32), 0.0);
    }

    #[test]
    fn test_integer_degenerate_divisor() {
        assert!(0u32.is_degenerate_divisor());
        assert!(0i16.is_degenerate_divisor());
        assert!(!1u8.is_degenerate_divisor());
        assert!(!(-1i32).is_degenerate_divisor());
    }

    #[test]
    fn test_integer_wrapping_hooks() {
        assert_eq!(Scalar::wrapping_sub(0u32, 1), u32::MAX);
        assert_eq!(Scalar::wrapping_add(i8::MAX, 1), i8::MIN);
        assert_eq!(Scalar::wrapping_mul(16i8, 16), 0);
        assert_eq!(Scalar::wrapping_mul(3u8, 5), 15);
    }

    #[test]
    fn test_float_wrapping_hooks_are_plain_arithmetic() {
        assert_eq!(Scalar::wrapping_sub(0.0f64, 1.0), -1.0);
        assert_eq!(Scalar::wrapping_add(f32::MAX, f32::MAX), f32::INFINITY);
        assert_eq!(Scalar::wrapping_mul(1.5f64, -2.0), -3.0);
    }
}
