use crate::util::gg_float;
use half::f16;
use num_traits::{Float, One, PrimInt, Zero};
use rust_decimal::Decimal;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

/// An element type usable in [`Vector2`](super::Vector2), [`Vector3`](super::Vector3),
/// [`Vector4`](super::Vector4) and [`Rect`](super::Rect).
///
/// Implemented for every primitive integer, [`f16`], `f32`, `f64` and [`Decimal`]. Arithmetic
/// follows the element type's own semantics: integer overflow panics in debug builds and wraps
/// in release builds, and float division by zero gives an infinity or NaN.
pub trait Scalar:
    Copy
    + Default
    + Debug
    + Display
    + PartialEq
    + PartialOrd
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Send
    + Sync
    + 'static
{
    /// Absolute value; the identity for unsigned types.
    fn absolute(self) -> Self;
    /// Additive inverse; wraps for unsigned types, so `1_u8.negated() == 255`.
    fn negated(self) -> Self;
    /// The smaller operand; NaN if either float operand is NaN.
    fn scalar_min(self, other: Self) -> Self;
    /// The larger operand; NaN if either float operand is NaN.
    fn scalar_max(self, other: Self) -> Self;
    /// A value that agrees whenever `==` does, used to hash aggregates.
    fn hash_bits(self) -> u64;
}

macro_rules! impl_scalar_signed {
    ($($t:ty),+) => { $(
        impl Scalar for $t {
            fn absolute(self) -> Self {
                self.abs()
            }
            fn negated(self) -> Self {
                -self
            }
            fn scalar_min(self, other: Self) -> Self {
                Ord::min(self, other)
            }
            fn scalar_max(self, other: Self) -> Self {
                Ord::max(self, other)
            }
            #[allow(clippy::cast_sign_loss)]
            fn hash_bits(self) -> u64 {
                self as u64
            }
        }
    )+ };
}

macro_rules! impl_scalar_unsigned {
    ($($t:ty),+) => { $(
        impl Scalar for $t {
            fn absolute(self) -> Self {
                self
            }
            fn negated(self) -> Self {
                self.wrapping_neg()
            }
            fn scalar_min(self, other: Self) -> Self {
                Ord::min(self, other)
            }
            fn scalar_max(self, other: Self) -> Self {
                Ord::max(self, other)
            }
            #[allow(clippy::cast_possible_truncation)]
            fn hash_bits(self) -> u64 {
                self as u64
            }
        }
    )+ };
}

macro_rules! impl_scalar_float {
    ($($t:ty),+) => { $(
        impl Scalar for $t {
            fn absolute(self) -> Self {
                Float::abs(self)
            }
            fn negated(self) -> Self {
                -self
            }
            fn scalar_min(self, other: Self) -> Self {
                if Float::is_nan(self) || Float::is_nan(other) {
                    <Self as Float>::nan()
                } else {
                    Float::min(self, other)
                }
            }
            fn scalar_max(self, other: Self) -> Self {
                if Float::is_nan(self) || Float::is_nan(other) {
                    <Self as Float>::nan()
                } else {
                    Float::max(self, other)
                }
            }
            fn hash_bits(self) -> u64 {
                u64::from(gg_float::force_positive_zero(self).to_bits())
            }
        }
    )+ };
}

impl_scalar_signed!(i8, i16, i32, i64, isize);
impl_scalar_unsigned!(u8, u16, u32, u64, usize);
impl_scalar_float!(f16, f32, f64);

impl Scalar for Decimal {
    fn absolute(self) -> Self {
        self.abs()
    }
    fn negated(self) -> Self {
        -self
    }
    fn scalar_min(self, other: Self) -> Self {
        Ord::min(self, other)
    }
    fn scalar_max(self, other: Self) -> Self {
        Ord::max(self, other)
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn hash_bits(self) -> u64 {
        // 1.0 == 1.00, so hash the normalised representation.
        let normalised = self.normalize();
        let mantissa = normalised.mantissa();
        (mantissa as u64) ^ ((mantissa >> 64) as u64) ^ u64::from(normalised.scale()).rotate_left(56)
    }
}

/// A floating-point [`Scalar`]: [`f16`], `f32` or `f64`.
pub trait FloatScalar: Scalar + Float {}
impl<T: Scalar + Float> FloatScalar for T {}

/// A primitive integer [`Scalar`].
///
/// Shifts of 32- and 64-bit types reduce the amount modulo the bit width, so shifting an `i32`
/// by 33 shifts it by 1. Narrower types are widened to `i32` (sign-extending signed ones), shifted
/// by the amount modulo 32 and truncated back, so `1_u8` shifted left by 8 is 0 and a logical
/// right shift of `-8_i16` by 1 is `-4`.
pub trait IntScalar: Scalar + PrimInt + Hash {
    const BIT_WIDTH: u32;

    /// The shift count this value denotes when used as a shift amount.
    fn shift_count(self) -> u32;
    fn wrapping_shift_left(self, n: u32) -> Self;
    /// Arithmetic for signed types, logical for unsigned ones.
    fn wrapping_shift_right(self, n: u32) -> Self;
    /// Logical right shift regardless of signedness.
    fn wrapping_unsigned_shift_right(self, n: u32) -> Self;
}

macro_rules! impl_int_scalar {
    ($($t:ty => $u:ty),+) => { $(
        impl IntScalar for $t {
            const BIT_WIDTH: u32 = <$t>::BITS;

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            fn shift_count(self) -> u32 {
                (self as u32) & (Self::BIT_WIDTH - 1)
            }
            fn wrapping_shift_left(self, n: u32) -> Self {
                self.wrapping_shl(n)
            }
            fn wrapping_shift_right(self, n: u32) -> Self {
                self.wrapping_shr(n)
            }
            #[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]
            fn wrapping_unsigned_shift_right(self, n: u32) -> Self {
                (self as $u).wrapping_shr(n) as $t
            }
        }
    )+ };
}

// 8- and 16-bit shifts happen in 32 bits and are truncated back.
macro_rules! impl_narrow_int_scalar {
    ($($t:ty),+) => { $(
        impl IntScalar for $t {
            const BIT_WIDTH: u32 = <$t>::BITS;

            #[allow(clippy::cast_sign_loss)]
            fn shift_count(self) -> u32 {
                (i32::from(self) as u32) & 31
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            fn wrapping_shift_left(self, n: u32) -> Self {
                i32::from(self).wrapping_shl(n & 31) as $t
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            fn wrapping_shift_right(self, n: u32) -> Self {
                i32::from(self).wrapping_shr(n & 31) as $t
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            fn wrapping_unsigned_shift_right(self, n: u32) -> Self {
                (i32::from(self) as u32).wrapping_shr(n & 31) as $t
            }
        }
    )+ };
}

impl_narrow_int_scalar!(i8, i16, u8, u16);
impl_int_scalar!(
    i32 => u32, i64 => u64, isize => usize,
    u32 => u32, u64 => u64, usize => usize
);
