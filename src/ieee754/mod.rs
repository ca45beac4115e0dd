// IEEE-754 bit view - field masks and bit reinterpretation for f32 and f64
// The comparator built on top of it lives in float_cmp

pub mod float_cmp;


use std::fmt::Debug;
use std::mem::size_of;

use num_traits::{Float, PrimInt, Unsigned};

use crate::constants::{BITS_PER_BYTE, MAX_ULPS_DIFF};
use crate::utils::type_with_size::UIntOf;

pub use float_cmp::{almost_equal, F32Cmp, F64Cmp, FloatCmp};

/// Floating point type with an IEEE-754 binary layout.
///
/// `Bits` is the unsigned integer of the same width, resolved from the byte
/// size of the float, so the bit view never crosses widths.
pub trait Ieee754: Float + Debug {
    type Bits: PrimInt + Unsigned + Debug;

    const BIT_COUNT: u32;

    /// Stored significand bits, without the implicit leading one.
    const SIGNIFICAND_BIT_COUNT: u32;

    const EXPONENT_BIT_COUNT: u32;

    const SIGN_MASK: Self::Bits;

    const SIGNIFICAND_MASK: Self::Bits;

    const EXPONENT_MASK: Self::Bits;

    /// Absolute tolerance used close to zero: the machine epsilon.
    const MAX_DIFF: Self;

    const MAX_ULPS_DIFF: Self::Bits;

    fn to_bit_pattern(self) -> Self::Bits;

    fn from_bit_pattern(bits: Self::Bits) -> Self;
}

macro_rules! impl_ieee754 {
    ($float:ty) => {
        impl Ieee754 for $float {
            type Bits = UIntOf<{ size_of::<$float>() }>;

            const BIT_COUNT: u32 = BITS_PER_BYTE * size_of::<$float>() as u32;
            const SIGNIFICAND_BIT_COUNT: u32 = <$float>::MANTISSA_DIGITS - 1;
            const EXPONENT_BIT_COUNT: u32 = Self::BIT_COUNT - 1 - Self::SIGNIFICAND_BIT_COUNT;

            const SIGN_MASK: Self::Bits = 1 << (Self::BIT_COUNT - 1);
            const SIGNIFICAND_MASK: Self::Bits = !0 >> (Self::EXPONENT_BIT_COUNT + 1);
            const EXPONENT_MASK: Self::Bits = !(Self::SIGN_MASK | Self::SIGNIFICAND_MASK);

            const MAX_DIFF: Self = <$float>::EPSILON;
            const MAX_ULPS_DIFF: Self::Bits = MAX_ULPS_DIFF as UIntOf<{ size_of::<$float>() }>;

            #[inline(always)]
            fn to_bit_pattern(self) -> Self::Bits {
                self.to_bits()
            }

            #[inline(always)]
            fn from_bit_pattern(bits: Self::Bits) -> Self {
                <$float>::from_bits(bits)
            }
        }
    };
}

impl_ieee754!(f32);
impl_ieee754!(f64);
