use num_traits::Zero;

use crate::ieee754::Ieee754;

/// Immutable view over a single float, compared by epsilon, sign and ULP
/// distance.
///
/// Equality through `==` is not transitive, so the type implements
/// `PartialEq` only.
#[derive(Debug, Clone, Copy)]
pub struct FloatCmp<T: Ieee754> {
    value: T,
}

pub type F32Cmp = FloatCmp<f32>;

pub type F64Cmp = FloatCmp<f64>;

impl<T: Ieee754> FloatCmp<T> {
    #[inline(always)]
    pub fn new(value: T) -> Self {
        Self { value }
    }

    #[inline(always)]
    pub fn float_data(&self) -> T {
        self.value
    }

    #[inline(always)]
    pub fn bit_data(&self) -> T::Bits {
        self.value.to_bit_pattern()
    }

    #[inline(always)]
    pub fn sign_bit(&self) -> T::Bits {
        T::SIGN_MASK & self.bit_data()
    }

    #[inline(always)]
    pub fn exponent_bits(&self) -> T::Bits {
        T::EXPONENT_MASK & self.bit_data()
    }

    #[inline(always)]
    pub fn significand_bits(&self) -> T::Bits {
        T::SIGNIFICAND_MASK & self.bit_data()
    }

    /// All-ones exponent with a non-zero significand. An all-ones exponent
    /// with a zero significand is an infinity.
    #[inline(always)]
    pub fn is_nan(&self) -> bool {
        self.exponent_bits() == T::EXPONENT_MASK && !self.significand_bits().is_zero()
    }

    #[inline(always)]
    pub fn float_close(lhs: T, rhs: T) -> bool {
        (lhs - rhs).abs() <= T::MAX_DIFF
    }

    /// Number of representable values between two bit patterns.
    ///
    /// Sign-magnitude patterns are mapped onto an offset-binary line first, so
    /// the distance is symmetric, never wraps and treats `0.0` and `-0.0` as
    /// the same point.
    pub fn ulp_distance(lhs: T::Bits, rhs: T::Bits) -> T::Bits {
        let lhs = Self::to_monotonic(lhs);
        let rhs = Self::to_monotonic(rhs);

        if lhs >= rhs {
            lhs - rhs
        } else {
            rhs - lhs
        }
    }

    #[inline(always)]
    pub fn ulp_close(lhs: T::Bits, rhs: T::Bits) -> bool {
        Self::ulp_distance(lhs, rhs) <= T::MAX_ULPS_DIFF
    }

    pub fn almost_equal(&self, other: &Self) -> bool {
        if self.is_nan() || other.is_nan() {
            return false;
        }

        // near zero the ULP distance blows up, fall back to an absolute check
        if Self::float_close(self.value, other.value) {
            return true;
        }

        if self.sign_bit() != other.sign_bit() {
            return false;
        }

        Self::ulp_close(self.bit_data(), other.bit_data())
    }

    #[inline(always)]
    fn to_monotonic(bits: T::Bits) -> T::Bits {
        let magnitude = bits & !T::SIGN_MASK;

        if (bits & T::SIGN_MASK).is_zero() {
            T::SIGN_MASK + magnitude
        } else {
            T::SIGN_MASK - magnitude
        }
    }
}

impl<T: Ieee754> From<T> for FloatCmp<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Ieee754> PartialEq for FloatCmp<T> {
    fn eq(&self, other: &Self) -> bool {
        self.almost_equal(other)
    }
}

macro_rules! impl_raw_eq {
    ($float:ty) => {
        impl PartialEq<$float> for FloatCmp<$float> {
            fn eq(&self, other: &$float) -> bool {
                self.almost_equal(&FloatCmp::new(*other))
            }
        }

        impl PartialEq<FloatCmp<$float>> for $float {
            fn eq(&self, other: &FloatCmp<$float>) -> bool {
                other.almost_equal(&FloatCmp::new(*self))
            }
        }
    };
}

impl_raw_eq!(f32);
impl_raw_eq!(f64);

#[inline(always)]
pub fn almost_equal<T: Ieee754>(lhs: T, rhs: T) -> bool {
    FloatCmp::new(lhs).almost_equal(&FloatCmp::new(rhs))
}
