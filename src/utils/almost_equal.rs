use crate::ieee754::{self, Ieee754};

/// Compares raw floats directly, without building a
/// [`FloatCmp`](crate::ieee754::FloatCmp) by hand.
pub trait AlmostEqual<Rhs = Self> {
    fn almost_equal(self, other: Rhs) -> bool;
}

impl<T: Ieee754> AlmostEqual for T {
    #[inline(always)]
    fn almost_equal(self, other: T) -> bool {
        ieee754::almost_equal(self, other)
    }
}
