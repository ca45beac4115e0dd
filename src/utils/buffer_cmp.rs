use crate::ieee754::{almost_equal, Ieee754};

/// Element-wise comparison of two buffers, one byte per element (1 when the
/// pair is almost equal, 0 otherwise).
///
/// Buffers of different lengths are not comparable and produce an empty mask.
pub fn compare_buffers<T: Ieee754>(lhs: &[T], rhs: &[T]) -> Vec<u8> {
    if lhs.len() != rhs.len() {
        return Vec::new();
    }

    let mask: Vec<u8> = lhs
        .iter()
        .zip(rhs)
        .map(|(&a, &b)| almost_equal(a, b) as u8)
        .collect();

    debug_assert_eq!(mask.len(), lhs.len(), "mask must cover every element");
    mask
}

pub fn all_almost_equal<T: Ieee754>(lhs: &[T], rhs: &[T]) -> bool {
    lhs.len() == rhs.len() && lhs.iter().zip(rhs).all(|(&a, &b)| almost_equal(a, b))
}
