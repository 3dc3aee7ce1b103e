use crate::core::models::miller::{MillerIndex, RealExtent};

/// Centered frequency index of storage offset `ih` along an axis of `n_real` points.
///
/// # Panics
///
/// Panics if the centered index does not fit in `i32`, which needs an axis of
/// more than `2^32` points.
#[inline]
pub fn ih_as_h(ih: usize, n_real: usize) -> i32 {
    let h = if ih <= n_real / 2 {
        ih as i128
    } else {
        ih as i128 - n_real as i128
    };
    match i32::try_from(h) {
        Ok(h) => h,
        Err(_) => panic!("centered index {} of offset {} does not fit in i32", h, ih),
    }
}

/// Storage offset of `h` on a periodic axis of `n_real` points. Always in `[0, n_real)`.
///
/// # Panics
///
/// Panics if `n_real` is zero.
#[inline]
pub fn h_as_ih_mod(h: i32, n_real: usize) -> usize {
    i64::from(h).rem_euclid(n_real as i64) as usize
}

pub fn h_as_ih_mod_array(h: MillerIndex, n_real: RealExtent) -> [usize; 3] {
    let hkl = h.components();
    let n = n_real.dims();
    std::array::from_fn(|axis| h_as_ih_mod(hkl[axis], n[axis]))
}

pub fn ih_as_h_array(ih: [usize; 3], n_real: RealExtent) -> MillerIndex {
    let n = n_real.dims();
    MillerIndex::from(std::array::from_fn(|axis| ih_as_h(ih[axis], n[axis])))
}

/// Index mapping bound to one full periodic grid. Every Miller index has a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodicIndexMap {
    n_real: RealExtent,
}

impl PeriodicIndexMap {
    pub fn new(n_real: RealExtent) -> Self {
        Self { n_real }
    }

    pub fn extent(&self) -> RealExtent {
        self.n_real
    }

    pub fn offset_of(&self, h: MillerIndex) -> [usize; 3] {
        h_as_ih_mod_array(h, self.n_real)
    }

    pub fn miller_index_of(&self, ih: [usize; 3]) -> MillerIndex {
        ih_as_h_array(ih, self.n_real)
    }
}
