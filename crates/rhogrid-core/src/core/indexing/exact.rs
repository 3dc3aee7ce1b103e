use crate::core::models::miller::{ComplexExtent, MillerIndex};

/// How one axis of a truncated-complex grid stores frequency indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisPolicy {
    /// Centered storage of `[-m, m]` with `m = (n - 1) / 2`; negative indices wrap to the top.
    SignedWrap,
    /// Only `[0, n)` is stored, the Hermitian mate holds the rest.
    PositiveOnly,
}

/// Storage policy for each of the three axes of a truncated-complex grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxisPolicies([AxisPolicy; 3]);

impl AxisPolicies {
    /// Hermitian-reduced storage keeps only the positive half of the last axis.
    /// Anomalous data breaks Friedel symmetry, so both signs are stored there too.
    pub fn for_anomalous_flag(anomalous_flag: bool) -> Self {
        let last = if anomalous_flag {
            AxisPolicy::SignedWrap
        } else {
            AxisPolicy::PositiveOnly
        };
        Self([AxisPolicy::SignedWrap, AxisPolicy::SignedWrap, last])
    }

    #[inline]
    pub fn axis(&self, axis: usize) -> AxisPolicy {
        self.0[axis]
    }

    #[inline]
    pub fn as_array(&self) -> [AxisPolicy; 3] {
        self.0
    }
}

/// Storage offset of frequency index `h` along one axis of a truncated-complex grid.
///
/// Returns `None` when the index has no storage cell under `policy`.
#[inline]
pub fn h_as_ih_exact(h: i32, n_complex: usize, policy: AxisPolicy) -> Option<usize> {
    let h = i64::from(h);
    let n = n_complex as i64;
    match policy {
        AxisPolicy::PositiveOnly => (0..n).contains(&h).then_some(h as usize),
        AxisPolicy::SignedWrap => {
            let m = (n - 1) / 2;
            if h < -m || h > m {
                None
            } else if h < 0 {
                Some((h + n) as usize)
            } else {
                Some(h as usize)
            }
        }
    }
}

/// Per-axis storage offsets of `h`; each axis that has no cell is `None`.
pub fn h_as_ih_exact_axes(
    anomalous_flag: bool,
    h: MillerIndex,
    n_complex: ComplexExtent,
) -> [Option<usize>; 3] {
    let policies = AxisPolicies::for_anomalous_flag(anomalous_flag);
    let hkl = h.components();
    let n = n_complex.dims();
    std::array::from_fn(|axis| h_as_ih_exact(hkl[axis], n[axis], policies.axis(axis)))
}

/// Storage cell of `h` in a truncated-complex grid, or `None` if any axis is out of range.
pub fn h_as_ih_exact_array(
    anomalous_flag: bool,
    h: MillerIndex,
    n_complex: ComplexExtent,
) -> Option<[usize; 3]> {
    let [i, j, k] = h_as_ih_exact_axes(anomalous_flag, h, n_complex);
    Some([i?, j?, k?])
}

/// Index mapping bound to one truncated-complex grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExactIndexMap {
    n_complex: ComplexExtent,
    anomalous_flag: bool,
    policies: AxisPolicies,
}

impl ExactIndexMap {
    pub fn new(n_complex: ComplexExtent, anomalous_flag: bool) -> Self {
        Self {
            n_complex,
            anomalous_flag,
            policies: AxisPolicies::for_anomalous_flag(anomalous_flag),
        }
    }

    pub fn extent(&self) -> ComplexExtent {
        self.n_complex
    }

    pub fn anomalous_flag(&self) -> bool {
        self.anomalous_flag
    }

    pub fn policies(&self) -> AxisPolicies {
        self.policies
    }

    pub fn offset_of(&self, h: MillerIndex) -> Option<[usize; 3]> {
        h_as_ih_exact_array(self.anomalous_flag, h, self.n_complex)
    }

    pub fn contains(&self, h: MillerIndex) -> bool {
        self.offset_of(h).is_some()
    }
}
