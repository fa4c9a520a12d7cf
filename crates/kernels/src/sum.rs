//! Compensated (Kahan) summation, batch and incremental forms.

/// Incremental Kahan accumulator.
///
/// Carries the running sum together with the accumulated rounding error so
/// callers can interleave compensated additions with their own iteration
/// order — the estimators use this to fold per-sample terms into several
/// accumulators within a single pass.
///
/// Stepping an accumulator over a sequence of values is bit-identical to
/// [`kahan_sum`] over the same values in the same order.
///
/// # Example
/// ```
/// use thermoflow_kernels::KahanAccumulator;
///
/// let mut acc = KahanAccumulator::new();
/// for x in [1.0e8, 1.0e-8, 1.0e-8] {
///     acc.add(x);
/// }
/// let total = acc.total();
/// assert!(total > 1.0e8);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct KahanAccumulator {
    sum: f64,
    err: f64,
}

impl KahanAccumulator {
    /// Create a zeroed accumulator.
    #[must_use]
    pub const fn new() -> Self {
        Self { sum: 0.0, err: 0.0 }
    }

    /// Fold one value into the running sum, compensating for the rounding
    /// error of the addition.
    #[inline]
    pub fn add(&mut self, value: f64) {
        let loc = value - self.err;
        let tmp = self.sum + loc;
        self.err = (tmp - self.sum) - loc;
        self.sum = tmp;
    }

    /// Read the compensated sum accumulated so far.
    #[inline]
    #[must_use]
    pub const fn total(&self) -> f64 {
        self.sum
    }
}

/// Sum a slice with Kahan compensation.
///
/// Error growth is bounded independent of length, unlike naive accumulation
/// whose error grows with the number of terms. The result is order-sensitive
/// at the bit level; the sort-based log-sum-exp variants and the transition
/// matrix renormalizer exploit this by sorting ascending first so the
/// smallest-magnitude terms are folded in before they can be absorbed.
///
/// NaN and infinities propagate per IEEE semantics; nothing is filtered.
#[must_use]
pub fn kahan_sum(values: &[f64]) -> f64 {
    let mut acc = KahanAccumulator::new();
    for &value in values {
        acc.add(value);
    }
    acc.total()
}
