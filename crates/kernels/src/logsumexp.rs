//! Stabilized log-sum-exp kernels for log-domain probability arithmetic.
//!
//! All variants compute `log(sum(exp(x_i)))` through the shifted form
//! `max + log(sum(exp(x_i - max)))`, which keeps the exponentials in [0, 1]
//! and cannot overflow. They differ in how the shifted terms are
//! accumulated: naive, Kahan-compensated, and/or pre-sorted ascending so
//! the smallest terms fold in first.
//!
//! Edge policy shared by every variant: an empty input yields
//! [`f64::NEG_INFINITY`], and so does a maximum of negative infinity (the
//! all-zero-probability case, where evaluating `exp(x - max)` would be
//! meaningless). Negative infinity is the natural sentinel of log-space;
//! no variant panics on degenerate input.

use crate::sort::mixed_sort;
use crate::sum::kahan_sum;

/// Stabilized log-sum-exp with a caller-precomputed maximum.
///
/// Accumulates `exp(x_i - max)` naively; the cheapest variant, appropriate
/// when the terms are few or of comparable magnitude. Non-mutating.
#[must_use]
pub fn logsumexp(values: &[f64], max: f64) -> f64 {
    if values.is_empty() || max == f64::NEG_INFINITY {
        return f64::NEG_INFINITY;
    }
    let mut sum = 0.0;
    for &x in values {
        sum += (x - max).exp();
    }
    max + sum.ln()
}

/// Stabilized log-sum-exp with Kahan-compensated accumulation.
///
/// Overwrites `values` with the shifted exponentials `exp(x_i - max)`
/// before summing them — callers needing the originals must copy first.
/// Worth the extra cost on skewed inputs where naive accumulation loses
/// the small terms.
#[must_use]
pub fn logsumexp_kahan_inplace(values: &mut [f64], max: f64) -> f64 {
    if values.is_empty() || max == f64::NEG_INFINITY {
        return f64::NEG_INFINITY;
    }
    for x in values.iter_mut() {
        *x = (*x - max).exp();
    }
    max + kahan_sum(values).ln()
}

/// Stabilized log-sum-exp that sorts first.
///
/// Sorts `values` ascending in place (the maximum then sits in the last
/// slot) and delegates to [`logsumexp`], so the smallest terms are
/// accumulated before the large ones can absorb them.
#[must_use]
pub fn logsumexp_sort_inplace(values: &mut [f64]) -> f64 {
    if values.is_empty() {
        return f64::NEG_INFINITY;
    }
    mixed_sort(values);
    logsumexp(values, values[values.len() - 1])
}

/// Stabilized log-sum-exp that sorts, then Kahan-sums.
///
/// The most robust combination: ascending accumulation order and
/// compensated summation. Leaves `values` sorted and exponentiated.
#[must_use]
pub fn logsumexp_sort_kahan_inplace(values: &mut [f64]) -> f64 {
    if values.is_empty() {
        return f64::NEG_INFINITY;
    }
    mixed_sort(values);
    let max = values[values.len() - 1];
    logsumexp_kahan_inplace(values, max)
}

/// Closed-form log-sum-exp of exactly two terms.
///
/// Buffer-free form for hot loops that merge two log-probabilities at a
/// time: the larger term is the base, the smaller contributes
/// `log(1 + exp(smaller - larger))`. Two negative infinities merge to
/// negative infinity.
#[must_use]
pub fn logsumexp_pair(a: f64, b: f64) -> f64 {
    if a == f64::NEG_INFINITY && b == f64::NEG_INFINITY {
        return f64::NEG_INFINITY;
    }
    if b > a {
        b + (1.0 + (a - b).exp()).ln()
    } else {
        a + (1.0 + (b - a).exp()).ln()
    }
}
