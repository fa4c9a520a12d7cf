//! In-place sorting used as a building block for order-dependent summation.

/// Ranges at or below this span are insertion-sorted instead of partitioned.
const INSERTION_CUTOFF: usize = 26;

/// Sort a slice of reals in place, ascending.
///
/// Hybrid scheme: slices longer than 26 elements are partitioned with a
/// single-pivot (last element) quicksort, recursing on both partitions;
/// shorter slices fall through to insertion sort, which has the better
/// constant factor on the small batches typical of per-state re-estimation
/// loops. Zero- and one-element slices are a no-op.
///
/// Downstream summation kernels rely on two properties of the result: terms
/// are accumulated smallest first (reducing cancellation), and the maximum
/// lands in the last position where the log-sum-exp variants read it.
///
/// The pivot is deliberately not randomized; reverse-sorted input degrades
/// to O(n²). Randomizing would change tie-breaking among duplicates and with
/// it the bit-level output of the order-sensitive sums built on top.
///
/// NaN values compare as neither smaller nor larger than anything and end up
/// in unspecified positions; callers working in log-space never produce them.
pub fn mixed_sort(values: &mut [f64]) {
    if values.len() > INSERTION_CUTOFF {
        let mid = partition_last_pivot(values);
        let (left, right) = values.split_at_mut(mid);
        mixed_sort(left);
        mixed_sort(&mut right[1..]);
    } else {
        insertion_sort(values);
    }
}

/// Two-pointer partition around the last element; returns the pivot's final
/// index. Caller guarantees `values.len() >= 2`.
///
/// The negated comparison keeps the scan loop terminating when it hits a
/// NaN, where `>=` would let `l` run off the end of the slice.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
fn partition_last_pivot(values: &mut [f64]) -> usize {
    let last = values.len() - 1;
    let mut l: isize = -1;
    let mut r = last as isize;
    loop {
        loop {
            l += 1;
            if !(values[l as usize] < values[last]) {
                break;
            }
        }
        loop {
            r -= 1;
            if !(values[r as usize] > values[last] && r > l) {
                break;
            }
        }
        if l >= r {
            break;
        }
        values.swap(l as usize, r as usize);
    }
    let mid = l as usize;
    values.swap(mid, last);
    mid
}

fn insertion_sort(values: &mut [f64]) {
    for i in 1..values.len() {
        let key = values[i];
        let mut j = i;
        while j > 0 && key < values[j - 1] {
            values[j] = values[j - 1];
            j -= 1;
        }
        values[j] = key;
    }
}
