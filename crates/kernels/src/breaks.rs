//! Run-boundary detection over state-label sequences.

/// Record the start index of every contiguous run of equal labels.
///
/// Scans `labels` once and writes the ascending run-start indices into
/// `out`, index 0 always first; returns how many entries were written.
/// Typical input is a per-frame thermodynamic-state index, and the
/// resulting segments drive segment-wise accumulation downstream.
///
/// The caller owns sizing: `out` must hold `labels.len()` entries in the
/// worst case (every frame a new run). `labels` must be non-empty — the
/// first element is read unconditionally. Both contracts are debug-asserted.
#[must_use = "the count delimits the filled prefix of the output buffer"]
pub fn break_points(labels: &[usize], out: &mut [usize]) -> usize {
    debug_assert!(!labels.is_empty(), "label sequence must be non-empty");
    debug_assert!(out.len() >= labels.len(), "output buffer smaller than label sequence");

    out[0] = 0;
    let mut count = 1;
    let mut current = labels[0];
    for (i, &label) in labels.iter().enumerate().skip(1) {
        if label != current {
            current = label;
            out[count] = i;
            count += 1;
        }
    }
    count
}
