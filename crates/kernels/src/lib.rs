#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/thermoflow/thermoflow-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod sort;
pub use sort::mixed_sort;

mod sum;
pub use sum::{KahanAccumulator, kahan_sum};

mod logsumexp;
pub use logsumexp::{
    logsumexp, logsumexp_kahan_inplace, logsumexp_pair, logsumexp_sort_inplace,
    logsumexp_sort_kahan_inplace,
};

mod breaks;
pub use breaks::break_points;

mod renorm;
pub use renorm::renormalize_transition_matrix;
