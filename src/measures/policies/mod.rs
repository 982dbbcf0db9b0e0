pub mod best_value;
pub mod branch_metric_mapping;
pub mod forbidden_metrics;

pub use best_value::{is_eligible_for_best_value, BestValueSynthesizer};
pub use branch_metric_mapping::{absolute_counterpart, counterpart, new_code_counterpart};
pub use forbidden_metrics::{forbidden_tree_metric_keys, is_forbidden_in_tree};
