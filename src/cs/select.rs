pub mod deterministic;
pub mod engine;
pub mod median_of_medians;
pub mod partition;
pub mod randomized;

pub use deterministic::{
    deterministic_select, deterministic_select_by, deterministic_select_by_key, find_median,
    find_median_by_key,
};
pub use engine::{PivotRule, Selector};
pub use median_of_medians::{median_of_medians, MedianOfMedians, GROUP_SIZE};
pub use partition::partition;
pub use randomized::{
    randomized_find_median, randomized_find_median_by_key, randomized_select,
    randomized_select_by, randomized_select_by_key, RandomPivot,
};
