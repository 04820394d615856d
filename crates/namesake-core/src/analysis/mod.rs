/// Analysis modules: grouping and summarizing collected records.

pub mod distance;
pub mod grouping;
pub mod summary;

pub use distance::{edit_distance, within_threshold};
pub use grouping::{group_entries, Cluster};
pub use summary::summarize;
