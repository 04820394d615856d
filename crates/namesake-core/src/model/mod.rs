/// Data model shared by the collector, grouper and summarizer.
pub mod entry;
pub mod group;

pub use entry::EntryRecord;
pub use group::{Group, GroupKind};
