/// A summarized set of similar entries, ready for presentation.
use super::entry::EntryRecord;
use serde::{Deserialize, Serialize};

/// Whether a group was opened by a file or a folder.
///
/// Under `SimilarNameOnly` a group may mix both; the seed decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupKind {
    Files,
    Folders,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Always at least two members, largest first.
    pub members: Vec<EntryRecord>,
    pub label: String,
    pub total_size: u64,
    pub kind: GroupKind,
}

impl Group {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Bytes freed by keeping only the largest member.
    pub fn reclaimable_size(&self) -> u64 {
        let largest = self.members.first().map_or(0, |m| m.size);
        self.total_size.saturating_sub(largest)
    }
}
