/// Similarity grouping: greedy, seed-based clustering of entry records.
///
/// Records are visited in collection order. The first unassigned record
/// seeds a new cluster; every later unassigned record that matches the
/// **seed** under the active policy joins it. Members are never compared
/// with each other, so two members of one cluster may be further apart
/// than the threshold. The result depends on collection order but is fully
/// reproducible for a given order.
///
/// Clusters with a single member are dropped.
use super::distance::within_threshold;
use crate::config::GroupingPolicy;
use crate::model::EntryRecord;

/// Records judged similar to one seed, in collection order (seed first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    pub(crate) members: Vec<EntryRecord>,
}

impl Cluster {
    /// The record that opened the cluster.
    pub fn seed(&self) -> Option<&EntryRecord> {
        self.members.first()
    }

    pub fn members(&self) -> &[EntryRecord] {
        &self.members
    }

    pub fn into_members(self) -> Vec<EntryRecord> {
        self.members
    }
}

impl GroupingPolicy {
    /// Does `candidate` belong in the cluster seeded by `seed`?
    pub fn matches(self, seed: &EntryRecord, candidate: &EntryRecord, threshold: u32) -> bool {
        match self {
            Self::ExactNameSameExtension => {
                same_kind_and_extension(seed, candidate)
                    && seed.comparison_key == candidate.comparison_key
            }
            Self::SimilarNameSameExtension => {
                extensions_agree(seed, candidate)
                    && within_threshold(&seed.comparison_key, &candidate.comparison_key, threshold)
            }
            Self::SimilarNameOnly => {
                within_threshold(&seed.comparison_key, &candidate.comparison_key, threshold)
            }
        }
    }
}

/// Both folders, or both files with the same extension.
fn same_kind_and_extension(a: &EntryRecord, b: &EntryRecord) -> bool {
    match (a.is_file, b.is_file) {
        (true, true) => a.extension == b.extension,
        (false, false) => true,
        _ => false,
    }
}

/// Extensions only gate file pairs; a folder may sit next to any file.
fn extensions_agree(a: &EntryRecord, b: &EntryRecord) -> bool {
    !(a.is_file && b.is_file) || a.extension == b.extension
}

/// Partition `records` into clusters of two or more.
pub fn group_entries(
    records: Vec<EntryRecord>,
    policy: GroupingPolicy,
    threshold: u32,
) -> Vec<Cluster> {
    let mut assigned = vec![false; records.len()];
    let mut index_clusters: Vec<Vec<usize>> = Vec::new();

    for seed_idx in 0..records.len() {
        if assigned[seed_idx] {
            continue;
        }
        assigned[seed_idx] = true;
        let seed = &records[seed_idx];

        let mut members = vec![seed_idx];
        for cand_idx in seed_idx + 1..records.len() {
            if assigned[cand_idx] {
                continue;
            }
            if policy.matches(seed, &records[cand_idx], threshold) {
                assigned[cand_idx] = true;
                members.push(cand_idx);
            }
        }

        if members.len() >= 2 {
            index_clusters.push(members);
        }
    }

    // Move the clustered records out; each index appears in at most one cluster.
    let mut slots: Vec<Option<EntryRecord>> = records.into_iter().map(Some).collect();
    index_clusters
        .into_iter()
        .map(|indices| Cluster {
            members: indices
                .into_iter()
                .filter_map(|i| slots[i].take())
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn file(name: &str, size: u64) -> EntryRecord {
        EntryRecord::file(name, name.to_string(), PathBuf::from("/r").join(name), size, None)
    }

    fn folder(name: &str) -> EntryRecord {
        EntryRecord::folder(name, name.to_string(), PathBuf::from("/r").join(name), 0, None)
    }

    fn cluster_names(clusters: &[Cluster]) -> Vec<Vec<&str>> {
        clusters
            .iter()
            .map(|c| c.members.iter().map(|m| m.display_name.as_str()).collect())
            .collect()
    }

    #[test]
    fn exact_policy_requires_same_extension() {
        let records = vec![file("report.txt", 1), file("report.pdf", 1)];
        let clusters = group_entries(records, GroupingPolicy::ExactNameSameExtension, 0);
        assert!(clusters.is_empty());
    }

    #[test]
    fn exact_policy_is_case_insensitive() {
        let records = vec![file("Report.TXT", 1), file("report.txt", 1), file("other.txt", 1)];
        let clusters = group_entries(records, GroupingPolicy::ExactNameSameExtension, 0);
        assert_eq!(cluster_names(&clusters), vec![vec!["Report.TXT", "report.txt"]]);
    }

    #[test]
    fn exact_policy_never_mixes_files_and_folders() {
        let records = vec![folder("photos"), file("photos", 1), folder("Photos")];
        let clusters = group_entries(records, GroupingPolicy::ExactNameSameExtension, 0);
        assert_eq!(cluster_names(&clusters), vec![vec!["photos", "Photos"]]);
        assert!(!clusters[0].members[1].is_file);
    }

    /// Distance `t` matches, `t + 1` does not, and 0 is reserved for the exact policy.
    #[test]
    fn similar_only_threshold_boundary() {
        let policy = GroupingPolicy::SimilarNameOnly;
        let seed = file("abcd.txt", 1);

        assert!(policy.matches(&seed, &file("abxy.txt", 1), 2));
        assert!(!policy.matches(&seed, &file("axyz.txt", 1), 2));
        assert!(!policy.matches(&seed, &file("abcd.txt", 1), 2));
        assert!(!policy.matches(&seed, &file("ABCD.md", 1), 2));
    }

    #[test]
    fn similar_only_ignores_extension_and_kind() {
        let policy = GroupingPolicy::SimilarNameOnly;
        assert!(policy.matches(&file("draft1.doc", 1), &file("draft2.pdf", 1), 1));
        assert!(policy.matches(&folder("drafts"), &file("draft.txt", 1), 1));
    }

    #[test]
    fn similar_with_extension_gates_files_only() {
        let policy = GroupingPolicy::SimilarNameSameExtension;
        assert!(!policy.matches(&file("draft1.doc", 1), &file("draft2.pdf", 1), 1));
        assert!(policy.matches(&file("draft1.doc", 1), &file("draft2.doc", 1), 1));
        assert!(policy.matches(&folder("backup1"), &folder("backup2"), 1));
        assert!(policy.matches(&folder("drafts"), &file("draft", 1), 1));
        assert!(policy.matches(&file("draft.zip", 1), &folder("drafts"), 1));
    }

    #[test]
    fn similar_with_extension_pairs_folder_with_archive() {
        let records = vec![folder("backup1"), file("backup2.zip", 1)];
        let clusters = group_entries(records, GroupingPolicy::SimilarNameSameExtension, 1);
        assert_eq!(cluster_names(&clusters), vec![vec!["backup1", "backup2.zip"]]);
    }

    #[test]
    fn seed_of_empty_cluster_is_none() {
        let empty = Cluster { members: Vec::new() };
        assert!(empty.seed().is_none());
        assert!(empty.members().is_empty());
    }

    /// Members join on similarity to the seed alone, so `ab` and `cd`
    /// (distance 2) share a cluster seeded by `ad` at threshold 1.
    #[test]
    fn membership_is_judged_against_seed_only() {
        let records = vec![folder("ad"), folder("ab"), folder("cd")];
        let clusters = group_entries(records, GroupingPolicy::SimilarNameOnly, 1);
        assert_eq!(cluster_names(&clusters), vec![vec!["ad", "ab", "cd"]]);
    }

    /// An absorbed record cannot seed its own cluster later.
    #[test]
    fn assigned_records_are_not_reused() {
        let records = vec![folder("aa"), folder("ab"), folder("bb"), folder("bc")];
        let clusters = group_entries(records, GroupingPolicy::SimilarNameOnly, 1);
        assert_eq!(cluster_names(&clusters), vec![vec!["aa", "ab"], vec!["bb", "bc"]]);
    }

    #[test]
    fn singletons_are_dropped() {
        let records = vec![file("alpha.txt", 1), file("omega.txt", 1)];
        let clusters = group_entries(records, GroupingPolicy::SimilarNameOnly, 2);
        assert!(clusters.is_empty());
        assert!(group_entries(Vec::new(), GroupingPolicy::SimilarNameOnly, 2).is_empty());
    }
}
