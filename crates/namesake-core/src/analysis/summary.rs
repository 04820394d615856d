/// Group summarizer: turns raw clusters into presentation-ready groups.
use super::grouping::Cluster;
use crate::model::{Group, GroupKind};

/// Label, total and order every cluster, then rank groups by total size.
///
/// Both sorts are stable: equal-size members keep collection order and
/// equal-size groups keep discovery order. Empty clusters yield no group.
pub fn summarize(clusters: Vec<Cluster>) -> Vec<Group> {
    let mut groups: Vec<Group> = clusters.into_iter().filter_map(summarize_cluster).collect();
    groups.sort_by(|a, b| b.total_size.cmp(&a.total_size));
    groups
}

fn summarize_cluster(cluster: Cluster) -> Option<Group> {
    let mut members = cluster.into_members();
    members.sort_by(|a, b| b.size.cmp(&a.size));

    // Kind and extension describe the largest member.
    let largest = members.first()?;
    let (kind, suffix) = if largest.is_file {
        (GroupKind::Files, format!("(*{})", largest.extension))
    } else {
        (GroupKind::Folders, "(folder)".to_string())
    };

    let base_name = members
        .iter()
        .min_by_key(|m| m.display_name.chars().count())
        .map(|m| m.display_name.as_str())
        .unwrap_or_default();
    let label = format!("{base_name} {suffix}");
    let total_size = members.iter().map(|m| m.size).sum();

    Some(Group {
        members,
        label,
        total_size,
        kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntryRecord;
    use std::path::PathBuf;

    fn file(name: &str, size: u64) -> EntryRecord {
        EntryRecord::file(name, name.to_string(), PathBuf::from("/r").join(name), size, None)
    }

    fn folder(name: &str, size: u64) -> EntryRecord {
        EntryRecord::folder(name, name.to_string(), PathBuf::from("/r").join(name), size, None)
    }

    fn cluster(members: Vec<EntryRecord>) -> Cluster {
        Cluster { members }
    }

    #[test]
    fn members_sorted_largest_first_with_stable_ties() {
        let groups = summarize(vec![cluster(vec![
            file("a1.txt", 10),
            file("a2.txt", 30),
            file("a3.txt", 10),
        ])]);
        let order: Vec<&str> = groups[0]
            .members
            .iter()
            .map(|m| m.display_name.as_str())
            .collect();
        assert_eq!(order, vec!["a2.txt", "a1.txt", "a3.txt"]);
        assert_eq!(groups[0].total_size, 50);
        assert_eq!(groups[0].reclaimable_size(), 20);
    }

    #[test]
    fn file_label_uses_shortest_name_and_extension() {
        let groups = summarize(vec![cluster(vec![
            file("invoice_final.pdf", 1),
            file("invoice.pdf", 1),
            file("invoice2.pdf", 1),
        ])]);
        assert_eq!(groups[0].label, "invoice.pdf (*.pdf)");
        assert_eq!(groups[0].kind, GroupKind::Files);
    }

    /// On a length tie the first name after the size sort wins.
    #[test]
    fn label_tie_goes_to_first_after_sort() {
        let groups = summarize(vec![cluster(vec![file("ab.txt", 1), file("ac.txt", 5)])]);
        assert_eq!(groups[0].label, "ac.txt (*.txt)");
    }

    #[test]
    fn folder_label_has_folder_suffix() {
        let groups = summarize(vec![cluster(vec![folder("Backup", 3), folder("Backups", 4)])]);
        assert_eq!(groups[0].label, "Backup (folder)");
        assert_eq!(groups[0].kind, GroupKind::Folders);
    }

    #[test]
    fn extensionless_files_get_bare_wildcard() {
        let groups = summarize(vec![cluster(vec![file("Makefile", 1), file("makefile", 1)])]);
        assert_eq!(groups[0].label, "Makefile (*)");
    }

    #[test]
    fn groups_ranked_by_total_size() {
        let groups = summarize(vec![
            cluster(vec![file("s1.txt", 1), file("s2.txt", 1)]),
            cluster(vec![file("b1.txt", 100), file("b2.txt", 100)]),
            cluster(vec![file("m1.txt", 2), file("m2.txt", 0)]),
        ]);
        let totals: Vec<u64> = groups.iter().map(|g| g.total_size).collect();
        assert_eq!(totals, vec![200, 2, 2]);
        assert!(groups[1].label.starts_with("s1"));
        assert!(groups[2].label.starts_with("m"));
    }

    /// A small seed must not lend its extension to a larger member's name.
    #[test]
    fn suffix_follows_the_largest_member() {
        let groups = summarize(vec![cluster(vec![file("a1.txt", 1), file("a2.pdf", 10)])]);
        assert_eq!(groups[0].label, "a2.pdf (*.pdf)");
        assert_eq!(groups[0].kind, GroupKind::Files);
    }

    #[test]
    fn mixed_group_kind_follows_the_largest_member() {
        let groups = summarize(vec![cluster(vec![file("draft.txt", 1), folder("drafts", 50)])]);
        assert_eq!(groups[0].label, "drafts (folder)");
        assert_eq!(groups[0].kind, GroupKind::Folders);
    }

    #[test]
    fn no_clusters_no_groups() {
        assert!(summarize(Vec::new()).is_empty());
        assert!(summarize(vec![cluster(Vec::new())]).is_empty());
    }
}
