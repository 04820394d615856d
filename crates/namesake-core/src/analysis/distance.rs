//! Levenshtein edit distance over Unicode scalar values.
//!
//! Comparison keys are already lower-cased, so the distance is
//! case-insensitive by construction.

/// Number of single-character insertions, deletions or substitutions
/// needed to turn `a` into `b`.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two rolling rows instead of the full (m+1) x (n+1) table.
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Is `edit_distance(a, b)` in `(0, threshold]`?
///
/// Identical keys never count as similar. A length difference larger than
/// the threshold is a lower bound on the distance, so those pairs are
/// rejected without running the full computation.
pub fn within_threshold(a: &str, b: &str, threshold: u32) -> bool {
    if a == b {
        return false;
    }
    let threshold = threshold as usize;
    let len_a = a.chars().count();
    let len_b = b.chars().count();
    if len_a.abs_diff(len_b) > threshold {
        return false;
    }
    edit_distance(a, b) <= threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_examples() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("flaw", "lawn"), 2);
        assert_eq!(edit_distance("report_v1", "report_v2"), 1);
        assert_eq!(edit_distance("summary", "report_v1"), 9);
    }

    #[test]
    fn empty_strings() {
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abc", ""), 3);
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(edit_distance("café", "cafe"), 1);
        assert_eq!(edit_distance("日本語", "日本"), 1);
    }

    #[test]
    fn threshold_window_excludes_zero() {
        assert!(!within_threshold("same", "same", 5));
        assert!(within_threshold("ab", "abc", 1));
        assert!(!within_threshold("ab", "abcd", 1));
        assert!(!within_threshold("ab", "ac", 0));
    }
}
