use crate::document::FunctionalRequirement;
use crate::error::{PrdError, Result};

// ---------------------------------------------------------------------------
// Ordered sequence operations (operate on a mutable Vec<T>)
// ---------------------------------------------------------------------------

/// Append `items` in order. Returns how many were added.
pub fn append<T>(seq: &mut Vec<T>, items: impl IntoIterator<Item = T>) -> usize {
    let before = seq.len();
    seq.extend(items);
    seq.len() - before
}

/// Remove and return the entry at `index` (0-based).
pub fn remove_at<T>(seq: &mut Vec<T>, index: usize) -> Result<T> {
    if index >= seq.len() {
        return Err(PrdError::IndexOutOfRange {
            index,
            len: seq.len(),
        });
    }
    Ok(seq.remove(index))
}

/// Borrow the entry at `index` for in-place editing.
pub fn get_mut<T>(seq: &mut [T], index: usize) -> Result<&mut T> {
    let len = seq.len();
    seq.get_mut(index)
        .ok_or(PrdError::IndexOutOfRange { index, len })
}

/// Replace the whole sequence. An empty replacement leaves `seq` untouched
/// and returns `false`.
pub fn replace_all<T>(seq: &mut Vec<T>, items: Vec<T>) -> bool {
    if items.is_empty() {
        return false;
    }
    *seq = items;
    true
}

// ---------------------------------------------------------------------------
// Requirement numbering
// ---------------------------------------------------------------------------

pub fn functional_id(n: usize) -> String {
    format!("FR-{n:03}")
}

/// ID for the next requirement appended after `existing`.
pub fn next_functional_id(existing: &[FunctionalRequirement]) -> String {
    functional_id(existing.len() + 1)
}

/// Assign sequential `FR-NNN` ids starting at `start` (1-based).
pub fn renumber_from(reqs: &mut [FunctionalRequirement], start: usize) {
    for (i, req) in reqs.iter_mut().enumerate() {
        req.id = functional_id(start + i);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goals() -> Vec<String> {
        vec!["a".to_string(), "b".to_string(), "c".to_string()]
    }

    #[test]
    fn append_preserves_order() {
        let mut seq = goals();
        let added = append(&mut seq, ["d".to_string(), "e".to_string()]);
        assert_eq!(added, 2);
        assert_eq!(seq, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn remove_at_shifts_remaining() {
        let mut seq = goals();
        assert_eq!(remove_at(&mut seq, 1).unwrap(), "b");
        assert_eq!(seq, vec!["a", "c"]);
    }

    #[test]
    fn remove_at_out_of_range() {
        let mut seq = goals();
        let err = remove_at(&mut seq, 3).unwrap_err();
        assert!(matches!(err, PrdError::IndexOutOfRange { index: 3, len: 3 }));
        assert_eq!(seq.len(), 3);

        let mut empty: Vec<String> = Vec::new();
        assert!(remove_at(&mut empty, 0).is_err());
    }

    #[test]
    fn get_mut_edits_in_place() {
        let mut seq = goals();
        *get_mut(&mut seq, 2).unwrap() = "z".to_string();
        assert_eq!(seq[2], "z");
        assert!(get_mut(&mut seq, 9).is_err());
    }

    #[test]
    fn replace_all_ignores_empty() {
        let mut seq = goals();
        assert!(!replace_all(&mut seq, Vec::new()));
        assert_eq!(seq.len(), 3);
        assert!(replace_all(&mut seq, vec!["only".to_string()]));
        assert_eq!(seq, vec!["only"]);
    }

    #[test]
    fn numbering_continues_after_existing() {
        let existing = vec![
            FunctionalRequirement::new("FR-001", "a"),
            FunctionalRequirement::new("FR-002", "b"),
        ];
        assert_eq!(next_functional_id(&existing), "FR-003");

        let mut added = vec![
            FunctionalRequirement::new("FR-001", "c"),
            FunctionalRequirement::new("FR-002", "d"),
        ];
        renumber_from(&mut added, existing.len() + 1);
        assert_eq!(added[0].id, "FR-003");
        assert_eq!(added[1].id, "FR-004");
    }
}
