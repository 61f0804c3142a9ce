use crate::models::{ComparisonEntry, Delta, SongId};
use std::collections::HashSet;

/// Compares two placings entry by entry, in the order of `current`.
pub fn diff(previous: &[SongId], current: &[SongId]) -> Vec<ComparisonEntry> {
    current
        .iter()
        .enumerate()
        .map(|(i, &song)| {
            let delta = match previous.iter().position(|&earlier| earlier == song) {
                // Both positions are below PLACING_SIZE, the casts cannot truncate
                Some(j) => Delta::Moved(j as i64 - i as i64),
                None => Delta::New,
            };
            ComparisonEntry { song, delta }
        })
        .collect()
}

// Songs that held a place before and hold none now
pub fn dropped_out(previous: &[SongId], current: &[SongId]) -> HashSet<SongId> {
    previous
        .iter()
        .filter(|song| !current.contains(song))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moved(song: SongId, change: i64) -> ComparisonEntry {
        ComparisonEntry { song, delta: Delta::Moved(change) }
    }

    fn new_entry(song: SongId) -> ComparisonEntry {
        ComparisonEntry { song, delta: Delta::New }
    }

    #[test]
    fn test_diff_mixed_moves() {
        let previous = vec![6, 2, 8, 1, 4, 3, 5];
        let current = vec![2, 6, 8, 4, 1, 9];
        assert_eq!(
            diff(&previous, &current),
            vec![moved(2, 1), moved(6, -1), moved(8, 0), moved(4, 1), moved(1, -1), new_entry(9)]
        );
    }

    #[test]
    fn test_diff_against_itself_is_all_zero() {
        let placing = vec![3, 1, 4, 5, 9, 2, 6];
        assert!(diff(&placing, &placing).iter().all(|entry| entry.delta == Delta::Moved(0)));
    }

    #[test]
    fn test_diff_from_empty_marks_everything_new() {
        assert_eq!(diff(&[], &[7, 2]), vec![new_entry(7), new_entry(2)]);
        assert!(diff(&[1, 2], &[]).is_empty());
    }

    #[test]
    fn test_dropped_out() {
        let previous = vec![6, 2, 8, 1];
        let current = vec![2, 6, 5];
        let dropped = dropped_out(&previous, &current);
        assert_eq!(dropped, HashSet::from([8, 1]));
    }
}
