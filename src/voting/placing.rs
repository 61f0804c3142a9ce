use crate::models::{Placing, SongId, Tally};
use crate::voting::PLACING_SIZE;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

// A tally entry ordered so that "greater" means "placed higher":
// more weight first, lower song id on equal weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    song: SongId,
    weight: u64,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| other.song.cmp(&self.song))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Picks the best `PLACING_SIZE` songs of a tally, ignoring songs with zero weight.
///
/// Only a bounded min-heap of candidates is kept, so the tally is never sorted as a whole.
pub fn select_top(tally: &Tally) -> Placing {
    // Reverse puts the weakest kept candidate at the top of the heap
    let mut kept: BinaryHeap<Reverse<Candidate>> = BinaryHeap::with_capacity(PLACING_SIZE + 1);

    for (&song, &weight) in tally {
        if weight == 0 {
            continue;
        }

        let challenger = Candidate { song, weight };

        if kept.len() < PLACING_SIZE {
            kept.push(Reverse(challenger));
        } else if let Some(Reverse(weakest)) = kept.peek() {
            if challenger > *weakest {
                kept.pop();
                kept.push(Reverse(challenger));
            }
        }
    }

    // Ascending in Reverse is descending in placing order
    kept.into_sorted_vec()
        .into_iter()
        .map(|Reverse(candidate)| candidate.song)
        .collect()
}
