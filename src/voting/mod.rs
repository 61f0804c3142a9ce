pub mod comparison;
pub mod placing;

use crate::models::{SongId, Tally};

// Number of songs in a placing; the winner gets this many points, the last place gets one
pub const PLACING_SIZE: usize = 7;

// Credit every placed song with its placement points
pub fn award_points(standings: &mut Tally, placing: &[SongId]) {
    for (i, &song) in placing.iter().enumerate() {
        *standings.entry(song).or_insert(0) += (PLACING_SIZE - i) as u64;
    }
}
