use crate::error::InstructionError;
use crate::models::{Placing, Report, ReportKind, SongId, Tally};
use crate::voting::comparison::{diff, dropped_out};
use crate::voting::placing::select_top;
use crate::voting::award_points;
use log::debug;

/// Round and standings state of one contest.
///
/// Songs `1..=roster_bound` that have not been eliminated are the keys of `round_votes`.
/// A song eliminated from voting never comes back, since later roster extensions only
/// add ids above the old bound.
#[derive(Debug)]
pub struct Contest {
    round_votes: Tally,
    standings: Tally,
    roster_bound: SongId,
    max_roster_bound: SongId,
    round_placing: Placing,
    standings_placing: Placing,
}

impl Contest {
    pub fn new(max_roster_bound: SongId) -> Self {
        Self {
            round_votes: Tally::new(),
            standings: Tally::new(),
            roster_bound: 0,
            max_roster_bound,
            round_placing: Placing::new(),
            standings_placing: Placing::new(),
        }
    }

    pub fn roster_bound(&self) -> SongId {
        self.roster_bound
    }

    pub fn is_eligible(&self, song: SongId) -> bool {
        song != 0 && song <= self.roster_bound && self.round_votes.contains_key(&song)
    }

    // Votes in the open round, None once the song is out of voting
    #[cfg(test)]
    pub fn votes_for(&self, song: SongId) -> Option<u64> {
        self.round_votes.get(&song).copied()
    }

    pub fn points_for(&self, song: SongId) -> Option<u64> {
        self.standings.get(&song).copied()
    }

    pub fn round_placing(&self) -> &Placing {
        &self.round_placing
    }

    pub fn standings_placing(&self) -> &Placing {
        &self.standings_placing
    }

    /// Closes the open round and opens the next one with songs up to `new_bound`.
    ///
    /// Nothing changes when the bound is rejected.
    pub fn close_round(&mut self, new_bound: SongId) -> Result<Report, InstructionError> {
        if new_bound < 1 || new_bound > self.max_roster_bound {
            return Err(InstructionError::BoundOutOfRange {
                requested: new_bound,
                max: self.max_roster_bound,
            });
        }
        if new_bound < self.roster_bound {
            return Err(InstructionError::BoundDecreased {
                current: self.roster_bound,
                requested: new_bound,
            });
        }

        let previous = std::mem::replace(&mut self.round_placing, select_top(&self.round_votes));
        let entries = diff(&previous, &self.round_placing);

        award_points(&mut self.standings, &self.round_placing);

        // A song that was placed last round and is not placed now is out of voting for good
        let eliminated = dropped_out(&previous, &self.round_placing);

        if new_bound > self.roster_bound {
            for song in (self.roster_bound + 1)..=new_bound {
                self.round_votes.insert(song, 0);
            }
        }
        for song in &eliminated {
            self.round_votes.remove(song);
        }
        for votes in self.round_votes.values_mut() {
            *votes = 0;
        }

        debug!(
            "Closed round with bound {} -> {}: placing {:?}, eliminated {:?}",
            self.roster_bound, new_bound, self.round_placing, eliminated
        );
        self.roster_bound = new_bound;

        Ok(Report::new(ReportKind::Round, entries))
    }

    /// Ranks the accumulated points and forgets songs that can no longer climb back.
    pub fn report_standings(&mut self) -> Report {
        let previous = std::mem::replace(&mut self.standings_placing, select_top(&self.standings));
        let entries = diff(&previous, &self.standings_placing);

        // Off the standings placing and out of voting: its points can never grow again
        let forgotten: Vec<SongId> = dropped_out(&previous, &self.standings_placing)
            .into_iter()
            .filter(|song| !self.round_votes.contains_key(song))
            .collect();

        for song in &forgotten {
            self.standings.remove(song);
        }

        debug!(
            "Standings placing {:?}, forgotten {:?}",
            self.standings_placing, forgotten
        );

        Report::new(ReportKind::Standings, entries)
    }

    /// Adds one vote to every song on the ballot, or to none of them if any is ineligible.
    pub fn cast_votes(&mut self, ballot: &[SongId]) -> Result<(), InstructionError> {
        if let Some(&song) = ballot.iter().find(|&&song| !self.is_eligible(song)) {
            return Err(InstructionError::IneligibleSong(song));
        }

        for song in ballot {
            if let Some(votes) = self.round_votes.get_mut(song) {
                *votes += 1;
            }
        }

        Ok(())
    }
}
