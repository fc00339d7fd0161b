//! Repeated matches: self-play training and evaluation.

use crate::{Controller, MatchError, MatchOutcome, Participant};
use rand::Rng;
use tracing::{info, instrument};

/// Win/draw/loss counts per roster index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    wins: Vec<usize>,
    losses: Vec<usize>,
    draws: usize,
}

impl Tally {
    /// Empty tally for a roster of `participants`.
    pub fn new(participants: usize) -> Self {
        Self {
            wins: vec![0; participants],
            losses: vec![0; participants],
            draws: 0,
        }
    }

    /// Records a match between roster indices `pair`; `outcome` uses the
    /// controller's 0/1 indices for that pair.
    ///
    /// The tally grows to cover roster indices it has not seen yet.
    ///
    /// # Panics
    ///
    /// Panics if a `Won` outcome names a winner other than 0 or 1.
    pub fn record(&mut self, pair: [usize; 2], outcome: MatchOutcome) {
        match outcome {
            MatchOutcome::Won { winner, .. } => {
                assert!(winner < 2, "winner index {winner} is not 0 or 1");
                let (won, lost) = (pair[winner], pair[1 - winner]);
                let needed = won.max(lost) + 1;
                if self.wins.len() < needed {
                    self.wins.resize(needed, 0);
                    self.losses.resize(needed, 0);
                }
                self.wins[won] += 1;
                self.losses[lost] += 1;
            }
            MatchOutcome::Draw => self.draws += 1,
        }
    }

    /// Matches won by `index`.
    pub fn wins(&self, index: usize) -> usize {
        self.wins.get(index).copied().unwrap_or(0)
    }

    /// Matches lost by `index`.
    pub fn losses(&self, index: usize) -> usize {
        self.losses.get(index).copied().unwrap_or(0)
    }

    /// Drawn matches.
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Total matches recorded.
    pub fn games(&self) -> usize {
        self.wins.iter().sum::<usize>() + self.draws
    }

    /// Share of `index`'s matches it did not lose.
    ///
    /// Only meaningful for two-participant tallies, where every match
    /// involves both indices. Returns `1.0` for an empty tally.
    pub fn non_loss_rate(&self, index: usize) -> f64 {
        let games = self.games();
        if games == 0 {
            return 1.0;
        }
        1.0 - self.losses(index) as f64 / games as f64
    }
}

/// Picks two distinct roster indices, uniformly.
fn pick_pair<R: Rng>(roster: usize, rng: &mut R) -> [usize; 2] {
    if roster == 2 {
        return [0, 1];
    }
    let first = rng.random_range(0..roster);
    let offset = rng.random_range(1..roster);
    [first, (first + offset) % roster]
}

/// Runs `games` self-play matches among `roster`.
///
/// Each match pairs two distinct participants (always the same two when the
/// roster has two) with random seating.
///
/// # Errors
///
/// [`MatchError::RosterTooSmall`] with fewer than two participants;
/// otherwise stops at the first [`MatchError`] a match raises.
#[instrument(skip(roster, rng), fields(roster = roster.len()))]
pub fn self_play<P, R>(roster: &mut [P], games: usize, rng: &mut R) -> Result<Tally, MatchError>
where
    P: Participant,
    R: Rng,
{
    if roster.len() < 2 {
        return Err(MatchError::RosterTooSmall { size: roster.len() });
    }
    let mut tally = Tally::new(roster.len());
    let report_every = (games / 10).max(1);

    for game in 1..=games {
        let pair = pick_pair(roster.len(), rng);
        let outcome = {
            let (low, high) = (pair[0].min(pair[1]), pair[0].max(pair[1]));
            let (head, tail) = roster.split_at_mut(high);
            let a: &mut dyn Participant = &mut head[low];
            let b: &mut dyn Participant = &mut tail[0];
            let mut controller = if pair[0] == low {
                Controller::new(a, b, &mut *rng)
            } else {
                Controller::new(b, a, &mut *rng)
            };
            controller.run_match()?
        };
        tally.record(pair, outcome);

        if game % report_every == 0 {
            info!(game, games, draws = tally.draws(), "Self-play progress");
        }
    }
    Ok(tally)
}

/// Plays `games` matches between `candidate` (index 0) and `opponent`
/// (index 1) with random seating.
///
/// # Errors
///
/// Stops at the first [`MatchError`].
#[instrument(skip_all, fields(candidate = %candidate.name(), opponent = %opponent.name()))]
pub fn evaluate<R: Rng>(
    candidate: &mut dyn Participant,
    opponent: &mut dyn Participant,
    games: usize,
    rng: &mut R,
) -> Result<Tally, MatchError> {
    let mut tally = Tally::new(2);
    let mut controller = Controller::new(candidate, opponent, rng);
    for _ in 0..games {
        tally.record([0, 1], controller.run_match()?);
    }
    info!(
        wins = tally.wins(0),
        draws = tally.draws(),
        losses = tally.losses(0),
        "Evaluation finished"
    );
    Ok(tally)
}
