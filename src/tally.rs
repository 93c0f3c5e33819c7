use crate::Count;
use crate::Outcome;

/// Win, loss, and tie counters for one session.
///
/// Starts at zero and takes exactly one increment per round.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    wins: Count,
    losses: Count,
    ties: Count,
}

impl Tally {
    pub fn new(wins: Count, losses: Count, ties: Count) -> Self {
        Self { wins, losses, ties }
    }
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Lose => self.losses += 1,
            Outcome::Tie => self.ties += 1,
        }
    }
    pub fn wins(&self) -> Count {
        self.wins
    }
    pub fn losses(&self) -> Count {
        self.losses
    }
    pub fn ties(&self) -> Count {
        self.ties
    }
    pub fn rounds(&self) -> Count {
        self.wins + self.losses + self.ties
    }
    /// Fraction of rounds won, zero before any round is played.
    pub fn rate(&self) -> f32 {
        match self.rounds() {
            0 => 0.,
            n => self.wins as f32 / n as f32,
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Game statistics:")?;
        writeln!(f, "  Won:  {}", self.wins)?;
        writeln!(f, "  Lost: {}", self.losses)?;
        write!(f, "  Tied: {}", self.ties)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let tally = Tally::default();
        assert_eq!(tally, Tally::new(0, 0, 0));
        assert_eq!(tally.rounds(), 0);
        assert_eq!(tally.rate(), 0.);
    }

    #[test]
    fn one_increment_per_round() {
        let mut tally = Tally::default();
        for (i, outcome) in [Outcome::Win, Outcome::Tie, Outcome::Lose, Outcome::Win]
            .into_iter()
            .enumerate()
        {
            tally.record(outcome);
            assert_eq!(tally.rounds(), i as Count + 1);
        }
        assert_eq!(tally, Tally::new(2, 1, 1));
        assert_eq!(tally.rate(), 0.5);
    }

    #[test]
    fn summary_lists_counters() {
        let summary = Tally::new(3, 1, 2).to_string();
        assert!(summary.contains("Won:  3"));
        assert!(summary.contains("Lost: 1"));
        assert!(summary.contains("Tied: 2"));
    }
}
