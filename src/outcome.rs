use crate::Choice;
use colored::Colorize;

/// Result of one round, seen from the subject's side of the table.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
    Tie,
}

impl Outcome {
    /// The same round seen from the opponent's side.
    pub fn flip(&self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Tie => Outcome::Tie,
        }
    }
}

/// (subject, opponent) → outcome for the subject
impl From<(Choice, Choice)> for Outcome {
    fn from((subject, opponent): (Choice, Choice)) -> Self {
        match (subject, opponent) {
            (a, b) if a == b => Outcome::Tie,
            (a, b) if a.beats() == b => Outcome::Win,
            _ => Outcome::Lose,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Outcome::Win => write!(f, "{}", "congratulations, you win!".green()),
            Outcome::Lose => write!(f, "{}", "you lose!".red()),
            Outcome::Tie => write!(f, "{}", "it's a tie".yellow()),
        }
    }
}
