use crate::Ordinal;
use crate::Unit;
use colored::Colorize;

/// A throw: rock, paper, or scissors.
///
/// Throws are listed to the player as a 1-based menu, so the ordinal
/// isomorphism is `1 → Rock`, `2 → Paper`, `3 → Scissors`. Rock beats
/// Scissors, Scissors beats Paper, Paper beats Rock.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Choice {
    Rock = 1,
    Paper = 2,
    Scissors = 3,
}

impl Choice {
    /// All three throws in menu order.
    pub const fn all() -> [Choice; crate::N_CHOICES] {
        [Choice::Rock, Choice::Paper, Choice::Scissors]
    }
    /// The menu ordinals a player may type.
    pub const fn ordinals() -> std::ops::RangeInclusive<Ordinal> {
        1..=crate::N_CHOICES as Ordinal
    }
    /// Lowercase name, as reported back to the player.
    pub fn name(&self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
        }
    }
    /// The throw this one defeats.
    pub fn beats(&self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Paper => Choice::Rock,
            Choice::Scissors => Choice::Paper,
        }
    }
    /// Numbered menu listing every throw, one per line.
    pub fn menu() -> String {
        Self::all()
            .iter()
            .map(|c| format!("  {}. {}", Ordinal::from(*c), c.title()))
            .collect::<Vec<_>>()
            .join("\n")
    }
    /// Maps a uniform draw in `[0, 1)` to ordinal `floor(u * 3) + 1`.
    pub fn draw(u: Unit) -> Choice {
        let n = crate::N_CHOICES as Unit;
        let ordinal = (u.clamp(0., 1.) * n).floor().min(n - 1.) as Ordinal + 1;
        Choice::from(ordinal)
    }
    fn title(&self) -> &'static str {
        match self {
            Choice::Rock => "Rock",
            Choice::Paper => "Paper",
            Choice::Scissors => "Scissors",
        }
    }
}

/// ordinal isomorphism
/// callers hand in validated menu ordinals only
impl From<Ordinal> for Choice {
    fn from(n: Ordinal) -> Choice {
        match n {
            1 => Choice::Rock,
            2 => Choice::Paper,
            3 => Choice::Scissors,
            _ => unreachable!("invalid choice ordinal {}", n),
        }
    }
}
impl From<Choice> for Ordinal {
    fn from(c: Choice) -> Ordinal {
        c as Ordinal
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name().bold())
    }
}
