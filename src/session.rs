use crate::Computer;
use crate::Count;
use crate::Human;
use crate::Interaction;
use crate::Outcome;
use crate::Parse;
use crate::Tally;
use crate::Validator;

/// Shown once the statistics have been reported.
pub const FAREWELL: &str = "See you soon!";

/// Where a session stands.
///
/// AwaitingRounds → Playing (once per round) → Reporting → Done
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingRounds,
    Playing { round: Count, rounds: Count },
    Reporting,
    Done,
}

/// One run of the game: a round count, that many rounds, then a report.
///
/// The session owns its tally and its interaction, and is consumed by
/// [`Session::play`]. Nothing is shared between sessions.
pub struct Session<I>
where
    I: Interaction,
{
    io: I,
    validator: Validator,
    human: Human,
    computer: Computer,
    tally: Tally,
}

impl<I> Session<I>
where
    I: Interaction,
{
    pub fn new(io: I) -> Self {
        Self::with_parse(io, Parse::default())
    }
    pub fn with_parse(io: I, parse: Parse) -> Self {
        let validator = Validator::new(parse);
        Self {
            io,
            validator,
            human: Human::new(validator),
            computer: Computer,
            tally: Tally::default(),
        }
    }
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Runs every phase to completion and hands back the final tally.
    pub fn play(mut self) -> anyhow::Result<Tally> {
        log::info!("session started ({:?} parsing)", self.validator.parse());
        let mut phase = Phase::AwaitingRounds;
        while phase != Phase::Done {
            phase = self.step(phase)?;
        }
        Ok(self.tally)
    }

    /// Advances one transition.
    pub fn step(&mut self, phase: Phase) -> anyhow::Result<Phase> {
        match phase {
            Phase::AwaitingRounds => Ok(Phase::Playing {
                round: 0,
                rounds: self.rounds()?,
            }),
            Phase::Playing { round, rounds } if round >= rounds => Ok(Phase::Reporting),
            Phase::Playing { round, rounds } => {
                self.round()?;
                Ok(Phase::Playing {
                    round: round + 1,
                    rounds,
                })
            }
            Phase::Reporting => {
                self.report();
                Ok(Phase::Done)
            }
            Phase::Done => Ok(Phase::Done),
        }
    }

    fn rounds(&mut self) -> anyhow::Result<Count> {
        let message = format!(
            "How many rounds would you like to play? ({}-{})",
            crate::MIN_ROUNDS,
            crate::MAX_ROUNDS
        );
        let rounds = self
            .validator
            .request(&mut self.io, &message, &(crate::MIN_ROUNDS..=crate::MAX_ROUNDS))?;
        log::info!("playing {} rounds", rounds);
        Ok(rounds as Count)
    }

    fn round(&mut self) -> anyhow::Result<()> {
        let human = self.human.throw(&mut self.io)?;
        self.io.notify(&format!("You chose: {}", human));
        let computer = self.computer.throw(&mut self.io);
        self.io.notify(&format!("The computer chose: {}", computer));
        let outcome = Outcome::from((human, computer));
        self.io.notify(&format!("Result: {}", outcome));
        self.tally.record(outcome);
        log::debug!("{:?} vs {:?} → {:?}", human, computer, outcome);
        Ok(())
    }

    fn report(&mut self) {
        log::info!(
            "session over after {} rounds, won {:.0}%",
            self.tally.rounds(),
            self.tally.rate() * 100.
        );
        self.io.notify(&self.tally.to_string());
        self.io.notify(FAREWELL);
    }
}
