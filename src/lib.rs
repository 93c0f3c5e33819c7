//! Rock, paper, scissors against the computer.
//!
//! A [`Session`] asks how many rounds to play, collects the human's throw
//! through an [`Interaction`], draws the computer's throw from the same
//! interaction's random source, and reports a [`Tally`] once every round is
//! resolved.

pub mod choice;
pub mod interaction;
pub mod outcome;
pub mod parse;
pub mod players;
pub mod session;
pub mod tally;
pub mod validator;

pub use choice::Choice;
pub use interaction::*;
pub use outcome::Outcome;
pub use parse::Parse;
pub use players::*;
pub use session::Session;
pub use tally::Tally;
pub use validator::Validator;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Integers typed in by the player: menu ordinals and round counts.
pub type Ordinal = i64;
/// Rounds played and outcome counters.
pub type Count = u32;
/// Uniform draws in `[0, 1)`.
pub type Unit = f64;

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Number of distinct throws.
pub const N_CHOICES: usize = 3;
/// Fewest rounds a session may ask for.
pub const MIN_ROUNDS: Ordinal = 1;
/// Most rounds a session may ask for.
pub const MAX_ROUNDS: Ordinal = 100;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging on stderr, plus a DEBUG file logger under
/// `dir/<unix seconds>.log` when a directory is given.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter, dir: Option<&std::path::Path>) -> anyhow::Result<()> {
    use anyhow::Context;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = vec![simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )];
    if let Some(dir) = dir {
        std::fs::create_dir_all(dir).context("create log directory")?;
        let time = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .context("time moves slow")?
            .as_secs();
        let path = dir.join(format!("{}.log", time));
        let file = std::fs::File::create(&path)
            .with_context(|| format!("create log file {}", path.display()))?;
        loggers.push(simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            config,
            file,
        ));
    }
    simplelog::CombinedLogger::init(loggers).context("initialize logger")
}
