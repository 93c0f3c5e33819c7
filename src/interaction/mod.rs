//! The medium a session talks through.
//!
//! The game never touches stdin, stdout, or an RNG directly. Everything the
//! player sees or types, and every random draw, goes through [`Interaction`],
//! so the same session runs against a terminal or a scripted harness.
//!
//! ## Implementations
//!
//! - [`Console`]: terminal prompts and a seedable RNG (requires `cli` feature)
//! - [`Script`]: queued answers and draws, with a transcript of what was shown
#[cfg(feature = "cli")]
mod console;
mod script;

#[cfg(feature = "cli")]
pub use console::*;
pub use script::*;

use crate::Unit;
use rand::Rng;

/// Blocking conversation with the player.
pub trait Interaction {
    /// Show `message` and wait for one line of text.
    /// Errors only when the medium itself fails, never for bad answers.
    fn prompt(&mut self, message: &str) -> anyhow::Result<String>;
    /// Show an informational message.
    fn notify(&mut self, message: &str);
    /// Uniform draw in `[0, 1)`. Defaults to the thread-local RNG.
    fn unit(&mut self) -> Unit {
        rand::rng().random::<Unit>()
    }
}

impl<I> Interaction for &mut I
where
    I: Interaction + ?Sized,
{
    fn prompt(&mut self, message: &str) -> anyhow::Result<String> {
        (**self).prompt(message)
    }
    fn notify(&mut self, message: &str) {
        (**self).notify(message)
    }
    fn unit(&mut self) -> Unit {
        (**self).unit()
    }
}
