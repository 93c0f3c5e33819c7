use crate::Choice;
use crate::Interaction;

/// Throws uniformly at random, drawing from the interaction's random source.
#[derive(Debug, Default, Clone, Copy)]
pub struct Computer;

impl Computer {
    pub fn throw<I>(&self, io: &mut I) -> Choice
    where
        I: Interaction + ?Sized,
    {
        Choice::draw(io.unit())
    }
}
