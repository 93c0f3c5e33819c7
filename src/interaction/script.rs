use super::Interaction;
use crate::Choice;
use crate::Ordinal;
use crate::Unit;
use rand::Rng;
use std::collections::VecDeque;

/// Scripted embedding for tests and replays.
///
/// Answers are handed out in order, one per prompt. Draws are consumed in
/// order and fall back to the thread RNG once exhausted. Every prompt and
/// notification is kept as a transcript.
#[derive(Debug, Default, Clone)]
pub struct Script {
    answers: VecDeque<String>,
    draws: VecDeque<Unit>,
    prompts: Vec<String>,
    notices: Vec<String>,
}

impl Script {
    pub fn answers<A, S>(mut self, answers: A) -> Self
    where
        A: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.answers.extend(answers.into_iter().map(Into::into));
        self
    }
    pub fn draws<D>(mut self, draws: D) -> Self
    where
        D: IntoIterator<Item = Unit>,
    {
        self.draws.extend(draws);
        self
    }
    /// Queue draws that land in the middle of each throw's third of `[0, 1)`.
    pub fn throws<T>(self, throws: T) -> Self
    where
        T: IntoIterator<Item = Choice>,
    {
        let n = crate::N_CHOICES as Unit;
        self.draws(
            throws
                .into_iter()
                .map(Ordinal::from)
                .map(|o| (o as Unit - 0.5) / n),
        )
    }
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
    pub fn notices(&self) -> &[String] {
        &self.notices
    }
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Interaction for Script {
    fn prompt(&mut self, message: &str) -> anyhow::Result<String> {
        self.prompts.push(message.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script ran out of answers at: {}", message))
    }
    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
    fn unit(&mut self) -> Unit {
        self.draws
            .pop_front()
            .unwrap_or_else(|| rand::rng().random::<Unit>())
    }
}
