use crate::Choice;
use crate::Interaction;
use crate::Validator;

/// Reads the player's throw off a numbered menu.
#[derive(Debug, Default, Clone, Copy)]
pub struct Human {
    validator: Validator,
}

impl Human {
    pub fn new(validator: Validator) -> Self {
        Self { validator }
    }
    pub fn throw<I>(&self, io: &mut I) -> anyhow::Result<Choice>
    where
        I: Interaction + ?Sized,
    {
        let ordinal = self
            .validator
            .request(io, &Self::menu(), &Choice::ordinals())?;
        Ok(Choice::from(ordinal))
    }
    fn menu() -> String {
        format!("Choose your throw:\n{}\nYour choice", Choice::menu())
    }
}
