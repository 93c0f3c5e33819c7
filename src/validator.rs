use crate::Interaction;
use crate::Ordinal;
use crate::Parse;
use std::ops::RangeInclusive;

/// Shown once per rejected answer.
pub const INVALID: &str = "Please enter a valid number.";

/// Closed set of integers an answer must belong to.
pub trait Allowed {
    fn admits(&self, n: Ordinal) -> bool;
}

impl Allowed for RangeInclusive<Ordinal> {
    fn admits(&self, n: Ordinal) -> bool {
        self.contains(&n)
    }
}
impl<const N: usize> Allowed for [Ordinal; N] {
    fn admits(&self, n: Ordinal) -> bool {
        self.contains(&n)
    }
}

/// Asks until the answer is an integer inside the allowed set.
///
/// There is no retry limit. Each rejected answer produces exactly one
/// [`INVALID`] notification and the same prompt is shown again.
#[derive(Debug, Default, Clone, Copy)]
pub struct Validator {
    parse: Parse,
}

impl Validator {
    pub fn new(parse: Parse) -> Self {
        Self { parse }
    }
    pub fn parse(&self) -> Parse {
        self.parse
    }
    /// The returned value always satisfies `allowed`. Errors come only from
    /// the interaction medium.
    pub fn request<I, A>(&self, io: &mut I, message: &str, allowed: &A) -> anyhow::Result<Ordinal>
    where
        I: Interaction + ?Sized,
        A: Allowed + ?Sized,
    {
        loop {
            let text = io.prompt(message)?;
            match self.parse.integer(&text) {
                Some(n) if allowed.admits(n) => return Ok(n),
                Some(n) => log::debug!("rejected {} (outside allowed set)", n),
                None => log::debug!("rejected {:?} (not an integer)", text),
            }
            io.notify(INVALID);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Script;

    #[test]
    fn allowed_ranges_and_arrays() {
        let range: RangeInclusive<Ordinal> = 1..=100;
        assert!(range.admits(1) && range.admits(100));
        assert!(!range.admits(0) && !range.admits(101));
        let array: [Ordinal; 3] = [1, 2, 3];
        assert!(array.admits(2));
        assert!(!array.admits(4));
    }

    #[test]
    fn first_valid_answer() {
        let mut script = Script::default().answers(["2"]);
        let n = Validator::default().request(&mut script, "pick", &(1..=3)).unwrap();
        assert_eq!(n, 2);
        assert!(script.notices().is_empty());
    }

    #[test]
    fn one_notice_per_rejection() {
        let mut script = Script::default().answers(["abc", "0", "4", "", "3"]);
        let n = Validator::default().request(&mut script, "pick", &(1..=3)).unwrap();
        assert_eq!(n, 3);
        assert_eq!(script.notices(), [INVALID; 4]);
        assert_eq!(script.prompts().len(), 5);
        assert!(script.prompts().iter().all(|p| p == "pick"));
    }

    #[test]
    fn never_outside_allowed() {
        let allowed = [2, 5, 11];
        let answers = (-20..=20).map(|n| n.to_string()).collect::<Vec<_>>();
        let mut script = Script::default().answers(answers);
        let validator = Validator::default();
        while script.remaining() > 0 {
            match validator.request(&mut script, "pick", &allowed) {
                Ok(n) => assert!(allowed.contains(&n)),
                Err(_) => break,
            }
        }
    }

    #[test]
    fn strict_rejects_trailing_garbage() {
        let mut script = Script::default().answers(["2abc", "2"]);
        let n = Validator::new(Parse::Strict).request(&mut script, "pick", &(1..=3)).unwrap();
        assert_eq!(n, 2);
        assert_eq!(script.notices().len(), 1);
    }

    #[test]
    fn lenient_accepts_leading_integer() {
        let mut script = Script::default().answers(["2abc"]);
        let n = Validator::new(Parse::Lenient).request(&mut script, "pick", &(1..=3)).unwrap();
        assert_eq!(n, 2);
        assert!(script.notices().is_empty());
    }

    #[test]
    fn medium_failure_propagates() {
        let mut script = Script::default().answers(["nope"]);
        assert!(Validator::default().request(&mut script, "pick", &(1..=3)).is_err());
        assert_eq!(script.notices(), [INVALID]);
    }
}
