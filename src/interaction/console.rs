use super::Interaction;
use crate::Unit;
use anyhow::Context;
use dialoguer::Input;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::io::BufRead;
use std::io::IsTerminal;
use std::io::Write;

/// Terminal embedding.
///
/// Prompts through `dialoguer` when stdin is a terminal and falls back to
/// plain line reads when input is piped. Multi-line prompts print every line
/// but the last before asking.
#[derive(Debug)]
pub struct Console {
    rng: SmallRng,
}

impl Console {
    /// A fixed seed replays the computer's throws exactly.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        Self { rng }
    }
    fn interactive(question: &str) -> anyhow::Result<String> {
        Input::<String>::new()
            .with_prompt(question)
            .allow_empty(true)
            .report(false)
            .interact_text()
            .context("read from terminal")
    }
    /// Writes every line but the last and returns the last, trimmed.
    fn preamble<'m, W>(output: &mut W, message: &'m str) -> anyhow::Result<&'m str>
    where
        W: Write,
    {
        let (preamble, question) = message.rsplit_once('\n').unwrap_or(("", message));
        if !preamble.is_empty() {
            writeln!(output, "{}", preamble).context("write prompt")?;
        }
        Ok(question.trim())
    }
    fn piped<R, W>(input: &mut R, output: &mut W, message: &str) -> anyhow::Result<String>
    where
        R: BufRead,
        W: Write,
    {
        let question = Self::preamble(output, message)?;
        write!(output, "{}: ", question).context("write prompt")?;
        output.flush().context("flush prompt")?;
        let ref mut line = String::new();
        match input.read_line(line).context("read from stdin")? {
            0 => anyhow::bail!("input closed while waiting for an answer"),
            _ => Ok(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Interaction for Console {
    fn prompt(&mut self, message: &str) -> anyhow::Result<String> {
        match std::io::stdin().is_terminal() {
            true => Self::interactive(Self::preamble(&mut std::io::stdout(), message)?),
            false => Self::piped(
                &mut std::io::stdin().lock(),
                &mut std::io::stdout().lock(),
                message,
            ),
        }
    }
    fn notify(&mut self, message: &str) {
        println!("{}", message);
    }
    fn unit(&mut self) -> Unit {
        let unit = self.rng.random::<Unit>();
        log::trace!("drew {:.4}", unit);
        unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask(input: &str, message: &str) -> (anyhow::Result<String>, String) {
        let mut output = Vec::new();
        let answer = Console::piped(&mut input.as_bytes(), &mut output, message);
        (answer, String::from_utf8(output).unwrap())
    }

    #[test]
    fn piped_line_endings_trimmed() {
        assert_eq!(ask("2\r\n", "Rounds").0.unwrap(), "2");
        assert_eq!(ask("3\n", "Rounds").0.unwrap(), "3");
        assert_eq!(ask("1", "Rounds").0.unwrap(), "1");
        assert_eq!(ask(" 2abc \n", "Rounds").0.unwrap(), " 2abc ");
    }

    #[test]
    fn piped_one_line_per_prompt() {
        let mut input = "abc\n2\n".as_bytes();
        let mut output = Vec::new();
        assert_eq!(Console::piped(&mut input, &mut output, "Q").unwrap(), "abc");
        assert_eq!(Console::piped(&mut input, &mut output, "Q").unwrap(), "2");
        assert!(Console::piped(&mut input, &mut output, "Q").is_err());
    }

    #[test]
    fn piped_closed_input_is_an_error() {
        let (answer, _) = ask("", "Rounds");
        assert!(answer.is_err());
    }

    #[test]
    fn piped_prints_preamble_lines() {
        let message = "Choose your throw:\n  1. Rock\n  2. Paper\n  3. Scissors\nYour choice";
        let (answer, shown) = ask("1\n", message);
        assert_eq!(answer.unwrap(), "1");
        assert_eq!(
            shown,
            "Choose your throw:\n  1. Rock\n  2. Paper\n  3. Scissors\nYour choice: "
        );
    }

    #[test]
    fn single_line_prompt_has_no_preamble() {
        let (_, shown) = ask("5\n", "How many rounds? (1-100)");
        assert_eq!(shown, "How many rounds? (1-100): ");
    }

    #[test]
    fn seeded_draws_replay() {
        let mut a = Console::new(Some(7));
        let mut b = Console::new(Some(7));
        for _ in 0..32 {
            assert_eq!(a.unit(), b.unit());
        }
    }

    #[test]
    fn draws_in_unit_interval() {
        let mut console = Console::default();
        for _ in 0..1024 {
            let u = console.unit();
            assert!((0. ..1.).contains(&u));
        }
    }
}
