use crate::Ordinal;

/// How typed text is read as an integer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Parse {
    /// The trimmed text must be a whole integer.
    #[default]
    Strict,
    /// Leading-integer semantics: optional whitespace and sign, then the
    /// longest run of digits. Anything after the digits is ignored, so
    /// `"2abc"` reads as 2 and `"3.9"` as 3.
    Lenient,
}

impl Parse {
    pub fn integer(&self, text: &str) -> Option<Ordinal> {
        match self {
            Parse::Strict => text.trim().parse::<Ordinal>().ok(),
            Parse::Lenient => Self::leading(text),
        }
    }
    fn leading(text: &str) -> Option<Ordinal> {
        let text = text.trim_start();
        let sign = text.strip_prefix(['+', '-']).map_or(0, |_| 1);
        let digits = text[sign..]
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map_or(text.len(), |(i, _)| sign + i);
        match digits > sign {
            true => text[..digits].parse::<Ordinal>().ok(),
            false => None,
        }
    }
}
