use std::fmt;

pub const CODE_LENGTH: usize = 4;
pub const SYMBOL_MIN: u8 = 1;
pub const SYMBOL_MAX: u8 = 6;

/// A fixed-length sequence of symbols from the game alphabet. Both the
/// secret and each guess are `Code` values; the secret stays owned by the
/// game loop until it is revealed on loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Code([u8; CODE_LENGTH]);

impl Code {
    #[must_use]
    pub fn new(symbols: [u8; CODE_LENGTH]) -> Self {
        debug_assert!(
            symbols
                .iter()
                .all(|&s| (SYMBOL_MIN..=SYMBOL_MAX).contains(&s)),
            "code symbols must be between {SYMBOL_MIN} and {SYMBOL_MAX}"
        );
        Self(symbols)
    }

    /// Parses player input into a code: exactly 4 characters, each a digit
    /// between '1' and '6'. Anything else is rejected.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        if input.len() != CODE_LENGTH || !input.bytes().all(|b| (b'1'..=b'6').contains(&b)) {
            return None;
        }
        let mut symbols = [0u8; CODE_LENGTH];
        for (symbol, digit) in symbols.iter_mut().zip(input.bytes()) {
            *symbol = digit - b'0';
        }
        Some(Self(symbols))
    }

    #[must_use]
    pub fn symbols(&self) -> &[u8; CODE_LENGTH] {
        &self.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_code() {
        assert_eq!(Code::parse("1234"), Some(Code::new([1, 2, 3, 4])));
        assert_eq!(Code::parse("6666"), Some(Code::new([6, 6, 6, 6])));
        assert_eq!(Code::parse("1111"), Some(Code::new([1, 1, 1, 1])));
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!(Code::parse("123"), None);
        assert_eq!(Code::parse("12345"), None);
        assert_eq!(Code::parse(""), None);
    }

    #[test]
    fn test_parse_rejects_out_of_range_digits() {
        assert_eq!(Code::parse("1237"), None);
        assert_eq!(Code::parse("0123"), None);
        assert_eq!(Code::parse("1290"), None);
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        assert_eq!(Code::parse("12a4"), None);
        assert_eq!(Code::parse("abcd"), None);
        assert_eq!(Code::parse("12 4"), None);
        assert_eq!(Code::parse("-123"), None);
    }

    #[test]
    fn test_parse_rejects_multibyte_input() {
        // len() counts bytes, so a 4-char non-ASCII string must not slip through
        assert_eq!(Code::parse("12①4"), None);
        assert_eq!(Code::parse("１２３４"), None);
    }

    #[test]
    fn test_display_concatenates_digits() {
        assert_eq!(Code::new([1, 2, 3, 4]).to_string(), "1234");
        assert_eq!(Code::new([6, 1, 6, 1]).to_string(), "6161");
    }

    #[test]
    fn test_parse_display_round_trip() {
        let code = Code::parse("4516").unwrap();
        assert_eq!(Code::parse(&code.to_string()), Some(code));
    }
}
