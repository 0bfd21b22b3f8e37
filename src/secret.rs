use crate::code::{CODE_LENGTH, Code, SYMBOL_MAX, SYMBOL_MIN};
use rand::Rng;

/// Draws a fresh secret code: 4 symbols, each uniform over [1,6]. The random
/// source is caller-supplied so tests can seed it deterministically.
pub fn generate_secret<R: Rng>(rng: &mut R) -> Code {
    let mut symbols = [0u8; CODE_LENGTH];
    for symbol in &mut symbols {
        *symbol = rng.random_range(SYMBOL_MIN..=SYMBOL_MAX);
    }
    Code::new(symbols)
}
