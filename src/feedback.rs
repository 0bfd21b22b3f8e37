use crate::code::{CODE_LENGTH, Code};
use std::fmt;

/// Result of comparing a guess against the secret. Renders as a run of '+'
/// markers (exact matches) followed by '-' markers (partial matches).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    pub exact: usize,
    pub partial: usize,
}

pub fn score(guess: &Code, secret: &Code) -> Feedback {
    let guess = guess.symbols();
    let secret = secret.symbols();
    let mut guess_matched = [false; CODE_LENGTH];
    let mut secret_matched = [false; CODE_LENGTH];

    // First pass: exact matches consume both positions
    let mut exact = 0;
    for i in 0..CODE_LENGTH {
        if guess[i] == secret[i] {
            guess_matched[i] = true;
            secret_matched[i] = true;
            exact += 1;
        }
    }

    // Second pass: each remaining guess symbol may consume at most one
    // remaining secret position, scanning in ascending order
    let mut partial = 0;
    for i in 0..CODE_LENGTH {
        if guess_matched[i] {
            continue;
        }
        for j in 0..CODE_LENGTH {
            if !secret_matched[j] && guess[i] == secret[j] {
                secret_matched[j] = true;
                partial += 1;
                break;
            }
        }
    }

    Feedback { exact, partial }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", "+".repeat(self.exact), "-".repeat(self.partial))
    }
}
