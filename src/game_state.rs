use crate::cli::{self, GuessInput};
use crate::code::Code;
use crate::feedback::score;
use std::io::BufRead;

pub const MAX_ATTEMPTS: u32 = 10;

/// Terminal result of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Won { attempt: u32 },
    Lost,
    /// The input stream closed before the game finished. The session ends
    /// cleanly without revealing the secret.
    Abandoned,
}

enum GameState {
    InProgress,
    Won,
    Lost,
}

/// Runs one full game against `secret`, reading guesses from `reader`.
///
/// Each cycle reads a line, validates it, and scores it against the secret.
/// Malformed lines are a free retry: the attempt counter does not advance.
pub fn game_loop<R: BufRead>(secret: Code, mut reader: R) -> GameOutcome {
    cli::display_welcome();

    let mut attempt = 1;
    loop {
        let guess = match cli::read_guess(&mut reader, attempt) {
            GuessInput::Valid(guess) => guess,
            GuessInput::Invalid => continue,
            GuessInput::Closed => {
                cli::display_input_closed();
                return GameOutcome::Abandoned;
            }
        };

        log::debug!("attempt {attempt}: guess {guess}");

        match check_game_state(&guess, &secret, attempt) {
            GameState::Won => {
                cli::display_win();
                return GameOutcome::Won { attempt };
            }
            GameState::Lost => {
                cli::display_feedback(&score(&guess, &secret));
                cli::display_loss(&secret);
                return GameOutcome::Lost;
            }
            GameState::InProgress => {
                cli::display_feedback(&score(&guess, &secret));
                attempt += 1;
            }
        }
    }
}

fn check_game_state(guess: &Code, secret: &Code, attempt: u32) -> GameState {
    if guess == secret {
        GameState::Won
    } else if attempt >= MAX_ATTEMPTS {
        GameState::Lost
    } else {
        GameState::InProgress
    }
}
