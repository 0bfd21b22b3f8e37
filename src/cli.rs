use crate::code::{CODE_LENGTH, Code, SYMBOL_MAX, SYMBOL_MIN};
use crate::feedback::Feedback;
use crate::game_state::MAX_ATTEMPTS;
use std::io::BufRead;

// UI Input/Output functions

pub enum GuessInput {
    Valid(Code),
    Invalid,
    Closed,
}

/// Prompts for the current attempt and reads one line. A line that is not a
/// well-formed code yields `Invalid`; EOF or a read error yields `Closed`.
pub fn read_guess<R: BufRead>(reader: &mut R, attempt: u32) -> GuessInput {
    println!("\nAttempt {attempt}/{MAX_ATTEMPTS}");
    println!("Enter your guess ({CODE_LENGTH} digits between {SYMBOL_MIN} and {SYMBOL_MAX}):");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => GuessInput::Closed,
        Ok(_) => match Code::parse(input.trim()) {
            Some(guess) => GuessInput::Valid(guess),
            None => {
                println!(
                    "\nInvalid input. Please enter {CODE_LENGTH} digits between {SYMBOL_MIN} and {SYMBOL_MAX}."
                );
                GuessInput::Invalid
            }
        },
        Err(e) => {
            log::debug!("input read failed: {e}");
            GuessInput::Closed
        }
    }
}

pub fn display_welcome() {
    println!("Welcome to Mastermind!");
    println!("The secret code has {CODE_LENGTH} digits, each between {SYMBOL_MIN} and {SYMBOL_MAX}.");
    println!("Enter your guess and receive hints:");
    println!("+ = Correct digit in the correct position");
    println!("- = Correct digit in the wrong position");
    println!("You have {MAX_ATTEMPTS} attempts to guess the code. Good luck!");
}

pub fn display_feedback(feedback: &Feedback) {
    println!("Hint: {feedback}");
}

pub fn display_win() {
    println!("Congratulations! You've guessed the code!");
}

pub fn display_loss(secret: &Code) {
    println!("\nGame over! You've used all your attempts.");
    println!("The secret code was: {secret}");
}

pub fn display_input_closed() {
    println!("\nNo more input. Exiting.");
}
