// Library interface for mastermind
// This allows integration tests to access internal modules

pub mod cli;
pub mod code;
pub mod feedback;
pub mod game_state;
pub mod secret;

// Re-export commonly used items for easier testing
pub use code::{CODE_LENGTH, Code, SYMBOL_MAX, SYMBOL_MIN};
pub use feedback::{Feedback, score};
pub use game_state::{GameOutcome, MAX_ATTEMPTS, game_loop};
pub use secret::generate_secret;
