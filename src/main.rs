use mastermind::{game_loop, generate_secret};
use std::io;

fn main() {
    env_logger::init();

    let secret = generate_secret(&mut rand::rng());
    let stdin = io::stdin();
    let outcome = game_loop(secret, stdin.lock());
    log::debug!("game finished: {outcome:?}");
}
