//! Play one round of blackjack in the terminal.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use poker21::{Game, GameOptions, IoConsole, session};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);
    let mut console = IoConsole::stdio();

    match session::run(&mut game, &mut console) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:?}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
