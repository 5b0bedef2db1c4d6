pub mod countdown;
pub mod game;
pub mod handle_game;
pub mod prompt;
