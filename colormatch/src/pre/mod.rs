pub mod check_game_opts;
pub mod game_opts;
