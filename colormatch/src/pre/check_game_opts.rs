use crate::pre::game_opts::GameOpts;
use anyhow::Context;
use helpers::general::InputValueError;

/// check_game_opts assures that the inserted options are within reasonable limits and raises an
/// error if not.
pub fn check_game_opts(game_opts: &GameOpts) -> anyhow::Result<()> {
    if !(0.05 <= game_opts.tick_interval && game_opts.tick_interval <= 10.0) {
        return Err(InputValueError).context(format!(
            "tick_interval is {:.3}s, which is not within the reasonable range of [0.05, 10.0]s!",
            game_opts.tick_interval
        ));
    }

    if game_opts.volatile && game_opts.statsfile.is_some() {
        return Err(InputValueError)
            .context("If volatile is activated, no statsfile must be inserted!");
    }

    Ok(())
}
