use crate::core::game::{Game, GamePars};
use crate::core::prompt::PromptSource;
use crate::interfaces::ui_interface::{GameState, PlayerIntent};
use crate::post::session_result::SessionResult;
use anyhow::Context;
use flume::{Receiver, RecvTimeoutError, Sender};
use helpers::kv::KvStore;
use std::time::{Duration, Instant};

/// handle_game creates the game and runs the session loop until the player quits or the intent
/// channel is closed, and returns the session totals for post-processing.
///
/// The loop waits for the next player intent, but never longer than until the next scheduled
/// countdown tick. Intents and ticks are thereby serialized through a single context, so at most
/// one resolution can occur per countdown cycle.
pub fn handle_game(
    pars: GamePars,
    tick_interval: f64,
    store: Box<dyn KvStore>,
    prompts: Box<dyn PromptSource>,
    rx: &Receiver<PlayerIntent>,
    tx: Option<&Sender<GameState>>,
) -> anyhow::Result<SessionResult> {
    // create the game (draws the first prompt and starts the first countdown)
    let mut game = Game::new(pars, store, prompts);
    let mut session_result = SessionResult::default();

    send_state(tx, game.get_game_state())?;

    let tick_duration = Duration::from_secs_f64(tick_interval);
    let mut next_tick = Instant::now() + tick_duration;

    loop {
        match rx.recv_deadline(next_tick) {
            Ok(PlayerIntent::Answer(claim_true)) => {
                let outcome = game.submit_answer(claim_true);
                session_result.record_outcome(outcome, game.score());

                // the resolution armed a fresh countdown, so the tick schedule restarts as well
                next_tick = Instant::now() + tick_duration;

                let mut state = game.get_game_state();
                state.last_outcome = Some(outcome);
                send_state(tx, state)?;
            }
            Ok(PlayerIntent::Reset) => {
                game.reset();
                send_state(tx, game.get_game_state())?;
            }
            Ok(PlayerIntent::Quit) => break,
            Err(RecvTimeoutError::Timeout) => {
                let outcome = game.on_tick();

                if let Some(outcome) = outcome {
                    session_result.record_outcome(outcome, game.score());
                }

                next_tick += tick_duration;

                let mut state = game.get_game_state();
                state.last_outcome = outcome;
                send_state(tx, state)?;
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    // complete the session totals with the persisted stats at exit
    session_result.total_games = game.total_games();
    session_result.max_score = game.max_score();

    Ok(session_result)
}

fn send_state(tx: Option<&Sender<GameState>>, state: GameState) -> anyhow::Result<()> {
    if let Some(tx) = tx {
        tx.send(state)
            .context("Failed to send game state to the renderer!")?;
    }

    Ok(())
}
