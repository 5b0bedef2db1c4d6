use clap::Clap;
use colormatch::core::game::{GamePars, RoundOutcome};
use colormatch::core::handle_game::handle_game;
use colormatch::core::prompt::RandomPromptSource;
use colormatch::interfaces::ui_interface::{GameState, PlayerIntent};
use colormatch::pre::check_game_opts::check_game_opts;
use colormatch::pre::game_opts::GameOpts;
use flume;
use helpers::kv::{FileStore, KvStore, MemStore};
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::thread;

const DEFAULT_STATSFILE: &str = "colormatch_stats.json";

fn main() -> anyhow::Result<()> {
    // PRE-PROCESSING ------------------------------------------------------------------------------
    // get game options from the command line arguments and check them
    let game_opts: GameOpts = GameOpts::parse();
    check_game_opts(&game_opts)?;

    let pars = GamePars::default();

    // print session details
    println!(
        "INFO: Starting a session with a countdown of {} ticks at {:.2}s per tick",
        pars.countdown_start, game_opts.tick_interval
    );
    println!("INFO: Commands: t/true, f/false, r/reset, q/quit");

    // EXECUTION -----------------------------------------------------------------------------------
    // create channels for the communication between engine, stdin reader and renderer
    let (intent_tx, intent_rx) = flume::unbounded();
    let (state_tx, state_rx) = flume::unbounded();

    // create a separate thread for the engine -> game_opts gets moved and must therefore be
    // copied to be still available afterwards
    let game_opts_thread = game_opts.clone();

    let engine_handle = thread::spawn(move || {
        let store: Box<dyn KvStore> = if game_opts_thread.volatile {
            Box::new(MemStore::new())
        } else {
            let statsfile = game_opts_thread
                .statsfile
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATSFILE));
            Box::new(FileStore::open(statsfile.as_path())?)
        };

        let prompts = Box::new(RandomPromptSource::new(game_opts_thread.seed));

        handle_game(
            pars,
            game_opts_thread.tick_interval,
            store,
            prompts,
            &intent_rx,
            Some(&state_tx),
        )
    });

    // create a separate thread that forwards the player's console input as intents
    let reader_tx = intent_tx;

    let _ = thread::spawn(move || {
        let stdin = io::stdin();

        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(_) => break,
            };

            let intent = match line.trim().to_lowercase().as_str() {
                "t" | "true" => PlayerIntent::Answer(true),
                "f" | "false" => PlayerIntent::Answer(false),
                "r" | "reset" => PlayerIntent::Reset,
                "q" | "quit" => PlayerIntent::Quit,
                "" => continue,
                other => {
                    println!("WARNING: Unknown command {:?}", other);
                    continue;
                }
            };

            let quit = matches!(intent, PlayerIntent::Quit);

            if reader_tx.send(intent).is_err() || quit {
                break;
            }
        }
    });

    // render the game states in the main thread until the engine hangs up
    for state in state_rx.iter() {
        render_state(&state);
    }

    // POST-PROCESSING -----------------------------------------------------------------------------
    // print session summary
    let session_result = engine_handle.join().expect("Engine thread panicked!")?;
    session_result.print_summary();

    Ok(())
}

/// render_state prints the inserted game state to the console output.
fn render_state(state: &GameState) {
    match state.last_outcome {
        Some(RoundOutcome::Won) => println!("INFO: Correct! Score is now {}", state.score),
        Some(RoundOutcome::Lost) => println!(
            "INFO: Wrong! Score dropped to 0, games played: {}",
            state.total_games
        ),
        Some(RoundOutcome::TimedOut) => println!(
            "INFO: Time is up! Score dropped to 0, games played: {}",
            state.total_games
        ),
        None => (),
    }

    if state.timer_active {
        println!(
            "shown color: {} | word: {} | time remaining: {}s | score: {} | max: {} | games: {}",
            state.prompt_color,
            state.prompt_label,
            state.countdown,
            state.score,
            state.max_score,
            state.total_games
        );
    } else {
        println!("INFO: Game paused, submit an answer (t/f) to start the next round");
    }
}
