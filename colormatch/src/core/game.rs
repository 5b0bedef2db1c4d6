use crate::core::countdown::Countdown;
use crate::core::prompt::{Prompt, PromptSource};
use crate::interfaces::ui_interface::GameState;
use helpers::kv::KvStore;

// keys of the persisted aggregate stats
pub const KEY_TOTAL_GAMES: &str = "totalGames";
pub const KEY_MAX_SCORE: &str = "max";

/// * `countdown_start` - Number of time units the player has to answer each round
/// * `points_per_win` - Score increment for a correct answer
#[derive(Debug, Clone)]
pub struct GamePars {
    pub countdown_start: u32,
    pub points_per_win: u32,
}

impl Default for GamePars {
    fn default() -> Self {
        GamePars {
            countdown_start: 5,
            points_per_win: 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Won,
    Lost,
    TimedOut,
}

/// The Game owns the complete round state: current prompt, score, countdown, and the persisted
/// aggregate stats (total games played, max score). Rounds form a single self-looping cycle:
/// every resolution (win, loss, timeout) selects a new prompt and restarts the countdown.
///
/// Resolving a round always cancels the countdown as the first action, so a tick and a player
/// answer can never both resolve the same countdown cycle.
pub struct Game {
    pars: GamePars,
    score: u32,
    total_games: u32,
    max_score: u32,
    prompt: Prompt,
    countdown: Countdown,
    store: Box<dyn KvStore>,
    prompts: Box<dyn PromptSource>,
}

impl Game {
    /// new loads the persisted stats from the store, draws the first prompt and starts the first
    /// countdown.
    pub fn new(
        pars: GamePars,
        store: Box<dyn KvStore>,
        mut prompts: Box<dyn PromptSource>,
    ) -> Game {
        let total_games = store.get(KEY_TOTAL_GAMES);
        let max_score = store.get(KEY_MAX_SCORE);
        let prompt = prompts.next_prompt();

        let mut game = Game {
            countdown: Countdown::new(pars.countdown_start),
            pars,
            score: 0,
            total_games,
            max_score,
            prompt,
            store,
            prompts,
        };

        game.start_countdown();
        game
    }

    /// select_new_prompt replaces the current prompt with the next one from the prompt source.
    pub fn select_new_prompt(&mut self) {
        self.prompt = self.prompts.next_prompt();
    }

    /// start_countdown cancels any active countdown and restarts it at its start value.
    pub fn start_countdown(&mut self) {
        self.countdown.arm();
    }

    /// on_tick advances the active countdown by one time unit. When it expires, the round is
    /// resolved as a timeout loss and the next round starts without player input. Ticks while no
    /// countdown is active have no effect.
    pub fn on_tick(&mut self) -> Option<RoundOutcome> {
        if !self.countdown.is_active() {
            return None;
        }

        if self.countdown.tick() {
            // cancel before resolving such that this cycle cannot be resolved a second time
            self.countdown.cancel();
            self.apply_loss();
            self.select_new_prompt();
            self.start_countdown();
            return Some(RoundOutcome::TimedOut);
        }

        None
    }

    /// submit_answer resolves the current round against the player's claim that the displayed
    /// name matches the displayed color. The answer wins iff the claim equals the actual match.
    /// Afterwards a new prompt is selected and the countdown restarts unconditionally.
    pub fn submit_answer(&mut self, claim_true: bool) -> RoundOutcome {
        // cancel before resolving such that a pending tick cannot resolve this cycle as well
        self.countdown.cancel();

        let outcome = if claim_true == self.prompt.matches() {
            self.apply_win();
            RoundOutcome::Won
        } else {
            self.apply_loss();
            RoundOutcome::Lost
        };

        self.select_new_prompt();
        self.start_countdown();
        outcome
    }

    /// reset clears the persisted stats and restores the initial round state. The countdown is
    /// restored to its start value but not armed again, i.e. the game stays paused until the next
    /// answer is submitted.
    pub fn reset(&mut self) {
        self.store.remove(KEY_TOTAL_GAMES);
        self.store.remove(KEY_MAX_SCORE);
        self.total_games = 0;
        self.max_score = 0;
        self.score = 0;
        self.countdown.restore();
        self.select_new_prompt();
    }

    fn apply_win(&mut self) {
        self.score += self.pars.points_per_win;

        if self.score > self.max_score {
            self.max_score = self.score;
            self.store.set(KEY_MAX_SCORE, self.max_score);
        }
    }

    fn apply_loss(&mut self) {
        self.score = 0;
        self.total_games += 1;
        self.store.set(KEY_TOTAL_GAMES, self.total_games);
    }

    // ---------------------------------------------------------------------------------------------
    // METHODS (GETTERS) ---------------------------------------------------------------------------
    // ---------------------------------------------------------------------------------------------

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total_games(&self) -> u32 {
        self.total_games
    }

    pub fn max_score(&self) -> u32 {
        self.max_score
    }

    pub fn prompt(&self) -> Prompt {
        self.prompt
    }

    pub fn countdown_remaining(&self) -> u32 {
        self.countdown.remaining()
    }

    pub fn timer_active(&self) -> bool {
        self.countdown.is_active()
    }

    /// get_game_state returns a snapshot of the current game state for the rendering side.
    pub fn get_game_state(&self) -> GameState {
        GameState {
            score: self.score,
            countdown: self.countdown.remaining(),
            timer_active: self.countdown.is_active(),
            total_games: self.total_games,
            max_score: self.max_score,
            prompt_label: self.prompt.label.to_string(),
            prompt_color: self.prompt.color,
            last_outcome: None,
        }
    }
}
