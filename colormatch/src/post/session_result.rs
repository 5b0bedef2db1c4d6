use crate::core::game::RoundOutcome;
use std::fmt::Write;

/// SessionResult contains the totals of a single play session that are required for
/// post-processing after the player quits.
#[derive(Debug, Default)]
pub struct SessionResult {
    pub rounds_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub timeouts: u32,
    pub best_score: u32,
    pub total_games: u32,
    pub max_score: u32,
}

impl SessionResult {
    /// record_outcome counts a resolved round and tracks the best score reached in this session.
    pub fn record_outcome(&mut self, outcome: RoundOutcome, score_after: u32) {
        self.rounds_played += 1;

        match outcome {
            RoundOutcome::Won => self.wins += 1,
            RoundOutcome::Lost => self.losses += 1,
            RoundOutcome::TimedOut => self.timeouts += 1,
        }

        if score_after > self.best_score {
            self.best_score = score_after
        }
    }

    /// print_summary prints the session totals to the console output.
    pub fn print_summary(&self) {
        let mut tmp_string = String::new();

        writeln!(&mut tmp_string, "rounds played:   {:5}", self.rounds_played).unwrap();
        writeln!(&mut tmp_string, "won:             {:5}", self.wins).unwrap();
        writeln!(&mut tmp_string, "lost:            {:5}", self.losses).unwrap();
        writeln!(&mut tmp_string, "timed out:       {:5}", self.timeouts).unwrap();
        writeln!(&mut tmp_string, "best score:      {:5}", self.best_score).unwrap();
        writeln!(&mut tmp_string, "games (total):   {:5}", self.total_games).unwrap();
        write!(&mut tmp_string, "max score:       {:5}", self.max_score).unwrap();

        println!("RESULT: Session summary");
        println!("{}", tmp_string);
    }
}
