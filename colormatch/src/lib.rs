pub mod core;
pub mod interfaces;
pub mod post;
pub mod pre;



#[cfg(test)]
mod countdown_tests {
    use crate::core::countdown::Countdown;

    #[test]
    fn test_countdown_1() {
        let x = Countdown::new(5);
        assert_eq!(x.remaining(), 5);
        assert!(!x.is_active());
    }
    #[test]
    fn test_countdown_2() {
        let mut x = Countdown::new(3);
        x.arm();
        assert!(!x.tick());
        assert!(!x.tick());
        assert!(x.tick());
        assert_eq!(x.remaining(), 0);
    }
    #[test]
    fn test_countdown_3() {
        // ticks on an inactive countdown have no effect
        let mut x = Countdown::new(3);
        assert!(!x.tick());
        assert_eq!(x.remaining(), 3);
    }
    #[test]
    fn test_countdown_4() {
        // arming replaces any running countdown
        let mut x = Countdown::new(5);
        x.arm();
        x.tick();
        x.tick();
        x.arm();
        assert_eq!(x.remaining(), 5);
        assert!(x.is_active());
    }
    #[test]
    fn test_countdown_5() {
        let mut x = Countdown::new(5);
        x.arm();
        x.tick();
        x.restore();
        assert_eq!(x.remaining(), 5);
        assert!(!x.is_active());
    }
}


#[cfg(test)]
mod session_result_tests {
    use crate::core::game::RoundOutcome;
    use crate::post::session_result::SessionResult;

    #[test]
    fn test_record_outcome_1() {
        let mut x = SessionResult::default();

        x.record_outcome(RoundOutcome::Won, 5);
        x.record_outcome(RoundOutcome::Won, 10);
        x.record_outcome(RoundOutcome::Lost, 0);
        x.record_outcome(RoundOutcome::TimedOut, 0);

        assert_eq!(x.rounds_played, 4);
        assert_eq!(x.wins, 2);
        assert_eq!(x.losses, 1);
        assert_eq!(x.timeouts, 1);
        assert_eq!(x.best_score, 10);
    }
}
