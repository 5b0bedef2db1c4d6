/// The Countdown tracks the remaining time units of the current round and whether a tick schedule
/// is active. At most one countdown is active at any time: arming always replaces any previously
/// scheduled countdown.
#[derive(Debug)]
pub struct Countdown {
    start_value: u32,
    remaining: u32,
    active: bool,
}

impl Countdown {
    pub fn new(start_value: u32) -> Countdown {
        Countdown {
            start_value,
            remaining: start_value,
            active: false,
        }
    }

    /// arm cancels any active countdown and restarts it at its start value.
    pub fn arm(&mut self) {
        self.cancel();
        self.remaining = self.start_value;
        self.active = true;
    }

    /// cancel invalidates the tick schedule. Subsequent ticks are ignored until arm is called
    /// again.
    pub fn cancel(&mut self) {
        self.active = false;
    }

    /// restore cancels the countdown and restores the remaining time to the start value without
    /// arming it.
    pub fn restore(&mut self) {
        self.cancel();
        self.remaining = self.start_value;
    }

    /// tick decrements the remaining time by one unit and reports whether the countdown expired
    /// within this tick. Ticks on an inactive countdown have no effect.
    pub fn tick(&mut self) -> bool {
        if !self.active {
            return false;
        }

        self.remaining = self.remaining.saturating_sub(1);
        self.remaining == 0
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
