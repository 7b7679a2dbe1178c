/// Rest timer counting down once per tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    duration: u32,
    remaining: u32,
    active: bool,
    paused: bool,
}

impl Countdown {
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            remaining: duration,
            active: false,
            paused: false,
        }
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_running(&self) -> bool {
        self.active && !self.paused
    }

    pub fn start(&mut self) {
        self.active = true;
        self.paused = false;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Restarts an expired countdown, otherwise flips the paused flag
    pub fn toggle(&mut self) {
        if self.remaining == 0 {
            self.reset();
            self.start();
        } else {
            self.paused = !self.paused;
        }
    }

    pub fn reset(&mut self) {
        self.remaining = self.duration;
        self.paused = false;
        self.active = false;
    }

    /// Advances by one second. Returns `true` on the tick that reaches zero.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }

        if self.remaining <= 1 {
            self.remaining = 0;
            self.active = false;
            return true;
        }

        self.remaining -= 1;
        false
    }

    pub fn progress_percent(&self) -> f64 {
        if self.duration == 0 {
            return 0.0;
        }

        f64::from(self.remaining) / f64::from(self.duration) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_does_not_tick_before_start() {
        let mut countdown = Countdown::new(3);
        assert!(!countdown.tick());
        assert_eq!(countdown.remaining(), 3);
    }

    #[test]
    fn test_countdown_fires_exactly_once() {
        let mut countdown = Countdown::new(3);
        countdown.start();

        let fired: Vec<bool> = (0..5).map(|_| countdown.tick()).collect();

        assert_eq!(fired, vec![false, false, true, false, false]);
        assert_eq!(countdown.remaining(), 0);
        assert!(!countdown.is_active());
    }

    #[test]
    fn test_countdown_pause_holds_remaining_time() {
        let mut countdown = Countdown::new(10);
        countdown.start();
        countdown.tick();
        countdown.pause();
        countdown.tick();
        countdown.tick();

        assert_eq!(countdown.remaining(), 9);

        countdown.resume();
        countdown.tick();
        assert_eq!(countdown.remaining(), 8);
    }

    #[test]
    fn test_toggle_restarts_expired_countdown() {
        let mut countdown = Countdown::new(1);
        countdown.start();
        assert!(countdown.tick());

        countdown.toggle();

        assert_eq!(countdown.remaining(), 1);
        assert!(countdown.is_running());
    }

    #[test]
    fn test_toggle_flips_pause_while_running() {
        let mut countdown = Countdown::new(5);
        countdown.start();

        countdown.toggle();
        assert!(countdown.is_paused());

        countdown.toggle();
        assert!(countdown.is_running());
    }

    #[test]
    fn test_progress_percent() {
        let mut countdown = Countdown::new(4);
        assert_eq!(countdown.progress_percent(), 100.0);

        countdown.start();
        countdown.tick();
        assert_eq!(countdown.progress_percent(), 75.0);

        assert_eq!(Countdown::new(0).progress_percent(), 0.0);
    }
}
