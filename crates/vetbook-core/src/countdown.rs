//! Delete-account confirmation countdown.
//!
//! Deleting an account is guarded by a short forced wait: the confirm control
//! stays disabled until a three-second countdown reaches zero, and the
//! countdown starts over if the app is backgrounded and refocused while the
//! dialog is up. The timer itself (one tick per second) belongs to the
//! caller; this is just the state.

/// Seconds the user must wait before the confirm control enables.
pub const DELETE_COUNTDOWN_SECS: u8 = 3;

/// State of the delete-account confirmation countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteCountdown {
    remaining: u8,
}

impl DeleteCountdown {
    /// Starts a fresh countdown with the confirm control disabled.
    pub fn new() -> Self {
        Self {
            remaining: DELETE_COUNTDOWN_SECS,
        }
    }

    /// Seconds left before confirmation unlocks.
    pub fn remaining(&self) -> u8 {
        self.remaining
    }

    /// Advances one second. Ticking past zero stays at zero.
    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    /// Whether the confirm control is enabled.
    pub fn is_ready(&self) -> bool {
        self.remaining == 0
    }

    /// Restarts the wait, e.g. when the app returns to the foreground while
    /// the dialog is visible.
    pub fn reset(&mut self) {
        self.remaining = DELETE_COUNTDOWN_SECS;
    }
}

impl Default for DeleteCountdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_disabled() {
        let countdown = DeleteCountdown::new();
        assert!(!countdown.is_ready());
        assert_eq!(countdown.remaining(), 3);
    }

    #[test]
    fn test_ready_after_three_ticks() {
        let mut countdown = DeleteCountdown::new();
        countdown.tick();
        countdown.tick();
        assert!(!countdown.is_ready());
        countdown.tick();
        assert!(countdown.is_ready());
    }

    #[test]
    fn test_tick_saturates_at_zero() {
        let mut countdown = DeleteCountdown::new();
        for _ in 0..10 {
            countdown.tick();
        }
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn test_reset_restarts_the_wait() {
        let mut countdown = DeleteCountdown::new();
        countdown.tick();
        countdown.tick();
        countdown.reset();
        assert_eq!(countdown.remaining(), 3);
        assert!(!countdown.is_ready());
    }
}
