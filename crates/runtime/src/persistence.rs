//! Debounced configuration writes.
//!
//! The host drives time: it calls [`crate::StackContext::tick`] from its own
//! loop and the schedule decides when a batched write is due. No thread or
//! timer is owned here.

use std::time::{Duration, Instant};

use stack_core::StackConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TimerState {
    Idle,
    /// A write was requested; the next tick starts the window.
    Pending,
    Armed { deadline: Instant },
}

/// Dirty flag plus a single debounce timer.
///
/// Any number of [`WriteSchedule::schedule`] calls inside one window collapse
/// into one write. A timer that fires while the flag is already clear does
/// nothing.
#[derive(Clone, Debug)]
pub struct WriteSchedule {
    dirty: bool,
    timer: TimerState,
    delay: Duration,
}

impl WriteSchedule {
    pub fn new(delay: Duration) -> Self {
        Self {
            dirty: false,
            timer: TimerState::Idle,
            delay,
        }
    }

    /// Marks the configuration dirty and starts a timer unless one is running.
    pub fn schedule(&mut self) {
        self.dirty = true;
        if self.timer == TimerState::Idle {
            self.timer = TimerState::Pending;
        }
    }

    /// Advances the timer; returns true when a write must happen now.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.timer {
            TimerState::Idle => false,
            TimerState::Pending => {
                self.timer = TimerState::Armed {
                    deadline: now + self.delay,
                };
                false
            }
            TimerState::Armed { deadline } if now >= deadline => {
                self.timer = TimerState::Idle;
                self.dirty
            }
            TimerState::Armed { .. } => false,
        }
    }

    /// Clears the dirty flag after a successful write.
    pub fn complete(&mut self) {
        self.dirty = false;
    }

    /// Keeps the flag set and re-arms the timer after a failed write.
    pub fn retry(&mut self) {
        self.schedule();
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns true while a timer is waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.timer != TimerState::Idle
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for WriteSchedule {
    fn default() -> Self {
        Self::new(StackConfig::CONFIG_WRITE_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_secs(5);

    #[test]
    fn idle_schedule_never_fires() {
        let mut schedule = WriteSchedule::new(DELAY);
        let now = Instant::now();

        assert!(!schedule.poll(now));
        assert!(!schedule.poll(now + DELAY * 10));
        assert!(!schedule.is_dirty());
    }

    #[test]
    fn burst_collapses_into_one_write() {
        let mut schedule = WriteSchedule::new(DELAY);
        let start = Instant::now();

        schedule.schedule();
        assert!(!schedule.poll(start));
        schedule.schedule();
        schedule.schedule();
        assert!(!schedule.poll(start + Duration::from_secs(4)));
        assert!(schedule.poll(start + DELAY));
        schedule.complete();

        assert!(!schedule.poll(start + DELAY * 2));
        assert!(!schedule.is_pending());
    }

    #[test]
    fn fire_after_clear_is_a_no_op() {
        let mut schedule = WriteSchedule::new(DELAY);
        let start = Instant::now();

        schedule.schedule();
        schedule.poll(start);
        schedule.complete();

        assert!(!schedule.poll(start + DELAY));
        assert!(!schedule.is_pending());
    }

    #[test]
    fn retry_rearms_the_timer() {
        let mut schedule = WriteSchedule::new(DELAY);
        let start = Instant::now();

        schedule.schedule();
        schedule.poll(start);
        assert!(schedule.poll(start + DELAY));
        schedule.retry();

        assert!(schedule.is_dirty());
        assert!(!schedule.poll(start + DELAY));
        assert!(schedule.poll(start + DELAY * 2));
    }
}
