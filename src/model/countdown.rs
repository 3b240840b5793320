use super::*;

/// The once-per-second match clock.
///
/// Runs independently of the frame rate: [`Countdown::advance`] accumulates real time
/// and reports how many whole seconds have elapsed.
#[derive(Debug, Clone)]
pub struct Countdown {
    seconds_left: u64,
    next_second: Lifetime,
    cancelled: bool,
}

impl Countdown {
    pub fn new(seconds: u64) -> Self {
        Self {
            seconds_left: seconds,
            next_second: Lifetime::new_max(Time::ONE),
            cancelled: false,
        }
    }

    pub fn seconds_left(&self) -> u64 {
        self.seconds_left
    }

    pub fn is_running(&self) -> bool {
        !self.cancelled && self.seconds_left > 0
    }

    /// Stop the clock for good. Pending and future seconds are dropped.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Number of whole seconds that elapsed during `delta_time`.
    pub fn advance(&mut self, delta_time: Time) -> usize {
        if !self.is_running() {
            return 0;
        }
        let mut seconds = 0;
        let mut left = delta_time;
        while left > Time::ZERO {
            let until_next = self.next_second.value();
            let step = if left < until_next { left } else { until_next };
            self.next_second.change(-step);
            left = left - step;
            if self.next_second.is_min() {
                self.next_second.set_ratio(Time::ONE);
                seconds += 1;
            }
        }
        seconds
    }

    /// Count one second down. Returns the seconds left, or `None` if the clock is stopped.
    pub fn tick(&mut self) -> Option<u64> {
        if !self.is_running() {
            return None;
        }
        self.seconds_left -= 1;
        Some(self.seconds_left)
    }
}
