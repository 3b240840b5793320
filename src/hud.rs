use crate::prelude::*;

/// Health bars, clock and result banner, as reported by the match.
#[derive(Debug, Clone)]
pub struct Hud {
    /// Latest reported health, in percent.
    pub health: [f32; 2],
    /// What the bars currently show; eases toward `health`.
    pub shown_health: [f32; 2],
    pub seconds_left: u64,
    pub result: Option<MatchResult>,
}

impl Hud {
    /// Percent per second the bars move at.
    const BAR_SPEED: f32 = 150.0;

    pub fn new(seconds: u64) -> Self {
        Self {
            health: [100.0; 2],
            shown_health: [100.0; 2],
            seconds_left: seconds,
            result: None,
        }
    }

    pub fn update(&mut self, delta_time: Time) {
        let step = Self::BAR_SPEED * delta_time.as_f32();
        for (shown, &target) in self.shown_health.iter_mut().zip(&self.health) {
            *shown = if *shown > target {
                (*shown - step).max(target)
            } else {
                (*shown + step).min(target)
            };
        }
    }
}

impl MatchEvents for Hud {
    fn on_health_changed(&mut self, fighter: FighterId, percent: f32) {
        self.health[fighter.index()] = percent;
    }

    fn on_timer_tick(&mut self, seconds_left: u64) {
        self.seconds_left = seconds_left;
    }

    fn on_match_end(&mut self, result: MatchResult) {
        self.result = Some(result);
    }
}
