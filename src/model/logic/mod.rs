mod combat;
mod movement;

use super::*;

impl Model {
    /// Run one animation frame of the match.
    pub fn tick(
        &mut self,
        input: &InputSnapshot,
        renderer: &mut dyn Renderer,
        events: &mut dyn MatchEvents,
    ) -> Result<(), FighterError> {
        let fighting = !self.is_over();
        if fighting {
            self.apply_actions(input)?;
        }

        renderer.clear(Color::BLACK);
        for sprite in self.background.iter_mut().chain(&mut self.scenery) {
            sprite.update(renderer);
        }

        let physics = self.config.physics;
        for fighter in &mut self.fighters {
            fighter.update(renderer, &physics);
        }

        let idle = InputSnapshot::default();
        let movement = if fighting { input } else { &idle };
        for id in FighterId::ALL {
            self.move_fighter(id, movement.get(id))?;
        }

        if fighting {
            for id in FighterId::ALL {
                self.resolve_attack(id, events)?;
            }
            if self.fighters.iter().any(|fighter| fighter.health.is_min()) {
                self.end_match(events);
            }
        }
        Ok(())
    }

    /// Count down one second of the match clock.
    pub fn countdown_tick(&mut self, events: &mut dyn MatchEvents) {
        let Some(seconds_left) = self.countdown.tick() else {
            return;
        };
        log::debug!("{} seconds left", seconds_left);
        events.on_timer_tick(seconds_left);
        if seconds_left == 0 {
            self.end_match(events);
        }
    }

    /// Advance the match clock by real time, ticking it once per elapsed second.
    pub fn update_countdown(&mut self, delta_time: Time, events: &mut dyn MatchEvents) {
        for _ in 0..self.countdown.advance(delta_time) {
            self.countdown_tick(events);
        }
    }

    pub fn determine_winner(&self) -> MatchResult {
        let player = self.fighter(FighterId::Player).health.value();
        let enemy = self.fighter(FighterId::Enemy).health.value();
        match player.cmp(&enemy) {
            std::cmp::Ordering::Equal => MatchResult::Tie,
            std::cmp::Ordering::Greater => MatchResult::Player1Wins,
            std::cmp::Ordering::Less => MatchResult::Player2Wins,
        }
    }

    fn end_match(&mut self, events: &mut dyn MatchEvents) {
        if self.is_over() {
            return;
        }
        self.countdown.cancel();
        let result = self.determine_winner();
        log::info!("Match over: {}", result.text());
        self.phase = Phase::Over { result };
        events.on_match_end(result);
    }
}
