use super::*;

impl Model {
    /// Land the attacker's hit if it is on its hit frame and in reach.
    /// The hit window closes on that frame whether or not anything was hit.
    pub(super) fn resolve_attack(
        &mut self,
        attacker_id: FighterId,
        events: &mut dyn MatchEvents,
    ) -> Result<(), FighterError> {
        let damage = self.config.rules.hit_damage;
        let (attacker, defender) = self.pair_mut(attacker_id);
        if !attacker.on_hit_frame() {
            return Ok(());
        }

        if overlaps(attacker, defender) {
            defender.take_hit(damage)?;
            log::debug!(
                "{} hit {}, health left: {}",
                attacker.name,
                defender.name,
                defender.health.value()
            );
            events.on_health_changed(attacker_id.opponent(), defender.health_percent());
        }
        attacker.attacking = false;
        Ok(())
    }
}
