use super::*;

impl Model {
    /// Apply the jumps and attacks pressed since the previous frame.
    pub(super) fn apply_actions(&mut self, input: &InputSnapshot) -> Result<(), FighterError> {
        let jump_velocity = self.config.physics.jump_velocity;
        for id in FighterId::ALL {
            let controls = input.get(id);
            let fighter = self.fighter_mut(id);
            if fighter.dead {
                continue;
            }
            if controls.jump {
                fighter.jump(jump_velocity);
            }
            if let Some(variant) = controls.attack {
                fighter.attack(variant)?;
            }
        }
        Ok(())
    }

    /// Set the horizontal velocity from the held keys and pick the matching clip.
    pub(super) fn move_fighter(
        &mut self,
        id: FighterId,
        controls: &FighterInput,
    ) -> Result<(), FighterError> {
        let speed = self.config.physics.move_speed;
        let fighter = self.fighter_mut(id);
        fighter.velocity.x = 0.0;

        let direction = if fighter.dead {
            None
        } else {
            controls.movement()
        };
        match direction {
            Some(direction) => {
                fighter.velocity.x = direction.sign() * speed;
                fighter.switch_sprite(VariantName::Run)?;
            }
            None => {
                fighter.switch_sprite(VariantName::Idle)?;
            }
        }

        if fighter.velocity.y < 0.0 {
            fighter.switch_sprite(VariantName::Jump)?;
        } else if fighter.velocity.y > 0.0 {
            fighter.switch_sprite(VariantName::Fall)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::testing::*;

    fn model() -> Model {
        let mut model = Model::new(sample_config(), &FakeLoader).unwrap();
        for fighter in &mut model.fighters {
            fighter.sprite.position.y = 330.0;
        }
        model
    }

    fn held(direction: Direction) -> FighterInput {
        FighterInput {
            left: direction == Direction::Left,
            right: direction == Direction::Right,
            last_direction: Some(direction),
            ..Default::default()
        }
    }

    #[test]
    fn test_held_key_runs() {
        let mut model = model();
        model.move_fighter(FighterId::Player, &held(Direction::Left)).unwrap();
        let player = model.fighter(FighterId::Player);
        assert_eq!(player.velocity.x, -8.0);
        assert_eq!(player.variant, VariantName::Run);

        model.move_fighter(FighterId::Player, &FighterInput::default()).unwrap();
        let player = model.fighter(FighterId::Player);
        assert_eq!(player.velocity.x, 0.0);
        assert_eq!(player.variant, VariantName::Idle);
    }

    #[test]
    fn test_vertical_velocity_overrides_run() {
        let mut model = model();
        model.fighter_mut(FighterId::Enemy).velocity.y = -20.0;
        model.move_fighter(FighterId::Enemy, &held(Direction::Right)).unwrap();
        let enemy = model.fighter(FighterId::Enemy);
        assert_eq!(enemy.variant, VariantName::Jump);
        assert_eq!(enemy.velocity.x, 8.0);

        model.fighter_mut(FighterId::Enemy).velocity.y = 3.0;
        model.move_fighter(FighterId::Enemy, &held(Direction::Right)).unwrap();
        assert_eq!(model.fighter(FighterId::Enemy).variant, VariantName::Fall);
    }

    #[test]
    fn test_jump_is_applied_once() {
        let mut model = model();
        let mut input = InputSnapshot::default();
        input.fighters[FighterId::Player.index()].jump = true;
        model.apply_actions(&input).unwrap();
        assert_eq!(model.fighter(FighterId::Player).velocity.y, -20.0);
        assert_eq!(model.fighter(FighterId::Enemy).velocity.y, 0.0);
    }

    #[test]
    fn test_dead_fighter_ignores_controls() {
        let mut model = model();
        let enemy = model.fighter_mut(FighterId::Enemy);
        enemy.health.set(0);
        enemy.switch_sprite(VariantName::Death).unwrap();
        enemy.sprite.current_frame = enemy.sprite.frames - 1;
        enemy.switch_sprite(VariantName::Idle).unwrap();
        assert!(enemy.dead);

        let mut input = InputSnapshot::default();
        input.fighters[FighterId::Enemy.index()] = FighterInput {
            jump: true,
            attack: Some(VariantName::Attack1),
            ..held(Direction::Left)
        };
        model.apply_actions(&input).unwrap();
        model.move_fighter(FighterId::Enemy, input.get(FighterId::Enemy)).unwrap();

        let enemy = model.fighter(FighterId::Enemy);
        assert_eq!(enemy.velocity, vec2::ZERO);
        assert!(!enemy.attacking);
        assert_eq!(enemy.variant, VariantName::Death);
    }
}
