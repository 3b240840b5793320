mod collision;
mod countdown;
mod fighter;
mod input;
mod logic;
mod sprite;
mod surface;
#[cfg(test)]
mod testing;

pub use self::{collision::*, countdown::*, fighter::*, input::*, sprite::*, surface::*};

use crate::prelude::*;

pub type Time = R32;
pub type Lifetime = geng_utils::bounded::Bounded<Time>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FighterId {
    Player,
    Enemy,
}

impl FighterId {
    pub const ALL: [Self; 2] = [Self::Player, Self::Enemy];

    pub fn index(self) -> usize {
        match self {
            Self::Player => 0,
            Self::Enemy => 1,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Enemy,
            Self::Enemy => Self::Player,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    Tie,
    Player1Wins,
    Player2Wins,
}

impl MatchResult {
    pub fn text(self) -> &'static str {
        match self {
            Self::Tie => "Tie",
            Self::Player1Wins => "Player 1 Wins",
            Self::Player2Wins => "Player 2 Wins",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Both fighters take input and can be hurt.
    Fight,
    /// The match is decided. Sprites keep animating, nothing else changes.
    Over { result: MatchResult },
}

/// State of a single match.
pub struct Model {
    pub config: Config,
    pub phase: Phase,
    pub background: Vec<AnimatedSprite>,
    pub scenery: Vec<AnimatedSprite>,
    pub fighters: [Fighter; 2],
    pub countdown: Countdown,
}

impl Model {
    pub fn new(config: Config, loader: &dyn BitmapLoader) -> Result<Self, FighterError> {
        let rules = config.rules;
        let background = config
            .background
            .iter()
            .map(|path| AnimatedSprite::background(loader.bitmap(path)))
            .collect();
        let scenery = config
            .scenery
            .iter()
            .map(|scenery| {
                let clip = SpriteVariant {
                    bitmap: loader.bitmap(&scenery.texture),
                    frames: scenery.frames,
                };
                AnimatedSprite::new(scenery.position, &clip, rules.frame_hold)
                    .scaled(scenery.scale)
            })
            .collect();
        let fighters = [
            Fighter::from_config(&config.player, &rules, loader)?,
            Fighter::from_config(&config.enemy, &rules, loader)?,
        ];
        log::info!(
            "Match started: {} vs {}",
            fighters[0].name,
            fighters[1].name
        );
        Ok(Self {
            phase: Phase::Fight,
            background,
            scenery,
            fighters,
            countdown: Countdown::new(rules.match_seconds),
            config,
        })
    }

    pub fn fighter(&self, id: FighterId) -> &Fighter {
        &self.fighters[id.index()]
    }

    pub fn fighter_mut(&mut self, id: FighterId) -> &mut Fighter {
        &mut self.fighters[id.index()]
    }

    /// Mutable access to an attacker and its opponent at the same time.
    pub fn pair_mut(&mut self, attacker: FighterId) -> (&mut Fighter, &mut Fighter) {
        let [player, enemy] = &mut self.fighters;
        match attacker {
            FighterId::Player => (player, enemy),
            FighterId::Enemy => (enemy, player),
        }
    }

    pub fn is_over(&self) -> bool {
        self.result().is_some()
    }

    pub fn result(&self) -> Option<MatchResult> {
        match self.phase {
            Phase::Fight => None,
            Phase::Over { result } => Some(result),
        }
    }
}
