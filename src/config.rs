use crate::prelude::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Size of the arena in viewport units.
    pub viewport: vec2<f32>,
    pub physics: PhysicsConfig,
    pub rules: RulesConfig,
    /// Background layers, drawn back to front and stretched over the viewport.
    pub background: Vec<String>,
    pub scenery: Vec<SceneryConfig>,
    pub player: FighterConfig,
    pub enemy: FighterConfig,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PhysicsConfig {
    pub gravity: f32,
    /// Distance between the ground line and the bottom of the viewport.
    pub floor_height: f32,
    pub move_speed: f32,
    /// Vertical velocity applied on jump (negative is up).
    pub jump_velocity: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Ticks every animation frame is held for.
    pub frame_hold: u64,
    pub max_health: Hp,
    pub hit_damage: Hp,
    pub match_seconds: u64,
}

/// An animated decoration that is not part of the fight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneryConfig {
    pub texture: String,
    pub frames: usize,
    pub position: vec2<f32>,
    pub scale: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FighterConfig {
    pub name: String,
    pub position: vec2<f32>,
    /// Size of the body hurt-box.
    pub size: vec2<f32>,
    /// Subtracted from the position when drawing the sprite.
    pub render_offset: vec2<f32>,
    pub scale: f32,
    pub attack_box: AttackBoxConfig,
    /// The frame of each attack on which the hit registers.
    pub hit_frames: HashMap<VariantName, usize>,
    pub sprites: HashMap<VariantName, ClipConfig>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AttackBoxConfig {
    pub offset: vec2<f32>,
    pub size: vec2<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipConfig {
    pub texture: String,
    pub frames: usize,
}

impl PhysicsConfig {
    /// The y coordinate fighters stand on.
    pub fn floor_line(&self, viewport: vec2<f32>) -> f32 {
        viewport.y - self.floor_height
    }
}

impl Config {
    pub async fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = file::load_string(path)
            .await
            .context(format!("when loading config file at {:?}", path))?;
        let config: Self =
            ron::from_str(&content).context(format!("when parsing config file at {:?}", path))?;
        config
            .validate()
            .context(format!("when validating config file at {:?}", path))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), FighterError> {
        if self.rules.frame_hold == 0 {
            return Err(FighterError::InvalidConfig(
                "frame_hold must be positive".to_string(),
            ));
        }
        if self.rules.match_seconds == 0 {
            return Err(FighterError::InvalidConfig(
                "match_seconds must be positive".to_string(),
            ));
        }
        if self.rules.max_health == 0 {
            return Err(FighterError::InvalidConfig(
                "max_health must be positive".to_string(),
            ));
        }
        for scenery in &self.scenery {
            if scenery.frames == 0 {
                return Err(FighterError::InvalidConfig(format!(
                    "scenery {} has no frames",
                    scenery.texture
                )));
            }
        }
        for fighter in [&self.player, &self.enemy] {
            fighter.validate()?;
        }
        Ok(())
    }

    /// All textures referenced by the config.
    pub fn texture_paths(&self) -> Vec<&str> {
        let fighters = [&self.player, &self.enemy]
            .into_iter()
            .flat_map(|fighter| fighter.sprites.values().map(|clip| clip.texture.as_str()));
        self.background
            .iter()
            .map(String::as_str)
            .chain(self.scenery.iter().map(|scenery| scenery.texture.as_str()))
            .chain(fighters)
            .collect()
    }
}

impl FighterConfig {
    pub fn validate(&self) -> Result<(), FighterError> {
        for variant in VariantName::REQUIRED {
            if !self.sprites.contains_key(&variant) {
                return Err(FighterError::MissingVariant {
                    fighter: self.name.clone(),
                    variant,
                });
            }
        }
        for (&variant, clip) in &self.sprites {
            if clip.frames == 0 {
                return Err(FighterError::EmptyClip {
                    fighter: self.name.clone(),
                    variant,
                });
            }
            if variant.is_attack() && !self.hit_frames.contains_key(&variant) {
                return Err(FighterError::InvalidConfig(format!(
                    "{}: {:?} has no hit frame",
                    self.name, variant
                )));
            }
        }
        for (&variant, &frame) in &self.hit_frames {
            let Some(clip) = self.sprites.get(&variant) else {
                return Err(FighterError::MissingVariant {
                    fighter: self.name.clone(),
                    variant,
                });
            };
            if !variant.is_attack() || frame >= clip.frames {
                return Err(FighterError::InvalidConfig(format!(
                    "{}: hit frame {} is not a frame of {:?}",
                    self.name, frame, variant
                )));
            }
        }
        Ok(())
    }
}
