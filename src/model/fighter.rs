use super::*;

pub type Hp = u64;
pub type Health = geng_utils::bounded::Bounded<Hp>;

/// The animation clips a fighter can play. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantName {
    Idle,
    Run,
    Jump,
    Fall,
    Attack1,
    Attack2,
    TakeHit,
    Death,
}

impl VariantName {
    /// Every fighter must have these. `Attack2` is optional.
    pub const REQUIRED: [Self; 7] = [
        Self::Idle,
        Self::Run,
        Self::Jump,
        Self::Fall,
        Self::Attack1,
        Self::TakeHit,
        Self::Death,
    ];

    pub fn is_attack(self) -> bool {
        matches!(self, Self::Attack1 | Self::Attack2)
    }

    /// Whether the clip has to play to its last frame before anything else can start.
    pub fn is_locking(self) -> bool {
        matches!(self, Self::Attack1 | Self::Attack2 | Self::TakeHit)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum FighterError {
    #[error("{fighter} has no {variant:?} sprite")]
    MissingVariant {
        fighter: String,
        variant: VariantName,
    },
    #[error("{fighter}: {variant:?} sprite has no frames")]
    EmptyClip {
        fighter: String,
        variant: VariantName,
    },
    #[error("{0:?} is not an attack")]
    NotAnAttack(VariantName),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

#[derive(Debug, Clone)]
pub struct SpriteBank {
    fighter: String,
    variants: HashMap<VariantName, SpriteVariant>,
}

impl SpriteBank {
    pub fn new(
        fighter: impl Into<String>,
        variants: HashMap<VariantName, SpriteVariant>,
    ) -> Result<Self, FighterError> {
        let fighter = fighter.into();
        for variant in VariantName::REQUIRED {
            if !variants.contains_key(&variant) {
                return Err(FighterError::MissingVariant { fighter, variant });
            }
        }
        if let Some((&variant, _)) = variants.iter().find(|(_, clip)| clip.frames == 0) {
            return Err(FighterError::EmptyClip { fighter, variant });
        }
        Ok(Self { fighter, variants })
    }

    pub fn get(&self, variant: VariantName) -> Result<&SpriteVariant, FighterError> {
        self.variants
            .get(&variant)
            .ok_or_else(|| FighterError::MissingVariant {
                fighter: self.fighter.clone(),
                variant,
            })
    }
}

/// The reach of an attack, relative to its owner.
#[derive(Debug, Clone, Copy)]
pub struct AttackBox {
    pub position: vec2<f32>,
    pub offset: vec2<f32>,
    pub size: vec2<f32>,
}

impl AttackBox {
    pub fn aabb(&self) -> Aabb2<f32> {
        Aabb2::point(self.position).extend_positive(self.size)
    }
}

#[derive(Debug, Clone)]
pub struct Fighter {
    pub name: String,
    pub sprite: AnimatedSprite,
    pub velocity: vec2<f32>,
    /// Size of the body hurt-box.
    pub size: vec2<f32>,
    pub health: Health,
    pub bank: SpriteBank,
    pub variant: VariantName,
    /// Set by an attack, cleared once its hit frame has passed.
    pub attacking: bool,
    /// The last attack requested.
    pub attack_variant: VariantName,
    /// Terminal: the death animation has finished.
    pub dead: bool,
    pub attack_box: AttackBox,
    pub hit_frames: HashMap<VariantName, usize>,
}

impl Fighter {
    pub fn new(
        name: impl Into<String>,
        position: vec2<f32>,
        size: vec2<f32>,
        bank: SpriteBank,
        attack_box: AttackBoxConfig,
        rules: &RulesConfig,
    ) -> Result<Self, FighterError> {
        let sprite = AnimatedSprite::new(position, bank.get(VariantName::Idle)?, rules.frame_hold);
        Ok(Self {
            name: name.into(),
            sprite,
            velocity: vec2::ZERO,
            size,
            health: Health::new_max(rules.max_health),
            bank,
            variant: VariantName::Idle,
            attacking: false,
            attack_variant: VariantName::Attack1,
            dead: false,
            attack_box: AttackBox {
                position,
                offset: attack_box.offset,
                size: attack_box.size,
            },
            hit_frames: HashMap::new(),
        })
    }

    pub fn from_config(
        config: &FighterConfig,
        rules: &RulesConfig,
        loader: &dyn BitmapLoader,
    ) -> Result<Self, FighterError> {
        let variants = config
            .sprites
            .iter()
            .map(|(&variant, clip)| {
                let clip = SpriteVariant {
                    bitmap: loader.bitmap(&clip.texture),
                    frames: clip.frames,
                };
                (variant, clip)
            })
            .collect();
        let bank = SpriteBank::new(config.name.clone(), variants)?;
        let mut fighter = Self::new(
            config.name.clone(),
            config.position,
            config.size,
            bank,
            config.attack_box,
            rules,
        )?;
        fighter.sprite.scale = config.scale;
        fighter.sprite.offset = config.render_offset;
        fighter.hit_frames = config.hit_frames.clone();
        Ok(fighter)
    }

    pub fn position(&self) -> vec2<f32> {
        self.sprite.position
    }

    pub fn body(&self) -> Aabb2<f32> {
        Aabb2::point(self.sprite.position).extend_positive(self.size)
    }

    pub fn current_frame(&self) -> usize {
        self.sprite.current_frame
    }

    pub fn health_percent(&self) -> f32 {
        let max = self.health.max();
        if max == 0 {
            return 0.0;
        }
        self.health.value() as f32 * 100.0 / max as f32
    }

    /// Frame of the current attack on which damage registers.
    pub fn hit_frame(&self) -> Option<usize> {
        self.hit_frames.get(&self.attack_variant).copied()
    }

    /// Whether the current attack has reached its hit frame.
    pub fn on_hit_frame(&self) -> bool {
        self.attacking && self.hit_frame() == Some(self.sprite.current_frame)
    }

    /// Request a clip change. Locked clips (attacks, hit stun) ignore the request
    /// until their final frame; death ignores it forever and marks the fighter dead
    /// once its last frame is shown. A fighter out of health switches to death
    /// instead of whatever was requested.
    ///
    /// Returns whether the clip was actually switched.
    pub fn switch_sprite(&mut self, target: VariantName) -> Result<bool, FighterError> {
        self.bank.get(target)?;

        if self.variant == VariantName::Death {
            if self.sprite.is_last_frame() {
                self.dead = true;
            }
            return Ok(false);
        }

        if self.variant.is_locking() && !self.sprite.is_last_frame() {
            return Ok(false);
        }

        let target = if self.health.is_min() {
            VariantName::Death
        } else {
            target
        };
        if self.variant == target {
            return Ok(false);
        }
        let clip = self.bank.get(target)?;
        self.sprite.set_variant(clip);
        self.variant = target;
        Ok(true)
    }

    pub fn attack(&mut self, variant: VariantName) -> Result<(), FighterError> {
        if !variant.is_attack() {
            return Err(FighterError::NotAnAttack(variant));
        }
        if self.dead {
            return Ok(());
        }
        self.switch_sprite(variant)?;
        self.attacking = true;
        self.attack_variant = variant;
        Ok(())
    }

    pub fn take_hit(&mut self, damage: Hp) -> Result<(), FighterError> {
        if self.dead {
            return Ok(());
        }
        self.health.set(self.health.value().saturating_sub(damage));
        if self.health.is_min() {
            self.switch_sprite(VariantName::Death)?;
        } else {
            self.switch_sprite(VariantName::TakeHit)?;
        }
        Ok(())
    }

    pub fn jump(&mut self, velocity: f32) {
        if !self.dead {
            self.velocity.y = velocity;
        }
    }

    /// Draw, animate, then integrate one tick of physics.
    pub fn update(&mut self, renderer: &mut dyn Renderer, physics: &PhysicsConfig) {
        self.sprite.render(renderer);
        if !self.dead {
            self.sprite.advance_frame();
        }

        self.attack_box.position = self.sprite.position + self.attack_box.offset;

        self.sprite.position += self.velocity;

        let floor = physics.floor_line(renderer.viewport_size());
        if self.sprite.position.y + self.size.y + self.velocity.y >= floor {
            self.velocity.y = 0.0;
            self.sprite.position.y = floor - self.size.y;
        } else {
            self.velocity.y += physics.gravity;
        }
    }
}
