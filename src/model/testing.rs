//! Headless doubles for the renderer, the HUD and the texture loader.

use super::*;

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub clears: usize,
    pub draws: Vec<(Rc<str>, Aabb2<f32>, Aabb2<f32>)>,
}

impl Renderer for RecordingRenderer {
    fn viewport_size(&self) -> vec2<f32> {
        vec2(1024.0, 576.0)
    }

    fn clear(&mut self, _color: Color) {
        self.clears += 1;
    }

    fn draw_region(&mut self, bitmap: &Bitmap, source: Aabb2<f32>, target: Aabb2<f32>) {
        self.draws.push((bitmap.path.clone(), source, target));
    }
}

#[derive(Debug, Default)]
pub struct RecordingEvents {
    pub health: Vec<(FighterId, f32)>,
    pub timer: Vec<u64>,
    pub results: Vec<MatchResult>,
}

impl MatchEvents for RecordingEvents {
    fn on_health_changed(&mut self, fighter: FighterId, percent: f32) {
        self.health.push((fighter, percent));
    }

    fn on_timer_tick(&mut self, seconds_left: u64) {
        self.timer.push(seconds_left);
    }

    fn on_match_end(&mut self, result: MatchResult) {
        self.results.push(result);
    }
}

/// Pretends every texture is an 800x100 strip.
pub struct FakeLoader;

impl BitmapLoader for FakeLoader {
    fn bitmap(&self, path: &str) -> Bitmap {
        Bitmap::new(path, vec2(800, 100))
    }
}

pub fn sample_config() -> Config {
    ron::from_str(include_str!("../../assets/config.ron")).unwrap()
}

pub fn rules() -> RulesConfig {
    RulesConfig {
        frame_hold: 1,
        max_health: 100,
        hit_damage: 20,
        match_seconds: 60,
    }
}

pub fn physics() -> PhysicsConfig {
    PhysicsConfig {
        gravity: 0.7,
        floor_height: 96.0,
        move_speed: 8.0,
        jump_velocity: -20.0,
    }
}

pub fn fighter(attack2: bool) -> Fighter {
    let frames = [
        (VariantName::Idle, 8),
        (VariantName::Run, 8),
        (VariantName::Jump, 2),
        (VariantName::Fall, 2),
        (VariantName::Attack1, 6),
        (VariantName::Attack2, 4),
        (VariantName::TakeHit, 4),
        (VariantName::Death, 6),
    ];
    let variants = frames
        .into_iter()
        .filter(|&(variant, _)| attack2 || variant != VariantName::Attack2)
        .map(|(variant, frames)| {
            let clip = SpriteVariant {
                bitmap: Bitmap::new(format!("{variant:?}.png"), vec2(frames * 100, 100)),
                frames,
            };
            (variant, clip)
        })
        .collect();
    let bank = SpriteBank::new("test", variants).unwrap();
    let attack_box = AttackBoxConfig {
        offset: vec2(100.0, 50.0),
        size: vec2(160.0, 50.0),
    };
    let mut fighter =
        Fighter::new("test", vec2::ZERO, vec2(50.0, 150.0), bank, attack_box, &rules()).unwrap();
    fighter.hit_frames.insert(VariantName::Attack1, 4);
    fighter.hit_frames.insert(VariantName::Attack2, 2);
    fighter
}
