use crate::{hud::Hud, prelude::*};

pub struct GameRender {
    geng: Geng,
    assets: Rc<Assets>,
    /// Size of the arena in viewport units.
    pub viewport: vec2<f32>,
    pub camera: Camera2d,
    pub show_hitboxes: bool,
}

/// Draws the match onto a framebuffer.
pub struct FrameRenderer<'a, 'f> {
    render: &'a GameRender,
    framebuffer: &'a mut ugli::Framebuffer<'f>,
}

impl GameRender {
    pub fn new(geng: &Geng, assets: &Rc<Assets>, viewport: vec2<f32>) -> Self {
        Self {
            geng: geng.clone(),
            assets: assets.clone(),
            viewport,
            camera: Camera2d {
                center: viewport / 2.0,
                rotation: Angle::ZERO,
                fov: viewport.y,
            },
            show_hitboxes: false,
        }
    }

    pub fn frame<'a, 'f>(
        &'a self,
        framebuffer: &'a mut ugli::Framebuffer<'f>,
    ) -> FrameRenderer<'a, 'f> {
        FrameRenderer {
            render: self,
            framebuffer,
        }
    }

    /// Convert a box in viewport space (y pointing down) into world space.
    fn to_world(&self, aabb: Aabb2<f32>) -> Aabb2<f32> {
        Aabb2 {
            min: vec2(aabb.min.x, self.viewport.y - aabb.max.y),
            max: vec2(aabb.max.x, self.viewport.y - aabb.min.y),
        }
    }

    pub fn draw_hud(&self, hud: &Hud, framebuffer: &mut ugli::Framebuffer) {
        let bar_size = vec2(420.0, 30.0);
        let clock_size = vec2(100.0, 50.0);
        let top = 20.0;
        let center = self.viewport.x / 2.0;

        // Clock
        let clock =
            Aabb2::point(vec2(center - clock_size.x / 2.0, top)).extend_positive(clock_size);
        self.draw_quad(clock, Color::BLACK, framebuffer);
        self.draw_text(
            &hud.seconds_left.to_string(),
            clock.center(),
            24.0,
            Color::WHITE,
            framebuffer,
        );

        // Health bars drain toward the outer edges
        let bar_top = top + (clock_size.y - bar_size.y) / 2.0;
        let left = Aabb2::point(vec2(center - clock_size.x / 2.0 - bar_size.x, bar_top))
            .extend_positive(bar_size);
        let right = Aabb2::point(vec2(center + clock_size.x / 2.0, bar_top))
            .extend_positive(bar_size);
        let empty = Color::new(1.0, 0.0, 0.0, 1.0);
        let full = Color::new(0.506, 0.549, 0.973, 1.0);
        for (bar, id) in [(left, FighterId::Player), (right, FighterId::Enemy)] {
            self.draw_quad(bar, empty, framebuffer);
            let width = bar.width() * hud.shown_health[id.index()].clamp(0.0, 100.0) / 100.0;
            let health = match id {
                FighterId::Player => Aabb2 {
                    min: vec2(bar.max.x - width, bar.min.y),
                    ..bar
                },
                FighterId::Enemy => Aabb2 {
                    max: vec2(bar.min.x + width, bar.max.y),
                    ..bar
                },
            };
            self.draw_quad(health, full, framebuffer);
        }

        if let Some(result) = hud.result {
            self.draw_text(result.text(), self.viewport / 2.0, 48.0, Color::WHITE, framebuffer);
            self.draw_text(
                "Press R for a rematch",
                self.viewport / 2.0 + vec2(0.0, 50.0),
                18.0,
                Color::WHITE,
                framebuffer,
            );
        }
    }

    /// Body (blue) and attack (red, brighter while attacking) boxes.
    pub fn draw_hitboxes(&self, model: &Model, framebuffer: &mut ugli::Framebuffer) {
        for fighter in &model.fighters {
            self.draw_quad(fighter.body(), Color::new(0.0, 0.0, 1.0, 0.3), framebuffer);
            let alpha = if fighter.attacking { 0.6 } else { 0.2 };
            self.draw_quad(
                fighter.attack_box.aabb(),
                Color::new(1.0, 0.0, 0.0, alpha),
                framebuffer,
            );
        }
    }

    fn draw_quad(&self, aabb: Aabb2<f32>, color: Color, framebuffer: &mut ugli::Framebuffer) {
        self.geng.draw2d().draw2d(
            framebuffer,
            &self.camera,
            &draw2d::Quad::new(self.to_world(aabb), color),
        );
    }

    fn draw_text(
        &self,
        text: &str,
        position: vec2<f32>,
        size: f32,
        color: Color,
        framebuffer: &mut ugli::Framebuffer,
    ) {
        let position = vec2(position.x, self.viewport.y - position.y);
        self.geng.default_font().draw(
            framebuffer,
            &self.camera,
            text,
            vec2(geng::TextAlign::CENTER, geng::TextAlign::CENTER),
            mat3::translate(position) * mat3::scale_uniform(size),
            color,
        );
    }
}

impl Renderer for FrameRenderer<'_, '_> {
    fn viewport_size(&self) -> vec2<f32> {
        self.render.viewport
    }

    fn clear(&mut self, color: Color) {
        ugli::clear(&mut *self.framebuffer, Some(color), None, None);
    }

    fn draw_region(&mut self, bitmap: &Bitmap, source: Aabb2<f32>, target: Aabb2<f32>) {
        if !bitmap.is_loaded() {
            return;
        }
        let Some(texture) = self.render.assets.textures.get(bitmap) else {
            return;
        };
        let size = texture.size().as_f32();
        // Texture coordinates start at the bottom row of the image
        let uv = Aabb2 {
            min: vec2(source.min.x / size.x, 1.0 - source.max.y / size.y),
            max: vec2(source.max.x / size.x, 1.0 - source.min.y / size.y),
        };
        let target = self.render.to_world(target);
        let vertex = |a_pos: vec2<f32>, a_vt: vec2<f32>| draw2d::TexturedVertex {
            a_pos,
            a_color: Color::WHITE,
            a_vt,
        };
        let vertices = vec![
            vertex(target.min, uv.min),
            vertex(vec2(target.max.x, target.min.y), vec2(uv.max.x, uv.min.y)),
            vertex(target.max, uv.max),
            vertex(vec2(target.min.x, target.max.y), vec2(uv.min.x, uv.max.y)),
        ];
        self.render.geng.draw2d().draw2d(
            &mut *self.framebuffer,
            &self.render.camera,
            &draw2d::TexturedPolygon::new(vertices, texture),
        );
    }
}
