use super::*;

/// Handle to a (possibly not yet loaded) texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    /// Path of the texture relative to the assets directory.
    pub path: Rc<str>,
    /// Natural size in pixels, `None` until the texture is loaded.
    pub size: Option<vec2<usize>>,
}

impl Bitmap {
    pub fn new(path: impl Into<Rc<str>>, size: vec2<usize>) -> Self {
        Self {
            path: path.into(),
            size: Some(size),
        }
    }

    pub fn unloaded(path: impl Into<Rc<str>>) -> Self {
        Self {
            path: path.into(),
            size: None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.size.is_some()
    }
}

/// One animation clip: a horizontal strip of equally sized frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteVariant {
    pub bitmap: Bitmap,
    pub frames: usize,
}

#[derive(Debug, Clone)]
pub struct AnimatedSprite {
    /// Top-left corner in viewport coordinates (y points down).
    pub position: vec2<f32>,
    pub scale: f32,
    /// Subtracted from the position when drawing.
    pub offset: vec2<f32>,
    pub bitmap: Bitmap,
    pub frames: usize,
    pub current_frame: usize,
    pub ticks_elapsed: u64,
    pub frame_hold: u64,
    /// Stretch over the whole viewport instead of using the natural size.
    pub background: bool,
}

impl AnimatedSprite {
    pub fn new(position: vec2<f32>, variant: &SpriteVariant, frame_hold: u64) -> Self {
        Self {
            position,
            scale: 1.0,
            offset: vec2::ZERO,
            bitmap: variant.bitmap.clone(),
            frames: variant.frames.max(1),
            current_frame: 0,
            ticks_elapsed: 0,
            frame_hold: frame_hold.max(1),
            background: false,
        }
    }

    pub fn background(bitmap: Bitmap) -> Self {
        Self {
            background: true,
            ..Self::new(vec2::ZERO, &SpriteVariant { bitmap, frames: 1 }, 1)
        }
    }

    pub fn scaled(self, scale: f32) -> Self {
        Self { scale, ..self }
    }

    pub fn is_last_frame(&self) -> bool {
        self.current_frame + 1 >= self.frames
    }

    /// Replace the clip being played and restart it from the first frame.
    pub fn set_variant(&mut self, variant: &SpriteVariant) {
        self.bitmap = variant.bitmap.clone();
        self.frames = variant.frames.max(1);
        self.current_frame = 0;
    }

    pub fn advance_frame(&mut self) {
        self.ticks_elapsed += 1;
        if self.ticks_elapsed % self.frame_hold == 0 {
            if self.current_frame + 1 < self.frames {
                self.current_frame += 1;
            } else {
                self.current_frame = 0;
            }
        }
    }

    /// Source rectangle of the current frame inside the bitmap, in pixels.
    pub fn frame_source(&self) -> Option<Aabb2<f32>> {
        let size = self.bitmap.size?.as_f32();
        let frame_width = size.x / self.frames as f32;
        Some(
            Aabb2::point(vec2(self.current_frame as f32 * frame_width, 0.0))
                .extend_positive(vec2(frame_width, size.y)),
        )
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        let Some(source) = self.frame_source() else {
            return;
        };
        let size = if self.background {
            renderer.viewport_size()
        } else {
            source.size() * self.scale
        };
        let target = Aabb2::point(self.position - self.offset).extend_positive(size);
        renderer.draw_region(&self.bitmap, source, target);
    }

    pub fn update(&mut self, renderer: &mut dyn Renderer) {
        self.render(renderer);
        self.advance_frame();
    }
}
