use super::*;

/// The drawing surface the match renders itself onto.
///
/// Coordinates are in viewport space: origin at the top-left corner, y pointing down.
pub trait Renderer {
    fn viewport_size(&self) -> vec2<f32>;
    fn clear(&mut self, color: Color);
    /// Draw the `source` pixel region of the bitmap stretched into `target`.
    /// Bitmaps that are not loaded are skipped.
    fn draw_region(&mut self, bitmap: &Bitmap, source: Aabb2<f32>, target: Aabb2<f32>);
}

/// Notifications for the HUD.
pub trait MatchEvents {
    fn on_health_changed(&mut self, fighter: FighterId, percent: f32);
    fn on_timer_tick(&mut self, seconds_left: u64);
    fn on_match_end(&mut self, result: MatchResult);
}

/// Resolves texture paths to bitmap handles.
pub trait BitmapLoader {
    /// Never fails: a texture that could not be loaded yields an unloaded handle.
    fn bitmap(&self, path: &str) -> Bitmap;
}
