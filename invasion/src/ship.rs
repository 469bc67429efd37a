use std::path::Path;

use backend::frame::Frame;
use resources::sprite::{AssetError, Sprite};

use crate::config::GameConfig;

/// Gap between the ship and the bottom edge of the surface, in pixels.
pub const BOTTOM_MARGIN: f32 = 10.0;

/// The player's ship. Position is kept in floats so future movement code can
/// accumulate sub-pixel steps without rounding drift.
pub struct Ship {
    x: f32,
    y: f32,
    sprite: Sprite,
}

impl Ship {
    /// Loads the sprite from disk and places the ship at its start position.
    pub fn load(path: &Path, config: &GameConfig) -> Result<Ship, AssetError> {
        let sprite = Sprite::load(path)?;
        Ok(Ship::new(sprite, config.width, config.height))
    }

    /// Centers the ship horizontally and rests it one margin above the
    /// bottom edge.
    pub fn new(sprite: Sprite, surface_w: usize, surface_h: usize) -> Ship {
        let x = (surface_w as f32 - sprite.width() as f32) / 2.0;
        let y = surface_h as f32 - sprite.height() as f32 - BOTTOM_MARGIN;
        Ship { x, y, sprite }
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Bounding rectangle at the current position: left, top, width, height.
    pub fn bounds(&self) -> (i32, i32, usize, usize) {
        (
            self.x.round() as i32,
            self.y.round() as i32,
            self.sprite.width(),
            self.sprite.height(),
        )
    }

    /// Draws the sprite at the current position.
    pub fn render(&self, frame: &mut Frame) {
        let (x, y, w, h) = self.bounds();
        frame.blit_rgba(x, y, w, h, self.sprite.rgba());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backend::frame::Rgb;
    use proptest::prelude::*;

    fn solid_sprite(w: usize, h: usize, color: [u8; 4]) -> Sprite {
        let mut rgba = Vec::with_capacity(4 * w * h);
        for _ in 0..w * h {
            rgba.extend_from_slice(&color);
        }
        Sprite::from_rgba(w, h, rgba)
    }

    #[test]
    fn starts_centered_with_a_bottom_margin() {
        let ship = Ship::new(solid_sprite(40, 60, [10, 20, 30, 255]), 1200, 800);
        assert_eq!(ship.position(), (580.0, 730.0));
    }

    #[test]
    fn odd_sizes_center_on_the_half_pixel() {
        let ship = Ship::new(solid_sprite(5, 4, [0, 0, 0, 255]), 10, 100);
        assert_eq!(ship.position(), (2.5, 86.0));
    }

    #[test]
    fn render_does_not_move_the_ship() {
        let ship = Ship::new(solid_sprite(4, 4, [1, 2, 3, 255]), 64, 64);
        let before = ship.bounds();
        let mut frame = Frame::new(64, 64);
        for _ in 0..3 {
            ship.render(&mut frame);
        }
        assert_eq!(ship.bounds(), before);
    }

    #[test]
    fn render_is_idempotent_on_a_cleared_frame() {
        let ship = Ship::new(solid_sprite(6, 3, [200, 40, 40, 255]), 32, 32);
        let bg = Rgb::new(230, 230, 230);

        let mut first = Frame::new(32, 32);
        first.clear(bg);
        ship.render(&mut first);

        let mut second = Frame::new(32, 32);
        second.clear(bg);
        ship.render(&mut second);

        assert_eq!(first.data(), second.data());
    }

    #[test]
    fn renders_the_sprite_at_its_bounds() {
        let ship = Ship::new(solid_sprite(4, 4, [9, 9, 9, 255]), 20, 20);
        let mut frame = Frame::new(20, 20);
        frame.clear(Rgb::new(0, 0, 0));
        ship.render(&mut frame);

        let (x, y, w, h) = ship.bounds();
        assert_eq!(frame.pixel(x as usize, y as usize), Rgb::new(9, 9, 9));
        assert_eq!(
            frame.pixel(x as usize + w - 1, y as usize + h - 1),
            Rgb::new(9, 9, 9)
        );
        assert_eq!(frame.pixel(0, 0), Rgb::new(0, 0, 0));
    }

    proptest! {
        #[test]
        fn centering_holds_for_any_surface_and_sprite(
            w in 1usize..=64,
            h in 1usize..=64,
            extra_w in 0usize..=512,
            extra_h in 0usize..=512,
        ) {
            let surface_w = w + extra_w;
            let surface_h = h + extra_h;
            let ship = Ship::new(solid_sprite(w, h, [0, 0, 0, 255]), surface_w, surface_h);
            let (x, y) = ship.position();

            // Sprite midpoint sits at the surface midpoint
            prop_assert!((x + w as f32 / 2.0 - surface_w as f32 / 2.0).abs() < 1e-3);
            // Bottom edge sits one margin above the surface bottom
            prop_assert!((y + h as f32 - (surface_h as f32 - BOTTOM_MARGIN)).abs() < 1e-3);
        }
    }
}
