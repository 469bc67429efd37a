use backend::frame::Rgb;

/// Fixed run-time settings. Built once at startup, lent by reference, never
/// mutated afterwards.
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub bg_color: Rgb,
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            width: 1200,
            height: 800,
            bg_color: Rgb::new(230, 230, 230),
        }
    }
}
