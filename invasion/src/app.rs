use backend::frame::Frame;
use backend::limiter::{Clock, FrameLimiter};
use backend::system::Screen;

use crate::config::GameConfig;
use crate::ship::Ship;

/// Runs the frame loop until the screen reports a quit. Each iteration polls
/// input, clears the frame to the background color, draws the ship, presents
/// the result and blocks on the limiter.
pub fn run<S: Screen, C: Clock>(
    config: &GameConfig,
    ship: &Ship,
    screen: &mut S,
    limiter: &mut FrameLimiter<C>,
) -> Result<(), String> {
    let mut frame = Frame::new(config.width, config.height);
    loop {
        if screen.poll_quit() {
            return Ok(());
        }

        // Update phase: movement systems hook in here once they exist

        frame.clear(config.bg_color);
        ship.render(&mut frame);
        screen.present(&frame)?;

        limiter.wait();
    }
}
