use resources::bmp::Bmp;
use std::env;
use std::path::Path;

const USAGE: &str = "Usage: spritegen <output.bmp>

Renders the placeholder player ship and writes it as a 24-bit BMP.
The game expects the result at assets/ship.bmp.

Example:
  spritegen assets/ship.bmp";

const WIDTH: usize = 40;
const HEIGHT: usize = 60;

// Matches the surface background color so the sprite blends in when blitted
const BACKGROUND: [u8; 3] = [230, 230, 230];
const HULL: [u8; 3] = [60, 70, 90];
const COCKPIT: [u8; 3] = [120, 160, 200];

fn main() {
    let args = env::args().collect::<Vec<String>>();
    if args.len() < 2 {
        println!("{USAGE}");
        std::process::exit(1);
    }

    let pixels = render_ship();
    let bmp = Bmp::from_rgb(WIDTH, HEIGHT, &pixels);
    if let Err(e) = bmp.to_file(Path::new(&args[1])) {
        panic!("spritegen: writing to {} error: {e}", args[1]);
    }
}

/// Hull half-width at a given row
fn half_width(y: usize) -> usize {
    if y < 20 {
        // Nose tapers in
        2 + y * 8 / 20
    } else if y < 44 {
        10
    } else {
        // Fins flare out
        10 + (y - 44) * 8 / 16
    }
}

fn render_ship() -> Vec<u8> {
    let mut pixels = Vec::with_capacity(3 * WIDTH * HEIGHT);
    for y in 0..HEIGHT {
        let hw = half_width(y);
        for x in 0..WIDTH {
            let dist = x.abs_diff(WIDTH / 2);
            let color = if dist < hw {
                if (22..34).contains(&y) && dist < 4 {
                    COCKPIT
                } else {
                    HULL
                }
            } else {
                BACKGROUND
            };
            pixels.extend_from_slice(&color);
        }
    }
    pixels
}
