mod app;
mod config;
mod ship;

use std::path::Path;

use backend::limiter::FrameLimiter;
use backend::system::System;
use tracing::{error, info};

use crate::config::GameConfig;
use crate::ship::Ship;

const WINDOW_TITLE: &str = "Invasion";
const SHIP_SPRITE: &str = "assets/ship.bmp";
const TARGET_FPS: u32 = 60;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn main() {
    init_tracing();

    let config = GameConfig::default();

    let mut system = match System::new(WINDOW_TITLE, config.width, config.height) {
        Ok(s) => s,
        Err(error) => {
            error!(%error, "could not create the game window");
            std::process::exit(1);
        }
    };

    let ship = match Ship::load(Path::new(SHIP_SPRITE), &config) {
        Ok(s) => s,
        Err(error) => {
            error!(%error, "could not load the ship sprite");
            std::process::exit(1);
        }
    };

    info!(width = config.width, height = config.height, "window created");

    let mut limiter = FrameLimiter::new(TARGET_FPS);
    if let Err(error) = app::run(&config, &ship, &mut system, &mut limiter) {
        error!(%error, "render loop failed");
        std::process::exit(1);
    }

    info!("quit requested, shutting down");
}
