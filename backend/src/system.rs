use sdl2;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::WindowCanvas;
use sdl2::surface::Surface;

use crate::frame::Frame;

/// What the run loop needs from the platform: input polling and frame
/// presentation. `System` is the SDL implementation, tests script their own.
pub trait Screen {
    /// Drains all pending input events. Returns true once a quit has been
    /// requested.
    fn poll_quit(&mut self) -> bool;

    /// Pushes the finished frame to the display.
    fn present(&mut self, frame: &Frame) -> Result<(), String>;
}

pub struct System {
    pub w: usize,
    pub h: usize,
    pub sdl_context: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    canvas: WindowCanvas,
    event_pump: sdl2::EventPump,
}

impl System {
    pub fn new(title: &str, w: usize, h: usize) -> Result<System, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let window = match video_subsystem
            .window(title, w as u32, h as u32)
            .position_centered()
            .build()
        {
            Ok(w) => w,
            Err(e) => return Err(format!("Error while building window: {e}")),
        };

        let canvas = match window.into_canvas().build() {
            Ok(c) => c,
            Err(e) => return Err(format!("Error while creating canvas: {e}")),
        };

        let event_pump = sdl_context.event_pump()?;

        Ok(System {
            w,
            h,
            sdl_context,
            video_subsystem,
            canvas,
            event_pump,
        })
    }
}

impl Screen for System {
    fn poll_quit(&mut self) -> bool {
        let mut quit = false;
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => quit = true,
                _ => {}
            }
        }
        quit
    }

    fn present(&mut self, frame: &Frame) -> Result<(), String> {
        let mut data = frame.data().to_vec();
        let pitch = 3 * frame.width() as u32;
        let surface = Surface::from_data(
            &mut data,
            frame.width() as u32,
            frame.height() as u32,
            pitch,
            PixelFormatEnum::RGB24,
        )?;

        let texture_creator = self.canvas.texture_creator();
        let texture = match texture_creator.create_texture_from_surface(&surface) {
            Ok(t) => t,
            Err(e) => return Err(format!("Error while uploading frame: {e}")),
        };

        self.canvas.copy(&texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}
