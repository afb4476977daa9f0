//! Presentation layer: window, streaming texture, input translation.
//!
//! The application renders into a [`Surface`]; once per frame [`Display::present`]
//! uploads the surface bytes to an ARGB8888 streaming texture (the surface
//! pitch passes through as the row stride) and blits it full-screen with a
//! vertical flip, since surface row 0 is the bottom of the picture.

pub mod blend;
mod font;
pub mod surface;

#[allow(unused_imports)]
pub use font::{get_glyph, text_width, Glyph};
pub use surface::{Pixel, Surface, SurfaceError};

use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Mod};
use sdl2::mouse::MouseButton;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;

pub struct Display {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    width: u32,
    height: u32,
    scale: u32,
}

pub struct RenderTarget<'a> {
    texture: Texture<'a>,
}

/// Window events translated into surface terms: mouse coordinates arrive
/// already divided by the integer scale, flipped so y grows upward, and
/// clamped into surface bounds.
#[derive(Debug, Clone)]
pub enum InputEvent {
    Quit,
    KeyDown { key: Keycode, mods: Mod },
    KeyUp { key: Keycode, mods: Mod },
    MouseMove { x: i32, y: i32 },
    MouseDown { x: i32, y: i32, button: MouseButtonKind },
    MouseUp { x: i32, y: i32, button: MouseButtonKind },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButtonKind {
    Left,
    Right,
    Middle,
}

impl Display {
    /// Create the window and canvas. The window is `scale` times larger than
    /// the surface in each direction; `interpolate` picks linear vs nearest
    /// filtering for the scale-up.
    pub fn with_options(
        title: &str,
        width: u32,
        height: u32,
        scale: u32,
        vsync: bool,
        interpolate: bool,
    ) -> Result<(Self, TextureCreator<WindowContext>), String> {
        let scale = scale.max(1);
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        sdl2::hint::set(
            "SDL_RENDER_SCALE_QUALITY",
            if interpolate { "linear" } else { "nearest" },
        );

        let window = video_subsystem
            .window(title, width * scale, height * scale)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        let mut canvas_builder = window.into_canvas().accelerated();
        if vsync {
            canvas_builder = canvas_builder.present_vsync();
        }
        let canvas = canvas_builder.build().map_err(|e| e.to_string())?;

        let texture_creator = canvas.texture_creator();
        let event_pump = sdl_context.event_pump()?;

        Ok((
            Self {
                canvas,
                event_pump,
                width,
                height,
                scale,
            },
            texture_creator,
        ))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Upload the surface and blit it full-screen, flipped vertically.
    pub fn present(&mut self, target: &mut RenderTarget, surface: &Surface) -> Result<(), String> {
        target
            .texture
            .update(None, surface.as_bytes(), (surface.pitch() * 4) as usize)
            .map_err(|e| e.to_string())?;

        self.canvas
            .copy_ex(&target.texture, None, None, 0.0, None, false, true)?;
        self.canvas.present();
        Ok(())
    }

    pub fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        let (w, h, scale) = (self.width as i32, self.height as i32, self.scale as i32);
        let to_surface = |wx: i32, wy: i32| -> (i32, i32) {
            let x = (wx / scale).clamp(0, w - 1);
            let y = (h - 1 - wy / scale).clamp(0, h - 1);
            (x, y)
        };

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => events.push(InputEvent::Quit),
                Event::KeyDown {
                    keycode: Some(key),
                    keymod,
                    ..
                } => events.push(InputEvent::KeyDown { key, mods: keymod }),
                Event::KeyUp {
                    keycode: Some(key),
                    keymod,
                    ..
                } => events.push(InputEvent::KeyUp { key, mods: keymod }),
                Event::MouseMotion { x, y, .. } => {
                    let (x, y) = to_surface(x, y);
                    events.push(InputEvent::MouseMove { x, y });
                },
                Event::MouseButtonDown {
                    x, y, mouse_btn, ..
                } => {
                    if let Some(button) = map_mouse_button(mouse_btn) {
                        let (x, y) = to_surface(x, y);
                        events.push(InputEvent::MouseDown { x, y, button });
                    }
                },
                Event::MouseButtonUp {
                    x, y, mouse_btn, ..
                } => {
                    if let Some(button) = map_mouse_button(mouse_btn) {
                        let (x, y) = to_surface(x, y);
                        events.push(InputEvent::MouseUp { x, y, button });
                    }
                },
                _ => {},
            }
        }

        events
    }
}

impl<'a> RenderTarget<'a> {
    /// Streaming texture matching the surface's packed `0xAARRGGBB` pixels.
    pub fn with_size(
        texture_creator: &'a TextureCreator<WindowContext>,
        width: u32,
        height: u32,
    ) -> Result<Self, String> {
        let texture = texture_creator
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| e.to_string())?;
        Ok(Self { texture })
    }
}

fn map_mouse_button(btn: MouseButton) -> Option<MouseButtonKind> {
    match btn {
        MouseButton::Left => Some(MouseButtonKind::Left),
        MouseButton::Right => Some(MouseButtonKind::Right),
        MouseButton::Middle => Some(MouseButtonKind::Middle),
        _ => None,
    }
}
