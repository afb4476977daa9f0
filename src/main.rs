// Allow unused code for designed-but-not-yet-used APIs
// Remove these as the codebase matures
#![allow(dead_code)]

mod config;
mod display;
mod life;
mod util;

use config::Config;
use display::blend::blend_alpha;
use display::{Display, InputEvent, MouseButtonKind, RenderTarget, Surface};
use life::Life;
use log::{error, info};
use sdl2::keyboard::Keycode;
use util::{FpsCounter, Rng};

const CONFIG_PATH: &str = "slate.json";
const OVERLAY_PATH: &str = "logo.png";
const SCREENSHOT_PATH: &str = "screenshot.png";

/// Scan the command line for `--config FILE` before anything else is parsed.
fn config_path_from_args() -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    args.iter()
        .position(|a| a == "--config")
        .and_then(|i| args.get(i + 1).cloned())
}

/// Apply command line overrides on top of the loaded configuration.
fn apply_args(config: &mut Config) {
    let args: Vec<String> = std::env::args().collect();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--no-vsync" => config.vsync = false,
            "--interpolate" => config.interpolate = true,
            "--width" | "-w" => {
                if i + 1 < args.len() {
                    if let Ok(w) = args[i + 1].parse::<u32>() {
                        config.width = w;
                    }
                    i += 1;
                }
            },
            "--height" | "-h" => {
                if i + 1 < args.len() {
                    if let Ok(h) = args[i + 1].parse::<u32>() {
                        config.height = h;
                    }
                    i += 1;
                }
            },
            "--scale" | "-s" => {
                if i + 1 < args.len() {
                    if let Ok(s) = args[i + 1].parse::<u32>() {
                        config.scale = s.max(1);
                    }
                    i += 1;
                }
            },
            "--config" => i += 1, // handled in config_path_from_args
            "--help" => {
                let defaults = Config::default();
                println!("Usage: slate [OPTIONS]");
                println!();
                println!("Options:");
                println!(
                    "  --width W, -w W    Surface width in pixels (default: {})",
                    defaults.width
                );
                println!(
                    "  --height H, -h H   Surface height in pixels (default: {})",
                    defaults.height
                );
                println!(
                    "  --scale S, -s S    Window pixels per surface pixel (default: {})",
                    defaults.scale
                );
                println!("  --no-vsync         Disable VSync for uncapped framerate");
                println!("  --interpolate      Linear filtering on the scale-up");
                println!("  --config FILE      Load settings from FILE instead of {CONFIG_PATH}");
                println!("  --help             Show this help message");
                std::process::exit(0);
            },
            _ => {},
        }
        i += 1;
    }
}

fn main() -> Result<(), String> {
    env_logger::init();

    let mut config = match config_path_from_args() {
        Some(path) => Config::load(&path).map_err(|e| format!("failed to load {path}: {e}"))?,
        None => Config::load(CONFIG_PATH).unwrap_or_else(|e| {
            info!("no usable {CONFIG_PATH} ({e}); using defaults");
            Config::default()
        }),
    };
    apply_args(&mut config);

    info!(
        "surface {}x{}, scale {}, vsync {}",
        config.width, config.height, config.scale, config.vsync
    );

    let (mut display, texture_creator) = Display::with_options(
        &config.title,
        config.width,
        config.height,
        config.scale,
        config.vsync,
        config.interpolate,
    )?;
    let mut target = RenderTarget::with_size(&texture_creator, config.width, config.height)?;
    let mut screen = Surface::with_size(config.width as i32, config.height as i32);

    // Optional alpha-blended logo in the top-right corner
    let overlay = match Surface::from_file(OVERLAY_PATH) {
        Ok(s) => {
            info!("loaded {OVERLAY_PATH} ({}x{})", s.width(), s.height());
            Some(s)
        },
        Err(_) => None,
    };

    let mut life = Life::new(config.width as usize, config.height as usize);
    let mut rng = Rng::new(0x5eed);

    let mut fps_counter = FpsCounter::new(60);
    let mut show_fps = false;
    let (mut mouse_x, mut mouse_y) = (0i32, 0i32);

    println!("=== slate ===");
    println!(
        "Surface: {}x{} at {}x scale",
        config.width, config.height, config.scale
    );
    println!("Controls:");
    println!("  Left click - Toggle cell");
    println!("  Space      - Run / pause");
    println!("  N          - Step one generation");
    println!("  C          - Clear grid");
    println!("  R          - Random fill");
    println!("  F          - Toggle FPS display");
    println!("  S          - Save {SCREENSHOT_PATH}");
    println!("  Escape     - Quit");

    'main: loop {
        let (dt, avg_fps) = fps_counter.tick();

        for event in display.poll_events() {
            match event {
                InputEvent::Quit => break 'main,
                InputEvent::KeyDown { key, .. } => match key {
                    Keycode::Escape if config.exit_on_escape => break 'main,
                    Keycode::Space => life.toggle_running(),
                    Keycode::N => life.step(),
                    Keycode::C => life.clear(),
                    Keycode::R => life.randomize(&mut rng, 0.25),
                    Keycode::F => show_fps = !show_fps,
                    Keycode::S => match screen.save_to_file(SCREENSHOT_PATH) {
                        Ok(()) => info!("saved {SCREENSHOT_PATH}"),
                        Err(e) => error!("{e}"),
                    },
                    _ => {},
                },
                InputEvent::MouseMove { x, y } => {
                    mouse_x = x;
                    mouse_y = y;
                },
                InputEvent::MouseDown {
                    x,
                    y,
                    button: MouseButtonKind::Left,
                } => life.toggle(x as usize, y as usize),
                _ => {},
            }
        }

        life.update(dt);

        screen.clear(0x00000000);

        if !life.running() {
            // crosshair under the cells so live pixels stay readable
            let (w, h) = (screen.width(), screen.height());
            screen.line(0.0, mouse_y as f32, (w - 1) as f32, mouse_y as f32, 0xff203040);
            screen.line(mouse_x as f32, 0.0, mouse_x as f32, (h - 1) as f32, 0xff203040);
        }

        life.render(&mut screen, 0xffffffff);

        if !life.running() {
            screen.rect(mouse_x - 2, mouse_y - 2, mouse_x + 2, mouse_y + 2, 0xff00a0ff);
        }

        if let Some(ref logo) = overlay {
            let x = screen.width() - logo.width() - 2;
            let y = screen.height() - logo.height() - 2;
            screen.draw_blend(logo, x, y, blend_alpha);
        }

        // Generation readout along the top edge
        let status = if life.running() {
            format!("gen {}", life.generation())
        } else {
            format!("gen {} [paused]", life.generation())
        };
        let status_y = screen.height() - 10;
        screen.print(&status, 2, status_y, 0xff00ff00);

        // FPS overlay (press F to toggle), drawn with a drop shadow
        if show_fps {
            let fps_text = format!(
                "fps {}  {:.1}ms",
                avg_fps as u32,
                fps_counter.avg_frame_time_ms()
            );
            screen.print(&fps_text, 3, 2, 0xff000000);
            screen.print(&fps_text, 2, 3, 0xffffff00);
        }

        display.present(&mut target, &screen)?;
    }

    Ok(())
}
