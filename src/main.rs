// Crate-level lints: Allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional u32->i32 casts for pixel math
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges

//! Gate headcount dashboard, desktop window.
//!
//! Drives [`headcount_common::Dashboard`] from an SDL window. The window
//! supplies input and the presentation surface; everything else lives in
//! the common crate.
//!
//! # Controls
//!
//! | Input        | Action                                    |
//! |--------------|-------------------------------------------|
//! | F11          | Toggle fullscreen presentation            |
//! | Escape       | Leave fullscreen, else close the schedule |
//! | M            | Switch Automatic/Manual                   |
//! | A / B        | Pick a layout (Manual mode)               |
//! | S            | Open/close the schedule panel (Automatic) |
//! | Mouse click  | Controls, schedule chips, leave fullscreen |

mod cli;

use std::thread;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::{Keycode, MouseButton};
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use headcount_common::Dashboard;
use headcount_common::clock::SystemClock;
use headcount_common::colors::BLACK;
use headcount_common::config::{FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH};
use headcount_common::fullscreen::{FullscreenHost, PresentationHost, UnsupportedHost};
use headcount_common::input::{Input, Key};
use headcount_common::layout::LayoutId;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cli::Cli;

/// Map a key press onto a dashboard command.
fn key_input(keycode: Keycode) -> Option<Input> {
    let key = match keycode {
        Keycode::F11 => Key::ToggleFullscreen,
        Keycode::Escape => Key::Escape,
        Keycode::M => Key::ToggleMode,
        Keycode::A => Key::PickLayout(LayoutId::A),
        Keycode::B => Key::PickLayout(LayoutId::B),
        Keycode::S => Key::ToggleSettings,
        _ => return None,
    };
    Some(Input::Key(key))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG overrides the -d level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level())).init();

    warn!("Starting headcount-dashboard v{}", env!("CARGO_PKG_VERSION"));

    let config = cli.dashboard_config();
    config.validate().context("invalid dashboard settings")?;

    let rng = match cli.seed {
        Some(seed) => {
            info!("simulation seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let host: Box<dyn FullscreenHost> = if cli.no_fullscreen {
        Box::new(UnsupportedHost)
    } else {
        Box::new(PresentationHost::new())
    };

    let start = Instant::now();
    let mut dashboard =
        Dashboard::new(config, host, SystemClock, rng, start.elapsed()).context("failed to start dashboard")?;

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(cli.scale).build();
    let mut window = Window::new("Headcount Gate NPK2", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    'frames: loop {
        let frame_start = Instant::now();
        let now = start.elapsed();

        for ev in window.events() {
            let input = match ev {
                SimulatorEvent::Quit => Some(Input::Quit),
                SimulatorEvent::KeyDown { keycode, repeat, .. } if !repeat => key_input(keycode),
                SimulatorEvent::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    point,
                } => Some(Input::Click(point)),
                _ => None,
            };
            if let Some(input) = input {
                debug!("input {input:?}");
                if !dashboard.handle(input, now) {
                    break 'frames;
                }
            }
        }

        dashboard.advance(now);
        dashboard.draw(&mut display, now);
        window.update(&display);

        let elapsed = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(elapsed) {
            thread::sleep(remaining);
        }
    }

    dashboard.shutdown();
    info!("window closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(key_input(Keycode::F11), Some(Input::Key(Key::ToggleFullscreen)));
        assert_eq!(key_input(Keycode::Escape), Some(Input::Key(Key::Escape)));
        assert_eq!(key_input(Keycode::B), Some(Input::Key(Key::PickLayout(LayoutId::B))));
        assert_eq!(key_input(Keycode::S), Some(Input::Key(Key::ToggleSettings)));
        assert_eq!(key_input(Keycode::Q), None);
    }
}
