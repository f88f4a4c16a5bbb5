//! Core library for the headcount gate dashboard.
//!
//! Everything except the window lives here, so the whole application can be
//! exercised in tests without a display:
//!
//! - [`stats`]: headcount categories, caps and the stats record
//! - [`simulation`]: random-walk data simulator
//! - [`animations`]: eased number animation, badge fades and bounce
//! - [`layout`]: weekly schedule and Automatic/Manual layout selection
//! - [`fullscreen`]: host fullscreen adapter and state mirror
//! - [`scheduler`]: periodic timers with cancellation
//! - [`clock`] / [`format`]: wall clock and text formatting
//! - [`input`]: input events and hit testing
//! - [`render`]: card indices and render state tracking
//! - [`widgets`]: drawing, generic over `DrawTarget<Color = Rgb565>`
//! - [`dashboard`]: the top-level controller tying it all together
//! - [`colors`] / [`config`] / [`styles`]: palette, geometry and text styles

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod animations;
pub mod clock;
pub mod colors;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod fullscreen;
pub mod input;
pub mod layout;
pub mod render;
pub mod scheduler;
pub mod simulation;
pub mod stats;
pub mod styles;
pub mod widgets;

// Re-export commonly used items
pub use dashboard::{Dashboard, DashboardConfig};
pub use error::{ConfigError, Result};
