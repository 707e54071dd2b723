#![no_std]

pub mod chip;
pub mod color;
pub mod driver;
pub mod error;
pub mod layout;
pub mod output;

pub use chip::{ChipKind, ChipTiming};
pub use driver::{DriverState, Ws281x, encode};
pub use error::Error;
pub use layout::Layout;
pub use output::{PatternConfig, PatternOutput};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};
