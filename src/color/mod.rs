mod utils;

use smart_leds::RGB8;
pub use utils::{grb_bytes, rgb_from_u32, rgb_to_u32};

pub type Rgb = RGB8;
