//! Chip timing profiles
//!
//! Every supported chip is a [`ChipKind`] variant with a row in [`TIMINGS`].
//! Adding a chip means adding a variant, its name/id constants and a row.

use embassy_time::Duration;

/// Bits sent per LED (8 bits for each of the three channels)
pub const BITS_PER_LED: u64 = 24;

const CHIP_NAME_WS2811: &str = "ws2811";
const CHIP_NAME_WS2812: &str = "ws2812";
const CHIP_NAME_WS2812B: &str = "ws2812b";
const CHIP_NAME_WS2812B_2017: &str = "ws2812b_2017";
const CHIP_NAME_WS2812S: &str = "ws2812s";
const CHIP_NAME_WS2813: &str = "ws2813";
const CHIP_NAME_WS2813B: &str = "ws2813b";

const CHIP_ID_WS2811: u8 = 0;
const CHIP_ID_WS2812: u8 = 1;
const CHIP_ID_WS2812B: u8 = 2;
const CHIP_ID_WS2812B_2017: u8 = 3;
const CHIP_ID_WS2812S: u8 = 4;
const CHIP_ID_WS2813: u8 = 5;
const CHIP_ID_WS2813B: u8 = 6;

/// Protocol timing of a chip
///
/// Duties are integer percent of one bit period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipTiming {
    /// High time of a `0` bit
    pub zero_duty: u8,
    /// High time of a `1` bit
    pub one_duty: u8,
    /// Bit frequency in Hz
    pub frequency: u32,
    /// Minimum low time after a frame before the chips latch, in microseconds
    pub reset_delay_us: u32,
}

impl ChipTiming {
    pub const fn new(zero_duty: u8, one_duty: u8, frequency: u32, reset_delay_us: u32) -> Self {
        Self {
            zero_duty,
            one_duty,
            frequency,
            reset_delay_us,
        }
    }

    /// Check that the timing describes a decodable waveform
    ///
    /// A `0` must be strictly shorter than a `1`, both must fit in the period
    /// and the line has to toggle at all.
    pub const fn is_valid(&self) -> bool {
        self.zero_duty > 0
            && self.zero_duty < self.one_duty
            && self.one_duty <= 100
            && self.frequency > 0
    }

    /// Time on the wire for `len` LEDs, reset delay included
    ///
    /// Rounded up to the next microsecond, saturating for absurd lengths.
    pub const fn frame_duration(&self, len: usize) -> Duration {
        let bits = (len as u64).saturating_mul(BITS_PER_LED);
        let frequency = self.frequency as u64;
        if frequency == 0 {
            return Duration::from_micros(self.reset_delay_us as u64);
        }
        let data_us = bits.saturating_mul(1_000_000).div_ceil(frequency);
        Duration::from_micros(data_us.saturating_add(self.reset_delay_us as u64))
    }
}

/// Timing rows, indexed by [`ChipKind`] discriminant
const TIMINGS: [ChipTiming; 7] = [
    // WS2811: T0H 0.5us, T1H 1.2us
    ChipTiming::new(33, 66, 800_000, 55),
    // WS2812: T0H 0.35us, T1H 0.7us
    ChipTiming::new(33, 66, 800_000, 55),
    // WS2812B: T0H 0.35us, T1H 0.9us
    ChipTiming::new(33, 66, 800_000, 55),
    // WS2812B, 2017 revision: reset > 300us
    ChipTiming::new(33, 66, 800_000, 300),
    // WS2812S: T0H 0.4us, T1H 0.85us
    ChipTiming::new(33, 66, 800_000, 55),
    // WS2813: reset > 250us
    ChipTiming::new(33, 66, 800_000, 255),
    // WS2813B: T0H 0.25us, T1H 0.6us, reset > 280us
    ChipTiming::new(30, 70, 800_000, 280),
];

/// Supported LED chips
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ChipKind {
    Ws2811 = CHIP_ID_WS2811,
    Ws2812 = CHIP_ID_WS2812,
    Ws2812B = CHIP_ID_WS2812B,
    /// 2017 revision of the WS2812B with a longer latch time
    Ws2812B2017 = CHIP_ID_WS2812B_2017,
    Ws2812S = CHIP_ID_WS2812S,
    Ws2813 = CHIP_ID_WS2813,
    Ws2813B = CHIP_ID_WS2813B,
}

impl ChipKind {
    /// All known chips, in id order
    pub const ALL: [Self; 7] = [
        Self::Ws2811,
        Self::Ws2812,
        Self::Ws2812B,
        Self::Ws2812B2017,
        Self::Ws2812S,
        Self::Ws2813,
        Self::Ws2813B,
    ];

    pub const fn timing(self) -> ChipTiming {
        TIMINGS[self as usize]
    }

    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            CHIP_ID_WS2811 => Self::Ws2811,
            CHIP_ID_WS2812 => Self::Ws2812,
            CHIP_ID_WS2812B => Self::Ws2812B,
            CHIP_ID_WS2812B_2017 => Self::Ws2812B2017,
            CHIP_ID_WS2812S => Self::Ws2812S,
            CHIP_ID_WS2813 => Self::Ws2813,
            CHIP_ID_WS2813B => Self::Ws2813B,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ws2811 => CHIP_NAME_WS2811,
            Self::Ws2812 => CHIP_NAME_WS2812,
            Self::Ws2812B => CHIP_NAME_WS2812B,
            Self::Ws2812B2017 => CHIP_NAME_WS2812B_2017,
            Self::Ws2812S => CHIP_NAME_WS2812S,
            Self::Ws2813 => CHIP_NAME_WS2813,
            Self::Ws2813B => CHIP_NAME_WS2813B,
        }
    }

    /// Parse a chip name, ignoring ASCII case
    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
    }
}
