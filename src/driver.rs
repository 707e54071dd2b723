//! WS281x strip driver
//!
//! Owns the pixel buffer and turns it into wire bytes for a [`PatternOutput`].

#[cfg(feature = "esp32-log")]
use esp_println::println;

use embassy_time::Duration;
use heapless::Vec;

use crate::chip::{ChipKind, ChipTiming};
use crate::color::{Rgb, grb_bytes, rgb_from_u32};
use crate::error::Error;
use crate::layout::Layout;
use crate::output::{PatternConfig, PatternOutput};

/// Bytes sent per LED
pub const BYTES_PER_LED: usize = 3;

/// Transmission state of a driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// No frame on the wire
    Idle,
    /// A frame was submitted and the output is still sending it
    TransmitPending,
}

/// Encode colors into wire bytes, GRB per LED
pub fn encode(pixels: &[Rgb]) -> impl Iterator<Item = u8> + '_ {
    pixels.iter().flat_map(|color| grb_bytes(*color))
}

/// WS281x strip driver
///
/// `MAX_LEDS` is the buffer capacity; the actual strip length is chosen at
/// construction and never changes.
pub struct Ws281x<'a, O: PatternOutput, const MAX_LEDS: usize> {
    // External dependencies and configuration
    output: &'a mut O,
    timing: ChipTiming,

    // Internal state
    pixels: Vec<Rgb, MAX_LEDS>,
    pending: bool,
}

impl<'a, O: PatternOutput, const MAX_LEDS: usize> Ws281x<'a, O, MAX_LEDS> {
    /// Create a driver for `len` LEDs of the given chip
    ///
    /// Configures the output with the chip timing.
    pub fn new(output: &'a mut O, kind: ChipKind, len: usize) -> Result<Self, Error<O::Error>> {
        Self::with_timing(output, kind.timing(), len)
    }

    /// Create a driver with explicit timing
    pub fn with_timing(
        output: &'a mut O,
        timing: ChipTiming,
        len: usize,
    ) -> Result<Self, Error<O::Error>> {
        if len == 0 {
            return Err(Error::Empty);
        }
        if len > MAX_LEDS {
            return Err(Error::Capacity { len, max: MAX_LEDS });
        }
        if !timing.is_valid() {
            return Err(Error::InvalidTiming);
        }

        let mut pixels: Vec<Rgb, MAX_LEDS> = Vec::new();
        pixels
            .resize(len, Rgb::default())
            .map_err(|()| Error::Capacity { len, max: MAX_LEDS })?;

        let config = PatternConfig {
            bytes: len * BYTES_PER_LED,
            frequency: timing.frequency,
            reset_delay_us: timing.reset_delay_us,
            zero_duty: timing.zero_duty,
            one_duty: timing.one_duty,
        };
        #[cfg(feature = "esp32-log")]
        println!("[Ws281x.new] configuring output: {:?}", config);
        output.configure(&config).map_err(Error::Output)?;

        Ok(Self {
            output,
            timing,
            pixels,
            pending: false,
        })
    }

    /// Number of LEDs in the strip
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Always `false`, a driver can not be created for an empty strip
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub const fn timing(&self) -> ChipTiming {
        self.timing
    }

    /// Time needed to send one frame, reset delay included
    ///
    /// Upper bound for [`Self::wait`] after a [`Self::transmit`].
    pub fn frame_duration(&self) -> Duration {
        self.timing.frame_duration(self.pixels.len())
    }

    pub fn state(&self) -> DriverState {
        if self.pending && self.output.is_busy() {
            DriverState::TransmitPending
        } else {
            DriverState::Idle
        }
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn pixel(&self, index: usize) -> Option<Rgb> {
        self.pixels.get(index).copied()
    }

    /// Set a LED by its position on the strip
    pub fn set_pixel(&mut self, index: usize, r: u8, g: u8, b: u8) -> Result<(), Error<O::Error>> {
        self.set_color(index, Rgb::new(r, g, b))
    }

    /// Set a LED by its position on the strip
    pub fn set_color(&mut self, index: usize, color: Rgb) -> Result<(), Error<O::Error>> {
        let len = self.pixels.len();
        let pixel = self
            .pixels
            .get_mut(index)
            .ok_or(Error::OutOfBounds { index, len })?;
        *pixel = color;
        Ok(())
    }

    /// Replace all LED colors
    ///
    /// The buffer is left untouched if the lengths differ.
    pub fn set_all(&mut self, colors: &[Rgb]) -> Result<(), Error<O::Error>> {
        self.check_length(colors.len())?;
        self.pixels.copy_from_slice(colors);
        Ok(())
    }

    /// Replace all LED colors from packed `0xRRGGBB` values
    pub fn set_all_packed(&mut self, colors: &[u32]) -> Result<(), Error<O::Error>> {
        self.check_length(colors.len())?;
        for (pixel, color) in self.pixels.iter_mut().zip(colors) {
            *pixel = rgb_from_u32(*color);
        }
        Ok(())
    }

    /// Set a LED of a row-major matrix, where each row starts at `y * width`
    pub fn set_pixel_matrix(
        &mut self,
        x: usize,
        y: usize,
        width: usize,
        r: u8,
        g: u8,
        b: u8,
    ) -> Result<(), Error<O::Error>> {
        self.set_at(Layout::RowMajor, x, y, width, Rgb::new(r, g, b))
    }

    /// Set a LED of a serpentine matrix, where odd rows run backwards
    pub fn set_pixel_serpentine(
        &mut self,
        x: usize,
        y: usize,
        width: usize,
        r: u8,
        g: u8,
        b: u8,
    ) -> Result<(), Error<O::Error>> {
        self.set_at(Layout::Serpentine, x, y, width, Rgb::new(r, g, b))
    }

    /// Set a LED of a matrix wired as `layout`
    pub fn set_at(
        &mut self,
        layout: Layout,
        x: usize,
        y: usize,
        width: usize,
        color: Rgb,
    ) -> Result<(), Error<O::Error>> {
        let pixel = layout
            .index(x, y, width)
            .and_then(|index| self.pixels.get_mut(index))
            .ok_or(Error::InvalidPosition { x, y })?;
        *pixel = color;
        Ok(())
    }

    /// Set all LEDs to one color
    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Turn all LEDs off
    pub fn clear(&mut self) {
        self.fill(Rgb::default());
    }

    /// Current buffer in wire order
    pub fn wire_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        encode(&self.pixels)
    }

    /// Start sending the current buffer
    ///
    /// Returns as soon as the output accepted the frame. Fails with
    /// [`Error::Busy`] if the previous frame is still on the wire. A previous
    /// frame that already finished is waited for first, and its failure is
    /// returned instead of sending.
    pub fn transmit(&mut self) -> Result<(), Error<O::Error>> {
        if self.pending {
            if self.output.is_busy() {
                #[cfg(feature = "esp32-log")]
                println!("[Ws281x.transmit] previous frame is still being sent");
                return Err(Error::Busy);
            }
            // Collect the finished frame so its error is not lost
            self.wait()?;
        }

        #[cfg(feature = "esp32-log")]
        println!("[Ws281x.transmit] sending {} LEDs", self.pixels.len());
        self.output
            .submit(encode(&self.pixels))
            .map_err(Error::Output)?;
        self.pending = true;
        Ok(())
    }

    /// Block until the last frame has been sent
    ///
    /// Does nothing if no frame is pending.
    pub fn wait(&mut self) -> Result<(), Error<O::Error>> {
        if !self.pending {
            return Ok(());
        }
        self.pending = false;
        self.output.wait().map_err(Error::Output)
    }

    /// Release the output resources
    ///
    /// Waits for a pending frame first. The output is released even if that
    /// wait fails.
    pub fn release(mut self) -> Result<(), Error<O::Error>> {
        let result = self.wait();
        #[cfg(feature = "esp32-log")]
        println!("[Ws281x.release] releasing output");
        self.output.release();
        result
    }

    fn check_length(&self, actual: usize) -> Result<(), Error<O::Error>> {
        let expected = self.pixels.len();
        if actual != expected {
            return Err(Error::LengthMismatch { expected, actual });
        }
        Ok(())
    }
}
