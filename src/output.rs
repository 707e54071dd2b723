//! Pattern output abstraction
//!
//! The driver only produces bytes. Turning them into a waveform (one PWM
//! cycle per bit, MSB first, followed by the reset low time) is the job of
//! the platform output, usually a PWM peripheral fed by DMA.

/// Waveform parameters the output is configured with once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternConfig {
    /// Bytes per frame (three per LED)
    pub bytes: usize,
    /// Bit frequency in Hz
    pub frequency: u32,
    /// Low time after each frame, in microseconds
    pub reset_delay_us: u32,
    /// High time of a `0` bit, percent of the bit period
    pub zero_duty: u8,
    /// High time of a `1` bit, percent of the bit period
    pub one_duty: u8,
}

/// Hardware capable of sending a byte pattern as a PWM waveform
///
/// Implement this trait to support different hardware platforms.
/// The driver is generic over this trait.
pub trait PatternOutput {
    type Error: core::fmt::Debug;

    /// Prepare the peripheral for frames described by `config`
    fn configure(&mut self, config: &PatternConfig) -> Result<(), Self::Error>;

    /// Start sending a frame
    ///
    /// Must not block until the frame is on the wire.
    fn submit<I>(&mut self, bytes: I) -> Result<(), Self::Error>
    where
        I: Iterator<Item = u8>;

    /// Block until the last submitted frame has been sent
    fn wait(&mut self) -> Result<(), Self::Error>;

    /// Check if a frame is still being sent
    fn is_busy(&self) -> bool;

    /// Free pattern buffers and other protocol resources
    fn release(&mut self);
}
