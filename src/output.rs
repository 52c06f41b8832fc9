//! LED output drivers

use smart_leds::SmartLedsWrite;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::Rgb;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame scheduler is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strips
    fn write(&mut self, colors: &[Rgb]);
}

/// Output driver for any `smart-leds` writer
///
/// Write errors are dropped; the next frame simply tries again.
pub struct SmartLedsOutput<W> {
    writer: W,
}

impl<W> SmartLedsOutput<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub const fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsOutput<W>
where
    W: SmartLedsWrite<Color = Rgb>,
    W::Error: core::fmt::Debug,
{
    fn write(&mut self, colors: &[Rgb]) {
        if let Err(err) = self.writer.write(colors.iter().copied()) {
            #[cfg(feature = "esp32-log")]
            println!("[SmartLedsOutput.write] failed to flush frame: {:?}", err);
            #[cfg(not(feature = "esp32-log"))]
            let _ = err;
        }
    }
}
