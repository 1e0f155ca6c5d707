//! Bus transport used by the driver.
//!
//! [`Interface`] is the set of blocking operations the driver needs from the
//! platform. Most users will want [`I2cInterface`], which provides them on top
//! of any `embedded-hal` I2C bus and delay. Implement [`Interface`] directly
//! if your platform needs to power the bus up and down in `init` and `deinit`,
//! or waits for conversions some other way.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{I2c, SevenBitAddress};

/// Platform operations required by the [`Hdc1080`](crate::Hdc1080) driver.
///
/// The `address` passed to the read and write methods is the 8-bit form
/// ([`ADDRESS`](crate::registers::ADDRESS), `0x80`).
pub trait Interface {
    type Error: embedded_hal::i2c::Error;

    /// Prepare the bus for use. Called once at the start of driver init.
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Release the bus. Called by driver deinit, and when init fails
    /// after the bus has been prepared.
    fn deinit(&mut self) -> Result<(), Self::Error>;

    /// Read `buf.len()` bytes from `register`.
    fn read(&mut self, address: u8, register: u8, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Read `buf.len()` bytes from a measurement `register`, waiting for the
    /// conversion triggered by addressing it to complete.
    fn read_with_wait(
        &mut self,
        address: u8,
        register: u8,
        buf: &mut [u8],
    ) -> Result<(), Self::Error>;

    /// Write `buf` to `register`. Registers are 16 bits wide, so `buf`
    /// holds at most two bytes.
    fn write(&mut self, address: u8, register: u8, buf: &[u8]) -> Result<(), Self::Error>;

    fn delay_ms(&mut self, ms: u32);
}

/// Sum of the 14-bit temperature (6.35ms) and humidity (6.5ms) conversion
/// times from section 7.5 of the datasheet, rounded up.
pub const DEFAULT_CONVERSION_DELAY_US: u32 = 15_000;

/// [`Interface`] over an `embedded-hal` I2C bus and delay provider.
pub struct I2cInterface<I: I2c, D: DelayNs> {
    i2c: I,
    delay: D,
    pub conversion_delay_us: u32,
}

impl<I: I2c, D: DelayNs> I2cInterface<I, D> {
    pub fn new(i2c: I, delay: D) -> Self {
        Self {
            i2c,
            delay,
            conversion_delay_us: DEFAULT_CONVERSION_DELAY_US,
        }
    }

    /// Use a shorter wait before reading measurements, for example when
    /// running at reduced resolution.
    pub fn with_conversion_delay_us(mut self, us: u32) -> Self {
        self.conversion_delay_us = us;
        self
    }

    pub fn release(self) -> (I, D) {
        (self.i2c, self.delay)
    }

    fn seven_bit(address: u8) -> SevenBitAddress {
        address >> 1
    }
}

impl<I: I2c, D: DelayNs> Interface for I2cInterface<I, D> {
    type Error = I::Error;

    fn init(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn deinit(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn read(&mut self, address: u8, register: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.write_read(Self::seven_bit(address), &[register], buf)
    }

    fn read_with_wait(
        &mut self,
        address: u8,
        register: u8,
        buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        // The device NACKs reads until the conversion finishes, so the pointer
        // write and the read have to be separate transactions.
        let address = Self::seven_bit(address);
        self.i2c.write(address, &[register])?;
        self.delay.delay_us(self.conversion_delay_us);
        self.i2c.read(address, buf)
    }

    fn write(&mut self, address: u8, register: u8, buf: &[u8]) -> Result<(), Self::Error> {
        debug_assert!(buf.len() <= 2, "HDC1080 registers are two bytes wide");
        let mut frame = [register, 0, 0];
        let data = &buf[..buf.len().min(2)];
        frame[1..=data.len()].copy_from_slice(data);
        self.i2c.write(Self::seven_bit(address), &frame[..=data.len()])
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
