//! Sensor readings to celsius, fahrenheit and percent relative humidity.
//!
//! These functions are used by the methods on [`Measurement`] and by the
//! `read_*` methods of the driver, but are provided here should you want
//! to convert raw codes yourself.
//!
//! The conversion formulas are given in sections 8.6.1 and 8.6.2 of the
//! [datasheet]. Note that the HDC1080 divides by 2^16, not 2^16 - 1, so the
//! maximum raw code falls slightly short of the top of each range.
//!
//! With the `fixed` feature, the [`fixed_point`] submodule offers the same
//! conversions without floating-point arithmetic.
//!
//! [`Measurement`]: crate::types::Measurement
//! [datasheet]: https://www.ti.com/lit/ds/symlink/hdc1080.pdf

/// Convert the raw temperature reading to celsius.
///
/// Covers -40°C (raw 0) up to just under 125°C (raw 0xFFFF).
pub fn temperature_reading_to_celsius(reading: u16) -> f32 {
    let s_t: f32 = reading.into();
    s_t / 65_536.0 * 165.0 - 40.0
}

/// Convert the raw temperature reading to fahrenheit.
pub fn temperature_reading_to_fahrenheit(reading: u16) -> f32 {
    temperature_reading_to_celsius(reading) * 1.8 + 32.0
}

/// Convert the raw humidity reading to percent relative humidity.
pub fn humidity_reading_to_percent_rh(reading: u16) -> f32 {
    let s_rh: f32 = reading.into();
    s_rh / 65_536.0 * 100.0
}

/// Fixed-point numeric conversions from sensor readings.
///
/// A raw reading divided by 2^16 is exactly its value as a `U0F16`-style
/// fraction, so shifting the reading into the fractional half of an
/// `I16F16` avoids any rounding before the scale and offset are applied.
#[cfg(feature = "fixed")]
pub mod fixed_point {
    use fixed::types::I16F16;

    fn fraction(reading: u16) -> I16F16 {
        I16F16::from_bits(i32::from(reading))
    }

    /// Convert the raw temperature reading to celsius.
    pub fn temperature_reading_to_celsius(reading: u16) -> I16F16 {
        fraction(reading) * I16F16::from_num(165) - I16F16::from_num(40)
    }

    /// Convert the raw humidity reading to percent relative humidity.
    pub fn humidity_reading_to_percent_rh(reading: u16) -> I16F16 {
        fraction(reading) * I16F16::from_num(100)
    }

    #[cfg(test)]
    mod test {
        use super::*;

        #[test]
        fn fixed_midpoints() {
            assert_eq!(temperature_reading_to_celsius(0x8000), I16F16::from_num(42.5));
            assert_eq!(humidity_reading_to_percent_rh(0x8000), I16F16::from_num(50));
            assert_eq!(temperature_reading_to_celsius(0), I16F16::from_num(-40));
        }
    }
}
