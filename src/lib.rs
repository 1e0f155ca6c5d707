//! no-std driver for the Texas Instruments HDC1080 temperature and humidity
//! sensor, built on [`embedded-hal`] 1.0.
//!
//! ```rust,ignore
//! use hdc1080_rjw::{Hdc1080, I2cInterface};
//!
//! let mut sensor = Hdc1080::new(I2cInterface::new(i2c, delay));
//! sensor.init_with_config(&Default::default())?;
//!
//! let measurement = sensor.read_temperature_humidity()?;
//! println!("{}°C\t{} %RH", measurement.celsius(), measurement.humidity());
//!
//! sensor.deinit()?;
//! ```
//!
//! ## Features
//!
//! - `defmt`: log through `defmt` and derive `defmt::Format` for public types.
//! - `log`: log through the `log` facade. Mutually exclusive with `defmt`.
//! - `fixed`: fixed-point conversions in [`conversions::fixed_point`].
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal/1.0.0
#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod blocking;
pub mod conversions;
pub mod error;
pub mod interface;
pub mod registers;
pub mod types;

pub use blocking::Hdc1080;
pub use error::{Error, ErrorKind};
pub use interface::{I2cInterface, Interface};
pub use types::info;
