//! HDC1080 register map and configuration register bitfields.
//!
//! All registers are 16 bits wide and transferred most-significant byte
//! first. See section 8.6 of the [datasheet] for the full register map.
//!
//! [datasheet]: https://www.ti.com/lit/ds/symlink/hdc1080.pdf

use crate::types::{BatteryStatus, HumidityResolution, Mode, TemperatureResolution};

/// Bus address of the HDC1080, in the 8-bit form with the R/W bit clear.
///
/// The equivalent 7-bit address is `0x40`.
pub const ADDRESS: u8 = 0x80;

/// Value of the manufacturer ID register (ASCII "TI").
pub const MANUFACTURER_ID: u16 = 0x5449;

/// Value of the device ID register.
pub const DEVICE_ID: u16 = 0x1050;

/// Time the chip needs to settle after a software reset.
pub(crate) const RESET_SETTLE_MS: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    Temperature,
    Humidity,
    Configuration,
    SerialId0,
    SerialId1,
    SerialId2,
    ManufacturerId,
    DeviceId,
}

impl Register {
    /// Register pointer byte sent on the bus.
    pub const fn addr(self) -> u8 {
        match self {
            Register::Temperature => 0x00,
            Register::Humidity => 0x01,
            Register::Configuration => 0x02,
            Register::SerialId0 => 0xFB,
            Register::SerialId1 => 0xFC,
            Register::SerialId2 => 0xFD,
            Register::ManufacturerId => 0xFE,
            Register::DeviceId => 0xFF,
        }
    }
}

const RESET_SHIFT: u16 = 15;
const HEATER_SHIFT: u16 = 13;
const MODE_SHIFT: u16 = 12;
const BATTERY_SHIFT: u16 = 11;
const TEMPERATURE_RESOLUTION_SHIFT: u16 = 10;
const HUMIDITY_RESOLUTION_SHIFT: u16 = 8;

const ONE_BIT: u16 = 0b1;
const TWO_BITS: u16 = 0b11;

/// Contents of the configuration register (0x02).
///
/// Each `with_*` method clears only its own field before setting it, so
/// the remaining bits come through untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConfigRegister(pub u16);

impl ConfigRegister {
    const fn field(self, shift: u16, mask: u16) -> u16 {
        (self.0 >> shift) & mask
    }

    #[must_use]
    const fn with_field(self, shift: u16, mask: u16, value: u16) -> Self {
        Self((self.0 & !(mask << shift)) | ((value & mask) << shift))
    }

    /// Set bit 15, which starts a software reset once written.
    #[must_use]
    pub const fn with_software_reset(self) -> Self {
        self.with_field(RESET_SHIFT, ONE_BIT, 1)
    }

    pub const fn heater(self) -> bool {
        self.field(HEATER_SHIFT, ONE_BIT) == 1
    }

    #[must_use]
    pub const fn with_heater(self, enabled: bool) -> Self {
        self.with_field(HEATER_SHIFT, ONE_BIT, enabled as u16)
    }

    pub fn mode(self) -> Mode {
        Mode::from_bits(self.field(MODE_SHIFT, ONE_BIT))
    }

    #[must_use]
    pub const fn with_mode(self, mode: Mode) -> Self {
        self.with_field(MODE_SHIFT, ONE_BIT, mode.bits())
    }

    /// Bit 11 is read-only, so there is no corresponding setter.
    pub fn battery_status(self) -> BatteryStatus {
        BatteryStatus::from_bits(self.field(BATTERY_SHIFT, ONE_BIT))
    }

    pub fn temperature_resolution(self) -> TemperatureResolution {
        TemperatureResolution::from_bits(self.field(TEMPERATURE_RESOLUTION_SHIFT, ONE_BIT))
    }

    #[must_use]
    pub const fn with_temperature_resolution(self, resolution: TemperatureResolution) -> Self {
        self.with_field(TEMPERATURE_RESOLUTION_SHIFT, ONE_BIT, resolution.bits())
    }

    /// `None` if the field holds the reserved pattern `0b11`.
    pub fn humidity_resolution(self) -> Option<HumidityResolution> {
        HumidityResolution::from_bits(self.field(HUMIDITY_RESOLUTION_SHIFT, TWO_BITS))
    }

    #[must_use]
    pub const fn with_humidity_resolution(self, resolution: HumidityResolution) -> Self {
        self.with_field(HUMIDITY_RESOLUTION_SHIFT, TWO_BITS, resolution.bits())
    }
}
