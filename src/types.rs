/// Acquisition mode, bit 12 of the configuration register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Temperature or humidity is acquired, depending on the register read.
    Or,
    /// Temperature and humidity are acquired in sequence, temperature first.
    Sequential,
}

impl Mode {
    pub(crate) const fn bits(self) -> u16 {
        match self {
            Mode::Or => 0,
            Mode::Sequential => 1,
        }
    }

    pub(crate) fn from_bits(bits: u16) -> Self {
        if bits == 0 { Mode::Or } else { Mode::Sequential }
    }
}

/// Temperature measurement resolution, bit 10 of the configuration register.
///
/// Conversion takes 6.35ms at 14 bits and 3.65ms at 11 bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TemperatureResolution {
    Bits14,
    Bits11,
}

impl TemperatureResolution {
    pub(crate) const fn bits(self) -> u16 {
        match self {
            TemperatureResolution::Bits14 => 0,
            TemperatureResolution::Bits11 => 1,
        }
    }

    pub(crate) fn from_bits(bits: u16) -> Self {
        if bits == 0 {
            TemperatureResolution::Bits14
        } else {
            TemperatureResolution::Bits11
        }
    }
}

/// Humidity measurement resolution, bits 9:8 of the configuration register.
///
/// Conversion takes 6.5ms at 14 bits, 3.85ms at 11 bits and 2.5ms at 8 bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HumidityResolution {
    Bits14,
    Bits11,
    Bits8,
}

impl HumidityResolution {
    pub(crate) const fn bits(self) -> u16 {
        match self {
            HumidityResolution::Bits14 => 0b00,
            HumidityResolution::Bits11 => 0b01,
            HumidityResolution::Bits8 => 0b10,
        }
    }

    pub(crate) fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            0b00 => Some(HumidityResolution::Bits14),
            0b01 => Some(HumidityResolution::Bits11),
            0b10 => Some(HumidityResolution::Bits8),
            _ => None,
        }
    }
}

/// Supply voltage status reported in (read-only) bit 11.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BatteryStatus {
    /// Supply voltage above 2.8V.
    Above2V8,
    /// Supply voltage below 2.8V.
    Below2V8,
}

impl BatteryStatus {
    pub(crate) fn from_bits(bits: u16) -> Self {
        if bits == 0 {
            BatteryStatus::Above2V8
        } else {
            BatteryStatus::Below2V8
        }
    }
}

/// Settings held in the configuration register.
///
/// The default matches the chip's recommended setup for combined readings:
/// heater off, sequential acquisition and 14-bit resolution throughout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub heater: bool,
    pub mode: Mode,
    pub temperature_resolution: TemperatureResolution,
    pub humidity_resolution: HumidityResolution,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            heater: false,
            mode: Mode::Sequential,
            temperature_resolution: TemperatureResolution::Bits14,
            humidity_resolution: HumidityResolution::Bits14,
        }
    }
}

/// Raw temperature and humidity codes from a combined reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement {
    pub raw_temperature_reading: u16,
    pub raw_humidity_reading: u16,
}

impl Measurement {
    pub fn celsius(&self) -> f32 {
        crate::conversions::temperature_reading_to_celsius(self.raw_temperature_reading)
    }

    pub fn fahrenheit(&self) -> f32 {
        crate::conversions::temperature_reading_to_fahrenheit(self.raw_temperature_reading)
    }

    pub fn humidity(&self) -> f32 {
        crate::conversions::humidity_reading_to_percent_rh(self.raw_humidity_reading)
    }

    #[cfg(feature = "fixed")]
    pub fn celsius_fixed_point(&self) -> fixed::types::I16F16 {
        use crate::conversions::fixed_point::temperature_reading_to_celsius;
        temperature_reading_to_celsius(self.raw_temperature_reading)
    }

    #[cfg(feature = "fixed")]
    pub fn humidity_fixed_point(&self) -> fixed::types::I16F16 {
        crate::conversions::fixed_point::humidity_reading_to_percent_rh(self.raw_humidity_reading)
    }
}

/// The factory serial ID, as the six bytes read from registers 0xFB-0xFD.
///
/// Byte order is `id0..id5`, each register contributing its MSB then LSB.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SerialId(pub [u8; 6]);

impl SerialId {
    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }

    /// The six bytes read as one big-endian integer.
    pub fn to_u64(&self) -> u64 {
        let [a, b, c, d, e, f] = self.0;
        u64::from_be_bytes([0, 0, a, b, c, d, e, f])
    }
}

/// Static description of the chip and this driver.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChipInfo {
    pub chip_name: &'static str,
    pub manufacturer_name: &'static str,
    pub interface: &'static str,
    pub supply_voltage_min_v: f32,
    pub supply_voltage_max_v: f32,
    pub max_current_ma: f32,
    pub temperature_min: f32,
    pub temperature_max: f32,
    /// Encoded as `major * 1000 + minor * 100`.
    pub driver_version: u32,
}

/// Chip details from the datasheet. Needs no device access.
pub const fn info() -> ChipInfo {
    ChipInfo {
        chip_name: "Texas Instruments HDC1080",
        manufacturer_name: "Texas Instruments",
        interface: "IIC",
        supply_voltage_min_v: 2.7,
        supply_voltage_max_v: 5.5,
        max_current_ma: 7.2,
        temperature_min: -40.0,
        temperature_max: 125.0,
        driver_version: 1000,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn serial_id_as_integer() {
        let id = SerialId([0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);
        assert_eq!(id.to_u64(), 0x0102_0304_0506);
        assert_eq!(id.as_bytes(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn measurement_conversions() {
        let m = Measurement {
            raw_temperature_reading: 0x8000,
            raw_humidity_reading: 0x8000,
        };
        assert_eq!(m.celsius(), 42.5);
        assert_eq!(m.humidity(), 50.0);
        assert!((m.fahrenheit() - 108.5).abs() < 0.001);
    }

    #[test]
    fn chip_info() {
        let info = info();
        assert_eq!(info.chip_name, "Texas Instruments HDC1080");
        assert_eq!(info.interface, "IIC");
        assert_eq!(info.driver_version, 1000);
        assert_eq!(info.supply_voltage_max_v, 5.5);
    }

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(!config.heater);
        assert_eq!(config.mode, Mode::Sequential);
        assert_eq!(config.humidity_resolution, HumidityResolution::Bits14);
    }
}
