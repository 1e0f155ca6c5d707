use crate::conversions::{humidity_reading_to_percent_rh, temperature_reading_to_celsius};
use crate::error::Error;
use crate::interface::Interface;
use crate::registers::{
    ADDRESS, ConfigRegister, DEVICE_ID, MANUFACTURER_ID, RESET_SETTLE_MS, Register,
};
use crate::types::{
    BatteryStatus, Config, HumidityResolution, Measurement, Mode, SerialId, TemperatureResolution,
};

type Result<T, B> = core::result::Result<T, Error<<B as Interface>::Error>>;

/// Driver for one HDC1080 on the bus provided by `B`.
///
/// The driver starts out uninitialised: call [`init`](Self::init) (or
/// [`init_with_config`](Self::init_with_config)) before anything else.
/// Until then, and after [`deinit`](Self::deinit), every device operation
/// returns [`Error::NotInitialized`] without touching the bus.
///
/// No register state is cached, so every getter reads from the device.
pub struct Hdc1080<B: Interface> {
    bus: B,
    initialized: bool,
}

impl<B: Interface> Hdc1080<B> {
    pub fn new(bus: B) -> Self {
        Self {
            bus,
            initialized: false,
        }
    }

    pub fn destroy(self) -> B {
        self.bus
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Check the chip's identity and reset it.
    ///
    /// Brings up the bus, checks the manufacturer and device IDs, then
    /// performs a software reset and waits 100ms for it to settle. If any
    /// step after bus init fails, the bus is deinitialised again before the
    /// error is returned.
    ///
    /// The driver is only initialised once the whole sequence succeeds, so a
    /// failed re-init leaves it uninitialised.
    pub fn init(&mut self) -> Result<(), B> {
        self.initialized = false;
        self.bus.init().inspect_err(|_| {
            error!("hdc1080: iic init failed");
        })?;

        if let Err(e) = self.identify_and_reset() {
            if self.bus.deinit().is_err() {
                warn!("hdc1080: iic deinit failed after aborted init");
            }
            return Err(e);
        }

        self.initialized = true;
        debug!("hdc1080: initialized");
        Ok(())
    }

    /// [`init`](Self::init), then apply `config`.
    ///
    /// Should applying the configuration fail, the driver is deinitialised
    /// and the configuration error returned.
    pub fn init_with_config(&mut self, config: &Config) -> Result<(), B> {
        self.init()?;
        if let Err(e) = self.configure(config) {
            if self.deinit().is_err() {
                warn!("hdc1080: deinit failed after configuration error");
            }
            return Err(e);
        }
        Ok(())
    }

    /// Release the bus and return to the uninitialised state.
    ///
    /// If the bus fails to deinitialise, the driver stays initialised.
    pub fn deinit(&mut self) -> Result<(), B> {
        self.ensure_initialized()?;
        self.bus.deinit().inspect_err(|_| {
            error!("hdc1080: iic deinit failed");
        })?;
        self.initialized = false;
        debug!("hdc1080: deinitialized");
        Ok(())
    }

    /// Reset the chip, then wait 100ms for it to settle.
    pub fn software_reset(&mut self) -> Result<(), B> {
        self.ensure_initialized()?;
        self.reset_and_settle()
    }

    /// Read the temperature, returning the raw code and degrees celsius.
    pub fn read_temperature(&mut self) -> Result<(u16, f32), B> {
        self.ensure_initialized()?;
        let raw = self.read_measurement(Register::Temperature)?;
        Ok((raw, temperature_reading_to_celsius(raw)))
    }

    /// Read the humidity, returning the raw code and percent relative humidity.
    pub fn read_humidity(&mut self) -> Result<(u16, f32), B> {
        self.ensure_initialized()?;
        let raw = self.read_measurement(Register::Humidity)?;
        Ok((raw, humidity_reading_to_percent_rh(raw)))
    }

    /// Read temperature and then humidity.
    ///
    /// Temperature is read first, matching the order the chip acquires
    /// them in [`Mode::Sequential`]. If either read fails, nothing is
    /// returned.
    pub fn read_temperature_humidity(&mut self) -> Result<Measurement, B> {
        self.ensure_initialized()?;
        let raw_temperature_reading = self.read_measurement(Register::Temperature)?;
        let raw_humidity_reading = self.read_measurement(Register::Humidity)?;
        Ok(Measurement {
            raw_temperature_reading,
            raw_humidity_reading,
        })
    }

    pub fn set_heater(&mut self, enabled: bool) -> Result<(), B> {
        self.update_config(|reg| reg.with_heater(enabled))
    }

    pub fn heater(&mut self) -> Result<bool, B> {
        Ok(self.config_register()?.heater())
    }

    pub fn set_mode(&mut self, mode: Mode) -> Result<(), B> {
        self.update_config(|reg| reg.with_mode(mode))
    }

    pub fn mode(&mut self) -> Result<Mode, B> {
        Ok(self.config_register()?.mode())
    }

    pub fn set_temperature_resolution(
        &mut self,
        resolution: TemperatureResolution,
    ) -> Result<(), B> {
        self.update_config(|reg| reg.with_temperature_resolution(resolution))
    }

    pub fn temperature_resolution(&mut self) -> Result<TemperatureResolution, B> {
        Ok(self.config_register()?.temperature_resolution())
    }

    pub fn set_humidity_resolution(&mut self, resolution: HumidityResolution) -> Result<(), B> {
        self.update_config(|reg| reg.with_humidity_resolution(resolution))
    }

    /// Fails with [`Error::ReservedFieldValue`] if the field holds `0b11`.
    pub fn humidity_resolution(&mut self) -> Result<HumidityResolution, B> {
        let reg = self.config_register()?;
        reg.humidity_resolution()
            .ok_or(Error::ReservedFieldValue(reg.0))
    }

    /// Whether the supply voltage is above or below 2.8V.
    pub fn battery_status(&mut self) -> Result<BatteryStatus, B> {
        Ok(self.config_register()?.battery_status())
    }

    /// Apply each setting in `config`, one register update per field.
    pub fn configure(&mut self, config: &Config) -> Result<(), B> {
        self.set_heater(config.heater)
            .inspect_err(|_| error!("hdc1080: set heater failed"))?;
        self.set_mode(config.mode)
            .inspect_err(|_| error!("hdc1080: set mode failed"))?;
        self.set_temperature_resolution(config.temperature_resolution)
            .inspect_err(|_| error!("hdc1080: set temperature resolution failed"))?;
        self.set_humidity_resolution(config.humidity_resolution)
            .inspect_err(|_| error!("hdc1080: set humidity resolution failed"))?;
        Ok(())
    }

    /// Current settings, from a single read of the configuration register.
    pub fn config(&mut self) -> Result<Config, B> {
        let reg = self.config_register()?;
        Ok(Config {
            heater: reg.heater(),
            mode: reg.mode(),
            temperature_resolution: reg.temperature_resolution(),
            humidity_resolution: reg
                .humidity_resolution()
                .ok_or(Error::ReservedFieldValue(reg.0))?,
        })
    }

    /// The whole configuration register, as read from the device.
    pub fn config_register(&mut self) -> Result<ConfigRegister, B> {
        self.ensure_initialized()?;
        self.read_config()
    }

    pub fn serial_id(&mut self) -> Result<SerialId, B> {
        self.ensure_initialized()?;
        let mut id = [0u8; 6];
        let registers = [Register::SerialId0, Register::SerialId1, Register::SerialId2];
        for (chunk, register) in id.chunks_exact_mut(2).zip(registers) {
            let value = self.read_register(register.addr()).inspect_err(|_| {
                error!("hdc1080: read serial id failed");
            })?;
            chunk.copy_from_slice(&value.to_be_bytes());
        }
        Ok(SerialId(id))
    }

    /// Read any register by address.
    pub fn raw_register(&mut self, register: u8) -> Result<u16, B> {
        self.ensure_initialized()?;
        Ok(self.read_register(register)?)
    }

    /// Write any register by address.
    pub fn set_raw_register(&mut self, register: u8, value: u16) -> Result<(), B> {
        self.ensure_initialized()?;
        Ok(self.write_register(register, value)?)
    }

    fn ensure_initialized(&self) -> Result<(), B> {
        if self.initialized {
            Ok(())
        } else {
            Err(Error::NotInitialized)
        }
    }

    fn identify_and_reset(&mut self) -> Result<(), B> {
        let id = self
            .read_register(Register::ManufacturerId.addr())
            .inspect_err(|_| error!("hdc1080: read manufacturer id failed"))?;
        if id != MANUFACTURER_ID {
            error!("hdc1080: manufacturer id {:#x} is invalid", id);
            return Err(Error::ManufacturerIdMismatch(id));
        }

        let id = self
            .read_register(Register::DeviceId.addr())
            .inspect_err(|_| error!("hdc1080: read device id failed"))?;
        if id != DEVICE_ID {
            error!("hdc1080: device id {:#x} is invalid", id);
            return Err(Error::DeviceIdMismatch(id));
        }

        self.reset_and_settle()
    }

    fn reset_and_settle(&mut self) -> Result<(), B> {
        let reg = self.read_config()?;
        self.write_config(reg.with_software_reset())?;
        self.bus.delay_ms(RESET_SETTLE_MS);
        trace!("hdc1080: software reset complete");
        Ok(())
    }

    fn update_config(&mut self, f: impl FnOnce(ConfigRegister) -> ConfigRegister) -> Result<(), B> {
        self.ensure_initialized()?;
        let reg = self.read_config()?;
        self.write_config(f(reg))
    }

    fn read_config(&mut self) -> Result<ConfigRegister, B> {
        let value = self
            .read_register(Register::Configuration.addr())
            .inspect_err(|_| error!("hdc1080: read config failed"))?;
        Ok(ConfigRegister(value))
    }

    fn write_config(&mut self, reg: ConfigRegister) -> Result<(), B> {
        self.write_register(Register::Configuration.addr(), reg.0)
            .inspect_err(|_| error!("hdc1080: write config failed"))?;
        Ok(())
    }

    fn read_measurement(&mut self, register: Register) -> Result<u16, B> {
        let mut buf = [0u8; 2];
        self.bus
            .read_with_wait(ADDRESS, register.addr(), &mut buf)
            .inspect_err(|_| error!("hdc1080: read {:?} failed", register))?;
        Ok(u16::from_be_bytes(buf))
    }

    fn read_register(&mut self, register: u8) -> core::result::Result<u16, B::Error> {
        let mut buf = [0u8; 2];
        self.bus.read(ADDRESS, register, &mut buf)?;
        Ok(u16::from_be_bytes(buf))
    }

    fn write_register(&mut self, register: u8, value: u16) -> core::result::Result<(), B::Error> {
        self.bus.write(ADDRESS, register, &value.to_be_bytes())
    }
}
