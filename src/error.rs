/// Errors returned by the driver, generic over the bus error type.
#[derive(Debug)]
pub enum Error<I2cError>
where
    I2cError: embedded_hal::i2c::Error,
{
    /// The driver has not been initialised, or has since been deinitialised.
    NotInitialized,
    /// A bus transaction (init, deinit, read or write) failed.
    I2c(I2cError),
    /// The manufacturer ID register did not read `0x5449`.
    ManufacturerIdMismatch(u16),
    /// The device ID register did not read `0x1050`.
    DeviceIdMismatch(u16),
    /// The humidity resolution field held the reserved value `0b11`.
    /// Carries the full configuration register as read.
    ReservedFieldValue(u16),
}

/// Broad category of an [`Error`], independent of the bus error type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorKind {
    NotInitialized,
    Io,
    IdentityMismatch,
    InvalidValue,
}

impl<I2cError> Error<I2cError>
where
    I2cError: embedded_hal::i2c::Error,
{
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotInitialized => ErrorKind::NotInitialized,
            Error::I2c(_) => ErrorKind::Io,
            Error::ManufacturerIdMismatch(_) | Error::DeviceIdMismatch(_) => {
                ErrorKind::IdentityMismatch
            }
            Error::ReservedFieldValue(_) => ErrorKind::InvalidValue,
        }
    }
}

impl<I2cError> From<I2cError> for Error<I2cError>
where
    I2cError: embedded_hal::i2c::Error,
{
    fn from(value: I2cError) -> Self {
        Error::I2c(value)
    }
}

impl<I2cError> core::fmt::Display for Error<I2cError>
where
    I2cError: embedded_hal::i2c::Error,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::NotInitialized => write!(f, "HDC1080 driver is not initialized"),
            Error::I2c(e) => write!(f, "Received I2C error: {:?}", e),
            Error::ManufacturerIdMismatch(id) => {
                write!(f, "Unexpected manufacturer ID {id:#06x}, expected 0x5449")
            }
            Error::DeviceIdMismatch(id) => {
                write!(f, "Unexpected device ID {id:#06x}, expected 0x1050")
            }
            Error::ReservedFieldValue(reg) => {
                write!(f, "Reserved humidity resolution in configuration {reg:#06x}")
            }
        }
    }
}

impl<I> core::error::Error for Error<I> where I: embedded_hal::i2c::Error {}
