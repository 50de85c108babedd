use core::fmt;
use num_derive::FromPrimitive;

/// Development errors reported by the PORT driver.
///
/// The discriminants are the error ids passed to the reporting hook.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PortError {
    /// Pin id outside the configured range.
    ParamPin = 0x0A,
    /// Direction change requested on a pin configured with a fixed direction.
    DirectionUnchangeable = 0x0B,
    /// Init called with a configuration argument the build variant does not expect.
    InitFailed = 0x0C,
    /// Pin mode outside 0..=7.
    ParamInvalidMode = 0x0D,
    /// Mode change requested on a pin configured with a fixed mode.
    ModeUnchangeable = 0x0E,
    /// Service called before a successful Init.
    Uninit = 0x0F,
    /// Missing output pointer.
    ParamPointer = 0x10,
    /// Configuration data is missing or inconsistent.
    ParamConfig = 0xF0,
}

impl PortError {
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for PortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortError::ParamPin => write!(f, "invalid pin id"),
            PortError::DirectionUnchangeable => write!(f, "pin direction is not changeable"),
            PortError::InitFailed => write!(f, "invalid configuration argument for this build variant"),
            PortError::ParamInvalidMode => write!(f, "invalid pin mode"),
            PortError::ModeUnchangeable => write!(f, "pin mode is not changeable"),
            PortError::Uninit => write!(f, "driver not initialised"),
            PortError::ParamPointer => write!(f, "null output pointer"),
            PortError::ParamConfig => write!(f, "invalid configuration data"),
        }
    }
}

/// Service ids of the driver API.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ApiId {
    Init = 0x00,
    SetPinDirection = 0x01,
    RefreshPortDirection = 0x02,
    GetVersionInfo = 0x03,
    SetPinMode = 0x04,
    SetAsUnusedPin = 0x05,
    SetAsUsedPin = 0x06,
    ResetPinMode = 0x07,
}

impl ApiId {
    pub const fn id(self) -> u8 {
        self as u8
    }
}

pub type PortResult<T> = Result<T, PortError>;
