use crate::sdk::mcu::register::{
    GpioBase, PortBase, FLD_PORT_PCR, PORT_DFCR_CS_MASK, PORT_DFWR_FILT_MASK, PORT_PCR_MUX_SHIFT,
};
use crate::MASK_VAL;

/// Internal pull resistor selection. The discriminant is the PCR PS value.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PullConfig {
    PullDown = 0,
    PullUp = 1,
    NotEnabled = 2,
}

/// Pin mux selection (PCR MUX field).
///
/// `Disabled` is ALT0 (analog / pin disabled), `Gpio` is ALT1.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mux {
    Disabled = 0,
    Gpio = 1,
    Alt2 = 2,
    Alt3 = 3,
    Alt4 = 4,
    Alt5 = 5,
    Alt6 = 6,
    Alt7 = 7,
}

impl Mux {
    /// Decodes the low three bits of `mode`, the way the hardware field would.
    pub const fn from_bits(mode: u8) -> Self {
        match mode & 0x07 {
            0 => Mux::Disabled,
            1 => Mux::Gpio,
            2 => Mux::Alt2,
            3 => Mux::Alt3,
            4 => Mux::Alt4,
            5 => Mux::Alt5,
            6 => Mux::Alt6,
            _ => Mux::Alt7,
        }
    }

    /// Mux currently programmed in a pin control register value.
    pub const fn from_pcr(pcr: u32) -> Self {
        Self::from_bits(((pcr & FLD_PORT_PCR::MUX.bits()) >> PORT_PCR_MUX_SHIFT) as u8)
    }
}

/// Hardware pin direction.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinDirection {
    Disabled = 0,
    In = 1,
    Out = 2,
    /// Input with the input buffer disabled.
    HighZ = 3,
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriveStrength {
    Low = 0,
    High = 1,
}

/// PCR lock. A locked PCR keeps its value until the next reset.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LockRegister {
    Disabled = 0,
    Enabled = 1,
}

/// Half of a port addressed by a global pin control write.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GlobalControlPins {
    /// Pins 0..=15 (GPCLR)
    Lower = 0,
    /// Pins 16..=31 (GPCHR)
    Upper = 1,
}

/// Digital filter clock source (DFCR CS).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FilterClock {
    BusClock = 0,
    LpoClock = 1,
}

/// Full configuration of one used pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinSettingsConfig {
    pub port_base: PortBase,
    pub gpio_base: GpioBase,
    /// Pin number inside the port, below 32.
    pub pin_port_index: u32,
    pub pull_config: PullConfig,
    pub mux: Mux,
    pub direction: PinDirection,
    pub drive_strength: DriveStrength,
    pub lock_register: LockRegister,
    pub passive_filter: bool,
    pub digital_filter: bool,
    /// Output level driven before a GPIO output is enabled.
    pub init_value: u8,
}

impl PinSettingsConfig {
    /// Pin control register value for this configuration.
    ///
    /// Union of pull enable/select (only when a pull is requested), drive
    /// strength, lock, passive filter and mux.
    pub const fn pcr_value(&self) -> u32 {
        let mut pcr = 0u32;

        match self.pull_config {
            PullConfig::NotEnabled => {}
            pull => {
                pcr |= FLD_PORT_PCR::PE.bits();
                pcr |= MASK_VAL!(FLD_PORT_PCR::PS.bits(), 0, pull as u8);
            }
        }
        if matches!(self.drive_strength, DriveStrength::High) {
            pcr |= FLD_PORT_PCR::DSE.bits();
        }
        if matches!(self.lock_register, LockRegister::Enabled) {
            pcr |= FLD_PORT_PCR::LK.bits();
        }
        if self.passive_filter {
            pcr |= FLD_PORT_PCR::PFE.bits();
        }

        pcr | MASK_VAL!(FLD_PORT_PCR::MUX.bits(), PORT_PCR_MUX_SHIFT, self.mux as u8)
    }
}

/// Template applied to every pin that the configuration does not use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnusedPinConfig {
    /// Raw pin control register value.
    pub pcr: u32,
    pub direction: PinDirection,
    pub output_value: u8,
}

/// Port-wide digital filter setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitalFilterConfig {
    pub clock: FilterClock,
    /// Filter length in clock cycles, at most 0x1F.
    pub width: u8,
}

impl DigitalFilterConfig {
    pub const fn dfcr_value(&self) -> u32 {
        MASK_VAL!(PORT_DFCR_CS_MASK, 0, self.clock as u8)
    }

    pub const fn dfwr_value(&self) -> u32 {
        MASK_VAL!(PORT_DFWR_FILT_MASK, 0, self.width)
    }
}
