use crate::sdk::drivers::port_hw_types::{PinDirection, PinSettingsConfig, UnusedPinConfig};

/// Index of a pin in the configured pin list.
pub type PortPinType = u32;

/// Pin mode, the value programmed into the PCR mux field.
pub type PortPinModeType = u8;

/// Pin direction as seen by users of the driver.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PortPinDirection {
    Disabled = 0,
    In = 1,
    Out = 2,
}

impl From<PortPinDirection> for PinDirection {
    /// Anything but output configures the pin as an input.
    fn from(direction: PortPinDirection) -> Self {
        match direction {
            PortPinDirection::Out => PinDirection::Out,
            PortPinDirection::In | PortPinDirection::Disabled => PinDirection::In,
        }
    }
}

/// Driver-level view of one used pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinConfig {
    /// Pad id, `port * 32 + pin`.
    pub pin: u16,
    /// PCR value programmed by Init.
    pub pin_control_register: u32,
    pub output_value: u8,
    /// Direction restored by RefreshPortDirection.
    pub direction: PortPinDirection,
    pub is_gpio_mode: bool,
    pub direction_changeable: bool,
    pub mode_changeable: bool,
}

/// Complete driver configuration, produced by the configuration generator.
///
/// `used_pad_config` and `ip_config` describe the same pins in the same order;
/// index `n` of either is pin id `n` of the driver API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortConfig {
    pub num_pins: u16,
    pub num_unused_pins: u16,
    pub unused_pads: Option<&'static [u16]>,
    pub unused_pad_config: Option<&'static UnusedPinConfig>,
    pub used_pad_config: &'static [PinConfig],
    pub ip_config: Option<&'static [PinSettingsConfig]>,
}

/// Module identification returned by GetVersionInfo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StdVersionInfo {
    pub vendor_id: u16,
    pub module_id: u16,
    pub sw_major_version: u8,
    pub sw_minor_version: u8,
    pub sw_patch_version: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_mapping() {
        assert_eq!(PinDirection::from(PortPinDirection::Out), PinDirection::Out);
        assert_eq!(PinDirection::from(PortPinDirection::In), PinDirection::In);
        assert_eq!(PinDirection::from(PortPinDirection::Disabled), PinDirection::In);
    }
}
