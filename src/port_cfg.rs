//! Pin configuration of the S32K144 evaluation board (variant VS_0).
//!
//! Generated data: three RGB LED outputs on port D, the two push buttons on
//! port C and a handful of unconnected pads parked as pulled-down inputs.

use crate::config::{
    PORT_AR_RELEASE_MAJOR_VERSION, PORT_AR_RELEASE_MINOR_VERSION, PORT_AR_RELEASE_REVISION_VERSION,
    PORT_SW_MAJOR_VERSION, PORT_SW_MINOR_VERSION, PORT_SW_PATCH_VERSION, PORT_VENDOR_ID,
};
use crate::port_types::{PinConfig, PortConfig, PortPinDirection, PortPinType};
use crate::sdk::drivers::port_hw_types::{
    DigitalFilterConfig, DriveStrength, FilterClock, LockRegister, Mux, PinDirection,
    PinSettingsConfig, PullConfig, UnusedPinConfig,
};
use crate::sdk::mcu::register::{FLD_PORT_PCR, PORTC, PORTD, PORT_PCR_MUX_SHIFT, PTC, PTD};

pub const PORT_VENDOR_ID_VS_0_PBCFG: u16 = 43;
pub const PORT_AR_RELEASE_MAJOR_VERSION_VS_0_PBCFG: u8 = 21;
pub const PORT_AR_RELEASE_MINOR_VERSION_VS_0_PBCFG: u8 = 11;
pub const PORT_AR_RELEASE_REVISION_VERSION_VS_0_PBCFG: u8 = 0;
pub const PORT_SW_MAJOR_VERSION_VS_0_PBCFG: u8 = 1;
pub const PORT_SW_MINOR_VERSION_VS_0_PBCFG: u8 = 0;
pub const PORT_SW_PATCH_VERSION_VS_0_PBCFG: u8 = 0;

const _: () = assert!(
    PORT_VENDOR_ID_VS_0_PBCFG == PORT_VENDOR_ID,
    "driver and configuration have different vendor ids"
);
const _: () = assert!(
    PORT_AR_RELEASE_MAJOR_VERSION_VS_0_PBCFG == PORT_AR_RELEASE_MAJOR_VERSION
        && PORT_AR_RELEASE_MINOR_VERSION_VS_0_PBCFG == PORT_AR_RELEASE_MINOR_VERSION
        && PORT_AR_RELEASE_REVISION_VERSION_VS_0_PBCFG == PORT_AR_RELEASE_REVISION_VERSION,
    "driver and configuration have different AUTOSAR versions"
);
const _: () = assert!(
    PORT_SW_MAJOR_VERSION_VS_0_PBCFG == PORT_SW_MAJOR_VERSION
        && PORT_SW_MINOR_VERSION_VS_0_PBCFG == PORT_SW_MINOR_VERSION
        && PORT_SW_PATCH_VERSION_VS_0_PBCFG == PORT_SW_PATCH_VERSION,
    "driver and configuration have different software versions"
);

pub const PORT_CONFIGURED_PINS: u16 = 5;
pub const PORT_UNUSED_PINS: u16 = 4;

// Pin ids, in configuration order
pub const PORT_LED_BLUE: PortPinType = 0;
pub const PORT_LED_RED: PortPinType = 1;
pub const PORT_LED_GREEN: PortPinType = 2;
pub const PORT_BUTTON_SW2: PortPinType = 3;
pub const PORT_BUTTON_SW3: PortPinType = 4;

// The LEDs are active low, so the outputs start high
const LED_BLUE: PinSettingsConfig = led(0);
const LED_RED: PinSettingsConfig = led(15);
const LED_GREEN: PinSettingsConfig = led(16);
const BUTTON_SW2: PinSettingsConfig = button(12);
const BUTTON_SW3: PinSettingsConfig = button(13);

const fn led(pin: u32) -> PinSettingsConfig {
    PinSettingsConfig {
        port_base: PORTD,
        gpio_base: PTD,
        pin_port_index: pin,
        pull_config: PullConfig::NotEnabled,
        mux: Mux::Gpio,
        direction: PinDirection::Out,
        drive_strength: DriveStrength::High,
        lock_register: LockRegister::Disabled,
        passive_filter: false,
        digital_filter: false,
        init_value: 1,
    }
}

const fn button(pin: u32) -> PinSettingsConfig {
    PinSettingsConfig {
        port_base: PORTC,
        gpio_base: PTC,
        pin_port_index: pin,
        pull_config: PullConfig::PullUp,
        mux: Mux::Gpio,
        direction: PinDirection::In,
        drive_strength: DriveStrength::Low,
        lock_register: LockRegister::Disabled,
        passive_filter: true,
        digital_filter: true,
        init_value: 0,
    }
}

const fn used_pad(
    settings: &PinSettingsConfig,
    port: u16,
    direction: PortPinDirection,
    direction_changeable: bool,
    mode_changeable: bool,
) -> PinConfig {
    PinConfig {
        pin: port * 32 + settings.pin_port_index as u16,
        pin_control_register: settings.pcr_value(),
        output_value: settings.init_value,
        direction,
        is_gpio_mode: matches!(settings.mux, Mux::Gpio),
        direction_changeable,
        mode_changeable,
    }
}

pub const PORT_PIN_SETTINGS: [PinSettingsConfig; PORT_CONFIGURED_PINS as usize] =
    [LED_BLUE, LED_RED, LED_GREEN, BUTTON_SW2, BUTTON_SW3];

pub const PORT_USED_PADS: [PinConfig; PORT_CONFIGURED_PINS as usize] = [
    used_pad(&LED_BLUE, 3, PortPinDirection::Out, true, true),
    used_pad(&LED_RED, 3, PortPinDirection::Out, true, false),
    used_pad(&LED_GREEN, 3, PortPinDirection::Out, true, false),
    used_pad(&BUTTON_SW2, 2, PortPinDirection::In, false, false),
    used_pad(&BUTTON_SW3, 2, PortPinDirection::In, false, false),
];

/// PTA11, PTB12, PTE10 and PTE11.
pub const PORT_UNUSED_PADS: [u16; PORT_UNUSED_PINS as usize] = [11, 44, 138, 139];

/// Unused pads are GPIO inputs with the pull-down enabled.
pub const PORT_UNUSED_PAD_CONFIG: UnusedPinConfig = UnusedPinConfig {
    pcr: FLD_PORT_PCR::PE.bits() | (Mux::Gpio as u32) << PORT_PCR_MUX_SHIFT,
    direction: PinDirection::In,
    output_value: 0,
};

/// Digital filter for the push button port.
pub const PORT_BUTTON_FILTER: DigitalFilterConfig = DigitalFilterConfig {
    clock: FilterClock::BusClock,
    width: 31,
};

pub const PORT_CONFIG: PortConfig = PortConfig {
    num_pins: PORT_CONFIGURED_PINS,
    num_unused_pins: PORT_UNUSED_PINS,
    unused_pads: Some(&PORT_UNUSED_PADS),
    unused_pad_config: Some(&PORT_UNUSED_PAD_CONFIG),
    used_pad_config: &PORT_USED_PADS,
    ip_config: Some(&PORT_PIN_SETTINGS),
};
