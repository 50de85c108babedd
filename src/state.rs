use core::cell::RefCell;
use critical_section::Mutex;

use crate::error::PortResult;
use crate::port::PortDriver;
use crate::port_types::PortConfig;

#[cfg(any(
    feature = "set-pin-direction-api",
    feature = "set-pin-mode-api",
    feature = "unused-pin-api",
    feature = "reset-pin-mode-api"
))]
use crate::port_types::PortPinType;
#[cfg(feature = "set-pin-direction-api")]
use crate::port_types::PortPinDirection;
#[cfg(feature = "set-pin-mode-api")]
use crate::port_types::PortPinModeType;
#[cfg(feature = "version-info-api")]
use crate::port_types::StdVersionInfo;

/// The one PORT driver instance of the chip.
pub static PORT: Mutex<RefCell<PortDriver>> = Mutex::new(RefCell::new(PortDriver::new()));

/// Runs `f` on the global driver inside a critical section.
pub fn with_port<R>(f: impl FnOnce(&mut PortDriver) -> R) -> R {
    critical_section::with(|cs| f(&mut PORT.borrow_ref_mut(cs)))
}

pub fn port_init(config: Option<&'static PortConfig>) -> PortResult<()> {
    with_port(|port| port.init(config))
}

#[cfg(feature = "set-pin-direction-api")]
pub fn port_set_pin_direction(pin: PortPinType, direction: PortPinDirection) -> PortResult<()> {
    with_port(|port| port.set_pin_direction(pin, direction))
}

pub fn port_refresh_port_direction() -> PortResult<()> {
    with_port(|port| port.refresh_port_direction())
}

#[cfg(feature = "version-info-api")]
pub fn port_get_version_info(versioninfo: Option<&mut StdVersionInfo>) -> PortResult<()> {
    PortDriver::get_version_info(versioninfo)
}

#[cfg(feature = "set-pin-mode-api")]
pub fn port_set_pin_mode(pin: PortPinType, mode: PortPinModeType) -> PortResult<()> {
    with_port(|port| port.set_pin_mode(pin, mode))
}

#[cfg(feature = "unused-pin-api")]
pub fn port_set_as_unused_pin(pin: PortPinType) -> PortResult<()> {
    with_port(|port| port.set_as_unused_pin(pin))
}

#[cfg(feature = "unused-pin-api")]
pub fn port_set_as_used_pin(pin: PortPinType) -> PortResult<()> {
    with_port(|port| port.set_as_used_pin(pin))
}

#[cfg(feature = "reset-pin-mode-api")]
pub fn port_reset_pin_mode(pin: PortPinType) -> PortResult<()> {
    with_port(|port| port.reset_pin_mode(pin))
}
