//! AUTOSAR PORT driver for the NXP S32K144.
//!
//! Two layers: [`sdk::drivers::port_hw`] programs the PORT and GPIO register
//! blocks of individual pins, and [`port::PortDriver`] implements the PORT
//! services on top of it with development error checking and the
//! changeability rules of the configuration. [`state`] holds the single
//! driver instance of the chip behind a critical section.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod det;
pub mod error;
pub mod port;
pub mod port_cfg;
pub mod port_types;
pub mod sdk;
pub mod state;

pub use error::{ApiId, PortError, PortResult};
pub use port::PortDriver;
pub use port_types::{PinConfig, PortConfig, PortPinDirection, PortPinModeType, PortPinType, StdVersionInfo};
