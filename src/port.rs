use crate::config::{
    PORT_DEV_ERROR_DETECT, PORT_INSTANCE_ID, PORT_MODULE_ID, PORT_PRECOMPILE_SUPPORT,
};
use crate::det;
use crate::error::{ApiId, PortError, PortResult};
use crate::port_cfg;
use crate::port_types::PortConfig;
use crate::sdk::drivers::port_hw::{self, PortHw};

// Shared by every per-pin service
#[cfg(any(
    feature = "set-pin-direction-api",
    feature = "set-pin-mode-api",
    feature = "unused-pin-api",
    feature = "reset-pin-mode-api"
))]
use crate::{port_types::PortPinType, sdk::drivers::port_hw_types::PinSettingsConfig};

#[cfg(feature = "set-pin-direction-api")]
use crate::port_types::PortPinDirection;
#[cfg(feature = "set-pin-mode-api")]
use crate::config::PORT_MAX_PIN_MODE;
#[cfg(feature = "set-pin-mode-api")]
use crate::port_types::PortPinModeType;
#[cfg(any(feature = "set-pin-mode-api", feature = "unused-pin-api"))]
use crate::sdk::drivers::port_hw_types::Mux;
#[cfg(feature = "unused-pin-api")]
use crate::sdk::drivers::port_hw_types::PinDirection;
#[cfg(feature = "unused-pin-api")]
use crate::sdk::mcu::schm::ExclusiveArea;
#[cfg(feature = "version-info-api")]
use crate::config::{PORT_SW_MAJOR_VERSION, PORT_SW_MINOR_VERSION, PORT_SW_PATCH_VERSION, PORT_VENDOR_ID};
#[cfg(feature = "version-info-api")]
use crate::port_types::StdVersionInfo;

/// Reports a development error (when detection is enabled) and hands it back
/// for the caller to return.
fn dev_error(api: ApiId, error: PortError) -> PortError {
    if PORT_DEV_ERROR_DETECT {
        det::report_error(PORT_MODULE_ID, PORT_INSTANCE_ID, api.id(), error.code());
    }
    error
}

/// The PORT driver.
///
/// Holds the configuration installed by [`PortDriver::init`] and nothing else;
/// pin state lives in the registers. A driver starts uninitialised and every
/// service except `init` and `get_version_info` fails with
/// [`PortError::Uninit`] until `init` succeeds.
#[derive(Debug, Clone, Copy)]
pub struct PortDriver {
    hw: PortHw,
    precompiled: &'static PortConfig,
    config: Option<&'static PortConfig>,
}

impl PortDriver {
    /// Driver for the S32K144 with the board configuration compiled in.
    pub const fn new() -> Self {
        Self::with_hw(PortHw::S32K144, &port_cfg::PORT_CONFIG)
    }

    /// Driver over an arbitrary register map. `precompiled` is the
    /// configuration `init` installs in the pre-compile variant.
    pub const fn with_hw(hw: PortHw, precompiled: &'static PortConfig) -> Self {
        Self {
            hw,
            precompiled,
            config: None,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.config.is_some()
    }

    /// The installed configuration, if any.
    pub fn config(&self) -> Option<&'static PortConfig> {
        self.config
    }

    /// Initialises every configured pin and installs `config`.
    ///
    /// In the post-build variant `config` must be `Some`; in the pre-compile
    /// variant it must be `None` and the compiled-in configuration is used.
    /// A second call reconfigures the hardware and replaces the previous
    /// configuration. On failure the driver keeps whatever state it had.
    ///
    /// # Errors
    ///
    /// * [`PortError::InitFailed`] - `config` does not match the build variant
    /// * [`PortError::ParamConfig`] - the configuration has no pins, no
    ///   hardware settings, or fewer entries than `num_pins`
    pub fn init(&mut self, config: Option<&'static PortConfig>) -> PortResult<()> {
        if PORT_DEV_ERROR_DETECT && config.is_some() == PORT_PRECOMPILE_SUPPORT {
            return Err(dev_error(ApiId::Init, PortError::InitFailed));
        }

        let config = if PORT_PRECOMPILE_SUPPORT {
            self.precompiled
        } else {
            config.ok_or_else(|| dev_error(ApiId::Init, PortError::InitFailed))?
        };

        let num_pins = usize::from(config.num_pins);
        let ip_config = match config.ip_config {
            Some(ip_config)
                if num_pins != 0
                    && ip_config.len() >= num_pins
                    && config.used_pad_config.len() >= num_pins =>
            {
                ip_config
            }
            _ => return Err(dev_error(ApiId::Init, PortError::ParamConfig)),
        };

        self.hw.init(
            &ip_config[..num_pins],
            config.num_unused_pins,
            config.unused_pads,
            config.unused_pad_config,
        );
        self.config = Some(config);

        log::debug!(
            "port: initialised {} pins, {} unused",
            config.num_pins,
            config.num_unused_pins
        );
        Ok(())
    }

    fn initialized(&self, api: ApiId) -> PortResult<&'static PortConfig> {
        self.config.ok_or_else(|| dev_error(api, PortError::Uninit))
    }

    /// Changes the direction of a pin configured as direction-changeable.
    ///
    /// `Out` makes the pin an output; `In` and `Disabled` make it an input.
    ///
    /// # Errors
    ///
    /// [`PortError::Uninit`], [`PortError::ParamPin`] or
    /// [`PortError::DirectionUnchangeable`], checked in that order.
    #[cfg(feature = "set-pin-direction-api")]
    pub fn set_pin_direction(&self, pin: PortPinType, direction: PortPinDirection) -> PortResult<()> {
        let api = ApiId::SetPinDirection;
        let config = self.initialized(api)?;
        let index = Self::pin_index(config, api, pin)?;

        if PORT_DEV_ERROR_DETECT && !config.used_pad_config[index].direction_changeable {
            return Err(dev_error(api, PortError::DirectionUnchangeable));
        }

        let settings = Self::settings(config, index);
        port_hw::set_pin_direction(settings.gpio_base, settings.pin_port_index, direction.into());
        Ok(())
    }

    /// Re-applies the configured direction of every pin whose direction is not
    /// changeable. Direction-changeable pins keep whatever direction they have.
    pub fn refresh_port_direction(&self) -> PortResult<()> {
        let config = self.initialized(ApiId::RefreshPortDirection)?;
        let ip_config = config.ip_config.unwrap_or(&[]);

        for (pin, settings) in config
            .used_pad_config
            .iter()
            .zip(ip_config)
            .take(usize::from(config.num_pins))
        {
            if !pin.direction_changeable {
                port_hw::set_pin_direction(settings.gpio_base, settings.pin_port_index, pin.direction.into());
            }
        }

        log::trace!("port: directions refreshed");
        Ok(())
    }

    /// Fills `versioninfo` with the vendor, module and software version.
    ///
    /// # Errors
    ///
    /// [`PortError::ParamPointer`] when `versioninfo` is `None`.
    #[cfg(feature = "version-info-api")]
    pub fn get_version_info(versioninfo: Option<&mut StdVersionInfo>) -> PortResult<()> {
        let Some(versioninfo) = versioninfo else {
            return Err(dev_error(ApiId::GetVersionInfo, PortError::ParamPointer));
        };

        *versioninfo = StdVersionInfo {
            vendor_id: PORT_VENDOR_ID,
            module_id: PORT_MODULE_ID,
            sw_major_version: PORT_SW_MAJOR_VERSION,
            sw_minor_version: PORT_SW_MINOR_VERSION,
            sw_patch_version: PORT_SW_PATCH_VERSION,
        };
        Ok(())
    }

    /// Changes the mux of a pin configured as mode-changeable.
    ///
    /// # Errors
    ///
    /// [`PortError::Uninit`], [`PortError::ParamPin`],
    /// [`PortError::ModeUnchangeable`] or [`PortError::ParamInvalidMode`] (mode
    /// above 7), checked in that order.
    #[cfg(feature = "set-pin-mode-api")]
    pub fn set_pin_mode(&self, pin: PortPinType, mode: PortPinModeType) -> PortResult<()> {
        let api = ApiId::SetPinMode;
        let config = self.initialized(api)?;
        let index = Self::pin_index(config, api, pin)?;

        if PORT_DEV_ERROR_DETECT {
            if !config.used_pad_config[index].mode_changeable {
                return Err(dev_error(api, PortError::ModeUnchangeable));
            }
            if mode > PORT_MAX_PIN_MODE {
                return Err(dev_error(api, PortError::ParamInvalidMode));
            }
        }

        let settings = Self::settings(config, index);
        port_hw::set_mux_mode_sel(settings.port_base, settings.pin_port_index, Mux::from_bits(mode));
        Ok(())
    }

    /// Parks a pin using the unused-pin template: GPIO mux, then the template's
    /// output level and direction. Does nothing if the configuration has no
    /// template.
    ///
    /// # Errors
    ///
    /// [`PortError::Uninit`] or [`PortError::ParamPin`].
    #[cfg(feature = "unused-pin-api")]
    pub fn set_as_unused_pin(&self, pin: PortPinType) -> PortResult<()> {
        let api = ApiId::SetAsUnusedPin;
        let config = self.initialized(api)?;
        let index = Self::pin_index(config, api, pin)?;

        let Some(template) = config.unused_pad_config else {
            return Ok(());
        };

        let settings = Self::settings(config, index);
        let (gpio, hw_pin) = (settings.gpio_base, settings.pin_port_index);

        port_hw::set_mux_mode_sel(settings.port_base, hw_pin, Mux::Gpio);
        if template.direction == PinDirection::Out {
            ExclusiveArea::UnusedOutputLevel.with(|| port_hw::write_pin(gpio, hw_pin, template.output_value));
            port_hw::set_pin_direction(gpio, hw_pin, PinDirection::Out);
        } else {
            port_hw::set_pin_direction(gpio, hw_pin, PinDirection::In);
        }
        Ok(())
    }

    /// Restores the full configuration of a pin parked by
    /// [`PortDriver::set_as_unused_pin`].
    ///
    /// # Errors
    ///
    /// [`PortError::Uninit`] or [`PortError::ParamPin`].
    #[cfg(feature = "unused-pin-api")]
    pub fn set_as_used_pin(&self, pin: PortPinType) -> PortResult<()> {
        let api = ApiId::SetAsUsedPin;
        let config = self.initialized(api)?;
        let index = Self::pin_index(config, api, pin)?;

        self.hw.init(core::slice::from_ref(Self::settings(config, index)), 0, None, None);
        Ok(())
    }

    /// Restores the configured mux of a mode-changeable pin.
    ///
    /// # Errors
    ///
    /// [`PortError::Uninit`], [`PortError::ParamPin`] or
    /// [`PortError::ModeUnchangeable`], checked in that order.
    #[cfg(feature = "reset-pin-mode-api")]
    pub fn reset_pin_mode(&self, pin: PortPinType) -> PortResult<()> {
        let api = ApiId::ResetPinMode;
        let config = self.initialized(api)?;
        let index = Self::pin_index(config, api, pin)?;

        if PORT_DEV_ERROR_DETECT && !config.used_pad_config[index].mode_changeable {
            return Err(dev_error(api, PortError::ModeUnchangeable));
        }

        let settings = Self::settings(config, index);
        port_hw::set_mux_mode_sel(settings.port_base, settings.pin_port_index, settings.mux);
        Ok(())
    }
}

#[cfg(any(
    feature = "set-pin-direction-api",
    feature = "set-pin-mode-api",
    feature = "unused-pin-api",
    feature = "reset-pin-mode-api"
))]
impl PortDriver {
    /// Range-checks `pin` when development error detection is enabled.
    fn pin_index(config: &PortConfig, api: ApiId, pin: PortPinType) -> PortResult<usize> {
        if PORT_DEV_ERROR_DETECT && pin >= PortPinType::from(config.num_pins) {
            return Err(dev_error(api, PortError::ParamPin));
        }
        Ok(pin as usize)
    }

    fn settings(config: &'static PortConfig, index: usize) -> &'static PinSettingsConfig {
        &config.ip_config.unwrap_or(&[])[index]
    }
}

impl Default for PortDriver {
    fn default() -> Self {
        Self::new()
    }
}
