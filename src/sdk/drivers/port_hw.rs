use crate::sdk::drivers::port_hw_types::{
    DigitalFilterConfig, GlobalControlPins, Mux, PinDirection, PinSettingsConfig, UnusedPinConfig,
};
use crate::sdk::mcu::register::{
    GpioBase, PortBase, FLD_PORT_PCR, GPIO_BASE_PTRS, PORT_BASE_PTRS, PORT_DFWR_FILT_MASK,
    PORT_GPC_GPWD_MASK, PORT_GPC_GPWE_SHIFT, PORT_INSTANCE_COUNT, PORT_PCR_COUNT,
    PORT_PCR_MUX_SHIFT,
};
use crate::sdk::mcu::schm::ExclusiveArea;
use crate::{BIT, BM_CLR, BM_SET, MASK_VAL};

/// PCR fields a global pin control write may change.
pub const PORT_GLOBAL_CONTROL_MASK: u32 = FLD_PORT_PCR::PS.bits()
    | FLD_PORT_PCR::PE.bits()
    | FLD_PORT_PCR::PFE.bits()
    | FLD_PORT_PCR::DSE.bits()
    | FLD_PORT_PCR::MUX.bits()
    | FLD_PORT_PCR::LK.bits();

/// Splits an unused pad id into (port number, pin number).
///
/// Pad ids count pins across ports, 32 per port: PTC12 is `2 * 32 + 12`.
pub const fn pad_location(pad: u16) -> (usize, u32) {
    ((pad >> 5) as usize, (pad & 0x1F) as u32)
}

/// The PORT and GPIO instances of the chip, indexed by port number.
///
/// This is the only data the hardware layer holds; everything else is read
/// from the configuration handed in or from the registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortHw {
    port_bases: [PortBase; PORT_INSTANCE_COUNT],
    gpio_bases: [GpioBase; PORT_INSTANCE_COUNT],
}

impl PortHw {
    /// The S32K144 register map.
    pub const S32K144: PortHw = PortHw::new(PORT_BASE_PTRS, GPIO_BASE_PTRS);

    pub const fn new(
        port_bases: [PortBase; PORT_INSTANCE_COUNT],
        gpio_bases: [GpioBase; PORT_INSTANCE_COUNT],
    ) -> Self {
        Self {
            port_bases,
            gpio_bases,
        }
    }

    /// Configures every used pin, then every unused pin.
    ///
    /// # Parameters
    ///
    /// * `pin_configs` - Used pins, applied in order. Must not be empty.
    /// * `unused_count` - Number of entries of `unused_pads` to apply
    /// * `unused_pads` - Pad ids of the unused pins, see [`pad_location`]
    /// * `unused_config` - Template applied to each unused pin
    ///
    /// # Notes
    ///
    /// * Unused pins are skipped entirely unless `unused_count` is non-zero and
    ///   both the id list and the template are present.
    /// * An empty `pin_configs` is a programming error caught by a debug assertion.
    pub fn init(
        &self,
        pin_configs: &[PinSettingsConfig],
        unused_count: u16,
        unused_pads: Option<&[u16]>,
        unused_config: Option<&UnusedPinConfig>,
    ) {
        debug_assert!(!pin_configs.is_empty());

        for config in pin_configs {
            init_pin(config);
        }

        if unused_count == 0 {
            return;
        }
        if let (Some(pads), Some(template)) = (unused_pads, unused_config) {
            for &pad in pads.iter().take(usize::from(unused_count)) {
                self.init_unused_pin(pad, template);
            }
        }
    }

    fn init_unused_pin(&self, pad: u16, template: &UnusedPinConfig) {
        let (port, pin) = pad_location(pad);
        debug_assert!(port < PORT_INSTANCE_COUNT);

        let port_base = self.port_bases[port];
        let gpio_base = self.gpio_bases[port];
        debug_assert!(!port_base.is_pcr_locked(pin));

        if template.direction == PinDirection::Out {
            ExclusiveArea::UnusedOutputLevel.with(|| write_pin(gpio_base, pin, template.output_value));
            update_pddr(gpio_base, pin, true, ExclusiveArea::UnusedDirection);
        } else {
            update_pddr(gpio_base, pin, false, ExclusiveArea::UnusedDirection);
            update_pidr(
                gpio_base,
                pin,
                template.direction == PinDirection::HighZ,
                ExclusiveArea::UnusedInputBuffer,
            );
        }

        port_base.write_pcr(template.pcr, pin as usize);
    }
}

/// Applies the full configuration of one pin.
///
/// # Algorithm
///
/// 1. Build the PCR value from pull, drive strength, lock, passive filter and mux
/// 2. Enable or disable the pin's digital filter in DFER
/// 3. For a GPIO pin:
///    - output: preset the output level through PSOR/PCOR, then set the PDDR bit
///    - otherwise: clear the PDDR bit and program PIDR (set only for high-Z)
/// 4. Write the PCR
///
/// The level is preset before the direction switches so the pin never drives a
/// stale value, and the PCR goes last so mux and electrical settings apply
/// once direction and level are in place.
fn init_pin(config: &PinSettingsConfig) {
    let pin = config.pin_port_index;
    debug_assert!(pin < PORT_PCR_COUNT as u32);
    debug_assert!(!config.port_base.is_pcr_locked(pin));

    let pcr = config.pcr_value();

    ExclusiveArea::InitDigitalFilter.with(|| {
        let mut dfer = config.port_base.read_dfer();
        if config.digital_filter {
            BM_SET!(dfer, pin);
        } else {
            BM_CLR!(dfer, pin);
        }
        config.port_base.write_dfer(dfer);
    });

    if config.mux == Mux::Gpio {
        if config.direction == PinDirection::Out {
            ExclusiveArea::InitOutputLevel.with(|| write_pin(config.gpio_base, pin, config.init_value));
            update_pddr(config.gpio_base, pin, true, ExclusiveArea::InitDirection);
        } else {
            update_pddr(config.gpio_base, pin, false, ExclusiveArea::InitDirection);
            update_pidr(
                config.gpio_base,
                pin,
                config.direction == PinDirection::HighZ,
                ExclusiveArea::InitInputBuffer,
            );
        }
    }

    config.port_base.write_pcr(pcr, pin as usize);
}

fn update_pddr(gpio: GpioBase, pin: u32, output: bool, area: ExclusiveArea) {
    area.with(|| {
        let mut pddr = gpio.read_pddr();
        if output {
            BM_SET!(pddr, pin);
        } else {
            BM_CLR!(pddr, pin);
        }
        gpio.write_pddr(pddr);
    });
}

fn update_pidr(gpio: GpioBase, pin: u32, input_disabled: bool, area: ExclusiveArea) {
    area.with(|| {
        let mut pidr = gpio.read_pidr();
        if input_disabled {
            BM_SET!(pidr, pin);
        } else {
            BM_CLR!(pidr, pin);
        }
        gpio.write_pidr(pidr);
    });
}

/// Changes the mux of one pin, leaving every other PCR field untouched.
///
/// The pin must be below 32 and its PCR must not be locked.
pub fn set_mux_mode_sel(port: PortBase, pin: u32, mux: Mux) {
    debug_assert!(pin < PORT_PCR_COUNT as u32);
    debug_assert!(!port.is_pcr_locked(pin));

    ExclusiveArea::MuxModeSel.with(|| {
        let pcr = port.read_pcr(pin as usize) & !FLD_PORT_PCR::MUX.bits();
        port.write_pcr(
            pcr | MASK_VAL!(FLD_PORT_PCR::MUX.bits(), PORT_PCR_MUX_SHIFT, mux as u8),
            pin as usize,
        );
    });
}

/// Changes the direction of one GPIO pin.
///
/// Output sets the PDDR bit. Every other direction clears it and re-enables
/// the input buffer, except high-Z which disables it. PDDR and PIDR are
/// updated in two separate critical sections.
pub fn set_pin_direction(gpio: GpioBase, pin: u32, direction: PinDirection) {
    debug_assert!(pin < PORT_PCR_COUNT as u32);

    if direction == PinDirection::Out {
        update_pddr(gpio, pin, true, ExclusiveArea::PinDirection);
    } else {
        update_pddr(gpio, pin, false, ExclusiveArea::PinDirection);
        update_pidr(
            gpio,
            pin,
            direction == PinDirection::HighZ,
            ExclusiveArea::PinInputBuffer,
        );
    }
}

/// Drives `value` (zero or non-zero) on an output pin.
pub fn write_pin(gpio: GpioBase, pin: u32, value: u8) {
    debug_assert!(pin < PORT_PCR_COUNT as u32);

    if value != 0 {
        gpio.write_psor(BIT!(pin));
    } else {
        gpio.write_pcor(BIT!(pin));
    }
}

/// Reads the input level of a pin, 0 or 1.
pub fn read_pin(gpio: GpioBase, pin: u32) -> u8 {
    debug_assert!(pin < PORT_PCR_COUNT as u32);

    ((gpio.read_pdir() >> pin) & 1) as u8
}

pub fn toggle_pin(gpio: GpioBase, pin: u32) {
    debug_assert!(pin < PORT_PCR_COUNT as u32);

    gpio.write_ptor(BIT!(pin));
}

/// Writes the same PCR fields to several pins of one half of a port at once.
///
/// # Parameters
///
/// * `port` - PORT instance
/// * `pins` - Pin select mask, bit n selects pin n of the chosen half
/// * `value` - PCR low half to apply. Fields outside
///   [`PORT_GLOBAL_CONTROL_MASK`] are dropped.
/// * `half` - Which 16 pins `pins` refers to
pub fn set_global_pin_control(port: PortBase, pins: u16, value: u16, half: GlobalControlPins) {
    let data = PORT_GLOBAL_CONTROL_MASK & PORT_GPC_GPWD_MASK & u32::from(value);
    let word = (u32::from(pins) << PORT_GPC_GPWE_SHIFT) | data;

    match half {
        GlobalControlPins::Lower => port.write_gpclr(word),
        GlobalControlPins::Upper => port.write_gpchr(word),
    }
}

pub fn enable_digital_filter(port: PortBase, pin: u32) {
    debug_assert!(pin < PORT_PCR_COUNT as u32);

    ExclusiveArea::EnableDigitalFilter.with(|| {
        let mut dfer = port.read_dfer();
        BM_SET!(dfer, pin);
        port.write_dfer(dfer);
    });
}

pub fn disable_digital_filter(port: PortBase, pin: u32) {
    debug_assert!(pin < PORT_PCR_COUNT as u32);

    ExclusiveArea::DisableDigitalFilter.with(|| {
        let mut dfer = port.read_dfer();
        BM_CLR!(dfer, pin);
        port.write_dfer(dfer);
    });
}

/// Programs the filter clock and width shared by every filtered pin of `port`.
pub fn config_digital_filter(port: PortBase, config: &DigitalFilterConfig) {
    debug_assert!(u32::from(config.width) <= PORT_DFWR_FILT_MASK);

    port.write_dfcr(config.dfcr_value());
    port.write_dfwr(config.dfwr_value());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdk::drivers::port_hw_types::{
        DriveStrength, FilterClock, LockRegister, PullConfig,
    };
    use crate::sdk::mcu::register::sim::SimChip;
    use crate::sdk::mcu::schm::reentry;

    const PORT_C: usize = 2;
    const PORT_D: usize = 3;
    const PORT_E: usize = 4;

    fn gpio_pin(chip: &SimChip, port: usize, pin: u32, direction: PinDirection, init_value: u8) -> PinSettingsConfig {
        PinSettingsConfig {
            port_base: chip.ports[port],
            gpio_base: chip.gpios[port],
            pin_port_index: pin,
            pull_config: PullConfig::NotEnabled,
            mux: Mux::Gpio,
            direction,
            drive_strength: DriveStrength::Low,
            lock_register: LockRegister::Disabled,
            passive_filter: false,
            digital_filter: false,
            init_value,
        }
    }

    fn hw(chip: &SimChip) -> PortHw {
        PortHw::new(chip.ports, chip.gpios)
    }

    /// Tests configuring a GPIO output pin.
    ///
    /// # Algorithm
    ///
    /// 1. Configure PTD0 as a GPIO output with initial level 1
    /// 2. Verify the level was preset through PSOR and never through PCOR
    /// 3. Verify the direction bit and the PCR
    #[test]
    fn test_init_gpio_output_presets_level() {
        let chip = SimChip::new();
        let pin = PinSettingsConfig {
            drive_strength: DriveStrength::High,
            ..gpio_pin(&chip, PORT_D, 0, PinDirection::Out, 1)
        };
        let entered = reentry::entered_count(ExclusiveArea::InitOutputLevel);

        hw(&chip).init(&[pin], 0, None, None);
        assert_eq!(reentry::entered_count(ExclusiveArea::InitOutputLevel) - entered, 1);

        let gpio = chip.gpios[PORT_D];
        assert_eq!(gpio.read_psor(), 0x0000_0001);
        assert_eq!(gpio.read_pcor(), 0);
        assert_eq!(gpio.read_pddr(), 0x0000_0001);
        // DSE | MUX=GPIO
        assert_eq!(chip.ports[PORT_D].read_pcr(0), 0x0000_0140);
        assert!(reentry::all_exited());
    }

    #[test]
    fn test_init_gpio_output_low_uses_clear_register() {
        let chip = SimChip::new();

        hw(&chip).init(&[gpio_pin(&chip, PORT_D, 16, PinDirection::Out, 0)], 0, None, None);

        let gpio = chip.gpios[PORT_D];
        assert_eq!(gpio.read_pcor(), 1 << 16);
        assert_eq!(gpio.read_psor(), 0);
        assert_eq!(gpio.read_pddr(), 1 << 16);
    }

    /// Tests configuring a filtered GPIO input (a push button).
    #[test]
    fn test_init_gpio_input_with_filters() {
        let chip = SimChip::new();
        let gpio = chip.gpios[PORT_C];
        // Setup stale state left from an earlier configuration
        gpio.write_pddr(1 << 12);
        gpio.write_pidr(1 << 12);

        let pin = PinSettingsConfig {
            pull_config: PullConfig::PullUp,
            passive_filter: true,
            digital_filter: true,
            ..gpio_pin(&chip, PORT_C, 12, PinDirection::In, 0)
        };
        hw(&chip).init(&[pin], 0, None, None);

        assert_eq!(gpio.read_pddr(), 0);
        assert_eq!(gpio.read_pidr(), 0);
        assert_eq!(chip.ports[PORT_C].read_dfer(), 1 << 12);
        // PFE | PE | PS | MUX=GPIO
        assert_eq!(chip.ports[PORT_C].read_pcr(12), 0x0000_0113);
        // Inputs never preset a level
        assert_eq!(gpio.read_psor(), 0);
        assert_eq!(gpio.read_pcor(), 0);
    }

    #[test]
    fn test_init_high_z_disables_input_buffer() {
        let chip = SimChip::new();

        hw(&chip).init(&[gpio_pin(&chip, PORT_E, 3, PinDirection::HighZ, 0)], 0, None, None);

        assert_eq!(chip.gpios[PORT_E].read_pddr(), 0);
        assert_eq!(chip.gpios[PORT_E].read_pidr(), 1 << 3);
    }

    #[test]
    fn test_init_clears_digital_filter_when_not_requested() {
        let chip = SimChip::new();
        chip.ports[PORT_C].write_dfer(0x0000_3000);

        hw(&chip).init(&[gpio_pin(&chip, PORT_C, 13, PinDirection::In, 0)], 0, None, None);

        // Only pin 13 is reconfigured, pin 12 keeps its filter
        assert_eq!(chip.ports[PORT_C].read_dfer(), 0x0000_1000);
    }

    /// A pin muxed to a peripheral keeps whatever GPIO direction it had.
    #[test]
    fn test_init_peripheral_mux_leaves_gpio_untouched() {
        let chip = SimChip::new();
        let gpio = chip.gpios[PORT_D];
        gpio.write_pddr(1 << 7);

        let pin = PinSettingsConfig {
            mux: Mux::Alt2,
            ..gpio_pin(&chip, PORT_D, 7, PinDirection::In, 1)
        };
        hw(&chip).init(&[pin], 0, None, None);

        assert_eq!(gpio.read_pddr(), 1 << 7);
        assert_eq!(gpio.read_psor(), 0);
        assert_eq!(chip.ports[PORT_D].read_pcr(7), 0x0000_0200);
    }

    #[test]
    fn test_init_applies_unused_template() {
        let chip = SimChip::new();
        let template = UnusedPinConfig {
            pcr: 0x0000_0102,
            direction: PinDirection::In,
            output_value: 0,
        };
        // PTA11, PTB12, PTE10; PTE11 is listed but outside the count
        let pads = [11u16, 44, 138, 139];
        chip.gpios[PORT_E].write_pddr(1 << 10);

        hw(&chip).init(
            &[gpio_pin(&chip, PORT_D, 0, PinDirection::Out, 1)],
            3,
            Some(&pads),
            Some(&template),
        );

        assert_eq!(chip.ports[0].read_pcr(11), 0x0000_0102);
        assert_eq!(chip.ports[1].read_pcr(12), 0x0000_0102);
        assert_eq!(chip.ports[PORT_E].read_pcr(10), 0x0000_0102);
        assert_eq!(chip.gpios[PORT_E].read_pddr(), 0);
        assert_eq!(chip.ports[PORT_E].read_pcr(11), 0);
        assert!(reentry::all_exited());
    }

    #[test]
    fn test_init_unused_output_template() {
        let chip = SimChip::new();
        let template = UnusedPinConfig {
            pcr: 0x0000_0100,
            direction: PinDirection::Out,
            output_value: 1,
        };

        hw(&chip).init(
            &[gpio_pin(&chip, PORT_D, 0, PinDirection::Out, 0)],
            1,
            Some(&[70]),
            Some(&template),
        );

        // Pad 70 is PTC6
        assert_eq!(chip.gpios[PORT_C].read_psor(), 1 << 6);
        assert_eq!(chip.gpios[PORT_C].read_pddr(), 1 << 6);
        assert_eq!(chip.ports[PORT_C].read_pcr(6), 0x0000_0100);
    }

    #[test]
    fn test_init_skips_unused_pins_without_template() {
        let chip = SimChip::new();
        let template = UnusedPinConfig {
            pcr: 0x0000_0102,
            direction: PinDirection::In,
            output_value: 0,
        };

        let hw = hw(&chip);
        hw.init(&[gpio_pin(&chip, PORT_D, 0, PinDirection::Out, 1)], 1, Some(&[11]), None);
        hw.init(&[gpio_pin(&chip, PORT_D, 0, PinDirection::Out, 1)], 1, None, Some(&template));
        hw.init(&[gpio_pin(&chip, PORT_D, 0, PinDirection::Out, 1)], 0, Some(&[11]), Some(&template));

        assert_eq!(chip.ports[0].read_pcr(11), 0);
    }

    #[test]
    #[should_panic]
    fn test_init_without_pins_asserts() {
        let chip = SimChip::new();
        hw(&chip).init(&[], 0, None, None);
    }

    #[test]
    fn test_pad_location() {
        assert_eq!(pad_location(0), (0, 0));
        assert_eq!(pad_location(76), (2, 12));
        assert_eq!(pad_location(112), (3, 16));
        assert_eq!(pad_location(159), (4, 31));
    }

    #[test]
    fn test_set_mux_mode_sel_preserves_other_fields() {
        let chip = SimChip::new();
        let port = chip.ports[PORT_C];
        port.write_pcr(0x0000_0153, 5);
        let entered = reentry::entered_count(ExclusiveArea::MuxModeSel);

        set_mux_mode_sel(port, 5, Mux::Alt6);
        assert_eq!(port.read_pcr(5), 0x0000_0653);

        set_mux_mode_sel(port, 5, Mux::Disabled);
        assert_eq!(port.read_pcr(5), 0x0000_0053);
        assert_eq!(reentry::entered_count(ExclusiveArea::MuxModeSel) - entered, 2);
        assert!(reentry::all_exited());
    }

    #[test]
    #[should_panic]
    fn test_set_mux_mode_sel_on_locked_pin_asserts() {
        let chip = SimChip::new();
        chip.ports[PORT_C].write_pcr(0x0000_8100, 5);

        set_mux_mode_sel(chip.ports[PORT_C], 5, Mux::Alt2);
    }

    #[test]
    fn test_set_pin_direction() {
        let chip = SimChip::new();
        let gpio = chip.gpios[PORT_D];
        gpio.write_pddr(0x0000_0002);
        gpio.write_pidr(0x0000_0001);

        set_pin_direction(gpio, 0, PinDirection::Out);
        assert_eq!(gpio.read_pddr(), 0x0000_0003);

        set_pin_direction(gpio, 0, PinDirection::In);
        assert_eq!(gpio.read_pddr(), 0x0000_0002);
        assert_eq!(gpio.read_pidr(), 0);

        set_pin_direction(gpio, 1, PinDirection::HighZ);
        assert_eq!(gpio.read_pddr(), 0);
        assert_eq!(gpio.read_pidr(), 0x0000_0002);

        // Disabled behaves as input
        set_pin_direction(gpio, 1, PinDirection::Disabled);
        assert_eq!(gpio.read_pidr(), 0);
        assert!(reentry::all_exited());
    }

    #[test]
    fn test_write_read_toggle_pin() {
        let chip = SimChip::new();
        let gpio = chip.gpios[PORT_D];

        write_pin(gpio, 15, 1);
        assert_eq!(gpio.read_psor(), 1 << 15);

        write_pin(gpio, 15, 0);
        assert_eq!(gpio.read_pcor(), 1 << 15);

        toggle_pin(gpio, 16);
        assert_eq!(gpio.read_ptor(), 1 << 16);

        gpio.write_pdir(0x0000_1000);
        assert_eq!(read_pin(gpio, 12), 1);
        assert_eq!(read_pin(gpio, 13), 0);
    }

    #[test]
    #[should_panic(expected = "pin < PORT_PCR_COUNT")]
    fn test_write_pin_out_of_range_asserts() {
        let chip = SimChip::new();
        write_pin(chip.gpios[PORT_D], 40, 1);
    }

    #[test]
    #[should_panic(expected = "pin < PORT_PCR_COUNT")]
    fn test_read_pin_out_of_range_asserts() {
        let chip = SimChip::new();
        read_pin(chip.gpios[PORT_D], 32);
    }

    #[test]
    #[should_panic(expected = "pin < PORT_PCR_COUNT")]
    fn test_toggle_pin_out_of_range_asserts() {
        let chip = SimChip::new();
        toggle_pin(chip.gpios[PORT_D], 40);
    }

    #[test]
    fn test_global_pin_control_lower_half() {
        let chip = SimChip::new();
        let port = chip.ports[PORT_C];

        // Bits outside the configurable fields are dropped
        set_global_pin_control(port, 0x3000, 0xFFFF, GlobalControlPins::Lower);

        assert_eq!(port.read_gpclr(), 0x3000_8753);
        assert_eq!(port.read_gpchr(), 0);
    }

    #[test]
    fn test_global_pin_control_upper_half() {
        let chip = SimChip::new();
        let port = chip.ports[PORT_D];

        set_global_pin_control(port, 0x0001, 0x0140, GlobalControlPins::Upper);

        assert_eq!(port.read_gpchr(), 0x0001_0140);
        assert_eq!(port.read_gpclr(), 0);
    }

    #[test]
    fn test_digital_filter_enable_disable() {
        let chip = SimChip::new();
        let port = chip.ports[PORT_C];

        enable_digital_filter(port, 12);
        enable_digital_filter(port, 13);
        assert_eq!(port.read_dfer(), 0x0000_3000);

        disable_digital_filter(port, 12);
        assert_eq!(port.read_dfer(), 0x0000_2000);
        assert!(reentry::all_exited());
    }

    #[test]
    fn test_config_digital_filter() {
        let chip = SimChip::new();
        let port = chip.ports[PORT_C];

        config_digital_filter(port, &DigitalFilterConfig { clock: FilterClock::LpoClock, width: 31 });

        assert_eq!(port.read_dfcr(), 1);
        assert_eq!(port.read_dfwr(), 31);
    }

    #[test]
    #[should_panic]
    fn test_config_digital_filter_rejects_wide_filter() {
        let chip = SimChip::new();
        config_digital_filter(chip.ports[PORT_C], &DigitalFilterConfig { clock: FilterClock::BusClock, width: 32 });
    }
}
