//! Composite matrix operations
//!
//! Configuration changes apply to every chip in bus order and stop at the
//! first chip that fails; earlier chips keep the new setting. Per-LED
//! operations touch only the chip the LED lives on.

use dots_hal::I2cBus;
use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal_async::delay::DelayNs;

use crate::codec::{bits, config_reg, led_registers, set_bits, LedRegisters, Page};
use crate::error::Error;
use crate::session::BusSession;
use crate::settings::{
    LogicLevel, Operation, PwmFrequency, ResistorSetting, ShortDetection, SwxSetting,
};

/// Red, green and blue register values for one LED
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const OFF: Self = Self::new(0, 0, 0);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

impl<M: RawMutex, B: I2cBus, D: DelayNs + Clone> BusSession<M, B, D> {
    /// Replace a bit field in a register on every chip
    ///
    /// Reads the register from all chips first, then writes each chip's
    /// updated byte, so other fields keep their per-chip values.
    pub async fn update_field(&self, page: Page, register: u8, mask: u8, value: u8) -> Result<(), Error> {
        let mut values = self.get_registers(page, register).await?;
        for byte in values.iter_mut() {
            *byte = set_bits(*byte, mask, value);
        }
        self.set_registers_separate(page, register, &values).await
    }

    /// Enter or leave software shutdown
    pub async fn set_operating_mode(&self, mode: Operation) -> Result<(), Error> {
        self.update_field(
            Page::Config,
            config_reg::CONFIGURATION,
            bits::SOFTWARE_SHUTDOWN,
            mode.bits(),
        )
        .await
    }

    pub async fn set_open_short_detection(&self, detection: ShortDetection) -> Result<(), Error> {
        self.update_field(
            Page::Config,
            config_reg::CONFIGURATION,
            bits::OPEN_SHORT_DETECT,
            detection.bits(),
        )
        .await
    }

    pub async fn set_logic_level(&self, level: LogicLevel) -> Result<(), Error> {
        self.update_field(
            Page::Config,
            config_reg::CONFIGURATION,
            bits::LOGIC_LEVEL,
            level.bits(),
        )
        .await
    }

    pub async fn set_swx_setting(&self, setting: SwxSetting) -> Result<(), Error> {
        self.update_field(
            Page::Config,
            config_reg::CONFIGURATION,
            bits::SWX_SETTING,
            setting.bits(),
        )
        .await
    }

    pub async fn set_pullup(&self, setting: ResistorSetting) -> Result<(), Error> {
        self.update_field(Page::Config, config_reg::PULL_SELECT, bits::PULLUP, setting.bits())
            .await
    }

    pub async fn set_pulldown(&self, setting: ResistorSetting) -> Result<(), Error> {
        self.update_field(Page::Config, config_reg::PULL_SELECT, bits::PULLDOWN, setting.bits())
            .await
    }

    /// Global current control, 0 (off) to 255 (max)
    pub async fn set_global_current(&self, current: u8) -> Result<(), Error> {
        self.set_registers(Page::Config, config_reg::GLOBAL_CURRENT, current)
            .await
    }

    pub async fn set_pwm_frequency(&self, frequency: PwmFrequency) -> Result<(), Error> {
        self.set_registers(Page::Config, config_reg::PWM_FREQUENCY, frequency.bits())
            .await
    }

    /// Reset every register on every chip to its default
    ///
    /// A reset chip comes back on page 0 in software shutdown.
    pub async fn reset(&self) -> Result<(), Error> {
        self.set_registers(Page::Config, config_reg::RESET, config_reg::RESET_KEY)
            .await
    }

    /// Set the PWM (color) registers of a 1-based LED
    pub async fn set_color(&self, led: u16, color: Rgb) -> Result<(), Error> {
        let regs = led_registers(led)?;
        self.write_led(regs, regs.location.pwm_page(), color).await
    }

    /// Set the scaling (brightness) registers of a 1-based LED
    pub async fn set_scaling(&self, led: u16, scaling: Rgb) -> Result<(), Error> {
        let regs = led_registers(led)?;
        self.write_led(regs, regs.location.scaling_page(), scaling)
            .await
    }

    /// Read back the PWM registers of a 1-based LED
    pub async fn get_color(&self, led: u16) -> Result<Rgb, Error> {
        let regs = led_registers(led)?;
        self.read_led(regs, regs.location.pwm_page()).await
    }

    /// Read back the scaling registers of a 1-based LED
    pub async fn get_scaling(&self, led: u16) -> Result<Rgb, Error> {
        let regs = led_registers(led)?;
        self.read_led(regs, regs.location.scaling_page()).await
    }

    async fn write_led(&self, regs: &LedRegisters, page: Page, rgb: Rgb) -> Result<(), Error> {
        let chip = regs.location.chip();
        self.set_register(chip, page, regs.red, rgb.red).await?;
        self.set_register(chip, page, regs.green, rgb.green).await?;
        self.set_register(chip, page, regs.blue, rgb.blue).await
    }

    async fn read_led(&self, regs: &LedRegisters, page: Page) -> Result<Rgb, Error> {
        let chip = regs.location.chip();
        Ok(Rgb {
            red: self.get_register(chip, page, regs.red).await?,
            green: self.get_register(chip, page, regs.green).await?,
            blue: self.get_register(chip, page, regs.blue).await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::ChipId;
    use crate::config::BusConfig;
    use crate::session::tests::{open_three, open_with};
    use dots_hal::I2cBusError;
    use embassy_futures::block_on;

    #[test]
    fn test_set_color_after_reset_and_mode() {
        let (session, sim) = open_three();
        block_on(async {
            session.reset().await.unwrap();
            session.set_operating_mode(Operation::Normal).await.unwrap();
        });
        sim.clear_log();

        block_on(session.set_color(1, Rgb::new(0xFF, 0x00, 0x00))).unwrap();

        assert_eq!(
            sim.data_writes(),
            [(0x30, 0x8D, 0xFF), (0x30, 0x8F, 0x00), (0x30, 0x8E, 0x00)]
        );
        assert_eq!(session.locks().cached_page(ChipId::One), Some(Page::Pwm1));
        assert_eq!(sim.page_of(0x30), 1);
        assert_eq!(sim.register(0x30, 1, 0x8D), 0xFF);
        // Nothing else on the bus was touched
        assert_eq!(sim.page_selects(0x33), 0);
        assert_eq!(sim.page_selects(0x32), 0);
    }

    #[test]
    fn test_aliases_write_same_registers() {
        let color = Rgb::new(0x10, 0x20, 0x30);
        for (alias, target) in [(329u16, 325u16), (330, 326)] {
            let (session, sim) = open_three();
            block_on(session.set_color(alias, color)).unwrap();
            let alias_writes = sim.data_writes();
            sim.clear_log();
            block_on(session.set_color(target, color)).unwrap();
            assert_eq!(alias_writes, sim.data_writes());
        }
    }

    #[test]
    fn test_invalid_led_touches_nothing() {
        let (session, sim) = open_three();
        for led in [0u16, 327, 328, 331] {
            assert_eq!(
                block_on(session.set_color(led, Rgb::OFF)),
                Err(Error::InvalidArgument)
            );
        }
        assert!(sim.log().is_empty());
    }

    #[test]
    fn test_scaling_uses_scaling_page() {
        let (session, sim) = open_three();
        block_on(session.set_scaling(1, Rgb::new(1, 2, 3))).unwrap();
        assert_eq!(sim.page_of(0x30), 3);
        assert_eq!(sim.register(0x30, 3, 0x8F), 2);
        assert_eq!(block_on(session.get_scaling(1)), Ok(Rgb::new(1, 2, 3)));
        // Color registers of the same LED are separate
        assert_eq!(block_on(session.get_color(1)), Ok(Rgb::OFF));
    }

    #[test]
    fn test_color_read_back() {
        let (session, _sim) = open_three();
        let color = Rgb::new(0xAA, 0xBB, 0xCC);
        block_on(session.set_color(200, color)).unwrap();
        assert_eq!(block_on(session.get_color(200)), Ok(color));
    }

    #[test]
    fn test_config_fields_preserve_other_bits() {
        let (session, sim) = open_three();
        sim.poke(0x33, 4, config_reg::CONFIGURATION, 0x01);
        block_on(session.set_open_short_detection(ShortDetection::Short)).unwrap();
        assert_eq!(sim.register(0x30, 4, config_reg::CONFIGURATION), 0x04);
        assert_eq!(sim.register(0x33, 4, config_reg::CONFIGURATION), 0x05);

        block_on(session.set_swx_setting(SwxSetting::CurrentSinkOnly)).unwrap();
        assert_eq!(sim.register(0x33, 4, config_reg::CONFIGURATION), 0x85);

        block_on(session.set_logic_level(LogicLevel::Alternate)).unwrap();
        assert_eq!(sim.register(0x32, 4, config_reg::CONFIGURATION), 0x8C);
    }

    #[test]
    fn test_pull_resistors_share_register() {
        let (session, sim) = open_three();
        block_on(async {
            session.set_pullup(ResistorSetting::FourK).await.unwrap();
            session.set_pulldown(ResistorSetting::ThirtyTwoK).await.unwrap();
        });
        assert_eq!(sim.register(0x32, 4, config_reg::PULL_SELECT), 0x74);
    }

    #[test]
    fn test_whole_register_settings() {
        let (session, sim) = open_three();
        block_on(async {
            session.set_global_current(0x40).await.unwrap();
            session.set_pwm_frequency(PwmFrequency::Hz900).await.unwrap();
        });
        for address in [0x30, 0x33, 0x32] {
            assert_eq!(sim.register(address, 4, config_reg::GLOBAL_CURRENT), 0x40);
            assert_eq!(sim.register(address, 4, config_reg::PWM_FREQUENCY), 11);
        }
        // One page select per chip for both operations
        assert_eq!(sim.page_selects(0x33), 1);
    }

    #[test]
    fn test_reset_invalidates_page_cache() {
        let (session, sim) = open_three();
        block_on(async {
            session.set_global_current(0x40).await.unwrap();
            session.reset().await.unwrap();
        });
        assert_eq!(sim.register(0x30, 4, config_reg::GLOBAL_CURRENT), 0);
        assert_eq!(sim.page_of(0x30), 0);
        assert_eq!(session.locks().cached_page(ChipId::One), None);

        // The chip forgot its page, so the next config write selects again
        sim.clear_log();
        block_on(session.set_global_current(0x10)).unwrap();
        assert_eq!(sim.page_selects(0x30), 1);
        assert_eq!(sim.register(0x30, 4, config_reg::GLOBAL_CURRENT), 0x10);
    }

    #[test]
    fn test_operating_mode_stops_at_failing_chip() {
        let (session, sim) = open_three();
        // Reads: 4 transfers per chip on first access, then the writes
        sim.fail_nth(12 + 1, I2cBusError::Nack);
        let result = block_on(session.set_operating_mode(Operation::Normal));
        assert_eq!(result, Err(Error::Bus(I2cBusError::Nack)));
        assert_eq!(sim.register(0x30, 4, config_reg::CONFIGURATION), 0x01);
        assert_eq!(sim.register(0x33, 4, config_reg::CONFIGURATION), 0x00);
    }

    #[test]
    fn test_four_chip_board() {
        let (session, sim) = open_with(&BusConfig::four_chip());
        block_on(session.set_global_current(0x22)).unwrap();
        assert_eq!(sim.register(0x31, 4, config_reg::GLOBAL_CURRENT), 0x22);
    }
}
