//! Register codec
//!
//! Register map, page numbering and bit-field helpers for the matrix
//! driver chips. Nothing here touches the bus.

mod led_table;
pub mod leds;

pub use led_table::{LED_COUNT, LED_TABLE};
pub use leds::{led_registers, LedRegisters, MatrixLocation};

use crate::error::Error;

/// Registers reachable regardless of the selected page
pub mod reg {
    /// Identification register, reads as the chip's 8-bit write address
    pub const ID: u8 = 0xFC;
    /// Command register, selects the page
    pub const COMMAND: u8 = 0xFD;
    /// Command register write lock
    pub const WRITE_LOCK: u8 = 0xFE;
    /// Value that unlocks the command register for one write
    pub const UNLOCK_KEY: u8 = 0xC5;
}

/// Registers on [`Page::Config`]
pub mod config_reg {
    /// Configuration register
    pub const CONFIGURATION: u8 = 0x00;
    /// Global current control
    pub const GLOBAL_CURRENT: u8 = 0x01;
    /// Pull-up / pull-down resistor selection
    pub const PULL_SELECT: u8 = 0x02;
    /// PWM frequency setting
    pub const PWM_FREQUENCY: u8 = 0x36;
    /// Reset register
    pub const RESET: u8 = 0x3F;
    /// Value that resets every register when written to [`RESET`]
    pub const RESET_KEY: u8 = 0xAE;
}

/// Bit fields inside the config page registers
pub mod bits {
    /// Software shutdown, in the configuration register
    pub const SOFTWARE_SHUTDOWN: u8 = 0x01;
    /// Open/short detection enable, in the configuration register
    pub const OPEN_SHORT_DETECT: u8 = 0x06;
    /// Logic level, in the configuration register
    pub const LOGIC_LEVEL: u8 = 0x08;
    /// SWx setting, in the configuration register
    pub const SWX_SETTING: u8 = 0xF0;
    /// Pull-up resistor, in the pull select register
    pub const PULLUP: u8 = 0x07;
    /// Pull-down resistor, in the pull select register
    pub const PULLDOWN: u8 = 0x70;
}

/// Register page inside a chip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Page {
    Pwm0 = 0,
    Pwm1 = 1,
    Scaling0 = 2,
    Scaling1 = 3,
    Config = 4,
}

impl Page {
    /// Value written to the command register
    pub fn number(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Page {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Page::Pwm0),
            1 => Ok(Page::Pwm1),
            2 => Ok(Page::Scaling0),
            3 => Ok(Page::Scaling1),
            4 => Ok(Page::Config),
            _ => Err(Error::InvalidArgument),
        }
    }
}

/// One driver chip on the bus, in bus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChipId {
    One,
    Two,
    Three,
    Four,
}

impl ChipId {
    /// All chips in the order multi-chip operations visit them
    pub const ALL: [ChipId; 4] = [ChipId::One, ChipId::Two, ChipId::Three, ChipId::Four];

    /// Zero-based position
    pub fn index(self) -> usize {
        self as usize
    }

    /// Chip at a zero-based position
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Replace the bits selected by `mask` with `value`
///
/// `value` is shifted up to the mask's lowest set bit, then masked, so
/// anything wider than the field is dropped rather than rejected.
pub fn set_bits(register: u8, mask: u8, value: u8) -> u8 {
    if mask == 0 {
        return register;
    }
    let shift = mask.trailing_zeros();
    let aligned = value.wrapping_shl(shift);
    (register & !mask) | (aligned & mask)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_set_bits_aligns_to_mask() {
        assert_eq!(set_bits(0x00, bits::OPEN_SHORT_DETECT, 2), 0x04);
        assert_eq!(set_bits(0x00, bits::SWX_SETTING, 8), 0x80);
        assert_eq!(set_bits(0xFF, bits::SOFTWARE_SHUTDOWN, 0), 0xFE);
        assert_eq!(set_bits(0x0F, bits::PULLDOWN, 7), 0x7F);
    }

    #[test]
    fn test_set_bits_truncates_wide_values() {
        // 0b111 does not fit the 2-bit field at bits 1..=2
        assert_eq!(set_bits(0x00, bits::OPEN_SHORT_DETECT, 7), 0x06);
        assert_eq!(set_bits(0x00, bits::LOGIC_LEVEL, 0xFF), 0x08);
    }

    #[test]
    fn test_set_bits_zero_mask() {
        assert_eq!(set_bits(0x5A, 0, 0xFF), 0x5A);
    }

    #[test]
    fn test_page_numbers() {
        assert_eq!(Page::Config.number(), 4);
        assert_eq!(Page::try_from(3), Ok(Page::Scaling1));
        assert_eq!(Page::try_from(5), Err(Error::InvalidArgument));
    }

    #[test]
    fn test_chip_order() {
        assert_eq!(ChipId::from_index(2), Some(ChipId::Three));
        assert_eq!(ChipId::from_index(4), None);
        assert_eq!(ChipId::Four.index(), 3);
    }

    proptest! {
        #[test]
        fn prop_set_bits_only_touches_mask(register: u8, mask: u8, value: u8) {
            let out = set_bits(register, mask, value);
            prop_assert_eq!(out & !mask, register & !mask);
        }

        #[test]
        fn prop_set_bits_reads_back(register: u8, mask in 1u8.., value: u8) {
            let shift = mask.trailing_zeros();
            let out = set_bits(register, mask, value);
            prop_assert_eq!((out & mask) >> shift, value & (mask >> shift));
        }
    }
}
