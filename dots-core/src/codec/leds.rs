//! Logical LED numbering
//!
//! LEDs are numbered from 1. Each maps to three PWM/scaling register
//! addresses on one chip, in one of the chip's two page pairs.

use super::led_table::{LED_COUNT, LED_TABLE};
use super::{ChipId, Page};
use crate::error::Error;

/// Legacy numbers that address the last two table slots
const ALIASES: [(u16, u16); 2] = [(329, 325), (330, 326)];

/// Which chip an LED lives on and which page pair holds its registers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MatrixLocation {
    Mat1Page0,
    Mat1Page1,
    Mat2Page0,
    Mat2Page1,
    Mat3Page0,
    Mat3Page1,
    Mat4Page0,
    Mat4Page1,
}

impl MatrixLocation {
    /// Chip holding the LED
    pub fn chip(self) -> ChipId {
        match self {
            Self::Mat1Page0 | Self::Mat1Page1 => ChipId::One,
            Self::Mat2Page0 | Self::Mat2Page1 => ChipId::Two,
            Self::Mat3Page0 | Self::Mat3Page1 => ChipId::Three,
            Self::Mat4Page0 | Self::Mat4Page1 => ChipId::Four,
        }
    }

    fn upper_pair(self) -> bool {
        matches!(
            self,
            Self::Mat1Page1 | Self::Mat2Page1 | Self::Mat3Page1 | Self::Mat4Page1
        )
    }

    /// Page holding the LED's PWM (color) registers
    pub fn pwm_page(self) -> Page {
        if self.upper_pair() {
            Page::Pwm1
        } else {
            Page::Pwm0
        }
    }

    /// Page holding the LED's scaling (brightness) registers
    pub fn scaling_page(self) -> Page {
        if self.upper_pair() {
            Page::Scaling1
        } else {
            Page::Scaling0
        }
    }
}

/// Register addresses for one LED
///
/// The same three addresses are used on the PWM page and the scaling page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedRegisters {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub location: MatrixLocation,
}

/// Look up the registers for a 1-based LED number
///
/// Legacy aliases are remapped before the range check, so 329 and 330
/// resolve while 327 and 328 do not.
pub fn led_registers(led: u16) -> Result<&'static LedRegisters, Error> {
    let led = ALIASES
        .iter()
        .find(|(alias, _)| *alias == led)
        .map_or(led, |(_, target)| *target);

    if led == 0 || led as usize > LED_COUNT {
        return Err(Error::InvalidArgument);
    }
    Ok(&LED_TABLE[led as usize - 1])
}
