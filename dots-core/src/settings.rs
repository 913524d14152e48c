//! Chip configuration values
//!
//! Each setting is a closed enum whose discriminant is the raw field value
//! written into the chip. `TryFrom<u8>` is the validation step for values
//! arriving from outside the type system.

use crate::error::Error;

macro_rules! field_value {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        #[repr(u8)]
        pub enum $name {
            $($(#[$vmeta])* $variant = $value,)+
        }

        impl $name {
            /// Raw value for the register field
            pub fn bits(self) -> u8 {
                self as u8
            }
        }

        impl TryFrom<u8> for $name {
            type Error = Error;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $($value => Ok($name::$variant),)+
                    _ => Err(Error::InvalidArgument),
                }
            }
        }
    };
}

field_value! {
    /// Software shutdown control
    Operation {
        SoftwareShutdown = 0,
        Normal = 1,
    }
}

field_value! {
    /// Open/short detection mode
    ShortDetection {
        Disabled = 0,
        Open = 1,
        Short = 2,
        RedundantOpen = 3,
    }
}

field_value! {
    /// SDA/SCL input logic level
    LogicLevel {
        /// 2.4V high, 0.6V low
        Standard = 0,
        /// 1.4V high, 0.4V low
        Alternate = 1,
    }
}

field_value! {
    /// Number of active SWx switch outputs
    SwxSetting {
        Nine = 0,
        Eight = 1,
        Seven = 2,
        Six = 3,
        Five = 4,
        Four = 5,
        Three = 6,
        Two = 7,
        /// All switches off, current sink only
        CurrentSinkOnly = 8,
    }
}

field_value! {
    /// Pull-up or pull-down resistor value
    ResistorSetting {
        None = 0,
        HalfK = 1,
        OneK = 2,
        TwoK = 3,
        FourK = 4,
        EightK = 5,
        SixteenK = 6,
        ThirtyTwoK = 7,
    }
}

field_value! {
    /// PWM output frequency
    PwmFrequency {
        Khz29 = 0,
        Khz3_6 = 2,
        Khz1_8 = 7,
        Hz900 = 11,
    }
}
