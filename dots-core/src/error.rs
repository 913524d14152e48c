//! Error taxonomy for the register and session layers
//!
//! Everything below the gatekeeper returns [`Error`]. The gatekeeper folds
//! it into a two-valued sentinel, so detail is only visible to the
//! layers that can act on it.

use dots_hal::I2cBusError;

use crate::locks::LockError;

/// Bus protocol violations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Violation {
    /// The write-lock register did not read back as the unlock key
    UnlockRejected,
    /// The identification register did not hold the expected value
    IdMismatch { expected: u8, found: u8 },
}

/// Register, lock and session errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Rejected before any I/O
    InvalidArgument,
    /// A fixed-capacity table is full
    ResourceExhausted,
    /// A bus transaction ran past its deadline
    BusTimeout,
    /// The bus reported a failure other than a timeout
    Bus(I2cBusError),
    /// A chip answered but not the way the protocol requires
    Protocol(Violation),
    /// A chip did not acknowledge its address
    NotFound,
    /// The device lock could not be taken in time
    LockTimeout,
    /// The device lock could not be released; its state is no longer known
    LockRelease,
    /// The chip is not part of this session
    UnknownDevice,
    /// The device lock set has not been initialised
    Uninitialized,
}

impl Error {
    /// Returns true for errors after which lock state cannot be trusted
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::LockRelease)
    }
}

impl From<I2cBusError> for Error {
    fn from(e: I2cBusError) -> Self {
        if e.is_timeout() {
            Error::BusTimeout
        } else {
            Error::Bus(e)
        }
    }
}

impl From<LockError> for Error {
    fn from(e: LockError) -> Self {
        match e {
            LockError::UnknownDevice => Error::UnknownDevice,
            LockError::Uninitialized => Error::Uninitialized,
            LockError::Timeout => Error::LockTimeout,
            LockError::NotHeld => Error::LockRelease,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bus_timeout_is_distinct() {
        assert_eq!(Error::from(I2cBusError::Timeout), Error::BusTimeout);
        assert_eq!(Error::from(I2cBusError::Nack), Error::Bus(I2cBusError::Nack));
    }

    #[test]
    fn test_lock_errors() {
        assert_eq!(Error::from(LockError::Timeout), Error::LockTimeout);
        assert_eq!(Error::from(LockError::NotHeld), Error::LockRelease);
        assert!(Error::LockRelease.is_fatal());
        assert!(!Error::LockTimeout.is_fatal());
    }
}
