//! Paged register access
//!
//! A register address only means something once the chip has the right
//! page selected. [`BusSession::set_page`] selects it (skipping the bus
//! entirely when the cache already agrees) and returns with the chip's
//! lock still held, so the transaction that needs the page runs before
//! anyone else can switch it.
//!
//! Selecting a page is three transactions:
//!
//! ```text
//! write  0xFE <- 0xC5     unlock the command register
//! read   0xFE == 0xC5     confirm the unlock took
//! write  0xFD <- page     select
//! ```

use core::fmt;

use dots_hal::I2cBus;
use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal_async::delay::DelayNs;
use heapless::Vec;

use crate::codec::{config_reg, reg, ChipId, Page};
use crate::config::MAX_CHIPS;
use crate::error::{Error, Violation};
use crate::locks::DeviceGuard;
use crate::session::BusSession;

/// Failure from [`BusSession::set_page`]
///
/// Whether the chip's lock is still held is part of the variant, so the
/// caller cannot get the release wrong.
pub enum PageError<'a, M: RawMutex> {
    /// Failed before the lock was taken; there is nothing to release
    Unlocked(Error),
    /// Failed with the lock held; the guard must be released
    Locked {
        guard: DeviceGuard<'a, M>,
        cause: Error,
    },
}

impl<M: RawMutex> PageError<'_, M> {
    /// What went wrong
    pub fn cause(&self) -> Error {
        match self {
            PageError::Unlocked(cause) | PageError::Locked { cause, .. } => *cause,
        }
    }

    /// Returns true if this error still holds the chip's lock
    pub fn holds_lock(&self) -> bool {
        matches!(self, PageError::Locked { .. })
    }

    /// Release the lock if held and return the error to propagate
    ///
    /// A release failure replaces the original cause.
    pub fn resolve(self) -> Error {
        match self {
            PageError::Unlocked(cause) => cause,
            PageError::Locked { guard, cause } => match guard.give() {
                Ok(()) => cause,
                Err(_e) => {
                    #[cfg(feature = "defmt")]
                    defmt::error!("release after {} failed: {}", cause, _e);
                    Error::LockRelease
                }
            },
        }
    }
}

impl<M: RawMutex> fmt::Debug for PageError<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageError::Unlocked(cause) => f.debug_tuple("Unlocked").field(cause).finish(),
            PageError::Locked { guard, cause } => f
                .debug_struct("Locked")
                .field("chip", &guard.chip())
                .field("cause", cause)
                .finish(),
        }
    }
}

impl<M: RawMutex, B: I2cBus, D: DelayNs + Clone> BusSession<M, B, D> {
    /// Select `page` on `chip` and return holding the chip's lock
    pub async fn set_page(
        &self,
        chip: ChipId,
        page: Page,
    ) -> Result<DeviceGuard<'_, M>, PageError<'_, M>> {
        let address = self.address(chip).map_err(PageError::Unlocked)?;
        let guard = self
            .lock(chip)
            .await
            .map_err(|e| PageError::Unlocked(e.into()))?;

        if guard.cached_page() == Some(page) {
            return Ok(guard);
        }

        match self.select_page(address, page).await {
            Ok(()) => {
                guard.record_page(page);
                Ok(guard)
            }
            Err(cause) => {
                // The chip may or may not have switched
                guard.invalidate_page();
                Err(PageError::Locked { guard, cause })
            }
        }
    }

    async fn select_page(&self, address: u8, page: Page) -> Result<(), Error> {
        self.write_byte(address, reg::WRITE_LOCK, reg::UNLOCK_KEY)
            .await?;
        if self.read_byte(address, reg::WRITE_LOCK).await? != reg::UNLOCK_KEY {
            return Err(Error::Protocol(Violation::UnlockRejected));
        }
        self.write_byte(address, reg::COMMAND, page.number()).await
    }

    /// Read one register
    pub async fn get_register(&self, chip: ChipId, page: Page, register: u8) -> Result<u8, Error> {
        let address = self.address(chip)?;
        let guard = self
            .set_page(chip, page)
            .await
            .map_err(PageError::resolve)?;
        let result = self.read_byte(address, register).await;
        guard.give().map_err(|_| Error::LockRelease)?;
        result
    }

    /// Write one register
    ///
    /// Writes that can move the chip off the cached page (the command
    /// register, its write lock, the software reset) forget the cached
    /// page before the lock is released.
    pub async fn set_register(
        &self,
        chip: ChipId,
        page: Page,
        register: u8,
        value: u8,
    ) -> Result<(), Error> {
        let address = self.address(chip)?;
        let guard = self
            .set_page(chip, page)
            .await
            .map_err(PageError::resolve)?;
        let result = self.write_byte(address, register, value).await;
        if moves_page(page, register) {
            guard.invalidate_page();
        }
        guard.give().map_err(|_| Error::LockRelease)?;
        result
    }

    /// Read the same register on every chip, in chip order
    ///
    /// Stops at the first failure.
    pub async fn get_registers(&self, page: Page, register: u8) -> Result<Vec<u8, MAX_CHIPS>, Error> {
        let mut values = Vec::new();
        for chip in self.chips() {
            let value = self.get_register(chip, page, register).await?;
            values.push(value).map_err(|_| Error::ResourceExhausted)?;
        }
        Ok(values)
    }

    /// Write the same value to a register on every chip
    ///
    /// Stops at the first failure; chips before it keep the new value.
    pub async fn set_registers(&self, page: Page, register: u8, value: u8) -> Result<(), Error> {
        for chip in self.chips() {
            self.set_register(chip, page, register, value).await?;
        }
        Ok(())
    }

    /// Write a register on every chip, one value per chip
    pub async fn set_registers_separate(
        &self,
        page: Page,
        register: u8,
        values: &[u8],
    ) -> Result<(), Error> {
        if values.len() != self.chip_count() {
            return Err(Error::InvalidArgument);
        }
        for (chip, value) in self.chips().zip(values.iter()) {
            self.set_register(chip, page, register, *value).await?;
        }
        Ok(())
    }
}

/// Returns true if a write to `register` on `page` can change the selected page
fn moves_page(page: Page, register: u8) -> bool {
    matches!(register, reg::COMMAND | reg::WRITE_LOCK)
        || (page == Page::Config && register == config_reg::RESET)
}
