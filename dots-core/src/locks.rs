//! Per-chip device locks
//!
//! One lock per chip guards that chip's page cache entry and whatever
//! transaction depends on the selected page. A lock is taken with
//! [`DeviceLocks::take`], which hands back a [`DeviceGuard`]; the guard is
//! released with [`DeviceGuard::give`] so the caller sees a release
//! failure. A guard that is dropped instead still releases.
//!
//! Locks are never nested across chips: multi-chip operations finish
//! with one chip before taking the next.

use core::cell::RefCell;
use core::future::poll_fn;
use core::task::{Context, Poll};

use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex as BlockingMutex;
use embassy_sync::waitqueue::WakerRegistration;
use embedded_hal_async::delay::DelayNs;

use crate::codec::{ChipId, Page};
use crate::config::MAX_CHIPS;

/// Lock take/give failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LockError {
    /// The chip is not part of this lock set
    UnknownDevice,
    /// The chip is known but its lock has not been initialised
    Uninitialized,
    /// Another holder kept the lock past the deadline
    Timeout,
    /// Release of a lock that was not held
    NotHeld,
}

/// Counters kept per lock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LockStats {
    pub takes: u32,
    pub gives: u32,
    pub held: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Uninitialized,
    Free,
    Held,
}

struct SlotState {
    phase: Phase,
    page: Option<Page>,
    stats: LockStats,
    waker: WakerRegistration,
}

struct LockSlot<M: RawMutex> {
    state: BlockingMutex<M, RefCell<SlotState>>,
}

impl<M: RawMutex> LockSlot<M> {
    fn new() -> Self {
        Self {
            state: BlockingMutex::new(RefCell::new(SlotState {
                phase: Phase::Uninitialized,
                page: None,
                stats: LockStats::default(),
                waker: WakerRegistration::new(),
            })),
        }
    }

    fn with<R>(&self, f: impl FnOnce(&mut SlotState) -> R) -> R {
        self.state.lock(|state| f(&mut state.borrow_mut()))
    }

    fn poll_take(&self, cx: &mut Context<'_>) -> Poll<Result<(), LockError>> {
        self.with(|s| match s.phase {
            Phase::Uninitialized => Poll::Ready(Err(LockError::Uninitialized)),
            Phase::Free => {
                s.phase = Phase::Held;
                s.stats.takes = s.stats.takes.wrapping_add(1);
                s.stats.held = true;
                Poll::Ready(Ok(()))
            }
            Phase::Held => {
                s.waker.register(cx.waker());
                Poll::Pending
            }
        })
    }

    fn release(&self) -> Result<(), LockError> {
        self.with(|s| match s.phase {
            Phase::Held => {
                s.phase = Phase::Free;
                s.stats.gives = s.stats.gives.wrapping_add(1);
                s.stats.held = false;
                s.waker.wake();
                Ok(())
            }
            Phase::Free => Err(LockError::NotHeld),
            Phase::Uninitialized => Err(LockError::Uninitialized),
        })
    }

    fn reset(&self, phase: Phase) {
        self.with(|s| {
            s.phase = phase;
            s.page = None;
            s.stats = LockStats::default();
            s.waker.wake();
        })
    }
}

/// The lock set for one bus
pub struct DeviceLocks<M: RawMutex> {
    slots: [LockSlot<M>; MAX_CHIPS],
    chip_count: usize,
}

impl<M: RawMutex> DeviceLocks<M> {
    /// Create an uninitialised set for `chip_count` chips
    pub fn new(chip_count: usize) -> Self {
        Self {
            slots: core::array::from_fn(|_| LockSlot::new()),
            chip_count: chip_count.min(MAX_CHIPS),
        }
    }

    /// Make every lock takeable and reset every page cache entry
    pub fn init(&mut self) {
        for slot in &self.slots[..self.chip_count] {
            slot.reset(Phase::Free);
        }
    }

    /// Return every lock to the uninitialised state
    pub fn deinit(&mut self) {
        for slot in &self.slots {
            slot.reset(Phase::Uninitialized);
        }
    }

    /// Number of chips covered
    pub fn chip_count(&self) -> usize {
        self.chip_count
    }

    fn slot(&self, chip: ChipId) -> Result<&LockSlot<M>, LockError> {
        if chip.index() >= self.chip_count {
            return Err(LockError::UnknownDevice);
        }
        Ok(&self.slots[chip.index()])
    }

    /// Take the lock for `chip`, waiting at most `timeout_ms`
    pub async fn take<D: DelayNs>(
        &self,
        chip: ChipId,
        mut delay: D,
        timeout_ms: u32,
    ) -> Result<DeviceGuard<'_, M>, LockError> {
        let slot = self.slot(chip)?;
        let acquire = poll_fn(|cx| slot.poll_take(cx));
        match select(acquire, delay.delay_ms(timeout_ms)).await {
            Either::First(result) => result.map(|()| DeviceGuard {
                slot,
                chip,
                armed: true,
            }),
            Either::Second(()) => Err(LockError::Timeout),
        }
    }

    /// Release the lock for `chip` without its guard
    ///
    /// Fails with [`LockError::NotHeld`] if nobody holds it. A guard for
    /// the same lock will then fail its own release.
    pub fn give(&self, chip: ChipId) -> Result<(), LockError> {
        self.slot(chip)?.release()
    }

    /// Page last recorded for `chip`, read without taking the lock
    pub fn cached_page(&self, chip: ChipId) -> Option<Page> {
        self.slot(chip).ok().and_then(|slot| slot.with(|s| s.page))
    }

    /// Take/give counters for `chip`
    pub fn stats(&self, chip: ChipId) -> Option<LockStats> {
        self.slot(chip).ok().map(|slot| slot.with(|s| s.stats))
    }
}

/// Proof that a chip's lock is held
///
/// The chip's page cache entry is only reachable through the guard.
pub struct DeviceGuard<'a, M: RawMutex> {
    slot: &'a LockSlot<M>,
    chip: ChipId,
    armed: bool,
}

impl<'a, M: RawMutex> DeviceGuard<'a, M> {
    /// Chip this guard locks
    pub fn chip(&self) -> ChipId {
        self.chip
    }

    /// Page the chip is known to have selected, if any
    pub fn cached_page(&self) -> Option<Page> {
        self.slot.with(|s| s.page)
    }

    pub(crate) fn record_page(&self, page: Page) {
        self.slot.with(|s| s.page = Some(page));
    }

    /// Forget the cached page so the next access selects it again
    pub(crate) fn invalidate_page(&self) {
        self.slot.with(|s| s.page = None);
    }

    /// Release the lock
    pub fn give(mut self) -> Result<(), LockError> {
        self.armed = false;
        self.slot.release()
    }
}

impl<M: RawMutex> core::fmt::Debug for DeviceGuard<'_, M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DeviceGuard").field("chip", &self.chip).finish()
    }
}

impl<M: RawMutex> Drop for DeviceGuard<'_, M> {
    fn drop(&mut self) {
        if self.armed {
            if let Err(_e) = self.slot.release() {
                #[cfg(feature = "defmt")]
                defmt::error!("lock for chip {} lost on drop: {}", self.chip, _e);
            }
        }
    }
}
