//! Bus session
//!
//! Owns the bus, the per-chip device handles and the lock set that
//! carries each chip's page cache. Everything above this layer reaches
//! the chips through a session.

use dots_hal::I2cBus;
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::Mutex;
use embedded_hal_async::delay::DelayNs;
use heapless::Vec;

use crate::codec::{reg, ChipId};
use crate::config::{BusConfig, MAX_CHIPS};
use crate::error::{Error, Violation};
use crate::locks::{DeviceGuard, DeviceLocks, LockError};

/// A chip registered on the bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Device {
    pub chip: ChipId,
    /// 7-bit bus address
    pub address: u8,
}

impl Device {
    /// Value the chip's identification register must hold
    pub fn expected_id(&self) -> u8 {
        self.address << 1
    }
}

/// Failed [`BusSession::open`], handing the bus back to the caller
pub struct OpenError<B> {
    pub error: Error,
    pub bus: B,
}

/// An open bus with every chip registered
pub struct BusSession<M: RawMutex, B: I2cBus, D: DelayNs + Clone> {
    bus: Mutex<M, B>,
    devices: Vec<Device, MAX_CHIPS>,
    locks: DeviceLocks<M>,
    delay: D,
    lock_timeout_ms: u32,
}

impl<M: RawMutex, B: I2cBus, D: DelayNs + Clone> BusSession<M, B, D> {
    /// Register every chip in `config` on `bus`
    ///
    /// No I/O happens here; presence is checked by
    /// [`assert_connected`](Self::assert_connected). On failure nothing
    /// from the attempt survives except the bus itself.
    pub fn open(bus: B, config: &BusConfig, delay: D) -> Result<Self, OpenError<B>> {
        let devices = match register_devices(config) {
            Ok(devices) => devices,
            Err(error) => return Err(OpenError { error, bus }),
        };

        let mut locks = DeviceLocks::new(devices.len());
        locks.init();

        Ok(Self {
            bus: Mutex::new(bus),
            devices,
            locks,
            delay,
            lock_timeout_ms: config.lock_timeout_ms,
        })
    }

    /// Probe every chip and check its identification register
    ///
    /// A chip that does not acknowledge gives [`Error::NotFound`]; one
    /// that answers with the wrong id gives a protocol violation.
    pub async fn assert_connected(&self) -> Result<(), Error> {
        for device in &self.devices {
            let guard = self.lock(device.chip).await?;
            let result = self.check_device(device).await;
            guard.give().map_err(|_| Error::LockRelease)?;
            result?;
        }
        Ok(())
    }

    async fn check_device(&self, device: &Device) -> Result<(), Error> {
        {
            let mut bus = self.bus.lock().await;
            bus.probe(device.address).await.map_err(|_| Error::NotFound)?;
        }
        let found = self.read_byte(device.address, reg::ID).await?;
        if found != device.expected_id() {
            return Err(Error::Protocol(Violation::IdMismatch {
                expected: device.expected_id(),
                found,
            }));
        }
        Ok(())
    }

    /// Tear the session down and give back the bus
    pub fn close(self) -> B {
        let Self { bus, mut locks, .. } = self;
        locks.deinit();
        bus.into_inner()
    }

    /// Registered chips in bus order
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// Chips in the order multi-chip operations visit them
    pub fn chips(&self) -> impl Iterator<Item = ChipId> + '_ {
        self.devices.iter().map(|d| d.chip)
    }

    /// Number of registered chips
    pub fn chip_count(&self) -> usize {
        self.devices.len()
    }

    /// Bus address of `chip`
    pub fn address(&self, chip: ChipId) -> Result<u8, Error> {
        self.devices
            .get(chip.index())
            .map(|d| d.address)
            .ok_or(Error::UnknownDevice)
    }

    /// The lock set, for inspection
    pub fn locks(&self) -> &DeviceLocks<M> {
        &self.locks
    }

    pub(crate) async fn lock(&self, chip: ChipId) -> Result<DeviceGuard<'_, M>, LockError> {
        self.locks
            .take(chip, self.delay.clone(), self.lock_timeout_ms)
            .await
    }

    pub(crate) async fn write_byte(&self, address: u8, register: u8, value: u8) -> Result<(), Error> {
        let mut bus = self.bus.lock().await;
        bus.write(address, &[register, value]).await?;
        Ok(())
    }

    pub(crate) async fn read_byte(&self, address: u8, register: u8) -> Result<u8, Error> {
        let mut buf = [0u8; 1];
        let mut bus = self.bus.lock().await;
        bus.write_read(address, &[register], &mut buf).await?;
        Ok(buf[0])
    }
}

fn register_devices(config: &BusConfig) -> Result<Vec<Device, MAX_CHIPS>, Error> {
    config.validate()?;
    let mut devices = Vec::new();
    for (index, address) in config.addresses.iter().enumerate() {
        let chip = ChipId::from_index(index).ok_or(Error::ResourceExhausted)?;
        devices
            .push(Device {
                chip,
                address: *address,
            })
            .map_err(|_| Error::ResourceExhausted)?;
    }
    Ok(devices)
}
