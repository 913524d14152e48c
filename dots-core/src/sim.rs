//! Simulated matrix bus for host tests

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::vec::Vec;

use dots_hal::{I2cBus, I2cBusError};
use embassy_futures::yield_now;
use embedded_hal_async::delay::DelayNs;

use crate::codec::{config_reg, reg};
use crate::config::BusConfig;

/// One successful bus transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Transfer {
    Write { address: u8, bytes: Vec<u8> },
    Read { address: u8, register: u8 },
    Probe { address: u8 },
}

pub(crate) struct SimChip {
    pub address: u8,
    pub present: bool,
    pub id: u8,
    pub unlocked: bool,
    pub page: u8,
    pub banks: [[u8; 256]; 5],
}

impl SimChip {
    fn new(address: u8) -> Self {
        Self {
            address,
            present: true,
            id: address << 1,
            unlocked: false,
            page: 0,
            banks: [[0; 256]; 5],
        }
    }

    fn software_reset(&mut self) {
        self.unlocked = false;
        self.page = 0;
        self.banks = [[0; 256]; 5];
    }

    fn write(&mut self, register: u8, value: u8, relock: bool) {
        match register {
            reg::WRITE_LOCK => self.unlocked = value == reg::UNLOCK_KEY && !relock,
            reg::COMMAND => {
                if self.unlocked && value <= 4 {
                    self.page = value;
                }
                self.unlocked = false;
            }
            _ => {
                self.banks[self.page as usize][register as usize] = value;
                if self.page == 4
                    && register == config_reg::RESET
                    && value == config_reg::RESET_KEY
                {
                    self.software_reset();
                }
            }
        }
    }

    fn read(&self, register: u8) -> u8 {
        match register {
            reg::WRITE_LOCK if self.unlocked => reg::UNLOCK_KEY,
            reg::WRITE_LOCK => 0,
            reg::ID => self.id,
            reg::COMMAND => self.page,
            _ => self.banks[self.page as usize][register as usize],
        }
    }
}

pub(crate) struct SimState {
    pub chips: Vec<SimChip>,
    pub log: Vec<Transfer>,
    pub relock: bool,
    fail_at: Option<(usize, I2cBusError)>,
    transfers: usize,
}

impl SimState {
    fn begin(&mut self) -> Result<(), I2cBusError> {
        let n = self.transfers;
        self.transfers += 1;
        match self.fail_at {
            Some((at, error)) if at == n => {
                self.fail_at = None;
                Err(error)
            }
            _ => Ok(()),
        }
    }

    fn chip(&mut self, address: u8) -> Result<&mut SimChip, I2cBusError> {
        self.chips
            .iter_mut()
            .find(|c| c.address == address && c.present)
            .ok_or(I2cBusError::Nack)
    }
}

/// Shared handle to a simulated bus
#[derive(Clone)]
pub(crate) struct SimBus {
    state: Rc<RefCell<SimState>>,
}

impl SimBus {
    pub fn new(addresses: &[u8]) -> Self {
        Self {
            state: Rc::new(RefCell::new(SimState {
                chips: addresses.iter().map(|a| SimChip::new(*a)).collect(),
                log: Vec::new(),
                relock: false,
                fail_at: None,
                transfers: 0,
            })),
        }
    }

    pub fn for_config(config: &BusConfig) -> Self {
        Self::new(&config.addresses)
    }

    /// Fail the `n`th transaction from now (0 is the next one)
    pub fn fail_nth(&self, n: usize, error: I2cBusError) {
        let mut state = self.state.borrow_mut();
        state.fail_at = Some((state.transfers + n, error));
    }

    /// Make every chip ignore the unlock key
    pub fn set_relock(&self, relock: bool) {
        self.state.borrow_mut().relock = relock;
    }

    pub fn set_present(&self, address: u8, present: bool) {
        if let Some(chip) = self.state.borrow_mut().chips.iter_mut().find(|c| c.address == address) {
            chip.present = present;
        }
    }

    pub fn set_id(&self, address: u8, id: u8) {
        if let Some(chip) = self.state.borrow_mut().chips.iter_mut().find(|c| c.address == address) {
            chip.id = id;
        }
    }

    pub fn register(&self, address: u8, page: u8, register: u8) -> u8 {
        let state = self.state.borrow();
        let chip = state.chips.iter().find(|c| c.address == address).expect("no such chip");
        chip.banks[page as usize][register as usize]
    }

    pub fn poke(&self, address: u8, page: u8, register: u8, value: u8) {
        let mut state = self.state.borrow_mut();
        let chip = state.chips.iter_mut().find(|c| c.address == address).expect("no such chip");
        chip.banks[page as usize][register as usize] = value;
    }

    pub fn page_of(&self, address: u8) -> u8 {
        let state = self.state.borrow();
        state.chips.iter().find(|c| c.address == address).expect("no such chip").page
    }

    pub fn log(&self) -> Vec<Transfer> {
        self.state.borrow().log.clone()
    }

    pub fn clear_log(&self) {
        self.state.borrow_mut().log.clear();
    }

    /// Register writes other than page selection, as (address, register, value)
    pub fn data_writes(&self) -> Vec<(u8, u8, u8)> {
        self.log()
            .into_iter()
            .filter_map(|t| match t {
                Transfer::Write { address, bytes }
                    if bytes[0] != reg::WRITE_LOCK && bytes[0] != reg::COMMAND =>
                {
                    Some((address, bytes[0], bytes[1]))
                }
                _ => None,
            })
            .collect()
    }

    /// Number of command register writes to `address`
    pub fn page_selects(&self, address: u8) -> usize {
        self.log()
            .iter()
            .filter(|t| {
                matches!(t, Transfer::Write { address: a, bytes } if *a == address && bytes[0] == reg::COMMAND)
            })
            .count()
    }
}

impl I2cBus for SimBus {
    async fn write(&mut self, address: u8, data: &[u8]) -> Result<(), I2cBusError> {
        let mut state = self.state.borrow_mut();
        state.begin()?;
        let relock = state.relock;
        let chip = state.chip(address)?;
        if let [register, value] = data {
            chip.write(*register, *value, relock);
        }
        state.log.push(Transfer::Write {
            address,
            bytes: data.to_vec(),
        });
        Ok(())
    }

    async fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), I2cBusError> {
        let mut state = self.state.borrow_mut();
        state.begin()?;
        let register = write_data[0];
        let value = state.chip(address)?.read(register);
        read_buf.fill(value);
        state.log.push(Transfer::Read { address, register });
        Ok(())
    }

    async fn probe(&mut self, address: u8) -> Result<(), I2cBusError> {
        let mut state = self.state.borrow_mut();
        state.begin()?;
        state.chip(address)?;
        state.log.push(Transfer::Probe { address });
        Ok(())
    }
}

/// Delay that finishes after a fixed number of yields and counts its uses
#[derive(Clone, Default)]
pub(crate) struct TestDelay {
    yields: u32,
    calls: Rc<Cell<u32>>,
}

impl TestDelay {
    /// Completes on first poll
    pub fn new() -> Self {
        Self::default()
    }

    /// Completes after `yields` round trips through the executor
    pub fn yielding(yields: u32) -> Self {
        Self {
            yields,
            calls: Rc::default(),
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.get()
    }
}

impl DelayNs for TestDelay {
    async fn delay_ns(&mut self, _ns: u32) {
        self.calls.set(self.calls.get() + 1);
        for _ in 0..self.yields {
            yield_now().await;
        }
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.delay_ns(ms.saturating_mul(1_000_000)).await
    }
}
