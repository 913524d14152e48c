//! Gatekeeper worker
//!
//! The only code that drives the bus. It opens the session, waits for
//! every chip to answer, then serves queued commands one at a time in
//! arrival order.
//!
//! ```text
//! Initializing ──open ok──▶ Probing ──all chips answer──▶ Serving
//!      ▲   │                   ▲  │
//!      └───┘ retry             └──┘ retry
//! ```
//!
//! Neither retry loop gives up: a display without its chips stays in
//! place rather than serving commands against a dead bus.

use dots_hal::I2cBus;
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Receiver;
use embedded_hal_async::delay::DelayNs;

use crate::command::{sentinel, Command, Request};
use crate::config::GatekeeperConfig;
use crate::error::Error;
use crate::session::{BusSession, OpenError};

/// Lifecycle of the worker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GatekeeperState {
    /// Registering the chips on the bus
    Initializing,
    /// Waiting for every chip to answer
    Probing,
    /// Consuming the command queue
    Serving,
}

/// The bus-owning worker
pub struct Gatekeeper<'q, 'm, M: RawMutex, B: I2cBus, D: DelayNs + Clone, const N: usize> {
    queue: Receiver<'q, M, Command<'m, M>, N>,
    config: GatekeeperConfig,
    delay: D,
    state: GatekeeperState,
    session: Option<BusSession<M, B, D>>,
    #[cfg(any(test, feature = "testing"))]
    idle_bus: Option<B>,
}

impl<'q, 'm, M: RawMutex, B: I2cBus, D: DelayNs + Clone, const N: usize> Gatekeeper<'q, 'm, M, B, D, N> {
    pub fn new(
        queue: Receiver<'q, M, Command<'m, M>, N>,
        config: GatekeeperConfig,
        delay: D,
    ) -> Self {
        Self {
            queue,
            config,
            delay,
            state: GatekeeperState::Initializing,
            session: None,
            #[cfg(any(test, feature = "testing"))]
            idle_bus: None,
        }
    }

    pub fn state(&self) -> GatekeeperState {
        self.state
    }

    /// The open session, if any
    pub fn session(&self) -> Option<&BusSession<M, B, D>> {
        self.session.as_ref()
    }

    /// Open the bus and probe until every chip answers, then serve forever
    pub async fn run(mut self, bus: B) {
        self.start(bus).await;
        self.serve().await
    }

    /// Bring the bus up and return once the chips are reachable
    pub async fn start(&mut self, bus: B) {
        self.state = GatekeeperState::Initializing;
        let session = self.open(bus).await;

        self.state = GatekeeperState::Probing;
        self.probe(&session).await;

        self.session = Some(session);
        self.state = GatekeeperState::Serving;
        #[cfg(feature = "defmt")]
        defmt::info!("gatekeeper serving {} chips", self.config.bus.chip_count());
    }

    async fn open(&mut self, mut bus: B) -> BusSession<M, B, D> {
        loop {
            match BusSession::open(bus, &self.config.bus, self.delay.clone()) {
                Ok(session) => return session,
                Err(OpenError { error: _error, bus: returned }) => {
                    #[cfg(feature = "defmt")]
                    defmt::error!("could not open matrix bus: {}", _error);
                    bus = returned;
                }
            }
            self.delay.delay_ms(self.config.probe_retry_ms).await;
        }
    }

    async fn probe(&mut self, session: &BusSession<M, B, D>) {
        loop {
            match session.assert_connected().await {
                Ok(()) => return,
                Err(Error::NotFound) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("matrices not found, retrying");
                }
                Err(_e) => {
                    #[cfg(feature = "defmt")]
                    defmt::error!("unexpected failure probing matrices: {}", _e);
                }
            }
            self.delay.delay_ms(self.config.probe_retry_ms).await;
        }
    }

    /// Serve commands forever
    pub async fn serve(&mut self) {
        loop {
            self.serve_one().await;
        }
    }

    /// Wait for the next command and run it
    pub async fn serve_one(&mut self) {
        let command = self.queue.receive().await;
        self.execute(command).await;
    }

    /// Run one command and report its outcome
    ///
    /// The command, and with it its payload, is consumed here whether the
    /// request succeeds or not.
    pub async fn execute(&mut self, command: Command<'m, M>) {
        let Command { request, notify } = command;
        #[cfg(feature = "defmt")]
        defmt::debug!("dispatch {}", request);

        let result = self.dispatch(request).await;
        if let Err(_e) = &result {
            #[cfg(feature = "defmt")]
            {
                defmt::error!("matrix command failed: {}", _e);
                if _e.is_fatal() {
                    defmt::error!("device lock state lost, restart required");
                }
            }
        }

        if let Some(mailbox) = notify {
            mailbox.signal(sentinel(&result));
        }
    }

    fn live(&self) -> Result<&BusSession<M, B, D>, Error> {
        self.session.as_ref().ok_or(Error::Uninitialized)
    }

    async fn dispatch(&mut self, request: Request) -> Result<(), Error> {
        match request {
            Request::SetOperatingMode(mode) => self.live()?.set_operating_mode(mode).await,
            Request::SetOpenShortDetection(detection) => {
                self.live()?.set_open_short_detection(detection).await
            }
            Request::SetLogicLevel(level) => self.live()?.set_logic_level(level).await,
            Request::SetSwxSetting(setting) => self.live()?.set_swx_setting(setting).await,
            Request::SetGlobalCurrent(current) => self.live()?.set_global_current(current).await,
            Request::SetPullup(setting) => self.live()?.set_pullup(setting).await,
            Request::SetPulldown(setting) => self.live()?.set_pulldown(setting).await,
            Request::SetPwmFrequency(frequency) => {
                self.live()?.set_pwm_frequency(frequency).await
            }
            Request::Reset => self.live()?.reset().await,
            Request::SetColor(payload) => self.live()?.set_color(payload.led, payload.rgb).await,
            Request::SetScaling(payload) => {
                self.live()?.set_scaling(payload.led, payload.rgb).await
            }
            #[cfg(any(test, feature = "testing"))]
            Request::ReleaseBus => self.release_bus(),
            #[cfg(any(test, feature = "testing"))]
            Request::ReacquireBus => self.reacquire_bus().await,
            #[cfg(any(test, feature = "testing"))]
            Request::NotifyOk => Ok(()),
            // Reported as if the bus had failed
            #[cfg(any(test, feature = "testing"))]
            Request::NotifyErr => Err(Error::Bus(dots_hal::I2cBusError::Other)),
        }
    }

    #[cfg(any(test, feature = "testing"))]
    fn release_bus(&mut self) -> Result<(), Error> {
        if let Some(session) = self.session.take() {
            self.idle_bus = Some(session.close());
        }
        Ok(())
    }

    #[cfg(any(test, feature = "testing"))]
    async fn reacquire_bus(&mut self) -> Result<(), Error> {
        if self.session.is_some() {
            return Ok(());
        }
        let bus = self.idle_bus.take().ok_or(Error::Uninitialized)?;
        match BusSession::open(bus, &self.config.bus, self.delay.clone()) {
            Ok(session) => {
                let connected = session.assert_connected().await;
                self.session = Some(session);
                connected
            }
            Err(OpenError { error, bus }) => {
                self.idle_bus = Some(bus);
                Err(error)
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::codec::{config_reg, ChipId, Page};
    use crate::command::{LedPayload, Mailbox, NOTIFY_ERR, NOTIFY_OK};
    use crate::config::BusConfig;
    use crate::matrix::Rgb;
    use crate::settings::Operation;
    use crate::sim::{SimBus, TestDelay};
    use dots_hal::{I2cBusError, I2cConfig};
    use embassy_futures::block_on;
    use embassy_futures::select::{select, Either};
    use embassy_futures::yield_now;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;
    use embassy_sync::channel::Channel;
    use embassy_sync::signal::Signal;

    pub(crate) const DEPTH: usize = 4;
    pub(crate) type Queue<'m> = Channel<NoopRawMutex, Command<'m, NoopRawMutex>, DEPTH>;
    pub(crate) type TestGatekeeper<'q, 'm> =
        Gatekeeper<'q, 'm, NoopRawMutex, SimBus, TestDelay, DEPTH>;

    /// Gatekeeper that has already reached the serving state
    pub(crate) fn serving<'q, 'm>(queue: &'q Queue<'m>) -> (TestGatekeeper<'q, 'm>, SimBus) {
        let config = GatekeeperConfig::default();
        let sim = SimBus::for_config(&config.bus);
        let mut gatekeeper = Gatekeeper::new(queue.receiver(), config, TestDelay::new());
        block_on(gatekeeper.start(sim.clone()));
        sim.clear_log();
        (gatekeeper, sim)
    }

    fn color(led: u16, rgb: Rgb) -> Request {
        Request::SetColor(LedPayload { led, rgb })
    }

    #[test]
    fn test_start_reaches_serving() {
        let queue = Queue::new();
        let (gatekeeper, _sim) = serving(&queue);
        assert_eq!(gatekeeper.state(), GatekeeperState::Serving);
        assert_eq!(gatekeeper.session().unwrap().chip_count(), 3);
    }

    #[test]
    fn test_probe_retries_until_found() {
        let queue = Queue::new();
        let config = GatekeeperConfig::default();
        let sim = SimBus::for_config(&config.bus);
        let delay = TestDelay::new();
        let mut gatekeeper: TestGatekeeper<'_, '_> =
            Gatekeeper::new(queue.receiver(), config, delay.clone());

        sim.fail_nth(0, I2cBusError::Nack);
        block_on(gatekeeper.start(sim.clone()));

        assert_eq!(gatekeeper.state(), GatekeeperState::Serving);
        assert_eq!(delay.calls(), 1);
    }

    #[test]
    fn test_probing_never_gives_up() {
        let queue = Queue::new();
        let config = GatekeeperConfig::default();
        let sim = SimBus::for_config(&config.bus);
        sim.set_present(0x33, false);
        let delay = TestDelay::yielding(1);
        let mut gatekeeper: TestGatekeeper<'_, '_> =
            Gatekeeper::new(queue.receiver(), config, delay.clone());

        let outcome = block_on(select(gatekeeper.start(sim.clone()), async {
            for _ in 0..50 {
                yield_now().await;
            }
        }));
        assert!(matches!(outcome, Either::Second(())));
        assert_eq!(gatekeeper.state(), GatekeeperState::Probing);
        assert!(delay.calls() > 5);
        assert!(gatekeeper.session().is_none());
    }

    #[test]
    fn test_bad_config_stays_initializing() {
        let queue = Queue::new();
        let mut config = GatekeeperConfig::default();
        config.bus = BusConfig::new(I2cConfig::FAST, &[0x30, 0x30, 0x32]).unwrap();
        let sim = SimBus::new(&[0x30, 0x32]);
        let delay = TestDelay::yielding(1);
        let mut gatekeeper: TestGatekeeper<'_, '_> =
            Gatekeeper::new(queue.receiver(), config, delay.clone());

        let outcome = block_on(select(gatekeeper.start(sim.clone()), async {
            for _ in 0..20 {
                yield_now().await;
            }
        }));
        assert!(matches!(outcome, Either::Second(())));
        assert_eq!(gatekeeper.state(), GatekeeperState::Initializing);
        assert!(sim.log().is_empty());
    }

    #[test]
    fn test_execute_notifies_success() {
        let mailbox: Mailbox<NoopRawMutex> = Signal::new();
        let queue = Queue::new();
        let (mut gatekeeper, sim) = serving(&queue);

        block_on(gatekeeper.execute(Command::notifying(color(1, Rgb::new(9, 8, 7)), &mailbox)));

        assert_eq!(mailbox.try_take(), Some(NOTIFY_OK));
        assert_eq!(sim.register(0x30, 1, 0x8D), 9);
    }

    #[test]
    fn test_execute_notifies_failure() {
        let mailbox: Mailbox<NoopRawMutex> = Signal::new();
        let queue = Queue::new();
        let (mut gatekeeper, sim) = serving(&queue);
        sim.fail_nth(0, I2cBusError::Timeout);

        block_on(gatekeeper.execute(Command::notifying(Request::Reset, &mailbox)));

        assert_eq!(mailbox.try_take(), Some(NOTIFY_ERR));
        // Exactly one reply
        assert_eq!(mailbox.try_take(), None);
    }

    #[test]
    fn test_silent_failure_leaves_mailbox_alone() {
        let mailbox: Mailbox<NoopRawMutex> = Signal::new();
        let queue = Queue::new();
        let (mut gatekeeper, sim) = serving(&queue);
        mailbox.signal(2);
        sim.fail_nth(0, I2cBusError::Nack);

        block_on(gatekeeper.execute(Command::silent(Request::SetGlobalCurrent(1))));

        assert_eq!(mailbox.try_take(), Some(2));
    }

    #[test]
    fn test_queue_is_served_in_order() {
        let queue = Queue::new();
        let (mut gatekeeper, sim) = serving(&queue);
        for current in [1u8, 2, 3] {
            queue
                .try_send(Command::silent(Request::SetGlobalCurrent(current)))
                .ok()
                .unwrap();
        }

        block_on(async {
            for _ in 0..3 {
                gatekeeper.serve_one().await;
            }
        });

        assert!(queue.is_empty());
        let currents: std::vec::Vec<u8> = sim
            .data_writes()
            .iter()
            .filter(|w| w.0 == 0x30 && w.1 == config_reg::GLOBAL_CURRENT)
            .map(|w| w.2)
            .collect();
        assert_eq!(currents, [1, 2, 3]);
    }

    #[test]
    fn test_failed_command_does_not_block_the_next() {
        let mailbox: Mailbox<NoopRawMutex> = Signal::new();
        let queue = Queue::new();
        let (mut gatekeeper, sim) = serving(&queue);
        queue.try_send(Command::silent(color(0, Rgb::OFF))).ok().unwrap();
        queue
            .try_send(Command::notifying(Request::SetOperatingMode(Operation::Normal), &mailbox))
            .ok()
            .unwrap();

        block_on(async {
            gatekeeper.serve_one().await;
            gatekeeper.serve_one().await;
        });

        assert_eq!(mailbox.try_take(), Some(NOTIFY_OK));
        assert_eq!(sim.register(0x32, 4, config_reg::CONFIGURATION), 0x01);
    }

    #[test]
    fn test_release_and_reacquire_bus() {
        let mailbox: Mailbox<NoopRawMutex> = Signal::new();
        let queue = Queue::new();
        let (mut gatekeeper, sim) = serving(&queue);

        block_on(async {
            gatekeeper.execute(Command::notifying(Request::ReleaseBus, &mailbox)).await;
            assert_eq!(mailbox.try_take(), Some(NOTIFY_OK));
            assert!(gatekeeper.session().is_none());

            gatekeeper.execute(Command::notifying(color(1, Rgb::OFF), &mailbox)).await;
            assert_eq!(mailbox.try_take(), Some(NOTIFY_ERR));
            assert!(sim.log().is_empty());

            gatekeeper.execute(Command::notifying(Request::ReacquireBus, &mailbox)).await;
            assert_eq!(mailbox.try_take(), Some(NOTIFY_OK));

            gatekeeper.execute(Command::notifying(color(1, Rgb::OFF), &mailbox)).await;
            assert_eq!(mailbox.try_take(), Some(NOTIFY_OK));
        });

        // The reopened session had to select the page again
        let session = gatekeeper.session().unwrap();
        assert_eq!(session.locks().cached_page(ChipId::One), Some(Page::Pwm1));
        assert_eq!(sim.page_selects(0x30), 1);
    }

    #[test]
    fn test_loopback_sentinels() {
        let mailbox: Mailbox<NoopRawMutex> = Signal::new();
        let queue = Queue::new();
        let (mut gatekeeper, sim) = serving(&queue);
        block_on(async {
            gatekeeper.execute(Command::notifying(Request::NotifyErr, &mailbox)).await;
            assert_eq!(mailbox.try_take(), Some(NOTIFY_ERR));
            gatekeeper.execute(Command::notifying(Request::NotifyOk, &mailbox)).await;
            assert_eq!(mailbox.try_take(), Some(NOTIFY_OK));
        });
        assert!(sim.log().is_empty());
    }
}
