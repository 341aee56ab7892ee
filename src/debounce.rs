//! Debouncer for one 8-bit input port. Keeps a window of the last DEPTH
//! samples and only reports a press once every sample in the window agrees,
//! so the bouncing of a mechanical contact never reaches the application.

/// Which way a pin is tied while its switch is open.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Pull {
    /// Idle level is high, a press pulls the pin low.
    Up,
    /// Idle level is low, a press drives the pin high.
    Down,
}

/// Pull wiring of the port, fixed at construction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum PullConfig {
    /// Every pin on the port is wired the same way.
    Global(Pull),
    /// Mixed wiring. A set bit marks a pulled-up pin, a clear bit a
    /// pulled-down one.
    PerPin(u8),
}

impl PullConfig {
    /// Collapses the configuration into one mask of pulled-up pins.
    fn pull_up_mask(self) -> u8 {
        match self {
            PullConfig::Global(Pull::Up) => 0xFF,
            PullConfig::Global(Pull::Down) => 0x00,
            PullConfig::PerPin(mask) => mask,
        }
    }
}

impl Default for PullConfig {
    fn default() -> Self {
        PullConfig::Global(Pull::Up)
    }
}

/// Settled state transition of a single pin.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Edge {
    Pressed,
    Released,
}

/// Debounces the eight pins of one port over a window of DEPTH samples.
///
/// Samples are stored normalized, a set bit meaning "pressed" no matter
/// how the pin is wired. The settled state is the AND across the whole
/// window: a pin counts as pressed only after DEPTH consecutive pressed
/// samples, while a single released sample drops it back immediately.
/// DEPTH times the polling period is the settling time; 10 samples at
/// 1 to 10 ms per sample works well for common switches, 3 is a
/// practical minimum.
///
/// One instance serves one port and expects a single execution context.
/// If an interrupt handler and a main loop both touch the same instance,
/// the caller has to mask the interrupt around the access.
pub struct Debouncer<const DEPTH: usize = 10> {
    index: usize,
    history: [u8; DEPTH],
    debounced: u8,
    changed: u8,
    pull_up_mask: u8,
}

impl<const DEPTH: usize> Debouncer<DEPTH> {
    const DEPTH_IN_RANGE: () = assert!(
        DEPTH > 0 && DEPTH <= 255,
        "history depth must be in 1..=255"
    );

    /// A debouncer with every pin idle. The pull configuration cannot
    /// change afterwards.
    pub fn new(pull: PullConfig) -> Self {
        let _: () = Self::DEPTH_IN_RANGE;
        Self {
            index: 0,
            history: [0x00; DEPTH],
            debounced: 0x00,
            changed: 0x00,
            pull_up_mask: pull.pull_up_mask(),
        }
    }

    /// Feeds one raw port sample. Call this on a regular interval, every
    /// 1 to 10 ms; correctness rests on the polling period being roughly
    /// uniform.
    ///
    /// Plays well with pin-change interrupts: leave the port idle until
    /// an interrupt fires, poll while any pin is down, and re-enable the
    /// interrupt once everything has released. The debouncer itself never
    /// touches the hardware.
    pub fn process(&mut self, raw: u8) {
        let previous = self.debounced;

        // Store in "1 = pressed" sense; pulled-up pins read low when pressed.
        self.history[self.index] = raw ^ self.pull_up_mask;

        self.index += 1;
        if self.index >= DEPTH {
            self.index = 0;
        }

        let mut acc = 0xFF;
        self.history.iter().for_each(|sample| acc &= sample);
        self.debounced = acc;
        self.changed = self.debounced ^ previous;
    }

    /// Pins out of `pins` that settled into pressed on the most recent
    /// [`process`](Self::process) call. Not consume-once: the answer stays
    /// the same until the next call.
    pub fn pressed(&self, pins: u8) -> u8 {
        self.changed & self.debounced & pins
    }

    /// Pins out of `pins` that settled into released on the most recent
    /// [`process`](Self::process) call.
    pub fn released(&self, pins: u8) -> u8 {
        self.changed & !self.debounced & pins
    }

    /// Current settled state of `pins`. A set bit means pressed,
    /// regardless of the pin's wiring.
    pub fn state(&self, pins: u8) -> u8 {
        self.debounced & pins
    }

    /// Pins out of `pins` whose settled state flipped on the most recent
    /// [`process`](Self::process) call.
    pub fn changed(&self, pins: u8) -> u8 {
        self.changed & pins
    }

    /// Hands every edge from the most recent [`process`](Self::process)
    /// call to `f` as a pin index (0..8) and the direction it settled in.
    pub fn edges<F>(&self, pins: u8, mut f: F)
    where
        F: FnMut(u8, Edge),
    {
        (0..8).for_each(|pin| {
            let bit = 1 << pin;
            if self.changed & pins & bit != 0 {
                if self.debounced & bit != 0 {
                    f(pin, Edge::Pressed);
                } else {
                    f(pin, Edge::Released);
                }
            }
        });
    }
}

impl<const DEPTH: usize> Default for Debouncer<DEPTH> {
    fn default() -> Self {
        Self::new(PullConfig::default())
    }
}
