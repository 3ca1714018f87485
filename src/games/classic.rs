//! The classic puzzle: n rings sized 1..=n stacked on one pin.

use tracing::info;

use crate::controller::GameController;
use crate::core::{HanoiConfig, Result};

/// Builder for the classic Towers of Hanoi session.
///
/// Defaults to the reference game: 3 pins, 4 rings, starting on pin 0.
///
/// ```
/// use hanoi_rules::games::ClassicGameBuilder;
///
/// let controller = ClassicGameBuilder::new()
///     .pin_count(4)
///     .ring_count(6)
///     .build()
///     .unwrap();
///
/// assert_eq!(controller.state().board().pin_count(), 4);
/// assert_eq!(controller.state().total_ring_count(), 6);
/// ```
#[derive(Clone, Debug)]
pub struct ClassicGameBuilder {
    pin_count: usize,
    ring_count: u32,
    start_pin: usize,
    win_ring_count: Option<usize>,
}

impl Default for ClassicGameBuilder {
    fn default() -> Self {
        Self {
            pin_count: 3,
            ring_count: 4,
            start_pin: 0,
            win_ring_count: None,
        }
    }
}

impl ClassicGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pin_count(mut self, count: usize) -> Self {
        self.pin_count = count;
        self
    }

    pub fn ring_count(mut self, count: u32) -> Self {
        self.ring_count = count;
        self
    }

    pub fn start_pin(mut self, pin: usize) -> Self {
        self.start_pin = pin;
        self
    }

    pub fn win_ring_count(mut self, count: usize) -> Self {
        self.win_ring_count = Some(count);
        self
    }

    /// The configuration this builder describes.
    pub fn config(&self) -> HanoiConfig {
        let config = HanoiConfig::new(self.pin_count, self.ring_count).with_start_pin(self.start_pin);
        match self.win_ring_count {
            Some(count) => config.with_win_ring_count(count),
            None => config,
        }
    }

    /// Build the session controller.
    pub fn build(self) -> Result<GameController> {
        let config = self.config();
        let controller = GameController::from_config(&config)?;
        info!(
            pins = config.pin_count,
            rings = config.ring_sizes.len(),
            start_pin = config.start_pin,
            "classic game ready"
        );
        Ok(controller)
    }
}
