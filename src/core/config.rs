//! Game configuration.
//!
//! The reference game has three pins and four rings sized 1 to 4, all
//! starting on the leftmost pin. Nothing in the engine hardcodes those
//! numbers: games describe their board with `HanoiConfig`, either in code
//! or from TOML.
//!
//! ```
//! use hanoi_rules::core::HanoiConfig;
//!
//! let config = HanoiConfig::from_toml_str(
//!     r#"
//!     pin_count = 4
//!     ring_sizes = [5, 4, 3, 2, 1]
//!     start_pin = 1
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.pin_count, 4);
//! assert_eq!(config.total_ring_count(), 5);
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::entity::PinId;
use super::error::{Result, SetupError};

/// Board layout and win parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HanoiConfig {
    /// Number of pins on the board.
    pub pin_count: usize,

    /// Sizes of the rings stacked on the start pin. Order does not matter;
    /// rings are always stacked largest at the bottom.
    pub ring_sizes: Vec<u32>,

    /// Index of the pin holding every ring when the game starts.
    pub start_pin: usize,

    /// Rings a non-start pin must hold to win. `None` means every ring.
    pub win_ring_count: Option<usize>,
}

impl Default for HanoiConfig {
    fn default() -> Self {
        Self::new(3, 4)
    }
}

impl HanoiConfig {
    /// Create a config with `ring_count` rings sized `1..=ring_count` on pin 0.
    #[must_use]
    pub fn new(pin_count: usize, ring_count: u32) -> Self {
        Self {
            pin_count,
            ring_sizes: (1..=ring_count).rev().collect(),
            start_pin: 0,
            win_ring_count: None,
        }
    }

    /// Parse and validate a TOML configuration. Missing keys take the
    /// default game's values.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the start pin.
    #[must_use]
    pub fn with_start_pin(mut self, start_pin: usize) -> Self {
        self.start_pin = start_pin;
        self
    }

    /// Use explicit ring sizes.
    #[must_use]
    pub fn with_ring_sizes(mut self, sizes: impl Into<Vec<u32>>) -> Self {
        self.ring_sizes = sizes.into();
        self
    }

    /// Override how many rings a pin must hold to win.
    #[must_use]
    pub fn with_win_ring_count(mut self, count: usize) -> Self {
        self.win_ring_count = Some(count);
        self
    }

    /// Start pin as a handle, or `None` if it does not fit a `PinId`.
    #[must_use]
    pub fn start_pin_id(&self) -> Option<PinId> {
        u16::try_from(self.start_pin).ok().map(PinId)
    }

    /// Rings required on a non-start pin to win.
    #[must_use]
    pub fn total_ring_count(&self) -> usize {
        self.win_ring_count.unwrap_or(self.ring_sizes.len())
    }

    /// Ring sizes sorted bottom to top (largest first).
    #[must_use]
    pub fn stacked_sizes(&self) -> Vec<u32> {
        let mut sizes = self.ring_sizes.clone();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes
    }

    /// Check the configuration describes a playable board.
    pub fn validate(&self) -> Result<()> {
        if self.pin_count == 0 {
            return Err(SetupError::NoPins);
        }
        if self.pin_count > usize::from(u16::MAX) {
            return Err(SetupError::TooManyPins(self.pin_count));
        }
        if self.ring_sizes.is_empty() {
            return Err(SetupError::NoRings);
        }
        if self.start_pin >= self.pin_count {
            return Err(SetupError::StartPinOutOfRange {
                start_pin: self.start_pin,
                pin_count: self.pin_count,
            });
        }

        let mut seen = FxHashSet::default();
        for &size in &self.ring_sizes {
            if size == 0 {
                return Err(SetupError::ZeroSize);
            }
            if !seen.insert(size) {
                return Err(SetupError::DuplicateSize(size));
            }
        }

        let total = self.total_ring_count();
        if total == 0 || total > self.ring_sizes.len() {
            return Err(SetupError::TotalRingCount {
                configured: total,
                actual: self.ring_sizes.len(),
            });
        }

        Ok(())
    }
}
