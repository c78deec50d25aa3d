use std::time::Duration;

use rand::Rng;

use crate::error::ConfigError;

/// Upper bound accepted for either delay setting.
pub const MAX_DELAY_MS: i64 = 10_000;

/// Validated response delay bounds, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayConfig {
    min_ms: u64,
    max_ms: u64,
}

impl DelayConfig {
    pub fn new(min_ms: i64, max_ms: i64) -> Result<Self, ConfigError> {
        if min_ms < 0 {
            return Err(ConfigError::NegativeMinDelay(min_ms));
        }
        if max_ms > MAX_DELAY_MS {
            return Err(ConfigError::MaxDelayTooLarge {
                got: max_ms,
                limit: MAX_DELAY_MS,
            });
        }
        if min_ms > max_ms {
            return Err(ConfigError::InvertedDelayBounds {
                min: min_ms,
                max: max_ms,
            });
        }

        Ok(Self {
            min_ms: min_ms as u64,
            max_ms: max_ms as u64,
        })
    }

    pub fn min_ms(&self) -> u64 {
        self.min_ms
    }

    pub fn max_ms(&self) -> u64 {
        self.max_ms
    }

    /// Uniform over the closed interval `[min_ms, max_ms]`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        Duration::from_millis(rng.gen_range(self.min_ms..=self.max_ms))
    }
}
