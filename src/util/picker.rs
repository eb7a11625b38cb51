//! Pluggable selection of message variants.
//!
//! Pages depend on `MessageSource` rather than a global RNG so that tests can
//! substitute a deterministic picker.

#[cfg(test)]
#[path = "picker_test.rs"]
mod picker_test;

use std::sync::{Mutex, PoisonError};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::copy::{MessageCategory, variants};

/// Chooses which variant of a message family to show.
pub trait MessageSource: Send + Sync {
    /// Return an index in `0..len`. `len` is never zero.
    fn choose(&self, len: usize) -> usize;

    /// Pick one variant of `category`.
    fn pick(&self, category: MessageCategory) -> &'static str {
        let options = variants(category);
        let index = self.choose(options.len());
        options.get(index).or(options.first()).copied().unwrap_or_default()
    }
}

/// Production picker backed by a small seeded RNG.
#[derive(Debug)]
pub struct RandomPicker {
    rng: Mutex<SmallRng>,
}

impl RandomPicker {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(SmallRng::seed_from_u64(seed)),
        }
    }

    /// Seed from browser entropy (`Math.random` mixed with the clock).
    ///
    /// Native builds have no browser, so they fall back to a fixed seed.
    #[must_use]
    pub fn from_browser_entropy() -> Self {
        #[cfg(feature = "csr")]
        {
            let seed = js_sys::Math::random().to_bits() ^ js_sys::Date::now().to_bits();
            Self::seeded(seed)
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::seeded(0x00ca_11c0)
        }
    }

    /// Uniform sample in `[0, 1)`, used for cosmetic jitter.
    pub fn unit(&self) -> f64 {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner).random::<f64>()
    }
}

impl MessageSource for RandomPicker {
    fn choose(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .random_range(0..len)
    }
}
