//! Random source for the simulated deploy.
//!
//! The browser only offers `Math.random()`, a float in `[0, 1)`. [`UnitRandom`]
//! turns any such source into a `rand::RngCore` so the controller can draw
//! from it the same way tests draw from a seeded `StdRng`.

#[cfg(test)]
#[path = "random_test.rs"]
mod random_test;

use rand::RngCore;

const TWO_POW_32: f64 = 4_294_967_296.0;

/// Scale a unit-interval float to the full `u32` range.
///
/// Values outside `[0, 1)` saturate; NaN maps to zero.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn unit_to_u32(unit: f64) -> u32 {
    (unit * TWO_POW_32) as u32
}

/// `RngCore` over a function returning floats in `[0, 1)`.
pub struct UnitRandom<F> {
    source: F,
}

impl<F: FnMut() -> f64> UnitRandom<F> {
    #[must_use]
    pub fn new(source: F) -> Self {
        Self { source }
    }
}

impl<F: FnMut() -> f64> RngCore for UnitRandom<F> {
    fn next_u32(&mut self) -> u32 {
        unit_to_u32((self.source)())
    }

    fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.next_u32());
        let low = u64::from(self.next_u32());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

/// `Math.random()` as an `RngCore`.
#[cfg(feature = "hydrate")]
pub type BrowserRandom = UnitRandom<fn() -> f64>;

#[cfg(feature = "hydrate")]
#[must_use]
pub fn browser() -> BrowserRandom {
    UnitRandom::new(js_sys::Math::random as fn() -> f64)
}
