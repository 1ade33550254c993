//! Linear congruential generator with explicit 32-bit state.

pub const MULTIPLIER: u32 = 1_103_515_245;
pub const INCREMENT: u32 = 12_345;
/// Output values have the top bit cleared.
pub const VALUE_MASK: u32 = 0x7fff_ffff;

/// Advances the state and returns `(new_state, value)`, where value is a 31-bit number.
/// Arithmetic wraps modulo 2^32.
#[inline]
pub const fn next(state: u32) -> (u32, u32) {
    let new_state = state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
    (new_state, new_state & VALUE_MASK)
}

/// Owned generator state, threaded by mutable reference through the callers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub const fn new(state: u32) -> Self {
        Self { state }
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Draws next 31-bit value.
    #[inline]
    pub fn draw(&mut self) -> u32 {
        let (state, value) = next(self.state);
        self.state = state;
        value
    }
}
