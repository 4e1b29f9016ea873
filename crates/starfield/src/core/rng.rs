//! Seedable pseudo-random number generator (xorshift64).
//! Deterministic, so a seeded field always spawns the same stars.

/// Seedable pseudo-random number generator (xorshift64).
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform float in [0, 1). Uses the top 24 bits so every value is exact in f32.
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u32 << 24) as f32
    }

    /// Uniform float in [min, max).
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        lerp_below(min, max, self.next_f32())
    }
}

/// `min + t * (max - min)` for `t` in [0, 1), never rounding up to `max`.
fn lerp_below(min: f32, max: f32, t: f32) -> f32 {
    let v = (min as f64 + t as f64 * (max as f64 - min as f64)) as f32;
    if v < max {
        v
    } else {
        largest_below(max).max(min)
    }
}

/// Largest finite f32 strictly less than `x`.
fn largest_below(x: f32) -> f32 {
    if x > 0.0 {
        f32::from_bits(x.to_bits() - 1)
    } else if x < 0.0 {
        f32::from_bits(x.to_bits() + 1)
    } else {
        -f32::from_bits(1)
    }
}
