//! Seedable pseudo-random number generator (xorshift64).

/// Deterministic xorshift64 generator.
/// Seeds come from the host (`Math.random`, timestamps), so zero is remapped.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed },
        }
    }

    /// Seed from a float in [0, 1), as handed over by `Math.random()`.
    pub fn from_unit(value: f64) -> Self {
        Self::new((value.clamp(0.0, 1.0) * u64::MAX as f64) as u64)
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Generate a random number in [0, upper_bound). Returns 0 for a zero bound.
    pub fn next_int(&mut self, upper_bound: u32) -> u32 {
        if upper_bound == 0 {
            return 0;
        }
        (self.next_u64() % upper_bound as u64) as u32
    }

    /// Lowercase base-36 token of the given length.
    pub fn token(&mut self, len: usize) -> String {
        const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
        (0..len)
            .map(|_| ALPHABET[self.next_int(36) as usize] as char)
            .collect()
    }
}
