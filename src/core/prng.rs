// Minimal PRNG (no external crates).
//
// This is NOT cryptographically secure.
// It is used only for reproducible simulation initialization.

/// Seedable xorshift64* generator.
#[derive(Debug, Clone)]
pub struct Prng {
    state: u64,
}

impl Prng {
    pub fn new(seed: u64) -> Self {
        // Avoid a zero state.
        let seed = if seed == 0 { 0x9E3779B97F4A7C15 } else { seed };
        Self { state: seed }
    }

    /// Seed from the system clock, for callers that did not ask for
    /// reproducibility.
    pub fn from_entropy() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x9E3779B97F4A7C15);
        Self::new(nanos)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        // xorshift64*
        // Marsaglia / Vigna family. Simple, fast, decent for simulation noise.
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Uniform sample in [0, 1) with full 53-bit mantissa resolution.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        ((self.next_u64() >> 11) as f64) * (1.0 / 9007199254740992.0)
    }

    #[inline]
    pub fn gen_range_f64(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_f64()
    }

    /// Gaussian sample via Box-Muller.
    ///
    /// Draws a fresh pair of uniforms per call so that the consumed stream
    /// length is independent of call history.
    pub fn normal(&mut self, mean: f64, sd: f64) -> f64 {
        // Map [0, 1) to (0, 1] so the log argument is never zero.
        let u1 = 1.0 - self.next_f64();
        let u2 = self.next_f64();
        let r = (-2.0 * u1.ln()).sqrt();
        mean + sd * r * (core::f64::consts::TAU * u2).cos()
    }
}
