/// Linear congruential generator (Numerical Recipes constants).
///
/// Cheap and deterministic; only used to pick sparkle pixels.
#[derive(Debug, Clone)]
pub struct Lcg {
    seed: u32,
}

impl Lcg {
    pub const fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// Random value in `0..max`; `max == 0` yields 0
    #[allow(clippy::cast_possible_truncation)]
    pub fn next_below(&mut self, max: u8) -> u8 {
        self.seed = self.seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        if max == 0 {
            return 0;
        }
        ((self.seed >> 24) as u8) % max
    }

    /// Random value in `min..max`
    pub fn range(&mut self, min: u8, max: u8) -> u8 {
        min + self.next_below(max.saturating_sub(min))
    }
}

impl Default for Lcg {
    fn default() -> Self {
        Self::new(0)
    }
}
