use rand::{rngs::StdRng, Rng, SeedableRng};

/// Single randomness seam for the template engine. Implementations return an
/// index strictly below `len`; `len` is never zero when called.
pub trait Selector {
    fn pick(&mut self, len: usize) -> usize;
}

#[derive(Debug)]
pub struct RngSelector {
    rng: StdRng,
}

impl RngSelector {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Selector for RngSelector {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}
