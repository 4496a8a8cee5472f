// Randomness seam for the generator.
//
// Sentence generation makes exactly five draws per round (subject,
// main verb, negation flip, second subject, asked verb). Routing them
// through a trait lets tests script each draw and drive every branch
// combination deterministically, while production rounds pull from the
// project's xoshiro PRNG.

use subjonctif_prng::DrillRng;

/// Source of the generator's random draws.
pub trait RandomSource {
    /// Uniform index into a collection of `len` elements. `len` is
    /// always nonzero at the call sites.
    fn pick(&mut self, len: usize) -> usize;

    /// Fair coin flip.
    fn coin(&mut self) -> bool;
}

impl RandomSource for DrillRng {
    fn pick(&mut self, len: usize) -> usize {
        self.index(len)
    }

    fn coin(&mut self) -> bool {
        self.random_bool(0.5)
    }
}
