/// Weighted sampler — cumulative-distribution compilation and drawing.

use rand::Rng;

use crate::core::chain::Entry;

impl Entry {
    /// Rebuilds the cumulative distribution from the raw counts.
    ///
    /// Walks `related` in its stable insertion order, accumulating a
    /// running sum and recording one `(partial_sum, word)` pair per
    /// successor, so thresholds are strictly increasing and the last one
    /// equals `total`. No-op when the entry is already clean, unless
    /// `force` is set. Idempotent and O(distinct successors).
    pub fn compile(&mut self, force: bool) {
        if self.compiled.is_some() && !force {
            return;
        }
        let mut sum = 0u32;
        let mut dist = Vec::with_capacity(self.related.len());
        for (word, count) in &self.related {
            sum += count;
            dist.push((sum, word.clone()));
        }
        self.compiled = Some(dist);
    }

    /// Draws a successor word, weighted by observation counts.
    ///
    /// Recompiles first if the entry is dirty. Returns `None` when
    /// `total == 0` (an entry registered as a successor but never observed
    /// as a predecessor); whenever `total > 0` a word is returned. The
    /// roll is uniform over `[0, total)` and the winner is the first
    /// threshold strictly greater than the roll — the tie-break direction
    /// decides which word owns each boundary and must not change.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Option<&str> {
        self.compile(false);
        if self.total == 0 {
            return None;
        }
        let roll = rng.gen_range(0..self.total);
        let dist = self.compiled.as_deref()?;
        dist.iter()
            .find(|(threshold, _)| roll < *threshold)
            .map(|(_, word)| word.as_str())
    }
}
