// File: src/core/engine.rs
use crate::core::pool::{dedup_pool, pad_to, raw_candidates};
use crate::core::scoring::score_keyword;
use crate::core::text::normalize;
use crate::core::types::{ScoredKeyword, MIN_REQUEST_COUNT};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What to do about padded variants that collide with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaddingPolicy {
    /// Keep every padded variant, even if two end up identical.
    #[default]
    AllowSuffixDuplicates,
    /// Run a second dedup pass over the padded list.
    Strict,
}

/// Expands a seed phrase into scored keyword suggestions.
/// Holds no state between calls besides its policy.
#[derive(Debug, Clone, Default)]
pub struct KeywordEngine {
    padding: PaddingPolicy,
}

impl KeywordEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_padding(padding: PaddingPolicy) -> Self {
        Self { padding }
    }

    pub fn generate(&self, seed_raw: &str, category: Option<&str>, count: usize) -> Vec<ScoredKeyword> {
        self.generate_with_rng(seed_raw, category, count, &mut rand::thread_rng())
    }

    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        seed_raw: &str,
        category: Option<&str>,
        count: usize,
        rng: &mut R,
    ) -> Vec<ScoredKeyword> {
        let seed = normalize(seed_raw);
        if seed.is_empty() {
            return vec![];
        }
        let category = category.map(normalize);

        // 1. Combinatorial expansion, then normalize + dedup
        let pool = dedup_pool(raw_candidates(&seed, category.as_deref(), rng));
        let pool_size = pool.len();

        // 2. Pad with adder suffixes when the pool is too small
        let mut candidates = pad_to(&pool, count, rng);
        if self.padding == PaddingPolicy::Strict {
            candidates = dedup_pool(candidates);
        }

        // 3. Uniform shuffle, then cut to size without losing the seed itself
        candidates.shuffle(rng);
        let keep = count.max(MIN_REQUEST_COUNT).min(candidates.len());
        keep_seed_in_window(&mut candidates, &seed, keep, rng);
        candidates.truncate(keep);

        debug!(seed = %seed, pool_size, requested = count, produced = candidates.len(), "generated keywords");

        // 4. Score the survivors
        candidates
            .into_iter()
            .map(|keyword| score_keyword(keyword, rng))
            .collect()
    }
}

/// If the exact seed landed beyond the cut, swap it into a random kept slot.
fn keep_seed_in_window<R: Rng + ?Sized>(candidates: &mut [String], seed: &str, keep: usize, rng: &mut R) {
    if keep == 0 {
        return;
    }
    if let Some(pos) = candidates.iter().position(|k| k == seed) {
        if pos >= keep {
            let slot = rng.gen_range(0..keep);
            candidates.swap(pos, slot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn distinct_keywords(items: &[ScoredKeyword]) -> usize {
        items.iter().map(ScoredKeyword::keyword).collect::<HashSet<_>>().len()
    }

    #[test]
    fn empty_seed_yields_nothing() {
        let engine = KeywordEngine::new();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(engine.generate_with_rng("", None, 50, &mut rng).is_empty());
        assert!(engine.generate_with_rng("  \t\n ", Some("decor"), 500, &mut rng).is_empty());
    }

    #[test]
    fn seed_survives_truncation() {
        let engine = KeywordEngine::new();
        for s in 0..50 {
            let mut rng = StdRng::seed_from_u64(s);
            let items = engine.generate_with_rng("Soy  Candle", None, 10, &mut rng);
            assert_eq!(items.len(), 10);
            assert!(items.iter().any(|k| k.keyword() == "soy candle"));
        }
    }

    #[test]
    fn large_count_pads_past_pool() {
        let engine = KeywordEngine::new();
        let mut rng = StdRng::seed_from_u64(9);
        let items = engine.generate_with_rng("mug", None, 500, &mut rng);
        assert!(items.len() >= 100);
        assert!(items.len() <= 500);
    }

    #[test]
    fn strict_padding_has_no_duplicates() {
        let engine = KeywordEngine::with_padding(PaddingPolicy::Strict);
        let mut rng = StdRng::seed_from_u64(5);
        let items = engine.generate_with_rng("mug", None, 500, &mut rng);
        assert_eq!(distinct_keywords(&items), items.len());
    }

    #[test]
    fn default_padding_keeps_suffix_collisions() {
        // "mug" + adder "handmade" lands on the pool entry "mug handmade"
        let lenient = KeywordEngine::new();
        let strict = KeywordEngine::with_padding(PaddingPolicy::Strict);
        let mut found_collision = false;
        for s in 0..20 {
            let items = lenient.generate_with_rng("mug", None, 500, &mut StdRng::seed_from_u64(s));
            let strict_items = strict.generate_with_rng("mug", None, 500, &mut StdRng::seed_from_u64(s));
            assert!(distinct_keywords(&items) <= items.len());
            assert_eq!(distinct_keywords(&strict_items), strict_items.len());
            assert!(strict_items.len() <= items.len());
            found_collision |= distinct_keywords(&items) < items.len();
        }
        assert!(found_collision, "padding never repeated a pool entry");
    }

    #[test]
    fn keep_seed_swaps_into_window() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut list: Vec<String> = ["a", "b", "c", "seed"].iter().map(|s| s.to_string()).collect();
        keep_seed_in_window(&mut list, "seed", 2, &mut rng);
        assert!(list[..2].iter().any(|k| k == "seed"));
    }
}
