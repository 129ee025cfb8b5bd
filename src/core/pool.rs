// File: src/core/pool.rs
use crate::core::text::collapse_whitespace;
use crate::core::vocab::{
    ADDERS, CORE_MATERIALS, CORE_MODIFIERS, DESCRIPTORS, INTENTS, MATERIALS, MODIFIERS,
    OCCASIONS, RANDOM_ROUNDS, TOKEN_MODIFIERS,
};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Builds the raw candidate list for an already-normalized, non-empty seed.
/// Entries may repeat and may carry stray whitespace; see [`dedup_pool`].
pub fn raw_candidates<R: Rng + ?Sized>(seed: &str, category: Option<&str>, rng: &mut R) -> Vec<String> {
    let tokens: Vec<&str> = seed.split_whitespace().collect();
    let mut pool = Vec::with_capacity(128 + RANDOM_ROUNDS * 2);

    pool.push(seed.to_string());
    for m in &MODIFIERS[..CORE_MODIFIERS] {
        pool.push(format!("{m} {seed}"));
        pool.push(format!("{seed} {m}"));
    }
    for m in &MATERIALS[..CORE_MATERIALS] {
        pool.push(format!("{seed} {m}"));
        pool.push(format!("{m} {seed}"));
    }
    for i in INTENTS {
        pool.push(format!("{seed} {i}"));
    }
    for o in OCCASIONS {
        pool.push(format!("{seed} for {o}"));
        pool.push(format!("{o} {seed}"));
    }
    for d in DESCRIPTORS {
        pool.push(format!("{d} {seed}"));
        pool.push(format!("{seed} {d}"));
    }

    pool.extend([
        format!("set of {seed}"),
        format!("{seed} set"),
        format!("personalized {seed}"),
        format!("custom {seed}"),
        format!("{seed} gift"),
        format!("mini {seed}"),
        format!("{seed} for sale"),
    ]);

    if tokens.len() > 1 {
        pool.push(tokens.join(" "));
        pool.push(tokens.iter().rev().copied().collect::<Vec<_>>().join(" "));
        for token in &tokens {
            for m in &MODIFIERS[..TOKEN_MODIFIERS] {
                pool.push(format!("{m} {token}"));
            }
        }
    }

    if let Some(category) = category.filter(|c| !c.is_empty()) {
        pool.push(format!("{seed} {category}"));
        pool.push(format!("{category} {seed}"));
    }

    for _ in 0..RANDOM_ROUNDS {
        pool.push(format!("{} {seed} {}", pick(MODIFIERS, rng), pick(DESCRIPTORS, rng)));
        pool.push(format!("{} {} {seed}", pick(DESCRIPTORS, rng), pick(MATERIALS, rng)));
    }

    pool
}

/// Whitespace-normalizes every entry, drops empties and removes repeats.
/// First occurrence wins; the caller shuffles afterwards anyway.
pub fn dedup_pool(raw: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(raw.len());
    raw.into_iter()
        .map(|entry| collapse_whitespace(&entry))
        .filter(|entry| !entry.is_empty())
        .filter(|entry| seen.insert(entry.clone()))
        .collect()
}

/// Appends `{entry} {adder}` variants, walking the pool in order, until the
/// list holds `target` items or every pool entry has been used once.
pub fn pad_to<R: Rng + ?Sized>(pool: &[String], target: usize, rng: &mut R) -> Vec<String> {
    let mut padded = pool.to_vec();
    let mut source = pool.iter();
    while padded.len() < target {
        let Some(entry) = source.next() else { break };
        padded.push(format!("{entry} {}", pick(ADDERS, rng)));
    }
    padded
}

fn pick<'a, R: Rng + ?Sized>(table: &[&'a str], rng: &mut R) -> &'a str {
    table.choose(rng).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn pool_contains_fixed_variants() {
        let mut rng = StdRng::seed_from_u64(1);
        let pool = dedup_pool(raw_candidates("mug", None, &mut rng));
        for expected in [
            "mug",
            "handmade mug",
            "mug handmade",
            "soy mug",
            "mug for kids",
            "mug for wedding",
            "wedding mug",
            "set of mug",
            "mug for sale",
            "best mug",
        ] {
            assert!(pool.iter().any(|k| k == expected), "missing {expected}");
        }
        // only the first eight materials take part in the fixed combos
        assert!(!pool.iter().any(|k| k == "mug gold plated"));
    }

    #[test]
    fn multi_token_seed_adds_permutations() {
        let mut rng = StdRng::seed_from_u64(2);
        let pool = dedup_pool(raw_candidates("soy candle", None, &mut rng));
        assert!(pool.iter().any(|k| k == "candle soy"));
        assert!(pool.iter().any(|k| k == "boho candle"));
        assert!(pool.iter().any(|k| k == "vintage soy"));
        assert!(!pool.iter().any(|k| k == "luxury soy"));
    }

    #[test]
    fn category_combos_only_when_present() {
        let mut rng = StdRng::seed_from_u64(3);
        let with = dedup_pool(raw_candidates("mug", Some("home decor"), &mut rng));
        assert!(with.iter().any(|k| k == "mug home decor"));
        assert!(with.iter().any(|k| k == "home decor mug"));

        let without = dedup_pool(raw_candidates("mug", Some(""), &mut rng));
        assert!(!without.iter().any(|k| k.contains("decor")));
    }

    #[test]
    fn dedup_normalizes_and_drops_empty() {
        let raw = vec!["a  b".to_string(), " a b ".to_string(), "   ".to_string(), "c".to_string()];
        assert_eq!(dedup_pool(raw), vec!["a b".to_string(), "c".to_string()]);
    }

    #[test]
    fn padding_stops_when_pool_is_used_up() {
        let mut rng = StdRng::seed_from_u64(4);
        let pool = vec!["a".to_string(), "b".to_string()];
        let padded = pad_to(&pool, 10, &mut rng);
        assert_eq!(padded.len(), 4);
        assert!(padded[2].starts_with("a "));
        assert!(padded[3].starts_with("b "));

        let exact = pad_to(&pool, 3, &mut rng);
        assert_eq!(exact.len(), 3);
    }
}
