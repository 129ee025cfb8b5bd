// File: src/core/vocab.rs
//! Fixed word tables the generator combines with the seed.

pub const MODIFIERS: &[&str] = &[
    "handmade",
    "personalized",
    "custom",
    "vintage",
    "minimal",
    "boho",
    "luxury",
    "eco",
    "gift",
    "set",
    "bulk",
    "small",
    "large",
    "engraved",
];

pub const MATERIALS: &[&str] = &[
    "soy",
    "resin",
    "wood",
    "ceramic",
    "cotton",
    "linen",
    "leather",
    "sterling silver",
    "gold plated",
    "glass",
];

pub const INTENTS: &[&str] = &["for", "for kids", "for women", "for men", "gift for", "with", "in"];

pub const OCCASIONS: &[&str] = &[
    "wedding",
    "birthday",
    "anniversary",
    "christmas",
    "valentines",
    "mother's day",
    "baby shower",
];

/// Quality descriptors ("best", "unique", ...).
pub const DESCRIPTORS: &[&str] = &["best", "unique", "trending", "popular", "top", "cheap", "premium"];

/// Suffix words used when the pool has to be padded.
pub const ADDERS: &[&str] = &["best", "2025", "new", "sale", "handmade"];

/// How many modifiers / materials take part in the fixed two-way combos.
pub const CORE_MODIFIERS: usize = 10;
pub const CORE_MATERIALS: usize = 8;
/// Modifiers paired with each individual token of a multi-word seed.
pub const TOKEN_MODIFIERS: usize = 6;
/// Random expansion rounds; each round adds two candidates.
pub const RANDOM_ROUNDS: usize = 200;

/// Substring test used by the scorer. This is deliberately loose: a short
/// entry such as "in" also matches inside "minimal".
pub fn contains_any(keyword: &str, table: &[&str]) -> bool {
    table.iter().any(|entry| keyword.contains(entry))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_matching_is_loose() {
        assert!(contains_any("minimal candle", INTENTS));
        assert!(contains_any("sterling silver ring", MATERIALS));
        assert!(!contains_any("candle", OCCASIONS));
    }

    #[test]
    fn slice_sizes_fit_tables() {
        assert!(CORE_MODIFIERS <= MODIFIERS.len());
        assert!(CORE_MATERIALS <= MATERIALS.len());
        assert!(TOKEN_MODIFIERS <= MODIFIERS.len());
    }
}
