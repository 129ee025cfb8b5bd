// File: src/core/scoring.rs
use crate::core::types::ScoredKeyword;
use crate::core::vocab::{contains_any, INTENTS, MATERIALS, OCCASIONS};
use rand::Rng;

pub const MIN_SCORE: i32 = 5;
pub const MAX_SCORE: i32 = 98;
pub const MIN_VOLUME: u32 = 8;
const JITTER: f64 = 5.0;

/// The deterministic part of the opportunity heuristic, before jitter and clamping.
pub fn base_opportunity(keyword: &str) -> i32 {
    let len = keyword.split_whitespace().count().max(1) as i32;
    let mut opp = 50 + ((len - 1) * 7).min(30);
    if contains_any(keyword, MATERIALS) {
        opp += 6;
    }
    if contains_any(keyword, INTENTS) {
        opp += 5;
    }
    if contains_any(keyword, OCCASIONS) {
        opp += 5;
    }
    if len <= 2 {
        opp -= 12;
    }
    opp
}

/// Applies jitter in [-5, 5), rounds and clamps into [5, 98].
pub fn jittered_score<R: Rng + ?Sized>(base: i32, rng: &mut R) -> u8 {
    let noisy = (base as f64 + rng.gen_range(-JITTER..JITTER)).round() as i32;
    noisy.clamp(MIN_SCORE, MAX_SCORE) as u8
}

/// Fake monthly volume: lower opportunity reads as a busier keyword.
pub fn estimated_volume<R: Rng + ?Sized>(score: u8, rng: &mut R) -> u32 {
    let factor: f64 = rng.gen_range(1.0..5.0);
    let raw = ((100 - i32::from(score)) as f64 * factor).round() as u32;
    raw.max(MIN_VOLUME)
}

pub fn score_keyword<R: Rng + ?Sized>(keyword: String, rng: &mut R) -> ScoredKeyword {
    let score = jittered_score(base_opportunity(&keyword), rng);
    let volume = estimated_volume(score, rng);
    ScoredKeyword::new(keyword, score, volume)
}
