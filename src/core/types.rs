// File: src/core/types.rs
use crate::core::text::collapse_whitespace;
use serde::Serialize;

/// Smallest count the generator is ever asked for.
pub const MIN_REQUEST_COUNT: usize = 10;
/// Largest count the front end lets through.
pub const MAX_REQUEST_COUNT: usize = 500;
/// Count used when the user leaves the field empty or types garbage.
pub const DEFAULT_REQUEST_COUNT: usize = 120;

/// Coarse opportunity band derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    High,
    Medium,
    Low,
}

impl Classification {
    pub fn from_score(score: u8) -> Self {
        if score > 70 {
            Classification::High
        } else if score > 45 {
            Classification::Medium
        } else {
            Classification::Low
        }
    }

    /// Short class name used by the badge in rendered rows.
    pub fn badge_class(self) -> &'static str {
        match self {
            Classification::High => "high",
            Classification::Medium => "med",
            Classification::Low => "low",
        }
    }
}

/// One generated keyword with its heuristic scores.
/// Fields are private so the band can never drift from the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredKeyword {
    keyword: String,
    opportunity_score: u8,
    estimated_volume: u32,
    word_count: usize,
}

impl ScoredKeyword {
    /// Builds a keyword record. Whitespace runs (newlines included) collapse
    /// to single spaces and `word_count` is taken from the result.
    pub fn new(keyword: impl AsRef<str>, opportunity_score: u8, estimated_volume: u32) -> Self {
        let keyword = collapse_whitespace(keyword.as_ref());
        let word_count = keyword.split_whitespace().count();
        Self {
            keyword,
            opportunity_score,
            estimated_volume,
            word_count,
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn opportunity_score(&self) -> u8 {
        self.opportunity_score
    }

    pub fn estimated_volume(&self) -> u32 {
        self.estimated_volume
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn classification(&self) -> Classification {
        Classification::from_score(self.opportunity_score)
    }
}

/// A single user action asking for suggestions. Built, consumed once, dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub seed_text: String,
    pub category: Option<String>,
    pub requested_count: usize,
}

impl GenerationRequest {
    pub fn new(seed_text: impl Into<String>) -> Self {
        Self {
            seed_text: seed_text.into(),
            category: None,
            requested_count: DEFAULT_REQUEST_COUNT,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = if category.trim().is_empty() { None } else { Some(category) };
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.requested_count = count;
        self
    }

    /// Parses the raw count field the way the form did: the leading integer
    /// counts ("42abc" is 42, "12.7" is 12), no digits or zero means the
    /// default, and negatives go to the clamp as zero.
    pub fn with_count_text(self, raw: &str) -> Self {
        let count = match leading_int(raw) {
            None | Some(0) => DEFAULT_REQUEST_COUNT,
            Some(n) if n < 0 => 0,
            Some(n) => usize::try_from(n).unwrap_or(usize::MAX),
        };
        self.with_count(count)
    }

    pub fn clamped_count(&self) -> usize {
        self.clamped_count_within(MIN_REQUEST_COUNT, MAX_REQUEST_COUNT)
    }

    pub fn clamped_count_within(&self, min: usize, max: usize) -> usize {
        self.requested_count.clamp(min, max.max(min))
    }
}

/// Optional sign plus the digits that follow it, after leading whitespace.
fn leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits: &str = &rest[..rest.bytes().take_while(u8::is_ascii_digit).count()];
    if digits.is_empty() {
        return None;
    }
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banding_boundaries() {
        assert_eq!(Classification::from_score(71), Classification::High);
        assert_eq!(Classification::from_score(70), Classification::Medium);
        assert_eq!(Classification::from_score(46), Classification::Medium);
        assert_eq!(Classification::from_score(45), Classification::Low);
        assert_eq!(Classification::from_score(5), Classification::Low);
    }

    #[test]
    fn word_count_follows_keyword() {
        let item = ScoredKeyword::new("soy candle for kids", 60, 120);
        assert_eq!(item.word_count(), 4);
        assert_eq!(item.classification(), Classification::Medium);
    }

    #[test]
    fn count_text_defaults_and_clamps() {
        assert_eq!(GenerationRequest::new("x").with_count_text("abc").clamped_count(), 120);
        assert_eq!(GenerationRequest::new("x").with_count_text("3").clamped_count(), 10);
        assert_eq!(GenerationRequest::new("x").with_count_text("9000").clamped_count(), 500);
        assert_eq!(GenerationRequest::new("x").with_count_text(" 42 ").clamped_count(), 42);
    }

    #[test]
    fn count_text_reads_leading_integer() {
        let count = |raw: &str| GenerationRequest::new("x").with_count_text(raw).clamped_count();
        assert_eq!(count("42abc"), 42);
        assert_eq!(count("12.7"), 12);
        assert_eq!(count("-5"), 10);
        assert_eq!(count("0"), 120);
        assert_eq!(count(""), 120);
        assert_eq!(count("+64"), 64);
        assert_eq!(count("99999999999999999999999"), 500);
    }

    #[test]
    fn new_collapses_newlines() {
        let item = ScoredKeyword::new("soy\ncandle  jar", 50, 10);
        assert_eq!(item.keyword(), "soy candle jar");
        assert_eq!(item.word_count(), 3);
    }

    #[test]
    fn blank_category_is_dropped() {
        let req = GenerationRequest::new("mug").with_category("   ");
        assert_eq!(req.category, None);
    }
}
