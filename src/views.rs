// File: src/views.rs
//! Toolkit-free view models derived from a result list.

use crate::core::text::{first_tokens, title_case};
use crate::core::types::{Classification, ScoredKeyword};
use serde::Serialize;
use std::cmp::Reverse;

pub const TOP_TITLES: usize = 6;
pub const TAG_SOURCE_ITEMS: usize = 18;
pub const TAG_TOKENS: usize = 3;

/// Everything a renderer needs for one suggestion row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordRow {
    /// HTML-escaped keyword text.
    pub label: String,
    pub estimated_volume: u32,
    pub word_count: usize,
    pub badge_score: u8,
    pub badge_class: &'static str,
    pub classification: Classification,
}

impl KeywordRow {
    pub fn from_item(item: &ScoredKeyword) -> Self {
        let classification = item.classification();
        Self {
            label: escape_html(item.keyword()),
            estimated_volume: item.estimated_volume(),
            word_count: item.word_count(),
            badge_score: item.opportunity_score(),
            badge_class: classification.badge_class(),
            classification,
        }
    }

    /// The "1234 est. • 3 words" line under the keyword.
    pub fn meta_line(&self) -> String {
        format!("{} est. • {} words", self.estimated_volume, self.word_count)
    }
}

pub fn rows(items: &[ScoredKeyword]) -> Vec<KeywordRow> {
    items.iter().map(KeywordRow::from_item).collect()
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Highest-scoring keyword, if any.
pub fn top_keyword(items: &[ScoredKeyword]) -> Option<&str> {
    by_score_desc(items).first().map(|item| item.keyword())
}

/// Six best keywords by score, title-cased for use as listing titles.
pub fn top_titles(items: &[ScoredKeyword]) -> Vec<String> {
    by_score_desc(items)
        .into_iter()
        .take(TOP_TITLES)
        .map(|item| title_case(item.keyword()))
        .collect()
}

fn by_score_desc(items: &[ScoredKeyword]) -> Vec<&ScoredKeyword> {
    let mut sorted: Vec<&ScoredKeyword> = items.iter().collect();
    sorted.sort_by_key(|item| Reverse(item.opportunity_score()));
    sorted
}

/// Reduces a keyword to the tag form (first three words).
pub fn tag_for(keyword: &str) -> String {
    first_tokens(keyword, TAG_TOKENS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagOutcome {
    Added,
    Exists,
}

/// Short tag suggestions plus anything the user pinned by hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagBoard {
    tags: Vec<String>,
}

impl TagBoard {
    /// Shortest keywords first, reduced to three words, de-duplicated.
    pub fn from_items(items: &[ScoredKeyword]) -> Self {
        let mut sorted: Vec<&ScoredKeyword> = items.iter().collect();
        sorted.sort_by_key(|item| item.word_count());

        let mut board = Self::default();
        for item in sorted.into_iter().take(TAG_SOURCE_ITEMS) {
            board.add_tag(item.keyword());
        }
        board
    }

    /// Pins the tag form of `keyword`, refusing names already on the board.
    pub fn add_tag(&mut self, keyword: &str) -> TagOutcome {
        let tag = tag_for(keyword);
        if self.tags.contains(&tag) {
            TagOutcome::Exists
        } else {
            self.tags.push(tag);
            TagOutcome::Added
        }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.tags.get(index).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }
}
