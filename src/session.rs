// File: src/session.rs
//! Session controller: owns the current result list and everything derived from it.

use crate::clipboard::Clipboard;
use crate::core::engine::KeywordEngine;
use crate::core::text::normalize;
use crate::core::types::{GenerationRequest, ScoredKeyword, MAX_REQUEST_COUNT, MIN_REQUEST_COUNT};
use crate::error::{AppError, Result};
use crate::export::{to_csv, write_csv_file};
use crate::persistence::PreferenceStore;
use crate::views::{self, KeywordRow, TagBoard, TagOutcome};
use rand::Rng;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// Seed was blank; nothing ran and the previous list is untouched.
    EmptySeed,
    /// The generator ran but produced nothing.
    NoSuggestions,
    Generated(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// The clipboard refused; the failure has been logged.
    Unavailable,
    /// No item at that index.
    NotFound,
}

pub struct Session {
    engine: KeywordEngine,
    prefs: PreferenceStore,
    min_count: usize,
    max_count: usize,
    seed: Option<String>,
    current: Vec<ScoredKeyword>,
    tags: TagBoard,
}

impl Session {
    pub fn new(engine: KeywordEngine, prefs: PreferenceStore) -> Self {
        Self {
            engine,
            prefs,
            min_count: MIN_REQUEST_COUNT,
            max_count: MAX_REQUEST_COUNT,
            seed: None,
            current: Vec::new(),
            tags: TagBoard::default(),
        }
    }

    pub fn with_count_bounds(mut self, min: usize, max: usize) -> Self {
        self.min_count = min;
        self.max_count = max.max(min);
        self
    }

    pub fn generate(&mut self, request: &GenerationRequest) -> GenerateOutcome {
        self.generate_with_rng(request, &mut rand::thread_rng())
    }

    pub fn generate_with_rng<R: Rng + ?Sized>(&mut self, request: &GenerationRequest, rng: &mut R) -> GenerateOutcome {
        let seed = normalize(&request.seed_text);
        if seed.is_empty() {
            return GenerateOutcome::EmptySeed;
        }
        let count = request.clamped_count_within(self.min_count, self.max_count);
        let items = self
            .engine
            .generate_with_rng(&seed, request.category.as_deref(), count, rng);

        info!(seed = %seed, category = ?request.category, count, produced = items.len(), "generation finished");

        self.tags = TagBoard::from_items(&items);
        self.current = items;
        self.seed = Some(seed);

        if self.current.is_empty() {
            GenerateOutcome::NoSuggestions
        } else {
            GenerateOutcome::Generated(self.current.len())
        }
    }

    pub fn clear(&mut self) {
        self.seed = None;
        self.current.clear();
        self.tags.clear();
    }

    pub fn seed(&self) -> Option<&str> {
        self.seed.as_deref()
    }

    pub fn current(&self) -> &[ScoredKeyword] {
        &self.current
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    pub fn rows(&self) -> Vec<KeywordRow> {
        views::rows(&self.current)
    }

    pub fn top_titles(&self) -> Vec<String> {
        views::top_titles(&self.current)
    }

    pub fn top_keyword(&self) -> Option<&str> {
        views::top_keyword(&self.current)
    }

    pub fn tags(&self) -> &TagBoard {
        &self.tags
    }

    pub fn summary(&self) -> String {
        format!("{} suggestions generated", self.current.len())
    }

    /// Pins the tag form of the keyword at `index`.
    pub fn add_tag(&mut self, index: usize) -> Option<TagOutcome> {
        let keyword = self.current.get(index)?.keyword();
        Some(self.tags.add_tag(keyword))
    }

    pub fn all_keywords_text(&self) -> String {
        self.current
            .iter()
            .map(ScoredKeyword::keyword)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn copy_keyword(&self, index: usize, clipboard: &mut dyn Clipboard) -> CopyOutcome {
        match self.current.get(index) {
            Some(item) => copy_text(clipboard, item.keyword()),
            None => CopyOutcome::NotFound,
        }
    }

    pub fn copy_tag(&self, index: usize, clipboard: &mut dyn Clipboard) -> CopyOutcome {
        match self.tags.get(index) {
            Some(tag) => copy_text(clipboard, tag),
            None => CopyOutcome::NotFound,
        }
    }

    pub fn copy_all(&self, clipboard: &mut dyn Clipboard) -> Result<CopyOutcome> {
        if self.current.is_empty() {
            return Err(AppError::NoResults("copy"));
        }
        Ok(copy_text(clipboard, &self.all_keywords_text()))
    }

    pub fn export_csv(&self) -> Result<String> {
        if self.current.is_empty() {
            return Err(AppError::NoResults("export"));
        }
        Ok(to_csv(&self.current))
    }

    pub fn export_to(&self, path: &Path) -> Result<()> {
        write_csv_file(&self.current, path)?;
        info!(path = %path.display(), rows = self.current.len(), "CSV exported");
        Ok(())
    }

    pub fn dark_mode(&self) -> bool {
        self.prefs.dark_mode()
    }

    pub fn toggle_theme(&mut self) -> bool {
        self.prefs.toggle_dark_mode()
    }
}

fn copy_text(clipboard: &mut dyn Clipboard, text: &str) -> CopyOutcome {
    match clipboard.set_text(text) {
        Ok(()) => CopyOutcome::Copied,
        Err(e) => {
            warn!(error = %e, "clipboard write failed");
            CopyOutcome::Unavailable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::{MemoryClipboard, NoClipboard};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session() -> Session {
        Session::new(KeywordEngine::new(), PreferenceStore::in_memory())
    }

    #[test]
    fn blank_seed_keeps_previous_results() {
        let mut s = session();
        let mut rng = StdRng::seed_from_u64(1);
        let first = s.generate_with_rng(&GenerationRequest::new("mug").with_count(20), &mut rng);
        assert_eq!(first, GenerateOutcome::Generated(20));
        let second = s.generate_with_rng(&GenerationRequest::new("   "), &mut rng);
        assert_eq!(second, GenerateOutcome::EmptySeed);
        assert_eq!(s.current().len(), 20);
        assert_eq!(s.seed(), Some("mug"));
    }

    #[test]
    fn count_is_clamped_by_session() {
        let mut s = session();
        let mut rng = StdRng::seed_from_u64(2);
        let out = s.generate_with_rng(&GenerationRequest::new("mug").with_count(1), &mut rng);
        assert_eq!(out, GenerateOutcome::Generated(10));
    }

    #[test]
    fn copy_and_export_refuse_empty() {
        let s = session();
        let mut clip = MemoryClipboard::new();
        assert!(matches!(s.copy_all(&mut clip), Err(AppError::NoResults("copy"))));
        assert!(matches!(s.export_csv(), Err(AppError::NoResults("export"))));
        assert_eq!(s.copy_keyword(0, &mut clip), CopyOutcome::NotFound);
        assert!(clip.contents().is_none());
    }

    #[test]
    fn copy_all_joins_with_newlines() {
        let mut s = session();
        let mut rng = StdRng::seed_from_u64(3);
        s.generate_with_rng(&GenerationRequest::new("mug").with_count(10), &mut rng);
        let mut clip = MemoryClipboard::new();
        assert_eq!(s.copy_all(&mut clip).unwrap(), CopyOutcome::Copied);
        assert_eq!(clip.contents().unwrap().lines().count(), 10);
    }

    #[test]
    fn clipboard_failure_degrades() {
        let mut s = session();
        let mut rng = StdRng::seed_from_u64(4);
        s.generate_with_rng(&GenerationRequest::new("mug"), &mut rng);
        assert_eq!(s.copy_keyword(0, &mut NoClipboard), CopyOutcome::Unavailable);
        assert_eq!(s.copy_all(&mut NoClipboard).unwrap(), CopyOutcome::Unavailable);
    }

    #[test]
    fn tags_follow_generation_and_clear() {
        let mut s = session();
        let mut rng = StdRng::seed_from_u64(5);
        s.generate_with_rng(&GenerationRequest::new("soy candle").with_count(40), &mut rng);
        assert!(!s.tags().is_empty());
        let before = s.tags().len();
        match s.add_tag(0) {
            Some(TagOutcome::Added) => assert_eq!(s.tags().len(), before + 1),
            Some(TagOutcome::Exists) => assert_eq!(s.tags().len(), before),
            None => panic!("index 0 must exist"),
        }
        assert_eq!(s.add_tag(10_000), None);

        s.clear();
        assert!(s.is_empty());
        assert!(s.tags().is_empty());
        assert_eq!(s.seed(), None);
    }

    #[test]
    fn failed_export_keeps_session() {
        let dir = tempfile::tempdir().unwrap();
        // a regular file where the export directory should be
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"x").unwrap();

        let mut s = session();
        let mut rng = StdRng::seed_from_u64(6);
        s.generate_with_rng(&GenerationRequest::new("mug").with_count(15), &mut rng);
        let before = s.current().to_vec();
        let tags_before = s.tags().clone();

        let err = s.export_to(&blocker.join("out.csv")).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
        assert_eq!(s.current(), before.as_slice());
        assert_eq!(s.tags(), &tags_before);
        assert_eq!(s.seed(), Some("mug"));

        let ok = dir.path().join("out.csv");
        s.export_to(&ok).unwrap();
        assert!(ok.exists());
    }

    #[test]
    fn theme_toggles() {
        let mut s = session();
        assert!(!s.dark_mode());
        assert!(s.toggle_theme());
        assert!(s.dark_mode());
    }
}
