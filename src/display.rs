// File: src/display.rs
//! Terminal rendering of a session
//!
//! - Suggestion rows with a colored opportunity badge
//! - Stats line (count + top keyword)
//! - Title ideas and tag board
//! - Light/dark palette

use crate::core::types::Classification;
use crate::session::Session;
use crossterm::{
    cursor, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, ClearType},
};
use std::io::{self, Write};

/// Colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub high: Color,
    pub medium: Color,
    pub low: Color,
}

impl Palette {
    pub fn for_theme(dark: bool) -> Self {
        if dark {
            Palette {
                text: Color::White,
                muted: Color::DarkGrey,
                accent: Color::Cyan,
                high: Color::Green,
                medium: Color::Yellow,
                low: Color::Red,
            }
        } else {
            Palette {
                text: Color::Black,
                muted: Color::Grey,
                accent: Color::DarkBlue,
                high: Color::DarkGreen,
                medium: Color::DarkYellow,
                low: Color::DarkRed,
            }
        }
    }

    pub fn badge(&self, class: Classification) -> Color {
        match class {
            Classification::High => self.high,
            Classification::Medium => self.medium,
            Classification::Low => self.low,
        }
    }
}

pub fn clear<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    out.flush()
}

/// Heading, stats and numbered rows. Keywords go out raw here; the
/// HTML-escaped label is for markup renderers.
pub fn render_results<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    let palette = Palette::for_theme(session.dark_mode());

    let heading = match session.seed() {
        Some(seed) => format!("Suggestions for: \"{}\"", seed),
        None => "Suggestions".to_string(),
    };
    queue!(
        out,
        SetAttribute(Attribute::Bold),
        SetForegroundColor(palette.accent),
        Print(heading),
        Print("\n"),
        SetAttribute(Attribute::Reset),
        ResetColor
    )?;

    if session.is_empty() {
        let note = if session.seed().is_some() {
            "No suggestions"
        } else {
            "No results yet — enter a seed and run gen."
        };
        queue!(out, SetForegroundColor(palette.muted), Print(note), Print("\n"), ResetColor)?;
        return out.flush();
    }

    queue!(
        out,
        SetForegroundColor(palette.muted),
        Print(format!(
            "{} • top: {}\n\n",
            session.summary(),
            session.top_keyword().unwrap_or("—")
        )),
        ResetColor
    )?;

    for (i, (item, row)) in session.current().iter().zip(session.rows()).enumerate() {
        queue!(
            out,
            SetForegroundColor(palette.muted),
            Print(format!("{:>4}  ", i + 1)),
            SetForegroundColor(palette.badge(row.classification)),
            Print(format!("[{:>2}]", row.badge_score)),
            SetForegroundColor(palette.text),
            Print(format!("  {}", item.keyword())),
            SetForegroundColor(palette.muted),
            Print(format!("  ({})\n", row.meta_line())),
            ResetColor
        )?;
    }
    out.flush()
}

pub fn render_titles<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    let palette = Palette::for_theme(session.dark_mode());
    let titles = session.top_titles();
    queue!(out, SetForegroundColor(palette.accent), Print("Title ideas\n"), ResetColor)?;
    if titles.is_empty() {
        queue!(out, SetForegroundColor(palette.muted), Print("No data yet\n"), ResetColor)?;
    }
    for title in titles {
        queue!(out, Print(format!("  • {}\n", title)))?;
    }
    out.flush()
}

pub fn render_tags<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    let palette = Palette::for_theme(session.dark_mode());
    queue!(out, SetForegroundColor(palette.accent), Print("Tags\n"), ResetColor)?;
    if session.tags().is_empty() {
        queue!(out, SetForegroundColor(palette.muted), Print("—\n"), ResetColor)?;
    }
    for (i, tag) in session.tags().tags().iter().enumerate() {
        queue!(out, Print(format!("  #{} {}\n", i + 1, tag)))?;
    }
    out.flush()
}

/// One-line status message ("Copied", "Tag exists", ...).
pub fn flash<W: Write>(out: &mut W, dark: bool, message: &str) -> io::Result<()> {
    let palette = Palette::for_theme(dark);
    queue!(out, SetForegroundColor(palette.accent), Print(format!("» {}\n", message)), ResetColor)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::KeywordEngine;
    use crate::core::types::GenerationRequest;
    use crate::persistence::PreferenceStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn empty_session_renders_placeholder() {
        let session = Session::new(KeywordEngine::new(), PreferenceStore::in_memory());
        let mut buf = Vec::new();
        render_results(&mut buf, &session).unwrap();
        let text = String::from_utf8_lossy(&buf);
        assert!(text.contains("No results yet"));
    }

    #[test]
    fn results_list_every_keyword() {
        let mut session = Session::new(KeywordEngine::new(), PreferenceStore::in_memory());
        let mut rng = StdRng::seed_from_u64(8);
        session.generate_with_rng(&GenerationRequest::new("mug").with_count(12), &mut rng);
        let mut buf = Vec::new();
        render_results(&mut buf, &session).unwrap();
        let text = String::from_utf8_lossy(&buf);
        assert!(text.contains("12 suggestions generated"));
        for item in session.current() {
            assert!(text.contains(item.keyword()));
        }
    }

    #[test]
    fn palettes_differ() {
        assert_ne!(Palette::for_theme(true), Palette::for_theme(false));
    }
}
