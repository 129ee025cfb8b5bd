// File: src/export.rs
use crate::core::types::ScoredKeyword;
use crate::error::{AppError, Result};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

pub const CSV_HEADER: &str = "keyword,opportunity,estVol,length";
pub const DEFAULT_EXPORT_NAME: &str = "etsy-keywords.csv";

/// One parsed CSV row: (keyword, opportunity, estVol, length).
pub type CsvRow = (String, u8, u32, usize);

pub fn quote_field(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}

/// Serializes the full list. Rows are joined with `\n`, no trailing newline.
pub fn to_csv(items: &[ScoredKeyword]) -> String {
    let mut lines = Vec::with_capacity(items.len() + 1);
    lines.push(CSV_HEADER.to_string());
    for item in items {
        lines.push(format!(
            "{},{},{},{}",
            quote_field(item.keyword()),
            item.opportunity_score(),
            item.estimated_volume(),
            item.word_count()
        ));
    }
    lines.join("\n")
}

/// Reads back what [`to_csv`] writes. Rows are split on line breaks, which
/// is safe because `ScoredKeyword` never holds a newline.
pub fn parse_csv(text: &str) -> Result<Vec<CsvRow>> {
    let mut lines = text.lines().enumerate();
    match lines.next() {
        Some((_, header)) if header.trim_end() == CSV_HEADER => {}
        _ => {
            return Err(AppError::Csv {
                line: 1,
                reason: "missing header".into(),
            })
        }
    }

    let mut rows = Vec::new();
    for (idx, line) in lines {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }
        let (keyword, rest) = split_quoted(line).ok_or_else(|| AppError::Csv {
            line: line_no,
            reason: "keyword field is not properly quoted".into(),
        })?;
        let numbers: Vec<&str> = rest.split(',').collect();
        if numbers.len() != 3 {
            return Err(AppError::Csv {
                line: line_no,
                reason: format!("expected 3 numeric fields, found {}", numbers.len()),
            });
        }
        let bad = |field: &str| AppError::Csv {
            line: line_no,
            reason: format!("invalid number '{}'", field),
        };
        let opportunity = numbers[0].trim().parse().map_err(|_| bad(numbers[0]))?;
        let volume = numbers[1].trim().parse().map_err(|_| bad(numbers[1]))?;
        let length = numbers[2].trim().parse().map_err(|_| bad(numbers[2]))?;
        rows.push((keyword, opportunity, volume, length));
    }
    Ok(rows)
}

/// Splits `"..."` off the front of a line and returns the unescaped text plus
/// whatever follows the separating comma.
fn split_quoted(line: &str) -> Option<(String, &str)> {
    let body = line.strip_prefix('"')?;
    let mut out = String::new();
    let mut chars = body.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if c != '"' {
            out.push(c);
            continue;
        }
        if let Some(&(_, '"')) = chars.peek() {
            out.push('"');
            chars.next();
            continue;
        }
        let rest = body[i + 1..].strip_prefix(',')?;
        return Some((out, rest));
    }
    None
}

/// Writes the CSV atomically, creating parent directories as needed.
pub fn write_csv_file(items: &[ScoredKeyword], path: &Path) -> Result<()> {
    if items.is_empty() {
        return Err(AppError::NoResults("export"));
    }
    let parent_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        writer.write_all(to_csv(items).as_bytes())?;
        writer.flush()?;
    }
    temp_file.persist(path)?;
    Ok(())
}
