// File: src/bin/main.rs
use anyhow::{Context, Result};
use clap::Parser;
use keyword_core::clipboard::TerminalClipboard;
use keyword_core::config::AppConfig;
use keyword_core::display::{self, flash};
use keyword_core::persistence::PreferenceStore;
use keyword_core::session::{CopyOutcome, GenerateOutcome};
use keyword_core::views::TagOutcome;
use keyword_core::{AppError, GenerationRequest, KeywordEngine, PaddingPolicy, Session};
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "keyword_finder")]
#[command(about = "Marketplace keyword ideas with demo opportunity scores")]
struct Args {
    /// Seed phrase; omit to start the interactive prompt
    #[arg(short, long)]
    seed: Option<String>,

    /// Optional product category
    #[arg(short, long)]
    category: Option<String>,

    /// Number of suggestions (clamped to the configured bounds)
    #[arg(short = 'n', long)]
    count: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Write results to a CSV file ('-' for stdout)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Drop duplicate padded variants
    #[arg(long)]
    strict_padding: bool,

    /// Config file (defaults to $KEYWORD_FINDER_CONFIG or the user config dir)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => AppConfig::load().context("failed to load config")?,
    };
    debug!(?config, "loaded config");

    let padding = if args.strict_padding {
        PaddingPolicy::Strict
    } else {
        config.generator.padding
    };
    let prefs = PreferenceStore::from_file_or_default(&config.storage.preferences_path);
    let mut session = Session::new(KeywordEngine::with_padding(padding), prefs)
        .with_count_bounds(config.generator.min_count, config.generator.max_count);

    match args.seed.as_deref() {
        Some(seed) => run_once(&mut session, &args, seed, &config),
        None => run_interactive(&mut session, &config),
    }
}

fn build_request(seed: &str, category: Option<&str>, count: Option<&str>, config: &AppConfig) -> GenerationRequest {
    let request = GenerationRequest::new(seed).with_category(category.unwrap_or_default());
    match count {
        Some(raw) => request.with_count_text(raw),
        None => request.with_count(config.generator.default_count),
    }
}

fn run_once(session: &mut Session, args: &Args, seed: &str, config: &AppConfig) -> Result<()> {
    let request = build_request(seed, args.category.as_deref(), args.count.as_deref(), config);
    match session.generate(&request) {
        GenerateOutcome::EmptySeed => {
            anyhow::bail!("enter a seed keyword (e.g. \"soy candle\")");
        }
        GenerateOutcome::NoSuggestions | GenerateOutcome::Generated(_) => {}
    }

    let mut out = stdout();
    match &args.csv {
        Some(path) if path.as_os_str() == "-" => {
            writeln!(out, "{}", session.export_csv()?)?;
            return Ok(());
        }
        Some(path) => session
            .export_to(path)
            .with_context(|| format!("failed to export {}", path.display()))?,
        None => {}
    }

    if args.json {
        serde_json::to_writer_pretty(&mut out, session.current()).context("failed to write JSON")?;
        writeln!(out)?;
    } else {
        display::render_results(&mut out, session)?;
        writeln!(out)?;
        display::render_titles(&mut out, session)?;
        display::render_tags(&mut out, session)?;
    }
    Ok(())
}

const HELP: &str = "\
Commands:
  gen <seed> [| category] [| count]   generate suggestions
  titles                             show title ideas
  tags                               show tag suggestions
  tag <n>                            add keyword #n as a tag
  copy <n> / copytag <n>             copy keyword #n / tag #n
  copyall                            copy every keyword
  export [path]                      write CSV
  theme                              toggle dark mode
  clear                              reset results
  help / exit";

fn run_interactive(session: &mut Session, config: &AppConfig) -> Result<()> {
    let mut out = stdout();
    let mut clipboard = TerminalClipboard::stdout();

    display::clear(&mut out)?;
    println!("Keyword Finder. Type 'help' for commands, 'exit' to quit.");
    println!("---------------------------------------------------------------");
    display::render_results(&mut out, session)?;

    loop {
        print!("\n> ");
        out.flush()?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let line = input.trim();
        let (cmd, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();
        let dark = session.dark_mode();

        match cmd {
            "exit" | "quit" => break,
            "" => {}
            "help" => println!("{}", HELP),
            "gen" => {
                let mut parts = rest.split('|').map(str::trim);
                let seed = parts.next().unwrap_or_default();
                let category = parts.next();
                let count = parts.next().filter(|c| !c.is_empty());
                let request = build_request(seed, category, count, config);
                match session.generate(&request) {
                    GenerateOutcome::EmptySeed => {
                        flash(&mut out, dark, "Enter a seed keyword (e.g. \"soy candle\")")?
                    }
                    _ => {
                        display::clear(&mut out)?;
                        display::render_results(&mut out, session)?;
                    }
                }
            }
            "titles" => display::render_titles(&mut out, session)?,
            "tags" => display::render_tags(&mut out, session)?,
            "tag" => {
                let message = match parse_index(rest).and_then(|i| session.add_tag(i)) {
                    Some(TagOutcome::Added) => "Tag added",
                    Some(TagOutcome::Exists) => "Tag exists",
                    None => "No such keyword",
                };
                flash(&mut out, dark, message)?;
            }
            "copy" | "copytag" => {
                let outcome = match parse_index(rest) {
                    Some(i) if cmd == "copy" => session.copy_keyword(i, &mut clipboard),
                    Some(i) => session.copy_tag(i, &mut clipboard),
                    None => CopyOutcome::NotFound,
                };
                let message = match (outcome, cmd) {
                    (CopyOutcome::Copied, "copy") => "Copied",
                    (CopyOutcome::Copied, _) => "Tag copied",
                    (CopyOutcome::Unavailable, _) => "Clipboard unavailable",
                    (CopyOutcome::NotFound, _) => "No such item",
                };
                flash(&mut out, dark, message)?;
            }
            "copyall" => match session.copy_all(&mut clipboard) {
                Ok(CopyOutcome::Copied) => flash(&mut out, dark, "All keywords copied")?,
                Ok(_) => flash(&mut out, dark, "Clipboard unavailable")?,
                Err(e) => flash(&mut out, dark, &e.to_string())?,
            },
            "export" => {
                let path = if rest.is_empty() {
                    config.storage.export_file.clone()
                } else {
                    PathBuf::from(rest)
                };
                match session.export_to(&path) {
                    Ok(()) => flash(&mut out, dark, "CSV exported")?,
                    Err(e @ AppError::NoResults(_)) => flash(&mut out, dark, &e.to_string())?,
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "CSV export failed");
                        flash(&mut out, dark, &format!("Export failed: {}", e))?;
                        continue;
                    }
                }
            }
            "theme" => {
                let dark = session.toggle_theme();
                flash(&mut out, dark, if dark { "Dark mode on" } else { "Dark mode off" })?;
            }
            "clear" => {
                session.clear();
                display::clear(&mut out)?;
                display::render_results(&mut out, session)?;
            }
            other => flash(&mut out, dark, &format!("Unknown command '{}', try 'help'", other))?,
        }
    }

    info!("session ended");
    Ok(())
}

/// 1-based index from the prompt into a 0-based one.
fn parse_index(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|&n| n > 0).map(|n| n - 1)
}
