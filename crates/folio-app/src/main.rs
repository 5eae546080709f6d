//! Portfolio terminal entry point.
//!
//! A line-based REPL over the command interpreter: each stdin line is one
//! submission. A trailing tab on a line accepts the autocomplete
//! suggestion before submitting. `exit` or end-of-input quits.

mod render;

use std::io::{self, BufRead, Write as _};

use anyhow::{Context, Result};
use folio_host::{Clock, DesktopHost, SystemClock};
use folio_terminal::{CommandExecutor, Host, ProjectCatalog, TerminalSession};
use folio_types::config::FolioConfig;
use folio_types::input::Key;
use folio_ui::OverlayController;

const OVERLAY_WIDTH: usize = 48;
const OVERLAY_HEIGHT: usize = 10;
const FRAME_MS: u32 = 80;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    let prompt = config.prompt.clone();
    log::info!("Starting folio terminal (prompt {prompt:?})");

    let mut executor = CommandExecutor::new(TerminalSession::new(), config);
    if let Ok(path) = std::env::var("FOLIO_CATALOG") {
        let text =
            std::fs::read_to_string(&path).with_context(|| format!("reading catalog {path}"))?;
        executor = executor.with_catalog(ProjectCatalog::from_json(&text)?);
        log::info!("Loaded project catalog from {path}");
    }

    let clock = SystemClock;
    let mut actions = DesktopHost;

    let now = clock.now().unwrap_or_default();
    executor.session_mut().greet(now);

    let mut overlay = OverlayController::new(OVERLAY_WIDTH, OVERLAY_HEIGHT);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut last_id = print_new_entries(&executor, None);

    loop {
        print!("{prompt} ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let mut line = line?;
        if line.trim() == "exit" {
            break;
        }

        // Trailing tab: accept the suggestion, echo the completed line.
        if let Some(partial) = line.strip_suffix('\t') {
            let completed = format!("{partial}{}", executor.suggest(partial));
            println!("{prompt} {completed}");
            line = completed;
        }

        let had_entries = !executor.session().logs.is_empty();
        {
            let mut host = Host {
                clock: &clock,
                actions: &mut actions,
            };
            executor.execute(&line, &mut host);
        }

        if executor.session().logs.is_empty() && had_entries {
            print!("{}", render::CLEAR_SCREEN);
            last_id = None;
        }
        last_id = print_new_entries(&executor, last_id);

        run_overlay(&mut executor, &mut overlay, &mut lines)?;
    }

    log::info!("folio terminal shut down cleanly");
    Ok(())
}

/// Resolve config from CLI arg, `FOLIO_CONFIG` env var, or defaults.
fn load_config() -> Result<FolioConfig> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("FOLIO_CONFIG").ok());
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            Ok(FolioConfig::from_toml_str(&text)?)
        },
        None => Ok(FolioConfig::default()),
    }
}

/// Print entries appended since `last_id`; returns the newest printed id.
fn print_new_entries(executor: &CommandExecutor, last_id: Option<u64>) -> Option<u64> {
    let mut newest = last_id;
    for entry in executor.session().logs.entries() {
        if last_id.is_none_or(|id| entry.id > id) {
            println!("{}", render::format_entry(entry));
            newest = Some(entry.id);
        }
    }
    newest
}

/// Drive the rain overlay until a keypress dismisses it.
///
/// Line-based stand-in for a key listener: an empty line is Enter, a line
/// starting with a tab is the hold key.
fn run_overlay(
    executor: &mut CommandExecutor,
    overlay: &mut OverlayController,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<()> {
    let seed = seed_from_time();
    loop {
        overlay.sync(&executor.session().overlay, seed);
        if !executor.session().overlay.is_active() {
            return Ok(());
        }

        for _ in 0..3 {
            if let Some(frame) = overlay.tick(FRAME_MS) {
                println!("{}", render::format_frame(&frame));
            }
        }
        println!("(press Enter to exit, Tab then Enter to keep watching)");

        let Some(line) = lines.next() else {
            executor.session_mut().overlay.deactivate();
            overlay.sync(&executor.session().overlay, seed);
            return Ok(());
        };
        let key = if line?.starts_with('\t') {
            Key::Tab
        } else {
            Key::Enter
        };
        overlay.handle_key(key, &mut executor.session_mut().overlay);
    }
}

fn seed_from_time() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}
