//! JSON-lines host for the pagination engine.
//!
//! ```text
//! facetpage <config.toml> <items.json>
//! ```
//!
//! Loads the configuration and the item file, prints the initial snapshot,
//! then reads one JSON [`Command`] per line from stdin and prints the
//! resulting snapshot as one JSON line on stdout. A rejected command prints
//! `{"error": "..."}` and leaves the session unchanged. Logs go to stderr.
//!
//! # Example Session
//!
//! ```text
//! $ facetpage config.toml items.json
//! {"total_pages":3,"current_page":0,...}
//! {"command": "next_page"}
//! {"total_pages":3,"current_page":1,...}
//! {"command": "apply_text_search", "pattern": "shirt"}
//! {"error":"Text search is disabled"}
//! ```

#![allow(clippy::multiple_crate_versions)]

use facetpage::observability::init_tracing;
use facetpage::storage::load_items_file;
use facetpage::{handle_command, initialize, Command, Config, PagerError, Result, Snapshot};
use std::io::{BufRead, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("facetpage: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let (Some(config_path), Some(items_path)) = (args.next(), args.next()) else {
        return Err(PagerError::Config(
            "usage: facetpage <config.toml> <items.json>".to_string(),
        ));
    };

    let config = Config::from_file(&config_path)?;
    init_tracing(&config);

    let file = load_items_file(&items_path)?;
    tracing::info!(
        config = %config_path,
        items = %items_path,
        item_count = file.items.len(),
        "starting session"
    );

    let mut session = initialize(config, file.schema, file.items)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_snapshot(&mut out, &session.snapshot())?;

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let result = serde_json::from_str::<Command>(&line)
            .map_err(PagerError::from)
            .and_then(|command| handle_command(&mut session, &command));

        match result {
            Ok(snapshot) => write_snapshot(&mut out, &snapshot)?,
            Err(e) => {
                tracing::warn!(error = %e, "command rejected");
                writeln!(out, "{}", serde_json::json!({ "error": e.to_string() }))?;
                out.flush()?;
            }
        }
    }

    tracing::debug!("input closed, exiting");
    Ok(())
}

fn write_snapshot<W: Write>(out: &mut W, snapshot: &Snapshot) -> Result<()> {
    serde_json::to_writer(&mut *out, snapshot)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
