//! # vitrine
//!
//! Command-line image gallery. Images are stored as data URLs in a local
//! SQLite database and survive across runs.

use std::ffi::OsStr;
use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context};
use tracing::{info, warn};

use vitrine_client_lib::commands::{self, theme::ThemeAction};
use vitrine_client_lib::config::ClientConfig;
use vitrine_client_lib::{init_tracing, Gallery};
use vitrine_shared::RecordId;
use vitrine_store::Database;

const HELP: &str = "\
vitrine - local image gallery

USAGE:
  vitrine [--db <path>] <command> [args]

COMMANDS:
  add <file>...                     upload a batch of images
  list [--search <q>] [--json]      list images, optionally filtered by name
  show <id> [--data] [--out <path>] show one image (data URL / save to file)
  delete <id> [--yes]               delete an image after confirmation
  theme [show|toggle|dark|light]    print or change the theme
  backup export <path>              write the gallery to a JSON file
  backup import <path>              merge a JSON backup into the gallery

ENVIRONMENT:
  VITRINE_DB_PATH   database file (default: platform data directory)
  VITRINE_LOG       log filter when RUST_LOG is unset
";

fn os_to_path(s: &OsStr) -> Result<PathBuf, &'static str> {
    Ok(PathBuf::from(s))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let config = ClientConfig::from_env();
    init_tracing(&config.log_filter);
    for warning in &config.warnings {
        warn!("{warning}");
    }

    let db_path = args
        .opt_value_from_os_str("--db", os_to_path)?
        .or(config.db_path.clone());

    let Some(command) = args.subcommand()? else {
        print!("{HELP}");
        return Ok(());
    };

    let db = match &db_path {
        Some(path) => Database::open_at(path),
        None => Database::new(),
    }
    .context("failed to open gallery database")?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        db = ?db.path(),
        command = %command,
        "starting vitrine"
    );

    let mut gallery = Gallery::hydrate(db);
    let mut out = io::stdout().lock();

    match command.as_str() {
        "add" => {
            let mut paths = Vec::new();
            while let Some(path) = args.opt_free_from_os_str(os_to_path)? {
                paths.push(path);
            }
            commands::upload::add(&mut gallery, paths, &mut out).await?;
        }
        "list" | "ls" => {
            let json = args.contains("--json");
            let query: Option<String> = args.opt_value_from_str("--search")?;
            finish(args)?;
            commands::browse::list(&mut gallery, query, json, &mut out)?;
        }
        "show" => {
            let with_data = args.contains("--data");
            let save_to = args.opt_value_from_os_str("--out", os_to_path)?;
            let id: RecordId = args.free_from_str()?;
            finish(args)?;
            commands::browse::show(&gallery, &id, with_data, save_to.as_deref(), &mut out)?;
        }
        "delete" | "rm" => {
            let yes = args.contains(["-y", "--yes"]);
            let id: RecordId = args.free_from_str()?;
            finish(args)?;
            commands::delete::delete(
                &mut gallery,
                &id,
                |record| {
                    if yes {
                        Ok(true)
                    } else {
                        commands::delete::prompt(record, &mut io::stdin().lock())
                    }
                },
                &mut out,
            )?;
        }
        "theme" => {
            let action = args
                .opt_free_from_str::<ThemeAction>()?
                .unwrap_or(ThemeAction::Show);
            finish(args)?;
            commands::theme::theme(&mut gallery, action, &mut out)?;
        }
        "backup" => {
            let action: String = args.free_from_str()?;
            let path = args.free_from_os_str(os_to_path)?;
            finish(args)?;
            match action.as_str() {
                "export" => commands::backup::export(&gallery, &path, &mut out)?,
                "import" => commands::backup::import(&mut gallery, &path, &mut out)?,
                other => bail!("unknown backup action '{other}' (expected export or import)"),
            }
        }
        other => bail!("unknown command '{other}', see --help"),
    }

    Ok(())
}

/// Fail on leftover arguments instead of silently ignoring them.
fn finish(args: pico_args::Arguments) -> anyhow::Result<()> {
    let rest = args.finish();
    if !rest.is_empty() {
        bail!("unexpected arguments: {rest:?}");
    }
    Ok(())
}
