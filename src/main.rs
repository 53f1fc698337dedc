//! Terminal entry point.
//!
//! A thin line-oriented shell around the library: it reads commands from
//! stdin, translates them into store calls and redraws the screen whenever the
//! store's revision or the snack bar changes.
//!
//! # Usage
//!
//! ```text
//! album-search [--config <file.toml>] [key=value ...]
//! ```
//!
//! `key=value` pairs use the same keys as the config file and are applied on
//! top of it.
//!
//! # Commands
//!
//! - `/<text>` or `query <text>`: Set the filter text (`/` alone clears it)
//! - `asc`, `desc`, `order <asc|desc>`: Set the sort order
//! - `toggle`: Flip the sort order
//! - `reload`: Fetch the catalogue again
//! - `dismiss`: Close the notification
//! - `q`: Quit

#![allow(clippy::multiple_crate_versions)]

use album_search::services::{AlbumsService, JsonAlbumsService};
use album_search::ui::{self, SnackBar};
use album_search::{initialize, load_theme, observability, AlbumSearchStore, Config, SortOrder, Theme};
use futures::executor::block_on;
use std::collections::BTreeMap;
use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;

const DEFAULT_COLUMNS: usize = 80;

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Query(String),
    Order(SortOrder),
    Toggle,
    Reload,
    Dismiss,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if let Some(query) = line.strip_prefix('/') {
        return Some(Command::Query(query.to_string()));
    }

    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
    match (word, rest.trim()) {
        ("query", text) => Some(Command::Query(text.to_string())),
        ("order", order) => order.parse().ok().map(Command::Order),
        ("asc", "") => Some(Command::Order(SortOrder::Asc)),
        ("desc", "") => Some(Command::Order(SortOrder::Desc)),
        ("toggle", "") => Some(Command::Toggle),
        ("reload", "") => Some(Command::Reload),
        ("dismiss", "") => Some(Command::Dismiss),
        ("q" | "quit", "") => Some(Command::Quit),
        _ => None,
    }
}

/// Splits arguments into an optional config file and `key=value` overrides.
fn parse_args(args: impl IntoIterator<Item = String>) -> Result<(Option<String>, BTreeMap<String, String>), String> {
    let mut config_file = None;
    let mut overrides = BTreeMap::new();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        if arg == "--config" {
            config_file = Some(args.next().ok_or("--config needs a file path")?);
        } else if let Some((key, value)) = arg.split_once('=') {
            overrides.insert(key.to_string(), value.to_string());
        } else {
            return Err(format!("unexpected argument: {arg}"));
        }
    }
    Ok((config_file, overrides))
}

fn load_config() -> Result<Config, String> {
    let (config_file, overrides) = parse_args(std::env::args().skip(1))?;
    let mut config = match config_file {
        Some(path) => Config::from_file(&path).map_err(|e| e.to_string())?,
        None => Config::default(),
    };
    config.merge_map(&overrides);
    Ok(config)
}

struct Screen {
    theme: Option<Theme>,
    cols: usize,
    last_frame: Option<String>,
}

impl Screen {
    fn draw<S: AlbumsService>(&mut self, store: &AlbumSearchStore<S, SnackBar>, out: &mut impl Write) -> io::Result<()> {
        let mut vm = store.view_model();
        vm.snack_bar = store.notifier().info();

        let frame = match &self.theme {
            Some(theme) => ui::render(&vm, theme, self.cols),
            None => ui::render_plain(&vm, self.cols),
        };
        if self.last_frame.as_ref() == Some(&frame) {
            return Ok(());
        }

        if self.theme.is_some() {
            write!(out, "\u{1b}[2J\u{1b}[H")?;
        }
        write!(out, "{frame}")?;
        out.flush()?;
        self.last_frame = Some(frame);
        Ok(())
    }
}

fn run(store: &AlbumSearchStore<JsonAlbumsService, SnackBar>, mut screen: Screen) -> io::Result<()> {
    let mut stdout = io::stdout().lock();

    if let Some(fetch) = store.on_init() {
        screen.draw(store, &mut stdout)?;
        block_on(fetch);
    }
    screen.draw(store, &mut stdout)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let Some(command) = parse_command(&line) else {
            if !line.trim().is_empty() {
                writeln!(stdout, "unknown command: {}", line.trim())?;
            }
            continue;
        };
        tracing::debug!(command = ?command, "command received");

        match command {
            Command::Query(query) => store.update_query(query),
            Command::Order(order) => store.update_order(order),
            Command::Toggle => store.update_order(store.order().toggled()),
            Command::Reload => {
                if let Some(fetch) = store.load_all_albums() {
                    screen.draw(store, &mut stdout)?;
                    block_on(fetch);
                }
            }
            Command::Dismiss => {
                store.notifier().dismiss();
            }
            Command::Quit => break,
        }
        screen.draw(store, &mut stdout)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("album-search: {e}");
            return ExitCode::from(2);
        }
    };

    observability::init_tracing(&config);
    let _span = tracing::info_span!("album_search").entered();

    let store = initialize(&config);
    let cols = std::env::var("COLUMNS")
        .ok()
        .and_then(|c| c.parse().ok())
        .unwrap_or(DEFAULT_COLUMNS);
    let screen = Screen {
        theme: io::stdout().is_terminal().then(|| load_theme(&config)),
        cols,
        last_frame: None,
    };

    match run(&store, screen) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "terminal I/O failed");
            eprintln!("album-search: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("/rev"), Some(Command::Query("rev".to_string())));
        assert_eq!(parse_command("/"), Some(Command::Query(String::new())));
        assert_eq!(parse_command("query abbey road"), Some(Command::Query("abbey road".to_string())));
        assert_eq!(parse_command("order DESC"), Some(Command::Order(SortOrder::Desc)));
        assert_eq!(parse_command(" asc "), Some(Command::Order(SortOrder::Asc)));
        assert_eq!(parse_command("toggle"), Some(Command::Toggle));
        assert_eq!(parse_command("reload"), Some(Command::Reload));
        assert_eq!(parse_command("q"), Some(Command::Quit));
        assert_eq!(parse_command("order sideways"), None);
        assert_eq!(parse_command("reload now"), None);
        assert_eq!(parse_command(""), None);
    }

    #[test]
    fn test_parse_args() {
        let args = ["--config", "a.toml", "dismiss_label=OK"].map(String::from);
        let (file, overrides) = parse_args(args).unwrap();
        assert_eq!(file.as_deref(), Some("a.toml"));
        assert_eq!(overrides.get("dismiss_label").map(String::as_str), Some("OK"));

        assert!(parse_args(["--config".to_string()]).is_err());
        assert!(parse_args(["stray".to_string()]).is_err());
    }
}
