use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use log::{info, warn};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

use courier::api::{CmdMessage, CourierApi, DisplayClient, DisplayDelivery, MessageLevel};
use courier::config::{CourierConfig, CONFIG_FILENAME};
use courier::error::Result;
use courier::logging;
use courier::model::sample::sample_book;
use courier::model::{Book, Tag, TagCategory};
use courier::store::fs::JsonFileStore;
use courier::store::BookStore;

mod args;
use args::Cli;

const DATA_FILENAME: &str = "book.json";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = resolve_data_dir();

    // Shell output is the fallback when logging cannot start; never fatal.
    let _logger = match logging::init(&data_dir.join("logs"), cli.verbose) {
        Ok(handle) => Some(handle),
        Err(notice) => {
            eprintln!("Note: {}", notice);
            None
        }
    };
    info!("courier {} starting", env!("CARGO_PKG_VERSION"));

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| data_dir.join(CONFIG_FILENAME));
    let config = match CourierConfig::load(&config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!(
                "Note: could not read {}: {}; using defaults",
                config_path.display(),
                err
            );
            CourierConfig::default()
        }
    };

    let data_file = cli
        .data_file
        .clone()
        .or_else(|| config.data_file.clone())
        .unwrap_or_else(|| data_dir.join(DATA_FILENAME));

    let store = JsonFileStore::new(data_file);
    let (book, notices) = load_book(&store);
    let mut api = CourierApi::new(store, book, config.undo_depth);

    print_banner();
    print_messages(&notices);

    repl(&mut api)
}

/// App data lives under `COURIER_HOME` when set (tests use this), otherwise
/// in the platform data directory.
fn resolve_data_dir() -> PathBuf {
    if let Ok(home) = std::env::var("COURIER_HOME") {
        if !home.trim().is_empty() {
            return PathBuf::from(home);
        }
    }
    ProjectDirs::from("com", "courier", "courier")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// No data file yet means sample data; an unreadable or invalid file means an
/// empty book plus a warning. Either way the shell starts.
fn load_book(store: &JsonFileStore) -> (Book, Vec<CmdMessage>) {
    match store.load() {
        Ok(Some(book)) => {
            info!(
                "loaded {} clients and {} deliveries",
                book.clients().len(),
                book.deliveries().len()
            );
            (book, Vec::new())
        }
        Ok(None) => {
            info!("no data file yet, starting with sample data");
            (
                sample_book(),
                vec![CmdMessage::info(format!(
                    "No delivery book found at {}; starting with sample data",
                    store.path().display()
                ))],
            )
        }
        Err(err) => {
            warn!("could not load data file: {}", err);
            (
                Book::new(),
                vec![
                    CmdMessage::warning(format!(
                        "Could not read {}: {}",
                        store.path().display(),
                        err
                    )),
                    CmdMessage::warning(
                        "Starting with an empty delivery book; the next save overwrites the file",
                    ),
                ],
            )
        }
    }
}

fn repl<S: BookStore>(api: &mut CourierApi<S>) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} ", "courier>".cyan());
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        match api.execute(&line) {
            Ok(result) => {
                print_clients(&result.clients);
                print_deliveries(&result.deliveries);
                print_messages(&result.messages);
                if result.exit {
                    break;
                }
            }
            Err(err) => print_messages(&[CmdMessage::error(err.to_string())]),
        }
    }
    Ok(())
}

fn print_banner() {
    println!("{} {}", "Courier".bold(), env!("CARGO_PKG_VERSION"));
    println!(
        "{}",
        "Type 'help' to see available commands, 'exit' to quit.".dimmed()
    );
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const NAME_WIDTH: usize = 22;
const PHONE_WIDTH: usize = 10;
const EMAIL_WIDTH: usize = 26;
const WHEN_WIDTH: usize = 26;
const DELIVERED_MARKER: &str = "✓";

fn print_clients(clients: &[DisplayClient]) {
    if clients.is_empty() {
        return;
    }
    println!("{}", "Clients:".dimmed());
    for dc in clients {
        let idx = format!("{:>3}. ", dc.position);
        let name = pad_to_width(dc.client.name.as_str(), NAME_WIDTH);
        let phone = pad_to_width(dc.client.phone.as_str(), PHONE_WIDTH);
        let email = pad_to_width(dc.client.email.as_str(), EMAIL_WIDTH);

        let used = idx.width() + NAME_WIDTH + PHONE_WIDTH + EMAIL_WIDTH + 6;
        let address = truncate_to_width(
            dc.client.address.as_str(),
            LINE_WIDTH.saturating_sub(used),
        );

        let tags = dc
            .client
            .tags
            .iter()
            .map(|t| styled_tag(t).to_string())
            .collect::<Vec<_>>()
            .join(" ");

        if tags.is_empty() {
            println!("{}{}  {}  {}  {}", idx, name.bold(), phone, email, address);
        } else {
            println!(
                "{}{}  {}  {}  {}  {}",
                idx,
                name.bold(),
                phone,
                email,
                address,
                tags
            );
        }
    }
}

fn print_deliveries(deliveries: &[DisplayDelivery]) {
    if deliveries.is_empty() {
        return;
    }
    println!("{}", "Deliveries:".dimmed());
    for dd in deliveries {
        let idx = format!("{:>3}. ", dd.position);
        let marker = if dd.delivery.delivered {
            DELIVERED_MARKER.green()
        } else {
            " ".normal()
        };
        let when = pad_to_width(&dd.delivery.when.to_string(), WHEN_WIDTH);
        let name = pad_to_width(dd.delivery.client.name.as_str(), NAME_WIDTH);
        let cost = format!("{:>8}", dd.delivery.cost.to_string());

        let used = idx.width() + 2 + WHEN_WIDTH + NAME_WIDTH + cost.width() + 8;
        let remark = truncate_to_width(
            dd.delivery.remark.as_str(),
            LINE_WIDTH.saturating_sub(used),
        );

        let line = format!("{}{} {}  {}  {}  {}", idx, marker, when, name.bold(), remark, cost);
        match &dd.delivery.tag {
            Some(tag) => println!("{}  {}", line, styled_tag(tag)),
            None => println!("{}", line),
        }
    }
}

fn styled_tag(tag: &Tag) -> ColoredString {
    let text = format!("[{}]", tag);
    match tag.category() {
        TagCategory::Personal => text.green(),
        TagCategory::Corporate => text.blue(),
        TagCategory::Other => text.dimmed(),
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
