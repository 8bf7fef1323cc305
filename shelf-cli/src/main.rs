//! shelf CLI
//!
//! Command-line interface for the book catalog.

mod commands;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

#[derive(Parser)]
#[command(name = "shelf")]
#[command(about = "Manage a personal book catalog", long_about = None)]
struct Cli {
    /// Catalog file (defaults to library.db in the per-user data directory)
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new book
    Add {
        title: String,
        author: String,
        year: String,
        isbn: String,
    },

    /// List every book in the catalog
    List,

    /// Search by exact field values (a row matches on any supplied field)
    Search {
        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        author: Option<String>,

        #[arg(short, long)]
        year: Option<String>,

        #[arg(short, long)]
        isbn: Option<String>,
    },

    /// Replace every field of an existing book
    Update {
        id: i64,
        title: String,
        author: String,
        year: String,
        isbn: String,
    },

    /// Delete a book
    Delete {
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Export the catalog as CSV
    Export {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let catalog = cli.catalog.unwrap_or_else(shelf_db::default_catalog_path);
    log::debug!("Using catalog at {}", catalog.display());

    let result = match cli.command {
        Commands::Add {
            title,
            author,
            year,
            isbn,
        } => commands::run_add(&catalog, title, author, year, isbn),
        Commands::List => commands::run_list(&catalog),
        Commands::Search {
            title,
            author,
            year,
            isbn,
        } => commands::run_search(&catalog, title, author, year, isbn),
        Commands::Update {
            id,
            title,
            author,
            year,
            isbn,
        } => commands::run_update(&catalog, id, title, author, year, isbn),
        Commands::Delete { id, yes } => commands::run_delete(&catalog, id, yes),
        Commands::Export { output } => commands::run_export(&catalog, output),
    };

    if let Err(e) = result {
        eprintln!("{} {e}", "\u{2718}".if_supports_color(Stderr, |t| t.red()));
        std::process::exit(1);
    }
}
