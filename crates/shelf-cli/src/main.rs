//! Shelf CLI
//!
//! Command-line client for Shelf - reading lists, books and notes. Every
//! command except `config` talks to a running shelf server.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use shelf_core::{ApiClient, Config, SortOrder, Status};

mod commands;
mod output;
mod pantry;
mod prompt;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "shelf")]
#[command(about = "Shelf - personal reading lists")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Server URL (overrides the config file)
    #[arg(long, global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage reading lists
    List {
        #[command(subcommand)]
        command: ListCommands,
    },
    /// Manage books on a list
    Book {
        #[command(subcommand)]
        command: BookCommands,
    },
    /// Manage notes on a shelved book
    Note {
        #[command(subcommand)]
        command: NoteCommands,
    },
    /// Export a list to a YAML file or a pantry basket
    Export {
        /// List ID
        list_id: i64,
        /// Write the YAML to this file instead of the default name
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Keep each book's reading status in the export
        #[arg(long)]
        include_status: bool,
        /// Pantry ID for a remote push instead of a file
        #[arg(long, requires = "basket_id")]
        pantry_id: Option<String>,
        /// Basket name for a remote push
        #[arg(long, requires = "pantry_id")]
        basket_id: Option<String>,
    },
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum ListCommands {
    /// Create a new list
    #[command(alias = "add")]
    Create {
        /// List name
        name: String,
    },
    /// Show all reading lists
    #[command(alias = "ls")]
    List,
    /// Show a list with its books
    Show {
        /// List ID
        id: i64,
        /// Sort order: createdAt:desc, createdAt:asc, alphabetical:title,
        /// alphabetical:author or status
        #[arg(short, long, default_value = "createdAt:desc")]
        sort: SortOrder,
    },
    /// Rename a list
    Rename {
        /// List ID
        id: i64,
        /// New name
        name: String,
    },
    /// Delete a list and everything on it
    #[command(alias = "rm")]
    Delete {
        /// List ID
        id: i64,
    },
}

#[derive(Subcommand)]
enum BookCommands {
    /// Add a book to a list
    Add {
        /// List ID
        list_id: i64,
        /// Book title
        #[arg(short, long)]
        title: String,
        /// Book author
        #[arg(short, long)]
        author: String,
        /// Book ISBN
        #[arg(short, long)]
        isbn: String,
    },
    /// Update a shelved book's status and fields
    Update {
        /// List ID
        list_id: i64,
        /// Book ID
        book_id: i64,
        /// New reading status (0 = Unread, 1 = In Progress, 2 = Finished)
        #[arg(short, long)]
        status: Option<Status>,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// New author
        #[arg(short, long)]
        author: Option<String>,
        /// New ISBN
        #[arg(short, long)]
        isbn: Option<String>,
    },
    /// Remove a book from a list
    #[command(alias = "rm")]
    Remove {
        /// List ID
        list_id: i64,
        /// Book ID
        book_id: i64,
    },
}

#[derive(Subcommand)]
enum NoteCommands {
    /// Add a note to a shelved book
    #[command(alias = "create")]
    Add {
        /// List ID
        list_id: i64,
        /// Book ID
        book_id: i64,
        /// Note text
        note: String,
    },
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_dir, listen_addr, server_url, pantry_url)
        key: String,
        /// Configuration value
        value: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    // Config commands don't need a server connection
    if let Commands::Config { command } = &cli.command {
        return handle_config_command(command.clone(), &output);
    }

    let config = Config::load().context("Failed to load configuration")?;
    let server_url = cli.server.unwrap_or_else(|| config.server_url.clone());
    let client = ApiClient::new(&server_url)?;

    match cli.command {
        Commands::List { command } => handle_list_command(command, &client, &output).await,
        Commands::Book { command } => handle_book_command(command, &client, &output).await,
        Commands::Note { command } => handle_note_command(command, &client, &output).await,
        Commands::Export {
            list_id,
            output: file,
            include_status,
            pantry_id,
            basket_id,
        } => {
            commands::export::run(
                &client,
                &config,
                list_id,
                file,
                include_status,
                pantry_id,
                basket_id,
                &output,
            )
            .await
        }
        Commands::Config { .. } => unreachable!(), // Handled above
    }
}

async fn handle_list_command(
    command: ListCommands,
    client: &ApiClient,
    output: &Output,
) -> Result<()> {
    match command {
        ListCommands::Create { name } => commands::list::create(client, name, output).await,
        ListCommands::List => commands::list::list(client, output).await,
        ListCommands::Show { id, sort } => commands::list::show(client, id, sort, output).await,
        ListCommands::Rename { id, name } => {
            commands::list::rename(client, id, name, output).await
        }
        ListCommands::Delete { id } => commands::list::delete(client, id, output).await,
    }
}

async fn handle_book_command(
    command: BookCommands,
    client: &ApiClient,
    output: &Output,
) -> Result<()> {
    match command {
        BookCommands::Add {
            list_id,
            title,
            author,
            isbn,
        } => commands::book::add(client, list_id, title, author, isbn, output).await,
        BookCommands::Update {
            list_id,
            book_id,
            status,
            title,
            author,
            isbn,
        } => {
            commands::book::update(client, list_id, book_id, status, title, author, isbn, output)
                .await
        }
        BookCommands::Remove { list_id, book_id } => {
            commands::book::remove(client, list_id, book_id, output).await
        }
    }
}

async fn handle_note_command(
    command: NoteCommands,
    client: &ApiClient,
    output: &Output,
) -> Result<()> {
    match command {
        NoteCommands::Add {
            list_id,
            book_id,
            note,
        } => commands::note::add(client, list_id, book_id, note, output).await,
    }
}

fn handle_config_command(command: Option<ConfigCommands>, output: &Output) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(output),
        Some(ConfigCommands::Set { key, value }) => commands::config::set(key, value, output),
    }
}
