//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use shelf_core::{BookNote, ListBookDetail, ListDetail};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Check if output is in quiet mode
    pub fn is_quiet(&self) -> bool {
        matches!(self.format, OutputFormat::Quiet)
    }

    /// Print a single list with its books
    pub fn print_list(&self, list: &ListDetail) {
        match self.format {
            OutputFormat::Human => {
                println!("ID:      {}", list.id);
                println!("Name:    {}", list.name);
                println!("Created: {}", list.created_at.format("%Y-%m-%d %H:%M"));
                println!("Updated: {}", list.updated_at.format("%Y-%m-%d %H:%M"));

                if list.books.is_empty() {
                    println!();
                    println!("No books on this list.");
                    return;
                }

                println!();
                println!("── Books ({}) ──", list.books.len());
                for book in &list.books {
                    let notes_indicator = if book.notes.is_empty() {
                        String::new()
                    } else {
                        format!(" [{}]", book.notes.len())
                    };
                    println!(
                        "{} | {} | {} | {}{}",
                        book.book_id,
                        truncate(&book.book.title, 35),
                        truncate(&book.book.author, 25),
                        book.status.label(),
                        notes_indicator
                    );
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(list).unwrap());
            }
            OutputFormat::Quiet => {
                println!("{}", list.id);
            }
        }
    }

    /// Print the list collection
    pub fn print_lists(&self, lists: &[ListDetail]) {
        match self.format {
            OutputFormat::Human => {
                if lists.is_empty() {
                    println!("No lists found.");
                    return;
                }
                for list in lists {
                    println!(
                        "{} | {} | {} book(s)",
                        list.id,
                        truncate(&list.name, 35),
                        list.books.len()
                    );
                }
                println!("\n{} list(s)", lists.len());
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(lists).unwrap());
            }
            OutputFormat::Quiet => {
                for list in lists {
                    println!("{}", list.id);
                }
            }
        }
    }

    /// Print a single shelved book (with notes)
    pub fn print_book(&self, book: &ListBookDetail) {
        match self.format {
            OutputFormat::Human => {
                println!("Book ID: {}", book.book_id);
                println!("Title:   {}", book.book.title);
                println!("Author:  {}", book.book.author);
                println!("ISBN:    {}", book.book.isbn);
                println!("Status:  {}", book.status.label());
                println!("List:    {}", book.list.name);
                println!("Added:   {}", book.created_at.format("%Y-%m-%d %H:%M"));

                if !book.notes.is_empty() {
                    println!();
                    println!("── Notes ({}) ──", book.notes.len());
                    for note in &book.notes {
                        println!(
                            "[{}] {}",
                            note.created_at.format("%Y-%m-%d"),
                            truncate_line(&note.note, 60)
                        );
                    }
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(book).unwrap());
            }
            OutputFormat::Quiet => {
                println!("{}", book.book_id);
            }
        }
    }

    /// Print a single note
    pub fn print_note(&self, note: &BookNote) {
        match self.format {
            OutputFormat::Human => {
                println!("[{}] {}", note.created_at.format("%Y-%m-%d %H:%M"), note.note);
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(note).unwrap());
            }
            OutputFormat::Quiet => {
                println!("{}", note.id);
            }
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Check if we should prompt for confirmation
    pub fn should_prompt(&self) -> bool {
        self.format == OutputFormat::Human
    }

    /// Print an informational message
    pub fn message(&self, msg: &str) {
        match self.format {
            OutputFormat::Human => println!("{}", msg),
            OutputFormat::Json => {
                println!("{}", serde_json::json!({"message": msg}));
            }
            OutputFormat::Quiet => {}
        }
    }
}

/// Truncate a string to a maximum number of characters, adding "..." if
/// truncated
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{}...", cut)
    }
}

/// Truncate to first line and max length
fn truncate_line(s: &str, max_len: usize) -> String {
    let first_line = s.lines().next().unwrap_or("");
    truncate(first_line, max_len)
}
