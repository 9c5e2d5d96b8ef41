//! List command handlers

use anyhow::Result;

use shelf_core::{ApiClient, DeleteOutcome, HomeView, ListView, SortOrder};

use crate::output::Output;
use crate::prompt::confirm;

/// Create a new list
pub async fn create(client: &ApiClient, name: String, output: &Output) -> Result<()> {
    let list = client.create_list(&name).await?;

    output.success(&format!("Created list: {}", list.name));
    output.print_list(&list);

    Ok(())
}

/// Show all lists, newest first
pub async fn list(client: &ApiClient, output: &Output) -> Result<()> {
    let home = HomeView::new(client.all_lists().await?);
    output.print_lists(home.lists());
    Ok(())
}

/// Show a single list with its books
pub async fn show(client: &ApiClient, id: i64, sort: SortOrder, output: &Output) -> Result<()> {
    let view = ListView::new(client.get_list(id).await?).sorted(sort);
    output.print_list(view.detail());
    Ok(())
}

/// Rename a list
pub async fn rename(client: &ApiClient, id: i64, name: String, output: &Output) -> Result<()> {
    let list = client.rename_list(id, &name).await?;

    output.success(&format!("Renamed list to {}", list.name));
    output.print_list(&list);

    Ok(())
}

/// Delete a list
pub async fn delete(client: &ApiClient, id: i64, output: &Output) -> Result<()> {
    if output.should_prompt() && !confirm(&format!("Delete list {} and everything on it?", id))? {
        println!("Cancelled.");
        return Ok(());
    }

    match client.delete_list(id).await? {
        DeleteOutcome::Deleted(list) => {
            output.success(&format!("Deleted list: {}", list.name));
        }
        DeleteOutcome::AlreadyAbsent => {
            output.message(&format!("No list found with id {}", id));
        }
    }

    Ok(())
}
