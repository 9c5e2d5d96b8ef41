//! Export command handler

use std::path::PathBuf;

use anyhow::{Context, Result};

use shelf_core::export::{build_export_document, default_file_name, to_yaml};
use shelf_core::{ApiClient, Config, ExportOptions};

use crate::output::Output;
use crate::pantry;

/// Export a list, either to a YAML file or to a pantry basket
#[allow(clippy::too_many_arguments)]
pub async fn run(
    client: &ApiClient,
    config: &Config,
    list_id: i64,
    file: Option<PathBuf>,
    include_status: bool,
    pantry_id: Option<String>,
    basket_id: Option<String>,
    output: &Output,
) -> Result<()> {
    let detail = client.get_list(list_id).await?;
    let doc = build_export_document(&detail, ExportOptions { include_status });

    if let (Some(pantry_id), Some(basket_id)) = (pantry_id, basket_id) {
        let msg = pantry::push_basket(&config.pantry_url, &pantry_id, &basket_id, &doc).await?;
        output.success(&msg);
        return Ok(());
    }

    let yaml = to_yaml(&doc).context("Failed to serialize export")?;
    let path = file.unwrap_or_else(|| PathBuf::from(default_file_name(&detail.name)));
    std::fs::write(&path, yaml)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    output.success(&format!("Exported {} to {}", detail.name, path.display()));
    if output.is_quiet() {
        println!("{}", path.display());
    }

    Ok(())
}
