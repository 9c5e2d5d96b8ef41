//! Pantry basket upload
//!
//! Pushes an export document to a pantry basket, replacing the basket's
//! contents with the document as JSON.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::StatusCode;
use tracing::debug;

use shelf_core::ExportDocument;

/// Request timeout for the pantry service
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Push an export document to a pantry basket
///
/// Returns the confirmation message on success. Any answer other than 200
/// is an error carrying the response body.
pub async fn push_basket(
    base_url: &str,
    pantry_id: &str,
    basket_id: &str,
    doc: &ExportDocument,
) -> Result<String> {
    let url = basket_url(base_url, pantry_id, basket_id);
    debug!("POST {}", url);

    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")?;

    let response = client
        .post(&url)
        .json(doc)
        .send()
        .await
        .context("Failed to reach the pantry service")?;

    if response.status() == StatusCode::OK {
        Ok(format!("Pantry Basket {} has been updated.", basket_id))
    } else {
        let body = response.text().await.unwrap_or_default();
        bail!("There was an error updating your pantry basket: {}", body);
    }
}

fn basket_url(base_url: &str, pantry_id: &str, basket_id: &str) -> String {
    format!(
        "{}/apiv1/pantry/{}/basket/{}",
        base_url.trim_end_matches('/'),
        pantry_id,
        basket_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basket_url() {
        assert_eq!(
            basket_url("https://getpantry.cloud", "abc123", "books"),
            "https://getpantry.cloud/apiv1/pantry/abc123/basket/books"
        );
        assert_eq!(
            basket_url("https://getpantry.cloud/", "abc123", "books"),
            "https://getpantry.cloud/apiv1/pantry/abc123/basket/books"
        );
    }
}
