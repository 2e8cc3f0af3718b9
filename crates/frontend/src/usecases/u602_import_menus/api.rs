use contracts::usecases::u602_import_menus::{ImportResult, ScrapeImportParams};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, with_query};

/// Legacy synchronous import: the server scrapes every supported menu
/// before answering.
pub async fn scrape_import(base_url: &str, params: ScrapeImportParams) -> Result<ImportResult, String> {
    let qs = serde_qs::to_string(&params).map_err(|e| format!("Failed to encode query: {}", e))?;
    let response = Request::post(&with_query(api_url(base_url, "/scrape/import"), &qs))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to import menus: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
