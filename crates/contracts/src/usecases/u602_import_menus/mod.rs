use serde::{Deserialize, Serialize};

use crate::usecases::common::UseCaseMetadata;

pub use crate::usecases::u601_fetch_deals::ImportResult;

pub struct ImportMenus;

impl UseCaseMetadata for ImportMenus {
    fn usecase_index() -> &'static str {
        "u602"
    }

    fn usecase_name() -> &'static str {
        "import_menus"
    }

    fn display_name() -> &'static str {
        "Import restaurant menus"
    }

    fn description() -> &'static str {
        "Scrape supported restaurant menus and rank the results"
    }
}

/// Query for the synchronous `POST /scrape/import` endpoint.
/// The server answers with an [`ImportResult`] once the whole import is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeImportParams {
    pub auto_rank: bool,
}

impl Default for ScrapeImportParams {
    fn default() -> Self {
        Self { auto_rank: true }
    }
}
