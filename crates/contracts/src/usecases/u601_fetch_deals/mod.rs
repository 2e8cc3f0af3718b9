pub mod progress;
pub mod request;
pub mod response;

pub use progress::{JobProgress, JobStatus, JobStatusResponse};
pub use request::ImportMenusRequest;
pub use response::{ImportResult, SubmitJobResponse};

use crate::usecases::common::UseCaseMetadata;

pub struct FetchDeals;

impl UseCaseMetadata for FetchDeals {
    fn usecase_index() -> &'static str {
        "u601"
    }

    fn usecase_name() -> &'static str {
        "fetch_deals"
    }

    fn display_name() -> &'static str {
        "Fetch deals for my location"
    }

    fn description() -> &'static str {
        "Scrape and rank restaurant menus near the user's location"
    }
}
