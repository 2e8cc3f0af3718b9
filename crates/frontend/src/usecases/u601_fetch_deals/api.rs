use async_trait::async_trait;
use contracts::domain::a001_deal::{Deal, DealsQuery};
use contracts::usecases::u601_fetch_deals::{
    ImportMenusRequest, JobStatusResponse, SubmitJobResponse,
};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::shared::api_utils::{api_url, with_query};
use crate::shared::import_job::{DealsReader, JobApi, JobHandle};

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Path of the status endpoint for one job
pub fn job_status_path(handle: &JobHandle) -> String {
    format!(
        "/scrape/ubereats/jobs/{}",
        urlencoding::encode(handle.as_str())
    )
}

/// Uber Eats import job endpoints
#[derive(Debug, Clone)]
pub struct HttpJobApi {
    base_url: String,
}

impl HttpJobApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait(?Send)]
impl JobApi for HttpJobApi {
    async fn submit(&self, request: &ImportMenusRequest) -> Result<SubmitJobResponse, String> {
        let response = Request::post(&api_url(&self.base_url, "/scrape/ubereats"))
            .json(request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;
        read_json(response).await
    }

    async fn job_status(&self, handle: &JobHandle) -> Result<JobStatusResponse, String> {
        let response = Request::get(&api_url(&self.base_url, &job_status_path(handle)))
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;
        read_json(response).await
    }
}

/// Full URL for a deal list query
pub fn deals_url(base_url: &str, query: &DealsQuery) -> Result<String, String> {
    let qs = serde_qs::to_string(query).map_err(|e| format!("Failed to encode query: {}", e))?;
    Ok(with_query(api_url(base_url, "/deals"), &qs))
}

/// `GET /deals` with a fixed query
#[derive(Debug, Clone)]
pub struct HttpDealsReader {
    base_url: String,
    query: DealsQuery,
}

impl HttpDealsReader {
    pub fn new(base_url: impl Into<String>, query: DealsQuery) -> Self {
        Self {
            base_url: base_url.into(),
            query,
        }
    }
}

#[async_trait(?Send)]
impl DealsReader for HttpDealsReader {
    async fn reload(&self) -> Result<Vec<Deal>, String> {
        let url = deals_url(&self.base_url, &self.query)?;
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;
        read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_deal::DealSort;

    #[test]
    fn test_job_status_path_encodes_id() {
        assert_eq!(
            job_status_path(&JobHandle::new("abc-123")),
            "/scrape/ubereats/jobs/abc-123"
        );
        assert_eq!(
            job_status_path(&JobHandle::new("a/b c")),
            "/scrape/ubereats/jobs/a%2Fb%20c"
        );
    }

    #[test]
    fn test_deals_url_for_home_query() {
        let query = DealsQuery::home(Some("KFC".to_string()), DealSort::PricePerCalorie, 10);
        assert_eq!(
            deals_url("http://localhost:8000/api", &query).unwrap(),
            "http://localhost:8000/api/deals?restaurant=KFC&sort_by=price_per_calorie&limit=10"
        );
    }

    #[test]
    fn test_deals_url_for_admin_query() {
        assert_eq!(
            deals_url("http://h/api", &DealsQuery::admin(100)).unwrap(),
            "http://h/api/deals?limit=100&active_only=false"
        );
    }

    #[test]
    fn test_deals_url_without_params() {
        assert_eq!(
            deals_url("http://h/api", &DealsQuery::default()).unwrap(),
            "http://h/api/deals"
        );
    }
}
