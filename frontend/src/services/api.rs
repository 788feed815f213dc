use async_trait::async_trait;
use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{
    AlertsResponse, ApiError, CreateTransactionRequest, Month, SetBudgetRequest, Summary,
    TrackerApi, Transaction,
};

/// API client for communicating with the tracker backend
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn month_url(&self, path: &str, month: &Month) -> String {
        format!("{}{}?month={}", self.base_url, path, month)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = Self::check_status(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn post_json<B: serde::Serialize>(&self, url: &str, body: &B) -> Result<(), ApiError> {
        let response = Request::post(url)
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn check_status(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            Ok(response)
        } else {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            Err(ApiError::bad_status(status, error_text))
        }
    }
}

#[async_trait(?Send)]
impl TrackerApi for ApiClient {
    async fn get_summary(&self, month: &Month) -> Result<Summary, ApiError> {
        self.get_json(&self.month_url("/summary", month)).await
    }

    async fn get_alerts(&self, month: &Month) -> Result<Vec<String>, ApiError> {
        let response: AlertsResponse = self
            .get_json(&self.month_url("/budgets/alerts", month))
            .await?;
        Ok(response.alerts)
    }

    async fn list_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        self.get_json(&self.url("/transactions")).await
    }

    async fn create_transaction(&self, request: &CreateTransactionRequest) -> Result<(), ApiError> {
        self.post_json(&self.url("/transactions"), request).await
    }

    async fn set_budget(&self, request: &SetBudgetRequest) -> Result<(), ApiError> {
        self.post_json(&self.url("/budgets"), request).await
    }
}
