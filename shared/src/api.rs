use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{CreateTransactionRequest, Month, SetBudgetRequest, Summary, Transaction};

/// Operations the dashboard needs from the tracker backend.
///
/// Futures are not required to be `Send`; the browser client runs on the
/// single-threaded wasm executor.
#[async_trait(?Send)]
pub trait TrackerApi {
    /// `GET /summary?month=YYYY-MM`
    async fn get_summary(&self, month: &Month) -> Result<Summary, ApiError>;

    /// `GET /budgets/alerts?month=YYYY-MM`, unwrapped to the alert list
    async fn get_alerts(&self, month: &Month) -> Result<Vec<String>, ApiError>;

    /// `GET /transactions`, every stored transaction in server order
    async fn list_transactions(&self) -> Result<Vec<Transaction>, ApiError>;

    /// `POST /transactions`
    async fn create_transaction(&self, request: &CreateTransactionRequest) -> Result<(), ApiError>;

    /// `POST /budgets`
    async fn set_budget(&self, request: &SetBudgetRequest) -> Result<(), ApiError>;
}
