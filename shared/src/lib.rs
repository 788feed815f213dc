//! Types and state logic shared by the expense tracker front end.
//!
//! Nothing in here touches the browser, so the whole dashboard behaviour
//! (what is fetched, in which order, what a stale response does, what gets
//! rendered for empty data) is testable natively.

pub mod api;
pub mod error;
pub mod models;
pub mod tracker;
pub mod view;
pub mod workflow;

pub use api::TrackerApi;
pub use error::ApiError;
pub use models::{
    parse_amount, AlertsResponse, CategorySpend, CreateTransactionRequest, InvalidMonth, Month,
    SetBudgetRequest, Summary, Transaction, TransactionType, CATEGORIES, DEFAULT_MONTH,
};
pub use tracker::{
    BudgetDraft, BudgetField, DraftField, FormKind, RequestToken, RequestTokens, TrackerAction,
    TrackerState, TransactionDraft,
};
