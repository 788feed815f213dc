//! Load and submit sequences, expressed as a stream of [`TrackerAction`]s.
//!
//! The caller owns the state and decides how actions reach it; in the browser
//! that is a Yew reducer dispatcher, in tests a plain `RefCell`.

use crate::api::TrackerApi;
use crate::error::ApiError;
use crate::models::Month;
use crate::tracker::{BudgetDraft, FormKind, RequestToken, TrackerAction, TransactionDraft};

/// Fetch summary, alerts and transactions for `month`, one after another.
///
/// Each slice is dispatched as soon as it arrives. The first failure
/// dispatches [`TrackerAction::LoadFailed`] and skips the remaining fetches.
pub async fn load_month<A, F>(
    api: &A,
    month: &Month,
    token: RequestToken,
    dispatch: F,
) -> Result<(), ApiError>
where
    A: TrackerApi + ?Sized,
    F: Fn(TrackerAction),
{
    dispatch(TrackerAction::LoadStarted(token, month.clone()));
    match fetch_slices(api, month, token, &dispatch).await {
        Ok(()) => {
            dispatch(TrackerAction::LoadSucceeded(token));
            Ok(())
        }
        Err(err) => {
            dispatch(TrackerAction::LoadFailed(token, err.to_string()));
            Err(err)
        }
    }
}

async fn fetch_slices<A, F>(
    api: &A,
    month: &Month,
    token: RequestToken,
    dispatch: &F,
) -> Result<(), ApiError>
where
    A: TrackerApi + ?Sized,
    F: Fn(TrackerAction),
{
    let summary = api.get_summary(month).await?;
    dispatch(TrackerAction::SummaryLoaded(token, summary));

    let alerts = api.get_alerts(month).await?;
    dispatch(TrackerAction::AlertsLoaded(token, alerts));

    let transactions = api.list_transactions().await?;
    dispatch(TrackerAction::TransactionsLoaded(token, transactions));
    Ok(())
}

/// Send the transaction draft. On success the draft is reset, dated with
/// whatever `today` returns at that moment; the caller then reloads.
pub async fn submit_transaction<A, F, T>(
    api: &A,
    draft: &TransactionDraft,
    today: T,
    dispatch: F,
) -> Result<(), ApiError>
where
    A: TrackerApi + ?Sized,
    F: Fn(TrackerAction),
    T: FnOnce() -> String,
{
    dispatch(TrackerAction::SubmitStarted(FormKind::Transaction));
    match api.create_transaction(&draft.to_request()).await {
        Ok(()) => {
            dispatch(TrackerAction::SubmitSucceeded {
                form: FormKind::Transaction,
                today: today(),
            });
            Ok(())
        }
        Err(err) => {
            dispatch(TrackerAction::SubmitFailed(FormKind::Transaction));
            Err(err)
        }
    }
}

/// Set the spending limit for one category in `month`.
pub async fn submit_budget<A, F>(
    api: &A,
    month: &Month,
    draft: &BudgetDraft,
    dispatch: F,
) -> Result<(), ApiError>
where
    A: TrackerApi + ?Sized,
    F: Fn(TrackerAction),
{
    dispatch(TrackerAction::SubmitStarted(FormKind::Budget));
    match api.set_budget(&draft.to_request(month)).await {
        Ok(()) => {
            dispatch(TrackerAction::SubmitSucceeded {
                form: FormKind::Budget,
                today: String::new(),
            });
            Ok(())
        }
        Err(err) => {
            dispatch(TrackerAction::SubmitFailed(FormKind::Budget));
            Err(err)
        }
    }
}
