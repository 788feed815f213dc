//! # Tracker state
//!
//! Everything the dashboard shows lives in one [`TrackerState`] value that
//! only changes through [`TrackerState::apply`]. Every data-load sequence is
//! tagged with a [`RequestToken`] and the month it fetches. Results carrying
//! anything but the most recently started token are dropped, and so is any
//! sequence for a month other than the selected one, so a slow response for
//! an old month can never overwrite the month the user is looking at.

use crate::models::{
    parse_amount, CreateTransactionRequest, Month, SetBudgetRequest, Summary, Transaction,
    TransactionType, CATEGORIES,
};

/// Identifies one data-load sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Issues strictly increasing request tokens
#[derive(Debug, Default)]
pub struct RequestTokens {
    last: u64,
}

impl RequestTokens {
    pub fn next(&mut self) -> RequestToken {
        self.last += 1;
        RequestToken(self.last)
    }
}

/// In-progress transaction form
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub tx_date: String,
    /// Raw text from the amount input
    pub amount: String,
    pub tx_type: TransactionType,
    pub category: String,
    pub note: String,
}

impl TransactionDraft {
    /// Blank form dated `today` (`YYYY-MM-DD`)
    pub fn new(today: impl Into<String>) -> Self {
        Self {
            tx_date: today.into(),
            amount: String::new(),
            tx_type: TransactionType::Expense,
            category: CATEGORIES[0].to_string(),
            note: String::new(),
        }
    }

    pub fn to_request(&self) -> CreateTransactionRequest {
        CreateTransactionRequest {
            tx_date: self.tx_date.clone(),
            amount: parse_amount(&self.amount),
            tx_type: self.tx_type,
            category: self.category.clone(),
            note: self.note.clone(),
        }
    }
}

/// Fields of [`TransactionDraft`] that inputs edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    TxDate,
    Amount,
    TxType,
    Category,
    Note,
}

/// In-progress monthly budget limit form
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetDraft {
    pub category: String,
    pub limit_amount: String,
}

impl Default for BudgetDraft {
    fn default() -> Self {
        Self {
            category: CATEGORIES[0].to_string(),
            limit_amount: String::new(),
        }
    }
}

impl BudgetDraft {
    pub fn to_request(&self, month: &Month) -> SetBudgetRequest {
        SetBudgetRequest {
            month: month.clone(),
            category: self.category.clone(),
            limit_amount: parse_amount(&self.limit_amount),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetField {
    Category,
    LimitAmount,
}

/// Which form a submit action refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Transaction,
    Budget,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TrackerAction {
    MonthChanged(Month),
    LoadStarted(RequestToken, Month),
    SummaryLoaded(RequestToken, Summary),
    AlertsLoaded(RequestToken, Vec<String>),
    TransactionsLoaded(RequestToken, Vec<Transaction>),
    LoadSucceeded(RequestToken),
    LoadFailed(RequestToken, String),
    DraftEdited(DraftField, String),
    BudgetDraftEdited(BudgetField, String),
    SubmitStarted(FormKind),
    /// `today` dates the fresh transaction draft
    SubmitSucceeded { form: FormKind, today: String },
    SubmitFailed(FormKind),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackerState {
    pub month: Month,
    pub summary: Option<Summary>,
    pub alerts: Vec<String>,
    pub transactions: Vec<Transaction>,
    pub draft: TransactionDraft,
    pub budget_draft: BudgetDraft,
    pub loading: bool,
    pub error: Option<String>,
    pub saving_transaction: bool,
    pub saving_budget: bool,
    latest_load: Option<(RequestToken, Month)>,
}

impl TrackerState {
    pub fn new(month: Month, today: impl Into<String>) -> Self {
        Self {
            month,
            summary: None,
            alerts: Vec::new(),
            transactions: Vec::new(),
            draft: TransactionDraft::new(today),
            budget_draft: BudgetDraft::default(),
            loading: false,
            error: None,
            saving_transaction: false,
            saving_budget: false,
            latest_load: None,
        }
    }

    /// Token of the load sequence whose results are currently accepted
    pub fn latest_load(&self) -> Option<RequestToken> {
        self.latest_load.as_ref().map(|(token, _)| *token)
    }

    fn is_current(&self, token: RequestToken) -> bool {
        match &self.latest_load {
            Some((latest, month)) => *latest == token && *month == self.month,
            None => false,
        }
    }

    pub fn is_submitting(&self, form: FormKind) -> bool {
        match form {
            FormKind::Transaction => self.saving_transaction,
            FormKind::Budget => self.saving_budget,
        }
    }

    fn set_submitting(&mut self, form: FormKind, value: bool) {
        match form {
            FormKind::Transaction => self.saving_transaction = value,
            FormKind::Budget => self.saving_budget = value,
        }
    }

    pub fn apply(&mut self, action: TrackerAction) {
        match action {
            TrackerAction::MonthChanged(month) => {
                self.month = month;
            }
            TrackerAction::LoadStarted(token, month) => {
                // An older token belongs to a superseded sequence; another
                // month is no longer on screen.
                let newer = self.latest_load().map_or(true, |latest| token > latest);
                if newer && month == self.month {
                    self.latest_load = Some((token, month));
                    self.loading = true;
                    self.error = None;
                }
            }
            TrackerAction::SummaryLoaded(token, summary) => {
                if self.is_current(token) {
                    self.summary = Some(summary);
                }
            }
            TrackerAction::AlertsLoaded(token, alerts) => {
                if self.is_current(token) {
                    self.alerts = alerts;
                }
            }
            TrackerAction::TransactionsLoaded(token, transactions) => {
                if self.is_current(token) {
                    self.transactions = transactions;
                }
            }
            TrackerAction::LoadSucceeded(token) => {
                if self.is_current(token) {
                    self.loading = false;
                }
            }
            TrackerAction::LoadFailed(token, message) => {
                if self.is_current(token) {
                    self.loading = false;
                    self.error = Some(message);
                }
            }
            TrackerAction::DraftEdited(field, value) => match field {
                DraftField::TxDate => self.draft.tx_date = value,
                DraftField::Amount => self.draft.amount = value,
                DraftField::TxType => {
                    if let Some(tx_type) = TransactionType::parse_input(&value) {
                        self.draft.tx_type = tx_type;
                    }
                }
                DraftField::Category => self.draft.category = value,
                DraftField::Note => self.draft.note = value,
            },
            TrackerAction::BudgetDraftEdited(field, value) => match field {
                BudgetField::Category => self.budget_draft.category = value,
                BudgetField::LimitAmount => self.budget_draft.limit_amount = value,
            },
            TrackerAction::SubmitStarted(form) => self.set_submitting(form, true),
            TrackerAction::SubmitSucceeded { form, today } => {
                self.set_submitting(form, false);
                match form {
                    FormKind::Transaction => self.draft = TransactionDraft::new(today),
                    FormKind::Budget => self.budget_draft = BudgetDraft::default(),
                }
            }
            TrackerAction::SubmitFailed(form) => self.set_submitting(form, false),
        }
    }
}

impl Default for TrackerState {
    fn default() -> Self {
        Self::new(Month::default(), String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategorySpend;

    fn summary(income: f64) -> Summary {
        Summary {
            month: None,
            total_income: income,
            total_expense: 0.0,
            savings: income,
            per_category: Some(vec![CategorySpend {
                category: "Food".to_string(),
                spent: 10.0,
            }]),
        }
    }

    fn transaction(category: &str) -> Transaction {
        Transaction {
            id: None,
            tx_date: "2025-12-01".to_string(),
            amount: 1.0,
            tx_type: TransactionType::Expense,
            category: category.to_string(),
            note: None,
        }
    }

    #[test]
    fn test_initial_state() {
        let state = TrackerState::new(Month::default(), "2025-12-14");
        assert_eq!(state.month.to_string(), "2025-12");
        assert!(state.summary.is_none());
        assert!(state.alerts.is_empty());
        assert!(state.transactions.is_empty());
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.draft, TransactionDraft::new("2025-12-14"));
        assert_eq!(state.draft.category, "Food");
        assert_eq!(state.draft.tx_type, TransactionType::Expense);
        assert!(state.latest_load().is_none());
    }

    #[test]
    fn test_tokens_increase() {
        let mut tokens = RequestTokens::default();
        let first = tokens.next();
        let second = tokens.next();
        assert!(second > first);
        assert_eq!(first.value() + 1, second.value());
    }

    #[test]
    fn test_successful_load_replaces_slices() {
        let mut tokens = RequestTokens::default();
        let mut state = TrackerState::default();
        state.error = Some("old failure".to_string());

        let token = tokens.next();
        state.apply(TrackerAction::LoadStarted(token, Month::default()));
        assert!(state.loading);
        assert!(state.error.is_none());

        state.apply(TrackerAction::SummaryLoaded(token, summary(100.0)));
        state.apply(TrackerAction::AlertsLoaded(token, vec!["Over budget: Food".into()]));
        state.apply(TrackerAction::TransactionsLoaded(token, vec![transaction("Food")]));
        state.apply(TrackerAction::LoadSucceeded(token));

        assert!(!state.loading);
        assert_eq!(state.summary.as_ref().unwrap().total_income, 100.0);
        assert_eq!(state.alerts, vec!["Over budget: Food".to_string()]);
        assert_eq!(state.transactions.len(), 1);
    }

    #[test]
    fn test_failed_load_keeps_previous_slices() {
        let mut tokens = RequestTokens::default();
        let mut state = TrackerState::default();
        let first = tokens.next();
        state.apply(TrackerAction::LoadStarted(first, Month::default()));
        state.apply(TrackerAction::SummaryLoaded(first, summary(1.0)));
        state.apply(TrackerAction::AlertsLoaded(first, vec!["a".into()]));
        state.apply(TrackerAction::TransactionsLoaded(first, vec![transaction("Rent")]));
        state.apply(TrackerAction::LoadSucceeded(first));

        let second = tokens.next();
        state.apply(TrackerAction::LoadStarted(second, Month::default()));
        state.apply(TrackerAction::LoadFailed(second, "Network error: down".into()));

        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Network error: down"));
        assert_eq!(state.summary.as_ref().unwrap().total_income, 1.0);
        assert_eq!(state.alerts, vec!["a".to_string()]);
        assert_eq!(state.transactions[0].category, "Rent");
    }

    #[test]
    fn test_stale_results_are_discarded() {
        let mut tokens = RequestTokens::default();
        let mut state = TrackerState::default();

        let november = tokens.next();
        let nov: Month = "2025-11".parse().unwrap();
        state.apply(TrackerAction::MonthChanged(nov.clone()));
        state.apply(TrackerAction::LoadStarted(november, nov));

        let december = tokens.next();
        state.apply(TrackerAction::MonthChanged("2025-12".parse().unwrap()));
        state.apply(TrackerAction::LoadStarted(december, Month::default()));
        state.apply(TrackerAction::SummaryLoaded(december, summary(12.0)));
        state.apply(TrackerAction::AlertsLoaded(december, Vec::new()));

        // November resolves late
        state.apply(TrackerAction::SummaryLoaded(november, summary(11.0)));
        state.apply(TrackerAction::AlertsLoaded(november, vec!["stale".into()]));
        state.apply(TrackerAction::LoadFailed(november, "late failure".into()));
        state.apply(TrackerAction::LoadSucceeded(november));

        assert_eq!(state.summary.as_ref().unwrap().total_income, 12.0);
        assert!(state.alerts.is_empty());
        assert!(state.error.is_none());
        assert!(state.loading, "only the latest load may clear the flag");

        state.apply(TrackerAction::LoadSucceeded(december));
        assert!(!state.loading);
    }

    #[test]
    fn test_out_of_order_start_is_ignored() {
        let mut tokens = RequestTokens::default();
        let mut state = TrackerState::default();
        let older = tokens.next();
        let newer = tokens.next();
        state.apply(TrackerAction::LoadStarted(newer, Month::default()));
        state.apply(TrackerAction::LoadStarted(older, Month::default()));
        assert_eq!(state.latest_load(), Some(newer));
    }

    #[test]
    fn test_load_for_unselected_month_is_ignored() {
        let mut tokens = RequestTokens::default();
        let mut state = TrackerState::default();
        let december = tokens.next();
        state.apply(TrackerAction::LoadStarted(december, Month::default()));
        state.apply(TrackerAction::SummaryLoaded(december, summary(12.0)));
        state.apply(TrackerAction::LoadSucceeded(december));

        // Started after December's load, but for a month no longer selected
        let november = tokens.next();
        state.apply(TrackerAction::LoadStarted(november, "2025-11".parse().unwrap()));
        state.apply(TrackerAction::SummaryLoaded(november, summary(11.0)));
        state.apply(TrackerAction::AlertsLoaded(november, vec!["stale".into()]));
        state.apply(TrackerAction::LoadSucceeded(november));

        assert_eq!(state.latest_load(), Some(december));
        assert_eq!(state.summary.as_ref().unwrap().total_income, 12.0);
        assert!(state.alerts.is_empty());
        assert!(!state.loading);
    }

    #[test]
    fn test_month_change_drops_in_flight_load() {
        let mut tokens = RequestTokens::default();
        let mut state = TrackerState::default();
        let token = tokens.next();
        state.apply(TrackerAction::LoadStarted(token, Month::default()));

        state.apply(TrackerAction::MonthChanged("2026-01".parse().unwrap()));
        state.apply(TrackerAction::SummaryLoaded(token, summary(12.0)));

        assert!(state.summary.is_none());
    }

    #[test]
    fn test_draft_edits() {
        let mut state = TrackerState::new(Month::default(), "2025-12-14");
        state.apply(TrackerAction::DraftEdited(DraftField::Amount, "250.50".into()));
        state.apply(TrackerAction::DraftEdited(DraftField::TxType, "INCOME".into()));
        state.apply(TrackerAction::DraftEdited(DraftField::Category, "Rent".into()));
        state.apply(TrackerAction::DraftEdited(DraftField::Note, "lunch".into()));
        state.apply(TrackerAction::DraftEdited(DraftField::TxDate, "2025-12-01".into()));
        state.apply(TrackerAction::DraftEdited(DraftField::TxType, "bogus".into()));

        assert_eq!(state.draft.amount, "250.50");
        assert_eq!(state.draft.tx_type, TransactionType::Income);
        assert_eq!(state.draft.category, "Rent");
        assert_eq!(state.draft.note, "lunch");
        assert_eq!(state.draft.tx_date, "2025-12-01");
    }

    #[test]
    fn test_submit_success_resets_only_that_form() {
        let mut state = TrackerState::new(Month::default(), "2025-12-01");
        state.apply(TrackerAction::DraftEdited(DraftField::Amount, "3".into()));
        state.apply(TrackerAction::BudgetDraftEdited(BudgetField::LimitAmount, "500".into()));

        state.apply(TrackerAction::SubmitStarted(FormKind::Transaction));
        assert!(state.is_submitting(FormKind::Transaction));
        assert!(!state.is_submitting(FormKind::Budget));

        state.apply(TrackerAction::SubmitSucceeded {
            form: FormKind::Transaction,
            today: "2025-12-02".into(),
        });
        assert!(!state.saving_transaction);
        assert_eq!(state.draft, TransactionDraft::new("2025-12-02"));
        assert_eq!(state.budget_draft.limit_amount, "500");

        state.apply(TrackerAction::SubmitSucceeded {
            form: FormKind::Budget,
            today: "2025-12-02".into(),
        });
        assert_eq!(state.budget_draft, BudgetDraft::default());
    }

    #[test]
    fn test_submit_failure_keeps_draft() {
        let mut state = TrackerState::new(Month::default(), "2025-12-01");
        state.apply(TrackerAction::DraftEdited(DraftField::Amount, "abc".into()));
        state.apply(TrackerAction::SubmitStarted(FormKind::Transaction));
        state.apply(TrackerAction::SubmitFailed(FormKind::Transaction));

        assert!(!state.saving_transaction);
        assert_eq!(state.draft.amount, "abc");
        assert!(state.error.is_none(), "submit failures are not shown in the error slot");
    }

    #[test]
    fn test_budget_request_uses_selected_month() {
        let draft = BudgetDraft {
            category: "Food".to_string(),
            limit_amount: "400".to_string(),
        };
        let month: Month = "2026-01".parse().unwrap();
        let request = draft.to_request(&month);
        assert_eq!(request.month, month);
        assert_eq!(request.limit_amount, 400.0);
    }
}
