//! Display values derived from [`TrackerState`](crate::TrackerState).
//!
//! Components render these verbatim; every fallback and every number format
//! the dashboard shows is decided here.

use crate::models::{Summary, Transaction, TransactionType};

pub const CURRENCY_SYMBOL: &str = "₹";

/// How many transactions the recent list shows
pub const RECENT_TRANSACTION_LIMIT: usize = 10;

pub const NO_ALERTS_MESSAGE: &str = "No alerts - you're doing great!";

pub const NO_NOTE_PLACEHOLDER: &str = "No note";

pub fn format_money(amount: f64) -> String {
    format!("{}{:.2}", CURRENCY_SYMBOL, amount)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Income,
    Expense,
    Savings,
}

impl CardKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            CardKind::Income => "card income",
            CardKind::Expense => "card expense",
            CardKind::Savings => "card savings",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCard {
    pub kind: CardKind,
    pub title: &'static str,
    pub amount: String,
}

/// Income, expense and savings cards; zero when nothing has loaded yet
pub fn summary_cards(summary: Option<&Summary>) -> [SummaryCard; 3] {
    let (income, expense, savings) = summary
        .map(|s| (s.total_income, s.total_expense, s.savings))
        .unwrap_or_default();
    [
        SummaryCard {
            kind: CardKind::Income,
            title: "💵 Total Income",
            amount: format_money(income),
        },
        SummaryCard {
            kind: CardKind::Expense,
            title: "💸 Total Expense",
            amount: format_money(expense),
        },
        SummaryCard {
            kind: CardKind::Savings,
            title: "🎯 Savings",
            amount: format_money(savings),
        },
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub enum AlertsView {
    /// Nothing to warn about
    AllClear(&'static str),
    Items(Vec<String>),
}

pub fn alerts_view(alerts: &[String]) -> AlertsView {
    if alerts.is_empty() {
        AlertsView::AllClear(NO_ALERTS_MESSAGE)
    } else {
        AlertsView::Items(alerts.to_vec())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    pub category: String,
    pub spent: String,
}

/// `None` when the summary carries no breakdown at all
pub fn category_rows(summary: Option<&Summary>) -> Option<Vec<CategoryRow>> {
    let per_category = summary?.per_category.as_ref()?;
    Some(
        per_category
            .iter()
            .map(|entry| CategoryRow {
                category: entry.category.clone(),
                spent: format_money(entry.spent),
            })
            .collect(),
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    pub category: String,
    pub note: String,
    pub amount: String,
    pub amount_class: &'static str,
}

impl From<&Transaction> for TransactionRow {
    fn from(tx: &Transaction) -> Self {
        let note = match tx.note.as_deref() {
            Some(note) if !note.is_empty() => note.to_string(),
            _ => NO_NOTE_PLACEHOLDER.to_string(),
        };
        let (sign, amount_class) = match tx.tx_type {
            TransactionType::Income => ("+", "amount income"),
            TransactionType::Expense => ("-", "amount expense"),
            TransactionType::Other => ("-", "amount other"),
        };
        Self {
            category: tx.category.clone(),
            note,
            amount: format!("{}{}", sign, format_money(tx.amount)),
            amount_class,
        }
    }
}

/// The first [`RECENT_TRANSACTION_LIMIT`] transactions, in API order
pub fn recent_transactions(transactions: &[Transaction]) -> Vec<TransactionRow> {
    transactions
        .iter()
        .take(RECENT_TRANSACTION_LIMIT)
        .map(TransactionRow::from)
        .collect()
}
