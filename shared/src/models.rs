//! Wire types exchanged with the expense tracker API.
//!
//! Numbers the server may omit or send as `null` deserialize as zero so that
//! nothing downstream has to guard arithmetic against missing values.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Month the dashboard starts on before the user picks another one.
pub const DEFAULT_MONTH: &str = "2025-12";

/// Categories offered by the entry forms, in display order.
pub const CATEGORIES: [&str; 7] = [
    "Food",
    "Transport",
    "Rent",
    "Shopping",
    "Entertainment",
    "Utilities",
    "Other",
];

fn zero_if_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reporting period key in `YYYY-MM` form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Month {
    year: i32,
    month: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidMonth(pub String);

impl fmt::Display for InvalidMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a YYYY-MM month", self.0)
    }
}

impl std::error::Error for InvalidMonth {}

impl Month {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) && (0..=9999).contains(&year) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Human readable label, e.g. "December 2025"
    pub fn label(&self) -> String {
        match self.first_day() {
            Some(date) => date.format("%B %Y").to_string(),
            None => self.to_string(),
        }
    }
}

impl Default for Month {
    fn default() -> Self {
        Self {
            year: 2025,
            month: 12,
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = InvalidMonth;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidMonth(s.to_string());
        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        if !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        Month::new(year, month).ok_or_else(invalid)
    }
}

impl TryFrom<String> for Month {
    type Error = InvalidMonth;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Month> for String {
    fn from(month: Month) -> Self {
        month.to_string()
    }
}

/// Spend for one category within a month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpend {
    pub category: String,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub spent: f64,
}

/// Aggregated totals for a month, as returned by `GET /summary`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Summary {
    /// Echo of the requested month
    #[serde(default)]
    pub month: Option<String>,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub total_income: f64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub total_expense: f64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub savings: f64,
    /// Absent when the server leaves the breakdown out entirely
    #[serde(default)]
    pub per_category: Option<Vec<CategorySpend>>,
}

/// Body of `GET /budgets/alerts`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AlertsResponse {
    #[serde(default)]
    pub alerts: Vec<String>,
}

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Income,
    #[default]
    Expense,
    /// Anything the server stored that is neither income nor expense
    #[serde(other)]
    Other,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "INCOME",
            TransactionType::Expense => "EXPENSE",
            TransactionType::Other => "OTHER",
        }
    }

    /// Value of the `<option>` in the type selector
    pub fn parse_input(value: &str) -> Option<Self> {
        match value {
            "INCOME" => Some(TransactionType::Income),
            "EXPENSE" => Some(TransactionType::Expense),
            _ => None,
        }
    }
}

/// A stored transaction, as listed by `GET /transactions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default)]
    pub id: Option<i64>,
    pub tx_date: String,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub amount: f64,
    pub tx_type: TransactionType,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// Body of `POST /transactions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
    pub tx_date: String,
    /// Non-finite values serialize as JSON `null`
    pub amount: f64,
    pub tx_type: TransactionType,
    pub category: String,
    pub note: String,
}

/// Body of `POST /budgets`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetBudgetRequest {
    pub month: Month,
    pub category: String,
    pub limit_amount: f64,
}

/// Parse a form amount the way the entry form always has: decimal text, or
/// `NaN` when the text is not a number.
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}
