pub mod alerts_panel;
pub mod category_breakdown;
pub mod forms;
pub mod header;
pub mod status_banner;
pub mod summary_cards;
pub mod transactions;

pub use alerts_panel::AlertsPanel;
pub use category_breakdown::CategoryBreakdown;
pub use forms::{BudgetForm, TransactionForm};
pub use header::Header;
pub use status_banner::StatusBanner;
pub use summary_cards::SummaryCards;
pub use transactions::TransactionList;
