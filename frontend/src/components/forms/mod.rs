pub mod budget_form;
pub mod transaction_form;

pub use budget_form::BudgetForm;
pub use transaction_form::TransactionForm;
