use shared::view::recent_transactions;
use shared::Transaction;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TransactionListProps {
    pub transactions: Vec<Transaction>,
}

#[function_component(TransactionList)]
pub fn transaction_list(props: &TransactionListProps) -> Html {
    html! {
        <section class="transactions-section">
            <h2>{"📝 Recent Transactions"}</h2>
            <div class="transactions-list">
                {for recent_transactions(&props.transactions).into_iter().map(|row| html! {
                    <div class="transaction-item">
                        <div>
                            <strong>{row.category}</strong>
                            <p>{row.note}</p>
                        </div>
                        <div class={row.amount_class}>{row.amount}</div>
                    </div>
                })}
            </div>
        </section>
    }
}
