mod components;
mod hooks;
mod services;

use yew::prelude::*;

use components::{
    AlertsPanel, BudgetForm, CategoryBreakdown, Header, StatusBanner, SummaryCards,
    TransactionForm, TransactionList,
};
use hooks::use_tracker::use_tracker;
use services::api::ApiClient;
use services::config::AppConfig;
use shared::FormKind;

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| AppConfig::default());
    let api_client = use_memo(config.api_base_url.clone(), |base_url| {
        ApiClient::with_base_url(base_url.clone())
    });
    let tracker = use_tracker(&api_client, &config);
    let state = &tracker.state;
    let actions = &tracker.actions;

    html! {
        <div class="container">
            <Header
                month={state.month.clone()}
                on_month_change={actions.on_month_change.clone()}
            />

            <StatusBanner
                loading={state.loading}
                error={state.error.clone()}
                on_retry={actions.reload.clone()}
            />

            <SummaryCards summary={state.summary.clone()} />

            <AlertsPanel alerts={state.alerts.clone()} />

            <CategoryBreakdown summary={state.summary.clone()} />

            <TransactionForm
                draft={state.draft.clone()}
                submitting={state.is_submitting(FormKind::Transaction)}
                on_change={actions.on_draft_change.clone()}
                on_submit={actions.submit_transaction.clone()}
            />

            <BudgetForm
                month={state.month.clone()}
                draft={state.budget_draft.clone()}
                submitting={state.is_submitting(FormKind::Budget)}
                on_change={actions.on_budget_change.clone()}
                on_submit={actions.submit_budget.clone()}
            />

            <TransactionList transactions={state.transactions.clone()} />

            <div class="connection-status">
                {format!("API: {}", api_client.base_url())}
            </div>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
