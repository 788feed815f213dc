use shared::view::{alerts_view, AlertsView};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AlertsPanelProps {
    pub alerts: Vec<String>,
}

#[function_component(AlertsPanel)]
pub fn alerts_panel(props: &AlertsPanelProps) -> Html {
    html! {
        <section class="alerts-section">
            <h2>{"⚠️ Budget Alerts"}</h2>
            {match alerts_view(&props.alerts) {
                AlertsView::AllClear(message) => html! {
                    <p class="no-alerts">{message}</p>
                },
                AlertsView::Items(alerts) => html! {
                    <ul class="alerts-list">
                        {for alerts.into_iter().map(|alert| html! {
                            <li class="alert-item">{alert}</li>
                        })}
                    </ul>
                },
            }}
        </section>
    }
}
