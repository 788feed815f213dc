use shared::view::summary_cards;
use shared::Summary;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SummaryCardsProps {
    pub summary: Option<Summary>,
}

#[function_component(SummaryCards)]
pub fn summary_cards_section(props: &SummaryCardsProps) -> Html {
    html! {
        <section class="summary-cards">
            {for summary_cards(props.summary.as_ref()).into_iter().map(|card| html! {
                <div class={card.kind.css_class()}>
                    <h3>{card.title}</h3>
                    <p class="amount">{card.amount}</p>
                </div>
            })}
        </section>
    }
}
