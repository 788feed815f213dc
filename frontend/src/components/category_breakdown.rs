use shared::view::category_rows;
use shared::Summary;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CategoryBreakdownProps {
    pub summary: Option<Summary>,
}

#[function_component(CategoryBreakdown)]
pub fn category_breakdown(props: &CategoryBreakdownProps) -> Html {
    html! {
        <section class="category-breakdown">
            <h2>{"📊 Expense by Category"}</h2>
            {if let Some(rows) = category_rows(props.summary.as_ref()) {
                html! {
                    <div class="category-list">
                        {for rows.into_iter().map(|row| html! {
                            <div class="category-item">
                                <span class="cat-name">{row.category}</span>
                                <span class="cat-amount">{row.spent}</span>
                            </div>
                        })}
                    </div>
                }
            } else { html! {} }}
        </section>
    }
}
