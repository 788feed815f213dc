use shared::{BudgetDraft, BudgetField, Month, CATEGORIES};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BudgetFormProps {
    pub month: Month,
    pub draft: BudgetDraft,
    pub submitting: bool,
    pub on_change: Callback<(BudgetField, String)>,
    pub on_submit: Callback<()>,
}

/// Monthly spending limit for one category; alerts are computed against it
#[function_component(BudgetForm)]
pub fn budget_form(props: &BudgetFormProps) -> Html {
    let on_category_change = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit((BudgetField::Category, select.value()));
        })
    };

    let on_limit_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((BudgetField::LimitAmount, input.value()));
        })
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <section class="form-section budget-section">
            <h2>{format!("🎯 Set Budget for {}", props.month.label())}</h2>
            <form class="budget-form" {onsubmit}>
                <div class="form-group">
                    <label for="budget_category">{"Category:"}</label>
                    <select id="budget_category" name="category" onchange={on_category_change}>
                        {for CATEGORIES.iter().map(|category| html! {
                            <option value={*category} selected={props.draft.category == *category}>
                                {*category}
                            </option>
                        })}
                    </select>
                </div>
                <div class="form-group">
                    <label for="limit_amount">{"Limit:"}</label>
                    <input
                        type="number"
                        id="limit_amount"
                        name="limit_amount"
                        placeholder="0.00"
                        step="0.01"
                        value={props.draft.limit_amount.clone()}
                        oninput={on_limit_input}
                        required={true}
                    />
                </div>
                <button type="submit" class="submit-btn" disabled={props.submitting}>
                    {if props.submitting { "Saving..." } else { "Save Budget" }}
                </button>
            </form>
        </section>
    }
}
