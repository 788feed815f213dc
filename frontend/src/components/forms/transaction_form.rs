use shared::{DraftField, TransactionDraft, TransactionType, CATEGORIES};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TransactionFormProps {
    pub draft: TransactionDraft,
    pub submitting: bool,
    pub on_change: Callback<(DraftField, String)>,
    pub on_submit: Callback<()>,
}

fn input_handler(
    on_change: &Callback<(DraftField, String)>,
    field: DraftField,
) -> Callback<InputEvent> {
    let on_change = on_change.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_change.emit((field, input.value()));
    })
}

fn select_handler(
    on_change: &Callback<(DraftField, String)>,
    field: DraftField,
) -> Callback<Event> {
    let on_change = on_change.clone();
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        on_change.emit((field, select.value()));
    })
}

#[function_component(TransactionForm)]
pub fn transaction_form(props: &TransactionFormProps) -> Html {
    let draft = &props.draft;
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <section class="form-section">
            <h2>{"➕ Add Transaction"}</h2>
            <form class="transaction-form" {onsubmit}>
                <div class="form-group">
                    <label for="tx_date">{"Date:"}</label>
                    <input
                        type="date"
                        id="tx_date"
                        name="tx_date"
                        value={draft.tx_date.clone()}
                        oninput={input_handler(&props.on_change, DraftField::TxDate)}
                        required={true}
                    />
                </div>
                <div class="form-group">
                    <label for="amount">{"Amount:"}</label>
                    <input
                        type="number"
                        id="amount"
                        name="amount"
                        placeholder="0.00"
                        step="0.01"
                        value={draft.amount.clone()}
                        oninput={input_handler(&props.on_change, DraftField::Amount)}
                        required={true}
                    />
                </div>
                <div class="form-group">
                    <label for="tx_type">{"Type:"}</label>
                    <select
                        id="tx_type"
                        name="tx_type"
                        onchange={select_handler(&props.on_change, DraftField::TxType)}
                    >
                        <option value="INCOME" selected={draft.tx_type == TransactionType::Income}>
                            {"Income"}
                        </option>
                        <option value="EXPENSE" selected={draft.tx_type == TransactionType::Expense}>
                            {"Expense"}
                        </option>
                    </select>
                </div>
                <div class="form-group">
                    <label for="category">{"Category:"}</label>
                    <select
                        id="category"
                        name="category"
                        onchange={select_handler(&props.on_change, DraftField::Category)}
                    >
                        {for CATEGORIES.iter().map(|category| html! {
                            <option value={*category} selected={draft.category == *category}>
                                {*category}
                            </option>
                        })}
                    </select>
                </div>
                <div class="form-group">
                    <label for="note">{"Note:"}</label>
                    <input
                        id="note"
                        name="note"
                        placeholder="Optional note"
                        value={draft.note.clone()}
                        oninput={input_handler(&props.on_change, DraftField::Note)}
                    />
                </div>
                <button type="submit" class="submit-btn" disabled={props.submitting}>
                    {if props.submitting { "Saving..." } else { "Save Transaction" }}
                </button>
            </form>
        </section>
    }
}
