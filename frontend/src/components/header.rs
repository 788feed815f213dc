use shared::Month;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub month: Month,
    /// Raw value of the month picker
    pub on_month_change: Callback<String>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_change = {
        let on_month_change = props.on_month_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_month_change.emit(input.value());
        })
    };

    html! {
        <>
            <header class="header">
                <h1>{"💰 Smart Expense & Budget Tracker"}</h1>
                <span class="header-month">{props.month.label()}</span>
            </header>

            <section class="month-selector">
                <label>
                    {"Month: "}
                    <input
                        type="month"
                        value={props.month.to_string()}
                        onchange={on_change}
                    />
                </label>
            </section>
        </>
    }
}
