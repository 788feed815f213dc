use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusBannerProps {
    pub loading: bool,
    pub error: Option<String>,
    pub on_retry: Callback<()>,
}

#[function_component(StatusBanner)]
pub fn status_banner(props: &StatusBannerProps) -> Html {
    html! {
        <>
            {if props.loading {
                html! { <div class="loading">{"Loading..."}</div> }
            } else { html! {} }}

            {if let Some(error) = props.error.as_ref() {
                let on_retry = props.on_retry.clone();
                html! {
                    <div class="form-message error">
                        {format!("Error: {}", error)}
                        <button class="btn retry-btn" onclick={Callback::from(move |_| on_retry.emit(()))}>
                            {"Retry"}
                        </button>
                    </div>
                }
            } else { html! {} }}
        </>
    }
}
