use std::rc::Rc;

use shared::workflow::{load_month, submit_budget, submit_transaction};
use shared::{
    BudgetDraft, BudgetField, DraftField, Month, RequestTokens, TrackerAction, TrackerState,
    TransactionDraft,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::config::AppConfig;
use crate::services::date_utils::today_iso;
use crate::services::logging::Logger;

/// Yew wrapper around the tracker reducer
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerStore {
    pub state: TrackerState,
}

impl Reducible for TrackerStore {
    type Action = TrackerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.state.clone();
        state.apply(action);
        Rc::new(TrackerStore { state })
    }
}

pub struct UseTrackerResult {
    pub state: TrackerState,
    pub actions: UseTrackerActions,
}

#[derive(Clone)]
pub struct UseTrackerActions {
    pub reload: Callback<()>,
    /// Raw value of the month picker
    pub on_month_change: Callback<String>,
    pub on_draft_change: Callback<(DraftField, String)>,
    pub on_budget_change: Callback<(BudgetField, String)>,
    pub submit_transaction: Callback<()>,
    pub submit_budget: Callback<()>,
}

#[hook]
pub fn use_tracker(api_client: &ApiClient, config: &AppConfig) -> UseTrackerResult {
    let store = {
        let initial_month = config.initial_month.clone();
        use_reducer(move || TrackerStore {
            state: TrackerState::new(initial_month, today_iso()),
        })
    };
    let tokens = use_mut_ref(RequestTokens::default);
    // Month on screen, readable from async tasks that outlive this render
    let selected_month = use_mut_ref(|| store.state.month.clone());
    *selected_month.borrow_mut() = store.state.month.clone();

    // Every call starts a fresh sequence; results of older ones are dropped
    // by the reducer once this token is the latest.
    let load = {
        let api_client = api_client.clone();
        let dispatcher = store.dispatcher();
        let tokens = tokens.clone();

        use_callback((), move |month: Month, _| {
            let api_client = api_client.clone();
            let dispatcher = dispatcher.clone();
            let token = tokens.borrow_mut().next();
            Logger::debug_with_component(
                "tracker",
                &format!("Loading {} (request {})", month, token.value()),
            );

            spawn_local(async move {
                let result =
                    load_month(&api_client, &month, token, |action| dispatcher.dispatch(action))
                        .await;
                if let Err(e) = result {
                    Logger::error_with_component(
                        "tracker",
                        &format!("Error loading data for {}: {}", month, e),
                    );
                }
            });
        })
    };

    // Load on mount and whenever the selected month changes
    {
        let load = load.clone();
        use_effect_with(store.state.month.clone(), move |month| {
            load.emit(month.clone());
            || ()
        });
    }

    // Reloads whatever month is selected when it fires
    let reload = {
        let load = load.clone();
        let selected_month = selected_month.clone();
        use_callback((), move |_: (), _| {
            let month = selected_month.borrow().clone();
            load.emit(month);
        })
    };

    let on_month_change = {
        let dispatcher = store.dispatcher();
        let selected_month = selected_month.clone();
        use_callback((), move |value: String, _| match value.parse::<Month>() {
            Ok(month) => {
                *selected_month.borrow_mut() = month.clone();
                dispatcher.dispatch(TrackerAction::MonthChanged(month));
            }
            Err(e) => Logger::warn_with_component("month-selector", &e.to_string()),
        })
    };

    let on_draft_change = {
        let dispatcher = store.dispatcher();
        use_callback((), move |(field, value): (DraftField, String), _| {
            dispatcher.dispatch(TrackerAction::DraftEdited(field, value));
        })
    };

    let on_budget_change = {
        let dispatcher = store.dispatcher();
        use_callback((), move |(field, value): (BudgetField, String), _| {
            dispatcher.dispatch(TrackerAction::BudgetDraftEdited(field, value));
        })
    };

    let submit_transaction_cb = {
        let api_client = api_client.clone();
        let dispatcher = store.dispatcher();
        let reload = reload.clone();

        use_callback(store.state.draft.clone(), move |_: (), draft: &TransactionDraft| {
            let api_client = api_client.clone();
            let dispatcher = dispatcher.clone();
            let reload = reload.clone();
            let draft = draft.clone();

            spawn_local(async move {
                let result = submit_transaction(&api_client, &draft, today_iso, |action| {
                    dispatcher.dispatch(action)
                })
                .await;
                match result {
                    Ok(()) => {
                        Logger::info_with_component("transaction-form", "Transaction saved");
                        reload.emit(());
                    }
                    Err(e) => Logger::error_with_component(
                        "transaction-form",
                        &format!("Error adding transaction: {}", e),
                    ),
                }
            });
        })
    };

    let submit_budget_cb = {
        let api_client = api_client.clone();
        let dispatcher = store.dispatcher();
        let reload = reload.clone();

        use_callback(
            (store.state.budget_draft.clone(), store.state.month.clone()),
            move |_: (), (draft, month): &(BudgetDraft, Month)| {
                let api_client = api_client.clone();
                let dispatcher = dispatcher.clone();
                let reload = reload.clone();
                let draft = draft.clone();
                let month = month.clone();

                spawn_local(async move {
                    let result = submit_budget(&api_client, &month, &draft, |action| {
                        dispatcher.dispatch(action)
                    })
                    .await;
                    match result {
                        Ok(()) => {
                            Logger::info_with_component(
                                "budget-form",
                                &format!("Budget for {} saved", draft.category),
                            );
                            reload.emit(());
                        }
                        Err(e) => Logger::error_with_component(
                            "budget-form",
                            &format!("Error setting budget: {}", e),
                        ),
                    }
                });
            },
        )
    };

    let actions = UseTrackerActions {
        reload,
        on_month_change,
        on_draft_change,
        on_budget_change,
        submit_transaction: submit_transaction_cb,
        submit_budget: submit_budget_cb,
    };

    UseTrackerResult {
        state: store.state.clone(),
        actions,
    }
}
