use std::rc::Rc;

use shared::{AchievementLevel, DashboardAction, DashboardState, FixtureError};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::{
    api::{load_children, load_goals, ApiClient},
    date_utils,
    logging::Logger,
};

/// Yew reducer wrapper around the shared dashboard state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardStore(pub DashboardState);

impl Reducible for DashboardStore {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        next.apply(action);
        Rc::new(Self(next))
    }
}

pub struct UseDashboardResult {
    pub state: DashboardState,
    pub actions: UseDashboardActions,
}

#[derive(Clone, PartialEq)]
pub struct UseDashboardActions {
    pub on_search_input: Callback<String>,
    pub on_select_child: Callback<String>,
    pub on_clear_child: Callback<()>,
    pub on_add_new_child: Callback<()>,
    pub on_age_input: Callback<String>,
    pub on_level_change: Callback<(String, AchievementLevel)>,
}

fn settle(dispatcher: &UseReducerDispatcher<DashboardStore>, result: Result<DashboardAction, FixtureError>) {
    match result {
        Ok(action) => {
            match &action {
                DashboardAction::ChildrenLoaded { children, source, .. } => Logger::info_with_component(
                    "data-loader",
                    &format!("Loaded {} children ({:?})", children.len(), source),
                ),
                DashboardAction::GoalsLoaded { goals, source } => Logger::info_with_component(
                    "data-loader",
                    &format!("Loaded {} goals ({:?})", goals.len(), source),
                ),
                _ => {}
            }
            dispatcher.dispatch(action);
        }
        Err(e) => {
            Logger::error_with_component("data-loader", &e.to_string());
            dispatcher.dispatch(DashboardAction::LoadFailed(e.to_string()));
        }
    }
}

#[hook]
pub fn use_dashboard(api_client: &ApiClient) -> UseDashboardResult {
    let store = use_reducer(DashboardStore::default);
    let dispatcher = store.dispatcher();

    // Single-shot load on mount; both requests run concurrently and each
    // result is applied as soon as it settles
    {
        let api_client = api_client.clone();
        let dispatcher = dispatcher.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                let children = async {
                    settle(&dispatcher, load_children(&api_client).await);
                };
                let goals = async {
                    settle(&dispatcher, load_goals(&api_client).await);
                };
                futures::join!(children, goals);
                Logger::info_with_component("data-loader", "Initial load settled");
            });

            || ()
        });
    }

    let on_search_input = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |text: String| dispatcher.dispatch(DashboardAction::SearchChanged(text)))
    };

    use_effect_with(store.0.search_error.clone(), |error| {
        if let Some(e) = error {
            Logger::warn_with_component("child-search", &e.to_string());
        }
        || ()
    });

    let on_select_child = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |child_id: String| {
            dispatcher.dispatch(DashboardAction::ChildSelected {
                child_id,
                today: date_utils::today(),
            });
        })
    };

    let on_clear_child = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: ()| dispatcher.dispatch(DashboardAction::ChildCleared))
    };

    let on_add_new_child = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: ()| {
            Logger::debug_with_component("child-search", "Add new child requested; clearing form");
            dispatcher.dispatch(DashboardAction::AddNewChild);
        })
    };

    let on_age_input = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |text: String| dispatcher.dispatch(DashboardAction::ManualAgeChanged(text)))
    };

    let on_level_change = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |(goal_id, level): (String, AchievementLevel)| {
            dispatcher.dispatch(DashboardAction::LevelSet {
                goal_id,
                level,
                at: date_utils::now(),
            });
        })
    };

    let actions = UseDashboardActions {
        on_search_input,
        on_select_child,
        on_clear_child,
        on_add_new_child,
        on_age_input,
        on_level_change,
    };

    UseDashboardResult {
        state: store.0.clone(),
        actions,
    }
}
