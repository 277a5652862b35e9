use shared::LoadStatus;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::{AgeInput, ChildSearch, GoalAccordion};
use hooks::use_dashboard::use_dashboard;
use services::api::ApiClient;

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::default());
    let dashboard = use_dashboard(&api_client);
    let state = &dashboard.state;
    let actions = &dashboard.actions;

    let body = match state.status() {
        LoadStatus::Loading => html! {
            <div class="dashboard-loading">
                <div class="spinner"></div>
                <p>{"Loading assessment data..."}</p>
            </div>
        },
        LoadStatus::Failed(message) => html! {
            <div class="dashboard-error" role="alert">
                <h2>{"Something went wrong"}</h2>
                <p>{"Assessment data could not be loaded. Please check your endpoints."}</p>
                <p class="dashboard-error-detail">{message}</p>
            </div>
        },
        LoadStatus::Ready => html! {
            <>
                if state.using_fallback() {
                    <div class="form-message info">
                        {"Showing bundled reference data; the assessment service is unavailable."}
                    </div>
                }
                <section class="dashboard-card">
                    <h2>{"Child"}</h2>
                    <form class="child-form" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                        <ChildSearch
                            search_text={state.search_text.clone()}
                            view={state.search_view().clone()}
                            has_selection={state.selection.is_some()}
                            on_input={actions.on_search_input.clone()}
                            on_select={actions.on_select_child.clone()}
                            on_clear={actions.on_clear_child.clone()}
                            on_add_new={actions.on_add_new_child.clone()}
                        />
                        <AgeInput
                            age={state.age.clone()}
                            date_of_birth={state.selection.as_ref().map(|child| child.date_of_birth)}
                            on_input={actions.on_age_input.clone()}
                        />
                    </form>
                </section>
                <section class="dashboard-card">
                    <h2>{"Developmental Goals"}</h2>
                    <GoalAccordion
                        goals={state.goals.clone()}
                        levels={state.levels.clone()}
                        on_level_change={actions.on_level_change.clone()}
                    />
                </section>
            </>
        },
    };

    html! {
        <div class="dashboard">
            <header class="dashboard-header">
                <h1>{"Developmental Assessment"}</h1>
            </header>
            {body}
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
