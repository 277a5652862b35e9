use shared::{format_long_date, SearchView};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ChildSearchProps {
    pub search_text: String,
    pub view: SearchView,
    pub has_selection: bool,

    pub on_input: Callback<String>,
    pub on_select: Callback<String>,
    pub on_clear: Callback<()>,
    pub on_add_new: Callback<()>,
}

#[function_component(ChildSearch)]
pub fn child_search(props: &ChildSearchProps) -> Html {
    let on_input = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };

    let on_clear = {
        let on_clear = props.on_clear.clone();
        Callback::from(move |_: MouseEvent| on_clear.emit(()))
    };

    let on_add_new = {
        let on_add_new = props.on_add_new.clone();
        Callback::from(move |_: MouseEvent| on_add_new.emit(()))
    };

    html! {
        <div class="child-search">
            <label for="child-search-input">{"Child"}</label>
            <div class="child-search-field">
                <input
                    id="child-search-input"
                    type="text"
                    autocomplete="off"
                    placeholder="Search by name"
                    value={props.search_text.clone()}
                    oninput={on_input}
                />
                if props.has_selection {
                    <button type="button" class="child-search-clear" aria-label="Clear selection" onclick={on_clear}>
                        {"×"}
                    </button>
                }
            </div>

            {match &props.view {
                SearchView::Suggestions(children) => html! {
                    <ul class="child-search-suggestions">
                        {for children.iter().map(|child| {
                            let on_click = {
                                let on_select = props.on_select.clone();
                                let child_id = child.id.clone();
                                Callback::from(move |_: MouseEvent| on_select.emit(child_id.clone()))
                            };
                            html! {
                                <li key={child.id.clone()} class="child-search-suggestion" onclick={on_click}>
                                    <span class="child-name">{child.full_name()}</span>
                                    <span class="child-dob">{format_long_date(child.date_of_birth)}</span>
                                </li>
                            }
                        })}
                    </ul>
                },
                SearchView::AddNew => html! {
                    <div class="child-search-empty">
                        <span>{format!("No child named \"{}\"", props.search_text)}</span>
                        <button type="button" class="add-child-button" onclick={on_add_new}>
                            {"Add new child"}
                        </button>
                    </div>
                },
                SearchView::Hidden => html! {},
            }}
        </div>
    }
}
