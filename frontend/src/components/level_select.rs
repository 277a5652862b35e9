use shared::AchievementLevel;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct LevelSelectProps {
    pub goal_id: String,
    pub value: Option<AchievementLevel>,
    pub on_change: Callback<(String, AchievementLevel)>,
}

/// `<option>` value for a level; the placeholder has the empty value
fn option_value(level: Option<AchievementLevel>) -> &'static str {
    level.map(|level| level.as_str()).unwrap_or("")
}

#[function_component(LevelSelect)]
pub fn level_select(props: &LevelSelectProps) -> Html {
    let select_ref = use_node_ref();

    // `selected` attributes stop applying once the user has changed the
    // element, so the shown value is pushed to the DOM on every change
    {
        let select_ref = select_ref.clone();
        use_effect_with(props.value, move |value| {
            if let Some(select) = select_ref.cast::<HtmlSelectElement>() {
                select.set_value(option_value(*value));
            }
            || ()
        });
    }

    let on_change = {
        let goal_id = props.goal_id.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<AchievementLevel>() {
                Ok(level) => on_change.emit((goal_id.clone(), level)),
                Err(err) => Logger::warn_with_component("level-select", &err.to_string()),
            }
        })
    };

    html! {
        <select class="level-select" ref={select_ref} onchange={on_change}>
            <option value="" disabled={true} selected={props.value.is_none()}>{"Select level"}</option>
            {for AchievementLevel::ALL.iter().map(|level| html! {
                <option value={level.as_str()} selected={props.value == Some(*level)}>
                    {level.label()}
                </option>
            })}
        </select>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_placeholder_has_empty_value() {
        assert_eq!(option_value(None), "");
    }

    #[wasm_bindgen_test]
    fn test_option_value_parses_back_to_level() {
        for level in AchievementLevel::ALL {
            assert_eq!(option_value(Some(level)).parse::<AchievementLevel>(), Ok(level));
        }
    }
}
