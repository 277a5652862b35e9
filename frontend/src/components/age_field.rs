use chrono::NaiveDate;
use shared::{format_long_date, AgeField};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AgeInputProps {
    pub age: AgeField,
    /// Present while a child is selected
    pub date_of_birth: Option<NaiveDate>,
    pub on_input: Callback<String>,
}

/// Age in years. Computed and read-only for a selected child, free text otherwise.
#[function_component(AgeInput)]
pub fn age_input(props: &AgeInputProps) -> Html {
    let on_input = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };

    html! {
        <div class="age-field">
            <label for="age-input">{"Age (years)"}</label>
            <input
                id="age-input"
                type="text"
                value={props.age.display()}
                disabled={props.age.is_locked()}
                oninput={on_input}
            />
            if let Some(dob) = props.date_of_birth {
                <span class="age-field-dob">{format!("Born {}", format_long_date(dob))}</span>
            }
        </div>
    }
}
