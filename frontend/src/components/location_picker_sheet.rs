use shared::PottyLocation;
use yew::prelude::*;

use super::choice_sheet::{ChoiceOption, ChoiceSheet};

#[derive(Properties, PartialEq)]
pub struct LocationPickerSheetProps {
    pub is_open: bool,
    pub on_select: Callback<PottyLocation>,
    pub on_cancel: Callback<()>,
}

/// Quick-entry sheet asking where a potty break happened
#[function_component(LocationPickerSheet)]
pub fn location_picker_sheet(props: &LocationPickerSheetProps) -> Html {
    let options = vec![
        ChoiceOption::with_hint("🌳 Outside", "Where we want them all to be"),
        ChoiceOption::with_hint("🏠 Inside", "Accidents count too"),
    ];

    let on_select = {
        let on_select = props.on_select.clone();
        Callback::from(move |index: usize| {
            let location = match index {
                0 => PottyLocation::Outside,
                _ => PottyLocation::Inside,
            };
            on_select.emit(location);
        })
    };

    html! {
        <ChoiceSheet
            is_open={props.is_open}
            title={"Where did it happen?".to_string()}
            {options}
            {on_select}
            on_cancel={props.on_cancel.clone()}
        />
    }
}
