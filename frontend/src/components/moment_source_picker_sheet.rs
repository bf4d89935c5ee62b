use yew::prelude::*;

use super::choice_sheet::{ChoiceOption, ChoiceSheet};
use crate::state::attachment::MediaSource;

#[derive(Properties, PartialEq)]
pub struct MomentSourcePickerSheetProps {
    pub is_open: bool,
    /// Fires with the media source the moment photo should come from
    pub on_select: Callback<MediaSource>,
    pub on_cancel: Callback<()>,
}

/// Quick-entry sheet asking where a moment's photo should come from before
/// the moment composer opens
#[function_component(MomentSourcePickerSheet)]
pub fn moment_source_picker_sheet(props: &MomentSourcePickerSheetProps) -> Html {
    let options = vec![
        ChoiceOption::with_hint("📸 Take a Photo", "Catch them in the act"),
        ChoiceOption::with_hint("🖼️ Photo Library", "Pick one you already took"),
    ];

    let on_select = {
        let on_select = props.on_select.clone();
        Callback::from(move |index: usize| {
            let source = match index {
                0 => MediaSource::Camera,
                _ => MediaSource::Library,
            };
            on_select.emit(source);
        })
    };

    html! {
        <ChoiceSheet
            is_open={props.is_open}
            title={"New Moment".to_string()}
            {options}
            {on_select}
            on_cancel={props.on_cancel.clone()}
        />
    }
}
