use web_sys::MouseEvent;
use yew::prelude::*;

/// One option in a choice sheet
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceOption {
    pub label: String,
    /// Secondary line under the label, when the option needs explaining
    pub hint: Option<String>,
}

impl ChoiceOption {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            hint: None,
        }
    }

    pub fn with_hint(label: &str, hint: &str) -> Self {
        Self {
            label: label.to_string(),
            hint: Some(hint.to_string()),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ChoiceSheetProps {
    pub is_open: bool,
    pub title: String,
    /// The fixed option set; a choice sheet carries 2-3 mutually exclusive options
    pub options: Vec<ChoiceOption>,
    /// Fires exactly once with the chosen option's index; terminal for the sheet
    pub on_select: Callback<usize>,
    /// Fires with no payload; selection cannot fail, so these are the only two outcomes
    pub on_cancel: Callback<()>,
}

/// Modal sheet presenting a fixed small set of mutually exclusive options
/// plus cancel. Dismissal is the owning screen's responsibility; this
/// component only reports which way the user went.
#[function_component(ChoiceSheet)]
pub fn choice_sheet(props: &ChoiceSheetProps) -> Html {
    let on_backdrop_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_cancel.emit(());
        })
    };

    let on_sheet_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_cancel_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| {
            on_cancel.emit(());
        })
    };

    if !props.is_open {
        return html! {};
    }

    html! {
        <div class="choice-sheet-backdrop" onclick={on_backdrop_click}>
            <div class="choice-sheet" onclick={on_sheet_click}>
                <h3 class="choice-sheet-title">{&props.title}</h3>

                <div class="choice-sheet-options">
                    {for props.options.iter().enumerate().map(|(index, option)| {
                        let on_select = props.on_select.clone();
                        let onclick = Callback::from(move |_: MouseEvent| {
                            on_select.emit(index);
                        });

                        html! {
                            <button type="button" class="choice-sheet-option" {onclick}>
                                <span class="choice-option-label">{&option.label}</span>
                                {if let Some(hint) = &option.hint {
                                    html! { <small class="choice-option-hint">{hint}</small> }
                                } else { html! {} }}
                            </button>
                        }
                    })}
                </div>

                <button type="button" class="btn btn-secondary choice-sheet-cancel" onclick={on_cancel_click}>
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}
