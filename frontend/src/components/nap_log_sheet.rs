use chrono::NaiveDateTime;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, MouseEvent};
use yew::prelude::*;

use crate::services::DateUtils;
use crate::state::nap_form::NapFormState;

/// What the save callback carries: the nap's bounds and an optional note
#[derive(Debug, Clone, PartialEq)]
pub struct NapLogData {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub note: Option<String>,
}

#[derive(Properties, PartialEq)]
pub struct NapLogSheetProps {
    pub is_open: bool,
    /// Pre-filled nap length: start defaults to end minus this many minutes
    #[prop_or(25)]
    pub default_duration_minutes: i64,
    /// Fires at most once per presentation; dismissal is the caller's job
    pub on_save: Callback<NapLogData>,
    pub on_cancel: Callback<()>,
}

/// Modal sheet for logging a nap: start time, end time, optional note.
/// Duration is derived, never entered, and the paired inputs keep
/// start <= end <= the time the sheet was opened.
#[function_component(NapLogSheet)]
pub fn nap_log_sheet(props: &NapLogSheetProps) -> Html {
    let form = use_state(|| Option::<NapFormState>::None);

    // Fresh state every time the sheet is presented
    use_effect_with(props.is_open, {
        let form = form.clone();
        let default_duration = props.default_duration_minutes;
        move |is_open| {
            if *is_open {
                form.set(Some(NapFormState::new(
                    DateUtils::now_naive_local(),
                    default_duration,
                )));
            }
            || ()
        }
    });

    let on_start_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let (Some(state), Some(value)) =
                ((*form).clone(), DateUtils::parse_datetime_local(&input.value()))
            {
                let mut state = state;
                state.set_start(value);
                form.set(Some(state));
            }
        })
    };

    let on_end_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let (Some(state), Some(value)) =
                ((*form).clone(), DateUtils::parse_datetime_local(&input.value()))
            {
                let mut state = state;
                state.set_end(value);
                form.set(Some(state));
            }
        })
    };

    let on_note_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            if let Some(mut state) = (*form).clone() {
                state.note = input.value();
                form.set(Some(state));
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(state) = (*form).clone() {
                on_save.emit(NapLogData {
                    start: state.start,
                    end: state.end,
                    note: state.note_or_none(),
                });
            }
        })
    };

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

    let Some(state) = (*form).clone() else {
        return html! {};
    };

    let max_value = DateUtils::format_datetime_local(&state.created_at());

    html! {
        <div class="nap-sheet-backdrop" onclick={on_backdrop_click}>
            <div class="nap-sheet" onclick={on_sheet_click}>
                <h3 class="nap-sheet-title">{"😴 Log a Nap"}</h3>

                <form class="nap-sheet-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="nap-start">{"Fell asleep"}</label>
                        <input
                            id="nap-start"
                            type="datetime-local"
                            value={DateUtils::format_datetime_local(&state.start)}
                            max={max_value.clone()}
                            onchange={on_start_change}
                        />
                    </div>

                    <div class="form-group">
                        <label for="nap-end">{"Woke up"}</label>
                        <input
                            id="nap-end"
                            type="datetime-local"
                            value={DateUtils::format_datetime_local(&state.end)}
                            max={max_value}
                            onchange={on_end_change}
                        />
                    </div>

                    <div class="nap-sheet-duration">
                        {format!("Duration: {}", DateUtils::format_duration_minutes(state.duration_minutes()))}
                    </div>

                    <div class="form-group">
                        <label for="nap-note">{"Note (optional)"}</label>
                        <textarea
                            id="nap-note"
                            placeholder="Slept in the crate, woke up hungry..."
                            value={state.note.clone()}
                            onchange={on_note_change}
                        />
                    </div>

                    <div class="nap-sheet-buttons">
                        <button type="submit" class="btn btn-primary">
                            {"Save Nap"}
                        </button>
                        <button type="button" class="btn btn-secondary" onclick={on_cancel_click}>
                            {"Cancel"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
