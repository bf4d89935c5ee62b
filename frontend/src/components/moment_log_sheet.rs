use web_sys::{HtmlTextAreaElement, MouseEvent};
use yew::prelude::*;

use super::media_attachment_button::MediaAttachmentButton;
use crate::state::attachment::{MediaSource, PickedMedia};

/// What the save callback carries: a note, a photo, or both
#[derive(Debug, Clone, PartialEq)]
pub struct MomentLogData {
    pub note: Option<String>,
    pub media: Option<PickedMedia>,
}

#[derive(Properties, PartialEq)]
pub struct MomentLogSheetProps {
    pub is_open: bool,
    /// Media source already chosen in the source picker sheet, so the
    /// attachment control opens straight into picking
    #[prop_or_default]
    pub initial_source: Option<MediaSource>,
    /// Fires at most once per presentation
    pub on_save: Callback<MomentLogData>,
    pub on_cancel: Callback<()>,
}

/// Quick-entry sheet for a photo/note moment
#[function_component(MomentLogSheet)]
pub fn moment_log_sheet(props: &MomentLogSheetProps) -> Html {
    let note = use_state(String::new);
    let media = use_state(|| Option::<PickedMedia>::None);

    // Fresh fields every presentation
    use_effect_with(props.is_open, {
        let note = note.clone();
        let media = media.clone();
        move |is_open| {
            if *is_open {
                note.set(String::new());
                media.set(None);
            }
            || ()
        }
    });

    let on_note_change = {
        let note = note.clone();
        Callback::from(move |e: Event| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            note.set(input.value());
        })
    };

    let on_media_change = {
        let media = media.clone();
        Callback::from(move |picked: Option<PickedMedia>| {
            media.set(picked);
        })
    };

    let on_submit = {
        let note = note.clone();
        let media = media.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let trimmed = note.trim();
            on_save.emit(MomentLogData {
                note: if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                },
                media: (*media).clone(),
            });
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

    let nothing_to_save = note.trim().is_empty() && media.is_none();

    html! {
        <div class="moment-sheet-backdrop" onclick={on_backdrop_click}>
            <div class="moment-sheet" onclick={on_sheet_click}>
                <h3 class="moment-sheet-title">{"✨ New Moment"}</h3>

                <form class="moment-sheet-form" onsubmit={on_submit}>
                    <MediaAttachmentButton
                        initial_source={props.initial_source}
                        on_change={on_media_change}
                    />

                    <div class="form-group">
                        <label for="moment-note">{"What happened?"}</label>
                        <textarea
                            id="moment-note"
                            placeholder="First time fetching, met the neighbor's cat..."
                            value={(*note).clone()}
                            onchange={on_note_change}
                        />
                    </div>

                    <div class="moment-sheet-buttons">
                        <button type="submit" class="btn btn-primary" disabled={nothing_to_save}>
                            {"Save Moment"}
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
