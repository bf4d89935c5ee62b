use web_sys::{MouseEvent, Url};
use yew::prelude::*;

use super::choice_sheet::{ChoiceOption, ChoiceSheet};
use super::media_picker::{MediaPicker, PickOutcome};
use crate::services::logging::Logger;
use crate::state::attachment::{AttachmentEvent, AttachmentState, MediaSource, PickedMedia};

#[derive(Properties, PartialEq)]
pub struct MediaAttachmentButtonProps {
    /// Source to jump straight into picking from on first mount, skipping
    /// the add affordance and source dialog (used by the moment composer
    /// after the source picker sheet already asked)
    #[prop_or_default]
    pub initial_source: Option<MediaSource>,
    /// Notifies the owner whenever the selection changes, so the
    /// surrounding layout can animate and the save path can read the media
    pub on_change: Callback<Option<PickedMedia>>,
}

/// Stateful wrapper around `MediaPicker`: an add affordance, a source
/// dialog, a thumbnail preview, and removal, all driven by the pure
/// attachment state machine.
#[function_component(MediaAttachmentButton)]
pub fn media_attachment_button(props: &MediaAttachmentButtonProps) -> Html {
    let state = use_state(|| match props.initial_source {
        Some(source) => AttachmentState::Picking(source),
        None => AttachmentState::Empty,
    });

    // Single dispatch point: every user tap and picker callback funnels
    // through the machine, and the owner hears about selection changes.
    let dispatch = {
        let state = state.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |event: AttachmentEvent| {
            let before = (*state).clone();
            let after = before.clone().apply(event);

            if before.selected() != after.selected() {
                if let Some(media) = before.selected() {
                    // Release the preview URL the browser is holding
                    let _ = Url::revoke_object_url(&media.object_url);
                }
                on_change.emit(after.selected().cloned());
            }

            state.set(after);
        })
    };

    let on_add_click = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch.emit(AttachmentEvent::AddRequested);
        })
    };

    let on_source_select = {
        let dispatch = dispatch.clone();
        Callback::from(move |index: usize| {
            let source = match index {
                0 => MediaSource::Camera,
                1 => MediaSource::Library,
                _ => MediaSource::Files,
            };
            dispatch.emit(AttachmentEvent::SourceChosen(source));
        })
    };

    let on_source_cancel = {
        let dispatch = dispatch.clone();
        Callback::from(move |_| {
            dispatch.emit(AttachmentEvent::SourceCancelled);
        })
    };

    let on_pick_outcome = {
        let dispatch = dispatch.clone();
        Callback::from(move |outcome: PickOutcome| match outcome {
            PickOutcome::Picked(media) => {
                Logger::debug("media-attachment", &format!("picked {}", media.file_name));
                dispatch.emit(AttachmentEvent::Picked(media));
            }
            PickOutcome::Cancelled => dispatch.emit(AttachmentEvent::PickCancelled),
        })
    };

    let on_remove_click = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch.emit(AttachmentEvent::RemoveRequested);
        })
    };

    match &*state {
        AttachmentState::Empty => html! {
            <button type="button" class="media-attachment-add" onclick={on_add_click}>
                {"📷 Add Photo"}
            </button>
        },
        AttachmentState::SourceSelecting => {
            let options = vec![
                ChoiceOption::new("📸 Take Photo"),
                ChoiceOption::new("🖼️ Photo Library"),
                ChoiceOption::new("📁 Browse Files"),
            ];
            html! {
                <ChoiceSheet
                    is_open={true}
                    title={"Add a photo from…".to_string()}
                    {options}
                    on_select={on_source_select}
                    on_cancel={on_source_cancel}
                />
            }
        }
        AttachmentState::Picking(source) => html! {
            <MediaPicker source={*source} on_outcome={on_pick_outcome} />
        },
        AttachmentState::Selected(media) => html! {
            <div class="media-attachment-preview">
                <img
                    class="media-attachment-thumbnail"
                    src={media.object_url.clone()}
                    alt={media.file_name.clone()}
                />
                <button
                    type="button"
                    class="media-attachment-remove"
                    title="Remove photo"
                    onclick={on_remove_click}
                >
                    {"✕"}
                </button>
            </div>
        },
    }
}
