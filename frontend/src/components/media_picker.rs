use std::cell::Cell;
use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use shared::MediaAttachment;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, MouseEvent, Url};
use yew::prelude::*;

use crate::services::logging::Logger;
use crate::services::DateUtils;
use crate::state::attachment::{MediaSource, PickedMedia};

/// How long the library byte load may run before the picker gives up and
/// reports an image-only result
pub const BYTE_LOAD_TIMEOUT_MS: u32 = 10_000;

/// The single outcome of one picker presentation. Exactly one of these is
/// emitted per presentation.
#[derive(Debug, Clone, PartialEq)]
pub enum PickOutcome {
    Picked(PickedMedia),
    Cancelled,
}

#[derive(Properties, PartialEq)]
pub struct MediaPickerProps {
    pub source: MediaSource,
    pub on_outcome: Callback<PickOutcome>,
}

/// Adapter binding a `MediaSource` to the browser's file input. The camera
/// path reports an image with no byte payload; the library and files paths
/// try to load the original bytes for metadata and silently degrade to
/// image-only when that load fails or times out. A file that cannot be
/// turned into a preview at all counts as no selection, not an error.
#[function_component(MediaPicker)]
pub fn media_picker(props: &MediaPickerProps) -> Html {
    let source = props.source;

    let on_file_change = {
        let on_outcome = props.on_outcome.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let file = input.files().and_then(|list| list.get(0));

            let file = match file {
                Some(file) => file,
                None => {
                    on_outcome.emit(PickOutcome::Cancelled);
                    return;
                }
            };

            let object_url = match Url::create_object_url_with_blob(&file) {
                Ok(url) => url,
                Err(_) => {
                    Logger::warn("media-picker", "picked file could not be decoded for preview");
                    on_outcome.emit(PickOutcome::Cancelled);
                    return;
                }
            };

            let image_only = PickedMedia {
                attachment_id: MediaAttachment::generate_id(),
                object_url,
                file_name: file.name(),
                mime_type: file.type_(),
                bytes: None,
                captured_at: None,
            };

            if source == MediaSource::Camera {
                // The capture path exposes no original payload
                on_outcome.emit(PickOutcome::Picked(image_only));
                return;
            }

            // Library/files path: race the byte load against a timeout so a
            // platform that never calls back cannot wedge the control in
            // Picking. First finisher wins; the loser sees the flag and
            // stays quiet.
            let emitted = Rc::new(Cell::new(false));
            let captured_at = DateUtils::epoch_millis_to_rfc3339(file.last_modified() as i64);
            let gloo_file = gloo::file::File::from(file);

            {
                let emitted = emitted.clone();
                let on_outcome = on_outcome.clone();
                let image_only = image_only.clone();
                spawn_local(async move {
                    let result = gloo::file::futures::read_as_bytes(&gloo_file).await;
                    if emitted.replace(true) {
                        return;
                    }
                    let media = match result {
                        Ok(bytes) => PickedMedia {
                            bytes: Some(bytes),
                            captured_at,
                            ..image_only
                        },
                        Err(_) => image_only,
                    };
                    on_outcome.emit(PickOutcome::Picked(media));
                });
            }

            {
                let emitted = emitted.clone();
                let on_outcome = on_outcome.clone();
                let image_only = image_only.clone();
                spawn_local(async move {
                    TimeoutFuture::new(BYTE_LOAD_TIMEOUT_MS).await;
                    if emitted.replace(true) {
                        return;
                    }
                    Logger::warn(
                        "media-picker",
                        "byte load timed out; continuing without original payload",
                    );
                    on_outcome.emit(PickOutcome::Picked(image_only));
                });
            }
        })
    };

    let on_cancel_click = {
        let on_outcome = props.on_outcome.clone();
        Callback::from(move |_: MouseEvent| {
            on_outcome.emit(PickOutcome::Cancelled);
        })
    };

    let prompt = match source {
        MediaSource::Camera => "Take a photo",
        MediaSource::Library => "Choose a photo",
        MediaSource::Files => "Choose a file",
    };

    let accept = match source {
        MediaSource::Camera | MediaSource::Library => Some(AttrValue::from("image/*")),
        MediaSource::Files => None,
    };

    let capture = (source == MediaSource::Camera).then(|| AttrValue::from("environment"));

    html! {
        <div class="media-picker">
            <label class="media-picker-prompt">{prompt}</label>
            <input
                type="file"
                class="media-picker-input"
                accept={accept}
                capture={capture}
                onchange={on_file_change}
            />
            <button type="button" class="btn btn-secondary media-picker-cancel" onclick={on_cancel_click}>
                {"Cancel"}
            </button>
        </div>
    }
}
