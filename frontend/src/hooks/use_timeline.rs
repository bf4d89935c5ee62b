use chrono::Duration;
use shared::{CreateEventRequest, Event};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::DateUtils;

/// How far back the timeline query reaches. The stats view windows this
/// down further; nothing in the UI looks past it.
const TIMELINE_DAYS: i64 = 30;

#[derive(Clone)]
pub struct TimelineState {
    /// Most recent first
    pub events: Vec<Event>,
    pub loading: bool,
    pub creating_event: bool,
}

pub struct UseTimelineResult {
    pub state: TimelineState,
    pub actions: UseTimelineActions,
}

#[derive(Clone)]
pub struct UseTimelineActions {
    pub refresh: Callback<()>,
    pub create_event: Callback<CreateEventRequest>,
}

#[hook]
pub fn use_timeline(api_client: &ApiClient) -> UseTimelineResult {
    let events = use_state(Vec::<Event>::new);
    let loading = use_state(|| true);
    let creating_event = use_state(|| false);

    let refresh = {
        let api_client = api_client.clone();
        let events = events.clone();
        let loading = loading.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let events = events.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);

                let now = DateUtils::now_fixed();
                let from = (now - Duration::days(TIMELINE_DAYS)).to_rfc3339();
                let to = now.to_rfc3339();

                match api_client.get_events(&from, &to).await {
                    Ok(response) => {
                        // Ordering is store-determined; pin it down here
                        let mut fetched = response.events;
                        fetched.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
                        events.set(fetched);
                    }
                    Err(e) => {
                        Logger::error("use-timeline", &format!("failed to load events: {}", e));
                        gloo::console::error!("Failed to load events:", e);
                    }
                }

                loading.set(false);
            });
        })
    };

    let create_event = {
        let api_client = api_client.clone();
        let creating_event = creating_event.clone();
        let refresh = refresh.clone();

        use_callback((), move |request: CreateEventRequest, _| {
            let api_client = api_client.clone();
            let creating_event = creating_event.clone();
            let refresh = refresh.clone();

            spawn_local(async move {
                creating_event.set(true);

                match api_client.create_event(request).await {
                    Ok(response) => {
                        Logger::info(
                            "use-timeline",
                            &format!("logged {} event", response.event.category.label()),
                        );
                        refresh.emit(());
                    }
                    Err(e) => {
                        Logger::error("use-timeline", &format!("failed to log event: {}", e));
                        gloo::console::error!("Failed to log event:", e);
                    }
                }

                creating_event.set(false);
            });
        })
    };

    let state = TimelineState {
        events: (*events).clone(),
        loading: *loading,
        creating_event: *creating_event,
    };

    let actions = UseTimelineActions {
        refresh,
        create_event,
    };

    UseTimelineResult { state, actions }
}
