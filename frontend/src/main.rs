use shared::{CreateEventRequest, EventCategory, MediaAttachment, StatsSummary};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

mod components;
mod hooks;
mod services;
mod state;

use components::cards::post_wake_potty_card::PostWakePottyCard;
use components::exercise_config_modal::ExerciseConfigModal;
use components::launch_screen::LaunchScreen;
use components::location_picker_sheet::LocationPickerSheet;
use components::moment_log_sheet::{MomentLogData, MomentLogSheet};
use components::moment_source_picker_sheet::MomentSourcePickerSheet;
use components::nap_log_sheet::{NapLogData, NapLogSheet};
use components::stats_view::StatsView;
use components::trial_banner::TrialBanner;
use hooks::{use_active_profile, use_timeline};
use services::api::ApiClient;
use services::logging::Logger;
use services::DateUtils;
use state::attachment::MediaSource;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Home,
    Stats,
}

#[function_component(App)]
fn app() -> Html {
    let api_client = ApiClient::new();
    let profile = use_active_profile(&api_client);
    let timeline = use_timeline(&api_client);

    let active_tab = use_state(|| Tab::Home);

    // Sheet visibility is owned here; sheets only report outcomes back
    let show_location_sheet = use_state(|| false);
    let show_nap_sheet = use_state(|| false);
    let show_moment_source_sheet = use_state(|| false);
    let show_moment_sheet = use_state(|| false);
    let moment_initial_source = use_state(|| Option::<MediaSource>::None);
    let show_exercise_modal = use_state(|| false);

    let stats = use_state(|| Option::<StatsSummary>::None);
    let stats_loading = use_state(|| false);

    // Connection status for the footer
    let backend_connected = use_state(|| false);
    let backend_endpoint = use_state(|| String::from("Checking..."));

    let refresh_stats = {
        let api_client = api_client.clone();
        let stats = stats.clone();
        let stats_loading = stats_loading.clone();

        Callback::from(move |_: ()| {
            let api_client = api_client.clone();
            let stats = stats.clone();
            let stats_loading = stats_loading.clone();

            spawn_local(async move {
                stats_loading.set(true);

                match api_client.get_stats_summary().await {
                    Ok(summary) => {
                        stats.set(Some(summary));
                    }
                    Err(e) => {
                        Logger::error("app", &format!("failed to load stats summary: {}", e));
                        gloo::console::error!("Failed to load stats summary:", e);
                    }
                }

                stats_loading.set(false);
            });
        })
    };

    // Initial connection check + stats load
    use_effect_with((), {
        let api_client = api_client.clone();
        let backend_connected = backend_connected.clone();
        let backend_endpoint = backend_endpoint.clone();
        let refresh_stats = refresh_stats.clone();

        move |_| {
            spawn_local(async move {
                match api_client.test_connection().await {
                    Ok(()) => {
                        backend_connected.set(true);
                        backend_endpoint.set("localhost:3000".to_string());
                        refresh_stats.emit(());
                    }
                    Err(e) => {
                        backend_connected.set(false);
                        backend_endpoint.set("Connection failed".to_string());
                        gloo::console::error!("Failed to connect to backend:", e);
                    }
                }
            });

            || ()
        }
    });

    // Stats are derived from events, so refetch whenever the timeline moves
    use_effect_with(timeline.state.events.clone(), {
        let refresh_stats = refresh_stats.clone();
        move |_| {
            refresh_stats.emit(());
            || ()
        }
    });

    // --- Potty flow ---

    let on_log_potty = {
        let show_location_sheet = show_location_sheet.clone();
        Callback::from(move |_: MouseEvent| {
            show_location_sheet.set(true);
        })
    };

    let on_location_selected = {
        let show_location_sheet = show_location_sheet.clone();
        let create_event = timeline.actions.create_event.clone();
        Callback::from(move |location| {
            show_location_sheet.set(false);
            create_event.emit(CreateEventRequest {
                category: EventCategory::Potty,
                occurred_at: None, // Use current time
                ended_at: None,
                location: Some(location),
                note: None,
                attachment: None,
            });
        })
    };

    let on_location_cancel = {
        let show_location_sheet = show_location_sheet.clone();
        Callback::from(move |_| {
            show_location_sheet.set(false);
        })
    };

    // --- Nap flow ---

    let on_log_nap = {
        let show_nap_sheet = show_nap_sheet.clone();
        Callback::from(move |_: MouseEvent| {
            show_nap_sheet.set(true);
        })
    };

    let on_nap_save = {
        let show_nap_sheet = show_nap_sheet.clone();
        let create_event = timeline.actions.create_event.clone();
        Callback::from(move |data: NapLogData| {
            show_nap_sheet.set(false);
            create_event.emit(CreateEventRequest {
                category: EventCategory::Nap,
                occurred_at: Some(DateUtils::naive_local_to_rfc3339(&data.start)),
                ended_at: Some(DateUtils::naive_local_to_rfc3339(&data.end)),
                location: None,
                note: data.note,
                attachment: None,
            });
        })
    };

    let on_nap_cancel = {
        let show_nap_sheet = show_nap_sheet.clone();
        Callback::from(move |_| {
            show_nap_sheet.set(false);
        })
    };

    // --- Moment flow ---

    let on_log_moment = {
        let show_moment_source_sheet = show_moment_source_sheet.clone();
        Callback::from(move |_: MouseEvent| {
            show_moment_source_sheet.set(true);
        })
    };

    let on_moment_source_selected = {
        let show_moment_source_sheet = show_moment_source_sheet.clone();
        let show_moment_sheet = show_moment_sheet.clone();
        let moment_initial_source = moment_initial_source.clone();
        Callback::from(move |source: MediaSource| {
            show_moment_source_sheet.set(false);
            moment_initial_source.set(Some(source));
            show_moment_sheet.set(true);
        })
    };

    let on_moment_source_cancel = {
        let show_moment_source_sheet = show_moment_source_sheet.clone();
        Callback::from(move |_| {
            show_moment_source_sheet.set(false);
        })
    };

    let on_moment_save = {
        let show_moment_sheet = show_moment_sheet.clone();
        let create_event = timeline.actions.create_event.clone();
        Callback::from(move |data: MomentLogData| {
            show_moment_sheet.set(false);

            let attachment = data.media.map(|media| MediaAttachment {
                id: media.attachment_id,
                file_name: media.file_name,
                mime_type: media.mime_type,
                captured_at: media.captured_at,
                byte_len: media.bytes.map(|bytes| bytes.len() as u64),
            });

            create_event.emit(CreateEventRequest {
                category: EventCategory::Moment,
                occurred_at: None,
                ended_at: None,
                location: None,
                note: data.note,
                attachment,
            });
        })
    };

    let on_moment_cancel = {
        let show_moment_sheet = show_moment_sheet.clone();
        Callback::from(move |_| {
            show_moment_sheet.set(false);
        })
    };

    // --- Meal and walk quick logs ---

    let on_log_meal = {
        let create_event = timeline.actions.create_event.clone();
        Callback::from(move |_: MouseEvent| {
            create_event.emit(CreateEventRequest {
                category: EventCategory::Meal,
                occurred_at: None,
                ended_at: None,
                location: None,
                note: None,
                attachment: None,
            });
        })
    };

    let on_log_walk = {
        let create_event = timeline.actions.create_event.clone();
        Callback::from(move |_: MouseEvent| {
            create_event.emit(CreateEventRequest {
                category: EventCategory::Exercise,
                occurred_at: None,
                ended_at: None,
                location: None,
                note: None,
                attachment: None,
            });
        })
    };

    // --- Exercise settings ---

    let on_open_settings = {
        let show_exercise_modal = show_exercise_modal.clone();
        Callback::from(move |_: MouseEvent| {
            show_exercise_modal.set(true);
        })
    };

    let on_exercise_success = {
        let show_exercise_modal = show_exercise_modal.clone();
        let set_profile = profile.actions.set_profile.clone();
        Callback::from(move |updated| {
            set_profile.emit(updated);
            show_exercise_modal.set(false);
        })
    };

    let on_exercise_close = {
        let show_exercise_modal = show_exercise_modal.clone();
        Callback::from(move |_| {
            show_exercise_modal.set(false);
        })
    };

    // --- Banner and card taps ---

    let on_trial_tap = Callback::from(|_| {
        Logger::info("app", "upgrade tapped from trial banner");
    });

    let on_post_wake_tap = {
        let show_location_sheet = show_location_sheet.clone();
        Callback::from(move |_| {
            show_location_sheet.set(true);
        })
    };

    // --- Tab switching ---

    let on_home_tab = {
        let active_tab = active_tab.clone();
        Callback::from(move |_: MouseEvent| {
            active_tab.set(Tab::Home);
        })
    };

    let on_stats_tab = {
        let active_tab = active_tab.clone();
        Callback::from(move |_: MouseEvent| {
            active_tab.set(Tab::Stats);
        })
    };

    // Splash until the first profile load settles
    if profile.state.loading && profile.state.profile.is_none() {
        return html! { <LaunchScreen /> };
    }

    let age_months = profile
        .state
        .profile
        .as_ref()
        .map(|p| p.age_in_months(DateUtils::now_fixed().date_naive()));

    html! {
        <>
            <header class="header">
                <div class="container">
                    <h1>{"🐶 PupLog"}</h1>
                    {if let Some(puppy) = profile.state.profile.as_ref() {
                        html! {
                            <div class="puppy-display">
                                <span class="puppy-name">{&puppy.name}</span>
                                {if let Some(age) = age_months {
                                    html! { <span class="puppy-age">{format!("{} months old", age)}</span> }
                                } else { html! {} }}
                            </div>
                        }
                    } else {
                        html! { <div class="puppy-display">{"No puppy profile yet"}</div> }
                    }}
                    <button class="settings-btn" onclick={on_open_settings}>{"⚙️"}</button>
                </div>
            </header>

            {if let Some(puppy) = profile.state.profile.as_ref() {
                html! {
                    <TrialBanner
                        days_remaining={puppy.trial_days_remaining}
                        on_tap={on_trial_tap}
                    />
                }
            } else { html! {} }}

            <nav class="tab-bar">
                <button
                    class={if *active_tab == Tab::Home { "tab-btn active" } else { "tab-btn" }}
                    onclick={on_home_tab}
                >
                    {"Home"}
                </button>
                <button
                    class={if *active_tab == Tab::Stats { "tab-btn active" } else { "tab-btn" }}
                    onclick={on_stats_tab}
                >
                    {"Stats"}
                </button>
            </nav>

            <main class="main">
                <div class="container">
                    {match *active_tab {
                        Tab::Home => html! {
                            <>
                                {if let Some(summary) = stats.as_ref() {
                                    if let (Some(overdue), Some(since_wake)) = (
                                        summary.sleep.post_wake_overdue_minutes,
                                        summary.sleep.minutes_since_wake,
                                    ) {
                                        html! {
                                            <PostWakePottyCard
                                                overdue_minutes={overdue}
                                                minutes_since_wake={since_wake}
                                                on_tap={on_post_wake_tap}
                                            />
                                        }
                                    } else { html! {} }
                                } else { html! {} }}

                                <section class="quick-actions">
                                    <h2>{"Log Something"}</h2>
                                    <div class="quick-actions-grid">
                                        <button
                                            class="quick-action-btn"
                                            onclick={on_log_potty}
                                            disabled={timeline.state.creating_event}
                                        >
                                            {"🚽 Potty"}
                                        </button>
                                        <button
                                            class="quick-action-btn"
                                            onclick={on_log_nap}
                                            disabled={timeline.state.creating_event}
                                        >
                                            {"😴 Nap"}
                                        </button>
                                        <button
                                            class="quick-action-btn"
                                            onclick={on_log_moment}
                                            disabled={timeline.state.creating_event}
                                        >
                                            {"✨ Moment"}
                                        </button>
                                        <button
                                            class="quick-action-btn"
                                            onclick={on_log_meal}
                                            disabled={timeline.state.creating_event}
                                        >
                                            {"🍽️ Meal"}
                                        </button>
                                        <button
                                            class="quick-action-btn"
                                            onclick={on_log_walk}
                                            disabled={timeline.state.creating_event}
                                        >
                                            {"🦮 Walk"}
                                        </button>
                                    </div>
                                </section>

                                <section class="timeline-section">
                                    <h2>{"Recent Events"}</h2>
                                    {if timeline.state.loading {
                                        html! { <div class="loading">{"Loading events..."}</div> }
                                    } else if timeline.state.events.is_empty() {
                                        html! { <div class="timeline-empty">{"Nothing logged yet today. Tap a button above!"}</div> }
                                    } else {
                                        html! {
                                            <div class="table-container">
                                                <table class="timeline-table">
                                                    <thead>
                                                        <tr>
                                                            <th>{"Time"}</th>
                                                            <th>{"Event"}</th>
                                                            <th>{"Details"}</th>
                                                        </tr>
                                                    </thead>
                                                    <tbody>
                                                        {for timeline.state.events.iter().take(10).map(|event| {
                                                            let time = DateUtils::parse_flexible_rfc3339(&event.occurred_at)
                                                                .map(|dt| DateUtils::format_clock_time(&dt.naive_local()))
                                                                .unwrap_or_else(|_| event.occurred_at.clone());

                                                            let details = event_details(event);

                                                            html! {
                                                                <tr>
                                                                    <td class="time">{time}</td>
                                                                    <td class="category">{event.category.label()}</td>
                                                                    <td class="details">{details}</td>
                                                                </tr>
                                                            }
                                                        })}
                                                    </tbody>
                                                </table>
                                            </div>
                                        }
                                    }}
                                </section>
                            </>
                        },
                        Tab::Stats => html! {
                            <StatsView
                                stats={(*stats).clone()}
                                events={timeline.state.events.clone()}
                                loading={*stats_loading}
                            />
                        },
                    }}
                </div>
            </main>

            <LocationPickerSheet
                is_open={*show_location_sheet}
                on_select={on_location_selected}
                on_cancel={on_location_cancel}
            />

            <NapLogSheet
                is_open={*show_nap_sheet}
                on_save={on_nap_save}
                on_cancel={on_nap_cancel}
            />

            <MomentSourcePickerSheet
                is_open={*show_moment_source_sheet}
                on_select={on_moment_source_selected}
                on_cancel={on_moment_source_cancel}
            />

            <MomentLogSheet
                is_open={*show_moment_sheet}
                initial_source={*moment_initial_source}
                on_save={on_moment_save}
                on_cancel={on_moment_cancel}
            />

            <ExerciseConfigModal
                is_open={*show_exercise_modal}
                api_client={api_client.clone()}
                profile={profile.state.profile.clone()}
                on_success={on_exercise_success}
                on_close={on_exercise_close}
            />

            <div class="connection-status">
                {if *backend_connected {
                    format!("Connected to {}", *backend_endpoint)
                } else {
                    (*backend_endpoint).clone()
                }}
            </div>
        </>
    }
}

/// Details column for the timeline table
fn event_details(event: &shared::Event) -> String {
    let mut parts = Vec::new();

    if let Some(location) = event.location {
        parts.push(location.label().to_string());
    }

    if let (Some(start), Some(end)) = (
        DateUtils::parse_flexible_rfc3339(&event.occurred_at).ok(),
        event
            .ended_at
            .as_deref()
            .and_then(|ended| DateUtils::parse_flexible_rfc3339(ended).ok()),
    ) {
        let minutes = (end - start).num_minutes().max(1);
        parts.push(DateUtils::format_duration_minutes(minutes));
    }

    if let Some(note) = event.note.as_deref() {
        parts.push(note.to_string());
    }

    if event.attachment.is_some() {
        parts.push("📷".to_string());
    }

    parts.join(" · ")
}

fn main() {
    yew::Renderer::<App>::new().render();
}
