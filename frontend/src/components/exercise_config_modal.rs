use shared::{ExerciseConfig, PuppyProfile, UpdateExerciseConfigRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlSelectElement, MouseEvent};
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::DateUtils;

#[derive(Properties, PartialEq)]
pub struct ExerciseConfigModalProps {
    pub is_open: bool,
    pub api_client: ApiClient,
    pub profile: Option<PuppyProfile>,
    /// Fires with the updated profile after a successful save
    pub on_success: Callback<PuppyProfile>,
    pub on_close: Callback<()>,
}

/// Editor for the two bounded exercise settings. Both fields are selects
/// over exactly the legal range, so out-of-range values are unreachable
/// through the UI. Save replaces the config wholesale; cancel discards
/// local edits without touching the store.
#[function_component(ExerciseConfigModal)]
pub fn exercise_config_modal(props: &ExerciseConfigModalProps) -> Html {
    let minutes_per_month = use_state(|| ExerciseConfig::default().minutes_per_month_of_age);
    let max_walks = use_state(|| ExerciseConfig::default().max_walks_per_day);
    let is_submitting = use_state(|| false);
    let error_message = use_state(|| Option::<String>::None);
    let success_message = use_state(|| Option::<String>::None);

    // Re-populate from the profile every time the modal opens
    use_effect_with((props.is_open, props.profile.clone()), {
        let minutes_per_month = minutes_per_month.clone();
        let max_walks = max_walks.clone();
        let error_message = error_message.clone();
        let success_message = success_message.clone();
        move |(is_open, profile): &(bool, Option<PuppyProfile>)| {
            if *is_open {
                let config = profile
                    .as_ref()
                    .map(|p| p.effective_exercise_config())
                    .unwrap_or_default();
                minutes_per_month.set(config.minutes_per_month_of_age);
                max_walks.set(config.max_walks_per_day);
                error_message.set(None);
                success_message.set(None);
            }
            || ()
        }
    });

    let on_minutes_change = {
        let minutes_per_month = minutes_per_month.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(value) = select.value().parse::<u8>() {
                minutes_per_month.set(value);
            }
        })
    };

    let on_walks_change = {
        let max_walks = max_walks.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(value) = select.value().parse::<u8>() {
                max_walks.set(value);
            }
        })
    };

    let on_submit = {
        let minutes_per_month = minutes_per_month.clone();
        let max_walks = max_walks.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();
        let success_message = success_message.clone();
        let on_success = props.on_success.clone();
        let api_client = props.api_client.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let config = ExerciseConfig {
                minutes_per_month_of_age: *minutes_per_month,
                max_walks_per_day: *max_walks,
            };

            if !config.is_valid() {
                error_message.set(Some("Exercise settings out of range".to_string()));
                return;
            }

            is_submitting.set(true);
            error_message.set(None);
            success_message.set(None);

            let is_submitting = is_submitting.clone();
            let error_message = error_message.clone();
            let success_message = success_message.clone();
            let on_success = on_success.clone();
            let api_client = api_client.clone();

            spawn_local(async move {
                let request = UpdateExerciseConfigRequest {
                    puppy_id: None, // Use active puppy
                    minutes_per_month_of_age: config.minutes_per_month_of_age,
                    max_walks_per_day: config.max_walks_per_day,
                };

                match api_client.update_exercise_config(request).await {
                    Ok(response) => {
                        is_submitting.set(false);
                        success_message.set(Some(response.success_message));

                        let profile = response.profile;
                        gloo::timers::callback::Timeout::new(1200, move || {
                            on_success.emit(profile);
                        })
                        .forget();
                    }
                    Err(e) => {
                        Logger::error(
                            "exercise-config",
                            &format!("failed to save exercise config: {}", e),
                        );
                        is_submitting.set(false);
                        error_message.set(Some(format!("Failed to save settings: {}", e)));
                    }
                }
            });
        })
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    if !props.is_open {
        return html! {};
    }

    let daily_allowance = props.profile.as_ref().map(|profile| {
        let age = profile.age_in_months(DateUtils::now_fixed().date_naive());
        let config = ExerciseConfig {
            minutes_per_month_of_age: *minutes_per_month,
            max_walks_per_day: *max_walks,
        };
        (age, config.daily_allowance_minutes(age))
    });

    html! {
        <div class="exercise-config-modal-backdrop" onclick={on_backdrop_click}>
            <div class="exercise-config-modal" onclick={on_modal_click}>
                <div class="exercise-config-modal-content">
                    <h3 class="exercise-config-title">{"🐾 Exercise Settings"}</h3>

                    {if let Some(error) = (*error_message).clone() {
                        html! { <div class="exercise-config-error">{error}</div> }
                    } else {
                        html! {}
                    }}

                    {if let Some(success) = (*success_message).clone() {
                        html! { <div class="exercise-config-success">{success}</div> }
                    } else {
                        html! {}
                    }}

                    <form class="exercise-config-form" onsubmit={on_submit}>
                        <div class="form-group">
                            <label for="exercise-minutes">{"Minutes per month of age"}</label>
                            <select
                                id="exercise-minutes"
                                class="exercise-config-select"
                                onchange={on_minutes_change}
                                disabled={*is_submitting}
                            >
                                {for (ExerciseConfig::MIN_MINUTES_PER_MONTH..=ExerciseConfig::MAX_MINUTES_PER_MONTH).map(|value| {
                                    html! {
                                        <option value={value.to_string()} selected={value == *minutes_per_month}>
                                            {format!("{} minutes", value)}
                                        </option>
                                    }
                                })}
                            </select>
                            <small class="form-text">{"The usual guideline is 5 minutes per month of age, per session"}</small>
                        </div>

                        <div class="form-group">
                            <label for="exercise-walks">{"Max walks per day"}</label>
                            <select
                                id="exercise-walks"
                                class="exercise-config-select"
                                onchange={on_walks_change}
                                disabled={*is_submitting}
                            >
                                {for (ExerciseConfig::MIN_WALKS_PER_DAY..=ExerciseConfig::MAX_WALKS_PER_DAY).map(|value| {
                                    html! {
                                        <option value={value.to_string()} selected={value == *max_walks}>
                                            {if value == 1 { "1 walk".to_string() } else { format!("{} walks", value) }}
                                        </option>
                                    }
                                })}
                            </select>
                        </div>

                        {if let Some((age, minutes)) = daily_allowance {
                            html! {
                                <div class="exercise-config-hint">
                                    {format!("At {} months old, that's up to {} minutes of exercise per day", age, minutes)}
                                </div>
                            }
                        } else {
                            html! {}
                        }}

                        <div class="exercise-config-buttons">
                            <button
                                type="submit"
                                class="btn btn-primary"
                                disabled={*is_submitting}
                            >
                                {if *is_submitting { "Saving..." } else { "Save Settings" }}
                            </button>
                            <button
                                type="button"
                                class="btn btn-secondary"
                                onclick={on_cancel}
                                disabled={*is_submitting}
                            >
                                {"Cancel"}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
