use shared::PuppyProfile;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone)]
pub struct ActiveProfileState {
    pub profile: Option<PuppyProfile>,
    pub loading: bool,
}

pub struct UseActiveProfileResult {
    pub state: ActiveProfileState,
    pub actions: UseActiveProfileActions,
}

#[derive(Clone, PartialEq)]
pub struct UseActiveProfileActions {
    pub refresh: Callback<()>,
    /// Replace the held profile with one the backend just returned, e.g.
    /// after an exercise-config save
    pub set_profile: Callback<PuppyProfile>,
}

#[hook]
pub fn use_active_profile(api_client: &ApiClient) -> UseActiveProfileResult {
    let profile = use_state(|| Option::<PuppyProfile>::None);
    let loading = use_state(|| true);

    let refresh = {
        let api_client = api_client.clone();
        let profile = profile.clone();
        let loading = loading.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let profile = profile.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.get_active_profile().await {
                    Ok(response) => {
                        profile.set(response.profile);
                    }
                    Err(e) => {
                        Logger::error("use-active-profile", &format!("failed to load profile: {}", e));
                        gloo::console::error!("Failed to load active profile:", e);
                    }
                }

                loading.set(false);
            });
        })
    };

    let set_profile = {
        let profile = profile.clone();

        use_callback((), move |updated: PuppyProfile, _| {
            profile.set(Some(updated));
        })
    };

    // Load initial profile
    use_effect_with((), {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    let state = ActiveProfileState {
        profile: (*profile).clone(),
        loading: *loading,
    };

    let actions = UseActiveProfileActions {
        refresh,
        set_profile,
    };

    UseActiveProfileResult { state, actions }
}
