use yew::prelude::*;

/// Static splash shown while the first profile load is in flight. No
/// interaction.
#[function_component(LaunchScreen)]
pub fn launch_screen() -> Html {
    html! {
        <div class="launch-screen">
            <div class="launch-logo">{"🐶"}</div>
            <h1 class="launch-title">{"PupLog"}</h1>
            <p class="launch-tagline">{"Every potty break, nap, and walk in one place"}</p>
        </div>
    }
}
