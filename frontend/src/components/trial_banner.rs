use web_sys::MouseEvent;
use yew::prelude::*;

/// Visual treatment for the banner: critical inside the final three days
pub fn banner_severity_class(days_remaining: i64) -> &'static str {
    if days_remaining <= 3 {
        "trial-banner critical"
    } else {
        "trial-banner normal"
    }
}

/// Banner copy for the remaining-trial display
pub fn banner_message(days_remaining: i64) -> String {
    match days_remaining {
        n if n <= 0 => "Your trial has ended".to_string(),
        1 => "1 day left in your trial".to_string(),
        n => format!("{} days left in your trial", n),
    }
}

#[derive(Properties, PartialEq)]
pub struct TrialBannerProps {
    pub days_remaining: i64,
    /// Single forwarded tap action; the banner itself holds no state
    pub on_tap: Callback<()>,
}

/// Read-only trial-status banner. Pure rendering: safe to re-render on
/// every input change.
#[function_component(TrialBanner)]
pub fn trial_banner(props: &TrialBannerProps) -> Html {
    let onclick = {
        let on_tap = props.on_tap.clone();
        Callback::from(move |_: MouseEvent| {
            on_tap.emit(());
        })
    };

    html! {
        <div class={banner_severity_class(props.days_remaining)} {onclick}>
            <span class="trial-banner-message">{banner_message(props.days_remaining)}</span>
            <span class="trial-banner-action">{"Upgrade"}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_critical_boundary_is_exactly_three_days() {
        assert_eq!(banner_severity_class(3), "trial-banner critical");
        assert_eq!(banner_severity_class(4), "trial-banner normal");
    }

    #[test]
    fn test_severity_extremes() {
        assert_eq!(banner_severity_class(0), "trial-banner critical");
        assert_eq!(banner_severity_class(30), "trial-banner normal");
    }

    #[test]
    fn test_banner_message_branches() {
        assert_eq!(banner_message(0), "Your trial has ended");
        assert_eq!(banner_message(-2), "Your trial has ended");
        assert_eq!(banner_message(1), "1 day left in your trial");
        assert_eq!(banner_message(14), "14 days left in your trial");
    }
}
