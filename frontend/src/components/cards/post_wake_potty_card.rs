use web_sys::MouseEvent;
use yew::prelude::*;

/// Branch table for the card's headline
pub fn post_wake_message(overdue_minutes: i64) -> String {
    if overdue_minutes > 0 {
        format!("Potty overdue by {} minutes", overdue_minutes)
    } else {
        "Just woke up! A potty trip soon is a good idea".to_string()
    }
}

#[derive(Properties, PartialEq)]
pub struct PostWakePottyCardProps {
    /// Minutes past the recommended post-wake potty window; non-positive
    /// means still inside the window
    pub overdue_minutes: i64,
    /// Minutes since the most recent nap ended
    pub minutes_since_wake: i64,
    /// Single forwarded tap action, typically "log a potty break now"
    pub on_tap: Callback<()>,
}

/// Read-only nudge card shown after a nap ends. Pure rendering: safe to
/// re-render on every input change.
#[function_component(PostWakePottyCard)]
pub fn post_wake_potty_card(props: &PostWakePottyCardProps) -> Html {
    let onclick = {
        let on_tap = props.on_tap.clone();
        Callback::from(move |_: MouseEvent| {
            on_tap.emit(());
        })
    };

    let card_class = if props.overdue_minutes > 0 {
        "post-wake-card overdue"
    } else {
        "post-wake-card"
    };

    html! {
        <div class={card_class} {onclick}>
            <div class="post-wake-headline">{post_wake_message(props.overdue_minutes)}</div>
            <div class="post-wake-caption">
                {format!("Awake for {} minutes", props.minutes_since_wake.max(0))}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overdue_branch() {
        assert_eq!(post_wake_message(12), "Potty overdue by 12 minutes");
        assert_eq!(post_wake_message(1), "Potty overdue by 1 minutes");
    }

    #[test]
    fn test_recommendation_branch_at_boundary() {
        // Zero and negative both land on the generic recommendation
        assert_eq!(
            post_wake_message(0),
            "Just woke up! A potty trip soon is a good idea"
        );
        assert_eq!(
            post_wake_message(-5),
            "Just woke up! A potty trip soon is a good idea"
        );
    }
}
