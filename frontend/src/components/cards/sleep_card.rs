use shared::SleepStats;
use yew::prelude::*;

use crate::services::DateUtils;

#[derive(Properties, PartialEq)]
pub struct SleepCardProps {
    pub stats: SleepStats,
}

/// Nap summary card. Everything shown is backend-computed.
#[function_component(SleepCard)]
pub fn sleep_card(props: &SleepCardProps) -> Html {
    html! {
        <div class="stat-card sleep-card">
            <div class="stat-card-heading">{"😴 Sleep"}</div>
            <div class="stat-card-value">{props.stats.nap_count_today}</div>
            <div class="stat-card-caption">{&props.stats.formatted_total}</div>
            {if let Some(minutes) = props.stats.minutes_since_wake {
                html! {
                    <div class="stat-card-footnote">
                        {format!("Awake for {}", DateUtils::format_duration_minutes(minutes))}
                    </div>
                }
            } else {
                html! { <div class="stat-card-footnote">{"No naps yet today"}</div> }
            }}
        </div>
    }
}
