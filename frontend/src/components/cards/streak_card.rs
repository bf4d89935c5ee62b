use shared::StreakStats;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StreakCardProps {
    pub stats: StreakStats,
}

/// Accident-free streak card. Everything shown is backend-computed.
#[function_component(StreakCard)]
pub fn streak_card(props: &StreakCardProps) -> Html {
    html! {
        <div class="stat-card streak-card">
            <div class="stat-card-heading">{"🎯 Potty Streak"}</div>
            <div class="stat-card-value">{props.stats.current_days}</div>
            <div class="stat-card-caption">{&props.stats.formatted_current}</div>
            <div class="stat-card-footnote">
                {format!("Best: {} days", props.stats.best_days)}
            </div>
        </div>
    }
}
