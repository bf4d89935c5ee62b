use shared::{Event, TodayStats};
use yew::prelude::*;

use crate::services::DateUtils;

#[derive(Properties, PartialEq)]
pub struct TodayCardProps {
    pub stats: TodayStats,
    /// Today's events, unfiltered by category
    pub events: Vec<Event>,
}

/// Today-at-a-glance card: backend-computed counts plus a chip per logged
/// event.
#[function_component(TodayCard)]
pub fn today_card(props: &TodayCardProps) -> Html {
    html! {
        <div class="stat-card today-card">
            <div class="stat-card-heading">{"📅 Today"}</div>
            <div class="stat-card-caption">{&props.stats.formatted_headline}</div>

            <div class="today-card-counts">
                <span class="today-count">{format!("🚽 {}", props.stats.potty_count)}</span>
                <span class="today-count">{format!("🍽️ {}", props.stats.meal_count)}</span>
                <span class="today-count">{format!("🦮 {}", props.stats.walk_count)}</span>
                <span class="today-count">
                    {format!("🏃 {}", DateUtils::format_duration_minutes(props.stats.exercise_minutes))}
                </span>
            </div>

            <div class="today-card-events">
                {for props.events.iter().map(|event| {
                    let time = DateUtils::parse_flexible_rfc3339(&event.occurred_at)
                        .map(|dt| DateUtils::format_clock_time(&dt.naive_local()))
                        .unwrap_or_default();

                    html! {
                        <span class="today-event-chip">
                            {format!("{} {}", event.category.label(), time)}
                        </span>
                    }
                })}
            </div>
        </div>
    }
}
