use shared::{Event, PatternStats};
use yew::prelude::*;

use crate::components::pattern_chart::PatternChart;

#[derive(Properties, PartialEq)]
pub struct PatternCardProps {
    pub stats: PatternStats,
    /// Events filtered to the last seven days by the dashboard
    pub week_events: Vec<Event>,
    pub loading: bool,
}

/// Pattern-analysis card: the backend's insight line plus the weekly potty
/// scatter.
#[function_component(PatternCard)]
pub fn pattern_card(props: &PatternCardProps) -> Html {
    html! {
        <div class="stat-card pattern-card">
            <div class="stat-card-heading">{"🔍 Patterns"}</div>
            <div class="stat-card-caption">{&props.stats.formatted_insight}</div>
            <PatternChart events={props.week_events.clone()} loading={props.loading} />
        </div>
    }
}
