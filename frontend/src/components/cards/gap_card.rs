use shared::GapStats;
use yew::prelude::*;

use crate::services::DateUtils;

#[derive(Properties, PartialEq)]
pub struct GapCardProps {
    pub stats: GapStats,
}

/// Time-between-potty-breaks card. Everything shown is backend-computed.
#[function_component(GapCard)]
pub fn gap_card(props: &GapCardProps) -> Html {
    html! {
        <div class="stat-card gap-card">
            <div class="stat-card-heading">{"⏱️ Potty Gaps"}</div>
            <div class="stat-card-value">{&props.stats.formatted_average}</div>
            <div class="stat-card-footnote">
                {format!(
                    "Longest: {}",
                    DateUtils::format_duration_minutes(props.stats.longest_minutes)
                )}
            </div>
        </div>
    }
}
