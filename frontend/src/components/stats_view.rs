use shared::{Event, StatsSummary};
use yew::prelude::*;

use super::cards::gap_card::GapCard;
use super::cards::pattern_card::PatternCard;
use super::cards::sleep_card::SleepCard;
use super::cards::streak_card::StreakCard;
use super::cards::today_card::TodayCard;
use crate::services::DateUtils;

#[derive(Properties, PartialEq)]
pub struct StatsViewProps {
    pub stats: Option<StatsSummary>,
    /// Recent events from the timeline; this view only date-filters them
    pub events: Vec<Event>,
    pub loading: bool,
}

/// Stats dashboard: five independent cards fed from the backend summary.
/// The only computation here is date-range filtering; a 7-day window for
/// the pattern card, today's unfiltered set for the today card.
#[function_component(StatsView)]
pub fn stats_view(props: &StatsViewProps) -> Html {
    if props.loading && props.stats.is_none() {
        return html! { <div class="loading">{"Loading stats..."}</div> };
    }

    let Some(stats) = props.stats.clone() else {
        return html! {
            <div class="stats-empty">
                {"No stats yet. Log a few events and come back!"}
            </div>
        };
    };

    let now = DateUtils::now_fixed();
    let week_events = DateUtils::events_within_last_days(&props.events, now, 7);
    let today_events = DateUtils::events_on_day(&props.events, now);

    html! {
        <section class="stats-view">
            <div class="stats-grid">
                <StreakCard stats={stats.streak} />
                <GapCard stats={stats.gaps} />
                <TodayCard stats={stats.today} events={today_events} />
                <SleepCard stats={stats.sleep} />
                <PatternCard
                    stats={stats.pattern}
                    week_events={week_events}
                    loading={props.loading}
                />
            </div>
        </section>
    }
}
