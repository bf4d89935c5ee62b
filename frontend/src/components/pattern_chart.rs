use chrono::{DateTime, Duration, FixedOffset, Timelike};
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::{Event, EventCategory, PottyLocation};
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::services::DateUtils;

#[derive(Properties, PartialEq)]
pub struct PatternChartProps {
    /// Events inside the 7-day window; the chart keeps only potty events
    pub events: Vec<Event>,
    pub loading: bool,
}

/// Scatter of potty times over the last seven days: one column per day,
/// time of day on the y axis, outside and inside picked apart by color.
pub struct PatternChart {
    canvas_ref: NodeRef,
}

impl Component for PatternChart {
    type Message = ();
    type Properties = PatternChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().events != old_props.events {
            self.draw_chart(&ctx.props().events);
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if !ctx.props().events.is_empty() {
            self.draw_chart(&ctx.props().events);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let event_count = ctx.props().events.len();
        let loading = ctx.props().loading;

        html! {
            <div class="pattern-chart-container">
                {if event_count == 0 && loading {
                    html! {
                        <div class="chart-loading">
                            <p>{"Loading pattern data..."}</p>
                        </div>
                    }
                } else if event_count == 0 {
                    html! {
                        <div class="chart-empty">
                            <p>{"Not enough potty data yet this week"}</p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="chart-content">
                            <canvas
                                ref={self.canvas_ref.clone()}
                                class="pattern-chart-canvas"
                                width="800"
                                height="300"
                            ></canvas>
                        </div>
                    }
                }}
            </div>
        }
    }
}

impl PatternChart {
    fn draw_chart(&self, events: &[Event]) {
        if events.is_empty() {
            return;
        }

        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };

        canvas.set_width(800);
        canvas.set_height(300);

        let backend = match CanvasBackend::with_canvas_object(canvas.clone()) {
            Some(backend) => backend,
            None => return,
        };

        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }

        let now = DateUtils::now_fixed();
        let points = scatter_points(events, now);
        let today = now.date_naive();

        let mut chart = match ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(35)
            .y_label_area_size(55)
            .build_cartesian_2d(0f64..7f64, 0f64..24f64)
        {
            Ok(chart) => chart,
            Err(_) => return,
        };

        if chart
            .configure_mesh()
            .y_desc("Time of day")
            .x_label_formatter(&move |v| {
                let index = (v.floor() as i64).clamp(0, 6);
                (today - Duration::days(6 - index)).format("%m/%d").to_string()
            })
            .y_label_formatter(&|v| format!("{:02}:00", *v as u32))
            .label_style(("sans-serif", 12, &RGBColor(102, 126, 234)))
            .axis_style(&RGBColor(230, 230, 230))
            .bold_line_style(&RGBColor(245, 245, 245))
            .light_line_style(&RGBColor(250, 250, 250))
            .x_labels(7)
            .y_labels(8)
            .draw()
            .is_err()
        {
            return;
        }

        let outside_color = RGBColor(102, 187, 106);
        let inside_color = RGBColor(239, 83, 80);

        for (x, y, location) in &points {
            let color = match location {
                PottyLocation::Outside => outside_color,
                PottyLocation::Inside => inside_color,
            };

            if chart
                .draw_series(std::iter::once(Circle::new((*x, *y), 5, color.filled())))
                .is_err()
            {
                continue;
            }

            if chart
                .draw_series(std::iter::once(Circle::new((*x, *y), 5, WHITE.stroke_width(1))))
                .is_err()
            {
                continue;
            }
        }

        let _ = root.present();
    }
}

/// Potty events inside the window as (day column, hour of day, location)
/// points. Day columns run 0..7 with today rightmost; events older than six
/// days, future events, non-potty events, and unparseable timestamps are
/// dropped.
fn scatter_points(
    events: &[Event],
    now: DateTime<FixedOffset>,
) -> Vec<(f64, f64, PottyLocation)> {
    let today = now.date_naive();

    events
        .iter()
        .filter(|event| event.category == EventCategory::Potty)
        .filter_map(|event| {
            let dt = DateUtils::parse_flexible_rfc3339(&event.occurred_at).ok()?;
            let local = dt.with_timezone(&now.timezone());
            let age_days = (today - local.date_naive()).num_days();
            if !(0..=6).contains(&age_days) {
                return None;
            }

            let x = (6 - age_days) as f64 + 0.5;
            let y = local.time().num_seconds_from_midnight() as f64 / 3600.0;
            Some((x, y, event.location.unwrap_or(PottyLocation::Outside)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Event, EventCategory};

    fn potty_at(occurred_at: &str, location: Option<PottyLocation>) -> Event {
        Event {
            id: Event::generate_id(EventCategory::Potty, 0),
            puppy_id: "puppy::1".to_string(),
            category: EventCategory::Potty,
            occurred_at: occurred_at.to_string(),
            ended_at: None,
            location,
            note: None,
            attachment: None,
        }
    }

    #[test]
    fn test_scatter_points_day_columns_and_hours() {
        let now = DateUtils::parse_flexible_rfc3339("2026-08-06T18:00:00Z").unwrap();
        let events = vec![
            potty_at("2026-08-06T06:30:00Z", Some(PottyLocation::Outside)), // today
            potty_at("2026-07-31T12:00:00Z", Some(PottyLocation::Inside)),  // oldest column
        ];

        let points = scatter_points(&events, now);
        assert_eq!(points.len(), 2);

        // Today lands in the rightmost column, 06:30 reads as 6.5 hours
        assert_eq!(points[0].0, 6.5);
        assert!((points[0].1 - 6.5).abs() < 1e-9);
        assert_eq!(points[0].2, PottyLocation::Outside);

        // Six days ago lands in the leftmost column
        assert_eq!(points[1].0, 0.5);
        assert_eq!(points[1].2, PottyLocation::Inside);
    }

    #[test]
    fn test_scatter_points_drops_out_of_window_and_non_potty() {
        let now = DateUtils::parse_flexible_rfc3339("2026-08-06T18:00:00Z").unwrap();
        let mut nap = potty_at("2026-08-06T09:00:00Z", None);
        nap.category = EventCategory::Nap;

        let events = vec![
            nap,
            potty_at("2026-07-30T12:00:00Z", None), // seven days back, outside window
            potty_at("2026-08-07T12:00:00Z", None), // tomorrow
            potty_at("not a timestamp", None),
        ];

        assert!(scatter_points(&events, now).is_empty());
    }

    #[test]
    fn test_scatter_points_missing_location_defaults_outside() {
        let now = DateUtils::parse_flexible_rfc3339("2026-08-06T18:00:00Z").unwrap();
        let events = vec![potty_at("2026-08-05T08:00:00Z", None)];
        let points = scatter_points(&events, now);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].2, PottyLocation::Outside);
    }

    // Basic smoke test mirroring the props contract
    #[test]
    fn test_pattern_chart_props_creation() {
        let props = PatternChartProps {
            events: vec![],
            loading: false,
        };
        assert!(!props.loading);
        assert_eq!(props.events.len(), 0);
    }

    #[test]
    fn test_draw_chart_with_empty_events() {
        let chart = PatternChart {
            canvas_ref: NodeRef::default(),
        };
        // Must not panic with nothing to draw
        chart.draw_chart(&[]);
    }

    #[test]
    fn test_draw_chart_without_canvas() {
        let chart = PatternChart {
            canvas_ref: NodeRef::default(),
        };
        // A detached canvas ref bails out before any drawing happens
        chart.draw_chart(&[potty_at("2026-08-06T09:00:00Z", None)]);
    }
}

// Integration tests that require wasm-bindgen-test
#[cfg(test)]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_component_draw_in_wasm() {
        let chart = PatternChart {
            canvas_ref: NodeRef::default(),
        };
        chart.draw_chart(&[]);
    }
}
