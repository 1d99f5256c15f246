use super::scale::{nice_max, tick_label, ticks};
use leptos::prelude::*;

const WIDTH: f64 = 560.0;
const MARGIN_LEFT: f64 = 48.0;
const MARGIN_RIGHT: f64 = 8.0;
const MARGIN_TOP: f64 = 12.0;
const MARGIN_BOTTOM: f64 = 28.0;

/// Vertical bar chart with rounded tops, y gridlines and category x labels.
#[component]
pub fn BarChart(
    /// (category, value) pairs in display order.
    data: Vec<(String, f64)>,
    /// Overall SVG height in pixels.
    #[prop(default = 300.0)]
    height: f64,
    /// Bar fill colour.
    #[prop(default = "#3b82f6")]
    color: &'static str,
) -> impl IntoView {
    let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = height - MARGIN_TOP - MARGIN_BOTTOM;
    let max = nice_max(data.iter().map(|(_, v)| *v).fold(0.0, f64::max));
    let slot = if data.is_empty() {
        plot_w
    } else {
        plot_w / data.len() as f64
    };
    let bar_w = slot * 0.55;

    view! {
        <svg class="chart chart--bar" viewBox=format!("0 0 {WIDTH} {height}") role="img">
            {ticks(max, 4)
                .into_iter()
                .map(|t| {
                    let y = MARGIN_TOP + plot_h * (1.0 - t / max);
                    view! {
                        <line
                            x1=format!("{MARGIN_LEFT}")
                            y1=format!("{y:.1}")
                            x2=format!("{}", WIDTH - MARGIN_RIGHT)
                            y2=format!("{y:.1}")
                            class="chart__grid"
                        />
                        <text
                            x=format!("{}", MARGIN_LEFT - 6.0)
                            y=format!("{:.1}", y + 4.0)
                            text-anchor="end"
                            class="chart__tick"
                        >
                            {tick_label(t)}
                        </text>
                    }
                })
                .collect_view()}
            {data
                .into_iter()
                .enumerate()
                .map(|(i, (label, value))| {
                    let x = MARGIN_LEFT + slot * i as f64 + (slot - bar_w) / 2.0;
                    let h = plot_h * value / max;
                    let y = MARGIN_TOP + plot_h - h;
                    view! {
                        <rect
                            x=format!("{x:.1}")
                            y=format!("{y:.1}")
                            width=format!("{bar_w:.1}")
                            height=format!("{h:.1}")
                            rx="6"
                            fill=color
                        />
                        <text
                            x=format!("{:.1}", x + bar_w / 2.0)
                            y=format!("{:.1}", MARGIN_TOP + plot_h + 18.0)
                            text-anchor="middle"
                            class="chart__tick"
                        >
                            {label}
                        </text>
                    }
                })
                .collect_view()}
        </svg>
    }
}
