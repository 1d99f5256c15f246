use super::scale::{nice_max, tick_label, ticks};
use leptos::prelude::*;

const WIDTH: f64 = 560.0;
const MARGIN_LEFT: f64 = 48.0;
const MARGIN_RIGHT: f64 = 8.0;
const MARGIN_TOP: f64 = 12.0;
const MARGIN_BOTTOM: f64 = 28.0;

/// X pixel for point `i` of `n`, spread evenly across the plot width.
fn point_x(i: usize, n: usize, left: f64, width: f64) -> f64 {
    if n <= 1 {
        left + width / 2.0
    } else {
        left + width * i as f64 / (n - 1) as f64
    }
}

/// Space-separated "x,y" pairs for an SVG polyline, scaled into the plot
/// rectangle.
pub(crate) fn polyline_points(
    values: &[f64],
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    max: f64,
) -> String {
    let n = values.len();
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = point_x(i, n, left, width);
            let y = top + height * (1.0 - v / max);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Line chart with one dot per point, y gridlines and category x labels.
#[component]
pub fn LineChart(
    /// (category, value) pairs in display order.
    data: Vec<(String, f64)>,
    /// Overall SVG height in pixels.
    #[prop(default = 300.0)]
    height: f64,
    /// Stroke and dot colour.
    #[prop(default = "#8b5cf6")]
    color: &'static str,
) -> impl IntoView {
    let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = height - MARGIN_TOP - MARGIN_BOTTOM;
    let max = nice_max(data.iter().map(|(_, v)| *v).fold(0.0, f64::max));
    let values: Vec<f64> = data.iter().map(|(_, v)| *v).collect();
    let n = values.len();
    let points = polyline_points(&values, MARGIN_LEFT, MARGIN_TOP, plot_w, plot_h, max);

    view! {
        <svg class="chart chart--line" viewBox=format!("0 0 {WIDTH} {height}") role="img">
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
            <polyline points=points fill="none" stroke=color stroke-width="2" />
            {data
                .into_iter()
                .enumerate()
                .map(|(i, (label, value))| {
                    let x = point_x(i, n, MARGIN_LEFT, plot_w);
                    let y = MARGIN_TOP + plot_h * (1.0 - value / max);
                    view! {
                        <circle cx=format!("{x:.1}") cy=format!("{y:.1}") r="4" fill=color />
                        <text
                            x=format!("{x:.1}")
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polyline_scales_endpoints_into_the_plot() {
        // Two points, max equals the top value: first sits on the floor,
        // second on the ceiling.
        let points = polyline_points(&[0.0, 100.0], 0.0, 0.0, 100.0, 200.0, 100.0);
        assert_eq!(points, "0.0,200.0 100.0,0.0");
    }

    #[test]
    fn single_point_is_centered() {
        let points = polyline_points(&[50.0], 10.0, 0.0, 100.0, 100.0, 100.0);
        assert_eq!(points, "60.0,50.0");
    }

    #[test]
    fn one_pair_per_value() {
        let points = polyline_points(&[1.0, 2.0, 3.0], 0.0, 0.0, 90.0, 90.0, 3.0);
        assert_eq!(points.split(' ').count(), 3);
    }
}
