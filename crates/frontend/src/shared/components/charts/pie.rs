use super::PALETTE;
use leptos::prelude::*;
use std::f64::consts::PI;

const SIZE: f64 = 300.0;
const RADIUS: f64 = 100.0;

/// (start, sweep) spans in degrees for each slice, proportional to value.
/// Starts accumulate in input order from 12 o'clock.
pub(crate) fn slice_spans(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut start = 0.0;
    values
        .iter()
        .map(|v| {
            let sweep = v / total * 360.0;
            let span = (start, sweep);
            start += sweep;
            span
        })
        .collect()
}

/// Point on the circle at `angle_deg`, measured clockwise from 12 o'clock.
fn polar(cx: f64, cy: f64, r: f64, angle_deg: f64) -> (f64, f64) {
    let rad = (angle_deg - 90.0) * PI / 180.0;
    (cx + r * rad.cos(), cy + r * rad.sin())
}

/// Closed wedge path starting at `start` and spanning `sweep` degrees.
pub(crate) fn arc_path(cx: f64, cy: f64, r: f64, start: f64, sweep: f64) -> String {
    let (x0, y0) = polar(cx, cy, r, start);
    let (x1, y1) = polar(cx, cy, r, start + sweep);
    let large_arc = i32::from(sweep > 180.0);
    format!("M {cx:.2} {cy:.2} L {x0:.2} {y0:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {x1:.2} {y1:.2} Z")
}

/// Pie chart with "{name} {pct}%" labels just outside each slice.
#[component]
pub fn PieChart(
    /// (label, value) pairs, one slice each.
    data: Vec<(String, f64)>,
) -> impl IntoView {
    let cx = SIZE / 2.0;
    let cy = SIZE / 2.0;
    let values: Vec<f64> = data.iter().map(|(_, v)| *v).collect();
    let total: f64 = values.iter().sum();
    let spans = slice_spans(&values);

    view! {
        <svg class="chart chart--pie" viewBox=format!("0 0 {SIZE} {SIZE}") role="img">
            {data
                .into_iter()
                .zip(spans)
                .enumerate()
                .map(|(i, ((name, value), (start, sweep)))| {
                    let fill = PALETTE[i % PALETTE.len()];
                    let pct = if total > 0.0 { value / total * 100.0 } else { 0.0 };
                    let (lx, ly) = polar(cx, cy, RADIUS + 22.0, start + sweep / 2.0);
                    let anchor = if lx < cx - 1.0 {
                        "end"
                    } else if lx > cx + 1.0 {
                        "start"
                    } else {
                        "middle"
                    };
                    view! {
                        <path d=arc_path(cx, cy, RADIUS, start, sweep) fill=fill />
                        <text
                            x=format!("{lx:.1}")
                            y=format!("{ly:.1}")
                            text-anchor=anchor
                            class="chart__label"
                        >
                            {format!("{} {:.0}%", name, pct)}
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
    fn spans_are_proportional_and_contiguous() {
        // The category fixture shape: 42 + 28 + 18 + 12 = 100.
        let spans = slice_spans(&[42.0, 28.0, 18.0, 12.0]);
        let expected_sweeps = [151.2, 100.8, 64.8, 43.2];
        for ((_, sweep), expected) in spans.iter().zip(expected_sweeps) {
            assert!((sweep - expected).abs() < 1e-9);
        }

        let mut expected_start = 0.0;
        for (start, sweep) in &spans {
            assert!((start - expected_start).abs() < 1e-9);
            expected_start += sweep;
        }
        assert!((expected_start - 360.0).abs() < 1e-9);
    }

    #[test]
    fn zero_total_yields_no_slices() {
        assert!(slice_spans(&[]).is_empty());
        assert!(slice_spans(&[0.0, 0.0]).is_empty());
    }

    #[test]
    fn arc_flag_flips_past_half_circle() {
        let small = arc_path(150.0, 150.0, 100.0, 0.0, 90.0);
        let large = arc_path(150.0, 150.0, 100.0, 0.0, 270.0);
        assert!(small.contains(" 0 0 1 "));
        assert!(large.contains(" 0 1 1 "));
    }

    #[test]
    fn wedge_starts_at_twelve_oclock() {
        let path = arc_path(150.0, 150.0, 100.0, 0.0, 90.0);
        // First line-to lands at the top of the circle.
        assert!(path.starts_with("M 150.00 150.00 L 150.00 50.00 A"));
    }
}
