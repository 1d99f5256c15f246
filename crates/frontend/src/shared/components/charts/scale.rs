//! Pure axis helpers shared by the bar and line charts.

/// Rounds the data maximum up to a clean axis ceiling so gridlines land on
/// round numbers (334 -> 350, 67000 -> 70000).
pub fn nice_max(max: f64) -> f64 {
    if max <= 0.0 {
        return 1.0;
    }
    let exponent = max.log10().floor() as i32;
    let step = 10f64.powi(exponent) / 2.0;
    (max / step).ceil() * step
}

/// Evenly spaced tick values from 0 to `top`, inclusive.
pub fn ticks(top: f64, count: usize) -> Vec<f64> {
    (0..=count)
        .map(|i| top * i as f64 / count as f64)
        .collect()
}

/// Compact tick label: thousands collapse to "k" (60000 -> "60k").
pub fn tick_label(value: f64) -> String {
    if value >= 1000.0 {
        let k = value / 1000.0;
        if (k - k.round()).abs() < 1e-9 {
            format!("{}k", k.round() as i64)
        } else {
            format!("{k:.1}k")
        }
    } else if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_max_rounds_up_to_half_magnitudes() {
        assert_eq!(nice_max(67000.0), 70000.0);
        assert_eq!(nice_max(334.0), 350.0);
        assert_eq!(nice_max(45.0), 45.0);
        assert_eq!(nice_max(46.0), 50.0);
    }

    #[test]
    fn nice_max_never_returns_zero() {
        assert_eq!(nice_max(0.0), 1.0);
        assert_eq!(nice_max(-5.0), 1.0);
    }

    #[test]
    fn ticks_span_zero_to_top() {
        assert_eq!(ticks(100.0, 4), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn tick_labels_collapse_thousands() {
        assert_eq!(tick_label(60000.0), "60k");
        assert_eq!(tick_label(17500.0), "17.5k");
        assert_eq!(tick_label(350.0), "350");
        assert_eq!(tick_label(87.5), "87.5");
        assert_eq!(tick_label(0.0), "0");
    }
}
