//! Геометрия SVG графика доходности

use contracts::dashboards::d001_profit::ProfitPoint;

pub const CHART_WIDTH: f64 = 720.0;
pub const CHART_HEIGHT: f64 = 280.0;
pub const CHART_PADDING: f64 = 24.0;

/// Vertical range of the chart; always contains 0 and is never empty.
pub fn value_range(values: &[f64]) -> (f64, f64) {
    let min = values.iter().copied().fold(0.0_f64, f64::min);
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    if (max - min).abs() < f64::EPSILON {
        (min - 1.0, max + 1.0)
    } else {
        (min, max)
    }
}

fn scale(value: f64, (min, max): (f64, f64), height: f64, padding: f64) -> f64 {
    let inner = height - 2.0 * padding;
    padding + (max - value) / (max - min) * inner
}

/// `points` attribute of the series polyline
pub fn polyline_points(points: &[ProfitPoint], width: f64, height: f64, padding: f64) -> String {
    let values: Vec<f64> = points.iter().map(|p| p.rate).collect();
    let range = value_range(&values);
    let inner_width = width - 2.0 * padding;
    let step = if values.len() > 1 {
        inner_width / (values.len() - 1) as f64
    } else {
        0.0
    };

    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = padding + step * i as f64;
            let y = scale(*value, range, height, padding);
            format!("{:.1},{:.1}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// y coordinate of the zero line
pub fn zero_line(points: &[ProfitPoint], height: f64, padding: f64) -> f64 {
    let values: Vec<f64> = points.iter().map(|p| p.rate).collect();
    scale(0.0, value_range(&values), height, padding)
}
