//! Bar Chart
//!
//! Daily waste chart: bar geometry, zero-based axis ticks, SVG output,
//! and a registry that keeps one chart per canvas.

use std::collections::HashMap;

use crate::models::DailyGraphPoint;

pub const DATASET_LABEL: &str = "1日あたりの廃棄重量 (g)";
pub const Y_AXIS_TITLE: &str = "廃棄量 (グラム)";
pub const X_AXIS_TITLE: &str = "曜日";

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 300.0;
const PAD_LEFT: f64 = 64.0;
const PAD_RIGHT: f64 = 16.0;
const PAD_TOP: f64 = 28.0;
const PAD_BOTTOM: f64 = 52.0;
const TICK_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    /// Height as a fraction of the axis maximum, in `0.0..=1.0`
    pub ratio: f64,
}

/// Bars in server order; negative or non-finite values count as zero
pub fn layout_bars(points: &[DailyGraphPoint]) -> (Vec<Bar>, f64) {
    let values: Vec<f64> = points
        .iter()
        .map(|p| if p.total_grams.is_finite() { p.total_grams.max(0.0) } else { 0.0 })
        .collect();
    let axis_max = nice_ceiling(values.iter().cloned().fold(0.0, f64::max));
    let bars = points
        .iter()
        .zip(values)
        .map(|(point, value)| Bar { label: point.day.clone(), value, ratio: value / axis_max })
        .collect();
    (bars, axis_max)
}

/// Smallest 1/2/5 x 10^n at or above `max` (1 when `max` is zero)
pub fn nice_ceiling(max: f64) -> f64 {
    if max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powi(max.log10().floor() as i32);
    [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|step| step * magnitude)
        .find(|candidate| *candidate >= max)
        .unwrap_or(10.0 * magnitude)
}

/// Evenly spaced ticks from 0 to `axis_max`
pub fn axis_ticks(axis_max: f64) -> Vec<f64> {
    (0..=TICK_COUNT)
        .map(|i| axis_max * i as f64 / TICK_COUNT as f64)
        .collect()
}

/// One rendered chart bound to a canvas
#[derive(Debug, Clone, PartialEq)]
pub struct ChartInstance {
    pub id: u64,
    pub canvas_id: String,
    pub bars: Vec<Bar>,
    pub axis_max: f64,
}

impl ChartInstance {
    pub fn to_svg(&self) -> String {
        let plot_w = WIDTH - PAD_LEFT - PAD_RIGHT;
        let plot_h = HEIGHT - PAD_TOP - PAD_BOTTOM;
        let base_y = PAD_TOP + plot_h;
        let mut svg = format!(
            r#"<svg viewBox="0 0 {w} {h}" role="img" aria-label="{label}" data-chart-id="{id}">"#,
            w = WIDTH,
            h = HEIGHT,
            label = escape(DATASET_LABEL),
            id = self.id
        );

        for tick in axis_ticks(self.axis_max) {
            let y = base_y - plot_h * tick / self.axis_max;
            svg.push_str(&format!(
                r#"<line class="chart-grid" x1="{x1}" y1="{y:.1}" x2="{x2}" y2="{y:.1}"/><text class="chart-label" x="{tx}" y="{ty:.1}" text-anchor="end">{v}</text>"#,
                x1 = PAD_LEFT,
                x2 = WIDTH - PAD_RIGHT,
                tx = PAD_LEFT - 8.0,
                ty = y + 4.0,
                v = format_tick(tick)
            ));
        }

        if !self.bars.is_empty() {
            let slot = plot_w / self.bars.len() as f64;
            let bar_w = slot * 0.6;
            for (i, bar) in self.bars.iter().enumerate() {
                let h = plot_h * bar.ratio;
                let x = PAD_LEFT + slot * i as f64 + (slot - bar_w) / 2.0;
                svg.push_str(&format!(
                    r#"<rect class="chart-bar" x="{x:.1}" y="{y:.1}" width="{bw:.1}" height="{h:.1}"><title>{label}: {v} g</title></rect><text class="chart-label" x="{lx:.1}" y="{ly:.1}" text-anchor="middle">{label}</text>"#,
                    y = base_y - h,
                    bw = bar_w,
                    label = escape(&bar.label),
                    v = bar.value,
                    lx = x + bar_w / 2.0,
                    ly = base_y + 18.0
                ));
            }
        }

        svg.push_str(&format!(
            r#"<text class="chart-axis-title" x="{x}" y="{y}" text-anchor="middle">{t}</text>"#,
            x = PAD_LEFT + plot_w / 2.0,
            y = HEIGHT - 8.0,
            t = escape(X_AXIS_TITLE)
        ));
        svg.push_str(&format!(
            r#"<text class="chart-axis-title" x="14" y="{y}" text-anchor="middle" transform="rotate(-90 14 {y})">{t}</text>"#,
            y = PAD_TOP + plot_h / 2.0,
            t = escape(Y_AXIS_TITLE)
        ));
        svg.push_str("</svg>");
        svg
    }
}

fn format_tick(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{:.1}", rounded)
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Live charts by canvas id
#[derive(Debug, Default)]
pub struct ChartRegistry {
    charts: HashMap<String, ChartInstance>,
    next_id: u64,
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever chart is bound to `canvas_id` with a fresh one
    pub fn render(&mut self, canvas_id: &str, points: &[DailyGraphPoint]) -> ChartInstance {
        self.destroy(canvas_id);
        self.next_id += 1;
        let (bars, axis_max) = layout_bars(points);
        let chart = ChartInstance { id: self.next_id, canvas_id: canvas_id.to_string(), bars, axis_max };
        self.charts.insert(canvas_id.to_string(), chart.clone());
        chart
    }

    pub fn destroy(&mut self, canvas_id: &str) -> bool {
        let existed = self.charts.remove(canvas_id).is_some();
        if existed {
            tracing::debug!(%canvas_id, "destroyed previous chart");
        }
        existed
    }

    #[cfg(test)]
    pub fn get(&self, canvas_id: &str) -> Option<&ChartInstance> {
        self.charts.get(canvas_id)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.charts.len()
    }
}
