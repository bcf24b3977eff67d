//! Vitals line chart.
//!
//! [`LineChart`] is an explicit plot model built from a [`VitalsSeries`]: one point per pair, in
//! series order, scores untouched. [`LineChart::render_svg`] draws it with plotters into an SVG
//! string that the page embeds inline. Nothing is written to disk.

use crate::RenderError;
use plotters::prelude::*;
use pmp_core::VitalsSeries;
use std::ops::Range;

const CHART_WIDTH: u32 = 640;
const CHART_HEIGHT: u32 = 400;
const MARKER_RADIUS: i32 = 4;
const LINE_COLOUR: RGBColor = RGBColor(31, 119, 180);
const FALLBACK_Y_RANGE: Range<f64> = 0.0..100.0;

/// One plotted point: x is the category label, y the score.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub score: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineChart {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    points: Vec<ChartPoint>,
}

impl LineChart {
    /// The "Patient Response Over Time" chart for `series`.
    pub fn from_series(series: &VitalsSeries) -> Self {
        Self {
            title: "Patient Response Over Time".into(),
            x_desc: "Time".into(),
            y_desc: "Response Score".into(),
            points: series
                .points()
                .iter()
                .map(|p| ChartPoint {
                    label: p.label.clone(),
                    score: p.score,
                })
                .collect(),
        }
    }

    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }

    /// Y axis range with a margin around the data, so markers never sit on the frame.
    fn y_range(&self) -> Range<f64> {
        let mut scores = self.points.iter().map(|p| p.score).filter(|s| s.is_finite());
        let Some(first) = scores.next() else {
            return FALLBACK_Y_RANGE;
        };
        let (min, max) = scores.fold((first, first), |(lo, hi), s| (lo.min(s), hi.max(s)));

        // Scaled before subtracting so scores near f64::MAX cannot overflow the span.
        let pad = if max > min {
            max * 0.1 - min * 0.1
        } else {
            (max.abs() * 0.1).max(1.0)
        };
        let range = (min - pad)..(max + pad);

        // plotters never finishes laying out key points on an infinite or empty span.
        let span = range.end - range.start;
        if span.is_finite() && span > 0.0 {
            range
        } else {
            FALLBACK_Y_RANGE
        }
    }

    /// Draw the chart as a standalone SVG document.
    pub fn render_svg(&self) -> Result<String, RenderError> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (CHART_WIDTH, CHART_HEIGHT))
                .into_drawing_area();
            root.fill(&WHITE).map_err(chart_error)?;

            let categories = self.points.len().max(1) as i32;
            let mut chart = ChartBuilder::on(&root)
                .caption(&self.title, ("sans-serif", 20))
                .margin(12)
                .x_label_area_size(40)
                .y_label_area_size(50)
                .build_cartesian_2d((0..categories).into_segmented(), self.y_range())
                .map_err(chart_error)?;

            let label_for = |value: &SegmentValue<i32>| match value {
                SegmentValue::CenterOf(i) => usize::try_from(*i)
                    .ok()
                    .and_then(|i| self.points.get(i))
                    .map(|p| p.label.clone())
                    .unwrap_or_default(),
                _ => String::new(),
            };

            chart
                .configure_mesh()
                .disable_x_mesh()
                .x_labels(self.points.len().max(1))
                .x_label_formatter(&label_for)
                .x_desc(self.x_desc.as_str())
                .y_desc(self.y_desc.as_str())
                .draw()
                .map_err(chart_error)?;

            let coords: Vec<(SegmentValue<i32>, f64)> = self
                .points
                .iter()
                .enumerate()
                .map(|(i, p)| (SegmentValue::CenterOf(i as i32), p.score))
                .collect();

            chart
                .draw_series(LineSeries::new(coords.iter().cloned(), &LINE_COLOUR))
                .map_err(chart_error)?;
            chart
                .draw_series(
                    coords
                        .iter()
                        .map(|c| Circle::new(c.clone(), MARKER_RADIUS, LINE_COLOUR.filled())),
                )
                .map_err(chart_error)?;

            root.present().map_err(chart_error)?;
        }

        Ok(svg)
    }
}

fn chart_error(e: impl std::fmt::Display) -> RenderError {
    RenderError::Chart(e.to_string())
}
