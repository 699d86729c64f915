//! Parallel coordinates over six per-artist metrics.

use super::{draw_title, Chart, SMALL_SIZE};
use crate::axis::{draw_axis, linear_ticks, log_ticks, Orient, Tick};
use crate::canvas::{Anchor, DrawTarget, Mark, Style, TextStyle};
use crate::format::TickFormat;
use crate::scale::{extent, LinearScale, LogScale, PointScale};
use crate::viewport::{Margin, Viewport};
use mcd_data::aggregate::ArtistAggregate;
use mcd_data::parallel::Dimension;

pub const MARGIN: Margin = Margin::new(50.0, 20.0, 60.0, 75.0);
pub const POINT_PADDING: f64 = 0.25;
pub const STROKE: &str = "teal";
pub const STROKE_WIDTH: f64 = 1.0;
pub const OPACITY: f64 = 0.18;
pub const TICK_COUNT: usize = 4;
pub const TITLE: &str = "Parallel Coordinates (Popularity ≥ 80) metrics for Artist";

/// How a dimension's vertical axis is scaled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleKind {
    /// Over the observed extent.
    Linear,
    /// Base-10 log over the observed extent, floored at 1.
    Log,
    /// Linear over a domain known ahead of time.
    LinearFixed { min: f64, max: f64 },
}

pub fn scale_kind(dimension: Dimension) -> ScaleKind {
    match dimension {
        Dimension::ArtistFollowers => ScaleKind::Log,
        Dimension::ExplicitRate => ScaleKind::LinearFixed { min: 0.0, max: 1.0 },
        Dimension::ArtistPopularity
        | Dimension::AvgTrackPopularity
        | Dimension::TrackCount
        | Dimension::AvgTrackDuration => ScaleKind::Linear,
    }
}

pub fn tick_format(dimension: Dimension) -> TickFormat {
    match dimension {
        Dimension::ArtistFollowers => TickFormat::Si,
        Dimension::ExplicitRate => TickFormat::Percent,
        _ => TickFormat::Plain,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DimensionScale {
    Linear(LinearScale),
    Log(LogScale),
}

impl DimensionScale {
    pub fn map(&self, value: f64) -> f64 {
        match self {
            DimensionScale::Linear(s) => s.map(value),
            DimensionScale::Log(s) => s.map(value),
        }
    }

    fn ticks(&self, format: TickFormat) -> Vec<Tick> {
        match self {
            DimensionScale::Linear(s) => linear_ticks(s, TICK_COUNT, format),
            DimensionScale::Log(s) => log_ticks(s, TICK_COUNT, format),
        }
    }
}

pub fn dimension_scale(
    dimension: Dimension,
    data: &[ArtistAggregate],
    size: Viewport,
) -> DimensionScale {
    let range = MARGIN.y_range(size);
    let observed = || extent(data.iter().map(|a| dimension.value(a)));
    match scale_kind(dimension) {
        ScaleKind::LinearFixed { min, max } => {
            DimensionScale::Linear(LinearScale::new((min, max), range))
        }
        ScaleKind::Log => DimensionScale::Log(LogScale::from_extent(observed(), range)),
        ScaleKind::Linear => {
            DimensionScale::Linear(LinearScale::new(observed().unwrap_or((0.0, 1.0)), range))
        }
    }
}

/// Axis x positions in [`Dimension::ALL`] order.
pub fn axis_positions(size: Viewport) -> Vec<f64> {
    let x = PointScale::new(Dimension::ALL.len(), MARGIN.x_range(size), POINT_PADDING);
    (0..Dimension::ALL.len()).map(|i| x.position(i)).collect()
}

/// One polyline per artist, vertices in dimension order.
pub fn polylines(data: &[ArtistAggregate], size: Viewport) -> Vec<Vec<(f64, f64)>> {
    let xs = axis_positions(size);
    let scales: Vec<DimensionScale> = Dimension::ALL
        .iter()
        .map(|d| dimension_scale(*d, data, size))
        .collect();
    data.iter()
        .map(|artist| {
            Dimension::ALL
                .iter()
                .zip(&xs)
                .zip(&scales)
                .map(|((dimension, x), scale)| (*x, scale.map(dimension.value(artist))))
                .collect()
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelChart;

impl Chart for ParallelChart {
    type Data = Vec<ArtistAggregate>;

    fn target_id(&self) -> &'static str {
        "parallel-svg"
    }

    fn render(&mut self, data: &Self::Data, size: Viewport, target: &mut dyn DrawTarget) {
        for points in polylines(data, size) {
            target.draw(Mark::Polyline {
                points,
                style: Style::stroke(STROKE, STROKE_WIDTH).with_opacity(OPACITY),
            });
        }

        let y_range = MARGIN.y_range(size);
        for (dimension, x) in Dimension::ALL.iter().zip(axis_positions(size)) {
            let scale = dimension_scale(*dimension, data, size);
            draw_axis(
                target,
                Orient::Left,
                x,
                y_range,
                &scale.ticks(tick_format(*dimension)),
            );
            target.draw(Mark::Text {
                x,
                y: size.height - 20.0,
                content: dimension.label().to_string(),
                style: TextStyle::new(SMALL_SIZE, Anchor::Middle),
            });
        }

        draw_title(target, size, MARGIN.top / 2.0, TITLE);
    }
}
