//! Top-artist scatter plot: artist popularity vs. average track popularity,
//! colored by explicit-content rate.

use super::{draw_title, draw_x_label, draw_y_label, Chart, SMALL_SIZE};
use crate::axis::{draw_axis, linear_ticks, Orient};
use crate::canvas::{Anchor, DrawTarget, Mark, Style, TextStyle};
use crate::color;
use crate::format::TickFormat;
use crate::scale::{extent, LinearScale};
use crate::viewport::{Margin, Viewport};
use mcd_data::scatter::ScatterArtist;
use rand::Rng;

pub const MARGIN: Margin = Margin::new(50.0, 20.0, 60.0, 75.0);
/// Lower bound of the x domain, just under the popularity threshold.
pub const X_DOMAIN_FLOOR: f64 = 78.0;
/// Total jitter span in pixels; each axis moves by up to half of it.
pub const JITTER_PX: f64 = 6.0;
pub const RADIUS: f64 = 3.5;
pub const OPACITY: f64 = 0.9;
pub const STROKE: &str = "#1f3b73";
pub const STROKE_WIDTH: f64 = 0.4;
pub const TITLE: &str = "Top Artist Popularity (>= 80) vs Avg Track Popularity";
pub const X_LABEL: &str = "Artist Popularity";
pub const Y_LABEL: &str = "Average Track Popularity (per artist)";

const LEGEND_WIDTH: f64 = 120.0;
const LEGEND_HEIGHT: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub artist: String,
    pub cx: f64,
    pub cy: f64,
    pub fill: String,
}

pub fn scales(data: &[ScatterArtist], size: Viewport) -> (LinearScale, LinearScale) {
    let x_max = data
        .iter()
        .map(|a| a.artist_popularity)
        .fold(f64::NEG_INFINITY, f64::max);
    let x_max = if x_max.is_finite() { x_max } else { X_DOMAIN_FLOOR };
    let x = LinearScale::new((X_DOMAIN_FLOOR, x_max), MARGIN.x_range(size));
    let y_domain = extent(data.iter().map(|a| a.avg_track_popularity)).unwrap_or((0.0, 1.0));
    let y = LinearScale::new(y_domain, MARGIN.y_range(size));
    (x, y)
}

/// Point positions, each displaced by `(u - 0.5) * jitter` per axis with `u`
/// drawn uniformly from `[0, 1)`. A zero `jitter` never touches `rng`.
pub fn scatter_points<R: Rng>(
    data: &[ScatterArtist],
    size: Viewport,
    jitter: f64,
    rng: &mut R,
) -> Vec<ScatterPoint> {
    let (x, y) = scales(data, size);
    let mut offset = || {
        if jitter == 0.0 {
            0.0
        } else {
            (rng.random::<f64>() - 0.5) * jitter
        }
    };
    data.iter()
        .map(|artist| {
            let cx = x.map(artist.artist_popularity) + offset();
            let cy = y.map(artist.avg_track_popularity) + offset();
            ScatterPoint {
                artist: artist.artist.clone(),
                cx,
                cy,
                fill: color::explicit_rate(artist.explicit_rate),
            }
        })
        .collect()
}

/// Scatter chart with an injected jitter source.
pub struct ScatterChart<R: Rng> {
    rng: R,
    jitter: f64,
}

impl<R: Rng> ScatterChart<R> {
    pub fn new(rng: R) -> Self {
        ScatterChart {
            rng,
            jitter: JITTER_PX,
        }
    }

    pub fn with_jitter(rng: R, jitter: f64) -> Self {
        ScatterChart { rng, jitter }
    }

    fn draw_legend(&self, size: Viewport, target: &mut dyn DrawTarget) {
        let legend_x = size.width - MARGIN.right - LEGEND_WIDTH;
        let legend_y = size.height - MARGIN.bottom - LEGEND_HEIGHT - 30.0;
        let gradient_id = format!("{}-explicit-rate", target.id());

        let stops = (0..=10)
            .map(|i| {
                let t = i as f64 / 10.0;
                (t, color::explicit_rate(t))
            })
            .collect();
        target.draw(Mark::LinearGradient {
            id: gradient_id.clone(),
            stops,
        });
        target.draw(Mark::Rect {
            x: legend_x,
            y: legend_y,
            width: LEGEND_WIDTH,
            height: LEGEND_HEIGHT,
            style: Style::fill(format!("url(#{})", gradient_id)).with_stroke("#999", 1.0),
        });
        target.draw(Mark::Text {
            x: legend_x - 25.0,
            y: legend_y + LEGEND_HEIGHT + 14.0,
            content: "0% explicit".to_string(),
            style: TextStyle::new(SMALL_SIZE, Anchor::Start),
        });
        target.draw(Mark::Text {
            x: legend_x + LEGEND_WIDTH + 20.0,
            y: legend_y + LEGEND_HEIGHT + 14.0,
            content: "100% explicit".to_string(),
            style: TextStyle::new(SMALL_SIZE, Anchor::End),
        });
        target.draw(Mark::Text {
            x: legend_x + LEGEND_WIDTH / 2.0,
            y: legend_y - 6.0,
            content: "Explicit Content Rate".to_string(),
            style: TextStyle::new(12.8, Anchor::Middle),
        });
    }
}

impl<R: Rng> Chart for ScatterChart<R> {
    type Data = Vec<ScatterArtist>;

    fn target_id(&self) -> &'static str {
        "scatter-svg"
    }

    fn render(&mut self, data: &Self::Data, size: Viewport, target: &mut dyn DrawTarget) {
        let (x, y) = scales(data, size);
        let y_range = MARGIN.y_range(size);

        draw_axis(
            target,
            Orient::Bottom,
            y_range.0,
            MARGIN.x_range(size),
            &linear_ticks(&x, 10, TickFormat::Plain),
        );
        draw_axis(
            target,
            Orient::Left,
            MARGIN.left,
            y_range,
            &linear_ticks(&y, 10, TickFormat::Plain),
        );
        draw_x_label(target, size.width / 2.0, size.height - 12.0, X_LABEL);
        draw_y_label(target, size.height / 2.0, 40.0, Y_LABEL);
        draw_title(target, size, MARGIN.top / 2.0, TITLE);

        for point in scatter_points(data, size, self.jitter, &mut self.rng) {
            target.draw(Mark::Circle {
                cx: point.cx,
                cy: point.cy,
                r: RADIUS,
                style: Style::fill(point.fill)
                    .with_opacity(OPACITY)
                    .with_stroke(STROKE, STROKE_WIDTH),
            });
        }

        self.draw_legend(size, target);
    }
}
