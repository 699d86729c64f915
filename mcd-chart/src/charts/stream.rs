//! Streamgraph of mean track duration per year for a fixed artist list.

use super::{draw_title, draw_x_label, draw_y_label, Chart};
use crate::axis::{draw_axis, linear_ticks, Orient};
use crate::canvas::{Anchor, DrawTarget, Mark, Style, TextStyle};
use crate::color;
use crate::format::TickFormat;
use crate::scale::{extent, LinearScale};
use crate::viewport::{Margin, Viewport};
use mcd_data::stream::{stack, Layer, StreamData};

pub const MARGIN: Margin = Margin::new(50.0, 160.0, 60.0, 70.0);
pub const OPACITY: f64 = 0.9;
pub const TITLE: &str = "Streamgraph (Avg Track Duration) for Selected Top Artists";
pub const X_LABEL: &str = "Release Year (2009–2025)";
pub const Y_LABEL: &str = "Stacked Avg Track Duration (min)";
pub const LEGEND_TITLE: &str = "Artists";

const LEGEND_ROW: f64 = 16.0;
const LEGEND_SWATCH: f64 = 12.0;
const LEGEND_TEXT: f64 = 12.8;

pub fn scales(data: &StreamData, layers: &[Layer], size: Viewport) -> (LinearScale, LinearScale) {
    let years = extent(data.rows.iter().map(|r| r.year as f64)).unwrap_or((0.0, 1.0));
    let x = LinearScale::new(years, MARGIN.x_range(size));
    let y_min = layers
        .iter()
        .flat_map(|l| l.points.iter().map(|p| p.y0))
        .fold(f64::INFINITY, f64::min);
    let y_max = layers
        .iter()
        .flat_map(|l| l.points.iter().map(|p| p.y1))
        .fold(f64::NEG_INFINITY, f64::max);
    let y_domain = if y_min.is_finite() && y_max.is_finite() {
        (y_min, y_max)
    } else {
        (0.0, 1.0)
    };
    let y = LinearScale::new(y_domain, MARGIN.y_range(size));
    (x, y)
}

/// Closed outline of one band: the upper edge left to right, then the lower
/// edge back.
pub fn band_outline(layer: &Layer, x: &LinearScale, y: &LinearScale) -> Vec<(f64, f64)> {
    let upper = layer
        .points
        .iter()
        .map(|p| (x.map(p.year as f64), y.map(p.y1)));
    let lower = layer
        .points
        .iter()
        .rev()
        .map(|p| (x.map(p.year as f64), y.map(p.y0)));
    upper.chain(lower).collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StreamChart;

impl StreamChart {
    fn draw_legend(&self, keys: &[String], size: Viewport, target: &mut dyn DrawTarget) {
        let legend_x = size.width - MARGIN.right + 12.0;
        let legend_y = size.height - MARGIN.bottom - 20.0 - keys.len() as f64 * LEGEND_ROW;
        target.draw(Mark::Text {
            x: legend_x,
            y: legend_y - 8.0,
            content: LEGEND_TITLE.to_string(),
            style: TextStyle::new(LEGEND_TEXT, Anchor::Start).bold(),
        });
        for (i, key) in keys.iter().enumerate() {
            let row_y = legend_y + i as f64 * LEGEND_ROW;
            target.draw(Mark::Rect {
                x: legend_x,
                y: row_y,
                width: LEGEND_SWATCH,
                height: LEGEND_SWATCH,
                style: Style::fill(color::categorical(i)),
            });
            target.draw(Mark::Text {
                x: legend_x + 18.0,
                y: row_y + 10.0,
                content: key.clone(),
                style: TextStyle::new(LEGEND_TEXT, Anchor::Start),
            });
        }
    }
}

impl Chart for StreamChart {
    type Data = StreamData;

    fn target_id(&self) -> &'static str {
        "stream-svg"
    }

    fn render(&mut self, data: &Self::Data, size: Viewport, target: &mut dyn DrawTarget) {
        let layers = stack(data);
        let (x, y) = scales(data, &layers, size);

        for (i, layer) in layers.iter().enumerate() {
            target.draw(Mark::Polygon {
                points: band_outline(layer, &x, &y),
                style: Style::fill(color::categorical(i)).with_opacity(OPACITY),
            });
        }

        let y_range = MARGIN.y_range(size);
        draw_axis(
            target,
            Orient::Bottom,
            y_range.0,
            MARGIN.x_range(size),
            &linear_ticks(&x, 9, TickFormat::Integer),
        );
        draw_axis(
            target,
            Orient::Left,
            MARGIN.left,
            y_range,
            &linear_ticks(&y, 5, TickFormat::Plain),
        );
        draw_x_label(target, size.width / 2.0, size.height - 12.0, X_LABEL);
        draw_y_label(target, size.height / 2.0, 18.0, Y_LABEL);
        draw_title(target, size, MARGIN.top / 2.0, TITLE);

        self.draw_legend(&data.keys, size, target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::SvgCanvas;
    use mcd_data::stream::YearWide;

    fn sample() -> StreamData {
        StreamData {
            keys: vec!["A".into(), "B".into()],
            rows: vec![
                YearWide { year: 2009, values: vec![1.0, 1.0] },
                YearWide { year: 2010, values: vec![2.0, 2.0] },
            ],
        }
    }

    #[test]
    fn outline_closes_back_along_the_baseline() {
        let data = sample();
        let layers = stack(&data);
        // x range [70, 240], y range [350, 50], y domain [0, 4]
        let size = Viewport::new(400.0, 410.0);
        let (x, y) = scales(&data, &layers, size);
        let outline = band_outline(&layers[0], &x, &y);
        assert_eq!(outline.len(), 4);
        assert_eq!(outline[0], (70.0, y.map(1.0)));
        assert_eq!(outline[1], (240.0, y.map(2.0)));
        assert_eq!(outline[2], (240.0, 350.0));
        assert_eq!(outline[3], (70.0, 350.0));
        let top = band_outline(&layers[1], &x, &y);
        assert_eq!(top[1], (240.0, 50.0));
    }

    #[test]
    fn render_draws_a_band_and_legend_entry_per_artist() {
        let data = sample();
        let mut canvas = SvgCanvas::new("stream-svg");
        StreamChart.render(&data, Viewport::new(400.0, 410.0), &mut canvas);
        let bands = canvas
            .marks()
            .iter()
            .filter(|m| matches!(m, Mark::Polygon { .. }))
            .count();
        assert_eq!(bands, 2);
        assert!(canvas.marks().iter().any(|m| matches!(
            m,
            Mark::Text { content, .. } if content == LEGEND_TITLE
        )));
    }
}
