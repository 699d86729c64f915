//! Popularity distribution bar chart.

use super::{draw_title, draw_x_label, draw_y_label, Chart};
use crate::axis::{band_ticks, draw_axis, linear_ticks, Orient};
use crate::canvas::{DrawTarget, Mark, Style};
use crate::format::TickFormat;
use crate::scale::{BandScale, LinearScale};
use crate::viewport::{Margin, Viewport};
use mcd_data::bar::Bucket;

pub const MARGIN: Margin = Margin::new(40.0, 20.0, 80.0, 60.0);
pub const BAND_PADDING: f64 = 0.1;
pub const FILL: &str = "lightgrey";
pub const TITLE: &str = "Spotify Artist Popularity Distribution (2009 - 2025)";
pub const X_LABEL: &str = "Artist Popularity (10-point ranges)";
pub const Y_LABEL: &str = "Number of Artists (unique artists)";

/// Pixel rectangle for one bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Scales for a set of buckets. The y domain is `[0, max count]`, widened to
/// `[0, 1]` when every bucket is empty so bars sit on the axis.
pub fn scales(buckets: &[Bucket], size: Viewport) -> (BandScale, LinearScale) {
    let x = BandScale::new(
        buckets.iter().map(|b| b.label.clone()).collect(),
        MARGIN.x_range(size),
        BAND_PADDING,
    );
    let y_max = buckets.iter().map(|b| b.count).max().unwrap_or(0).max(1);
    let y = LinearScale::new((0.0, y_max as f64), MARGIN.y_range(size));
    (x, y)
}

pub fn bar_geometry(buckets: &[Bucket], size: Viewport) -> Vec<BarRect> {
    let (x, y) = scales(buckets, size);
    buckets
        .iter()
        .filter_map(|bucket| {
            let left = x.position(&bucket.label)?;
            let top = y.map(bucket.count as f64);
            Some(BarRect {
                label: bucket.label.clone(),
                x: left,
                y: top,
                width: x.bandwidth(),
                height: (y.map(0.0) - top).abs(),
            })
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BarChart;

impl Chart for BarChart {
    type Data = Vec<Bucket>;

    fn target_id(&self) -> &'static str {
        "bar-svg"
    }

    fn render(&mut self, data: &Self::Data, size: Viewport, target: &mut dyn DrawTarget) {
        let (x, y) = scales(data, size);
        let x_range = MARGIN.x_range(size);
        let y_range = MARGIN.y_range(size);

        draw_axis(target, Orient::Bottom, y_range.0, x_range, &band_ticks(&x));
        draw_axis(
            target,
            Orient::Left,
            MARGIN.left,
            y_range,
            &linear_ticks(&y, 10, TickFormat::Plain),
        );
        draw_y_label(target, size.height / 2.0, MARGIN.left / 2.2, Y_LABEL);
        draw_x_label(target, size.width / 2.0, size.height - 40.0, X_LABEL);

        for bar in bar_geometry(data, size) {
            target.draw(Mark::Rect {
                x: bar.x,
                y: bar.y,
                width: bar.width,
                height: bar.height,
                style: Style::fill(FILL),
            });
        }

        draw_title(target, size, MARGIN.top / 2.0, TITLE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::SvgCanvas;
    use mcd_data::bar::{bin_values, BinSpec};

    #[test]
    fn tallest_bar_reaches_the_top_margin() {
        let buckets = bin_values(vec![5.0, 6.0, 55.0, 100.0], &BinSpec::default());
        let size = Viewport::new(800.0, 400.0);
        let bars = bar_geometry(&buckets, size);
        assert_eq!(bars.len(), 10);

        let first = &bars[0];
        assert_eq!(first.label, "0-10");
        assert_eq!(first.y, MARGIN.top);
        assert_eq!(first.height, 400.0 - 80.0 - 40.0);

        let empty = &bars[1];
        assert_eq!(empty.height, 0.0);
        assert_eq!(empty.y, 400.0 - MARGIN.bottom);

        let half = &bars[9];
        assert_eq!(half.height, (400.0 - 80.0 - 40.0) / 2.0);
    }

    #[test]
    fn all_empty_buckets_draw_flat_bars() {
        let buckets = bin_values(Vec::<f64>::new(), &BinSpec::default());
        let bars = bar_geometry(&buckets, Viewport::new(800.0, 400.0));
        assert!(bars.iter().all(|b| b.height == 0.0));
    }

    #[test]
    fn render_draws_one_rect_per_bucket_and_the_title() {
        let buckets = bin_values(vec![12.0, 88.0], &BinSpec::default());
        let mut canvas = SvgCanvas::new("bar-svg");
        BarChart.render(&buckets, Viewport::new(800.0, 400.0), &mut canvas);
        let rects = canvas
            .marks()
            .iter()
            .filter(|m| matches!(m, Mark::Rect { .. }))
            .count();
        assert_eq!(rects, 10);
        assert!(canvas.marks().iter().any(|m| matches!(
            m,
            Mark::Text { content, .. } if content == TITLE
        )));
    }
}
