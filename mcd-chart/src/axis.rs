//! Bottom and left axes.

use crate::canvas::{Anchor, DrawTarget, Mark, Style, TextStyle};
use crate::format::TickFormat;
use crate::scale::{BandScale, LinearScale, LogScale};

const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;
const LABEL_SIZE: f64 = 10.0;
const AXIS_COLOR: &str = "currentColor";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

/// A labelled tick at a pixel position along the axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

pub fn linear_ticks(scale: &LinearScale, count: usize, format: TickFormat) -> Vec<Tick> {
    scale
        .ticks(count)
        .into_iter()
        .map(|v| Tick {
            position: scale.map(v),
            label: format.apply(v),
        })
        .collect()
}

pub fn log_ticks(scale: &LogScale, count: usize, format: TickFormat) -> Vec<Tick> {
    scale
        .ticks(count)
        .into_iter()
        .map(|v| Tick {
            position: scale.map(v),
            label: format.apply(v),
        })
        .collect()
}

/// One tick per band, centred.
pub fn band_ticks(scale: &BandScale) -> Vec<Tick> {
    scale
        .domain()
        .iter()
        .filter_map(|key| {
            scale.position(key).map(|x| Tick {
                position: x + scale.bandwidth() / 2.0,
                label: key.clone(),
            })
        })
        .collect()
}

/// Draw an axis line across `range` at `offset` (a y for bottom axes, an x for
/// left axes), with tick marks and labels.
pub fn draw_axis(
    target: &mut dyn DrawTarget,
    orient: Orient,
    offset: f64,
    range: (f64, f64),
    ticks: &[Tick],
) {
    let line = Style::stroke(AXIS_COLOR, 1.0);
    match orient {
        Orient::Bottom => {
            target.draw(Mark::Line {
                x1: range.0,
                y1: offset,
                x2: range.1,
                y2: offset,
                style: line.clone(),
            });
            for tick in ticks {
                target.draw(Mark::Line {
                    x1: tick.position,
                    y1: offset,
                    x2: tick.position,
                    y2: offset + TICK_SIZE,
                    style: line.clone(),
                });
                target.draw(Mark::Text {
                    x: tick.position,
                    y: offset + TICK_SIZE + TICK_PADDING + LABEL_SIZE,
                    content: tick.label.clone(),
                    style: TextStyle::new(LABEL_SIZE, Anchor::Middle),
                });
            }
        }
        Orient::Left => {
            target.draw(Mark::Line {
                x1: offset,
                y1: range.0,
                x2: offset,
                y2: range.1,
                style: line.clone(),
            });
            for tick in ticks {
                target.draw(Mark::Line {
                    x1: offset - TICK_SIZE,
                    y1: tick.position,
                    x2: offset,
                    y2: tick.position,
                    style: line.clone(),
                });
                target.draw(Mark::Text {
                    x: offset - TICK_SIZE - TICK_PADDING,
                    y: tick.position + LABEL_SIZE / 3.0,
                    content: tick.label.clone(),
                    style: TextStyle::new(LABEL_SIZE, Anchor::End),
                });
            }
        }
    }
}
