//! Chart renderers.
//!
//! A chart turns its pipeline's output into marks on a [`DrawTarget`] sized to
//! its container. Rendering always starts from an empty target: the caller
//! clears it first (see [`crate::trigger::ResponsiveChart`]).

pub mod bar;
pub mod parallel;
pub mod scatter;
pub mod stream;

use crate::canvas::{Anchor, DrawTarget, Mark, TextStyle};
use crate::viewport::Viewport;
use mcd_data::stream::StreamData;

pub use bar::BarChart;
pub use parallel::ParallelChart;
pub use scatter::ScatterChart;
pub use stream::StreamChart;

/// 1rem
pub(crate) const TITLE_SIZE: f64 = 16.0;
/// .9rem
pub(crate) const LABEL_SIZE: f64 = 14.4;
/// .75rem
pub(crate) const SMALL_SIZE: f64 = 12.0;

/// Prepared chart input. Empty data is never drawn.
pub trait Dataset {
    fn is_empty(&self) -> bool;
}

impl<T> Dataset for Vec<T> {
    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

impl Dataset for StreamData {
    fn is_empty(&self) -> bool {
        StreamData::is_empty(self)
    }
}

pub trait Chart {
    type Data: Dataset;

    /// Id of the draw target this chart owns, e.g. `"bar-svg"`.
    fn target_id(&self) -> &'static str;

    /// Draw `data` into an already cleared `target` of the given size.
    fn render(&mut self, data: &Self::Data, size: Viewport, target: &mut dyn DrawTarget);
}

/// Bold title centred above the plot at `y`.
pub(crate) fn draw_title(target: &mut dyn DrawTarget, size: Viewport, y: f64, text: &str) {
    target.draw(Mark::Text {
        x: size.width / 2.0,
        y,
        content: text.to_string(),
        style: TextStyle::new(TITLE_SIZE, Anchor::Middle).bold(),
    });
}

pub(crate) fn draw_x_label(target: &mut dyn DrawTarget, x: f64, y: f64, text: &str) {
    target.draw(Mark::Text {
        x,
        y,
        content: text.to_string(),
        style: TextStyle::new(LABEL_SIZE, Anchor::Middle),
    });
}

/// Vertical label; `centre_y` is the screen y it is centred on.
pub(crate) fn draw_y_label(target: &mut dyn DrawTarget, centre_y: f64, x: f64, text: &str) {
    target.draw(Mark::Text {
        x: -centre_y,
        y: x,
        content: text.to_string(),
        style: TextStyle::new(LABEL_SIZE, Anchor::Middle).rotated(-90.0),
    });
}
