use crate::canvas::SvgCanvas;
use crate::charts::Chart;
use crate::trigger::{ResponsiveChart, TriggerState};
use crate::viewport::Viewport;
use std::cell::RefCell;
use std::collections::HashMap;

thread_local! {
    static INSTANCES: RefCell<HashMap<String, usize>> = RefCell::new(HashMap::new());
}

/// Allocate a page-unique surface id from `base`: the first caller gets
/// `base` itself, later ones `base-2`, `base-3`, ...
pub fn instance_id(base: &str) -> String {
    INSTANCES.with(|instances| {
        let mut instances = instances.borrow_mut();
        let n = instances.entry(base.to_string()).or_insert(0);
        *n += 1;
        if *n == 1 {
            base.to_string()
        } else {
            format!("{}-{}", base, n)
        }
    })
}

/// A responsive chart together with the canvas it exclusively owns and the
/// SVG markup of its latest redraw.
pub struct SvgChartHost<C: Chart> {
    chart: ResponsiveChart<C>,
    canvas: SvgCanvas,
    markup: String,
}

impl<C: Chart> SvgChartHost<C> {
    /// Draw onto a canvas named after the chart type.
    pub fn new(chart: C, delay_ms: u64) -> Self {
        let id = chart.target_id();
        Self::with_id(chart, id, delay_ms)
    }

    /// Draw onto a canvas with an explicit id, for pages hosting several
    /// charts of the same type.
    pub fn with_id(chart: C, id: impl Into<String>, delay_ms: u64) -> Self {
        let canvas = SvgCanvas::new(id);
        SvgChartHost {
            chart: ResponsiveChart::new(chart, delay_ms),
            canvas,
            markup: String::new(),
        }
    }

    pub fn resized(&mut self, size: Viewport, now_ms: f64) {
        self.chart.resized(size, now_ms);
    }

    pub fn tick(&mut self, now_ms: f64) -> bool {
        let drawn = self.chart.tick(now_ms, &mut self.canvas);
        self.refresh(drawn);
        drawn
    }

    pub fn data_loaded(&mut self, data: C::Data) -> bool {
        let drawn = self.chart.data_loaded(data, &mut self.canvas);
        self.refresh(drawn);
        drawn
    }

    pub fn load_failed(&self, err: impl std::fmt::Display) {
        self.chart.load_failed(err);
    }

    fn refresh(&mut self, drawn: bool) {
        if !drawn {
            return;
        }
        if let Some(size) = self.chart.trigger().size() {
            self.markup = self.canvas.to_svg(size);
        }
    }

    pub fn state(&self) -> TriggerState {
        self.chart.trigger().state()
    }

    pub fn canvas(&self) -> &SvgCanvas {
        &self.canvas
    }

    /// Empty until the first redraw.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn pending_deadline(&self) -> Option<f64> {
        self.chart.trigger().pending_deadline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{ParallelChart, ScatterChart};
    use mcd_data::aggregate::ArtistAggregate;
    use mcd_data::scatter::ScatterArtist;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn artists() -> Vec<ArtistAggregate> {
        vec![ArtistAggregate {
            artist: "A".to_string(),
            artist_popularity: 91.0,
            artist_followers: 2_000_000.0,
            avg_track_popularity: 70.0,
            track_count: 4,
            avg_track_duration: 3.2,
            explicit_rate: 0.25,
            genre: "pop".to_string(),
        }]
    }

    #[test]
    fn markup_appears_after_the_first_redraw() {
        let mut host = SvgChartHost::new(ParallelChart, 200);
        assert!(!host.data_loaded(artists()));
        assert_eq!(host.markup(), "");
        host.resized(Viewport::new(640.0, 420.0), 0.0);
        assert_eq!(host.pending_deadline(), Some(200.0));
        assert!(host.tick(200.0));
        assert_eq!(host.state(), TriggerState::Ready);
        assert!(host.markup().starts_with(r#"<svg id="parallel-svg""#));
        assert!(host.markup().contains(r#"width="640""#));
        assert!(!host.canvas().is_empty());
    }

    #[test]
    fn instance_ids_are_unique_per_base() {
        assert_eq!(instance_id("lonely-svg"), "lonely-svg");
        assert_eq!(instance_id("lonely-svg"), "lonely-svg-2");
        assert_eq!(instance_id("other-svg"), "other-svg");
        assert_eq!(instance_id("lonely-svg"), "lonely-svg-3");
    }

    #[test]
    fn two_scatter_hosts_do_not_share_ids() {
        let size = Viewport::new(640.0, 420.0);
        let hosts: Vec<String> = ["twin-svg", "twin-svg-2"]
            .into_iter()
            .map(|id| {
                let chart = ScatterChart::with_jitter(StdRng::seed_from_u64(1), 0.0);
                let mut host = SvgChartHost::with_id(chart, id, 200);
                host.resized(size, 0.0);
                host.tick(200.0);
                host.data_loaded(vec![ScatterArtist {
                    artist: "A".to_string(),
                    artist_popularity: 91.0,
                    artist_followers: 2_000_000.0,
                    avg_track_popularity: 70.0,
                    explicit_rate: 0.25,
                }]);
                host.markup().to_string()
            })
            .collect();
        assert!(hosts[0].starts_with(r#"<svg id="twin-svg""#));
        assert!(hosts[0].contains(r#"id="twin-svg-explicit-rate""#));
        assert!(hosts[1].starts_with(r#"<svg id="twin-svg-2""#));
        assert!(hosts[1].contains(r#"id="twin-svg-2-explicit-rate""#));
        assert!(hosts[1].contains("url(#twin-svg-2-explicit-rate)"));
    }
}
