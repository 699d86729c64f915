//! Responsive redraw: debounced container size plus loaded data.
//!
//! Size and data arrive as independent events in either order. Whichever one
//! completes the pair causes the redraw; a redraw always clears the target
//! first.

use crate::canvas::DrawTarget;
use crate::charts::{Chart, Dataset};
use crate::viewport::Viewport;

/// Default resize settle time.
pub const DEBOUNCE_MS: u64 = 200;

/// Trailing-edge debouncer: only the last value pushed in a burst is released,
/// once `delay` has passed without another push.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay_ms: f64,
    pending: Option<(T, f64)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay_ms: u64) -> Self {
        Debouncer {
            delay_ms: delay_ms as f64,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms as u64
    }

    /// Replace any pending value and restart the delay from `now_ms`.
    pub fn push(&mut self, value: T, now_ms: f64) {
        self.pending = Some((value, now_ms + self.delay_ms));
    }

    /// Release the pending value if its deadline has passed.
    pub fn poll(&mut self, now_ms: f64) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if now_ms >= *deadline => self.pending.take().map(|(v, _)| v),
            _ => None,
        }
    }

    pub fn deadline(&self) -> Option<f64> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
    /// No settled, non-zero container size yet.
    Unsized,
    SizedNoData,
    /// Sized, with data, and drawn at least once.
    Ready,
}

/// Tracks size and data for one chart and says when to redraw.
#[derive(Debug)]
pub struct RenderTrigger<D> {
    debouncer: Debouncer<Viewport>,
    size: Option<Viewport>,
    data: Option<D>,
    redraws: usize,
}

impl<D: Dataset> RenderTrigger<D> {
    pub fn new(delay_ms: u64) -> Self {
        RenderTrigger {
            debouncer: Debouncer::new(delay_ms),
            size: None,
            data: None,
            redraws: 0,
        }
    }

    /// Record a container size change. Nothing happens until it settles.
    pub fn resized(&mut self, size: Viewport, now_ms: f64) {
        self.debouncer.push(size, now_ms);
    }

    pub fn pending_deadline(&self) -> Option<f64> {
        self.debouncer.deadline()
    }

    /// Settle a pending resize. Returns the size to redraw at, if any.
    pub fn tick(&mut self, now_ms: f64) -> Option<Viewport> {
        let size = self.debouncer.poll(now_ms)?;
        if !size.is_renderable() {
            self.size = None;
            return None;
        }
        self.size = Some(size);
        self.fire()
    }

    /// Record loaded data. Empty data is treated as no data at all.
    pub fn data_loaded(&mut self, data: D) -> Option<Viewport> {
        if data.is_empty() {
            self.data = None;
            return None;
        }
        self.data = Some(data);
        self.fire()
    }

    fn fire(&mut self) -> Option<Viewport> {
        match (self.size, &self.data) {
            (Some(size), Some(_)) => {
                self.redraws += 1;
                Some(size)
            }
            _ => None,
        }
    }

    pub fn state(&self) -> TriggerState {
        match (self.size, &self.data) {
            (None, _) => TriggerState::Unsized,
            (Some(_), None) => TriggerState::SizedNoData,
            (Some(_), Some(_)) => TriggerState::Ready,
        }
    }

    pub fn size(&self) -> Option<Viewport> {
        self.size
    }

    pub fn data(&self) -> Option<&D> {
        self.data.as_ref()
    }

    pub fn redraw_count(&self) -> usize {
        self.redraws
    }
}

/// A chart bound to its trigger. Every redraw clears the target, then renders.
pub struct ResponsiveChart<C: Chart> {
    chart: C,
    trigger: RenderTrigger<C::Data>,
}

impl<C: Chart> ResponsiveChart<C> {
    pub fn new(chart: C, delay_ms: u64) -> Self {
        ResponsiveChart {
            chart,
            trigger: RenderTrigger::new(delay_ms),
        }
    }

    pub fn chart(&self) -> &C {
        &self.chart
    }

    pub fn trigger(&self) -> &RenderTrigger<C::Data> {
        &self.trigger
    }

    pub fn resized(&mut self, size: Viewport, now_ms: f64) {
        self.trigger.resized(size, now_ms);
    }

    /// Settle resizes due by `now_ms`; returns whether the target was redrawn.
    pub fn tick(&mut self, now_ms: f64, target: &mut dyn DrawTarget) -> bool {
        match self.trigger.tick(now_ms) {
            Some(size) => {
                self.redraw(size, target);
                true
            }
            None => false,
        }
    }

    pub fn data_loaded(&mut self, data: C::Data, target: &mut dyn DrawTarget) -> bool {
        match self.trigger.data_loaded(data) {
            Some(size) => {
                self.redraw(size, target);
                true
            }
            None => false,
        }
    }

    /// A failed load leaves the chart blank for good.
    pub fn load_failed(&self, err: impl std::fmt::Display) {
        log::error!("{}: failed to load data: {}", self.chart.target_id(), err);
    }

    fn redraw(&mut self, size: Viewport, target: &mut dyn DrawTarget) {
        let Some(data) = self.trigger.data() else {
            return;
        };
        target.clear();
        self.chart.render(data, size, target);
        log::debug!(
            "{}: redraw #{} at {}x{}",
            self.chart.target_id(),
            self.trigger.redraw_count(),
            size.width,
            size.height
        );
    }
}
