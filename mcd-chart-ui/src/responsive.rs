//! The shared chart lifecycle: load once on mount, redraw on settled resizes.
//!
//! Each call owns one [`SvgChartHost`] in a signal, so every chart instance
//! has its own canvas and element id. The resize listener lives on the host element and the
//! timer tasks are scoped to the component, so both go away on unmount.

use crate::browser;
use dioxus::prelude::*;
use mcd_catalog::{parse_records_str, RawRecord};
use mcd_chart::{instance_id, Chart, DrawTarget, SvgChartHost, Viewport};

/// Render a chart that fills its parent. Call from a component body.
///
/// `prepare` turns the loaded rows into the chart's input; it runs once per
/// mount, on this chart's own copy of the rows.
pub fn responsive_chart<C, P>(
    data_url: String,
    delay_ms: u64,
    make_chart: impl FnOnce() -> C,
    prepare: P,
) -> Element
where
    C: Chart + 'static,
    C::Data: 'static,
    P: Fn(&[RawRecord]) -> C::Data + Clone + 'static,
{
    let mut host = use_signal(move || {
        let chart = make_chart();
        let id = instance_id(chart.target_id());
        SvgChartHost::with_id(chart, id, delay_ms)
    });

    use_effect(move || {
        let url = data_url.clone();
        let prepare = prepare.clone();
        spawn(async move {
            let loaded = match browser::fetch_text(&url).await {
                Ok(text) => parse_records_str(&text).map_err(|e| e.to_string()),
                Err(e) => Err(e),
            };
            match loaded {
                Ok(records) => {
                    log::debug!(
                        "{}: loaded {} rows from {}",
                        host.peek().canvas().id(),
                        records.len(),
                        url
                    );
                    let data = prepare(&records);
                    host.write().data_loaded(data);
                }
                Err(e) => host.peek().load_failed(e),
            }
        });
    });

    let onresize = move |evt: Event<ResizeData>| {
        let Ok(content) = evt.get_content_box_size() else {
            return;
        };
        host.write()
            .resized(Viewport::new(content.width, content.height), browser::now_ms());
        spawn(async move {
            browser::sleep_ms(delay_ms).await;
            // Later resizes push the deadline back; whichever task wakes
            // after the final deadline settles it.
            loop {
                let Some(deadline) = host.peek().pending_deadline() else {
                    break;
                };
                let now = browser::now_ms();
                if now >= deadline {
                    host.write().tick(now);
                    break;
                }
                browser::sleep_ms((deadline - now).ceil() as u64).await;
            }
        });
    };

    let target_id = host.peek().canvas().id().to_string();
    let markup = host.read().markup().to_string();

    rsx! {
        div {
            id: "{target_id}-container",
            class: "chart-container",
            style: "width: 100%; height: 100%; overflow: hidden;",
            onresize: onresize,
            dangerous_inner_html: "{markup}",
        }
    }
}
