//! Bordered cell holding one chart.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartPanelProps {
    /// Extra CSS, e.g. a grid placement.
    #[props(default = String::new())]
    pub style: String,
    pub children: Element,
}

/// A cell of the dashboard grid. The chart inside sizes itself to it.
#[component]
pub fn ChartPanel(props: ChartPanelProps) -> Element {
    let style = format!(
        "position: relative; min-width: 0; min-height: 0; border: 1px solid #e0e0e0; border-radius: 4px; background: #fff; {}",
        props.style
    );

    rsx! {
        div {
            style: "{style}",
            {props.children}
        }
    }
}
