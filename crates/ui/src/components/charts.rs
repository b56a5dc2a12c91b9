use dioxus::prelude::*;

use crate::vm::PhaseRowVm;

/// Horizontal per-phase bar chart. Each row is a CSS track whose fill width
/// is the phase's completion percentage.
#[component]
pub fn PhaseBarChart(rows: Vec<PhaseRowVm>) -> Element {
    rsx! {
        div { class: "bar-chart",
            if rows.is_empty() {
                p { class: "chart-empty", "No phases defined." }
            }
            for row in rows {
                div { key: "{row.label}", class: "bar-row",
                    span { class: "bar-label", "{row.label}" }
                    div { class: "bar-track",
                        div {
                            class: "bar-fill",
                            style: "width: {row.fill_percent}%;",
                        }
                    }
                    span { class: "bar-count", "{row.count_str}" }
                }
            }
        }
    }
}

const DONUT_RADIUS: f64 = 40.0;

/// Overall-completion donut, drawn as a stroked circle with a dash the
/// length of the completed arc and the percent centered inside.
#[component]
pub fn CompletionDonut(percent: u8) -> Element {
    let circumference = 2.0 * std::f64::consts::PI * DONUT_RADIUS;
    let dash = circumference * f64::from(percent.min(100)) / 100.0;
    rsx! {
        svg {
            class: "donut",
            view_box: "0 0 100 100",
            role: "img",
            "aria-label": "Overall completion {percent}%",
            circle {
                class: "donut-track",
                cx: "50",
                cy: "50",
                r: "{DONUT_RADIUS}",
                fill: "none",
                stroke_width: "10",
            }
            circle {
                class: "donut-fill",
                cx: "50",
                cy: "50",
                r: "{DONUT_RADIUS}",
                fill: "none",
                stroke_width: "10",
                stroke_linecap: "round",
                stroke_dasharray: "{dash} {circumference}",
                // Start the arc at twelve o'clock.
                transform: "rotate(-90 50 50)",
            }
            text {
                class: "donut-label",
                x: "50",
                y: "55",
                text_anchor: "middle",
                "{percent}%"
            }
        }
    }
}
