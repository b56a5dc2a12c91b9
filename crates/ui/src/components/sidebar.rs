use dioxus::prelude::*;

use crate::nav::{AppTab, NavState};

/// The sidebar navigator. Controlled: navigation state lives in the shell's
/// `NavState` signal, the overall percent comes in as a plain prop.
#[component]
pub fn Sidebar(mut nav: Signal<NavState>, overall_percent: u8) -> Element {
    let state = nav();
    rsx! {
        if state.mobile_open {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| nav.write().close_overlay(),
            }
        }

        aside {
            class: if state.mobile_open { "sidebar sidebar--open" } else { "sidebar" },
            div { class: "sidebar-header",
                h1 { class: "sidebar-title", "AI Factory Master" }
                button {
                    class: "sidebar-close",
                    r#type: "button",
                    aria_label: "Close navigation",
                    onclick: move |_| nav.write().close_overlay(),
                    MenuIcon {}
                }
            }

            nav { class: "sidebar-nav",
                for tab in AppTab::ALL {
                    button {
                        key: "{tab.label()}",
                        class: if state.active == tab { "nav-item nav-item--active" } else { "nav-item" },
                        r#type: "button",
                        onclick: move |_| nav.write().select(tab),
                        span { class: "nav-icon", TabIcon { tab } }
                        span { class: "nav-label", "{tab.label()}" }
                    }
                }
            }

            div { class: "sidebar-footer",
                p { class: "sidebar-progress-label", "Progress" }
                div { class: "sidebar-progress-track",
                    div {
                        class: "sidebar-progress-fill",
                        style: "width: {overall_percent}%;",
                    }
                }
            }
        }
    }
}

#[component]
fn TabIcon(tab: AppTab) -> Element {
    let path = match tab {
        AppTab::Dashboard => "M4 4h7v7H4zM13 4h7v7h-7zM4 13h7v7H4zM13 13h7v7h-7z",
        AppTab::Curriculum => "M4 5a2 2 0 0 1 2-2h6v18H6a2 2 0 0 0-2 2zM12 3h6a2 2 0 0 1 2 2v16a2 2 0 0 0-2-2h-6z",
        AppTab::AiTools => "M12 3v3M8 6h8a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2H8a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2zM9 11h.01M15 11h.01M9 15h6",
    };
    rsx! {
        svg {
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "1.7",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: path }
        }
    }
}

#[component]
pub fn MenuIcon() -> Element {
    rsx! {
        svg {
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "1.7",
            stroke_linecap: "round",
            path { d: "M4 6h16M4 12h16M4 18h16" }
        }
    }
}
