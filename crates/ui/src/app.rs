use dioxus::prelude::*;

use crate::components::{MenuIcon, Sidebar};
use crate::context::AppContext;
use crate::nav::{AppTab, NavState};
use crate::views::{AiToolsView, CurriculumView, DashboardView};

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        // Stable OS/window title. Per-tab headings live inside the views.
        document::Title { "AI Factory Master" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Shell {}
            }
        }
    }
}

/// The application shell. Owns the navigation state and the completed set's
/// overall percent for the sidebar; everything else belongs to the views.
#[component]
pub fn Shell() -> Element {
    let ctx = use_context::<AppContext>();
    let mut nav = use_signal(NavState::default);

    let progress = ctx.progress();
    let percent_resource = use_resource(move || {
        let progress = progress.clone();
        // Reading the nav signal here refreshes the mini bar on tab change.
        let _active = nav().active;
        async move {
            progress
                .report()
                .await
                .map(|report| report.overall_percent())
                .unwrap_or(0)
        }
    });
    let overall_percent = percent_resource
        .value()
        .read()
        .as_ref()
        .copied()
        .unwrap_or(0);

    let active = nav().active;
    rsx! {
        div { class: "app",
            button {
                class: "mobile-menu-button",
                r#type: "button",
                aria_label: "Open navigation",
                onclick: move |_| nav.write().open_overlay(),
                MenuIcon {}
            }
            Sidebar { nav, overall_percent }
            main { class: "content",
                match active {
                    AppTab::Dashboard => rsx! {
                        DashboardView {}
                    },
                    AppTab::Curriculum => rsx! {
                        CurriculumView {}
                    },
                    AppTab::AiTools => rsx! {
                        AiToolsView {}
                    },
                }
            }
        }
    }
}
