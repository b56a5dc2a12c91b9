use dioxus::prelude::*;

use crate::components::{CompletionDonut, PhaseBarChart};
use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{DashboardVm, map_dashboard};

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let progress = ctx.progress();

    let resource = use_resource(move || {
        let progress = progress.clone();
        async move {
            let report = progress.report().await.map_err(|_| ViewError::Storage)?;
            Ok::<_, ViewError>(map_dashboard(&report))
        }
    });

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page dashboard-page",
            header { class: "view-header",
                h2 { class: "view-title", "Welcome back" }
                p { class: "view-subtitle",
                    "Here is your progress through the 100-day program."
                }
            }
            div { class: "view-divider" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "view-error", "{err.message()}" }
                },
                ViewState::Ready(vm) => rsx! {
                    DashboardStats { vm: vm.clone() }
                },
            }
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum StatIcon {
    Trophy,
    Check,
    Clock,
}

#[component]
fn DashboardStats(vm: DashboardVm) -> Element {
    rsx! {
        div { class: "stat-grid",
            StatCard {
                icon: StatIcon::Trophy,
                label: "Overall progress",
                value: vm.overall_percent_str.clone(),
            }
            StatCard {
                icon: StatIcon::Check,
                label: "Completed activities",
                value: vm.completed_str.clone(),
            }
            StatCard {
                icon: StatIcon::Clock,
                label: "Days remaining",
                value: vm.days_remaining_str.clone(),
            }
        }

        div { class: "chart-grid",
            section { class: "chart-card",
                h3 { class: "chart-title", "Progress by phase" }
                PhaseBarChart { rows: vm.phases.clone() }
            }
            section { class: "chart-card chart-card--donut",
                h3 { class: "chart-title", "Overall completion" }
                CompletionDonut { percent: vm.overall_percent }
            }
        }
    }
}

#[component]
fn StatCard(icon: StatIcon, label: &'static str, value: String) -> Element {
    let (class_suffix, path) = match icon {
        StatIcon::Trophy => (
            "trophy",
            "M8 21h8M12 17v4M7 4h10v5a5 5 0 0 1-10 0zM7 6H4v2a3 3 0 0 0 3 3M17 6h3v2a3 3 0 0 1-3 3",
        ),
        StatIcon::Check => (
            "check",
            "M12 3a9 9 0 1 0 0 18 9 9 0 0 0 0-18zM8.5 12l2.5 2.5 4.5-5",
        ),
        StatIcon::Clock => ("clock", "M12 3a9 9 0 1 0 0 18 9 9 0 0 0 0-18zM12 7v5l3 2"),
    };
    rsx! {
        div { class: "stat-card",
            span { class: "stat-icon stat-icon--{class_suffix}",
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
            div { class: "stat-body",
                p { class: "stat-label", "{label}" }
                p { class: "stat-value", "{value}" }
            }
        }
    }
}
