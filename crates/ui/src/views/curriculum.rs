use dioxus::prelude::*;

use curriculum_core::{ActivityKey, CompletionSet};

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[derive(Clone, Debug, PartialEq, Eq)]
struct CurriculumData {
    completed: CompletionSet,
}

#[component]
pub fn CurriculumView() -> Element {
    let ctx = use_context::<AppContext>();
    let curriculum = ctx.curriculum();
    let completions = ctx.completions();

    let completions_for_resource = completions.clone();
    let resource = use_resource(move || {
        let completions = completions_for_resource.clone();
        async move {
            let completed = completions
                .completed_set()
                .await
                .map_err(|_| ViewError::Storage)?;
            Ok::<_, ViewError>(CurriculumData { completed })
        }
    });

    let mut toggle_error = use_signal(|| None::<ViewError>);
    let on_toggle = use_callback(move |(key, completed): (ActivityKey, bool)| {
        let completions = completions.clone();
        let mut resource = resource;
        spawn(async move {
            match completions.set_completed(key, completed).await {
                Ok(()) => {
                    toggle_error.set(None);
                    resource.restart();
                }
                Err(_) => toggle_error.set(Some(ViewError::Storage)),
            }
        });
    });

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page curriculum-page",
            header { class: "view-header",
                h2 { class: "view-title", "Curriculum" }
                p { class: "view-subtitle", "Tick off activities as you finish them." }
            }
            div { class: "view-divider" }

            if let Some(err) = toggle_error() {
                p { class: "view-error", "{err.message()}" }
            }

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
                ViewState::Ready(data) => rsx! {
                    div { class: "phase-list",
                        for phase in curriculum.phases() {
                            section { key: "{phase.id()}", class: "phase-block",
                                h3 { class: "phase-title",
                                    "Phase {phase.id()} · {phase.title()}"
                                }
                                for day in phase.days() {
                                    div { key: "{day.id()}", class: "day-block",
                                        h4 { class: "day-title", "{day.title()}" }
                                        ul { class: "activity-list",
                                            for (index, activity) in day.activities().iter().enumerate() {
                                                ActivityRow {
                                                    key: "{index}",
                                                    activity_key: ActivityKey::new(
                                                        phase.id(),
                                                        day.id(),
                                                        index as u32,
                                                    ),
                                                    title: activity.title().to_string(),
                                                    done: data.completed.contains(ActivityKey::new(
                                                        phase.id(),
                                                        day.id(),
                                                        index as u32,
                                                    )),
                                                    on_toggle,
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn ActivityRow(
    activity_key: ActivityKey,
    title: String,
    done: bool,
    on_toggle: Callback<(ActivityKey, bool)>,
) -> Element {
    rsx! {
        li { class: "activity-row",
            button {
                class: if done { "activity-toggle activity-toggle--done" } else { "activity-toggle" },
                r#type: "button",
                role: "checkbox",
                aria_checked: "{done}",
                onclick: move |_| on_toggle.call((activity_key, !done)),
                span { class: "activity-box" }
                span { class: "activity-title", "{title}" }
            }
        }
    }
}
