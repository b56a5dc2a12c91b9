use dioxus::prelude::*;

struct ToolEntry {
    name: &'static str,
    blurb: &'static str,
}

const TOOLS: [ToolEntry; 3] = [
    ToolEntry {
        name: "Study buddy",
        blurb: "Ask follow-up questions about today's material.",
    },
    ToolEntry {
        name: "Quiz generator",
        blurb: "Turn a finished day into a quick self-test.",
    },
    ToolEntry {
        name: "Project reviewer",
        blurb: "Get feedback on the capstone milestones.",
    },
];

#[component]
pub fn AiToolsView() -> Element {
    rsx! {
        div { class: "page ai-tools-page",
            header { class: "view-header",
                h2 { class: "view-title", "AI Tools" }
                p { class: "view-subtitle", "Helpers that pair with the curriculum." }
            }
            div { class: "view-divider" }

            ul { class: "tool-list",
                for tool in &TOOLS {
                    li { key: "{tool.name}", class: "tool-card",
                        h3 { class: "tool-name", "{tool.name}" }
                        p { class: "tool-blurb", "{tool.blurb}" }
                    }
                }
            }
        }
    }
}
