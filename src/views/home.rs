use crate::ui::AppPage;
use crate::views::TeamSection;
use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BuildStep {
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
}

pub const BUILD_STEPS: [BuildStep; 4] = [
    BuildStep {
        title: "Step 1: Initial Audio Transcription",
        description: "We transcribed audio into text using speech recognition technology.",
        link: "https://github.com/452Harsh/AlphaByte/blob/main/Whisper.ipynb",
    },
    BuildStep {
        title: "Step 2: Kannada to English Conversion",
        description: "We translated Kannada texts into English text.",
        link: "https://github.com/452Harsh/AlphaByte/blob/main/Transalation_kannda_english.ipynb",
    },
    BuildStep {
        title: "Step 3: Vector Embedding And Model Creation",
        description: "We created a vector embedding model to process data efficiently.",
        link: "https://github.com/452Harsh/AlphaByte/blob/main/Model.ipynb",
    },
    BuildStep {
        title: "Step 4: UI Integration",
        description: "Finally, we integrated everything into a seamless user interface.",
        link: "#",
    },
];

const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("Twitter", "https://twitter.com"),
    ("Facebook", "https://facebook.com"),
    ("Instagram", "https://instagram.com"),
    ("Email", "mailto:contact@sandalwoodbot.com"),
];

/// Timeline steps alternate sides, starting on the left.
fn timeline_side(index: usize) -> &'static str {
    if index % 2 == 0 { "left" } else { "right" }
}

#[component]
pub fn HomeView(active_page: Signal<AppPage>) -> Element {
    rsx! {
        div { class: "home",
            Hero { active_page }
            section { id: "features", class: "timeline-section",
                div { class: "container timeline",
                    h2 { class: "section-heading", "How We Made It" }
                    div { class: "timeline-line" }
                    for (index, step) in BUILD_STEPS.iter().enumerate() {
                        TimelineStep { index, step: *step }
                    }
                }
            }
            section { id: "about", TeamSection {} }
            Footer {}
        }
    }
}

#[component]
fn Hero(active_page: Signal<AppPage>) -> Element {
    let mut active_page = active_page;
    rsx! {
        section { id: "home", class: "hero",
            div { class: "hero-overlay" }
            div { class: "hero-content",
                h1 { "Revolutionizing Sandalwood Cultivation" }
                p { "Harness the power of AI to optimize sandalwood growth and sustainability." }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| active_page.set(AppPage::Chat),
                    "ChatBot"
                }
            }
        }
    }
}

#[component]
fn TimelineStep(index: usize, step: BuildStep) -> Element {
    let side = timeline_side(index);
    let number = index + 1;
    rsx! {
        div { class: "timeline-step {side}",
            div { class: "step-number", span { "{number}" } }
            div { class: "step-card",
                h3 { "{step.title}" }
                p { "{step.description}" }
                a {
                    href: step.link,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Learn more"
                }
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "container",
                p { "© 2024 Sandalwood Bot. All rights reserved." }
                div { class: "footer-links",
                    for (label, href) in SOCIAL_LINKS {
                        a { href: href, "{label}" }
                    }
                }
            }
        }
    }
}
