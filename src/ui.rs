use crate::config::BotConfig;
use crate::views::{ChatView, HomeView};
use dioxus::prelude::*;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppPage {
    Home,
    Chat,
}

fn load_config() -> BotConfig {
    match BotConfig::from_env() {
        Ok(config) => {
            tracing::info!("Query endpoint: {}", config.query_endpoint);
            config
        }
        Err(e) => {
            tracing::error!("Invalid configuration, using defaults: {:#}", e);
            BotConfig::default()
        }
    }
}

#[component]
pub fn App() -> Element {
    let config = use_hook(load_config);
    let active_page = use_signal(|| AppPage::Home);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Sandalwood Bot" }
        NavBar { active_page }
        {match active_page() {
            AppPage::Home => rsx! { HomeView { active_page } },
            AppPage::Chat => rsx! { ChatView { config: config.clone() } },
        }}
    }
}

#[component]
fn NavBar(active_page: Signal<AppPage>) -> Element {
    let mut active_page = active_page;
    let chat_class = if active_page() == AppPage::Chat {
        "nav-chat active"
    } else {
        "nav-chat"
    };
    rsx! {
        nav { class: "navbar",
            div { class: "navbar-inner",
                div {
                    class: "brand",
                    onclick: move |_| active_page.set(AppPage::Home),
                    "Sandalwood Bot"
                }
                div { class: "nav-links",
                    NavLink { active_page, href: "#home", label: "Home" }
                    NavLink { active_page, href: "#features", label: "Idea" }
                    NavLink { active_page, href: "#about", label: "About" }
                    button {
                        class: chat_class,
                        r#type: "button",
                        onclick: move |_| active_page.set(AppPage::Chat),
                        "Chat"
                    }
                }
            }
        }
    }
}

/// Section links only make sense on the landing page, so they switch back
/// to it before the browser follows the anchor.
#[component]
fn NavLink(active_page: Signal<AppPage>, href: &'static str, label: &'static str) -> Element {
    let mut active_page = active_page;
    rsx! {
        a {
            class: "nav-link",
            href: href,
            onclick: move |_| active_page.set(AppPage::Home),
            "{label}"
        }
    }
}
