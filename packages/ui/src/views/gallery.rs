use dioxus::prelude::*;

use super::card::CardItem;
use super::profile::Profile;
use crate::use_app_state;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// The main page: profile and card grid.
#[component]
pub fn GalleryView() -> Element {
    let state = use_app_state();
    let cards = state.read().cards.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        main {
            class: "content",
            ErrorNotice {}
            Profile {}
            section {
                class: "elements",
                ul {
                    class: "elements__list",
                    for card in cards {
                        CardItem { key: "{card.id}", card: card.clone() }
                    }
                }
            }
        }
    }
}

/// Banner for the last failed action. Dismissing it clears the error.
#[component]
pub fn ErrorNotice() -> Element {
    let state = use_app_state();
    let mut mesto = crate::use_mesto();
    let Some(kind) = state.read().last_error else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "notice notice_type_error",
            role: "alert",
            span { class: "notice__text", "Не удалось выполнить запрос: {kind}" }
            button {
                class: "notice__close",
                r#type: "button",
                onclick: move |_| mesto.dismiss_error(),
                "×"
            }
        }
    }
}
