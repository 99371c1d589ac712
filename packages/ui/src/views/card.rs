use api::Card;
use dioxus::prelude::*;

use crate::icons::{FaHeart, FaTrash};
use crate::{spawn_action, use_app_state, use_mesto, Icon};

/// One photo card in the gallery grid.
#[component]
pub fn CardItem(card: Card) -> Element {
    let state = use_app_state();
    let mesto = use_mesto();

    let (liked, own, pending) = {
        let s = state.read();
        (s.is_liked(&card), s.is_own(&card), s.in_flight.contains(&card.id))
    };

    let mut opener = mesto.clone();
    let selected = card.clone();
    let liker = mesto.clone();
    let like_id = card.id.clone();
    let deleter = mesto.clone();
    let delete_id = card.id.clone();

    rsx! {
        li {
            class: "element",
            img {
                class: "element__image",
                src: "{card.image_url}",
                alt: "{card.title}",
                onclick: move |_| opener.select_card(selected.clone()),
            }
            if own {
                button {
                    class: "element__delete",
                    r#type: "button",
                    aria_label: "Delete",
                    disabled: pending,
                    onclick: move |_| {
                        let mut mesto = deleter.clone();
                        let id = delete_id.clone();
                        spawn_action(async move {
                            mesto.delete_card(&id).await;
                        });
                    },
                    Icon { icon: FaTrash, width: 18, height: 18 }
                }
            }
            div {
                class: "element__caption",
                h2 { class: "element__title", "{card.title}" }
                div {
                    class: "element__like-container",
                    button {
                        class: if liked { "element__like element__like_active" } else { "element__like" },
                        r#type: "button",
                        aria_label: "Like",
                        disabled: pending,
                        onclick: move |_| {
                            let mut mesto = liker.clone();
                            let id = like_id.clone();
                            spawn_action(async move {
                                mesto.toggle_like(&id).await;
                            });
                        },
                        Icon { icon: FaHeart, width: 20, height: 20 }
                    }
                    span { class: "element__like-count", "{card.like_count()}" }
                }
            }
        }
    }
}
