use dioxus::prelude::*;

use crate::icons::{FaPen, FaPlus};
use crate::state::Popup;
use crate::{use_app_state, use_mesto, Icon};

/// Current user's profile block with the edit and add buttons.
#[component]
pub fn Profile() -> Element {
    let state = use_app_state();
    let mesto = use_mesto();
    let Some(user) = state.read().current_user.clone() else {
        return rsx! {
            section { class: "profile profile_loading" }
        };
    };

    let mut avatar = mesto.clone();
    let mut edit = mesto.clone();
    let mut add = mesto.clone();

    rsx! {
        section {
            class: "profile",
            div {
                class: "profile__avatar-container",
                onclick: move |_| avatar.open_popup(Popup::EditAvatar),
                img {
                    class: "profile__avatar",
                    src: "{user.avatar_url}",
                    alt: "Аватар",
                }
            }
            div {
                class: "profile__info",
                div {
                    class: "profile__name-container",
                    h1 { class: "profile__name", "{user.name}" }
                    button {
                        class: "profile__edit-button",
                        r#type: "button",
                        aria_label: "Edit profile",
                        onclick: move |_| edit.open_popup(Popup::EditProfile),
                        Icon { icon: FaPen, width: 10, height: 10 }
                    }
                }
                p { class: "profile__about", "{user.about}" }
            }
            button {
                class: "profile__add-button",
                r#type: "button",
                aria_label: "Add place",
                onclick: move |_| add.open_popup(Popup::AddPlace),
                Icon { icon: FaPlus, width: 22, height: 22 }
            }
        }
    }
}
