//! The popups of the gallery page.
//!
//! [`Popups`] renders whichever one [`AppState::popup`](crate::AppState) names.
//! Form popups only collect input; submitting hands it to the orchestrator,
//! which closes the popup once the server has accepted the change.

use api::Card;
use dioxus::prelude::*;

use super::popup_frame::{PopupFrame, PopupWithForm};
use crate::icons::{FaCircleCheck, FaCircleXmark};
use crate::state::{Outcome, Popup};
use crate::{spawn_action, use_app_state, use_mesto, Icon};

/// Render the currently open popup, if any.
#[component]
pub fn Popups() -> Element {
    let state = use_app_state();
    let popup = state.read().popup.clone();

    match popup {
        Popup::None => rsx! {},
        Popup::EditProfile => rsx! { EditProfilePopup {} },
        Popup::EditAvatar => rsx! { EditAvatarPopup {} },
        Popup::AddPlace => rsx! { AddPlacePopup {} },
        Popup::ViewImage(card) => rsx! { ImagePopup { card } },
        Popup::Tooltip(outcome) => rsx! { InfoTooltip { outcome } },
    }
}

/// A labelled input inside a popup or auth form.
#[component]
pub fn FormField(
    name: String,
    #[props(default = "text".to_string())] input_type: String,
    placeholder: String,
    value: String,
    #[props(default = "form__input".to_string())] class: String,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        label {
            class: "form__field",
            input {
                class: "{class}",
                id: "{name}-input",
                name: "{name}",
                r#type: "{input_type}",
                placeholder: "{placeholder}",
                required: true,
                value: "{value}",
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
            span { class: "form__input-error {name}-input-error" }
        }
    }
}

#[component]
pub fn EditProfilePopup() -> Element {
    let state = use_app_state();
    let mesto = use_mesto();
    let mut name = use_signal(|| {
        state
            .read()
            .current_user
            .as_ref()
            .map(|u| u.name.clone())
            .unwrap_or_default()
    });
    let mut about = use_signal(|| {
        state
            .read()
            .current_user
            .as_ref()
            .map(|u| u.about.clone())
            .unwrap_or_default()
    });

    let submitter = mesto.clone();
    let handle_submit = move |_| {
        let mut mesto = submitter.clone();
        let (name, about) = (name(), about());
        spawn_action(async move {
            mesto.update_profile(&name, &about).await;
        });
    };
    let mut closer = mesto.clone();

    rsx! {
        PopupWithForm {
            kind: "edit-profile",
            title: "Редактировать профиль",
            submit_label: "Сохранить",
            busy: state.read().busy,
            on_submit: handle_submit,
            on_close: move |_| closer.close_all_popups(),
            FormField {
                name: "name",
                placeholder: "Имя",
                value: name(),
                oninput: move |v| name.set(v),
            }
            FormField {
                name: "about",
                placeholder: "О себе",
                value: about(),
                oninput: move |v| about.set(v),
            }
        }
    }
}

#[component]
pub fn EditAvatarPopup() -> Element {
    let state = use_app_state();
    let mesto = use_mesto();
    let mut avatar = use_signal(String::new);

    let submitter = mesto.clone();
    let handle_submit = move |_| {
        let mut mesto = submitter.clone();
        let url = avatar();
        spawn_action(async move {
            mesto.update_avatar(&url).await;
        });
    };
    let mut closer = mesto.clone();

    rsx! {
        PopupWithForm {
            kind: "avatar",
            title: "Обновить аватар",
            submit_label: "Сохранить",
            busy: state.read().busy,
            on_submit: handle_submit,
            on_close: move |_| closer.close_all_popups(),
            FormField {
                name: "avatar",
                input_type: "url",
                placeholder: "Ссылка на картинку",
                value: avatar(),
                oninput: move |v| avatar.set(v),
            }
        }
    }
}

#[component]
pub fn AddPlacePopup() -> Element {
    let state = use_app_state();
    let mesto = use_mesto();
    let mut title = use_signal(String::new);
    let mut link = use_signal(String::new);

    let submitter = mesto.clone();
    let handle_submit = move |_| {
        let mut mesto = submitter.clone();
        let (title, link) = (title(), link());
        spawn_action(async move {
            mesto.add_card(&title, &link).await;
        });
    };
    let mut closer = mesto.clone();

    rsx! {
        PopupWithForm {
            kind: "add-card",
            title: "Новое место",
            submit_label: "Создать",
            busy: state.read().busy,
            on_submit: handle_submit,
            on_close: move |_| closer.close_all_popups(),
            FormField {
                name: "title",
                placeholder: "Название",
                value: title(),
                oninput: move |v| title.set(v),
            }
            FormField {
                name: "link",
                input_type: "url",
                placeholder: "Ссылка на картинку",
                value: link(),
                oninput: move |v| link.set(v),
            }
        }
    }
}

/// Full-size view of a selected card.
#[component]
pub fn ImagePopup(card: Card) -> Element {
    let mut mesto = use_mesto();

    rsx! {
        PopupFrame {
            kind: "photo",
            on_close: move |_| mesto.close_all_popups(),
            figure {
                class: "photo-container",
                img {
                    class: "photo-container__photo",
                    src: "{card.image_url}",
                    alt: "{card.title}",
                }
                figcaption { class: "photo-container__photo-title", "{card.title}" }
            }
        }
    }
}

/// Registration outcome.
#[component]
pub fn InfoTooltip(outcome: Outcome) -> Element {
    let mut mesto = use_mesto();

    rsx! {
        PopupFrame {
            kind: "tooltip",
            on_close: move |_| mesto.close_all_popups(),
            match outcome {
                Outcome::Success => rsx! {
                    span {
                        class: "popup__icon-tooltip popup__icon-tooltip_success",
                        Icon { icon: FaCircleCheck, width: 120, height: 120 }
                    }
                    p { class: "popup__tooltip-text", "Вы успешно зарегистрировались!" }
                },
                Outcome::Failure => rsx! {
                    span {
                        class: "popup__icon-tooltip popup__icon-tooltip_failure",
                        Icon { icon: FaCircleXmark, width: 120, height: 120 }
                    }
                    p { class: "popup__tooltip-text", "Что-то пошло не так! Попробуйте ещё раз." }
                },
            }
        }
    }
}
