use dioxus::prelude::*;

use crate::state::View;
use crate::{use_app_state, use_mesto};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[component]
pub fn Header() -> Element {
    let state = use_app_state();
    let mesto = use_mesto();
    let (signed_in, email, view) = {
        let s = state.read();
        (s.is_authenticated(), s.email.clone().unwrap_or_default(), s.view)
    };

    let mut exit = mesto.clone();
    let mut switch = mesto.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        header {
            class: "header",
            div { class: "header__logo", "Mesto" }
            nav {
                class: "header__nav",
                if signed_in {
                    span { class: "header__email", "{email}" }
                    button {
                        class: "header__link header__link_type_exit",
                        r#type: "button",
                        onclick: move |_| exit.sign_out(),
                        "Выйти"
                    }
                } else if view == View::SignUp {
                    button {
                        class: "header__link",
                        r#type: "button",
                        onclick: move |_| switch.navigate(View::SignIn),
                        "Войти"
                    }
                } else {
                    button {
                        class: "header__link",
                        r#type: "button",
                        onclick: move |_| switch.navigate(View::SignUp),
                        "Регистрация"
                    }
                }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "footer",
            p { class: "footer__copyright", "© 2022 Mesto Russia" }
        }
    }
}
