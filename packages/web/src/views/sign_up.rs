//! Registration page.

use dioxus::prelude::*;
use ui::views::AuthForm;
use ui::{spawn_action, use_app_state, use_mesto, View};

use crate::Route;

#[component]
pub fn SignUp() -> Element {
    let state = use_app_state();
    let mesto = use_mesto();
    let nav = use_navigator();

    let mut sync = mesto.clone();
    use_effect(move || {
        if !state.peek().is_authenticated() {
            sync.navigate(View::SignUp);
        }
    });

    if state.read().is_authenticated() {
        nav.replace(Route::Main {});
    }

    let handle_register = move |(email, password): (String, String)| {
        let mut mesto = mesto.clone();
        spawn_action(async move {
            mesto.sign_up(&email, &password).await;
        });
    };

    rsx! {
        AuthForm {
            title: "Регистрация",
            submit_label: "Зарегистрироваться",
            on_submit: handle_register,
            p {
                class: "auth__hint",
                "Уже зарегистрированы? "
                Link { class: "auth__hint-link", to: Route::SignIn {}, "Войти" }
            }
        }
    }
}
