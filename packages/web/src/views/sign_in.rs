//! Sign-in page.

use dioxus::prelude::*;
use ui::views::AuthForm;
use ui::{spawn_action, use_app_state, use_mesto, View};

use crate::Route;

#[component]
pub fn SignIn() -> Element {
    let state = use_app_state();
    let mesto = use_mesto();
    let nav = use_navigator();

    // Keep the state in step with a URL typed by hand
    let mut sync = mesto.clone();
    use_effect(move || {
        if !state.peek().is_authenticated() {
            sync.navigate(View::SignIn);
        }
    });

    if state.read().is_authenticated() {
        nav.replace(Route::Main {});
    }

    let handle_login = move |(email, password): (String, String)| {
        let mut mesto = mesto.clone();
        spawn_action(async move {
            mesto.sign_in(&email, &password).await;
        });
    };

    rsx! {
        AuthForm {
            title: "Вход",
            submit_label: "Войти",
            on_submit: handle_login,
        }
    }
}
