use dioxus::prelude::*;
use ui::views::GalleryView;
use ui::{use_app_state, SessionStatus};

use crate::Route;

/// The protected gallery page.
#[component]
pub fn Main() -> Element {
    let state = use_app_state();
    let nav = use_navigator();
    let status = state.read().status;

    match status {
        SessionStatus::Authenticated => rsx! { GalleryView {} },
        SessionStatus::Checking => rsx! {
            main { class: "page__loading", "Загрузка..." }
        },
        SessionStatus::Unauthenticated => {
            nav.replace(Route::SignIn {});
            rsx! {}
        }
    }
}
