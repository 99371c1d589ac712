use dioxus::prelude::*;

use store::MestoConfig;
use ui::views::Popups;
use ui::{Footer, Header, MestoProvider, View};
use views::{Main, SignIn, SignUp};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Root {},
        #[route("/sign-in")]
        SignIn {},
        #[route("/sign-up")]
        SignUp {},
        #[route("/main")]
        Main {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl From<View> for Route {
    fn from(view: View) -> Self {
        match view {
            View::SignIn => Route::SignIn {},
            View::SignUp => Route::SignUp {},
            View::Main => Route::Main {},
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const MESTO_TOML: &str = include_str!("../mesto.toml");

fn main() {
    dioxus::launch(App);
}

fn load_config() -> MestoConfig {
    MestoConfig::load(Some(MESTO_TOML)).unwrap_or_else(|err| {
        tracing::error!("Failed to load {}: {}", MestoConfig::filename(), err);
        MestoConfig::default()
    })
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        MestoProvider {
            config,
            Router::<Route> {}
        }
    }
}

/// Page chrome and the popup layer, shared by every page. Follows `AppState::view` so that state transitions such as
/// signing in or out move the browser to the matching route.
#[component]
fn Shell() -> Element {
    let state = ui::use_app_state();
    let nav = use_navigator();
    let view = use_memo(move || state.read().view);
    let mut previous = use_signal(|| Option::<View>::None);

    use_effect(move || {
        let view = view();
        // The initial view is whatever the URL says; only later changes navigate.
        let first = previous.peek().is_none();
        previous.set(Some(view));
        if !first {
            nav.replace(Route::from(view));
        }
    });

    rsx! {
        div {
            class: "page",
            Header {}
            Outlet::<Route> {}
            Footer {}
            Popups {}
        }
    }
}

/// Redirect `/` to `/main`, which sends signed-out visitors on to `/sign-in`.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Main {});
    rsx! {}
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!("Unknown path /{}", segments.join("/"));
    let nav = use_navigator();
    nav.replace(Route::Main {});
    rsx! {}
}
