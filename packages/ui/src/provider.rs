//! Application context and hooks for the UI.

use api::{Api, Auth, MestoConfig};
use dioxus::prelude::*;
use store::TokenStore;

use crate::mesto::{Mesto, StateCell};
use crate::state::AppState;
use crate::token_store::{make_token_store, PlatformStore};

/// The orchestrator as the UI holds it: platform token store, state in a signal.
pub type AppMesto = Mesto<PlatformStore, Signal<AppState>>;

impl StateCell for Signal<AppState> {
    fn read_with<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.read())
    }

    fn write_with(&mut self, f: impl FnOnce(&mut AppState)) {
        f(&mut self.write())
    }
}

/// Get the application state.
/// Returns a signal that updates whenever a user action completes.
pub fn use_app_state() -> Signal<AppState> {
    use_context::<Signal<AppState>>()
}

/// Get a handle on the orchestrator. Clone it into event handlers.
pub fn use_mesto() -> AppMesto {
    use_context::<AppMesto>()
}

/// Run a user action at the root of the tree.
///
/// Actions outlive the component that started them: a popup that closes or a
/// page that navigates away mid-request must not cancel the state update.
pub fn spawn_action(action: impl std::future::Future<Output = ()> + 'static) {
    dioxus::dioxus_core::spawn_forever(action);
}

fn connect(
    config: &MestoConfig,
    tokens: PlatformStore,
    state: Signal<AppState>,
) -> api::Result<AppMesto> {
    let api = Api::new(config)?;
    let auth = Auth::new(config, tokens)?;
    Ok(Mesto::new(api, auth, state))
}

/// Provider component that owns the state and the service clients.
/// Wrap your app with this component; it resolves the stored session on mount.
#[component]
pub fn MestoProvider(config: MestoConfig, children: Element) -> Element {
    let tokens = use_hook(make_token_store);
    // A stored token means the first frames are spent checking it, not signed out.
    let state = use_signal({
        let tokens = tokens.clone();
        move || {
            let mut state = AppState::default();
            if let Some(token) = tokens.load() {
                state.checking(token);
            }
            state
        }
    });
    let mesto = use_hook(move || match connect(&config, tokens, state) {
        Ok(mesto) => Some(mesto),
        Err(err) => {
            tracing::error!("Invalid service configuration: {}", err);
            None
        }
    });

    // Configuration is fixed for the provider's lifetime, so this branch never flips.
    let Some(mesto) = mesto else {
        return rsx! {
            div { class: "page__error", "Mesto is misconfigured. Check the service URLs." }
        };
    };

    use_context_provider(|| state);
    use_context_provider({
        let mesto = mesto.clone();
        move || mesto
    });

    use_effect(move || {
        let mut mesto = mesto.clone();
        spawn_action(async move {
            mesto.start().await;
        });
    });

    rsx! {
        {children}
    }
}
