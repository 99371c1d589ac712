//! This crate contains all shared UI for the workspace.
//!
//! [`MestoProvider`] owns the [`AppState`] signal and the [`Mesto`]
//! orchestrator; every component below it reads state through
//! [`use_app_state`] and acts through [`use_mesto`].

pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod state;
pub use state::{AppState, Outcome, Popup, SessionStatus, View};

pub mod mesto;
pub use mesto::{Mesto, StateCell};

mod token_store;
pub use token_store::{make_token_store, PlatformStore};

mod provider;
pub use provider::{spawn_action, use_app_state, use_mesto, AppMesto, MestoProvider};

mod header;
pub use header::{Footer, Header};

pub mod views;
