//! # Orchestrator
//!
//! [`Mesto`] is the only caller of the two HTTP clients. Each public method maps
//! one user action to at most one request (the gallery load is two, issued
//! together) and applies the server's answer to [`AppState`] through a
//! [`StateCell`].
//!
//! Failures never escape: they go through [`Mesto::report`], which logs them
//! and records the [`api::ErrorKind`] in state, leaving everything else as it
//! was. Registration is the one flow that also shows the user an outcome.
//!
//! State is only ever touched inside short closures, so no borrow of a Dioxus
//! signal is held across an `.await`.

use api::{Api, Auth, AvatarUpdate, Credentials, Error, NewCard, ProfileUpdate};
use store::TokenStore;

use crate::state::{AppState, Outcome, Popup, View};

/// Read/update access to the application state.
pub trait StateCell {
    fn read_with<R>(&self, f: impl FnOnce(&AppState) -> R) -> R;
    fn write_with(&mut self, f: impl FnOnce(&mut AppState));
}

impl StateCell for AppState {
    fn read_with<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(self)
    }

    fn write_with(&mut self, f: impl FnOnce(&mut AppState)) {
        f(self)
    }
}

/// Services plus a handle on the state they mutate.
#[derive(Clone)]
pub struct Mesto<S, C> {
    api: Api,
    auth: Auth<S>,
    state: C,
}

impl<S: TokenStore, C: StateCell> Mesto<S, C> {
    pub fn new(api: Api, auth: Auth<S>, state: C) -> Self {
        Self { api, auth, state }
    }

    pub fn state(&self) -> &C {
        &self.state
    }

    /// Resource client authorized by the current session, if any.
    fn api(&self) -> Api {
        let token = self.state.read_with(|s| s.token.clone());
        self.api.authorized(token.as_deref())
    }

    /// The single error boundary: log, remember the kind, change nothing else.
    pub fn report(&mut self, action: &str, err: &Error) {
        tracing::warn!("{} failed: {}", action, err);
        let kind = err.kind();
        self.state.write_with(|s| s.record_error(kind));
    }

    /// Resolve the session from the persisted token.
    pub async fn start(&mut self) {
        let Some(token) = self.auth.load_token() else {
            tracing::debug!("No stored session");
            self.state.write_with(AppState::signed_out);
            return;
        };

        self.state.write_with(|s| s.checking(token.clone()));
        match self.auth.check_token(&token).await {
            Ok(account) => {
                tracing::info!("Restored session for {}", account.email);
                self.state
                    .write_with(|s| s.signed_in(token, Some(account.email)));
                self.load_gallery().await;
            }
            Err(err) => {
                // Only a server verdict invalidates the token; a network blip does not.
                if err.status().is_some() {
                    self.auth.clear_token();
                }
                self.report("Token check", &err);
                self.state.write_with(AppState::signed_out);
            }
        }
    }

    pub async fn sign_up(&mut self, email: &str, password: &str) {
        let credentials = Credentials::new(email.trim(), password);
        match self.auth.sign_up(&credentials).await {
            Ok(_) => self.state.write_with(|s| {
                s.open_popup(Popup::Tooltip(Outcome::Success));
                s.navigate(View::SignIn);
            }),
            Err(err) => {
                self.report("Sign-up", &err);
                self.state
                    .write_with(|s| s.open_popup(Popup::Tooltip(Outcome::Failure)));
            }
        }
    }

    pub async fn sign_in(&mut self, email: &str, password: &str) {
        let credentials = Credentials::new(email.trim(), password);
        match self.auth.sign_in(&credentials).await {
            Ok(signed_in) => {
                self.auth.persist_token(&signed_in.token);
                self.state
                    .write_with(|s| s.signed_in(signed_in.token, Some(credentials.email)));
                self.load_gallery().await;
            }
            Err(err) => self.report("Sign-in", &err),
        }
    }

    pub fn sign_out(&mut self) {
        self.auth.clear_token();
        self.state.write_with(|s| {
            s.signed_out();
            s.close_all_popups();
        });
    }

    /// Fetch profile and cards together; each result is applied on its own.
    pub async fn load_gallery(&mut self) {
        let (profile, cards) = self.api().load_gallery().await;
        match profile {
            Ok(profile) => self.state.write_with(|s| s.set_profile(profile)),
            Err(err) => self.report("Loading profile", &err),
        }
        match cards {
            Ok(cards) => self.state.write_with(|s| s.set_cards(cards)),
            Err(err) => self.report("Loading cards", &err),
        }
    }

    pub async fn update_profile(&mut self, name: &str, about: &str) {
        let update = ProfileUpdate {
            name: name.trim().to_string(),
            about: about.trim().to_string(),
        };
        let api = self.api();
        self.state.write_with(|s| s.busy = true);
        let result = api.update_profile(&update).await;
        self.state.write_with(|s| s.busy = false);

        match result {
            Ok(profile) => self.state.write_with(|s| {
                s.set_profile(profile);
                s.close_all_popups();
            }),
            Err(err) => self.report("Profile update", &err),
        }
    }

    pub async fn update_avatar(&mut self, avatar_url: &str) {
        let update = AvatarUpdate {
            avatar_url: avatar_url.trim().to_string(),
        };
        let api = self.api();
        self.state.write_with(|s| s.busy = true);
        let result = api.update_avatar(&update).await;
        self.state.write_with(|s| s.busy = false);

        match result {
            Ok(profile) => self.state.write_with(|s| {
                s.set_profile(profile);
                s.close_all_popups();
            }),
            Err(err) => self.report("Avatar update", &err),
        }
    }

    /// Create a card and prepend the server's copy of it.
    pub async fn add_card(&mut self, title: &str, image_url: &str) {
        let card = NewCard {
            title: title.trim().to_string(),
            image_url: image_url.trim().to_string(),
        };
        let api = self.api();
        self.state.write_with(|s| s.busy = true);
        let result = api.create_card(&card).await;
        self.state.write_with(|s| s.busy = false);

        match result {
            Ok(created) => self.state.write_with(|s| {
                s.prepend_card(created);
                s.close_all_popups();
            }),
            Err(err) => self.report("Adding card", &err),
        }
    }

    /// Delete a card once the server confirms.
    pub async fn delete_card(&mut self, id: &str) {
        if !self.begin_card_request(id) {
            return;
        }
        let result = self.api().delete_card(id).await;
        self.state.write_with(|s| s.end_card_request(id));

        match result {
            Ok(()) => self.state.write_with(|s| {
                s.remove_card(id);
            }),
            Err(err) => self.report("Deleting card", &err),
        }
    }

    /// Flip the current user's like on a card.
    pub async fn toggle_like(&mut self, id: &str) {
        let Some(liked) = self.state.read_with(|s| s.card(id).map(|c| s.is_liked(c))) else {
            tracing::debug!("Like on unknown card {}", id);
            return;
        };
        if !self.begin_card_request(id) {
            return;
        }
        let result = self.api().set_like(id, !liked).await;
        self.state.write_with(|s| s.end_card_request(id));

        match result {
            Ok(card) => self.state.write_with(|s| s.replace_card(card)),
            Err(err) => self.report("Like", &err),
        }
    }

    fn begin_card_request(&mut self, id: &str) -> bool {
        let mut started = false;
        self.state.write_with(|s| started = s.begin_card_request(id));
        if !started {
            tracing::debug!("Request for card {} already in flight", id);
        }
        started
    }

    pub fn open_popup(&mut self, popup: Popup) {
        self.state.write_with(|s| s.open_popup(popup));
    }

    pub fn select_card(&mut self, card: api::Card) {
        self.state.write_with(|s| s.select_card(card));
    }

    pub fn close_all_popups(&mut self) {
        self.state.write_with(AppState::close_all_popups);
    }

    pub fn navigate(&mut self, view: View) {
        self.state.write_with(|s| s.navigate(view));
    }

    pub fn dismiss_error(&mut self) {
        self.state.write_with(AppState::dismiss_error);
    }
}
