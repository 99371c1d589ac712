//! # Application state
//!
//! [`AppState`] is the single source of truth the views render from. It is plain
//! data plus synchronous transitions; anything that needs the network lives in
//! [`crate::Mesto`], which calls these transitions once a response arrives.
//!
//! ## Session status
//!
//! ```text
//! Unauthenticated ──start with token──▶ Checking ──ok──▶ Authenticated
//!        ▲                                 │
//!        └──────────── rejected ───────────┘
//! ```
//!
//! ## Popups
//!
//! At most one popup is open. [`Popup::ViewImage`] carries the selected card,
//! so closing the popup also forgets the selection.

use std::collections::BTreeSet;

use api::{Card, ErrorKind, UserProfile};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Unauthenticated,
    Checking,
    Authenticated,
}

/// Top-level screen the router should show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    SignIn,
    SignUp,
    Main,
}

/// Result shown by the registration tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Popup {
    #[default]
    None,
    EditProfile,
    EditAvatar,
    AddPlace,
    ViewImage(Card),
    Tooltip(Outcome),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub status: SessionStatus,
    pub view: View,
    /// Token of the active session, mirrored from the token store.
    pub token: Option<String>,
    /// Email of the signed-in account, shown in the header.
    pub email: Option<String>,
    pub current_user: Option<UserProfile>,
    /// Newest first.
    pub cards: Vec<Card>,
    pub popup: Popup,
    /// A popup form submission is waiting for the server.
    pub busy: bool,
    /// Cards with an outstanding like or delete request.
    pub in_flight: BTreeSet<String>,
    pub last_error: Option<ErrorKind>,
}

impl AppState {
    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }

    pub fn current_user_id(&self) -> Option<&str> {
        self.current_user.as_ref().map(|u| u.id.as_str())
    }

    /// Whether the current user has liked `card`.
    pub fn is_liked(&self, card: &Card) -> bool {
        self.current_user_id()
            .is_some_and(|id| card.is_liked_by(id))
    }

    /// Whether the current user may delete `card`.
    pub fn is_own(&self, card: &Card) -> bool {
        self.current_user_id()
            .is_some_and(|id| card.is_owned_by(id))
    }

    pub fn card(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn selected_card(&self) -> Option<&Card> {
        match &self.popup {
            Popup::ViewImage(card) => Some(card),
            _ => None,
        }
    }

    pub fn open_popup(&mut self, popup: Popup) {
        self.popup = popup;
    }

    pub fn select_card(&mut self, card: Card) {
        self.popup = Popup::ViewImage(card);
    }

    pub fn close_all_popups(&mut self) {
        self.popup = Popup::None;
    }

    pub fn navigate(&mut self, view: View) {
        self.view = view;
    }

    /// A stored token is about to be verified.
    pub fn checking(&mut self, token: String) {
        self.status = SessionStatus::Checking;
        self.token = Some(token);
    }

    pub fn signed_in(&mut self, token: String, email: Option<String>) {
        self.status = SessionStatus::Authenticated;
        self.token = Some(token);
        if email.is_some() {
            self.email = email;
        }
        self.view = View::Main;
        self.last_error = None;
        if matches!(self.popup, Popup::Tooltip(_)) {
            self.popup = Popup::None;
        }
    }

    /// Drop everything tied to the session. Popups such as the sign-up
    /// tooltip stay as they are.
    pub fn signed_out(&mut self) {
        self.status = SessionStatus::Unauthenticated;
        self.token = None;
        self.email = None;
        self.current_user = None;
        self.cards.clear();
        self.in_flight.clear();
        self.view = View::SignIn;
    }

    pub fn set_profile(&mut self, profile: UserProfile) {
        self.current_user = Some(profile);
    }

    pub fn set_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    pub fn prepend_card(&mut self, card: Card) {
        self.cards.retain(|c| c.id != card.id);
        self.cards.insert(0, card);
    }

    /// Swap in the server's copy of a card. Unknown ids are ignored.
    pub fn replace_card(&mut self, card: Card) {
        if let Some(slot) = self.cards.iter_mut().find(|c| c.id == card.id) {
            *slot = card;
        }
    }

    /// Remove a card by id. Returns whether it was present.
    pub fn remove_card(&mut self, id: &str) -> bool {
        let before = self.cards.len();
        self.cards.retain(|c| c.id != id);
        if let Popup::ViewImage(card) = &self.popup {
            if card.id == id {
                self.popup = Popup::None;
            }
        }
        self.cards.len() != before
    }

    /// Mark a card as busy. Returns `false` if a request is already pending.
    pub fn begin_card_request(&mut self, id: &str) -> bool {
        self.in_flight.insert(id.to_string())
    }

    pub fn end_card_request(&mut self, id: &str) {
        self.in_flight.remove(id);
    }

    pub fn record_error(&mut self, kind: ErrorKind) {
        self.last_error = Some(kind);
    }

    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }
}
