//! # API crate: HTTP clients for the Mesto backend
//!
//! Mesto talks to two servers: a resource server that owns profiles and cards,
//! and an auth server that issues session tokens. This crate wraps each in a
//! thin client with a typed, `Result`-returning surface so the UI never touches
//! raw HTTP.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`Api`], the resource client: profile, avatar, card CRUD, likes |
//! | [`auth`] | [`Auth`], the auth client: sign-up, sign-in, token check, token persistence |
//! | [`models`] | Wire models (`UserProfile`, `Card`, `Account`, request bodies) |
//! | [`error`] | The unified [`Error`] enum, its [`ErrorKind`] projection, and [`Result`] |
//!
//! Both clients are constructed from a [`MestoConfig`] and are cheap to clone.
//! Neither retries; retry and presentation policy belong to the caller.

pub mod auth;
pub mod client;
pub mod error;
mod http;
pub mod models;

pub use auth::{Auth, Credentials, SignIn};
pub use client::{Api, Credential};
pub use error::{Error, ErrorKind, Result};
pub use models::{Account, AvatarUpdate, Card, NewCard, ProfileUpdate, UserProfile, UserRef};

pub use store::MestoConfig;
