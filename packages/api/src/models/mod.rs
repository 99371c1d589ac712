//! Wire models for the resource and auth APIs.

mod card;
mod user;

pub use card::{Card, NewCard};
pub(crate) use user::Envelope;
pub use user::{Account, AvatarUpdate, ProfileUpdate, UserProfile, UserRef};
