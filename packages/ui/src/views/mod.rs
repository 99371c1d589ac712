mod popup_frame;
pub use popup_frame::{PopupFrame, PopupWithForm};

mod popups;
pub use popups::{
    AddPlacePopup, EditAvatarPopup, EditProfilePopup, FormField, ImagePopup, InfoTooltip, Popups,
};

mod card;
pub use card::CardItem;

mod profile;
pub use profile::Profile;

mod gallery;
pub use gallery::{ErrorNotice, GalleryView};

mod auth_form;
pub use auth_form::AuthForm;
