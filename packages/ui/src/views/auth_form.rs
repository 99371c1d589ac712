use dioxus::prelude::*;

use super::popups::FormField;

/// Email and password form shared by the sign-in and sign-up pages.
///
/// Empty submissions are dropped here; everything else goes to `on_submit`
/// as `(email, password)`.
#[component]
pub fn AuthForm(
    title: String,
    submit_label: String,
    on_submit: EventHandler<(String, String)>,
    /// Rendered under the submit button, e.g. a link to the other page.
    children: Element,
) -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let e = email().trim().to_string();
        let p = password();
        if e.is_empty() || p.is_empty() {
            return;
        }
        on_submit.call((e, p));
    };

    rsx! {
        div {
            class: "auth",
            form {
                class: "form form__auth",
                onsubmit: handle_submit,
                h2 { class: "form__title-auth", "{title}" }
                fieldset {
                    class: "form__set-auth",
                    FormField {
                        name: "email",
                        input_type: "email",
                        placeholder: "Email",
                        class: "form__input form__input_auth",
                        value: email(),
                        oninput: move |v| email.set(v),
                    }
                    FormField {
                        name: "password",
                        input_type: "password",
                        placeholder: "Пароль",
                        class: "form__input form__input_auth",
                        value: password(),
                        oninput: move |v| password.set(v),
                    }
                }
                button { class: "form__submit-auth", r#type: "submit", "{submit_label}" }
                {children}
            }
        }
    }
}
