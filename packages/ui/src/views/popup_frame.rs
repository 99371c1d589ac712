use dioxus::prelude::*;

/// A full-screen overlay that centers its children in a popup container.
/// Clicking the backdrop or the close button triggers `on_close`.
#[component]
pub fn PopupFrame(
    /// Modifier appended to the `popup_type_` class.
    kind: String,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "popup popup_type_{kind} popup_opened",
            onclick: move |_| on_close.call(()),
            div {
                class: "popup__container",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                button {
                    class: "popup__close",
                    r#type: "button",
                    aria_label: "Close",
                    onclick: move |_| on_close.call(()),
                }
                {children}
            }
        }
    }
}

/// A popup holding a single form with a title and a submit button.
#[component]
pub fn PopupWithForm(
    kind: String,
    title: String,
    submit_label: String,
    /// A submission is pending; the button is disabled and relabelled.
    #[props(default)]
    busy: bool,
    on_submit: EventHandler<()>,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        PopupFrame {
            kind,
            on_close,
            form {
                class: "form",
                novalidate: true,
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit.call(());
                },
                h2 { class: "form__title", "{title}" }
                fieldset {
                    class: "form__set",
                    {children}
                }
                button {
                    class: "form__submit",
                    r#type: "submit",
                    disabled: busy,
                    if busy { "Сохранение..." } else { "{submit_label}" }
                }
            }
        }
    }
}
