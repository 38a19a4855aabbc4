use dioxus::prelude::*;
use shell::{Config, Credentials, SharedStorage, SignInError};
use types::login::{Field, FieldErrors, LoginForm};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let config = use_context::<Config>();
    let storage = use_context::<SharedStorage>();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::default);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let form = LoginForm::new(username(), password());
        let credentials = Credentials::new(storage.clone(), config.token_key.as_str());
        match credentials.sign_in(&form) {
            Ok(()) => {
                navigator().replace(Route::Dashboard {});
            }
            Err(SignInError::Invalid(invalid)) => errors.set(invalid),
            Err(SignInError::Storage(e)) => tracing::warn!("credential not stored: {e}"),
        }
    };

    let username_error = errors.read().get(Field::Username);
    let password_error = errors.read().get(Field::Password);

    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                div { class: "login-header",
                    h1 { class: "login-title", "Login" }
                }
                form { class: "login-form", onsubmit: on_submit,
                    div { class: "form-group",
                        input {
                            id: "username",
                            name: "username",
                            class: if username_error.is_some() { "form-input form-input-error" } else { "form-input" },
                            r#type: "text",
                            placeholder: "Username",
                            autocomplete: "username",
                            value: "{username}",
                            oninput: move |e| {
                                username.set(e.value());
                                errors.write().clear(Field::Username);
                            },
                        }
                        if let Some(message) = username_error {
                            div { class: "form-error", "{message}" }
                        }
                    }
                    div { class: "form-group",
                        input {
                            id: "password",
                            name: "password",
                            class: if password_error.is_some() { "form-input form-input-error" } else { "form-input" },
                            r#type: "password",
                            placeholder: "Password",
                            autocomplete: "current-password",
                            value: "{password}",
                            oninput: move |e| {
                                password.set(e.value());
                                errors.write().clear(Field::Password);
                            },
                        }
                        if let Some(message) = password_error {
                            div { class: "form-error", "{message}" }
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary login-btn",
                        "Log In"
                    }
                }
            }
        }
    }
}
