use authmate_api::AuthClient;
use authmate_api::AuthMateApi;
use authmate_api::LoginForm;
use authmate_api::form::Field;
use authmate_api::form::Phase;
use authmate_api::routes::Destination;
use dioxus::prelude::*;

use crate::AUTH_STORE;
use crate::Route;

const INPUT_STYLE: &'static str = "width: 100%; padding: 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 16px;";
const LABEL_STYLE: &'static str =
    "display: block; margin-bottom: 5px; font-weight: bold; color: #555;";

#[derive(Props, Clone, PartialEq)]
pub struct LoginPanelProps {
    show_back: bool,
    on_navigate: EventHandler<Destination>,
}

#[component]
pub fn LoginPanel(props: LoginPanelProps) -> Element {
    let mut form = use_signal(LoginForm::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(credentials) = form.write().begin_submit() else {
            return;
        };

        spawn(async move {
            let api = AuthMateApi::default();
            let outcome = api
                .submit_credentials(&credentials.email, &credentials.password)
                .await;
            let destination = form.write().settle(outcome, &mut *AUTH_STORE.write());
            if let Some(destination) = destination {
                props.on_navigate.call(destination);
            }
        });
    };

    let state = form.read().state().clone();
    let email = form.read().form().email.clone();
    let password = form.read().form().password.clone();

    rsx! {
        div {
            style: "padding: 40px; max-width: 400px; margin: 0 auto; font-family: Arial, sans-serif;",

            if props.show_back {
                button {
                    style: "margin-bottom: 16px; background: none; border: none; color: #4f46e5; font-size: 16px; cursor: pointer;",
                    onclick: move |_| props.on_navigate.call(Destination::Home),
                    "← Back"
                }
            }

            img {
                alt: "AuthMate Logo",
                src: "/favicon.svg",
                style: "display: block; margin: 0 auto; height: 64px;",
            }

            h1 {
                style: "text-align: center; margin-bottom: 30px; color: #333;",
                "Log In to Your Account"
            }

            form {
                onsubmit: handle_submit,

                div {
                    style: "margin-bottom: 20px;",
                    label {
                        r#for: "email",
                        style: LABEL_STYLE,
                        "Email address"
                    }
                    input {
                        id: "email",
                        name: "email",
                        r#type: "email",
                        required: true,
                        autocomplete: "email",
                        value: "{email}",
                        oninput: move |e| form.write().handle_change(Field::Email, e.value()),
                        style: INPUT_STYLE,
                    }
                }

                div {
                    style: "margin-bottom: 30px;",
                    label {
                        r#for: "password",
                        style: LABEL_STYLE,
                        "Password"
                    }
                    input {
                        id: "password",
                        name: "password",
                        r#type: "password",
                        required: true,
                        autocomplete: "current-password",
                        value: "{password}",
                        oninput: move |e| form.write().handle_change(Field::Password, e.value()),
                        style: INPUT_STYLE,
                    }
                }

                if state.phase() == Phase::Failed {
                    p {
                        style: "padding: 10px; border-radius: 4px; background-color: #f8d7da; color: #721c24; border: 1px solid #f5c6cb;",
                        "{state.error}"
                    }
                }
                if state.phase() == Phase::Succeeded {
                    p {
                        style: "padding: 10px; border-radius: 4px; background-color: #d4edda; color: #155724; border: 1px solid #c3e6cb;",
                        "{state.message}"
                    }
                }

                button {
                    r#type: "submit",
                    disabled: state.loading,
                    style: "width: 100%; padding: 12px; background-color: #4f46e5; color: white; border: none; border-radius: 4px; font-size: 16px; cursor: pointer; transition: background-color 0.2s;",
                    style: if state.loading { "opacity: 0.6; cursor: not-allowed;" } else { "" },
                    if state.loading { "⏳" } else { "Log In" }
                }
            }

            div {
                style: "margin-top: 24px; text-align: center;",
                Link {
                    to: Route::ResetPasswordView,
                    style: "font-weight: bold; color: #4f46e5;",
                    "Forgot your password?"
                }
            }

            p {
                style: "margin-top: 40px; text-align: center; color: #6b7280;",
                "Don't have an account? "
                Link {
                    to: Route::SignupView,
                    style: "font-weight: bold; color: #4f46e5;",
                    "Sign Up"
                }
            }
        }
    }
}
