use dioxus::prelude::*;

use super::components::Header;
use crate::Route;

// Account creation and password resets belong to the AuthMate service. These
// pages only exist so the login screen's links resolve.

#[component]
pub fn SignupView() -> Element {
    rsx! {
        ExternalFlow {
            title: "Sign Up",
            body: "Accounts are created through the AuthMate service. Check your invitation email for a signup link.",
        }
    }
}

#[component]
pub fn ResetPasswordView() -> Element {
    rsx! {
        ExternalFlow {
            title: "Reset Password",
            body: "Password resets are handled by the AuthMate service. Contact your administrator for a reset link.",
        }
    }
}

#[component]
fn ExternalFlow(title: String, body: String) -> Element {
    rsx! {
        Header { hide_auth: true },
        div {
            style: "padding: 40px; max-width: 400px; margin: 0 auto; font-family: Arial, sans-serif;",
            h1 {
                style: "text-align: center; margin-bottom: 30px; color: #333;",
                "{title}"
            }
            p { "{body}" }
            Link { to: Route::AuthLoginView, "Back to login" }
        }
    }
}
