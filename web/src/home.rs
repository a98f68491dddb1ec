use dioxus::prelude::*;

use super::components::Header;
use crate::Route;

#[component]
pub fn HomeView() -> Element {
    rsx! {
        Header { hide_auth: false },
        div {
            style: "padding: 40px; max-width: 400px; margin: 0 auto; font-family: Arial, sans-serif; text-align: center;",

            h1 {
                style: "margin-bottom: 30px; color: #333;",
                "Welcome to AuthMate"
            }

            div {
                style: "display: flex; gap: 10px; justify-content: center;",
                Link { to: Route::AuthLoginView,
                    button {
                        style: "padding: 12px; background-color: #4f46e5; color: white; border: none; border-radius: 4px; font-size: 16px; cursor: pointer;",
                        "Log In"
                    }
                }
                Link { to: Route::SignupView,
                    button {
                        style: "padding: 12px; background-color: #28a745; color: white; border: none; border-radius: 4px; font-size: 16px; cursor: pointer;",
                        "Sign Up"
                    }
                }
            }
        }
    }
}
