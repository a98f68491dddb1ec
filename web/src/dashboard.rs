use authmate_api::prelude::SessionStore;
use dioxus::prelude::*;

use super::components::Header;
use crate::AUTH_STORE;
use crate::Route;

#[component]
pub fn DashboardView() -> Element {
    let navigator = use_navigator();
    let authenticated = AUTH_STORE.read().is_authenticated();

    rsx! {
        Header { hide_auth: true },
        div {
            style: "padding: 40px; max-width: 400px; margin: 0 auto; font-family: Arial, sans-serif;",

            if authenticated {
                h1 {
                    style: "text-align: center; margin-bottom: 30px; color: #333;",
                    "You are logged in!"
                }
                button {
                    style: "padding: 12px; background-color: #28a745; color: white; border: none; border-radius: 4px; font-size: 16px; cursor: pointer;",
                    onclick: move |_| {
                        AUTH_STORE.write().logout();
                        navigator.push(Route::HomeView);
                    },
                    "Logout"
                }
            } else {
                h1 {
                    style: "text-align: center; margin-bottom: 30px; color: #333;",
                    "Your session has ended"
                }
                Link { to: Route::AuthLoginView, "Log in again" }
            }
        }
    }
}
