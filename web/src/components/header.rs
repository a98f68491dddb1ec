use authmate_api::prelude::SessionStore;
use dioxus::prelude::*;

use crate::AUTH_STORE;
use crate::Route;

const NAV_STYLE: &'static str = "display: flex; align-items: center; justify-content: space-between; padding: 12px 24px; background-color: #eef2ff; font-family: Arial, sans-serif;";
const ACCOUNT_LINK_STYLE: &'static str = "padding: 8px 16px; border-radius: 4px; background-color: #4f46e5; color: white; text-decoration: none;";

/// Where the top bar sends someone, depending on whether they hold a
/// session. Logging out happens on the dashboard.
fn account_link(authenticated: bool) -> (Route, &'static str) {
    if authenticated {
        (Route::DashboardView, "Dashboard")
    } else {
        (Route::AuthLoginView, "Log In")
    }
}

#[component]
pub fn Header(hide_auth: bool) -> Element {
    let (target, label) = account_link(AUTH_STORE.read().is_authenticated());

    rsx! {
        nav {
            style: NAV_STYLE,
            Link {
                to: Route::HomeView,
                style: "text-decoration: none; color: #312e81; font-weight: bold; font-size: 20px;",
                "AuthMate"
            }
            if !hide_auth {
                Link {
                    to: target,
                    style: ACCOUNT_LINK_STYLE,
                    "{label}"
                }
            }
        }
    }
}
