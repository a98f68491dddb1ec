use authmate_api::routes::Navigator;
use authmate_api::routes::shows_back_link;
use dioxus::prelude::*;

use super::components::Header;
use super::components::LoginPanel;
use crate::Route;
use crate::RouteNavigator;

#[component]
pub fn LoginView() -> Element {
    rsx! {
        LoginScreen {}
    }
}

#[component]
pub fn AuthLoginView() -> Element {
    rsx! {
        LoginScreen {}
    }
}

/// The login panel is mounted on more than one route, only the canonical
/// one gets a back link.
#[component]
fn LoginScreen() -> Element {
    let navigator = use_navigator();
    let path = use_route::<Route>().to_string();
    rsx! {
        Header { hide_auth: true },
        LoginPanel {
            show_back: shows_back_link(&path),
            on_navigate: move |destination| {
                RouteNavigator(navigator).navigate(destination);
            }
        }
    }
}
