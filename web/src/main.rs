use authmate_api::routes::Destination;
use dioxus::prelude::*;

mod components;
mod dashboard;
mod home;
mod links;
mod login;
mod stores;

use dashboard::DashboardView;
use home::HomeView;
use links::ResetPasswordView;
use links::SignupView;
use login::AuthLoginView;
use login::LoginView;

pub use stores::AUTH_STORE;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    HomeView,
    #[route("/login")]
    LoginView,
    #[route("/auth/login")]
    AuthLoginView,
    #[route("/dashboard")]
    DashboardView,
    #[route("/auth/signup")]
    SignupView,
    #[route("/users/reset_password")]
    ResetPasswordView,
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Home => Route::HomeView,
            Destination::Login => Route::AuthLoginView,
            Destination::Dashboard => Route::DashboardView,
            Destination::Signup => Route::SignupView,
            Destination::ResetPassword => Route::ResetPasswordView,
        }
    }
}

/// Lets the login form drive the router.
pub struct RouteNavigator(dioxus::router::prelude::Navigator);

impl authmate_api::routes::Navigator for RouteNavigator {
    fn navigate(&mut self, destination: Destination) {
        self.0.push(Route::from(destination));
    }
}

fn app() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

fn main() {
    launch(app);
}
