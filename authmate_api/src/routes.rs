/// The login screen's canonical entry route. Only here does the form offer
/// a way back to the landing page.
pub const LOGIN_PATH: &'static str = "/auth/login";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    Home,
    Login,
    Dashboard,
    Signup,
    ResetPassword,
}

impl Destination {
    pub fn path(&self) -> &'static str {
        match self {
            Destination::Home => "/",
            Destination::Login => LOGIN_PATH,
            Destination::Dashboard => "/dashboard",
            Destination::Signup => "/auth/signup",
            Destination::ResetPassword => "/users/reset_password/",
        }
    }
}

/// Moves the user to another screen. Routing itself belongs to whoever
/// renders the form.
pub trait Navigator {
    fn navigate(&mut self, destination: Destination);
}

pub fn shows_back_link(path: &str) -> bool {
    path == LOGIN_PATH
}
