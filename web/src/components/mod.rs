mod header;
mod login_panel;

pub use header::Header;
pub use login_panel::LoginPanel;
