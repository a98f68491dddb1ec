use anyhow::Result;
use authmate_api::prelude::*;
use dialoguer::Input;
use dialoguer::Password;

/// Stands in for the browser's router: "navigating" prints where the web
/// front end would have gone.
pub struct TerminalNavigator {
    pub web_url: String,
    pub visited: Vec<Destination>,
}

impl TerminalNavigator {
    pub fn new(web_url: &str) -> Self {
        Self {
            web_url: web_url.trim_end_matches('/').to_string(),
            visited: vec![],
        }
    }

    pub fn url_for(&self, destination: Destination) -> String {
        format!("{}{}", self.web_url, destination.path())
    }
}

impl Navigator for TerminalNavigator {
    fn navigate(&mut self, destination: Destination) {
        println!("    {}", self.url_for(destination));
        self.visited.push(destination);
    }
}

/// Ask for whatever is missing, then log in.
pub async fn login<C: AuthClient, S: SessionStore>(
    client: &C,
    session: &mut S,
    navigator: &mut TerminalNavigator,
    email: Option<String>,
) -> Result<()> {
    let email = match email {
        Some(email) => email,
        None => Input::<String>::new()
            .with_prompt("Email address")
            .interact_text()?,
    };
    let password = Password::new().with_prompt("Password").interact()?;

    let mut form = LoginForm::new();
    form.handle_change(Field::Email, email);
    form.handle_change(Field::Password, password);
    submit(&mut form, client, session, navigator).await
}

pub async fn submit<C: AuthClient, S: SessionStore>(
    form: &mut LoginForm,
    client: &C,
    session: &mut S,
    navigator: &mut TerminalNavigator,
) -> Result<()> {
    if form.submit(client, session, navigator).await {
        println!("✅ {}", form.state().message);
        Ok(())
    } else {
        anyhow::bail!("{}", form.state().error)
    }
}
