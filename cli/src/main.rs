use std::path::PathBuf;

use anyhow::Result;
use authmate_api::WEB_URL;
use authmate_api::prelude::*;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use log::LevelFilter;
use log::warn;

mod login;
mod session;

use login::TerminalNavigator;
use session::FileSessionStore;

const SESSION_PATH: &str = ".authmate_session.json";

#[tokio::main]
async fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_logger(matches.get_count("verbose"));

    if let Err(err) = run(matches).await {
        eprintln!("❌ {}", err);

        // Print all errors in the chain
        for (i, cause) in err.chain().enumerate().skip(1) {
            eprintln!("  {}: {}", i, cause);
        }

        std::process::exit(1);
    } else {
        Ok(())
    }
}

fn init_logger(verbosity: u8) {
    let mut builder = env_logger::Builder::from_default_env();
    match verbosity {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Info);
        }
        2 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.init();
}

async fn run(matches: ArgMatches) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let api = match matches.get_one::<String>("url") {
        Some(url) => AuthMateApi::new(url.clone()),
        None => match std::env::var("AUTHMATE_URL") {
            Ok(url) => AuthMateApi::new(url),
            Err(_) => AuthMateApi::default(),
        },
    };
    let web_url = matches
        .get_one::<String>("web-url")
        .cloned()
        .unwrap_or(WEB_URL.to_string());
    let session_path = matches
        .get_one::<String>("session")
        .map(|p| {
            let in_path = PathBuf::from(p);
            if in_path.is_relative() {
                cwd.join(in_path)
            } else {
                in_path
            }
        })
        .unwrap_or(cwd.join(SESSION_PATH));

    let mut session = FileSessionStore::new(session_path);
    if let Err(e) = session.init() {
        // a broken session file must not stand in the way of removing it
        if matches.subcommand_name() != Some("logout") {
            return Err(e);
        }
        warn!("{e}");
    }
    let mut navigator = TerminalNavigator::new(&web_url);

    if let Some(matches) = matches.subcommand_matches("login") {
        if session.is_authenticated() {
            println!("Replacing the session stored at {:?}", session.path());
        }
        let email = matches.get_one::<String>("email").cloned();
        login::login(&api, &mut session, &mut navigator, email).await?;
    } else if let Some(_) = matches.subcommand_matches("logout") {
        session.logout();
        println!("Logged out");
    } else if let Some(_) = matches.subcommand_matches("status") {
        if session.is_authenticated() {
            println!("Logged in, session stored at {:?}", session.path());
        } else {
            println!("Not logged in");
        }
    } else if let Some(_) = matches.subcommand_matches("signup") {
        open_page(&navigator, Destination::Signup)?;
    } else if let Some(_) = matches.subcommand_matches("reset-password") {
        open_page(&navigator, Destination::ResetPassword)?;
    }
    session.teardown();
    Ok(())
}

fn open_page(navigator: &TerminalNavigator, destination: Destination) -> Result<()> {
    let url = navigator.url_for(destination);
    println!("    {url}");
    open::that(url)?;
    Ok(())
}

fn cli() -> Command {
    Command::new("authmate")
        .version("0.1.0")
        .about("Log in to AuthMate")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true)
                .help("Sets the level of verbosity"),
        )
        .arg(
            Arg::new("url")
                .long("url")
                .value_name("url")
                .action(ArgAction::Set)
                .global(true)
                .help("Base url of the authentication service (defaults to $AUTHMATE_URL)"),
        )
        .arg(
            Arg::new("web-url")
                .long("web-url")
                .value_name("url")
                .action(ArgAction::Set)
                .global(true)
                .help("Base url of the AuthMate web app"),
        )
        .arg(
            Arg::new("session")
                .short('s')
                .long("session")
                .value_name("path")
                .action(ArgAction::Set)
                .global(true)
                .help("Where to keep the session tokens"),
        )
        .subcommand(
            Command::new("login")
                .about("log in with an email and password")
                .arg(
                    Arg::new("email")
                        .short('e')
                        .long("email")
                        .value_name("email")
                        .action(ArgAction::Set)
                        .help("Email address, prompted for when omitted"),
                ),
        )
        .subcommand(Command::new("logout").about("forget the stored session"))
        .subcommand(Command::new("status").about("show whether a session is stored"))
        .subcommand(Command::new("signup").about("open the signup page in a browser"))
        .subcommand(
            Command::new("reset-password").about("open the password reset page in a browser"),
        )
}
