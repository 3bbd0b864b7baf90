//! Phone sign-in - terminal front end.
//!
//! Drives the sign-in and home screens from stdin. Each line is either a
//! command (`/submit`, `/logout`, `/signin`, `/quit`) or the new contents of
//! the phone field.

use anyhow::Result;
use phone_signin::{
    Config, HomeScreen, HomeView, Route, SessionError, SessionProvider, SignInScreen,
};
use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Logs go to stderr so they don't interleave with the screens on stdout
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(locale = %config.locale, "Starting phone sign-in");

    let provider = SessionProvider::new();
    let mut sign_in = SignInScreen::new(provider.handle(), config.locale);
    let mut home = HomeScreen::new(provider.handle(), config.locale);

    // Home re-renders whenever the session changes
    let dirty = Arc::new(AtomicBool::new(false));
    let dirty_flag = Arc::clone(&dirty);
    let _subscription = provider.handle().subscribe(move |_| {
        dirty_flag.store(true, Ordering::Relaxed);
    })?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut route = Route::SignIn;

    render(&mut stdout, route, &sign_in, &home)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim_end_matches('\r');

        match (route, input) {
            (_, "/quit") => break,
            (Route::SignIn, "/submit") => match sign_in.submit() {
                Ok(next) => route = next,
                Err(SessionError::SubmitDisabled) => {
                    writeln!(stdout, "! {}", sign_in.validation_label())?;
                }
                Err(e) => {
                    error!("Sign-in failed: {}", e);
                    return Err(e.into());
                }
            },
            (Route::SignIn, text) => sign_in.set_input(text),
            (Route::Home, "/logout") => home.logout()?,
            (Route::Home, "/signin") => {
                if matches!(
                    home.view()?,
                    HomeView::SignedOutPrompt {
                        show_go_to_sign_in: true
                    }
                ) {
                    route = home.go_to_sign_in();
                    sign_in.set_input("");
                }
            }
            (Route::Home, other) => {
                writeln!(stdout, "? {}", other)?;
            }
        }

        if dirty.swap(false, Ordering::Relaxed) {
            info!("session changed, re-rendering");
        }
        render(&mut stdout, route, &sign_in, &home)?;
    }

    info!("Phone sign-in shutdown complete");
    Ok(())
}

fn render(
    out: &mut impl Write,
    route: Route,
    sign_in: &SignInScreen,
    home: &HomeScreen,
) -> Result<()> {
    match route {
        Route::SignIn => {
            writeln!(out, "== {} ==", sign_in.title())?;
            if sign_in.input().is_empty() {
                writeln!(out, "[ {} ]", sign_in.placeholder())?;
            } else {
                writeln!(out, "[ {} ]", sign_in.input())?;
            }
            writeln!(out, "{}", sign_in.validation_label())?;
            if sign_in.submit_enabled() {
                writeln!(out, "/submit  {}", sign_in.submit_label())?;
            }
        }
        Route::Home => {
            let labels = home.labels();
            writeln!(out, "== {} ==", home.title())?;
            writeln!(out, "{}", home.message()?)?;
            match home.view()? {
                HomeView::Welcome { .. } => writeln!(out, "/logout  {}", labels.logout)?,
                HomeView::SignedOutPrompt {
                    show_go_to_sign_in: true,
                } => writeln!(out, "/signin  {}", labels.go_to_sign_in)?,
                HomeView::SignedOutPrompt { .. } => {}
            }
        }
    }
    out.flush()?;
    Ok(())
}
