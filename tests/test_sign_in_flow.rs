//! End-to-end tests for the sign-in and home screens sharing one provider.

use phone_signin::{
    HomeScreen, HomeView, Locale, Route, SessionError, SessionProvider, SignInScreen,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Type a number, submit, see it greeted, log out, go back to sign in.
#[test]
fn test_full_sign_in_cycle() {
    let provider = SessionProvider::new();
    let mut sign_in = SignInScreen::new(provider.handle(), Locale::En);
    let mut home = HomeScreen::new(provider.handle(), Locale::En);

    let renders = Arc::new(AtomicUsize::new(0));
    let renders_clone = Arc::clone(&renders);
    let _subscription = provider
        .handle()
        .subscribe(move |_| {
            renders_clone.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

    // Typing
    for n in 1..=10 {
        sign_in.set_input(&"5551234567"[..n]);
        assert_eq!(sign_in.submit_enabled(), n == 10);
    }

    // Submit
    assert_eq!(sign_in.submit().unwrap(), Route::Home);
    assert_eq!(
        home.view().unwrap(),
        HomeView::Welcome {
            phone_number: "(555) 123-4567".to_string()
        }
    );
    assert_eq!(home.message().unwrap(), "Welcome, (555) 123-4567!");

    // Logout
    home.logout().unwrap();
    assert_eq!(
        home.view().unwrap(),
        HomeView::SignedOutPrompt {
            show_go_to_sign_in: true
        }
    );
    assert!(provider.handle().current_session().unwrap().is_none());

    // Back to sign in
    assert_eq!(home.go_to_sign_in(), Route::SignIn);
    assert_eq!(renders.load(Ordering::SeqCst), 2);
}

#[test]
fn test_punctuated_input_cannot_be_submitted() {
    let provider = SessionProvider::new();
    let mut sign_in = SignInScreen::new(provider.handle(), Locale::Vi);

    sign_in.set_input("(555) 123-4567");
    assert_eq!(sign_in.validation_label(), "Không hợp lệ");
    assert_eq!(sign_in.submit(), Err(SessionError::SubmitDisabled));
    assert!(provider.handle().current_session().unwrap().is_none());
}

#[test]
fn test_resubmitting_replaces_session() {
    let provider = SessionProvider::new();
    let mut sign_in = SignInScreen::new(provider.handle(), Locale::En);
    let home = HomeScreen::new(provider.handle(), Locale::En);

    sign_in.set_input("5551234567");
    sign_in.submit().unwrap();
    sign_in.set_input("0901234567");
    sign_in.submit().unwrap();

    assert_eq!(home.message().unwrap(), "Welcome, (090) 123-4567!");
}

#[test]
fn test_screens_fail_once_provider_is_gone() {
    let provider = SessionProvider::new();
    let mut sign_in = SignInScreen::new(provider.handle(), Locale::En);
    let home = HomeScreen::new(provider.handle(), Locale::En);
    drop(provider);

    sign_in.set_input("5551234567");
    assert!(matches!(
        sign_in.submit(),
        Err(SessionError::Configuration(_))
    ));
    assert!(home.view().is_err());
}
