//! Login and signup flows.
//!
//! A token is only persisted once the whole chain succeeds: a signup whose
//! follow-up login fails leaves the session untouched.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::PhotoApi;
use crate::net::error::ApiError;
use crate::net::types::{Credentials, SignupForm};
use crate::routes;
use crate::state::session::SessionStore;

/// Inline error when login fails without a server message.
pub const LOGIN_FAILED: &str = "Invalid email or password";
/// Inline error when signup fails without a server message.
pub const SIGNUP_FAILED: &str = "Signup failed";
/// Notice shown after a successful login.
pub const LOGIN_SUCCEEDED: &str = "Login successful!";
/// Notice shown after signup and the automatic login both succeed.
pub const SIGNUP_SUCCEEDED: &str = "Account created and logged in successfully!";

/// Result of an auth form submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Token persisted; show `notice` and go to `to`.
    SignedIn { to: &'static str, notice: &'static str },
    /// The server accepted the request but issued no token; nothing changes.
    NoToken,
    /// Show `message` inline and stay on the form.
    Failed(String),
}

/// Submit credentials and persist the returned token.
pub async fn login<A, S>(api: &A, session: &S, credentials: &Credentials) -> AuthOutcome
where
    A: PhotoApi,
    S: SessionStore,
{
    match api.login(credentials).await {
        Ok(resp) => match resp.into_token() {
            Some(token) => {
                session.write(&token);
                log::info!("signed in as {}", credentials.email);
                AuthOutcome::SignedIn { to: routes::PROFILE, notice: LOGIN_SUCCEEDED }
            }
            None => {
                log::warn!("login response carried no token");
                AuthOutcome::NoToken
            }
        },
        Err(err) => {
            log::warn!("login failed: {err}");
            AuthOutcome::Failed(failure_message(&err, LOGIN_FAILED))
        }
    }
}

/// Register an account, then log in with the same email and password.
pub async fn signup<A, S>(api: &A, session: &S, form: &SignupForm) -> AuthOutcome
where
    A: PhotoApi,
    S: SessionStore,
{
    if let Err(err) = api.signup(form).await {
        log::warn!("signup failed: {err}");
        return AuthOutcome::Failed(failure_message(&err, SIGNUP_FAILED));
    }
    match api.login(&form.credentials()).await {
        Ok(resp) => match resp.into_token() {
            Some(token) => {
                session.write(&token);
                log::info!("created account {}", form.username);
                AuthOutcome::SignedIn { to: routes::PROFILE, notice: SIGNUP_SUCCEEDED }
            }
            None => {
                log::warn!("auto-login after signup carried no token");
                AuthOutcome::NoToken
            }
        },
        Err(err) => {
            log::warn!("auto-login after signup failed: {err}");
            AuthOutcome::Failed(failure_message(&err, SIGNUP_FAILED))
        }
    }
}

/// Server `msg` when present, otherwise `fallback`.
#[must_use]
pub fn failure_message(err: &ApiError, fallback: &str) -> String {
    err.server_message().unwrap_or(fallback).to_owned()
}

/// Build login credentials from raw form input. Email is trimmed; the
/// password is sent as typed.
#[must_use]
pub fn credentials_from_input(email: &str, password: &str) -> Credentials {
    Credentials { email: email.trim().to_owned(), password: password.to_owned() }
}

/// Build a signup form from raw input, trimming username and email.
#[must_use]
pub fn signup_from_input(username: &str, email: &str, password: &str) -> SignupForm {
    SignupForm {
        username: username.trim().to_owned(),
        email: email.trim().to_owned(),
        password: password.to_owned(),
    }
}
