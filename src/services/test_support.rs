//! In-memory fakes for the API and session seams.

use std::cell::RefCell;

use crate::net::api::PhotoApi;
use crate::net::error::ApiError;
use crate::net::types::{Credentials, Photo, Profile, SignupForm, TokenResponse};
use crate::net::upload::SelectedFile;
use crate::state::session::{SessionStore, non_empty};

/// Canned-response [`PhotoApi`] that records every call it receives.
///
/// Unconfigured endpoints answer [`ApiError::Unavailable`].
#[derive(Default)]
pub(crate) struct FakeApi {
    login: Option<Result<TokenResponse, ApiError>>,
    signup: Option<Result<(), ApiError>>,
    profile: Option<Result<Profile, ApiError>>,
    upload: Option<Result<Photo, ApiError>>,
    avatar: Option<Result<String, ApiError>>,
    delete: Option<Result<(), ApiError>>,
    calls: RefCell<Vec<String>>,
}

impl FakeApi {
    pub fn with_login(mut self, result: Result<TokenResponse, ApiError>) -> Self {
        self.login = Some(result);
        self
    }

    pub fn with_signup(mut self, result: Result<(), ApiError>) -> Self {
        self.signup = Some(result);
        self
    }

    pub fn with_profile(mut self, result: Result<Profile, ApiError>) -> Self {
        self.profile = Some(result);
        self
    }

    pub fn with_upload(mut self, result: Result<Photo, ApiError>) -> Self {
        self.upload = Some(result);
        self
    }

    pub fn with_avatar(mut self, result: Result<String, ApiError>) -> Self {
        self.avatar = Some(result);
        self
    }

    pub fn with_delete(mut self, result: Result<(), ApiError>) -> Self {
        self.delete = Some(result);
        self
    }

    /// Calls received so far, as `"<op> <arg>"` strings.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

fn canned<T: Clone>(slot: Option<&Result<T, ApiError>>) -> Result<T, ApiError> {
    slot.cloned().unwrap_or(Err(ApiError::Unavailable))
}

impl PhotoApi for FakeApi {
    async fn login(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        self.record(format!("login {}", credentials.email));
        canned(self.login.as_ref())
    }

    async fn signup(&self, form: &SignupForm) -> Result<(), ApiError> {
        self.record(format!("signup {}", form.username));
        canned(self.signup.as_ref())
    }

    async fn fetch_profile(&self, token: &str) -> Result<Profile, ApiError> {
        self.record(format!("profile {token}"));
        canned(self.profile.as_ref())
    }

    async fn upload_photo(&self, token: &str, file: &SelectedFile) -> Result<Photo, ApiError> {
        self.record(format!("upload {token} {}", file.name()));
        canned(self.upload.as_ref())
    }

    async fn upload_avatar(&self, token: &str, file: &SelectedFile) -> Result<String, ApiError> {
        self.record(format!("avatar {token} {}", file.name()));
        canned(self.avatar.as_ref())
    }

    async fn delete_photo(&self, token: &str, photo_id: &str) -> Result<(), ApiError> {
        self.record(format!("delete {token} {photo_id}"));
        canned(self.delete.as_ref())
    }
}

/// [`SessionStore`] held in memory.
#[derive(Default)]
pub(crate) struct MemorySession {
    token: RefCell<Option<String>>,
}

impl MemorySession {
    pub fn signed_in(token: &str) -> Self {
        Self { token: RefCell::new(Some(token.to_owned())) }
    }
}

impl SessionStore for MemorySession {
    fn read(&self) -> Option<String> {
        self.token.borrow().clone().and_then(non_empty)
    }

    fn write(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

pub(crate) fn token(value: &str) -> TokenResponse {
    TokenResponse { token: Some(value.to_owned()) }
}

pub(crate) fn unauthorized() -> ApiError {
    ApiError::Status { status: 401, message: Some("Invalid token".to_owned()) }
}
