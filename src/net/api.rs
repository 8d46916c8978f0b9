//! REST client for the remote photo API.
//!
//! Browser builds (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: every call returns [`ApiError::Unavailable`] so the crate
//! still compiles and the orchestration layer can be tested against fakes.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses are turned into [`ApiError::Status`] carrying the
//! server's `msg` when the body had one. Nothing here panics or retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{Credentials, Photo, Profile, SignupForm, TokenResponse};
use super::upload::SelectedFile;
use crate::config::ApiConfig;

#[cfg(any(test, feature = "csr"))]
const LOGIN_PATH: &str = "auth/login";
#[cfg(any(test, feature = "csr"))]
const SIGNUP_PATH: &str = "auth/signup";
#[cfg(any(test, feature = "csr"))]
const PROFILE_PATH: &str = "photos/me";
#[cfg(any(test, feature = "csr"))]
const UPLOAD_PATH: &str = "photos/upload";
#[cfg(any(test, feature = "csr"))]
const AVATAR_PATH: &str = "photos/avatar";

/// Multipart field carrying a gallery photo.
pub const PHOTO_FIELD: &str = "photo";
/// Multipart field carrying an avatar image.
pub const AVATAR_FIELD: &str = "avatar";

#[cfg(any(test, feature = "csr"))]
fn photo_path(photo_id: &str) -> String {
    format!("photos/{photo_id}")
}

#[cfg(any(test, feature = "csr"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Operations the UI needs from the remote service.
///
/// Authenticated calls take the bearer token explicitly; the caller owns the
/// session.
#[allow(async_fn_in_trait)]
pub trait PhotoApi {
    /// `POST /auth/login`.
    async fn login(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError>;
    /// `POST /auth/signup`.
    async fn signup(&self, form: &SignupForm) -> Result<(), ApiError>;
    /// `GET /photos/me`.
    async fn fetch_profile(&self, token: &str) -> Result<Profile, ApiError>;
    /// `POST /photos/upload`, returning the stored photo.
    async fn upload_photo(&self, token: &str, file: &SelectedFile) -> Result<Photo, ApiError>;
    /// `POST /photos/avatar`, returning the new avatar URL.
    async fn upload_avatar(&self, token: &str, file: &SelectedFile) -> Result<String, ApiError>;
    /// `DELETE /photos/:id`.
    async fn delete_photo(&self, token: &str, photo_id: &str) -> Result<(), ApiError>;
}

/// `gloo-net` backed [`PhotoApi`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpPhotoApi {
    config: ApiConfig,
}

impl HttpPhotoApi {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[cfg(feature = "csr")]
mod http {
    use gloo_net::http::{Request, Response};
    use serde::de::DeserializeOwned;

    use super::{ApiError, SelectedFile};

    pub(super) fn transport(err: impl std::fmt::Display) -> ApiError {
        ApiError::Transport(err.to_string())
    }

    pub(super) fn browser(err: &wasm_bindgen::JsValue) -> ApiError {
        ApiError::Browser(format!("{err:?}"))
    }

    /// Pass 2xx responses through; turn anything else into a status error.
    pub(super) async fn ensure_ok(resp: Response) -> Result<Response, ApiError> {
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        log::warn!("{} {} -> {status}", resp.url(), resp.status_text());
        Err(ApiError::from_response(status, &body))
    }

    pub(super) async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        let resp = ensure_ok(resp).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(super) async fn send_multipart(
        url: &str,
        authorization: &str,
        field: &str,
        file: &SelectedFile,
    ) -> Result<Response, ApiError> {
        let form = web_sys::FormData::new().map_err(|e| browser(&e))?;
        form.append_with_blob(field, file.file()).map_err(|e| browser(&e))?;
        // The browser sets the multipart boundary header itself.
        Request::post(url)
            .header("Authorization", authorization)
            .body(form)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)
    }
}

impl PhotoApi for HttpPhotoApi {
    async fn login(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.config.endpoint(LOGIN_PATH))
                .json(credentials)
                .map_err(http::transport)?
                .send()
                .await
                .map_err(http::transport)?;
            http::read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
            Err(ApiError::Unavailable)
        }
    }

    async fn signup(&self, form: &SignupForm) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.config.endpoint(SIGNUP_PATH))
                .json(form)
                .map_err(http::transport)?
                .send()
                .await
                .map_err(http::transport)?;
            http::ensure_ok(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = form;
            Err(ApiError::Unavailable)
        }
    }

    async fn fetch_profile(&self, token: &str) -> Result<Profile, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.config.endpoint(PROFILE_PATH))
                .header("Authorization", &bearer(token))
                .send()
                .await
                .map_err(http::transport)?;
            http::read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Err(ApiError::Unavailable)
        }
    }

    async fn upload_photo(&self, token: &str, file: &SelectedFile) -> Result<Photo, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = self.config.endpoint(UPLOAD_PATH);
            let resp = http::send_multipart(&url, &bearer(token), PHOTO_FIELD, file).await?;
            let body: super::types::UploadPhotoResponse = http::read_json(resp).await?;
            Ok(body.photo)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, file);
            Err(ApiError::Unavailable)
        }
    }

    async fn upload_avatar(&self, token: &str, file: &SelectedFile) -> Result<String, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = self.config.endpoint(AVATAR_PATH);
            let resp = http::send_multipart(&url, &bearer(token), AVATAR_FIELD, file).await?;
            let body: super::types::AvatarResponse = http::read_json(resp).await?;
            Ok(body.avatar)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, file);
            Err(ApiError::Unavailable)
        }
    }

    async fn delete_photo(&self, token: &str, photo_id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::delete(&self.config.endpoint(&photo_path(photo_id)))
                .header("Authorization", &bearer(token))
                .send()
                .await
                .map_err(http::transport)?;
            http::ensure_ok(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, photo_id);
            Err(ApiError::Unavailable)
        }
    }
}
